//! Protobuf schema for the subset of TensorFlow's `RunMetadata` we read.
//!
//! Field tags mirror `tensorflow/core/framework/step_stats.proto` and
//! `tensorflow/core/protobuf/config.proto`. Fields we never look at
//! (cost graph, partition graphs, memory stats, outputs) are left out;
//! prost skips unknown fields while decoding.

use std::collections::HashMap;

/// Top-level record written by `tf.compat.v1.RunMetadata.SerializeToString`
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct RunMetadata {
    #[prost(message, optional, tag = "1")]
    pub step_stats: ::core::option::Option<StepStats>,
}

/// Timing data for one execution step
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct StepStats {
    #[prost(message, repeated, tag = "1")]
    pub dev_stats: ::prost::alloc::vec::Vec<DeviceStepStats>,
}

/// Nodes executed on a single device
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct DeviceStepStats {
    #[prost(string, tag = "1")]
    pub device: ::prost::alloc::string::String,

    #[prost(message, repeated, tag = "2")]
    pub node_stats: ::prost::alloc::vec::Vec<NodeExecStats>,

    /// Thread id → thread name
    #[prost(map = "uint32, string", tag = "3")]
    pub thread_names: HashMap<u32, ::prost::alloc::string::String>,
}

/// One profiled operation instance
#[derive(Clone, PartialEq, ::prost::Message)]
pub struct NodeExecStats {
    #[prost(string, tag = "1")]
    pub node_name: ::prost::alloc::string::String,

    #[prost(int64, tag = "2")]
    pub all_start_micros: i64,

    #[prost(int64, tag = "3")]
    pub op_start_rel_micros: i64,

    #[prost(int64, tag = "4")]
    pub op_end_rel_micros: i64,

    #[prost(int64, tag = "5")]
    pub all_end_rel_micros: i64,

    #[prost(string, tag = "8")]
    pub timeline_label: ::prost::alloc::string::String,

    #[prost(int64, tag = "9")]
    pub scheduled_micros: i64,

    #[prost(uint32, tag = "10")]
    pub thread_id: u32,

    #[prost(int64, tag = "13")]
    pub all_start_nanos: i64,

    #[prost(int64, tag = "14")]
    pub op_start_rel_nanos: i64,

    #[prost(int64, tag = "15")]
    pub op_end_rel_nanos: i64,

    #[prost(int64, tag = "16")]
    pub all_end_rel_nanos: i64,

    #[prost(int64, tag = "17")]
    pub scheduled_nanos: i64,
}

impl RunMetadata {
    /// Iterate `(device, node)` pairs, devices outer and nodes inner
    pub fn nodes(&self) -> impl Iterator<Item = (&DeviceStepStats, &NodeExecStats)> {
        self.step_stats
            .iter()
            .flat_map(|step| step.dev_stats.iter())
            .flat_map(|dev| dev.node_stats.iter().map(move |node| (dev, node)))
    }
}

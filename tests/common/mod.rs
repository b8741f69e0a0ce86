#![allow(dead_code)]

use prost::Message;
use runmeta_viz::parser::{DeviceStepStats, NodeExecStats, RunMetadata, StepStats};
use std::path::{Path, PathBuf};

/// Node with fixed phase offsets: op runs from +10 to +10+in_op, node ends 5 later
pub fn node(name: &str, all_start_nanos: i64, in_op: i64) -> NodeExecStats {
    NodeExecStats {
        node_name: name.to_string(),
        all_start_nanos,
        op_start_rel_nanos: 10,
        op_end_rel_nanos: 10 + in_op,
        all_end_rel_nanos: 15 + in_op,
        scheduled_nanos: all_start_nanos,
        timeline_label: format!("{} = Op()", name),
        ..Default::default()
    }
}

pub fn trace(devices: Vec<(&str, Vec<NodeExecStats>)>) -> RunMetadata {
    RunMetadata {
        step_stats: Some(StepStats {
            dev_stats: devices
                .into_iter()
                .map(|(device, node_stats)| DeviceStepStats {
                    device: device.to_string(),
                    node_stats,
                    ..Default::default()
                })
                .collect(),
        }),
    }
}

/// Encode `trace` into `dir/name`
pub fn write_trace(dir: &Path, name: &str, trace: &RunMetadata) -> PathBuf {
    let path = dir.join(name);
    std::fs::write(&path, trace.encode_to_vec()).unwrap();
    path
}

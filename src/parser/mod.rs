//! Trace loading and schema definitions.
//!
//! This module handles:
//! - The protobuf schema of RunMetadata / StepStats
//! - Reading and decoding trace files

pub mod run_metadata;
pub mod schema;

// Re-export main types
pub use run_metadata::{decode_run_metadata, load_run_metadata, TraceSummary};
pub use schema::{DeviceStepStats, NodeExecStats, RunMetadata, StepStats};

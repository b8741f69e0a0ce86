//! RunMetadata trace loader.
//!
//! Reads a whole trace file into memory and decodes it. There is no
//! streaming mode: RunMetadata is a single protobuf message.

use super::schema::RunMetadata;
use crate::utils::error::ParseError;
use log::{debug, info};
use prost::Message;
use std::path::Path;

/// Counts reported after a trace is loaded
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TraceSummary {
    pub device_count: usize,
    pub node_count: usize,
}

impl TraceSummary {
    pub fn of(trace: &RunMetadata) -> Self {
        let device_count = trace
            .step_stats
            .as_ref()
            .map_or(0, |step| step.dev_stats.len());

        Self {
            device_count,
            node_count: trace.nodes().count(),
        }
    }
}

/// Load and decode a RunMetadata file
///
/// **Public** - main entry point for parsing
///
/// # Errors
/// * `ParseError::ReadFailed` - file missing or unreadable
/// * `ParseError::DecodeFailed` - bytes are not a RunMetadata message
pub fn load_run_metadata(path: impl AsRef<Path>) -> Result<RunMetadata, ParseError> {
    let path = path.as_ref();

    info!("Reading trace: {}", path.display());

    let bytes = std::fs::read(path).map_err(|source| ParseError::ReadFailed {
        path: path.to_path_buf(),
        source,
    })?;

    debug!("Read {} bytes", bytes.len());

    decode_run_metadata(&bytes)
}

/// Decode an in-memory RunMetadata buffer
pub fn decode_run_metadata(bytes: &[u8]) -> Result<RunMetadata, ParseError> {
    let trace = RunMetadata::decode(bytes)?;

    let summary = TraceSummary::of(&trace);
    debug!(
        "Decoded trace: {} devices, {} nodes",
        summary.device_count, summary.node_count
    );

    Ok(trace)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{DeviceStepStats, NodeExecStats, StepStats};
    use std::io::Write;
    use tempfile::NamedTempFile;

    fn sample_trace() -> RunMetadata {
        RunMetadata {
            step_stats: Some(StepStats {
                dev_stats: vec![DeviceStepStats {
                    device: "/job:localhost/replica:0/task:0/device:CPU:0".to_string(),
                    node_stats: vec![NodeExecStats {
                        node_name: "MatMul".to_string(),
                        all_start_nanos: 1_000,
                        op_end_rel_nanos: 40,
                        all_end_rel_nanos: 50,
                        ..Default::default()
                    }],
                    ..Default::default()
                }],
            }),
        }
    }

    #[test]
    fn test_load_round_trips_file() {
        let trace = sample_trace();
        let mut file = NamedTempFile::new().unwrap();
        file.write_all(&trace.encode_to_vec()).unwrap();

        let loaded = load_run_metadata(file.path()).unwrap();
        assert_eq!(loaded, trace);
    }

    #[test]
    fn test_load_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let result = load_run_metadata(dir.path().join("absent.pb"));
        assert!(matches!(result, Err(ParseError::ReadFailed { .. })));
    }

    #[test]
    fn test_decode_truncated_buffer() {
        // field 1, length-delimited, claims 5 bytes but carries 1
        let result = decode_run_metadata(&[0x0A, 0x05, 0x01]);
        assert!(matches!(result, Err(ParseError::DecodeFailed(_))));
    }

    #[test]
    fn test_empty_buffer_is_empty_trace() {
        let trace = decode_run_metadata(&[]).unwrap();
        assert_eq!(TraceSummary::of(&trace), TraceSummary::default());
    }

    #[test]
    fn test_summary_counts() {
        let summary = TraceSummary::of(&sample_trace());
        assert_eq!(summary.device_count, 1);
        assert_eq!(summary.node_count, 1);
    }
}

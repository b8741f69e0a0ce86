//! JSON event report writer.
//!
//! Writes the event table to a JSON file with proper formatting.

use super::prepare_path;
use crate::aggregator::{EventRecord, EventTable};
use crate::utils::config::REPORT_SCHEMA_VERSION;
use crate::utils::error::OutputError;
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs::File;
use std::io::{BufReader, BufWriter, Write};
use std::path::Path;

/// Top-level report structure written to JSON
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EventReport {
    /// Schema version for compatibility checking
    pub version: String,

    /// Trace the events were extracted from
    pub source: String,

    /// Timestamp when the report was generated
    pub generated_at: String,

    /// One entry per table row, in table order
    pub events: Vec<EventRecord>,
}

impl EventReport {
    pub fn new(source: impl Into<String>, table: &EventTable) -> Self {
        use chrono::Utc;

        Self {
            version: REPORT_SCHEMA_VERSION.to_string(),
            source: source.into(),
            generated_at: Utc::now().to_rfc3339(),
            events: table.rows().to_vec(),
        }
    }
}

/// Write a report to a pretty-printed JSON file
///
/// **Public** - main entry point for JSON output
///
/// # Errors
/// * `OutputError::WriteFailed` - I/O error during write
/// * `OutputError::SerializationFailed` - JSON serialization error
/// * `OutputError::InvalidPath` - Path cannot be created or is invalid
pub fn write_event_report(
    report: &EventReport,
    output_path: impl AsRef<Path>,
) -> Result<(), OutputError> {
    let output_path = output_path.as_ref();

    info!("Writing event report to: {}", output_path.display());

    prepare_path(output_path)?;

    let file = File::create(output_path)?;
    let mut writer = BufWriter::new(file);

    serde_json::to_writer_pretty(&mut writer, report)?;
    writer.flush()?;

    debug!("Event report written ({} events)", report.events.len());

    Ok(())
}

/// Read a report back from disk
pub fn read_event_report(input_path: impl AsRef<Path>) -> Result<EventReport, OutputError> {
    let file = File::open(input_path.as_ref())?;
    let report = serde_json::from_reader(BufReader::new(file))?;
    Ok(report)
}

//! Output writers for charts and event reports.
//!
//! This module handles writing data to disk in various formats:
//! - PNG charts
//! - JSON event reports
//! - Chart path derivation from the trace path

pub mod json;
pub mod png;

// Re-export main functions
pub use self::json::{read_event_report, write_event_report, EventReport};
pub use self::png::{encode_png, write_png};

use crate::utils::config::{CHART_EXTENSION, TRACE_EXTENSION};
use crate::utils::error::OutputError;
use log::debug;
use std::path::{Path, PathBuf};

/// Chart path for a trace: a trailing `.pb` becomes `.png`
///
/// Any other path, including one that is not valid UTF-8, comes back
/// unchanged.
pub fn derive_output_path(trace_path: &Path) -> PathBuf {
    match trace_path
        .to_str()
        .and_then(|s| s.strip_suffix(TRACE_EXTENSION))
    {
        Some(stem) => PathBuf::from(format!("{}{}", stem, CHART_EXTENSION)),
        None => trace_path.to_path_buf(),
    }
}

/// Common path validation for output files
pub fn validate_path(path: &Path) -> Result<(), OutputError> {
    if path.as_os_str().is_empty() {
        return Err(OutputError::InvalidPath("Path is empty".to_string()));
    }

    if path.exists() && path.is_dir() {
        return Err(OutputError::InvalidPath(format!(
            "Path is a directory: {}",
            path.display()
        )));
    }

    Ok(())
}

/// Validate `path` and create its parent directories
fn prepare_path(path: &Path) -> Result<(), OutputError> {
    validate_path(path)?;

    if let Some(parent) = path.parent() {
        if !parent.as_os_str().is_empty() && !parent.exists() {
            debug!("Creating parent directories: {}", parent.display());
            std::fs::create_dir_all(parent).map_err(|e| {
                OutputError::InvalidPath(format!("Cannot create directory: {}", e))
            })?;
        }
    }

    Ok(())
}

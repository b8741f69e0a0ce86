//! Error types for the entire application.
//!
//! We use `thiserror` for library-style errors with custom types,
//! and `anyhow` for application-level error propagation in main.rs and commands.

use std::path::PathBuf;
use thiserror::Error;

/// Errors that can occur while loading a RunMetadata trace
#[derive(Error, Debug)]
pub enum ParseError {
    #[error("Failed to read trace {path:?}: {source}")]
    ReadFailed {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Trace does not match the RunMetadata schema: {0}")]
    DecodeFailed(#[from] prost::DecodeError),
}

/// Errors that can occur while building the event table
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Duplicate node name in trace: {0}")]
    DuplicateName(String),
}

/// Errors that can occur during chart rendering
#[derive(Error, Debug)]
pub enum ChartError {
    #[error("Invalid chart dimensions: {0}")]
    InvalidDimensions(String),

    #[error("Unknown color map: {0}")]
    UnknownColorMap(String),
}

/// Errors that can occur during file output
#[derive(Error, Debug)]
pub enum OutputError {
    #[error("Failed to write file: {0}")]
    WriteFailed(#[from] std::io::Error),

    #[error("Failed to serialize JSON: {0}")]
    SerializationFailed(#[from] serde_json::Error),

    #[error("Failed to encode PNG: {0}")]
    EncodingFailed(#[from] png::EncodingError),

    #[error("Invalid output path: {0}")]
    InvalidPath(String),
}

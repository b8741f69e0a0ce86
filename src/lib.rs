//! Runmeta Viz
//!
//! Stacked timeline charts for TensorFlow RunMetadata profiling traces.
//!
//! This crate provides the core implementation for the
//! `runmeta-viz` CLI tool: it decodes a RunMetadata protobuf, turns every
//! node's step stats into step-relative timings, and draws the slowest
//! operations as a stacked horizontal bar chart.
//!
//! ## Getting Started
//!
//! ```bash
//! cargo install runmeta-viz
//! runmeta-viz --runmetadata_file=step_100.pb --top_n=30
//! ```
//!
//! The chart lands next to the trace as `step_100.png`.

pub mod aggregator;
pub mod chart;
pub mod commands;
pub mod output;
pub mod parser;
pub mod utils;

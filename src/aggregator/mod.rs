//! Aggregation of node stats into event records.
//!
//! This module transforms a decoded RunMetadata into:
//! - Event records with step-relative timings
//! - An event table keyed by node name

pub mod events;
pub mod table;

// Re-export main types and functions
pub use events::{extract_events, EventRecord};
pub use table::{DuplicatePolicy, EventTable};

//! CLI command implementations.
//!
//! Commands orchestrate the various library components to perform user tasks.

pub mod models;
pub mod visualize;

// Re-export main command functions
pub use models::{VisualizeArgs, VisualizeOutcome};
pub use visualize::{execute_visualize, execute_visualize_with, validate_args};

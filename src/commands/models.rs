use crate::aggregator::DuplicatePolicy;
use crate::chart::ChartConfig;
use std::path::PathBuf;

/// Arguments for the visualize command
///
/// **Public** - used by main.rs to construct from CLI args
#[derive(Debug, Clone)]
pub struct VisualizeArgs {
    /// RunMetadata file to read
    pub runmetadata_file: PathBuf,

    /// Plot only the N operations with the largest in-op time
    pub top_n: Option<usize>,

    /// Chart path; derived from `runmetadata_file` when unset
    pub output: Option<PathBuf>,

    /// Also write the event table as JSON
    pub json_output: Option<PathBuf>,

    /// Pin a named color map instead of picking one at random
    pub color_map: Option<String>,

    /// Seed for the random color map pick
    pub seed: Option<u64>,

    /// How repeated node names are handled
    pub duplicate_policy: DuplicatePolicy,

    /// Chart configuration
    pub chart_config: ChartConfig,

    /// Print text summary to stdout
    pub print_summary: bool,
}

impl Default for VisualizeArgs {
    fn default() -> Self {
        Self {
            runmetadata_file: PathBuf::new(),
            top_n: None,
            output: None,
            json_output: None,
            color_map: None,
            seed: None,
            duplicate_policy: DuplicatePolicy::LastWins,
            chart_config: ChartConfig::default(),
            print_summary: false,
        }
    }
}

/// Files produced by one run
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualizeOutcome {
    pub chart_path: PathBuf,
    pub json_path: Option<PathBuf>,
    pub rows_plotted: usize,
}

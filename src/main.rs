//! Runmeta Viz CLI
//!
//! Renders the slowest operations of a TensorFlow RunMetadata trace as a
//! stacked horizontal bar chart.

use anyhow::Result;
use clap::{Parser, ValueEnum};
use env_logger::Env;
use std::path::PathBuf;

use runmeta_viz::aggregator::DuplicatePolicy;
use runmeta_viz::chart::ChartConfig;
use runmeta_viz::commands::{execute_visualize, validate_args, VisualizeArgs};
use runmeta_viz::utils::config::DEFAULT_CHART_WIDTH;

/// Runmeta Viz - stacked timeline charts for RunMetadata traces
#[derive(Parser, Debug)]
#[command(name = "runmeta-viz")]
#[command(version, about, long_about = None)]
struct Cli {
    /// RunMetadata file path
    #[arg(long = "runmetadata_file", value_name = "PATH")]
    runmetadata_file: PathBuf,

    /// Top N operations to show
    #[arg(long = "top_n", value_name = "N")]
    top_n: Option<usize>,

    /// Output path for the PNG chart (defaults to the trace path with .pb -> .png)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Also write the event table as JSON
    #[arg(long)]
    json: Option<PathBuf>,

    /// Color map name (random when omitted)
    #[arg(long)]
    colormap: Option<String>,

    /// Seed for the random color map
    #[arg(long)]
    seed: Option<u64>,

    /// How to handle repeated node names
    #[arg(long = "on_duplicate", value_enum, default_value_t = OnDuplicate::LastWins)]
    on_duplicate: OnDuplicate,

    /// Chart width in pixels
    #[arg(long, default_value_t = DEFAULT_CHART_WIDTH)]
    width: u32,

    /// Chart title
    #[arg(long)]
    title: Option<String>,

    /// Print text summary to stdout
    #[arg(long)]
    summary: bool,

    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

#[derive(ValueEnum, Clone, Copy, Debug)]
enum OnDuplicate {
    /// Keep the last record seen for a name
    LastWins,
    /// Fail on the first repeated name
    Error,
}

impl From<OnDuplicate> for DuplicatePolicy {
    fn from(value: OnDuplicate) -> Self {
        match value {
            OnDuplicate::LastWins => DuplicatePolicy::LastWins,
            OnDuplicate::Error => DuplicatePolicy::Reject,
        }
    }
}

fn main() -> Result<()> {
    // Parse CLI arguments
    let cli = Cli::parse();

    // Setup logging
    let log_level = if cli.verbose { "debug" } else { "info" };
    env_logger::Builder::from_env(Env::default().default_filter_or(log_level)).init();

    let mut chart_config = ChartConfig::new().with_width(cli.width);
    if let Some(title) = cli.title {
        chart_config = chart_config.with_title(title);
    }

    let args = VisualizeArgs {
        runmetadata_file: cli.runmetadata_file,
        top_n: cli.top_n,
        output: cli.output,
        json_output: cli.json,
        color_map: cli.colormap,
        seed: cli.seed,
        duplicate_policy: cli.on_duplicate.into(),
        chart_config,
        print_summary: cli.summary,
    };

    // Validate args first
    validate_args(&args)?;

    execute_visualize(args)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_requires_runmetadata_file() {
        assert!(Cli::try_parse_from(["runmeta-viz"]).is_err());
    }

    #[test]
    fn test_parses_equals_flags() {
        let cli = Cli::try_parse_from([
            "runmeta-viz",
            "--runmetadata_file=step.pb",
            "--top_n=5",
            "--on_duplicate=error",
        ])
        .unwrap();

        assert_eq!(cli.runmetadata_file, PathBuf::from("step.pb"));
        assert_eq!(cli.top_n, Some(5));
        assert!(matches!(cli.on_duplicate, OnDuplicate::Error));
        assert_eq!(cli.width, DEFAULT_CHART_WIDTH);
    }
}

//! Visualize command implementation.
//!
//! The visualize command:
//! 1. Loads the RunMetadata trace
//! 2. Extracts step-relative events
//! 3. Builds the event table
//! 4. Renders the stacked bar chart
//! 5. Writes output files

use super::models::{VisualizeArgs, VisualizeOutcome};
use crate::aggregator::{extract_events, EventTable};
use crate::chart::{
    generate_text_summary, render_event_chart, select_rows, ColorMapProvider, FixedColorMap,
    RandomColorMap,
};
use crate::output::{derive_output_path, write_event_report, write_png, EventReport};
use crate::parser::{load_run_metadata, TraceSummary};
use crate::utils::config::{MAX_CHART_WIDTH, MIN_CHART_WIDTH};
use anyhow::{Context, Result};
use log::{debug, info};
use std::path::PathBuf;
use std::time::Instant;

/// Execute the visualize command with the color map provider `args` asks for
///
/// **Public** - main entry point called from main.rs
pub fn execute_visualize(args: VisualizeArgs) -> Result<VisualizeOutcome> {
    let mut provider = color_map_provider(&args)?;
    execute_visualize_with(args, provider.as_mut())
}

/// Execute the visualize command with an injected color map provider
///
/// # Errors
/// * Trace read or decode failures
/// * Empty trace
/// * Duplicate node names under the reject policy
/// * Chart would overwrite the trace
/// * File write errors
pub fn execute_visualize_with(
    args: VisualizeArgs,
    provider: &mut dyn ColorMapProvider,
) -> Result<VisualizeOutcome> {
    let start_time = Instant::now();

    let chart_path = resolve_chart_path(&args)?;

    // Step 1: Load trace
    info!("Step 1/5: Loading trace...");
    let trace = load_run_metadata(&args.runmetadata_file).with_context(|| {
        format!(
            "Failed to load RunMetadata from {}",
            args.runmetadata_file.display()
        )
    })?;

    let summary = TraceSummary::of(&trace);
    info!(
        "Trace has {} devices, {} nodes",
        summary.device_count, summary.node_count
    );

    // Step 2: Extract events
    info!("Step 2/5: Extracting events...");
    let events = extract_events(&trace);
    if events.is_empty() {
        anyhow::bail!(
            "trace contains no node stats: {}",
            args.runmetadata_file.display()
        );
    }

    // Step 3: Build table
    info!("Step 3/5: Building event table...");
    let table = EventTable::build(events, args.duplicate_policy)
        .context("Failed to build event table")?;

    debug!("Event table: {} rows", table.len());

    // Step 4: Render chart
    match args.top_n {
        Some(n) => info!("Step 4/5: Rendering top {} operations...", n),
        None => info!("Step 4/5: Rendering all {} operations...", table.len()),
    }
    let image = render_event_chart(&table, args.top_n, provider, &args.chart_config)
        .context("Failed to render chart")?;

    let rows_plotted = args.top_n.map_or(table.len(), |n| n.min(table.len()));

    // Step 5: Write outputs
    info!("Step 5/5: Writing output files...");
    write_png(&image, &chart_path).context("Failed to write chart PNG")?;
    info!("✓ Chart written to: {}", chart_path.display());

    if let Some(json_path) = &args.json_output {
        let report = EventReport::new(args.runmetadata_file.display().to_string(), &table);
        write_event_report(&report, json_path).context("Failed to write event report")?;
        info!("✓ Event report written to: {}", json_path.display());
    }

    if args.print_summary {
        let rows = select_rows(&table, args.top_n);
        println!("\n{}", "=".repeat(80));
        println!("RUNMETADATA SUMMARY");
        println!("{}", "=".repeat(80));
        println!("Trace:      {}", args.runmetadata_file.display());
        println!("Devices:    {}", summary.device_count);
        println!("Operations: {}", table.len());
        println!("\n{}", generate_text_summary(&rows, 20));
        println!("{}", "=".repeat(80));
    }

    let elapsed = start_time.elapsed();
    info!("Visualization completed in {:.2}s", elapsed.as_secs_f64());

    Ok(VisualizeOutcome {
        chart_path,
        json_path: args.json_output,
        rows_plotted,
    })
}

/// Validate visualize arguments
///
/// **Public** - can be called before execute_visualize for early validation
pub fn validate_args(args: &VisualizeArgs) -> Result<()> {
    if args.runmetadata_file.as_os_str().is_empty() {
        anyhow::bail!("--runmetadata_file cannot be empty");
    }

    if args.top_n == Some(0) {
        anyhow::bail!("--top_n must be greater than 0");
    }

    let width = args.chart_config.width;
    if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&width) {
        anyhow::bail!(
            "--width must be between {} and {}",
            MIN_CHART_WIDTH,
            MAX_CHART_WIDTH
        );
    }

    if let Some(name) = &args.color_map {
        FixedColorMap::named(name)?;
    }

    Ok(())
}

/// Chart path for this run, refusing to overwrite the trace itself
///
/// **Private** - internal helper for execute_visualize_with
fn resolve_chart_path(args: &VisualizeArgs) -> Result<PathBuf> {
    let chart_path = args
        .output
        .clone()
        .unwrap_or_else(|| derive_output_path(&args.runmetadata_file));

    if chart_path == args.runmetadata_file {
        anyhow::bail!(
            "Refusing to overwrite the input trace {} with the chart; pass --output",
            chart_path.display()
        );
    }

    Ok(chart_path)
}

/// Provider for `args`: fixed when a map is named, random otherwise
///
/// **Private** - internal helper for execute_visualize
fn color_map_provider(args: &VisualizeArgs) -> Result<Box<dyn ColorMapProvider>> {
    match &args.color_map {
        Some(name) => Ok(Box::new(FixedColorMap::named(name)?)),
        None => Ok(Box::new(RandomColorMap::new(args.seed))),
    }
}

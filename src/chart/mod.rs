//! Stacked bar chart rendering.
//!
//! This module turns an event table into a PNG-ready raster:
//! - Row selection (top N by `in_op`, ordered by start/duration)
//! - Color map choice behind an injectable provider
//! - Rasterization with a built-in bitmap font
//! - A plain-text summary for terminals

pub mod canvas;
pub mod colormap;
pub mod font;
pub mod renderer;
pub mod selection;
pub mod summary;

// Re-export main types
pub use canvas::ChartImage;
pub use colormap::{
    find_color_map, ColorMap, ColorMapProvider, FixedColorMap, RandomColorMap, Rgb, COLOR_MAPS,
};
pub use renderer::{format_nanos, render_chart, ChartConfig, SEGMENT_COLORS};
pub use selection::{plot_rows, select_rows, PlotRow};
pub use summary::generate_text_summary;

use crate::aggregator::EventTable;
use crate::utils::error::ChartError;

/// Select, order and draw the rows of `table`
///
/// **Public** - used by the visualize command
pub fn render_event_chart(
    table: &EventTable,
    top_n: Option<usize>,
    provider: &mut dyn ColorMapProvider,
    config: &ChartConfig,
) -> Result<ChartImage, ChartError> {
    let rows = select_rows(table, top_n);
    let color_map = provider.color_map();
    render_chart(&plot_rows(&rows), config, color_map)
}

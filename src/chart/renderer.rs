//! Stacked horizontal bar chart rasterizer.
//!
//! Layout, top to bottom: title, plot area (one band per row, first row at
//! the bottom), x axis with tick labels, legend.

use super::canvas::{text_width, ChartImage};
use super::colormap::{ColorMap, Rgb};
use super::selection::PlotRow;
use crate::utils::config::{
    DEFAULT_CHART_TITLE, DEFAULT_CHART_WIDTH, DEFAULT_ROW_HEIGHT, GLYPH_ADVANCE, GLYPH_HEIGHT,
    MAX_CHART_HEIGHT, MAX_CHART_WIDTH, MAX_LABEL_CHARS, MIN_CHART_WIDTH, PHASE_COLUMNS,
};
use crate::utils::error::ChartError;
use log::{debug, info};

/// Segment colors, in stacking order
pub const SEGMENT_COLORS: [Rgb; 4] = [Rgb::WHITE, Rgb::ORANGE, Rgb::GREEN, Rgb::RED];

const MARGIN: u32 = 10;
const TITLE_SCALE: u32 = 2;
const TITLE_AREA: u32 = 40;
const RIGHT_MARGIN: u32 = 24;
const TICK_LENGTH: u32 = 4;
const TICK_COUNT: u32 = 5;
const LEGEND_SWATCH: u32 = 10;
const LEGEND_SPACING: u32 = 24;
const BOTTOM_AREA: u32 = 60;
const MIN_PLOT_WIDTH: u32 = 50;
const BAND_TINT: f64 = 0.85;

/// Rows thinner than this are drawn without labels
const LABEL_MIN_ROW_HEIGHT: u32 = GLYPH_HEIGHT + 2;

/// Chart configuration
#[derive(Debug, Clone)]
pub struct ChartConfig {
    pub title: String,
    pub width: u32,
    pub row_height: u32,
}

impl Default for ChartConfig {
    fn default() -> Self {
        Self {
            title: DEFAULT_CHART_TITLE.to_string(),
            width: DEFAULT_CHART_WIDTH,
            row_height: DEFAULT_ROW_HEIGHT,
        }
    }
}

impl ChartConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = title.into();
        self
    }

    pub fn with_width(mut self, width: u32) -> Self {
        self.width = width;
        self
    }
}

/// Pixel geometry shared by the drawing passes
struct Layout {
    left: u32,
    top: u32,
    plot_width: u32,
    plot_height: u32,
    row_height: u32,
    show_labels: bool,
    axis_max: f64,
    tick_step: f64,
}

impl Layout {
    fn x_of(&self, value: f64) -> i64 {
        self.left as i64 + (value / self.axis_max * self.plot_width as f64).round() as i64
    }

    /// Top edge of row `index`, counting from the bottom of the plot
    fn row_top(&self, index: usize) -> i64 {
        (self.top + self.plot_height) as i64 - ((index as i64 + 1) * self.row_height as i64)
    }

    fn axis_y(&self) -> i64 {
        (self.top + self.plot_height) as i64
    }
}

/// Render plot rows as a stacked horizontal bar chart
///
/// **Public** - main entry point for rendering
///
/// # Errors
/// * `ChartError::InvalidDimensions` - width out of range, or more rows than
///   the maximum image height holds at 1 px each
pub fn render_chart(
    rows: &[PlotRow],
    config: &ChartConfig,
    color_map: &ColorMap,
) -> Result<ChartImage, ChartError> {
    let labels: Vec<String> = rows.iter().map(|row| truncate_label(&row.label)).collect();
    let layout = compute_layout(rows, &labels, config)?;

    let height = layout.top + layout.plot_height + BOTTOM_AREA;
    info!(
        "Rendering {} bars on a {}x{} canvas with color map '{}'",
        rows.len(),
        config.width,
        height,
        color_map.name
    );

    let mut image = ChartImage::new(config.width, height, Rgb::WHITE);

    draw_title(&mut image, &config.title);
    draw_bands(&mut image, &layout, rows.len(), color_map);
    draw_bars(&mut image, &layout, rows);
    draw_axes(&mut image, &layout);
    draw_row_labels(&mut image, &layout, &labels);
    draw_legend(&mut image, &layout);

    Ok(image)
}

fn compute_layout(
    rows: &[PlotRow],
    labels: &[String],
    config: &ChartConfig,
) -> Result<Layout, ChartError> {
    if !(MIN_CHART_WIDTH..=MAX_CHART_WIDTH).contains(&config.width) {
        return Err(ChartError::InvalidDimensions(format!(
            "width {} is outside {}..={}",
            config.width, MIN_CHART_WIDTH, MAX_CHART_WIDTH
        )));
    }
    if config.row_height < LABEL_MIN_ROW_HEIGHT {
        return Err(ChartError::InvalidDimensions(format!(
            "row height {} is below {}",
            config.row_height, LABEL_MIN_ROW_HEIGHT
        )));
    }

    let row_height = fit_row_height(rows.len(), config.row_height)?;
    let show_labels = row_height >= LABEL_MIN_ROW_HEIGHT;

    let label_width = if show_labels {
        labels.iter().map(|l| text_width(l, 1)).max().unwrap_or(0)
    } else {
        0
    };
    let left = MARGIN + label_width + MARGIN;
    let plot_width = config
        .width
        .checked_sub(left + RIGHT_MARGIN)
        .filter(|w| *w >= MIN_PLOT_WIDTH)
        .ok_or_else(|| {
            ChartError::InvalidDimensions(format!(
                "width {} leaves no room for the plot",
                config.width
            ))
        })?;

    let plot_height = rows.len().max(1) as u32 * row_height;

    let max_total = rows.iter().map(PlotRow::total).max().unwrap_or(0).max(1) as f64;
    let tick_step = nice_step(max_total / TICK_COUNT as f64);
    let axis_max = (max_total / tick_step).ceil() * tick_step;

    debug!(
        "Layout: left={} plot={}x{} row_height={} axis_max={} step={}",
        left, plot_width, plot_height, row_height, axis_max, tick_step
    );

    Ok(Layout {
        left,
        top: TITLE_AREA,
        plot_width,
        plot_height,
        row_height,
        show_labels,
        axis_max,
        tick_step,
    })
}

/// Largest row height up to `preferred` that keeps `rows` under the image
/// height cap; rows shrink to 1 px before the chart is refused
fn fit_row_height(rows: usize, preferred: u32) -> Result<u32, ChartError> {
    let available = (MAX_CHART_HEIGHT - TITLE_AREA - BOTTOM_AREA) as usize;
    let fitted = (available / rows.max(1)).min(preferred as usize) as u32;

    if fitted == 0 {
        return Err(ChartError::InvalidDimensions(format!(
            "{} rows do not fit a {} px tall image even at 1 px each; lower --top_n",
            rows, MAX_CHART_HEIGHT
        )));
    }
    if fitted < preferred {
        debug!("Compressing {} rows to {} px each", rows, fitted);
    }

    Ok(fitted)
}

/// Round `raw` up to 1, 2 or 5 times a power of ten
fn nice_step(raw: f64) -> f64 {
    if raw <= 0.0 || !raw.is_finite() {
        return 1.0;
    }
    let magnitude = 10f64.powf(raw.log10().floor());
    let normalized = raw / magnitude;
    let nice = if normalized <= 1.0 {
        1.0
    } else if normalized <= 2.0 {
        2.0
    } else if normalized <= 5.0 {
        5.0
    } else {
        10.0
    };
    (nice * magnitude).max(1.0)
}

/// Keep the tail of long names; hierarchical op names end in the op itself
fn truncate_label(label: &str) -> String {
    let chars: Vec<char> = label.chars().collect();
    if chars.len() <= MAX_LABEL_CHARS {
        return label.to_string();
    }
    let tail: String = chars[chars.len() - (MAX_LABEL_CHARS - 3)..].iter().collect();
    format!("...{}", tail)
}

/// Human-readable nanosecond value
pub fn format_nanos(nanos: f64) -> String {
    let (value, unit) = if nanos.abs() >= 1e9 {
        (nanos / 1e9, "s")
    } else if nanos.abs() >= 1e6 {
        (nanos / 1e6, "ms")
    } else if nanos.abs() >= 1e3 {
        (nanos / 1e3, "us")
    } else {
        (nanos, "ns")
    };

    let text = format!("{:.1}", value);
    let text = text.strip_suffix(".0").unwrap_or(&text);
    if text == "0" {
        "0".to_string()
    } else {
        format!("{}{}", text, unit)
    }
}

fn draw_title(image: &mut ChartImage, title: &str) {
    let width = text_width(title, TITLE_SCALE) as i64;
    let x = (image.width() as i64 - width) / 2;
    image.draw_text(x.max(MARGIN as i64), 12, title, TITLE_SCALE, Rgb::BLACK);
}

fn draw_bands(image: &mut ChartImage, layout: &Layout, count: usize, color_map: &ColorMap) {
    let span = count.saturating_sub(1).max(1) as f64;
    for index in (0..count).step_by(2) {
        let tint = color_map.sample(index as f64 / span).mix(Rgb::WHITE, BAND_TINT);
        image.fill_rect(
            layout.left as i64,
            layout.row_top(index),
            layout.plot_width as i64,
            layout.row_height as i64,
            tint,
        );
    }
}

fn draw_bars(image: &mut ChartImage, layout: &Layout, rows: &[PlotRow]) {
    let pad = if layout.row_height >= 6 {
        (layout.row_height / 6) as i64
    } else {
        0
    };
    let bar_height = layout.row_height as i64 - 2 * pad;

    for (index, row) in rows.iter().enumerate() {
        let y = layout.row_top(index) + pad;
        let mut cursor = 0f64;

        for (value, color) in row.segments().iter().zip(SEGMENT_COLORS) {
            let value = (*value).max(0) as f64;
            let x0 = layout.x_of(cursor);
            let x1 = layout.x_of(cursor + value);
            image.fill_rect(x0, y, x1 - x0, bar_height, color);
            cursor += value;
        }
    }
}

fn draw_axes(image: &mut ChartImage, layout: &Layout) {
    let axis_y = layout.axis_y();
    let right = (layout.left + layout.plot_width) as i64;

    image.vline(layout.left as i64, layout.top as i64, axis_y, Rgb::BLACK);
    image.hline(layout.left as i64, right, axis_y, Rgb::BLACK);

    let ticks = (layout.axis_max / layout.tick_step).round() as u64;
    for k in 0..=ticks {
        let value = k as f64 * layout.tick_step;
        let x = layout.x_of(value);
        image.vline(x, axis_y, axis_y + TICK_LENGTH as i64, Rgb::BLACK);

        let label = format_nanos(value);
        let label_x = x - text_width(&label, 1) as i64 / 2;
        image.draw_text(label_x, axis_y + TICK_LENGTH as i64 + 3, &label, 1, Rgb::BLACK);
    }
}

fn draw_row_labels(image: &mut ChartImage, layout: &Layout, labels: &[String]) {
    if !layout.show_labels {
        return;
    }
    let text_offset = (layout.row_height - GLYPH_HEIGHT) as i64 / 2;
    for (index, label) in labels.iter().enumerate() {
        let x = layout.left as i64 - MARGIN as i64 - text_width(label, 1) as i64;
        image.draw_text(x, layout.row_top(index) + text_offset, label, 1, Rgb::BLACK);
    }
}

fn draw_legend(image: &mut ChartImage, layout: &Layout) {
    let y = layout.axis_y() + 36;
    let mut x = layout.left as i64;

    for (name, color) in PHASE_COLUMNS.iter().zip(SEGMENT_COLORS) {
        let swatch = LEGEND_SWATCH as i64;
        image.fill_rect(x, y, swatch, swatch, color);
        image.stroke_rect(x, y, swatch, swatch, Rgb::GRAY);
        image.draw_text(x + swatch + 4, y + 2, name, 1, Rgb::BLACK);
        x += swatch + 4 + text_width(name, 1) as i64 + (LEGEND_SPACING - GLYPH_ADVANCE) as i64;
    }
}

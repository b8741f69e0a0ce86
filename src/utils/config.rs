//! Configuration and constants for the CLI.

/// Extension recognised on input traces
pub const TRACE_EXTENSION: &str = ".pb";

/// Extension substituted for `TRACE_EXTENSION` when deriving the chart path
pub const CHART_EXTENSION: &str = ".png";

/// Current JSON event report schema version
pub const REPORT_SCHEMA_VERSION: &str = "1.0.0";

// Chart geometry defaults (pixels)
pub const DEFAULT_CHART_WIDTH: u32 = 1280;
pub const DEFAULT_ROW_HEIGHT: u32 = 16;
/// Fits a full `MAX_LABEL_CHARS` label, its margins and a 50 px plot
pub const MIN_CHART_WIDTH: u32 = 360;
pub const MAX_CHART_WIDTH: u32 = 16_384;
/// Rows are compressed, down to 1 px, to stay under this height
pub const MAX_CHART_HEIGHT: u32 = 16_384;

/// Default chart title
pub const DEFAULT_CHART_TITLE: &str = "RunMetadata timeline";

/// Row labels longer than this are truncated with "..."
pub const MAX_LABEL_CHARS: usize = 40;

// Built-in bitmap font metrics: 5x7 glyphs on a 6x8 cell
pub const GLYPH_WIDTH: u32 = 5;
pub const GLYPH_HEIGHT: u32 = 7;
pub const GLYPH_ADVANCE: u32 = 6;

/// The four columns drawn as stacked segments, in stacking order
pub const PHASE_COLUMNS: &[&str] = &["start", "before_op", "in_op", "after_op"];

/// Microsecond timings from legacy traces are scaled by this factor
pub const NANOS_PER_MICRO: i64 = 1_000;

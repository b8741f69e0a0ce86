//! Plain-text table of the plotted rows, for terminals.

use super::renderer::format_nanos;
use crate::aggregator::EventRecord;

const NAME_WIDTH: usize = 42;

/// Box-drawn summary of `rows`, at most `max_lines` of them
pub fn generate_text_summary(rows: &[EventRecord], max_lines: usize) -> String {
    let mut lines = Vec::new();

    lines.push("  SLOWEST OPERATIONS".to_string());
    lines.push(format!(
        "  ┏{}┳{}┳{}┳{}┳{}┓",
        "━".repeat(NAME_WIDTH + 2),
        "━".repeat(12),
        "━".repeat(12),
        "━".repeat(12),
        "━".repeat(12)
    ));
    lines.push(format!(
        "  ┃ {:<w$} ┃ {:^10} ┃ {:^10} ┃ {:^10} ┃ {:^10} ┃",
        "Operation",
        "START",
        "BEFORE",
        "IN OP",
        "AFTER",
        w = NAME_WIDTH
    ));
    lines.push(format!(
        "  ┣{}╋{}╋{}╋{}╋{}┫",
        "━".repeat(NAME_WIDTH + 2),
        "━".repeat(12),
        "━".repeat(12),
        "━".repeat(12),
        "━".repeat(12)
    ));

    for row in rows.iter().take(max_lines) {
        lines.push(format!(
            "  ┃ {:<w$} ┃ {:>10} ┃ {:>10} ┃ {:>10} ┃ {:>10} ┃",
            fit_name(&row.name),
            format_nanos(row.start as f64),
            format_nanos(row.before_op as f64),
            format_nanos(row.in_op as f64),
            format_nanos(row.after_op as f64),
            w = NAME_WIDTH
        ));
    }

    lines.push(format!(
        "  ┗{}┻{}┻{}┻{}┻{}┛",
        "━".repeat(NAME_WIDTH + 2),
        "━".repeat(12),
        "━".repeat(12),
        "━".repeat(12),
        "━".repeat(12)
    ));

    if rows.len() > max_lines {
        lines.push(format!(
            "   (Showing {} of {} operations)",
            max_lines,
            rows.len()
        ));
    }

    lines.join("\n")
}

fn fit_name(name: &str) -> String {
    let chars: Vec<char> = name.chars().collect();
    if chars.len() > NAME_WIDTH {
        let tail: String = chars[chars.len() - (NAME_WIDTH - 3)..].iter().collect();
        format!("...{}", tail)
    } else {
        name.to_string()
    }
}

//! Row selection and ordering for the bar chart.

use crate::aggregator::{EventRecord, EventTable};
use log::debug;
use std::cmp::Reverse;

/// The four stacked columns of one bar
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlotRow {
    pub label: String,
    pub start: i64,
    pub before_op: i64,
    pub in_op: i64,
    pub after_op: i64,
}

impl PlotRow {
    /// Segment values in stacking order
    pub fn segments(&self) -> [i64; 4] {
        [self.start, self.before_op, self.in_op, self.after_op]
    }

    /// Bar length, negative segments counted as zero
    pub fn total(&self) -> i64 {
        self.segments()
            .iter()
            .fold(0i64, |acc, v| acc.saturating_add((*v).max(0)))
    }
}

impl From<&EventRecord> for PlotRow {
    fn from(record: &EventRecord) -> Self {
        Self {
            label: record.name.clone(),
            start: record.start,
            before_op: record.before_op,
            in_op: record.in_op,
            after_op: record.after_op,
        }
    }
}

/// Pick the rows to plot
///
/// **Public** - main entry point for selection
///
/// Rows are ranked by `in_op` descending and cut to `top_n`, then
/// reordered by `(start, duration)` descending. Both sorts are stable.
pub fn select_rows(table: &EventTable, top_n: Option<usize>) -> Vec<EventRecord> {
    let mut rows = table.rows().to_vec();

    rows.sort_by_key(|row| Reverse(row.in_op));

    if let Some(n) = top_n {
        rows.truncate(n);
    }

    rows.sort_by_key(|row| Reverse((row.start, row.duration)));

    debug!("Selected {} of {} rows", rows.len(), table.len());

    rows
}

/// Keep only the stacked columns
pub fn plot_rows(rows: &[EventRecord]) -> Vec<PlotRow> {
    rows.iter().map(PlotRow::from).collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::aggregator::DuplicatePolicy;

    fn record(name: &str, start: i64, in_op: i64, duration: i64) -> EventRecord {
        EventRecord {
            name: name.to_string(),
            start,
            before_op: 1,
            in_op,
            after_op: 1,
            duration,
            scheduled: 0,
            timeline_label: String::new(),
            device: "cpu".to_string(),
        }
    }

    fn table(records: Vec<EventRecord>) -> EventTable {
        EventTable::build(records, DuplicatePolicy::Reject).unwrap()
    }

    fn names(rows: &[EventRecord]) -> Vec<&str> {
        rows.iter().map(|r| r.name.as_str()).collect()
    }

    #[test]
    fn test_top_n_keeps_largest_in_op() {
        let t = table(vec![
            record("a", 0, 10, 12),
            record("b", 5, 50, 52),
            record("c", 9, 30, 32),
            record("d", 3, 40, 42),
        ]);

        let rows = select_rows(&t, Some(2));
        // b and d survive, then ordered by start descending
        assert_eq!(names(&rows), vec!["b", "d"]);
    }

    #[test]
    fn test_top_n_larger_than_table() {
        let t = table(vec![record("a", 0, 10, 12), record("b", 5, 50, 52)]);
        let rows = select_rows(&t, Some(10));
        assert_eq!(names(&rows), vec!["b", "a"]);
    }

    #[test]
    fn test_no_limit_orders_by_start_then_duration() {
        let t = table(vec![
            record("a", 5, 1, 10),
            record("b", 5, 2, 30),
            record("c", 7, 3, 5),
        ]);
        let rows = select_rows(&t, None);
        assert_eq!(names(&rows), vec!["c", "b", "a"]);
    }

    #[test]
    fn test_ties_keep_table_order() {
        let t = table(vec![
            record("a", 0, 10, 10),
            record("b", 0, 10, 10),
            record("c", 0, 10, 10),
        ]);
        let rows = select_rows(&t, Some(2));
        assert_eq!(names(&rows), vec!["a", "b"]);
    }

    #[test]
    fn test_plot_rows_keep_four_columns() {
        let rows = plot_rows(&[record("a", 4, 6, 8)]);
        assert_eq!(rows[0].segments(), [4, 1, 6, 1]);
        assert_eq!(rows[0].total(), 12);
        assert_eq!(rows[0].label, "a");
    }

    #[test]
    fn test_negative_segments_do_not_shrink_total() {
        let row = PlotRow {
            label: "x".to_string(),
            start: 3,
            before_op: 2,
            in_op: -4,
            after_op: 1,
        };
        assert_eq!(row.total(), 6);
    }

    #[test]
    fn test_total_saturates() {
        let row = PlotRow {
            label: "x".to_string(),
            start: i64::MAX,
            before_op: i64::MAX,
            in_op: 1,
            after_op: 0,
        };
        assert_eq!(row.total(), i64::MAX);
    }
}

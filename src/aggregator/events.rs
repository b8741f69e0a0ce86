//! Event extraction from RunMetadata node stats.
//!
//! Every node becomes one `EventRecord` whose `start` is relative to the
//! earliest node in the whole trace, across all devices.

use crate::parser::schema::{NodeExecStats, RunMetadata};
use crate::utils::config::NANOS_PER_MICRO;
use log::debug;
use serde::{Deserialize, Serialize};

/// Timing of one node, relative to the start of the step
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct EventRecord {
    /// Node name, used as the table row key
    pub name: String,

    /// Offset of the node's start from the earliest node in the trace
    pub start: i64,

    /// Time between node start and op start
    pub before_op: i64,

    /// Time spent in the op itself
    pub in_op: i64,

    /// Time between op end and node end
    pub after_op: i64,

    /// Node end relative to node start
    pub duration: i64,

    /// Scheduling timestamp as recorded
    pub scheduled: i64,

    pub timeline_label: String,

    /// Device the node ran on
    pub device: String,
}

/// Raw nanosecond timings of a node after legacy fallback
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct NodeTiming {
    all_start: i64,
    op_start_rel: i64,
    op_end_rel: i64,
    all_end_rel: i64,
    scheduled: i64,
}

impl NodeTiming {
    /// Nanosecond fields, or microsecond fields scaled up when a legacy
    /// trace recorded only those
    fn of(node: &NodeExecStats) -> Self {
        let has_nanos = node.all_start_nanos != 0
            || node.op_start_rel_nanos != 0
            || node.op_end_rel_nanos != 0
            || node.all_end_rel_nanos != 0;

        if !has_nanos && node.all_start_micros != 0 {
            Self {
                all_start: node.all_start_micros.saturating_mul(NANOS_PER_MICRO),
                op_start_rel: node.op_start_rel_micros.saturating_mul(NANOS_PER_MICRO),
                op_end_rel: node.op_end_rel_micros.saturating_mul(NANOS_PER_MICRO),
                all_end_rel: node.all_end_rel_micros.saturating_mul(NANOS_PER_MICRO),
                scheduled: node.scheduled_micros.saturating_mul(NANOS_PER_MICRO),
            }
        } else {
            Self {
                all_start: node.all_start_nanos,
                op_start_rel: node.op_start_rel_nanos,
                op_end_rel: node.op_end_rel_nanos,
                all_end_rel: node.all_end_rel_nanos,
                scheduled: node.scheduled_nanos,
            }
        }
    }
}

/// Extract one event record per node
///
/// **Public** - main entry point for extraction
///
/// Records come out in traversal order: devices outer, nodes inner.
/// An empty trace yields an empty vector. Differences saturate at the
/// `i64` bounds, so `start` never goes negative.
pub fn extract_events(trace: &RunMetadata) -> Vec<EventRecord> {
    let Some(base) = earliest_start(trace) else {
        debug!("Trace has no node stats");
        return Vec::new();
    };

    debug!("Earliest node start: {} ns", base);

    trace
        .nodes()
        .map(|(device, node)| {
            let timing = NodeTiming::of(node);

            EventRecord {
                name: node.node_name.clone(),
                start: timing.all_start.saturating_sub(base),
                before_op: timing.op_start_rel,
                in_op: timing.op_end_rel.saturating_sub(timing.op_start_rel),
                after_op: timing.all_end_rel.saturating_sub(timing.op_end_rel),
                duration: timing.all_end_rel,
                scheduled: timing.scheduled,
                timeline_label: node.timeline_label.clone(),
                device: device.device.clone(),
            }
        })
        .collect()
}

/// Minimum absolute start across every node of every device
///
/// **Private** - first pass of extract_events
fn earliest_start(trace: &RunMetadata) -> Option<i64> {
    trace
        .nodes()
        .map(|(_, node)| NodeTiming::of(node).all_start)
        .min()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parser::schema::{DeviceStepStats, StepStats};

    fn node(name: &str, start: i64) -> NodeExecStats {
        NodeExecStats {
            node_name: name.to_string(),
            all_start_nanos: start,
            op_start_rel_nanos: 2,
            op_end_rel_nanos: 7,
            all_end_rel_nanos: 10,
            scheduled_nanos: start - 1,
            timeline_label: format!("{} = Op()", name),
            ..Default::default()
        }
    }

    fn trace(devices: Vec<(&str, Vec<NodeExecStats>)>) -> RunMetadata {
        RunMetadata {
            step_stats: Some(StepStats {
                dev_stats: devices
                    .into_iter()
                    .map(|(device, node_stats)| DeviceStepStats {
                        device: device.to_string(),
                        node_stats,
                        ..Default::default()
                    })
                    .collect(),
            }),
        }
    }

    #[test]
    fn test_field_derivation() {
        let events = extract_events(&trace(vec![("cpu", vec![node("a", 500)])]));

        assert_eq!(events.len(), 1);
        let e = &events[0];
        assert_eq!(e.start, 0);
        assert_eq!(e.before_op, 2);
        assert_eq!(e.in_op, 5);
        assert_eq!(e.after_op, 3);
        assert_eq!(e.duration, 10);
        assert_eq!(e.scheduled, 499);
        assert_eq!(e.timeline_label, "a = Op()");
        assert_eq!(e.device, "cpu");
    }

    #[test]
    fn test_minimum_spans_devices() {
        let events = extract_events(&trace(vec![
            ("cpu", vec![node("a", 300), node("b", 400)]),
            ("gpu", vec![node("c", 250)]),
        ]));

        let starts: Vec<i64> = events.iter().map(|e| e.start).collect();
        assert_eq!(starts, vec![50, 150, 0]);
        assert_eq!(events[2].device, "gpu");
    }

    #[test]
    fn test_empty_trace() {
        assert!(extract_events(&RunMetadata::default()).is_empty());
        assert!(extract_events(&trace(vec![("cpu", vec![])])).is_empty());
    }

    #[test]
    fn test_extreme_timestamps_saturate() {
        let mut late = node("late", i64::MAX);
        late.op_start_rel_nanos = i64::MAX;
        late.op_end_rel_nanos = i64::MIN;
        late.all_end_rel_nanos = i64::MAX;

        let events = extract_events(&trace(vec![("cpu", vec![node("early", -10), late])]));

        assert_eq!(events[0].start, 0);
        assert_eq!(events[1].start, i64::MAX);
        assert!(events.iter().all(|e| e.start >= 0));
        assert_eq!(events[1].in_op, i64::MIN);
        assert_eq!(events[1].after_op, i64::MAX);
    }

    #[test]
    fn test_legacy_micros_fallback() {
        let legacy = NodeExecStats {
            node_name: "old".to_string(),
            all_start_micros: 3,
            op_start_rel_micros: 1,
            op_end_rel_micros: 4,
            all_end_rel_micros: 5,
            ..Default::default()
        };
        let events = extract_events(&trace(vec![("cpu", vec![node("new", 1_000), legacy])]));

        assert_eq!(events[1].start, 2_000);
        assert_eq!(events[1].before_op, 1_000);
        assert_eq!(events[1].in_op, 3_000);
        assert_eq!(events[1].after_op, 1_000);
        assert_eq!(events[0].start, 0);
    }
}

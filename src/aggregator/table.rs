//! Event table keyed by node name.

use super::events::EventRecord;
use crate::utils::error::TableError;
use log::{debug, warn};
use std::collections::HashMap;

/// What to do when two records share a node name
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// The later record's values replace the earlier ones; the row keeps
    /// the position where the name was first seen
    #[default]
    LastWins,

    /// Fail on the first repeated name
    Reject,
}

/// Ordered rows, one per distinct node name
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EventTable {
    rows: Vec<EventRecord>,
}

impl EventTable {
    /// Build a table from extracted records
    ///
    /// **Public** - main entry point for table construction
    ///
    /// # Errors
    /// * `TableError::DuplicateName` - repeated name under `DuplicatePolicy::Reject`
    pub fn build(
        records: Vec<EventRecord>,
        policy: DuplicatePolicy,
    ) -> Result<Self, TableError> {
        let mut rows: Vec<EventRecord> = Vec::with_capacity(records.len());
        let mut index: HashMap<String, usize> = HashMap::with_capacity(records.len());

        for record in records {
            match index.get(&record.name) {
                Some(&slot) => match policy {
                    DuplicatePolicy::LastWins => {
                        warn!(
                            "Duplicate node name '{}' ({} and {}), keeping the later one",
                            record.name, rows[slot].device, record.device
                        );
                        rows[slot] = record;
                    }
                    DuplicatePolicy::Reject => {
                        return Err(TableError::DuplicateName(record.name));
                    }
                },
                None => {
                    index.insert(record.name.clone(), rows.len());
                    rows.push(record);
                }
            }
        }

        debug!("Built event table with {} rows", rows.len());

        Ok(Self { rows })
    }

    pub fn rows(&self) -> &[EventRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    /// Row for a node name
    pub fn get(&self, name: &str) -> Option<&EventRecord> {
        self.rows.iter().find(|row| row.name == name)
    }

    pub fn into_rows(self) -> Vec<EventRecord> {
        self.rows
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(name: &str, device: &str, in_op: i64) -> EventRecord {
        EventRecord {
            name: name.to_string(),
            start: 0,
            before_op: 0,
            in_op,
            after_op: 0,
            duration: in_op,
            scheduled: 0,
            timeline_label: String::new(),
            device: device.to_string(),
        }
    }

    #[test]
    fn test_unique_names_keep_every_row() {
        let table = EventTable::build(
            vec![record("a", "cpu", 1), record("b", "cpu", 2), record("c", "gpu", 3)],
            DuplicatePolicy::LastWins,
        )
        .unwrap();

        assert_eq!(table.len(), 3);
        let names: Vec<&str> = table.rows().iter().map(|r| r.name.as_str()).collect();
        assert_eq!(names, vec!["a", "b", "c"]);
    }

    #[test]
    fn test_last_wins_keeps_first_position() {
        let table = EventTable::build(
            vec![record("a", "cpu", 1), record("b", "cpu", 2), record("a", "gpu", 9)],
            DuplicatePolicy::LastWins,
        )
        .unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.rows()[0].name, "a");
        assert_eq!(table.rows()[0].in_op, 9);
        assert_eq!(table.get("a").unwrap().device, "gpu");
    }

    #[test]
    fn test_reject_duplicate() {
        let result = EventTable::build(
            vec![record("a", "cpu", 1), record("a", "gpu", 2)],
            DuplicatePolicy::Reject,
        );

        match result {
            Err(TableError::DuplicateName(name)) => assert_eq!(name, "a"),
            other => panic!("expected duplicate error, got {:?}", other),
        }
    }

    #[test]
    fn test_empty_table() {
        let table = EventTable::build(Vec::new(), DuplicatePolicy::Reject).unwrap();
        assert!(table.is_empty());
    }
}

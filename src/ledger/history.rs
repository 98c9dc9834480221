//! Chronological match history

use crate::error::{MatbojError, Result};
use crate::types::{HistoryEntry, MatchRecord};

/// Append-only list of match records, oldest first
///
/// Records hold participant names only; the store stays the single owner of
/// participants.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchLedger {
    records: Vec<MatchRecord>,
}

impl MatchLedger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from_records(records: Vec<MatchRecord>) -> Self {
        Self { records }
    }

    pub fn push(&mut self, record: MatchRecord) {
        self.records.push(record);
    }

    pub fn pop(&mut self) -> Option<MatchRecord> {
        self.records.pop()
    }

    /// Record at `position` counted from the end, 1 being the most recent
    pub fn from_end(&self, position: usize) -> Result<&MatchRecord> {
        if self.records.is_empty() {
            return Err(MatbojError::NothingToUndo);
        }
        if position == 0 {
            return Err(MatbojError::InvalidPosition);
        }
        if position > self.records.len() {
            return Err(MatbojError::PositionOutOfRange {
                requested: position,
                available: self.records.len(),
            });
        }

        Ok(&self.records[self.records.len() - position])
    }

    /// Every record with its distance from the end
    pub fn entries(&self) -> Vec<HistoryEntry> {
        let len = self.records.len();
        self.records
            .iter()
            .enumerate()
            .map(|(i, record)| HistoryEntry {
                record: record.clone(),
                distance: len - i,
            })
            .collect()
    }

    /// Number of matches a participant took part in
    pub fn involvement_count(&self, name: &str) -> usize {
        self.records.iter().filter(|r| r.involves(name)).count()
    }

    pub fn records(&self) -> &[MatchRecord] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn create_test_ledger() -> MatchLedger {
        MatchLedger::from_records(vec![
            MatchRecord::new("a", "b"),
            MatchRecord::new("c", "d"),
            MatchRecord::new("a", "c"),
        ])
    }

    #[test]
    fn test_from_end_addresses_most_recent_first() {
        let ledger = create_test_ledger();
        assert_eq!(ledger.from_end(1).unwrap(), &MatchRecord::new("a", "c"));
        assert_eq!(ledger.from_end(3).unwrap(), &MatchRecord::new("a", "b"));
    }

    #[test]
    fn test_from_end_errors() {
        let ledger = create_test_ledger();
        assert!(matches!(
            ledger.from_end(4),
            Err(MatbojError::PositionOutOfRange {
                requested: 4,
                available: 3
            })
        ));
        assert!(matches!(ledger.from_end(0), Err(MatbojError::InvalidPosition)));
        assert!(matches!(
            MatchLedger::new().from_end(1),
            Err(MatbojError::NothingToUndo)
        ));
    }

    #[test]
    fn test_entries_carry_distance_from_end() {
        let entries = create_test_ledger().entries();
        let distances: Vec<usize> = entries.iter().map(|e| e.distance).collect();
        assert_eq!(distances, vec![3, 2, 1]);
        assert_eq!(entries[0].record, MatchRecord::new("a", "b"));
    }

    #[test]
    fn test_involvement_count() {
        let ledger = create_test_ledger();
        assert_eq!(ledger.involvement_count("a"), 2);
        assert_eq!(ledger.involvement_count("C"), 2);
        assert_eq!(ledger.involvement_count("e"), 0);
    }
}

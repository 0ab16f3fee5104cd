use std::collections::HashSet;

use crate::error::AwardError;
use crate::models::AwardRecord;

use super::{AwardRepository, RecordFilter};

/// Composite identity of a stored record.
type RecordKey = (i32, String, String, bool);

/// In-memory record store, kept in insertion order.
#[derive(Debug, Default)]
pub struct MemoryStore {
    records: Vec<AwardRecord>,
    keys: HashSet<RecordKey>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert `record` unless one with the same (year, title, producer, won)
    /// is already stored. Returns `true` when the record was added.
    pub fn insert(&mut self, record: AwardRecord) -> bool {
        let key = (
            record.year,
            record.title.clone(),
            record.producer.clone(),
            record.won,
        );
        if !self.keys.insert(key) {
            return false;
        }
        self.records.push(record);
        true
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }
}

impl AwardRepository for MemoryStore {
    fn fetch_winning_years_by_producer(&self) -> Result<Vec<(String, i32)>, AwardError> {
        Ok(self
            .records
            .iter()
            .filter(|r| r.won)
            .map(|r| (r.producer.clone(), r.year))
            .collect())
    }

    fn find(&self, filter: &RecordFilter) -> Result<Vec<AwardRecord>, AwardError> {
        Ok(self
            .records
            .iter()
            .filter(|r| filter.matches(r))
            .cloned()
            .collect())
    }

    fn count(&self) -> Result<usize, AwardError> {
        Ok(self.records.len())
    }
}

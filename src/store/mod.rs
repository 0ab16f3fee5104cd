//! Record storage behind a storage-agnostic interface.
//!
//! The interval engine only ever sees `(producer, year)` pairs fetched through
//! [`AwardRepository`]; whether they come from memory, a file or a database is
//! the implementation's business.

use crate::error::AwardError;
use crate::models::AwardRecord;

pub mod memory;

/// Exact-match filter over stored records. `None` fields match anything.
#[derive(Debug, Clone, Default)]
pub struct RecordFilter {
    pub year: Option<i32>,
    pub producer: Option<String>,
    pub title: Option<String>,
    pub won: Option<bool>,
}

impl RecordFilter {
    pub fn matches(&self, record: &AwardRecord) -> bool {
        self.year.map_or(true, |y| record.year == y)
            && self.producer.as_deref().map_or(true, |p| record.producer == p)
            && self.title.as_deref().map_or(true, |t| record.title == t)
            && self.won.map_or(true, |w| record.won == w)
    }
}

pub trait AwardRepository {
    /// Every winning `(producer, year)` pair, one per stored winning record.
    fn fetch_winning_years_by_producer(&self) -> Result<Vec<(String, i32)>, AwardError>;

    /// Records matching `filter`, in storage order.
    fn find(&self, filter: &RecordFilter) -> Result<Vec<AwardRecord>, AwardError>;

    /// Total number of stored records, winners or not.
    fn count(&self) -> Result<usize, AwardError>;
}

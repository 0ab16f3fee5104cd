use std::collections::HashMap;

use crate::error::AwardError;
use crate::models::{AwardRecord, Prediction};
use crate::producers;

/// How often each (producer, studio) combination appears across the records.
///
/// Names are trimmed and lower-cased; studio fields are split like producer lists.
/// Build it once per record set and query it as often as needed.
#[derive(Debug, Default)]
pub struct PairIndex {
    counts: HashMap<(String, String), usize>,
}

impl PairIndex {
    /// Count pairs over stored records, which differs from counting raw import
    /// rows in two ways:
    ///
    /// - producers were split case-sensitively at import and are lower-cased
    ///   afterwards, so an upper-case `AND` stays inside one producer name
    ///   (`"X AND Y"` counts as `"x and y"`, not as `x` and `y`);
    /// - records are deduplicated on (year, title, producer, won), so a row
    ///   repeated verbatim in the award list is counted once.
    pub fn build(records: &[AwardRecord]) -> Self {
        let mut counts: HashMap<(String, String), usize> = HashMap::new();
        for record in records {
            let producer = normalize(&record.producer);
            for studio in producers::split(&record.studios) {
                *counts
                    .entry((producer.clone(), normalize(&studio)))
                    .or_insert(0) += 1;
            }
        }
        tracing::debug!(pairs = counts.len(), "built producer/studio index");
        PairIndex { counts }
    }

    pub fn count(&self, producer: &str, studio: &str) -> usize {
        self.counts
            .get(&(normalize(producer), normalize(studio)))
            .copied()
            .unwrap_or(0)
    }

    /// Flag a producer/studio pair that recurs more than `threshold` times.
    pub fn predict(&self, producer: &str, studio: &str, threshold: usize) -> Result<Prediction, AwardError> {
        if producer.trim().is_empty() || studio.trim().is_empty() {
            return Err(AwardError::InvalidArgument(
                "both producer and studio are required".to_string(),
            ));
        }

        if self.count(producer, studio) > threshold {
            Ok(Prediction::LikelyBad)
        } else {
            Ok(Prediction::Unlikely)
        }
    }
}

fn normalize(name: &str) -> String {
    name.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn record(title: &str, studios: &str, producer: &str) -> AwardRecord {
        AwardRecord {
            year: 2000,
            title: title.to_string(),
            studios: studios.to_string(),
            producer: producer.to_string(),
            won: false,
        }
    }

    fn index() -> PairIndex {
        PairIndex::build(&[
            record("One", "Cannon Films", "Menahem Golan"),
            record("Two", "Cannon Films and MGM", "Menahem Golan"),
            record("Three", "Universal", "Menahem Golan"),
            record("Four", "Universal", "Jerry Weintraub"),
        ])
    }

    #[test]
    fn test_counts_are_case_insensitive() {
        let idx = index();
        assert_eq!(idx.count("menahem golan", "CANNON FILMS"), 2);
        assert_eq!(idx.count(" Menahem Golan ", "MGM"), 1);
        assert_eq!(idx.count("Nobody", "MGM"), 0);
    }

    #[test]
    fn test_predict_threshold() {
        let idx = index();
        assert_eq!(idx.predict("Menahem Golan", "Cannon Films", 1).unwrap(), Prediction::LikelyBad);
        assert_eq!(idx.predict("Menahem Golan", "Universal", 1).unwrap(), Prediction::Unlikely);
        assert_eq!(idx.predict("Menahem Golan", "Cannon Films", 2).unwrap(), Prediction::Unlikely);
    }

    #[test]
    fn test_upper_case_conjunction_stays_in_one_name() {
        let idx = PairIndex::build(&[record("One", "Orion", "Sam AND Max")]);
        assert_eq!(idx.count("sam and max", "orion"), 1);
        assert_eq!(idx.count("sam", "orion"), 0);
    }

    #[test]
    fn test_predict_requires_both_names() {
        let idx = index();
        assert!(matches!(
            idx.predict("", "Universal", 1),
            Err(AwardError::InvalidArgument(_))
        ));
        assert!(idx.predict("Menahem Golan", "  ", 1).is_err());
    }
}

use std::collections::BTreeMap;

use crate::models::{AggregationResult, IntervalEntry};

/// Compute consecutive-win intervals per producer and extract the tied extremes.
///
/// `wins` must contain winning entries only. Producers are grouped by exact name
/// and visited in lexicographic order, years ascending, so the order of `min`
/// and `max` is the same for any permutation of the input. Repeated years are
/// kept and pair up with an interval of 0.
///
/// All entries sharing the smallest interval land in `min`, all entries sharing
/// the largest in `max`. Both are empty when no producer has two wins.
pub fn aggregate<I, S>(wins: I) -> AggregationResult
where
    I: IntoIterator<Item = (S, i32)>,
    S: Into<String>,
{
    let mut by_producer: BTreeMap<String, Vec<i32>> = BTreeMap::new();
    for (producer, year) in wins {
        by_producer.entry(producer.into()).or_default().push(year);
    }

    let mut intervals: Vec<IntervalEntry> = Vec::new();
    for (producer, years) in &mut by_producer {
        years.sort_unstable();
        for pair in years.windows(2) {
            intervals.push(IntervalEntry {
                producer: producer.clone(),
                interval: i64::from(pair[1]) - i64::from(pair[0]),
                previous_win: pair[0],
                following_win: pair[1],
            });
        }
    }

    let (Some(min_value), Some(max_value)) = (
        intervals.iter().map(|e| e.interval).min(),
        intervals.iter().map(|e| e.interval).max(),
    ) else {
        tracing::debug!(producers = by_producer.len(), "no producer has consecutive wins");
        return AggregationResult::default();
    };

    tracing::debug!(
        producers = by_producer.len(),
        intervals = intervals.len(),
        min_value,
        max_value,
        "aggregated award intervals"
    );

    let ties = |value: i64| -> Vec<IntervalEntry> {
        intervals
            .iter()
            .filter(|e| e.interval == value)
            .cloned()
            .collect()
    };

    AggregationResult {
        min: ties(min_value),
        max: ties(max_value),
    }
}

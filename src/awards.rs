//! Queries answered over an [`AwardRepository`].

use crate::error::AwardError;
use crate::intervals::aggregate;
use crate::models::{AggregationResult, AwardRecord, ProducerDetails, YearWinners};
use crate::store::{AwardRepository, RecordFilter};

/// Shortest and longest gaps between consecutive wins across all producers.
///
/// An empty repository is a normal, empty result; a repository that fails to
/// answer is an error.
pub fn calculate_awards<R: AwardRepository + ?Sized>(repo: &R) -> Result<AggregationResult, AwardError> {
    if repo.count()? == 0 {
        tracing::debug!("no records stored");
        return Ok(AggregationResult::default());
    }

    let wins = repo.fetch_winning_years_by_producer()?;
    tracing::debug!(wins = wins.len(), "fetched winning years");
    Ok(aggregate(wins))
}

pub fn list_movies<R: AwardRepository + ?Sized>(
    repo: &R,
    filter: &RecordFilter,
) -> Result<Vec<AwardRecord>, AwardError> {
    repo.find(filter)
}

/// Every record attributed to `producer`, winners or not.
pub fn producer_details<R: AwardRepository + ?Sized>(
    repo: &R,
    producer: &str,
) -> Result<ProducerDetails, AwardError> {
    let movies = repo.find(&RecordFilter {
        producer: Some(producer.to_string()),
        ..Default::default()
    })?;

    if movies.is_empty() {
        return Err(AwardError::ProducerNotFound(producer.to_string()));
    }

    Ok(ProducerDetails {
        producer: producer.to_string(),
        movies,
    })
}

/// Titles that won in `year`. Titles shared by several producers are listed once.
pub fn winners_of_year<R: AwardRepository + ?Sized>(repo: &R, year: i32) -> Result<YearWinners, AwardError> {
    let records = repo.find(&RecordFilter {
        year: Some(year),
        won: Some(true),
        ..Default::default()
    })?;

    let mut winners: Vec<String> = Vec::new();
    for record in records {
        if !winners.contains(&record.title) {
            winners.push(record.title);
        }
    }

    if winners.is_empty() {
        return Err(AwardError::NoWinners(year));
    }

    Ok(YearWinners { year, winners })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store::memory::MemoryStore;

    fn store_with(rows: &[(i32, &str, &str, bool)]) -> MemoryStore {
        let mut store = MemoryStore::new();
        for (year, title, producer, won) in rows {
            store.insert(AwardRecord {
                year: *year,
                title: title.to_string(),
                studios: String::new(),
                producer: producer.to_string(),
                won: *won,
            });
        }
        store
    }

    /// Repository whose backend is unreachable.
    struct Unavailable;

    impl AwardRepository for Unavailable {
        fn fetch_winning_years_by_producer(&self) -> Result<Vec<(String, i32)>, AwardError> {
            Err(AwardError::io("db", std::io::Error::other("connection refused")))
        }

        fn find(&self, _filter: &RecordFilter) -> Result<Vec<AwardRecord>, AwardError> {
            Err(AwardError::io("db", std::io::Error::other("connection refused")))
        }

        fn count(&self) -> Result<usize, AwardError> {
            Ok(1)
        }
    }

    #[test]
    fn test_empty_store() {
        let store = MemoryStore::new();
        let result = calculate_awards(&store).unwrap();
        assert!(result.is_empty());
    }

    #[test]
    fn test_losers_are_ignored() {
        let store = store_with(&[
            (2000, "Movie 1", "Producer 1", true),
            (2001, "Movie 2", "Producer 1", false),
            (2005, "Movie 3", "Producer 1", true),
            (2010, "Movie 4", "Producer 2", true),
            (2012, "Movie 5", "Producer 2", true),
        ]);

        let result = calculate_awards(&store).unwrap();
        assert_eq!(result.min.len(), 1);
        assert_eq!(result.min[0].producer, "Producer 2");
        assert_eq!(result.min[0].interval, 2);
        assert_eq!(result.max.len(), 1);
        assert_eq!(result.max[0].producer, "Producer 1");
        assert_eq!(result.max[0].interval, 5);
        assert_eq!(result.max[0].previous_win, 2000);
        assert_eq!(result.max[0].following_win, 2005);
    }

    #[test]
    fn test_retrieval_failure_is_not_empty_result() {
        assert!(matches!(calculate_awards(&Unavailable), Err(AwardError::Io { .. })));
    }

    #[test]
    fn test_producer_details() {
        let store = store_with(&[
            (2000, "Movie 1", "Producer 1", true),
            (2001, "Movie 2", "Producer 1", false),
            (2001, "Movie 2", "Producer 2", false),
        ]);

        let details = producer_details(&store, "Producer 1").unwrap();
        assert_eq!(details.movies.len(), 2);

        let err = producer_details(&store, "Nobody").unwrap_err();
        assert!(matches!(err, AwardError::ProducerNotFound(ref p) if p == "Nobody"));
    }

    #[test]
    fn test_winners_of_year() {
        let store = store_with(&[
            (2020, "Movie 2020", "Producer 1", true),
            (2020, "Movie 2020", "Producer 2", true),
            (2020, "Also Ran", "Producer 3", false),
        ]);

        let winners = winners_of_year(&store, 2020).unwrap();
        assert_eq!(winners.winners, vec!["Movie 2020"]);

        let err = winners_of_year(&store, 2021).unwrap_err();
        assert_eq!(err.to_string(), "no winners recorded for year 2021");
    }

    #[test]
    fn test_list_movies_filters() {
        let store = store_with(&[
            (2000, "Movie 1", "Producer 1", true),
            (2001, "Movie 2", "Producer 2", false),
        ]);
        let filter = RecordFilter { producer: Some("Producer 2".to_string()), ..Default::default() };
        let movies = list_movies(&store, &filter).unwrap();
        assert_eq!(movies.len(), 1);
        assert_eq!(movies[0].title, "Movie 2");
    }
}

use serde::{Deserialize, Serialize};

/// One stored award entry, already exploded to a single producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AwardRecord {
    pub year: i32,
    pub title: String,
    /// Raw studio attribution text of the import row.
    pub studios: String,
    pub producer: String,
    pub won: bool,
}

/// Gap between two consecutive wins of the same producer.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct IntervalEntry {
    pub producer: String,
    /// Widened so that any two `i32` years have a representable gap.
    pub interval: i64,
    pub previous_win: i32,
    pub following_win: i32,
}

/// Every interval tied at the dataset-wide minimum and maximum.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct AggregationResult {
    pub min: Vec<IntervalEntry>,
    pub max: Vec<IntervalEntry>,
}

impl AggregationResult {
    pub fn is_empty(&self) -> bool {
        self.min.is_empty() && self.max.is_empty()
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct ProducerDetails {
    pub producer: String,
    pub movies: Vec<AwardRecord>,
}

#[derive(Debug, Clone, Serialize)]
pub struct YearWinners {
    pub year: i32,
    pub winners: Vec<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Prediction {
    LikelyBad,
    Unlikely,
}

impl std::fmt::Display for Prediction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Prediction::LikelyBad => write!(f, "likely bad"),
            Prediction::Unlikely => write!(f, "unlikely to be bad"),
        }
    }
}

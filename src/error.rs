use std::path::PathBuf;

use thiserror::Error;

/// Errors raised by the storage, ingestion and query layers.
///
/// The producer parser and the interval aggregator are total functions and never
/// produce one of these; everything that touches files or user-supplied query
/// parameters does.
#[derive(Debug, Error)]
pub enum AwardError {
    /// The award list file does not exist.
    #[error("award list not found: {}", .0.display())]
    DataNotFound(PathBuf),

    /// Reading the award list failed.
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// The award list is not well-formed delimited text.
    #[error("malformed award list: {0}")]
    Csv(#[from] csv::Error),

    /// The header row is absent or lacks a required column.
    #[error("award list header is missing column '{0}'")]
    MissingHeader(&'static str),

    /// A data row has fewer fields than the header requires.
    #[error("line {line}: missing value for column '{column}'")]
    MissingColumn { line: usize, column: &'static str },

    /// The `year` field of a row is not an integer.
    #[error("line {line}: invalid year '{value}'")]
    InvalidYear { line: usize, value: String },

    /// No record is attributed to the requested producer.
    #[error("producer '{0}' not found")]
    ProducerNotFound(String),

    /// No winning record exists for the requested year.
    #[error("no winners recorded for year {0}")]
    NoWinners(i32),

    /// A query parameter was empty or malformed.
    #[error("invalid argument: {0}")]
    InvalidArgument(String),
}

impl AwardError {
    /// Build an `Io` error tagged with the path being read.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}

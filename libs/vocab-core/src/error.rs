//! Error types for vocab-core.

use thiserror::Error;

/// Result type alias using SchedulerError.
pub type Result<T> = std::result::Result<T, SchedulerError>;

/// Errors that can occur while scheduling reviews.
///
/// Lines the parser cannot split are not errors; they are skipped.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SchedulerError {
    #[error("unknown review outcome {value:?}, expected \"know\" or \"study\"")]
    InvalidOutcome { value: String },

    #[error("entry {id} not found")]
    EntryNotFound { id: i64 },

    #[error("invalid interval table: {0}")]
    InvalidIntervals(String),
}

use serde::Serialize;
use thiserror::Error;

/// A single input row that could not be turned into a transaction record.
///
/// `row` is 1-based and counts data rows only (the CSV header is not a row).
#[derive(Error, Debug, Clone, PartialEq, Eq, Serialize)]
#[error("malformed record at row {row}: {reason}")]
pub struct MalformedRecord {
    pub row: usize,
    pub reason: String,
}

impl MalformedRecord {
    #[must_use]
    pub fn new(row: usize, reason: impl Into<String>) -> Self {
        Self {
            row,
            reason: reason.into(),
        }
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum EngineError {
    #[error("invalid configuration: {0}")]
    InvalidConfiguration(String),
    #[error("empty batch: at least one record is required")]
    EmptyBatch,
    #[error(transparent)]
    MalformedRecord(#[from] MalformedRecord),
}

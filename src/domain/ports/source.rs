use thiserror::Error;

use crate::domain::entities::transaction::RawTransaction;

/// Failure of a whole load. Individual bad rows are not a `SourceError`:
/// they come back as raw rows and are rejected during validation.
#[derive(Error, Debug)]
pub enum SourceError {
    #[error("record source unavailable: {0}")]
    Unavailable(String),
    #[error("invalid record source format: {0}")]
    InvalidFormat(String),
}

pub trait RecordSource: Send + Sync {
    /// Load one batch of raw rows, in source order.
    ///
    /// # Errors
    ///
    /// Returns `SourceError` if the source cannot be read at all or its
    /// overall layout (e.g. the CSV header) is unusable.
    fn load(&self) -> Result<Vec<RawTransaction>, SourceError>;

    /// Short human-readable description, used in logs
    fn describe(&self) -> String;
}

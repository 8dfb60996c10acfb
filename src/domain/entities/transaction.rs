use serde::{Deserialize, Serialize};

use crate::domain::errors::MalformedRecord;

/// Raw outcome of a transaction, normalised to two values
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
pub enum TransactionStatus {
    Success,
    Failed,
}

impl TransactionStatus {
    /// Normalises a free-text status.
    ///
    /// `failed`, `failure` and `error` (any case) mean `Failed`; any other
    /// non-blank text (`Running`, `Warning`, `Critical`, `OK`...) counts as
    /// `Success`. Blank text has no status and returns `None`.
    #[must_use]
    pub fn parse(raw: &str) -> Option<Self> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return None;
        }
        match trimmed.to_ascii_lowercase().as_str() {
            "failed" | "failure" | "error" => Some(Self::Failed),
            _ => Some(Self::Success),
        }
    }
}

impl std::fmt::Display for TransactionStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Success => write!(f, "Success"),
            Self::Failed => write!(f, "Failed"),
        }
    }
}

/// One validated transaction of a batch
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TransactionRecord {
    pub transaction_id: String,
    pub region: String,
    /// Non-negative, in the deployment's time unit
    pub response_time: f64,
    pub status: TransactionStatus,
}

impl TransactionRecord {
    #[must_use]
    pub fn new(
        transaction_id: impl Into<String>,
        region: impl Into<String>,
        response_time: f64,
        status: TransactionStatus,
    ) -> Self {
        Self {
            transaction_id: transaction_id.into(),
            region: region.into(),
            response_time,
            status,
        }
    }
}

/// A row as delivered by a record source, before validation.
///
/// Every field is optional text so that a broken row can be reported
/// instead of aborting the whole load.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct RawTransaction {
    pub transaction_id: Option<String>,
    pub region: Option<String>,
    pub response_time: Option<String>,
    pub status: Option<String>,
    /// Set when the source could not decode the row at all
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub read_error: Option<String>,
}

impl RawTransaction {
    /// A row the source could not decode, carrying the decoder's message
    #[must_use]
    pub fn unreadable(reason: impl Into<String>) -> Self {
        Self {
            read_error: Some(reason.into()),
            ..Self::default()
        }
    }

    /// Validates the row into a [`TransactionRecord`].
    ///
    /// # Errors
    ///
    /// Returns `MalformedRecord` when the row was unreadable, when a field is
    /// missing or blank, or when the response time is not a finite,
    /// non-negative number.
    pub fn validate(&self, row: usize) -> Result<TransactionRecord, MalformedRecord> {
        if let Some(ref reason) = self.read_error {
            return Err(MalformedRecord::new(row, format!("unreadable row: {reason}")));
        }
        let transaction_id = required(self.transaction_id.as_deref(), "transaction id", row)?;
        let region = required(self.region.as_deref(), "region", row)?;
        let raw_time = required(self.response_time.as_deref(), "response time", row)?;
        let raw_status = required(self.status.as_deref(), "status", row)?;

        let response_time: f64 = raw_time.parse().map_err(|_| {
            MalformedRecord::new(row, format!("response time '{raw_time}' is not a number"))
        })?;
        if !response_time.is_finite() || response_time < 0.0 {
            return Err(MalformedRecord::new(
                row,
                format!("response time must be a non-negative finite number, got {raw_time}"),
            ));
        }

        let status = TransactionStatus::parse(raw_status)
            .ok_or_else(|| MalformedRecord::new(row, "missing status"))?;

        Ok(TransactionRecord {
            transaction_id: transaction_id.to_string(),
            region: region.to_string(),
            response_time,
            status,
        })
    }
}

fn required<'a>(
    value: Option<&'a str>,
    field: &str,
    row: usize,
) -> Result<&'a str, MalformedRecord> {
    match value.map(str::trim) {
        Some(v) if !v.is_empty() => Ok(v),
        _ => Err(MalformedRecord::new(row, format!("missing {field}"))),
    }
}

/// Splits raw rows into valid records and per-row rejections, keeping order.
///
/// Rows are numbered from 1.
#[must_use]
pub fn validate_rows(rows: &[RawTransaction]) -> (Vec<TransactionRecord>, Vec<MalformedRecord>) {
    let mut records = Vec::with_capacity(rows.len());
    let mut rejected = Vec::new();
    for (i, raw) in rows.iter().enumerate() {
        match raw.validate(i + 1) {
            Ok(record) => records.push(record),
            Err(e) => {
                tracing::warn!("Skipping row: {e}");
                rejected.push(e);
            }
        }
    }
    (records, rejected)
}

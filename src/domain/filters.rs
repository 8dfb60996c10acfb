use crate::domain::entities::transaction::TransactionRecord;

/// Region / transaction-id prefix filter applied before classification.
///
/// Both criteria are optional; an empty filter keeps everything.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordFilter {
    pub region: Option<String>,
    pub id_prefix: Option<String>,
}

impl RecordFilter {
    #[must_use]
    pub fn new(region: Option<String>, id_prefix: Option<String>) -> Self {
        Self {
            region: region.filter(|r| !r.trim().is_empty()),
            id_prefix: id_prefix.filter(|p| !p.is_empty()),
        }
    }

    #[must_use]
    pub const fn is_empty(&self) -> bool {
        self.region.is_none() && self.id_prefix.is_none()
    }

    /// Region compares case-insensitively; the prefix is case-sensitive.
    #[must_use]
    pub fn matches(&self, record: &TransactionRecord) -> bool {
        let region_ok = self
            .region
            .as_deref()
            .map_or(true, |r| record.region.eq_ignore_ascii_case(r.trim()));
        let prefix_ok = self
            .id_prefix
            .as_deref()
            .map_or(true, |p| record.transaction_id.starts_with(p));
        region_ok && prefix_ok
    }

    #[must_use]
    pub fn apply(&self, records: Vec<TransactionRecord>) -> Vec<TransactionRecord> {
        if self.is_empty() {
            return records;
        }
        let before = records.len();
        let kept: Vec<TransactionRecord> = records.into_iter().filter(|r| self.matches(r)).collect();
        tracing::debug!("Filter kept {}/{} record(s)", kept.len(), before);
        kept
    }
}

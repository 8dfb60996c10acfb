use serde::{Deserialize, Serialize};

/// What `classify_batch` does with an empty batch
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum EmptyBatchPolicy {
    /// Empty input yields empty output
    #[default]
    Allow,
    /// Empty input is an `EmptyBatch` error
    Reject,
}

impl EmptyBatchPolicy {
    #[must_use]
    pub const fn from_reject_flag(reject: bool) -> Self {
        if reject {
            Self::Reject
        } else {
            Self::Allow
        }
    }
}

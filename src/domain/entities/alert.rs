use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::transaction::TransactionRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::time_unit::TimeUnit;

/// Alert raised for one failed or long-running transaction.
///
/// `sent` starts out `false`; only the dispatcher flips it, after a
/// notifier reported successful delivery.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AlertEvent {
    pub raised_at: DateTime<Utc>,
    pub record: TransactionRecord,
    pub category: Category,
    pub sent: bool,
}

impl AlertEvent {
    #[must_use]
    pub fn new(record: TransactionRecord, category: Category) -> Self {
        Self {
            raised_at: Utc::now(),
            record,
            category,
            sent: false,
        }
    }

    #[must_use]
    pub fn subject(&self) -> String {
        match self.category {
            Category::Failed => format!("Transaction failed: {}", self.record.transaction_id),
            Category::LongRunning => "High Response Time Alert".to_string(),
            Category::Normal => format!("Transaction {}", self.record.transaction_id),
        }
    }

    #[must_use]
    pub fn message(&self, unit: TimeUnit) -> String {
        let r = &self.record;
        match self.category {
            Category::Failed => format!(
                "Transaction {} in {} failed after {:.1} {}",
                r.transaction_id,
                r.region,
                r.response_time,
                unit.suffix()
            ),
            Category::LongRunning => format!(
                "Transaction {} in {} exceeded the response-time threshold with {:.1} {}",
                r.transaction_id,
                r.region,
                r.response_time,
                unit.suffix()
            ),
            Category::Normal => format!(
                "Transaction {} in {} completed in {:.1} {}",
                r.transaction_id,
                r.region,
                r.response_time,
                unit.suffix()
            ),
        }
    }
}

/// A region whose every transaction in the batch was alert-worthy
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegionDown {
    pub region: String,
    pub total: usize,
}

impl RegionDown {
    #[must_use]
    pub fn subject(&self) -> String {
        "Region Down Alert".to_string()
    }

    #[must_use]
    pub fn message(&self) -> String {
        format!(
            "Region {} is fully critical ({} transaction(s), none healthy).",
            self.region, self.total
        )
    }
}

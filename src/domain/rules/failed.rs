use crate::domain::entities::transaction::{TransactionRecord, TransactionStatus};
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::Threshold;

use super::ClassificationRule;

/// A failed status wins over everything else, response time included.
pub struct FailedStatusRule;

impl ClassificationRule for FailedStatusRule {
    fn name(&self) -> &'static str {
        "failed_status"
    }

    fn evaluate(&self, record: &TransactionRecord, _threshold: Threshold) -> Option<Category> {
        (record.status == TransactionStatus::Failed).then_some(Category::Failed)
    }
}

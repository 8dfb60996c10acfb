use crate::domain::entities::transaction::TransactionRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::Threshold;

use super::ClassificationRule;

/// Response time strictly above the threshold. Equal to the threshold is still normal.
pub struct LongRunningRule;

impl ClassificationRule for LongRunningRule {
    fn name(&self) -> &'static str {
        "long_running"
    }

    fn evaluate(&self, record: &TransactionRecord, threshold: Threshold) -> Option<Category> {
        (record.response_time > threshold.value()).then_some(Category::LongRunning)
    }
}

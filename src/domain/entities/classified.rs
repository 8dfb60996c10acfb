use serde::{Deserialize, Serialize};

use super::transaction::TransactionRecord;
use crate::domain::value_objects::category::Category;

/// A transaction paired with the category the engine assigned to it
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ClassifiedRecord {
    pub record: TransactionRecord,
    pub category: Category,
}

impl ClassifiedRecord {
    #[must_use]
    pub const fn new(record: TransactionRecord, category: Category) -> Self {
        Self { record, category }
    }
}

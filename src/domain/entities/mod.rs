pub mod alert;
pub mod classified;
pub mod summary;
pub mod transaction;

pub use alert::{AlertEvent, RegionDown};
pub use classified::ClassifiedRecord;
pub use summary::{CategoryCounts, RegionSummary};
pub use transaction::{RawTransaction, TransactionRecord, TransactionStatus};

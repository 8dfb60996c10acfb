pub mod batch_policy;
pub mod category;
pub mod thresholds;
pub mod time_unit;

pub use batch_policy::EmptyBatchPolicy;
pub use category::Category;
pub use thresholds::Threshold;
pub use time_unit::TimeUnit;

pub mod failed;
pub mod long_running;
pub mod region_down;

use crate::domain::entities::alert::AlertEvent;
use crate::domain::entities::classified::ClassifiedRecord;
use crate::domain::entities::summary::RegionSummary;
use crate::domain::entities::transaction::TransactionRecord;
use crate::domain::errors::EngineError;
use crate::domain::value_objects::batch_policy::EmptyBatchPolicy;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::thresholds::Threshold;

pub use region_down::detect_down_regions;

/// One step of the ordered classification. Rules are pure: record and
/// threshold in, an optional verdict out. No I/O.
pub trait ClassificationRule: Send + Sync {
    /// Returns the unique name of this rule
    fn name(&self) -> &'static str;

    /// Returns a category if this rule decides the record, `None` to defer
    /// to the next rule
    fn evaluate(&self, record: &TransactionRecord, threshold: Threshold) -> Option<Category>;
}

/// Default rules in precedence order: failure first, then response time
#[must_use]
pub fn default_rules() -> Vec<Box<dyn ClassificationRule>> {
    vec![
        Box::new(failed::FailedStatusRule),
        Box::new(long_running::LongRunningRule),
    ]
}

/// Stateless classifier. Holds a validated threshold, the ordered rules and
/// the empty-batch policy; every call works on a fresh batch.
pub struct ClassificationEngine {
    rules: Vec<Box<dyn ClassificationRule>>,
    threshold: Threshold,
    empty_batch: EmptyBatchPolicy,
}

impl ClassificationEngine {
    #[must_use]
    pub fn new(
        rules: Vec<Box<dyn ClassificationRule>>,
        threshold: Threshold,
        empty_batch: EmptyBatchPolicy,
    ) -> Self {
        Self {
            rules,
            threshold,
            empty_batch,
        }
    }

    /// Engine with the default rules and a threshold checked up front.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::InvalidConfiguration` if `threshold` is not > 0.
    pub fn with_threshold(threshold: f64) -> Result<Self, EngineError> {
        Ok(Self::new(
            default_rules(),
            Threshold::new(threshold)?,
            EmptyBatchPolicy::default(),
        ))
    }

    #[must_use]
    pub const fn with_empty_batch_policy(mut self, policy: EmptyBatchPolicy) -> Self {
        self.empty_batch = policy;
        self
    }

    #[must_use]
    pub const fn threshold(&self) -> Threshold {
        self.threshold
    }

    /// First matching rule wins; a record no rule claims is `Normal`.
    #[must_use]
    pub fn classify(&self, record: &TransactionRecord) -> Category {
        self.rules
            .iter()
            .find_map(|rule| rule.evaluate(record, self.threshold))
            .unwrap_or(Category::Normal)
    }

    /// Classifies every record, preserving input order.
    ///
    /// # Errors
    ///
    /// Returns `EngineError::EmptyBatch` for an empty batch when the policy
    /// is [`EmptyBatchPolicy::Reject`].
    pub fn classify_batch(
        &self,
        records: &[TransactionRecord],
    ) -> Result<Vec<ClassifiedRecord>, EngineError> {
        if records.is_empty() {
            return match self.empty_batch {
                EmptyBatchPolicy::Allow => Ok(Vec::new()),
                EmptyBatchPolicy::Reject => Err(EngineError::EmptyBatch),
            };
        }

        let classified: Vec<ClassifiedRecord> = records
            .iter()
            .map(|record| ClassifiedRecord::new(record.clone(), self.classify(record)))
            .collect();

        tracing::debug!(
            "Classified {} record(s) against threshold {}",
            classified.len(),
            self.threshold
        );
        Ok(classified)
    }
}

/// Classifies one record against `threshold`.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfiguration` if `threshold` is not > 0.
pub fn classify(record: &TransactionRecord, threshold: f64) -> Result<Category, EngineError> {
    Ok(ClassificationEngine::with_threshold(threshold)?.classify(record))
}

/// Classifies a batch with the default (allow-empty) policy.
///
/// The threshold is checked before any record is looked at.
///
/// # Errors
///
/// Returns `EngineError::InvalidConfiguration` if `threshold` is not > 0.
pub fn classify_batch(
    records: &[TransactionRecord],
    threshold: f64,
) -> Result<Vec<ClassifiedRecord>, EngineError> {
    ClassificationEngine::with_threshold(threshold)?.classify_batch(records)
}

/// One unsent alert per failed or long-running record, in input order.
#[must_use]
pub fn build_alerts(classified: &[ClassifiedRecord]) -> Vec<AlertEvent> {
    classified
        .iter()
        .filter(|c| c.category.is_alert_worthy())
        .map(|c| AlertEvent::new(c.record.clone(), c.category))
        .collect()
}

/// Counts records per category for every region seen in the batch.
#[must_use]
pub fn summarize_by_region(classified: &[ClassifiedRecord]) -> RegionSummary {
    let mut summary = RegionSummary::new();
    for c in classified {
        summary
            .entry(c.record.region.clone())
            .or_default()
            .increment(c.category);
    }
    summary
}

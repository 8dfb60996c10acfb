use anyhow::Context;
use serde::Serialize;

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::entities::classified::ClassifiedRecord;
use crate::domain::entities::summary::RegionSummary;
use crate::domain::entities::transaction::validate_rows;
use crate::domain::errors::MalformedRecord;
use crate::domain::filters::RecordFilter;
use crate::domain::ports::source::RecordSource;
use crate::domain::rules::{
    build_alerts, detect_down_regions, summarize_by_region, ClassificationEngine,
};

/// Everything one batch produced, ready for formatters and notifiers.
#[derive(Debug, Clone, Serialize)]
pub struct BatchReport {
    pub source: String,
    pub classified: Vec<ClassifiedRecord>,
    pub summary: RegionSummary,
    pub alerts: Vec<AlertEvent>,
    pub down_regions: Vec<RegionDown>,
    pub rejected: Vec<MalformedRecord>,
}

impl BatchReport {
    #[must_use]
    pub fn is_healthy(&self) -> bool {
        self.alerts.is_empty() && self.down_regions.is_empty()
    }
}

/// Runs one batch: load → validate → filter → classify → summarize → alerts.
pub struct BatchPipeline<'a> {
    source: &'a dyn RecordSource,
    engine: &'a ClassificationEngine,
    filter: RecordFilter,
}

impl<'a> BatchPipeline<'a> {
    #[must_use]
    pub const fn new(
        source: &'a dyn RecordSource,
        engine: &'a ClassificationEngine,
        filter: RecordFilter,
    ) -> Self {
        Self {
            source,
            engine,
            filter,
        }
    }

    /// Loads and classifies one batch.
    ///
    /// Malformed rows are skipped and listed in [`BatchReport::rejected`].
    ///
    /// # Errors
    ///
    /// Returns an error if the source cannot be loaded, or if the batch is
    /// empty after filtering and the engine rejects empty batches.
    pub fn run(&self) -> anyhow::Result<BatchReport> {
        let source = self.source.describe();
        let rows = self
            .source
            .load()
            .with_context(|| format!("Failed to load records from {source}"))?;

        let (records, rejected) = validate_rows(&rows);
        if !rejected.is_empty() {
            tracing::warn!(
                "{} malformed row(s) skipped out of {}",
                rejected.len(),
                rows.len()
            );
        }

        let records = self.filter.apply(records);
        let classified = self
            .engine
            .classify_batch(&records)
            .context("Batch classification failed")?;

        let summary = summarize_by_region(&classified);
        let alerts = build_alerts(&classified);
        let down_regions = detect_down_regions(&summary);

        tracing::debug!(
            "Batch from {source}: {} classified, {} alert(s), {} region(s) down",
            classified.len(),
            alerts.len(),
            down_regions.len()
        );

        Ok(BatchReport {
            source,
            classified,
            summary,
            alerts,
            down_regions,
            rejected,
        })
    }
}

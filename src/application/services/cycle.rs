use super::dispatch::{AlertDispatcher, DispatchReport};
use super::pipeline::{BatchPipeline, BatchReport};

/// Result of one scan-and-notify cycle.
pub struct CycleResult {
    pub report: BatchReport,
    pub alerts: DispatchReport,
    pub regions: DispatchReport,
}

impl CycleResult {
    #[must_use]
    pub const fn delivery(&self) -> DispatchReport {
        self.alerts.merge(self.regions)
    }
}

/// Runs one batch, then dispatches its alerts and region-down notices.
///
/// # Errors
///
/// Returns an error if the batch itself fails (source or empty-batch policy).
/// Notification failures are counted, never returned.
pub fn run_cycle(
    pipeline: &BatchPipeline<'_>,
    dispatcher: &AlertDispatcher<'_>,
) -> anyhow::Result<CycleResult> {
    let mut report = pipeline.run()?;

    if report.is_healthy() {
        tracing::debug!("Batch OK, no alerts");
    } else {
        tracing::warn!(
            "{} alert(s), {} region(s) down",
            report.alerts.len(),
            report.down_regions.len()
        );
    }

    let alerts = dispatcher.dispatch(&mut report.alerts);
    let regions = dispatcher.dispatch_region_down(&report.down_regions);

    Ok(CycleResult {
        report,
        alerts,
        regions,
    })
}

use serde::Serialize;

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::ports::notifier::{Delivery, Notifier};

/// Outcome of handing a set of notices to the notifier.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct DispatchReport {
    pub attempted: usize,
    pub sent: usize,
    pub failed: usize,
    /// Accepted by the notifier but filtered out by every channel
    pub skipped: usize,
}

impl DispatchReport {
    fn record(&mut self, outcome: Option<Delivery>) {
        self.attempted += 1;
        match outcome {
            Some(Delivery::Sent) => self.sent += 1,
            Some(Delivery::Skipped) => self.skipped += 1,
            None => self.failed += 1,
        }
    }

    /// Adds another report's counters to this one
    #[must_use]
    pub const fn merge(self, other: Self) -> Self {
        Self {
            attempted: self.attempted + other.attempted,
            sent: self.sent + other.sent,
            failed: self.failed + other.failed,
            skipped: self.skipped + other.skipped,
        }
    }
}

/// Hands alerts to a notifier and records whether delivery succeeded.
///
/// Only `Delivery::Sent` marks an event sent. A skipped or failed delivery
/// leaves `sent = false`, and a failure is logged without aborting the batch.
pub struct AlertDispatcher<'a> {
    notifier: &'a dyn Notifier,
}

impl<'a> AlertDispatcher<'a> {
    #[must_use]
    pub const fn new(notifier: &'a dyn Notifier) -> Self {
        Self { notifier }
    }

    /// Notifies once per event, in order. Events already marked sent are skipped.
    pub fn dispatch(&self, alerts: &mut [AlertEvent]) -> DispatchReport {
        let mut report = DispatchReport::default();
        for alert in alerts.iter_mut().filter(|a| !a.sent) {
            match self.notifier.notify(alert) {
                Ok(outcome) => {
                    alert.sent = outcome.is_sent();
                    if !alert.sent {
                        tracing::debug!(
                            "Alert for {} skipped by every channel",
                            alert.record.transaction_id
                        );
                    }
                    report.record(Some(outcome));
                }
                Err(e) => {
                    tracing::warn!(
                        "Alert for {} not delivered: {e}",
                        alert.record.transaction_id
                    );
                    report.record(None);
                }
            }
        }
        report
    }

    pub fn dispatch_region_down(&self, regions: &[RegionDown]) -> DispatchReport {
        let mut report = DispatchReport::default();
        for down in regions {
            let outcome = match self.notifier.notify_region_down(down) {
                Ok(outcome) => Some(outcome),
                Err(e) => {
                    tracing::warn!("Region-down notice for {} not delivered: {e}", down.region);
                    None
                }
            };
            report.record(outcome);
        }
        report
    }
}

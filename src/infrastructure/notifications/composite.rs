use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::ports::notifier::{Delivery, NotificationError, Notifier};

/// Forwards notifications to multiple notifiers.
///
/// Calls each notifier in order and always calls all of them. Returns the
/// first error encountered, if any. With no notifiers every notice is
/// `ChannelUnavailable`.
pub struct CompositeNotifier {
    notifiers: Vec<Box<dyn Notifier>>,
}

impl CompositeNotifier {
    #[must_use]
    pub fn new(notifiers: Vec<Box<dyn Notifier>>) -> Self {
        Self { notifiers }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.notifiers.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.notifiers.is_empty()
    }

    /// Folds per-channel outcomes: the first error wins, otherwise `Sent`
    /// when at least one channel delivered, otherwise `Skipped`.
    fn fan_out(
        &self,
        what: &str,
        send: impl Fn(&dyn Notifier) -> Result<Delivery, NotificationError>,
    ) -> Result<Delivery, NotificationError> {
        if self.notifiers.is_empty() {
            return Err(NotificationError::ChannelUnavailable(
                "no notification channel enabled".to_string(),
            ));
        }

        let mut first_error = None;
        let mut outcome = Delivery::Skipped;
        for notifier in &self.notifiers {
            match send(notifier.as_ref()) {
                Ok(Delivery::Sent) => outcome = Delivery::Sent,
                Ok(Delivery::Skipped) => {}
                Err(e) => {
                    tracing::warn!("{what} failed: {e}");
                    if first_error.is_none() {
                        first_error = Some(e);
                    }
                }
            }
        }
        first_error.map_or(Ok(outcome), Err)
    }
}

impl Default for CompositeNotifier {
    fn default() -> Self {
        Self::new(Vec::new())
    }
}

impl Notifier for CompositeNotifier {
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError> {
        self.fan_out("Notification", |n| n.notify(alert))
    }

    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError> {
        self.fan_out("Region notification", |n| n.notify_region_down(down))
    }
}

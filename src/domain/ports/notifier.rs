use thiserror::Error;

use crate::domain::entities::alert::{AlertEvent, RegionDown};

#[derive(Error, Debug)]
pub enum NotificationError {
    #[error("failed to send notification: {0}")]
    SendFailed(String),
    #[error("notification channel unavailable: {0}")]
    ChannelUnavailable(String),
}

/// What a channel did with a notice it did not reject.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    Sent,
    /// The channel filtered the notice out (e.g. below its minimum category).
    Skipped,
}

impl Delivery {
    #[must_use]
    pub const fn is_sent(self) -> bool {
        matches!(self, Self::Sent)
    }
}

pub trait Notifier: Send + Sync {
    /// Deliver a notification for one alert.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notification fails to send
    /// or the channel is unavailable.
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError>;

    /// Deliver a notice that a whole region is down.
    ///
    /// # Errors
    ///
    /// Returns `NotificationError` if the notification fails to send
    /// or the channel is unavailable.
    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError>;
}

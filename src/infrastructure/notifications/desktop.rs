use notify_rust::{Notification, Timeout, Urgency};

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::ports::notifier::{Delivery, NotificationError, Notifier};
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::time_unit::TimeUnit;

const MAX_BODY_CHARS: usize = 250;
const MAX_SUMMARY_CHARS: usize = 100;

/// Pops a desktop notification through the session's notification server
pub struct DesktopNotifier {
    unit: TimeUnit,
}

impl DesktopNotifier {
    #[must_use]
    pub const fn new(unit: TimeUnit) -> Self {
        Self { unit }
    }
}

impl Default for DesktopNotifier {
    fn default() -> Self {
        Self::new(TimeUnit::default())
    }
}

impl Notifier for DesktopNotifier {
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError> {
        let raw_summary = format!(
            "{} txpulse \u{2014} {}",
            alert.category.emoji(),
            alert.subject()
        );
        let summary = truncate(&escape_markup(&raw_summary), MAX_SUMMARY_CHARS);
        let body = truncate(&escape_markup(&alert.message(self.unit)), MAX_BODY_CHARS);

        send_notification(&summary, &body, category_to_urgency(alert.category))?;
        Ok(Delivery::Sent)
    }

    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError> {
        let raw_summary = format!("\u{26a0}\u{fe0f} txpulse \u{2014} {}", down.subject());
        let summary = truncate(&escape_markup(&raw_summary), MAX_SUMMARY_CHARS);
        let body = truncate(&escape_markup(&down.message()), MAX_BODY_CHARS);

        send_notification(&summary, &body, Urgency::Critical)?;
        Ok(Delivery::Sent)
    }
}

fn send_notification(summary: &str, body: &str, urgency: Urgency) -> Result<(), NotificationError> {
    Notification::new()
        .summary(summary)
        .body(body)
        .urgency(urgency)
        .timeout(Timeout::Milliseconds(10_000))
        .show()
        .map_err(|_| {
            NotificationError::ChannelUnavailable(
                "desktop notification server unreachable".to_string(),
            )
        })?;

    Ok(())
}

#[must_use]
const fn category_to_urgency(category: Category) -> Urgency {
    match category {
        Category::Failed => Urgency::Critical,
        Category::LongRunning => Urgency::Normal,
        Category::Normal => Urgency::Low,
    }
}

// Truncates on Unicode scalar values (not grapheme clusters; ZWJ sequences may split).
fn truncate(s: &str, max_chars: usize) -> String {
    if s.chars().count() <= max_chars {
        s.to_owned()
    } else {
        let mut result: String = s.chars().take(max_chars - 1).collect();
        result.push('\u{2026}');
        result
    }
}

fn escape_markup(s: &str) -> String {
    s.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
}

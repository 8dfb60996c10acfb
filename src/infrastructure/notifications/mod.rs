pub mod composite;
pub mod desktop;
pub mod log_file;
pub mod terminal;
pub mod webhook;

use crate::application::config::NotificationConfig;
use crate::domain::ports::notifier::Notifier;
use crate::domain::value_objects::time_unit::TimeUnit;

use composite::CompositeNotifier;
use desktop::DesktopNotifier;
use log_file::LogFileNotifier;
use terminal::TerminalNotifier;
use webhook::WebhookNotifier;

/// Builds the composite notifier from the enabled channels.
///
/// A webhook whose HTTP client cannot be built is skipped with a warning
/// rather than failing the whole run.
#[must_use]
pub fn create_notifier(config: &NotificationConfig, unit: TimeUnit) -> CompositeNotifier {
    let mut notifiers: Vec<Box<dyn Notifier>> = Vec::new();

    if config.terminal {
        notifiers.push(Box::new(TerminalNotifier::new(unit)));
    }
    if config.desktop {
        notifiers.push(Box::new(DesktopNotifier::new(unit)));
    }
    if let Some(ref path) = config.log_file {
        notifiers.push(Box::new(LogFileNotifier::new(path, unit)));
    }
    if let Some(ref url) = config.webhook_url {
        match WebhookNotifier::new(url.clone(), config.webhook_min_category, unit) {
            Ok(n) => notifiers.push(Box::new(n)),
            Err(e) => tracing::warn!("Webhook disabled: {e}"),
        }
    }

    tracing::debug!("{} notification channel(s) enabled", notifiers.len());
    CompositeNotifier::new(notifiers)
}

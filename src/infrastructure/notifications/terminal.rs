use std::borrow::Cow;

use colored::Colorize;

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::ports::notifier::{Delivery, NotificationError, Notifier};
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::time_unit::TimeUnit;

const SEPARATOR_WIDTH: usize = 70;

/// Prints alerts to stdout as boxed, coloured blocks
pub struct TerminalNotifier {
    unit: TimeUnit,
}

impl TerminalNotifier {
    #[must_use]
    pub const fn new(unit: TimeUnit) -> Self {
        Self { unit }
    }
}

impl Default for TerminalNotifier {
    fn default() -> Self {
        Self::new(TimeUnit::default())
    }
}

impl Notifier for TerminalNotifier {
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError> {
        let separator = "\u{2500}".repeat(SEPARATOR_WIDTH);

        println!("\n{}", separator.dimmed());
        println!(
            "{} {}",
            category_badge(alert.category),
            sanitize(&alert.subject()).bold()
        );
        println!("{}", separator.dimmed());
        println!("{}", sanitize(&alert.message(self.unit)));
        println!("{}\n", separator.dimmed());
        Ok(Delivery::Sent)
    }

    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError> {
        let separator = "\u{2550}".repeat(SEPARATOR_WIDTH);

        println!("\n{}", separator.red());
        println!(
            "{}",
            format!(" \u{26a0}\u{fe0f} {} ", down.subject())
                .on_red()
                .white()
                .bold()
        );
        println!("{}", separator.red());
        println!("{}", sanitize(&down.message()));
        println!("{}\n", separator.red());
        Ok(Delivery::Sent)
    }
}

/// Strip ANSI escape sequences and C0/C1 control characters from a string,
/// preserving only printable content, newlines, and tabs.
fn sanitize(s: &str) -> Cow<'_, str> {
    if s.bytes()
        .any(|b| matches!(b, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
    {
        Cow::Owned(
            s.chars()
                .filter(|&c| !matches!(c as u32, 0x00..=0x08 | 0x0B..=0x0C | 0x0E..=0x1F | 0x7F))
                .collect(),
        )
    } else {
        Cow::Borrowed(s)
    }
}

#[must_use]
fn category_badge(category: Category) -> String {
    let label = format!(" {} {} ", category.emoji(), category);
    match category {
        Category::Failed => label.on_red().white().bold().to_string(),
        Category::LongRunning => label.on_yellow().black().bold().to_string(),
        Category::Normal => label.on_green().black().to_string(),
    }
}

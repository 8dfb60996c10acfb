use colored::Colorize;

use crate::domain::entities::alert::{AlertEvent, RegionDown};
use crate::domain::errors::MalformedRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::time_unit::TimeUnit;

use super::status_fmt::sanitize_terminal;

fn category_badge(category: Category) -> String {
    let label = format!(" {category} ");
    match category {
        Category::Failed => format!("{}", label.on_red().white().bold()),
        Category::LongRunning => format!("{}", label.on_yellow().black().bold()),
        Category::Normal => format!("{}", label.on_green().black()),
    }
}

fn sent_marker(sent: bool) -> String {
    if sent {
        format!("{}", "[sent]".green())
    } else {
        format!("{}", "[not sent]".dimmed())
    }
}

pub fn format_alerts(alerts: &[AlertEvent], unit: TimeUnit) {
    for alert in alerts {
        println!();
        println!(
            "{} {} {} {}",
            category_badge(alert.category),
            alert.category.emoji(),
            sanitize_terminal(&alert.subject()).bold(),
            sent_marker(alert.sent)
        );
        println!("  {}", sanitize_terminal(&alert.message(unit)).dimmed());
    }
    println!();
}

pub fn format_down_regions(regions: &[RegionDown]) {
    for down in regions {
        println!(
            "{} {}",
            " REGION DOWN ".on_red().white().bold(),
            sanitize_terminal(&down.message())
        );
    }
}

/// One line per skipped input row
#[must_use]
pub fn format_rejected(rejected: &[MalformedRecord]) -> String {
    rejected
        .iter()
        .map(|r| {
            format!(
                "  {} {}",
                format!("row {}", r.row).yellow(),
                sanitize_terminal(&r.reason)
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

pub fn print_no_alerts() {
    println!();
    println!(
        "{}",
        "✅ Healthy batch, no alerts raised".green().bold()
    );
    println!();
}

use colored::Colorize;

use super::status_fmt::{alert_share, colorize_share, health_bar};
use crate::domain::entities::summary::{CategoryCounts, RegionSummary};

const BAR_WIDTH: usize = 10;

/// Formats the per-region summary, one row per region sorted by name,
/// followed by a totals row.
#[must_use]
pub fn format_region_summary(summary: &RegionSummary) -> String {
    let header = format!(
        "{:<12} {:>7} {:>13} {:>7} {:>7}  {:<width$} {:>7}",
        "REGION",
        "NORMAL",
        "LONG RUNNING",
        "FAILED",
        "TOTAL",
        "ALERTS",
        "",
        width = BAR_WIDTH
    );
    let separator = "─".repeat(header.trim_end().chars().count());
    let mut rows = vec![header.trim_end().to_string(), separator.clone()];

    let mut totals = CategoryCounts::default();
    for (region, counts) in summary {
        rows.push(format_row(region, counts));
        totals.normal += counts.normal;
        totals.long_running += counts.long_running;
        totals.failed += counts.failed;
    }

    rows.push(separator);
    rows.push(
        format!(
            "{:<12} {:>7} {:>13} {:>7} {:>7}",
            "TOTAL",
            totals.normal,
            totals.long_running,
            totals.failed,
            totals.total()
        )
        .bold()
        .to_string(),
    );

    rows.join("\n")
}

fn format_row(region: &str, counts: &CategoryCounts) -> String {
    let name: String = region.chars().take(11).collect();
    let share = alert_share(counts);
    format!(
        "{:<12} {:>7} {:>13} {:>7} {:>7}  {} {:>7}",
        name,
        counts.normal,
        counts.long_running,
        counts.failed,
        counts.total(),
        health_bar(share, BAR_WIDTH),
        colorize_share(share)
    )
}

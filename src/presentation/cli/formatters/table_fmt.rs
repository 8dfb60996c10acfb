use crate::domain::entities::classified::ClassifiedRecord;
use crate::domain::value_objects::category::Category;
use crate::domain::value_objects::time_unit::TimeUnit;
use colored::Colorize;

use super::status_fmt::sanitize_terminal;

/// Formats classified transactions as an aligned table, in batch order.
///
/// # Returns
///
/// A multi-line string with header, separator, and one row per record.
/// Failed rows are red, long-running rows yellow.
#[must_use]
pub fn format_transaction_table(classified: &[ClassifiedRecord], unit: TimeUnit) -> String {
    let time_header = format!("TIME({})", unit.suffix());
    let header = format!(
        "{:<16} {:<12} {:>10} {:<8} {:<14}",
        "TRANSACTION", "REGION", time_header, "STATUS", "CATEGORY"
    );
    let separator = "─".repeat(header.chars().count());

    let mut rows = vec![header, separator];

    for c in classified {
        let id: String = sanitize_terminal(&c.record.transaction_id)
            .chars()
            .take(15)
            .collect();
        let region: String = sanitize_terminal(&c.record.region)
            .chars()
            .take(11)
            .collect();
        let row = format!(
            "{:<16} {:<12} {:>10.1} {:<8} {:<14}",
            id,
            region,
            c.record.response_time,
            c.record.status.to_string(),
            c.category.to_string()
        );
        let row = match c.category {
            Category::Failed => row.red().to_string(),
            Category::LongRunning => row.yellow().to_string(),
            Category::Normal => row,
        };
        rows.push(row);
    }

    rows.join("\n")
}

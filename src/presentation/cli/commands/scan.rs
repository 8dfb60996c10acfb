use serde::Serialize;

use crate::application::services::cycle::run_cycle;
use crate::application::services::dispatch::{AlertDispatcher, DispatchReport};
use crate::application::services::pipeline::{BatchPipeline, BatchReport};
use crate::domain::value_objects::time_unit::TimeUnit;
use crate::presentation::cli::formatters::status_fmt::print_section_header;
use crate::presentation::cli::formatters::{alert_fmt, summary_fmt, table_fmt};

#[derive(Serialize)]
struct ScanOutput<'a> {
    #[serde(flatten)]
    report: &'a BatchReport,
    #[serde(skip_serializing_if = "Option::is_none")]
    delivery: Option<DispatchReport>,
}

/// Runs a one-shot scan: load, classify, display. With a dispatcher the
/// alerts are also sent through the notification channels.
///
/// # Errors
///
/// Returns an error if the batch fails or JSON serialization fails.
pub fn run_scan(
    pipeline: &BatchPipeline<'_>,
    dispatcher: Option<&AlertDispatcher<'_>>,
    unit: TimeUnit,
    json: bool,
) -> anyhow::Result<()> {
    let (report, delivery) = match dispatcher {
        Some(dispatcher) => {
            let result = run_cycle(pipeline, dispatcher)?;
            let delivery = result.delivery();
            (result.report, Some(delivery))
        }
        None => (pipeline.run()?, None),
    };

    if json {
        print_scan_json(&report, delivery)?;
    } else {
        print_scan_human(&report, delivery, unit);
    }

    Ok(())
}

fn print_scan_json(report: &BatchReport, delivery: Option<DispatchReport>) -> anyhow::Result<()> {
    let output = serde_json::to_string_pretty(&ScanOutput { report, delivery })?;
    println!("{output}");
    Ok(())
}

fn print_scan_human(report: &BatchReport, delivery: Option<DispatchReport>, unit: TimeUnit) {
    print_section_header(&format!("🔍 Transaction scan: {}", report.source));
    println!("{}", table_fmt::format_transaction_table(&report.classified, unit));
    println!();

    print_section_header("📊 Region summary");
    println!("{}", summary_fmt::format_region_summary(&report.summary));
    println!();

    if !report.rejected.is_empty() {
        print_section_header("⚠️  Skipped rows");
        println!("{}", alert_fmt::format_rejected(&report.rejected));
        println!();
    }

    print_section_header("🚨 Alerts");
    if report.is_healthy() {
        alert_fmt::print_no_alerts();
    } else {
        println!("{} alert(s) raised:", report.alerts.len());
        alert_fmt::format_alerts(&report.alerts, unit);
        alert_fmt::format_down_regions(&report.down_regions);
    }

    if let Some(d) = delivery {
        println!(
            "Notifications: {} attempted, {} sent, {} skipped, {} failed",
            d.attempted, d.sent, d.skipped, d.failed
        );
    }
}

#![allow(clippy::expect_used)]

use std::path::PathBuf;
use std::sync::Mutex;

use txpulse::application::config::{AppConfig, NotificationConfig};
use txpulse::application::services::cycle::run_cycle;
use txpulse::application::services::dispatch::AlertDispatcher;
use txpulse::application::services::pipeline::BatchPipeline;
use txpulse::domain::entities::alert::{AlertEvent, RegionDown};
use txpulse::domain::entities::summary::CategoryCounts;
use txpulse::domain::entities::transaction::{TransactionRecord, TransactionStatus};
use txpulse::domain::filters::RecordFilter;
use txpulse::domain::ports::notifier::{Delivery, NotificationError, Notifier};
use txpulse::domain::rules::ClassificationEngine;
use txpulse::domain::value_objects::category::Category;
use txpulse::domain::value_objects::time_unit::TimeUnit;
use txpulse::infrastructure::notifications::create_notifier;
use txpulse::infrastructure::notifications::log_file::LogFileNotifier;
use txpulse::infrastructure::sources::csv_source::CsvSource;

fn fixture(name: &str) -> PathBuf {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
}

fn csv_fixture(name: &str) -> CsvSource {
    CsvSource::new(&fixture(name).to_string_lossy())
}

// ---------------------------------------------------------------------------
// TrackingNotifier
// ---------------------------------------------------------------------------

struct TrackingNotifier {
    alerts: Mutex<Vec<AlertEvent>>,
    regions: Mutex<Vec<RegionDown>>,
    fail_failed: bool,
}

impl TrackingNotifier {
    const fn new(fail_failed: bool) -> Self {
        Self {
            alerts: Mutex::new(vec![]),
            regions: Mutex::new(vec![]),
            fail_failed,
        }
    }

    fn alert_ids(&self) -> Vec<String> {
        self.alerts
            .lock()
            .expect("lock")
            .iter()
            .map(|a| a.record.transaction_id.clone())
            .collect()
    }
}

impl Notifier for TrackingNotifier {
    fn notify(&self, alert: &AlertEvent) -> Result<Delivery, NotificationError> {
        if self.fail_failed && alert.category == Category::Failed {
            return Err(NotificationError::SendFailed("mail relay down".into()));
        }
        self.alerts.lock().expect("lock").push(alert.clone());
        Ok(Delivery::Sent)
    }

    fn notify_region_down(&self, down: &RegionDown) -> Result<Delivery, NotificationError> {
        self.regions.lock().expect("lock").push(down.clone());
        Ok(Delivery::Sent)
    }
}

// ---------------------------------------------------------------------------
// Batch from CSV fixtures
// ---------------------------------------------------------------------------

#[test]
fn fixture_batch_classified_and_summarized() {
    let source = csv_fixture("transactions.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let report = BatchPipeline::new(&source, &engine, RecordFilter::default())
        .run()
        .expect("run");

    assert_eq!(report.classified.len(), 8);
    assert!(report.rejected.is_empty());

    let alert_ids: Vec<&str> = report
        .alerts
        .iter()
        .map(|a| a.record.transaction_id.as_str())
        .collect();
    assert_eq!(alert_ids, vec!["TXN002", "TXN003", "TXN004", "TXN007"]);

    assert_eq!(
        report.summary["PRDCICS01"],
        CategoryCounts {
            normal: 2,
            long_running: 1,
            failed: 0
        }
    );
    assert_eq!(
        report.summary["PRDCICS02"],
        CategoryCounts {
            normal: 0,
            long_running: 1,
            failed: 1
        }
    );
    assert_eq!(
        report.summary["PRDCICS03"],
        CategoryCounts {
            normal: 2,
            long_running: 0,
            failed: 1
        }
    );

    assert_eq!(report.down_regions.len(), 1);
    assert_eq!(report.down_regions[0].region, "PRDCICS02");
    assert_eq!(report.down_regions[0].total, 2);
}

#[test]
fn malformed_fixture_skips_and_reports_rows() {
    let source = csv_fixture("malformed.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let report = BatchPipeline::new(&source, &engine, RecordFilter::default())
        .run()
        .expect("run");

    let ids: Vec<&str> = report
        .classified
        .iter()
        .map(|c| c.record.transaction_id.as_str())
        .collect();
    assert_eq!(ids, vec!["TXN101", "TXN107"]);

    let rows: Vec<usize> = report.rejected.iter().map(|r| r.row).collect();
    assert_eq!(rows, vec![2, 3, 4, 5, 6]);
    assert!(report.rejected[0].reason.contains("region"));
    assert!(report.rejected[1].reason.contains("not a number"));

    assert_eq!(report.classified[1].category, Category::Failed);
}

#[test]
fn region_and_prefix_filters_narrow_the_batch() {
    let source = csv_fixture("transactions.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let filter = RecordFilter::new(Some("prdcics03".into()), Some("TXN00".into()));
    let report = BatchPipeline::new(&source, &engine, filter)
        .run()
        .expect("run");

    assert_eq!(report.classified.len(), 3);
    assert_eq!(report.summary.len(), 1);
    assert!(report.down_regions.is_empty());
}

#[test]
fn missing_csv_is_an_error() {
    let source = CsvSource::new("/nonexistent/txpulse/batch.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let result = BatchPipeline::new(&source, &engine, RecordFilter::default()).run();
    assert!(result.is_err());
}

// ---------------------------------------------------------------------------
// Dispatch
// ---------------------------------------------------------------------------

#[test]
fn cycle_delivers_alerts_and_region_notices() {
    let source = csv_fixture("transactions.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let pipeline = BatchPipeline::new(&source, &engine, RecordFilter::default());
    let notifier = TrackingNotifier::new(false);
    let dispatcher = AlertDispatcher::new(&notifier);

    let result = run_cycle(&pipeline, &dispatcher).expect("cycle");
    assert_eq!(result.alerts.sent, 4);
    assert_eq!(result.regions.sent, 1);
    assert!(result.report.alerts.iter().all(|a| a.sent));
    assert_eq!(
        notifier.alert_ids(),
        vec!["TXN002", "TXN003", "TXN004", "TXN007"]
    );
    assert_eq!(notifier.regions.lock().expect("lock").len(), 1);
}

#[test]
fn failed_delivery_is_recorded_not_raised() {
    let source = csv_fixture("transactions.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let pipeline = BatchPipeline::new(&source, &engine, RecordFilter::default());
    let notifier = TrackingNotifier::new(true);
    let dispatcher = AlertDispatcher::new(&notifier);

    let result = run_cycle(&pipeline, &dispatcher).expect("cycle");
    assert_eq!(result.alerts.attempted, 4);
    assert_eq!(result.alerts.sent, 2);
    assert_eq!(result.alerts.failed, 2);

    let unsent: Vec<&str> = result
        .report
        .alerts
        .iter()
        .filter(|a| !a.sent)
        .map(|a| a.record.transaction_id.as_str())
        .collect();
    assert_eq!(unsent, vec!["TXN003", "TXN007"]);
}

#[test]
fn log_file_channel_records_every_alert() {
    let dir = tempfile::tempdir().expect("tempdir");
    let log_path = dir.path().join("alerts.log");
    let source = csv_fixture("transactions.csv");
    let engine = ClassificationEngine::with_threshold(350.0).expect("engine");
    let pipeline = BatchPipeline::new(&source, &engine, RecordFilter::default());
    let notifier = LogFileNotifier::new(&log_path.to_string_lossy(), TimeUnit::Milliseconds);
    let dispatcher = AlertDispatcher::new(&notifier);

    let result = run_cycle(&pipeline, &dispatcher).expect("cycle");
    assert_eq!(result.delivery().failed, 0);

    let content = std::fs::read_to_string(&log_path).expect("read log");
    let lines: Vec<serde_json::Value> = content
        .lines()
        .map(|l| serde_json::from_str(l).expect("json line"))
        .collect();
    assert_eq!(lines.len(), 5);
    assert_eq!(lines[0]["transaction_id"], "TXN002");
    assert_eq!(lines[4]["kind"], "region_down");
}

fn silent_channels() -> NotificationConfig {
    NotificationConfig {
        terminal: false,
        desktop: false,
        log_file: None,
        webhook_url: None,
        ..NotificationConfig::default()
    }
}

#[test]
fn no_enabled_channel_leaves_alerts_unsent() {
    let notifier = create_notifier(&silent_channels(), TimeUnit::Milliseconds);
    assert!(notifier.is_empty());
    let dispatcher = AlertDispatcher::new(&notifier);
    let mut alerts = vec![AlertEvent::new(
        TransactionRecord::new("TXN003", "PRDCICS02", 120.0, TransactionStatus::Failed),
        Category::Failed,
    )];

    let report = dispatcher.dispatch(&mut alerts);
    assert_eq!(report.attempted, 1);
    assert_eq!(report.sent, 0);
    assert_eq!(report.failed, 1);
    assert!(!alerts[0].sent);
}

#[test]
fn alert_below_webhook_minimum_is_skipped_not_sent() {
    let config = NotificationConfig {
        webhook_url: Some("https://example.com/hook".into()),
        webhook_min_category: Category::Failed,
        ..silent_channels()
    };
    let notifier = create_notifier(&config, TimeUnit::Milliseconds);
    let dispatcher = AlertDispatcher::new(&notifier);
    let mut alerts = vec![AlertEvent::new(
        TransactionRecord::new("TXN002", "PRDCICS01", 480.0, TransactionStatus::Success),
        Category::LongRunning,
    )];

    let report = dispatcher.dispatch(&mut alerts);
    assert_eq!(report.skipped, 1);
    assert_eq!(report.sent, 0);
    assert_eq!(report.failed, 0);
    assert!(!alerts[0].sent);
}

// ---------------------------------------------------------------------------
// Config-driven engine
// ---------------------------------------------------------------------------

#[test]
fn config_file_drives_threshold() {
    let dir = tempfile::tempdir().expect("tempdir");
    let path = dir.path().join("config.toml");
    std::fs::write(&path, "[general]\nthreshold = 100.0\n").expect("write config");

    let config = AppConfig::load_from(&path).expect("load");
    let engine = config.engine();
    let source = csv_fixture("transactions.csv");
    let report = BatchPipeline::new(&source, &engine, RecordFilter::default())
        .run()
        .expect("run");

    // Only TXN003, TXN007 (failed) and TXN008 (60) stay out of LongRunning
    let long_running = report
        .classified
        .iter()
        .filter(|c| c.category == Category::LongRunning)
        .count();
    assert_eq!(long_running, 5);
}

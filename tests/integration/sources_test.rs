#![allow(clippy::expect_used)]

use std::collections::BTreeSet;

use txpulse::domain::entities::transaction::{validate_rows, TransactionStatus};
use txpulse::domain::ports::source::{RecordSource, SourceError};
use txpulse::infrastructure::sources::create_source;
use txpulse::infrastructure::sources::csv_source::{parse_csv, write_csv, CsvSource};
use txpulse::infrastructure::sources::synthetic::SyntheticSource;

fn fixture_path(name: &str) -> String {
    std::path::Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("tests/fixtures")
        .join(name)
        .to_string_lossy()
        .into_owned()
}

// ---------------------------------------------------------------------------
// CSV
// ---------------------------------------------------------------------------

#[test]
fn csv_fixture_loads_all_rows_in_order() {
    let rows = CsvSource::new(&fixture_path("transactions.csv"))
        .load()
        .expect("load");
    assert_eq!(rows.len(), 8);
    assert_eq!(rows[0].transaction_id.as_deref(), Some("TXN001"));
    assert_eq!(rows[7].transaction_id.as_deref(), Some("TXN008"));
}

#[test]
fn csv_free_text_statuses_are_normalised() {
    let rows = CsvSource::new(&fixture_path("transactions.csv"))
        .load()
        .expect("load");
    let (records, rejected) = validate_rows(&rows);
    assert!(rejected.is_empty());

    let failed: Vec<&str> = records
        .iter()
        .filter(|r| r.status == TransactionStatus::Failed)
        .map(|r| r.transaction_id.as_str())
        .collect();
    // FAILED and Error both count as failures; Critical/Warning/Running do not
    assert_eq!(failed, vec!["TXN003", "TXN007"]);
}

#[test]
fn csv_snake_case_header_is_accepted() {
    let rows = CsvSource::new(&fixture_path("malformed.csv"))
        .load()
        .expect("load");
    assert_eq!(rows.len(), 7);
    assert_eq!(rows[5].status, None);
}

#[test]
fn csv_without_region_column_is_invalid_format() {
    let data = "Transaction ID,Response Time,Status\nTXN001,10,Running\n";
    let result = parse_csv(data.as_bytes());
    assert!(matches!(result, Err(SourceError::InvalidFormat(_))));
}

#[test]
fn csv_missing_file_is_unavailable() {
    let result = CsvSource::new("/nonexistent/batch.csv").load();
    assert!(matches!(result, Err(SourceError::Unavailable(_))));
}

#[test]
fn csv_write_then_parse_preserves_rows() {
    let rows = SyntheticSource::new(15, 5, 0.2)
        .with_seed(11)
        .load()
        .expect("generate");
    let mut buf = Vec::new();
    write_csv(&rows, &mut buf).expect("write");

    let text = String::from_utf8(buf).expect("utf8");
    assert!(text.starts_with("Transaction ID,Region,Response Time,Status"));
    assert_eq!(parse_csv(text.as_bytes()).expect("parse"), rows);
}

// ---------------------------------------------------------------------------
// Synthetic
// ---------------------------------------------------------------------------

#[test]
fn synthetic_rows_are_all_valid() {
    let rows = SyntheticSource::new(200, 9, 0.05)
        .with_seed(5)
        .load()
        .expect("generate");
    let (records, rejected) = validate_rows(&rows);
    assert_eq!(records.len(), 200);
    assert!(rejected.is_empty());
    assert!(records
        .iter()
        .all(|r| (50.0..500.0).contains(&r.response_time)));
}

#[test]
fn synthetic_regions_stay_within_count() {
    let rows = SyntheticSource::new(100, 3, 0.0)
        .with_seed(8)
        .load()
        .expect("generate");
    let regions: BTreeSet<String> = rows.iter().filter_map(|r| r.region.clone()).collect();
    assert!(regions.len() <= 3);
    assert!(regions
        .iter()
        .all(|r| ["PRDCICS01", "PRDCICS02", "PRDCICS03"].contains(&r.as_str())));
}

#[test]
fn synthetic_seed_is_reproducible() {
    let a = SyntheticSource::new(30, 9, 0.1).with_seed(99).load().expect("a");
    let b = SyntheticSource::new(30, 9, 0.1).with_seed(99).load().expect("b");
    assert_eq!(a, b);
}

#[test]
fn synthetic_full_failure_rate_fails_everything() {
    let rows = SyntheticSource::new(25, 9, 1.0)
        .with_seed(2)
        .load()
        .expect("generate");
    let (records, _) = validate_rows(&rows);
    assert!(records
        .iter()
        .all(|r| r.status == TransactionStatus::Failed));
}

// ---------------------------------------------------------------------------
// Factory
// ---------------------------------------------------------------------------

#[test]
fn factory_prefers_csv_when_path_given() {
    let source = create_source(Some(&fixture_path("transactions.csv")), 20, 9, 0.0);
    assert_eq!(source.load().expect("load").len(), 8);

    let source = create_source(None, 12, 9, 0.0);
    assert_eq!(source.load().expect("load").len(), 12);
}

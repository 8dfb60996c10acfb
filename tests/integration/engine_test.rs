#![allow(clippy::expect_used)]

use txpulse::domain::entities::summary::{summary_total, CategoryCounts};
use txpulse::domain::entities::transaction::{TransactionRecord, TransactionStatus};
use txpulse::domain::errors::EngineError;
use txpulse::domain::rules::{
    build_alerts, classify, classify_batch, detect_down_regions, summarize_by_region,
    ClassificationEngine,
};
use txpulse::domain::value_objects::batch_policy::EmptyBatchPolicy;
use txpulse::domain::value_objects::category::Category;

fn rec(id: &str, region: &str, time: f64, status: TransactionStatus) -> TransactionRecord {
    TransactionRecord::new(id, region, time, status)
}

fn worked_example() -> Vec<TransactionRecord> {
    vec![
        rec("T1", "R1", 3.0, TransactionStatus::Success),
        rec("T2", "R1", 6.0, TransactionStatus::Success),
        rec("T3", "R2", 1.0, TransactionStatus::Failed),
    ]
}

// ---------------------------------------------------------------------------
// Worked example
// ---------------------------------------------------------------------------

#[test]
fn worked_example_end_to_end() {
    let classified = classify_batch(&worked_example(), 5.0).expect("classify");
    let categories: Vec<Category> = classified.iter().map(|c| c.category).collect();
    assert_eq!(
        categories,
        vec![Category::Normal, Category::LongRunning, Category::Failed]
    );

    let alerts = build_alerts(&classified);
    let alert_view: Vec<(&str, Category)> = alerts
        .iter()
        .map(|a| (a.record.transaction_id.as_str(), a.category))
        .collect();
    assert_eq!(
        alert_view,
        vec![("T2", Category::LongRunning), ("T3", Category::Failed)]
    );

    let summary = summarize_by_region(&classified);
    assert_eq!(
        summary.get("R1"),
        Some(&CategoryCounts {
            normal: 1,
            long_running: 1,
            failed: 0
        })
    );
    assert_eq!(
        summary.get("R2"),
        Some(&CategoryCounts {
            normal: 0,
            long_running: 0,
            failed: 1
        })
    );
}

// ---------------------------------------------------------------------------
// Invariants
// ---------------------------------------------------------------------------

#[test]
fn failure_beats_response_time() {
    for time in [0.0, 4.9, 5.0, 5.1, 10_000.0] {
        let r = rec("T", "R", time, TransactionStatus::Failed);
        assert_eq!(classify(&r, 5.0).expect("classify"), Category::Failed);
    }
}

#[test]
fn threshold_is_strict() {
    let at = rec("T", "R", 5.0, TransactionStatus::Success);
    let above = rec("T", "R", 5.000_001, TransactionStatus::Success);
    assert_eq!(classify(&at, 5.0).expect("classify"), Category::Normal);
    assert_eq!(classify(&above, 5.0).expect("classify"), Category::LongRunning);
}

#[test]
fn classify_batch_matches_single_classify() {
    let records = worked_example();
    let classified = classify_batch(&records, 2.0).expect("classify");
    assert_eq!(classified.len(), records.len());
    for (c, r) in classified.iter().zip(&records) {
        assert_eq!(&c.record, r);
        assert_eq!(c.category, classify(r, 2.0).expect("classify"));
    }
}

#[test]
fn alerts_match_alert_worthy_records() {
    let classified = classify_batch(&worked_example(), 2.0).expect("classify");
    let alerts = build_alerts(&classified);
    let worthy = classified
        .iter()
        .filter(|c| c.category.is_alert_worthy())
        .count();
    assert_eq!(alerts.len(), worthy);
    assert!(alerts.iter().all(|a| a.category != Category::Normal));
    assert!(alerts.iter().all(|a| !a.sent));
}

#[test]
fn summary_counts_add_up() {
    let classified = classify_batch(&worked_example(), 5.0).expect("classify");
    let summary = summarize_by_region(&classified);
    assert_eq!(summary_total(&summary), classified.len());
    for counts in summary.values() {
        assert!(counts.total() > 0);
    }
}

#[test]
fn empty_input_gives_empty_outputs() {
    let classified = classify_batch(&[], 5.0).expect("classify");
    assert!(classified.is_empty());
    assert!(build_alerts(&classified).is_empty());
    assert!(summarize_by_region(&classified).is_empty());
}

#[test]
fn non_positive_threshold_is_invalid_configuration() {
    for bad in [0.0, -1.0, f64::NAN, f64::INFINITY] {
        assert!(matches!(
            classify_batch(&worked_example(), bad),
            Err(EngineError::InvalidConfiguration(_))
        ));
    }
}

#[test]
fn reject_policy_refuses_empty_batch() {
    let engine = ClassificationEngine::with_threshold(5.0)
        .expect("engine")
        .with_empty_batch_policy(EmptyBatchPolicy::Reject);
    assert_eq!(engine.classify_batch(&[]), Err(EngineError::EmptyBatch));
}

// ---------------------------------------------------------------------------
// Region down
// ---------------------------------------------------------------------------

#[test]
fn region_with_only_alerts_is_down() {
    let classified = classify_batch(&worked_example(), 5.0).expect("classify");
    let down = detect_down_regions(&summarize_by_region(&classified));
    assert_eq!(down.len(), 1);
    assert_eq!(down[0].region, "R2");
    assert_eq!(down[0].total, 1);
}

#[test]
fn mixed_region_is_not_down() {
    let records = vec![
        rec("T1", "R1", 9.0, TransactionStatus::Success),
        rec("T2", "R1", 1.0, TransactionStatus::Success),
    ];
    let classified = classify_batch(&records, 5.0).expect("classify");
    assert!(detect_down_regions(&summarize_by_region(&classified)).is_empty());
}

//! Tests for coverage summaries

use reqcov::core::models::Release;
use reqcov::output::CoverageSummary;

use crate::common::fixtures::checkout_report;

#[test]
fn test_summary_of_feature_view() {
    let features = checkout_report().of_type("feature");
    let summary = CoverageSummary::of(&features, None);

    assert_eq!(summary.requirement_type, "feature");
    assert_eq!(summary.requirement_count, 2);
    assert_eq!(summary.requirements.failing, 1);
    assert_eq!(summary.requirements.without_tests, 1);
    assert_eq!(summary.estimated_unimplemented_tests, 4);
    assert_eq!(summary.test_count, 3);
    assert!(summary.estimated);
    assert!((summary.passing_percent - 200.0 / 7.0).abs() < 1e-9);
}

#[test]
fn test_summary_json_is_machine_readable() {
    let summary = CoverageSummary::of(&checkout_report(), Some(&Release::new("2.0")));
    let value: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();

    assert_eq!(value["requirement_type"], "epic");
    assert_eq!(value["release"], "2.0");
    assert_eq!(value["flattened_requirement_count"], 3);
    assert_eq!(value["outcomes"][0]["name"], "Checkout");
    assert_eq!(value["outcomes"][0]["requirements_without_tests"], 1);
}

#[test]
fn test_summary_json_omits_missing_release() {
    let summary = CoverageSummary::of(&checkout_report(), None);
    let value: serde_json::Value = serde_json::from_str(&summary.to_json()).unwrap();
    assert!(value.get("release").is_none());
}

#[test]
fn test_human_summary() {
    let text = CoverageSummary::of(&checkout_report(), Some(&Release::new("2.0"))).to_human();

    assert!(text.contains("Coverage of 1 epic requirement(s) in release 2.0"));
    assert!(text.contains("3 total"));
    assert!(text.contains("Checkout (epic) - 3 test(s)"));
}

//! Tests for loading requirements and test outcomes from disk

use std::fs;

use reqcov::adapters::file::{load_outcomes, load_requirements};
use reqcov::core::models::{TestOutcomes, TestResult};
use reqcov::core::services::RequirementsOutcomes;
use tempfile::TempDir;

use crate::common::fixtures::{child_names, default_context};

const REQUIREMENTS_JSON: &str = r#"{
  "requirements": [
    {
      "name": "Checkout",
      "type": "epic",
      "path": "checkout",
      "children": [
        { "name": "Payment", "type": "feature", "path": "checkout/payment" },
        { "name": "Shipping", "type": "feature", "path": "checkout/shipping" }
      ]
    }
  ]
}"#;

const OUTCOMES_JSON: &str = r#"{
  "outcomes": [
    { "name": "pays by card", "path": "checkout/payment/card", "result": "success" },
    { "name": "pays by voucher", "path": "checkout/payment/voucher", "result": "success" },
    { "name": "rejects expired card", "result": "failure", "tags": ["feature:Payment"] }
  ]
}"#;

fn write(temp: &TempDir, name: &str, content: &str) -> std::path::PathBuf {
    let path = temp.path().join(name);
    fs::write(&path, content).unwrap();
    path
}

#[test]
fn test_load_json_requirements() {
    let temp = TempDir::new().unwrap();
    let requirements =
        load_requirements(&write(&temp, "requirements.json", REQUIREMENTS_JSON)).unwrap();

    assert_eq!(requirements.len(), 1);
    assert_eq!(child_names(&requirements[0]), vec!["Payment", "Shipping"]);
    assert_eq!(requirements[0].children()[1].path(), "checkout/shipping");
}

#[test]
fn test_loaded_files_build_a_report() {
    let temp = TempDir::new().unwrap();
    let requirements =
        load_requirements(&write(&temp, "requirements.json", REQUIREMENTS_JSON)).unwrap();
    let outcomes = load_outcomes(&write(&temp, "outcomes.json", OUTCOMES_JSON)).unwrap();

    let report =
        RequirementsOutcomes::new(&requirements, TestOutcomes::of(outcomes), default_context());
    let features = report.of_type("feature");

    assert_eq!(report.total_test_count(), 3);
    assert_eq!(features.requirements_without_tests_count(), 1);
    assert_eq!(features.failing_requirements_count(), 1);
    assert_eq!(features.count(TestResult::Success.into()).total(), 2);
}

#[test]
fn test_same_name_on_two_features_loads_both() {
    let temp = TempDir::new().unwrap();
    let outcomes = r#"{"outcomes": [
      { "name": "rejects empty input", "result": "success", "tags": ["feature:Payment"] },
      { "name": "rejects empty input", "result": "failure", "tags": ["feature:Shipping"] }
    ]}"#;
    let requirements =
        load_requirements(&write(&temp, "requirements.json", REQUIREMENTS_JSON)).unwrap();
    let outcomes = load_outcomes(&write(&temp, "outcomes.json", outcomes)).unwrap();

    let report =
        RequirementsOutcomes::new(&requirements, TestOutcomes::of(outcomes), default_context());
    let features = report.of_type("feature");

    assert_eq!(report.total_test_count(), 2);
    assert_eq!(features.failing_requirements_count(), 1);
    assert_eq!(features.requirements_without_tests_count(), 0);
}

#[test]
fn test_duplicate_outcome_records_are_rejected() {
    let temp = TempDir::new().unwrap();
    let outcomes = r#"{"outcomes": [
      { "name": "pays", "path": "checkout/payment", "result": "success" },
      { "name": "pays", "path": "checkout/payment", "result": "failure" }
    ]}"#;
    let err = load_outcomes(&write(&temp, "outcomes.json", outcomes)).unwrap_err();
    assert!(format!("{err:#}").contains("Duplicate test outcome 'checkout/payment#pays'"));
}

#[test]
fn test_missing_file_mentions_path() {
    let temp = TempDir::new().unwrap();
    let err = load_outcomes(&temp.path().join("missing.json")).unwrap_err();
    assert!(format!("{err:#}").contains("missing.json"));
}

#[test]
fn test_outcomes_must_be_json() {
    let temp = TempDir::new().unwrap();
    let path = write(&temp, "outcomes.toml", "outcomes = []\n");
    assert!(load_outcomes(&path).is_err());
}

#[test]
fn test_malformed_tag_is_rejected() {
    let temp = TempDir::new().unwrap();
    let outcomes = r#"{"outcomes": [{"name": "x", "result": "success", "tags": ["feature:"]}]}"#;
    let path = write(&temp, "outcomes.json", outcomes);
    let err = load_outcomes(&path).unwrap_err();
    assert!(format!("{err:#}").contains("outcomes.json"));
}

//! Integration tests for the reqcov CLI
//!
//! These tests run the binary against requirement and outcome files in a
//! temporary directory, testing the full cycle of: load → aggregate → report

use assert_cmd::cargo;
use predicates::prelude::*;
use std::fs;
use std::path::Path;
use tempfile::TempDir;

/// Helper function to create a reqcov command isolated from the user's config
fn reqcov(dir: &Path) -> assert_cmd::Command {
    let mut cmd = assert_cmd::Command::new(cargo::cargo_bin!("reqcov"));
    cmd.current_dir(dir)
        .env("HOME", dir)
        .env_remove("REQCOV_ESTIMATED_TESTS_PER_REQUIREMENT")
        .env_remove("REQCOV_EXCLUDE_UNRELATED_REQUIREMENTS_OF_TYPE");
    cmd
}

/// Helper to write the checkout fixtures
fn write_fixtures(dir: &Path) {
    fs::write(
        dir.join("requirements.toml"),
        r#"[[requirements]]
name = "Checkout"
type = "epic"

[[requirements.children]]
name = "Payment"
type = "feature"

[[requirements.children]]
name = "Shipping"
type = "feature"

[[requirements]]
name = "Look and feel"
type = "theme"
"#,
    )
    .unwrap();

    fs::write(
        dir.join("outcomes.json"),
        r#"{"outcomes": [
  {"name": "pays by card", "result": "success", "tags": ["feature:Payment", "version:1.0"]},
  {"name": "pays by voucher", "result": "success", "tags": ["feature:Payment"]},
  {"name": "rejects expired card", "result": "failure", "tags": ["feature:Payment", "version:1.0"]}
]}"#,
    )
    .unwrap();
}

fn summary_args() -> [&'static str; 5] {
    ["summary", "--requirements", "requirements.toml", "--outcomes", "outcomes.json"]
}

// =============================================================================
// SUMMARY
// =============================================================================

#[test]
fn test_summary_human() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    reqcov(temp.path())
        .args(summary_args())
        .assert()
        .success()
        .stdout(predicate::str::contains("Coverage of 2 epic requirement(s)"))
        .stdout(predicate::str::contains("Checkout (epic) - 3 test(s)"));
}

#[test]
fn test_summary_json_by_type() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = reqcov(temp.path())
        .args(summary_args())
        .args(["--type", "feature", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["requirement_count"], 2);
    assert_eq!(value["requirements"]["without_tests"], 1);
    assert_eq!(value["estimated_unimplemented_tests"], 4);
    assert_eq!(value["test_count"], 3);
}

#[test]
fn test_summary_by_release() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = reqcov(temp.path())
        .args(summary_args())
        .args(["--release", "1.0", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["release"], "1.0");
    assert_eq!(value["requirement_count"], 1);
    assert_eq!(value["test_count"], 2);
    assert_eq!(value["requirements"]["failing"], 1);
}

#[test]
fn test_project_config_is_applied() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());
    fs::write(
        temp.path().join("reqcov.toml"),
        "estimated_tests_per_requirement = 10\n\
         excluded_unrelated_requirement_types = [\"theme\"]\n",
    )
    .unwrap();

    let output = reqcov(temp.path()).args(summary_args()).arg("--json").output().unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["requirement_count"], 1);
    assert_eq!(value["outcomes"][0]["name"], "Checkout");
}

#[test]
fn test_env_overrides_estimate() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    let output = reqcov(temp.path())
        .env("REQCOV_ESTIMATED_TESTS_PER_REQUIREMENT", "7")
        .args(summary_args())
        .args(["--type", "feature", "--json"])
        .output()
        .unwrap();
    assert!(output.status.success());

    let value: serde_json::Value = serde_json::from_slice(&output.stdout).unwrap();
    assert_eq!(value["estimated_unimplemented_tests"], 7);
}

// =============================================================================
// ERRORS
// =============================================================================

#[test]
fn test_missing_requirements_file_fails() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    reqcov(temp.path())
        .args(["summary", "--requirements", "nope.toml", "--outcomes", "outcomes.json"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("nope.toml"));
}

#[test]
fn test_invalid_env_estimate_fails() {
    let temp = TempDir::new().unwrap();
    write_fixtures(temp.path());

    reqcov(temp.path())
        .env("REQCOV_ESTIMATED_TESTS_PER_REQUIREMENT", "lots")
        .args(summary_args())
        .assert()
        .failure()
        .stderr(predicate::str::contains("REQCOV_ESTIMATED_TESTS_PER_REQUIREMENT"));
}

// =============================================================================
// VERSION
// =============================================================================

#[test]
fn test_version() {
    let temp = TempDir::new().unwrap();
    reqcov(temp.path())
        .arg("version")
        .assert()
        .success()
        .stdout(predicate::str::contains(concat!("reqcov v", env!("CARGO_PKG_VERSION"))));
}

#[test]
fn test_version_json() {
    let temp = TempDir::new().unwrap();
    reqcov(temp.path())
        .args(["version", "--json"])
        .assert()
        .success()
        .stdout(predicate::str::contains("\"version\""));
}

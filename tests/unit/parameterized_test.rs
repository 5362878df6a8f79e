//! Parameterized tests using test-case
//!
//! These tests use test-case to run the same test logic with different inputs.

use reqcov::core::models::{Requirement, TestOutcome, TestOutcomes, TestResult, TestTag, TestType};
use reqcov::core::services::path_covers;
use test_case::test_case;

// =============================================================================
// Status Parsing Tests
// =============================================================================

#[test_case("success", TestResult::Success ; "success")]
#[test_case("PASSED", TestResult::Success ; "passed uppercase")]
#[test_case("fail", TestResult::Failure ; "fail alias")]
#[test_case(" error ", TestResult::Error ; "padded error")]
#[test_case("Pending", TestResult::Pending ; "pending")]
#[test_case("compromised", TestResult::Compromised ; "compromised")]
#[test_case("ignored", TestResult::Ignored ; "ignored")]
#[test_case("skipped", TestResult::Skipped ; "skipped")]
#[test_case("undefined", TestResult::Undefined ; "undefined")]
fn test_result_parsing(input: &str, expected: TestResult) {
    assert_eq!(input.parse::<TestResult>().unwrap(), expected);
}

#[test_case("" ; "empty")]
#[test_case("flaky" ; "unknown word")]
#[test_case("succes" ; "typo")]
fn test_result_parsing_rejects(input: &str) {
    assert!(input.parse::<TestResult>().is_err());
}

#[test_case("any", TestType::Any ; "any")]
#[test_case("ANY", TestType::Any ; "any uppercase")]
#[test_case("failure", TestType::Status(TestResult::Failure) ; "one status")]
fn test_type_parsing(input: &str, expected: TestType) {
    assert_eq!(input.parse::<TestType>().unwrap(), expected);
}

#[test_case("feature:Payment", "feature", "Payment" ; "typed tag")]
#[test_case("Payment", "tag", "Payment" ; "untyped tag")]
#[test_case("version:1.2", "version", "1.2" ; "version tag")]
fn test_tag_parsing(input: &str, tag_type: &str, name: &str) {
    let tag: TestTag = input.parse().unwrap();
    assert_eq!(tag, TestTag::new(tag_type, name));
}

#[test_case(":Payment" ; "missing type")]
#[test_case("feature:" ; "missing name")]
fn test_tag_parsing_rejects(input: &str) {
    assert!(input.parse::<TestTag>().is_err());
}

// =============================================================================
// Status Rollup Tests
// =============================================================================

#[test_case(&[], TestResult::Undefined ; "empty is undefined")]
#[test_case(&[TestResult::Success, TestResult::Success], TestResult::Success ; "all success")]
#[test_case(
    &[TestResult::Success, TestResult::Pending], TestResult::Pending
    ; "pending beats success"
)]
#[test_case(
    &[TestResult::Pending, TestResult::Failure], TestResult::Failure
    ; "failure beats pending"
)]
#[test_case(&[TestResult::Failure, TestResult::Error], TestResult::Error ; "error beats failure")]
#[test_case(
    &[TestResult::Error, TestResult::Compromised], TestResult::Compromised
    ; "compromised beats error"
)]
#[test_case(&[TestResult::Ignored, TestResult::Ignored], TestResult::Ignored ; "all ignored")]
#[test_case(&[TestResult::Skipped], TestResult::Skipped ; "all skipped")]
#[test_case(
    &[TestResult::Ignored, TestResult::Success], TestResult::Success
    ; "ignored with success"
)]
#[test_case(
    &[TestResult::Ignored, TestResult::Skipped], TestResult::Undefined
    ; "ignored with skipped"
)]
fn test_rollup(results: &[TestResult], expected: TestResult) {
    let pool = TestOutcomes::of(
        results.iter().enumerate().map(|(i, r)| TestOutcome::new(format!("t{i}"), *r)),
    );
    assert_eq!(pool.result(), expected);
}

// =============================================================================
// Matching Tests
// =============================================================================

#[test_case("checkout", "checkout", true ; "exact path")]
#[test_case("checkout", "checkout/payment/card", true ; "nested path")]
#[test_case("/checkout/", "checkout/payment", true ; "slashes trimmed")]
#[test_case("Checkout", "checkout/payment", true ; "case insensitive")]
#[test_case("checkout", "checkouts/payment", false ; "sibling prefix")]
#[test_case("checkout/payment", "checkout", false ; "parent path")]
#[test_case("", "checkout", false ; "empty requirement path")]
fn test_path_coverage(requirement_path: &str, test_path: &str, expected: bool) {
    assert_eq!(path_covers(requirement_path, test_path), expected);
}

#[test_case(TestTag::new("feature", "Payment"), true ; "own tag")]
#[test_case(TestTag::new("FEATURE", "payment"), true ; "tag case insensitive")]
#[test_case(TestTag::new("story", "Card"), true ; "descendant tag")]
#[test_case(TestTag::new("story", "Payment"), false ; "wrong type")]
#[test_case(TestTag::new("feature", "Shipping"), false ; "other requirement")]
fn test_tag_matching(tag: TestTag, expected: bool) {
    let payment = Requirement::new("Payment", "feature")
        .with_children(vec![Requirement::new("Card", "story")]);
    let pool = TestOutcomes::of(vec![TestOutcome::new("t", TestResult::Success).with_tag(tag)]);
    assert_eq!(pool.for_requirement(&payment).total(), usize::from(expected));
}

//! Tag matcher service - matches test outcomes to requirements
//!
//! This module contains pure matching logic with no I/O dependencies.

use crate::core::models::{Requirement, TestOutcome};
use crate::core::ports::RequirementMatcher;

/// Default matcher: by requirement tag, then by path
///
/// An outcome belongs to a requirement when, for the requirement or any of
/// its descendants:
/// - the outcome carries the `type:name` tag of that requirement
///   (case-insensitive), or
/// - the outcome's path is the requirement path, or lies under it
#[derive(Debug, Clone, Copy, Default)]
pub struct TagMatcher;

impl RequirementMatcher for TagMatcher {
    fn matches(&self, outcome: &TestOutcome, requirement: &Requirement) -> bool {
        requirement.flattened().into_iter().any(|r| matches_directly(outcome, r))
    }
}

/// Check a single requirement, ignoring its descendants
#[must_use]
pub fn matches_directly(outcome: &TestOutcome, requirement: &Requirement) -> bool {
    let tag = requirement.as_tag();
    if outcome.tags().iter().any(|t| t.matches(&tag)) {
        return true;
    }

    outcome.path().is_some_and(|path| path_covers(requirement.path(), path))
}

/// Check if a requirement path covers a test path
///
/// Supports:
/// - Exact paths: `checkout/payment` covers `checkout/payment`
/// - Directory prefixes: `checkout` covers `checkout/payment/card`
///
/// Comparison ignores surrounding slashes and ASCII case. `checkout` does
/// not cover `checkout-admin`.
#[must_use]
pub fn path_covers(requirement_path: &str, test_path: &str) -> bool {
    let requirement_path = requirement_path.trim_matches('/');
    let test_path = test_path.trim_matches('/');

    if requirement_path.is_empty() {
        return false;
    }

    if test_path.eq_ignore_ascii_case(requirement_path) {
        return true;
    }

    // Directory prefix: the next character must be a separator
    test_path.len() > requirement_path.len()
        && test_path.is_char_boundary(requirement_path.len())
        && test_path[..requirement_path.len()].eq_ignore_ascii_case(requirement_path)
        && test_path[requirement_path.len()..].starts_with('/')
}

//! Requirement matcher port
//!
//! Defines how the outcome pool decides which tests belong to a requirement.

use super::super::models::{Requirement, TestOutcome};

/// Decides whether a test outcome belongs to a requirement
///
/// A match must cover the requirement's whole subtree: a test tagged with a
/// child requirement also belongs to the parent.
#[cfg_attr(test, mockall::automock)]
pub trait RequirementMatcher: Send + Sync {
    /// Whether `outcome` covers `requirement` or one of its descendants
    fn matches(&self, outcome: &TestOutcome, requirement: &Requirement) -> bool;
}

//! Release tagger port
//!
//! Defines the interface for attaching release versions to test outcomes.

use std::sync::Arc;

use super::super::models::{RequirementOutcome, TestOutcome};

/// Attaches release versions to test outcomes
///
/// Enrichment mutates the shared outcomes in place and must be idempotent:
/// tagging an outcome that already carries its versions changes nothing.
#[cfg_attr(test, mockall::automock)]
pub trait ReleaseTagger: Send + Sync {
    /// Attach release versions to each outcome
    fn enrich_outcomes(&self, outcomes: &[Arc<TestOutcome>]);

    /// Attach release versions to every test of every requirement outcome
    fn enrich_requirement_outcomes(&self, outcomes: &[RequirementOutcome]) {
        for outcome in outcomes {
            self.enrich_outcomes(outcome.test_outcomes().outcomes());
        }
    }
}

//! Test outcome pool
//!
//! A [`TestOutcomes`] is an immutable set of shared test outcomes together
//! with the matcher that decides which of them belong to a requirement.
//! Scoping a pool to a requirement yields a smaller pool with the same
//! matcher, so nested scoping stays consistent.

use std::collections::HashSet;
use std::sync::Arc;

use log::warn;

use super::{Requirement, TestOutcome, TestResult, TestType};
use crate::core::ports::RequirementMatcher;
use crate::core::services::matcher::TagMatcher;

/// A set of test outcomes, scoped to some part of the requirement tree
#[derive(Clone)]
pub struct TestOutcomes {
    outcomes: Vec<Arc<TestOutcome>>,
    matcher: Arc<dyn RequirementMatcher>,
}

impl TestOutcomes {
    /// Build a pool from owned outcomes, matched by tag and path
    pub fn of(outcomes: impl IntoIterator<Item = TestOutcome>) -> Self {
        Self::shared(outcomes.into_iter().map(Arc::new), Arc::new(TagMatcher))
    }

    /// Build a pool from shared outcomes with an explicit matcher
    ///
    /// Outcomes with the same identity are kept once, first occurrence wins.
    pub fn shared(
        outcomes: impl IntoIterator<Item = Arc<TestOutcome>>,
        matcher: Arc<dyn RequirementMatcher>,
    ) -> Self {
        let mut seen = HashSet::new();
        let outcomes = outcomes
            .into_iter()
            .filter(|o| {
                let fresh = seen.insert(o.id().to_string());
                if !fresh {
                    warn!("duplicate test outcome '{}' ignored", o.id());
                }
                fresh
            })
            .collect();
        Self { outcomes, matcher }
    }

    /// An empty pool using the same matcher
    #[must_use]
    pub fn empty_like(&self) -> Self {
        Self {
            outcomes: Vec::new(),
            matcher: Arc::clone(&self.matcher),
        }
    }

    /// A pool of other outcomes using the same matcher
    #[must_use]
    pub fn with_outcomes(&self, outcomes: impl IntoIterator<Item = Arc<TestOutcome>>) -> Self {
        Self::shared(outcomes, Arc::clone(&self.matcher))
    }

    /// The outcomes belonging to `requirement` or any of its descendants
    #[must_use]
    pub fn for_requirement(&self, requirement: &Requirement) -> Self {
        let matching = self
            .outcomes
            .iter()
            .filter(|outcome| self.matcher.matches(outcome, requirement))
            .cloned()
            .collect();

        Self {
            outcomes: matching,
            matcher: Arc::clone(&self.matcher),
        }
    }

    /// The outcomes tagged with the given release version
    #[must_use]
    pub fn for_release(&self, version: &str) -> Self {
        self.with_outcomes(self.outcomes.iter().filter(|o| o.has_version(version)).cloned())
    }

    /// All outcomes in this pool
    #[must_use]
    pub fn outcomes(&self) -> &[Arc<TestOutcome>] {
        &self.outcomes
    }

    /// Number of outcomes in this pool
    #[must_use]
    pub fn total(&self) -> usize {
        self.outcomes.len()
    }

    /// Whether this pool holds no outcome
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    /// Number of outcomes in the given category
    #[must_use]
    pub fn count(&self, test_type: TestType) -> usize {
        self.outcomes.iter().filter(|o| test_type.includes(o.result())).count()
    }

    /// Overall result of the pool (see [`TestResult::overall`])
    #[must_use]
    pub fn result(&self) -> TestResult {
        TestResult::overall(self.outcomes.iter().map(|o| o.result()))
    }

    /// Sorted identities of the outcomes, used for structural comparison
    #[must_use]
    pub fn identities(&self) -> Vec<&str> {
        let mut ids: Vec<&str> = self.outcomes.iter().map(|o| o.id()).collect();
        ids.sort_unstable();
        ids
    }

    /// Every release version carried by an outcome of this pool
    #[must_use]
    pub fn release_versions(&self) -> Vec<String> {
        let mut versions: Vec<String> = self.outcomes.iter().flat_map(|o| o.versions()).collect();
        versions.sort();
        versions.dedup();
        versions
    }
}

impl std::fmt::Debug for TestOutcomes {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_list().entries(self.outcomes.iter().map(|o| o.id())).finish()
    }
}

impl Default for TestOutcomes {
    fn default() -> Self {
        Self::of(Vec::new())
    }
}

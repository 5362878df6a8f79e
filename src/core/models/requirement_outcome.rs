//! Requirement outcome
//!
//! One requirement, the tests that belong to it (directly or through its
//! descendants), and the estimate of tests still missing in its subtree.

use std::hash::{Hash, Hasher};

use super::{CoverageSettings, ExcludedTypes, Requirement, TestOutcomes, TestResult, TestType};
use crate::core::services::aggregator::count_requirements_without_tests;
use crate::core::services::estimation::estimated_unimplemented_tests;

/// Coverage of a single requirement subtree
#[derive(Debug, Clone)]
pub struct RequirementOutcome {
    requirement: Requirement,
    test_outcomes: TestOutcomes,
    requirements_without_tests: usize,
    estimated_unimplemented_tests: usize,
}

impl RequirementOutcome {
    /// Assemble an outcome from already computed counts
    ///
    /// Use [`crate::core::services::aggregator::requirement_outcome_for`] to
    /// compute the counts from a pool.
    #[must_use]
    pub const fn new(
        requirement: Requirement,
        test_outcomes: TestOutcomes,
        requirements_without_tests: usize,
        estimated_unimplemented_tests: usize,
    ) -> Self {
        Self {
            requirement,
            test_outcomes,
            requirements_without_tests,
            estimated_unimplemented_tests,
        }
    }

    /// The requirement this outcome describes
    #[must_use]
    pub const fn requirement(&self) -> &Requirement {
        &self.requirement
    }

    /// The tests that belong to this requirement or its descendants
    #[must_use]
    pub const fn test_outcomes(&self) -> &TestOutcomes {
        &self.test_outcomes
    }

    /// Number of tests recorded for this subtree
    #[must_use]
    pub fn test_count(&self) -> usize {
        self.test_outcomes.total()
    }

    /// Number of tests in the given category
    #[must_use]
    pub fn count(&self, test_type: TestType) -> usize {
        self.test_outcomes.count(test_type)
    }

    /// Requirements in this subtree (self included) with no tests
    #[must_use]
    pub const fn requirements_without_tests(&self) -> usize {
        self.requirements_without_tests
    }

    /// Tests assumed missing for the untested requirements of this subtree
    #[must_use]
    pub const fn estimated_unimplemented_tests(&self) -> usize {
        self.estimated_unimplemented_tests
    }

    /// Size of the subtree, this requirement included
    #[must_use]
    pub fn flattened_requirement_count(&self) -> usize {
        1 + self.requirement.nested_children().len()
    }

    /// Rolled-up status of the tests in this subtree
    #[must_use]
    pub fn result(&self) -> TestResult {
        self.test_outcomes.result()
    }

    /// Tested, all passing, and no untested requirement left in the subtree
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.test_count() > 0
            && self.result() == TestResult::Success
            && self.requirements_without_tests == 0
    }

    /// Rolled-up status is a failure
    #[must_use]
    pub fn is_failure(&self) -> bool {
        self.result() == TestResult::Failure
    }

    /// Rolled-up status is an error
    #[must_use]
    pub fn is_error(&self) -> bool {
        self.result() == TestResult::Error
    }

    /// Rolled-up status is pending
    #[must_use]
    pub fn is_pending(&self) -> bool {
        self.result() == TestResult::Pending
    }

    /// Rolled-up status is compromised
    #[must_use]
    pub fn is_compromised(&self) -> bool {
        self.result() == TestResult::Compromised
    }

    /// Rolled-up status is ignored
    #[must_use]
    pub fn is_ignored(&self) -> bool {
        self.result() == TestResult::Ignored
    }

    /// Whether `requirement` is this requirement or one of its descendants
    #[must_use]
    pub fn tests_requirement(&self, requirement: &Requirement) -> bool {
        self.requirement.flattened().contains(&requirement)
    }

    /// Release versions carried by the tests of this subtree
    #[must_use]
    pub fn release_versions(&self) -> Vec<String> {
        self.test_outcomes.release_versions()
    }

    /// A copy whose requirement tree no longer holds untested children of an
    /// excluded type
    ///
    /// The rule applies at every depth. Children with at least one test in
    /// this outcome's pool are always kept. The untested count and the
    /// estimate are recomputed over the pruned subtree.
    #[must_use]
    pub fn without_unrelated_requirements(&self, settings: &CoverageSettings) -> Self {
        if !settings.excluded_types.is_enabled() {
            return self.clone();
        }

        let requirement =
            prune_untested(&self.requirement, &self.test_outcomes, &settings.excluded_types);
        let requirements_without_tests =
            count_requirements_without_tests(&requirement, &self.test_outcomes);
        Self {
            requirement,
            test_outcomes: self.test_outcomes.clone(),
            requirements_without_tests,
            estimated_unimplemented_tests: estimated_unimplemented_tests(
                requirements_without_tests,
                settings.estimated_tests_per_requirement,
            ),
        }
    }
}

fn prune_untested(
    requirement: &Requirement,
    pool: &TestOutcomes,
    excluded: &ExcludedTypes,
) -> Requirement {
    let kept = requirement
        .children()
        .iter()
        .filter(|child| {
            !(excluded.excludes(child.requirement_type()) && pool.for_requirement(child).is_empty())
        })
        .map(|child| prune_untested(child, pool, excluded))
        .collect();

    requirement.with_children(kept)
}

impl PartialEq for RequirementOutcome {
    fn eq(&self, other: &Self) -> bool {
        self.requirement == other.requirement
            && self.test_outcomes.identities() == other.test_outcomes.identities()
    }
}

impl Eq for RequirementOutcome {}

impl Hash for RequirementOutcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.requirement.hash(state);
        self.test_outcomes.identities().hash(state);
    }
}

impl std::fmt::Display for RequirementOutcome {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {} test(s), {}", self.requirement, self.test_count(), self.result())
    }
}

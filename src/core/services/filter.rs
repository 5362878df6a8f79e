//! Release and type filters - prune requirement outcomes
//!
//! These functions compute the requirement and test sets of a derived
//! report. Building the derived aggregate itself is left to
//! [`super::coverage::RequirementsOutcomes`].

use std::collections::HashSet;
use std::sync::Arc;

use crate::core::models::{
    CoverageSettings, ExcludedTypes, Requirement, RequirementOutcome, TestOutcome, TestOutcomes,
};

/// Requirements and tests selected for a derived report
#[derive(Debug, Clone, Default)]
pub struct Selection {
    /// Selected requirements, first occurrence first
    pub requirements: Vec<Requirement>,
    /// Tests of the selected requirements, each once
    pub tests: Vec<Arc<TestOutcome>>,
}

impl Selection {
    fn add(&mut self, requirement: &Requirement, tests: &[Arc<TestOutcome>]) {
        if !self.requirements.contains(requirement) {
            self.requirements.push(requirement.clone());
        }
        for test in tests {
            if !self.tests.contains(test) {
                self.tests.push(Arc::clone(test));
            }
        }
    }
}

/// Whether an outcome is an untested requirement of an excluded type
#[must_use]
pub fn should_prune(outcome: &RequirementOutcome, excluded: &ExcludedTypes) -> bool {
    outcome.test_count() == 0 && excluded.excludes(outcome.requirement().requirement_type())
}

/// Drop untested outcomes of excluded types, at every depth
///
/// Survivors have the same rule applied to their own requirement tree.
/// Outcomes with at least one test are always kept.
#[must_use]
pub fn pruned(
    outcomes: &[RequirementOutcome],
    settings: &CoverageSettings,
) -> Vec<RequirementOutcome> {
    let mut seen = HashSet::new();
    outcomes
        .iter()
        .filter(|outcome| !should_prune(outcome, &settings.excluded_types))
        .map(|outcome| outcome.without_unrelated_requirements(settings))
        .filter(|outcome| seen.insert(outcome.clone()))
        .collect()
}

/// Outcomes whose requirement has the given type (case-insensitive)
#[must_use]
pub fn select_type(flattened: &[RequirementOutcome], requirement_type: &str) -> Selection {
    let mut selection = Selection::default();
    for outcome in flattened.iter().filter(|o| o.requirement().is_of_type(requirement_type)) {
        selection.add(outcome.requirement(), outcome.test_outcomes().outcomes());
    }
    selection
}

/// Outcomes that have at least one test of the given release
///
/// Release versions must already be attached to the tests.
#[must_use]
pub fn select_release(outcomes: &[RequirementOutcome], release_name: &str) -> Selection {
    let mut selection = Selection::default();
    for outcome in outcomes {
        if !outcome.release_versions().iter().any(|v| v == release_name) {
            continue;
        }
        let released = outcome.test_outcomes().for_release(release_name);
        if !released.is_empty() {
            selection.add(outcome.requirement(), released.outcomes());
        }
    }
    selection
}

/// Drop requirements with no test in `pool`, rebuilding kept ones bottom-up
///
/// A requirement is kept when it or one of its descendants has a test in
/// `pool`; its rebuilt children are the kept subtrees only.
#[must_use]
pub fn remove_requirements_without_tests(
    requirements: &[Requirement],
    pool: &TestOutcomes,
) -> Vec<Requirement> {
    let mut kept: Vec<Requirement> = Vec::new();
    for requirement in requirements {
        if pool.for_requirement(requirement).is_empty() || kept.contains(requirement) {
            continue;
        }
        let children = remove_requirements_without_tests(requirement.children(), pool);
        kept.push(requirement.with_children(children));
    }
    kept
}

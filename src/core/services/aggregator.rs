//! Outcome aggregator - builds one requirement outcome per requirement
//!
//! Every outcome is a pure function of its requirement subtree and the pool
//! it is matched against, so a list of requirements is aggregated in
//! parallel. The output keeps the order of the (de-duplicated) input.

use std::collections::HashSet;

use log::debug;
use rayon::prelude::*;

use super::estimation::estimated_unimplemented_tests;
use crate::core::models::{CoverageSettings, Requirement, RequirementOutcome, TestOutcomes};

/// Build the outcome of a single requirement
///
/// The outcome holds the tests of `pool` that belong to the requirement or
/// its descendants. `requirements_without_tests` counts the requirements of
/// this subtree, self included, that have no test in `pool`.
#[must_use]
pub fn requirement_outcome_for(
    requirement: &Requirement,
    pool: &TestOutcomes,
    settings: &CoverageSettings,
) -> RequirementOutcome {
    let outcomes_for_requirement = pool.for_requirement(requirement);
    let requirements_without_tests = count_requirements_without_tests(requirement, pool);
    let estimated = estimated_unimplemented_tests(
        requirements_without_tests,
        settings.estimated_tests_per_requirement,
    );

    RequirementOutcome::new(
        requirement.clone(),
        outcomes_for_requirement,
        requirements_without_tests,
        estimated,
    )
}

/// Build one outcome per distinct requirement
///
/// Duplicates (by structural equality) are dropped first, keeping the first
/// occurrence. Outcomes are computed in parallel; the result follows the
/// input order whatever the scheduling.
#[must_use]
pub fn build_requirement_outcomes(
    requirements: &[Requirement],
    pool: &TestOutcomes,
    settings: &CoverageSettings,
) -> Vec<RequirementOutcome> {
    let distinct = distinct_requirements(requirements);
    if distinct.len() < requirements.len() {
        debug!("dropped {} duplicate requirement(s)", requirements.len() - distinct.len());
    }

    let outcomes: Vec<RequirementOutcome> = distinct
        .par_iter()
        .map(|requirement| requirement_outcome_for(requirement, pool, settings))
        .collect();

    debug!("aggregated {} requirement outcome(s) over {} test(s)", outcomes.len(), pool.total());
    outcomes
}

/// Requirements of the subtree rooted at `root` (root included) with no test in `pool`
#[must_use]
pub fn count_requirements_without_tests(root: &Requirement, pool: &TestOutcomes) -> usize {
    root.flattened()
        .into_iter()
        .filter(|requirement| pool.for_requirement(requirement).is_empty())
        .count()
}

/// First occurrence of each requirement, in input order
#[must_use]
pub fn distinct_requirements(requirements: &[Requirement]) -> Vec<&Requirement> {
    let mut seen = HashSet::new();
    requirements.iter().filter(|requirement| seen.insert(*requirement)).collect()
}

//! Property-based tests for the coverage aggregate
//!
//! Uses proptest to verify properties that should hold for all inputs.

use std::collections::HashSet;

use proptest::prelude::*;
use reqcov::core::models::{
    CoverageSettings, Requirement, TestOutcome, TestOutcomes, TestResult, TestTag,
};
use reqcov::core::services::{RequirementsOutcomes, flatten};

use crate::common::fixtures::{context, default_context};

/// Epics `E0..E5`, each with features drawn from `F0..F5`
fn forest() -> impl Strategy<Value = Vec<Requirement>> {
    let epics = prop::collection::vec((0..6usize, prop::collection::vec(0..6usize, 0..4)), 0..6);
    epics.prop_map(|epics| {
        epics
            .into_iter()
            .map(|(epic, features)| {
                Requirement::new(format!("E{epic}"), "epic").with_children(
                    features
                        .into_iter()
                        .map(|f| Requirement::new(format!("F{f}"), "feature"))
                        .collect(),
                )
            })
            .collect()
    })
}

/// Tests tagged with one feature each
fn pool() -> impl Strategy<Value = TestOutcomes> {
    prop::collection::vec((0..6usize, 0..TestResult::ALL.len()), 0..12).prop_map(|tests| {
        TestOutcomes::of(tests.into_iter().enumerate().map(|(i, (feature, result))| {
            TestOutcome::new(format!("t{i}"), TestResult::ALL[result])
                .with_tag(TestTag::new("feature", format!("F{feature}")))
        }))
    })
}

proptest! {
    /// One outcome per distinct requirement
    #[test]
    fn duplicates_are_merged(requirements in forest(), tests in pool()) {
        let distinct: HashSet<&str> = requirements.iter().map(Requirement::name).collect();
        let report = RequirementsOutcomes::new(&requirements, tests, default_context());
        prop_assert_eq!(report.requirement_count(), distinct.len());
    }

    /// Flattening a flattened list yields the same set
    #[test]
    fn flattening_is_idempotent(requirements in forest(), tests in pool()) {
        let settings = CoverageSettings::default();
        let report = RequirementsOutcomes::new(&requirements, tests, context(settings.clone()));

        let once = report.flattened_requirement_outcomes().to_vec();
        let twice = flatten(&once, &settings);

        let once: HashSet<_> = once.into_iter().collect();
        let twice: HashSet<_> = twice.into_iter().collect();
        prop_assert_eq!(once, twice);
    }

    /// The estimate is always the untested count times the configured constant
    #[test]
    fn estimate_identity(requirements in forest(), tests in pool(), per_requirement in 0..20usize) {
        let settings =
            CoverageSettings::default().with_estimated_tests_per_requirement(per_requirement);
        let report = RequirementsOutcomes::new(&requirements, tests, context(settings));
        prop_assert_eq!(
            report.estimated_unimplemented_tests(),
            report.requirements_without_tests_count() * per_requirement
        );

        let features = report.of_type("feature");
        prop_assert_eq!(
            features.estimated_unimplemented_tests(),
            features.requirements_without_tests_count() * per_requirement
        );
    }

    /// Only requirements without any test are counted as untested
    #[test]
    fn tested_requirements_are_never_untested(requirements in forest(), tests in pool()) {
        let report = RequirementsOutcomes::new(&requirements, tests, default_context());
        let untested = report
            .requirement_outcomes()
            .iter()
            .filter(|o| o.test_count() == 0)
            .count();
        prop_assert_eq!(report.requirements_without_tests_count(), untested);
    }

    /// A type view holds exactly the tests of the requirements of that type
    #[test]
    fn type_view_holds_union_of_tests(requirements in forest(), tests in pool()) {
        let report = RequirementsOutcomes::new(&requirements, tests, default_context());
        let features = report.of_type("feature");

        prop_assert!(
            features.requirement_outcomes().iter().all(|o| o.requirement().is_of_type("feature"))
        );

        let expected: HashSet<&str> = report
            .flattened_requirement_outcomes()
            .iter()
            .filter(|o| o.requirement().is_of_type("feature"))
            .flat_map(|o| o.test_outcomes().identities())
            .collect();
        let actual: HashSet<&str> = features.test_outcomes().identities().into_iter().collect();
        prop_assert_eq!(actual, expected);
    }
}

//! Proportion and estimation engine
//!
//! Coverage is expressed against a blended denominator: the tests actually
//! recorded plus an estimate of the tests that untested requirements will
//! eventually need. The result is a heuristic, and [`Proportion`] says so.

use serde::Serialize;

use crate::core::models::{TestOutcomes, TestResult, TestType};

/// Tests assumed missing for `requirements_without_tests` requirements
#[must_use]
pub const fn estimated_unimplemented_tests(
    requirements_without_tests: usize,
    tests_per_requirement: usize,
) -> usize {
    requirements_without_tests.saturating_mul(tests_per_requirement)
}

/// Share of tests in a category over implemented plus estimated tests
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Proportion {
    /// Category being measured
    #[serde(skip)]
    pub test_type: TestType,
    /// Tests recorded in that category
    pub matching_tests: usize,
    /// Tests recorded in total
    pub implemented_tests: usize,
    /// Tests assumed missing for untested requirements
    pub estimated_unimplemented_tests: usize,
}

impl Proportion {
    /// Measure `test_type` over `pool`, given the estimated missing tests
    #[must_use]
    pub fn of(
        test_type: TestType,
        pool: &TestOutcomes,
        estimated_unimplemented_tests: usize,
    ) -> Self {
        Self {
            test_type,
            matching_tests: pool.count(test_type),
            implemented_tests: pool.total(),
            estimated_unimplemented_tests,
        }
    }

    /// Implemented plus estimated tests
    #[must_use]
    pub const fn denominator(&self) -> usize {
        self.implemented_tests.saturating_add(self.estimated_unimplemented_tests)
    }

    /// Proportion between 0.0 and 1.0; 0.0 when there is nothing to measure
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn value(&self) -> f64 {
        match self.denominator() {
            0 => 0.0,
            total => self.matching_tests as f64 / total as f64,
        }
    }

    /// Proportion as a percentage between 0.0 and 100.0
    #[must_use]
    pub fn percent(&self) -> f64 {
        self.value() * 100.0
    }

    /// Whether the denominator includes estimated tests
    #[must_use]
    pub const fn is_estimate(&self) -> bool {
        self.estimated_unimplemented_tests > 0
    }
}

/// Test counts of one category, broken down by status
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutcomeCounter {
    /// Category counted
    #[serde(skip)]
    pub test_type: TestType,
    /// Count per status, for statuses in the category
    pub by_result: Vec<(TestResult, usize)>,
}

impl OutcomeCounter {
    /// Count the tests of `pool` that fall into `test_type`
    #[must_use]
    pub fn of(test_type: TestType, pool: &TestOutcomes) -> Self {
        let by_result = TestResult::ALL
            .iter()
            .filter(|result| test_type.includes(**result))
            .map(|result| (*result, pool.count(TestType::Status(*result))))
            .collect();

        Self { test_type, by_result }
    }

    /// Tests in the category
    #[must_use]
    pub fn total(&self) -> usize {
        self.by_result.iter().map(|(_, count)| count).sum()
    }

    /// Tests in the category with the given status
    #[must_use]
    pub fn with_result(&self, result: TestResult) -> usize {
        self.by_result.iter().find(|(r, _)| *r == result).map_or(0, |(_, count)| *count)
    }

    /// Tests that passed
    #[must_use]
    pub fn passing(&self) -> usize {
        self.with_result(TestResult::Success)
    }

    /// Tests that failed, errored or were compromised
    #[must_use]
    pub fn unsuccessful(&self) -> usize {
        self.with_result(TestResult::Failure)
            + self.with_result(TestResult::Error)
            + self.with_result(TestResult::Compromised)
    }
}

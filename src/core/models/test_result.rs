//! Test statuses and status categories
//!
//! [`TestResult`] is the outcome of a single executed test. [`TestType`] is
//! the category used when counting or computing proportions: any status, or
//! one specific status.

use serde::{Deserialize, Serialize};

use crate::error::CoverageError;

/// Status of an executed test
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TestResult {
    /// No result could be determined
    #[default]
    Undefined,
    /// Test passed
    Success,
    /// Test failed an assertion
    Failure,
    /// Test raised an unexpected error
    Error,
    /// Test is written but not implemented yet
    Pending,
    /// Test could not run because of an environment problem
    Compromised,
    /// Test was deliberately ignored
    Ignored,
    /// Test was skipped
    Skipped,
}

impl TestResult {
    /// All statuses, in declaration order
    pub const ALL: [Self; 8] = [
        Self::Undefined,
        Self::Success,
        Self::Failure,
        Self::Error,
        Self::Pending,
        Self::Compromised,
        Self::Ignored,
        Self::Skipped,
    ];

    /// Roll a list of results up into one overall result
    ///
    /// Precedence, worst first: compromised, error, failure, pending. A list
    /// made only of ignored (or only of skipped) results keeps that status.
    /// Anything else with at least one success is a success.
    #[must_use]
    pub fn overall<I>(results: I) -> Self
    where
        I: IntoIterator<Item = Self>,
    {
        let results: Vec<Self> = results.into_iter().collect();
        if results.is_empty() {
            return Self::Undefined;
        }

        for worst in [Self::Compromised, Self::Error, Self::Failure, Self::Pending] {
            if results.contains(&worst) {
                return worst;
            }
        }

        if results.iter().all(|r| *r == Self::Ignored) {
            return Self::Ignored;
        }
        if results.iter().all(|r| *r == Self::Skipped) {
            return Self::Skipped;
        }
        if results.contains(&Self::Success) {
            return Self::Success;
        }
        Self::Undefined
    }
}

impl std::fmt::Display for TestResult {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::Undefined => "undefined",
            Self::Success => "success",
            Self::Failure => "failure",
            Self::Error => "error",
            Self::Pending => "pending",
            Self::Compromised => "compromised",
            Self::Ignored => "ignored",
            Self::Skipped => "skipped",
        };
        f.write_str(s)
    }
}

impl std::str::FromStr for TestResult {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "undefined" => Ok(Self::Undefined),
            "success" | "pass" | "passed" => Ok(Self::Success),
            "failure" | "fail" | "failed" => Ok(Self::Failure),
            "error" => Ok(Self::Error),
            "pending" => Ok(Self::Pending),
            "compromised" => Ok(Self::Compromised),
            "ignored" => Ok(Self::Ignored),
            "skipped" => Ok(Self::Skipped),
            _ => Err(CoverageError::invalid_argument(format!("unknown test result: {s}"))),
        }
    }
}

/// Category of tests used for counting and proportions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum TestType {
    /// Every test, whatever its status
    #[default]
    Any,
    /// Only tests with the given status
    Status(TestResult),
}

impl TestType {
    /// Whether a test with the given result falls into this category
    #[must_use]
    pub fn includes(self, result: TestResult) -> bool {
        match self {
            Self::Any => true,
            Self::Status(status) => status == result,
        }
    }
}

impl From<TestResult> for TestType {
    fn from(result: TestResult) -> Self {
        Self::Status(result)
    }
}

impl std::fmt::Display for TestType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Any => f.write_str("any"),
            Self::Status(status) => write!(f, "{status}"),
        }
    }
}

impl std::str::FromStr for TestType {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        if s.trim().eq_ignore_ascii_case("any") {
            return Ok(Self::Any);
        }
        s.parse::<TestResult>()
            .map(Self::Status)
            .map_err(|_| CoverageError::invalid_argument(format!("unknown test type: {s}")))
    }
}

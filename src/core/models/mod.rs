//! Domain models for reqcov
//!
//! Pure data structures with no I/O dependencies.
//!
//! - [`Requirement`] - A node of the requirement tree
//! - [`TestOutcome`] - One executed test and its status
//! - [`TestOutcomes`] - A pool of test outcomes scoped to part of the tree
//! - [`RequirementOutcome`] - A requirement with its tests and missing-test estimate
//! - [`TestResult`] / [`TestType`] - Test statuses and counting categories
//! - [`TestTag`] / [`Release`] - Tags linking tests to requirements and releases
//! - [`CoverageSettings`] - Engine settings shared by derived reports

mod requirement;
mod requirement_outcome;
mod settings;
mod tag;
mod test_outcome;
mod test_outcomes;
mod test_result;

pub use requirement::Requirement;
pub use requirement_outcome::RequirementOutcome;
pub use settings::{CoverageSettings, DEFAULT_TESTS_PER_REQUIREMENT, ExcludedTypes};
pub use tag::{DEFAULT_TAG_TYPE, Release, TestTag};
pub use test_outcome::TestOutcome;
pub use test_outcomes::TestOutcomes;
pub use test_result::{TestResult, TestType};

//! Business logic services
//!
//! Pure aggregation logic that operates on domain models.
//! These services have no I/O dependencies - they operate on
//! data passed in and return results.
//!
//! - [`aggregator`] - Build one outcome per requirement
//! - [`cache`] - Memoize scalar metrics of an aggregate
//! - [`coverage`] - The requirements coverage aggregate
//! - [`estimation`] - Proportions and unimplemented test estimates
//! - [`filter`] - Release and type pruning
//! - [`flattener`] - Expand outcomes into their subtrees
//! - [`matcher`] - Match tests to requirements

pub mod aggregator;
pub mod cache;
pub mod coverage;
pub mod estimation;
pub mod filter;
pub mod flattener;
pub mod matcher;

pub use aggregator::{
    build_requirement_outcomes, count_requirements_without_tests, requirement_outcome_for,
};
pub use cache::{CoverageCache, Metric};
pub use coverage::{CoverageContext, DEFAULT_REQUIREMENT_TYPE, RequirementsOutcomes};
pub use estimation::{OutcomeCounter, Proportion, estimated_unimplemented_tests};
pub use flattener::flatten;
pub use matcher::{TagMatcher, path_covers};

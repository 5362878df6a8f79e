//! Port traits (interfaces) for external collaborators
//!
//! These traits define the boundaries between the coverage engine and the
//! systems it relies on: how tests are matched to requirements, how release
//! versions are attached to tests, and how parent requirements are resolved.
//!
//! Implementations live in the `adapters` module, except for the default
//! tag matcher which is part of the core services.
//!
//! ## Design Principle
//!
//! The core depends only on these traits, never on concrete
//! implementations. This enables:
//!
//! - **Testability**: Mock implementations for unit tests
//! - **Flexibility**: Swap matching or tagging strategies without touching the engine

mod parent_provider;
mod release_tagger;
mod requirement_matcher;

pub use parent_provider::{ParentRequirementProvider, first_parent_of};
pub use release_tagger::ReleaseTagger;
pub use requirement_matcher::RequirementMatcher;

#[cfg(test)]
pub use parent_provider::MockParentRequirementProvider;
#[cfg(test)]
pub use release_tagger::MockReleaseTagger;
#[cfg(test)]
pub use requirement_matcher::MockRequirementMatcher;

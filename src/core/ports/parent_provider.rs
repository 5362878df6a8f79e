//! Parent requirement provider port

use std::sync::Arc;

use super::super::models::Requirement;

/// Resolves the parent of a requirement
///
/// Providers are consulted in order; the first one that answers wins.
#[cfg_attr(test, mockall::automock)]
pub trait ParentRequirementProvider: Send + Sync {
    /// The parent of `requirement`, if this provider knows it
    fn parent_requirement_of(&self, requirement: &Requirement) -> Option<Requirement>;
}

/// Ask each provider in turn and return the first parent found
#[must_use]
pub fn first_parent_of(
    providers: &[Arc<dyn ParentRequirementProvider>],
    requirement: &Requirement,
) -> Option<Requirement> {
    providers.iter().find_map(|provider| provider.parent_requirement_of(requirement))
}

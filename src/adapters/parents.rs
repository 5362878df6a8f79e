//! In-memory parent lookup
//!
//! Implements `ParentRequirementProvider` over a loaded requirement forest.

use std::collections::HashMap;

use crate::core::models::Requirement;
use crate::core::ports::ParentRequirementProvider;

/// Resolves parent names against every requirement of a forest
#[derive(Debug, Clone, Default)]
pub struct TreeParentProvider {
    by_name: HashMap<String, Requirement>,
}

impl TreeParentProvider {
    /// Index every requirement of `roots`, first occurrence of a name wins
    #[must_use]
    pub fn new(roots: &[Requirement]) -> Self {
        let mut by_name = HashMap::new();
        for requirement in roots.iter().flat_map(Requirement::flattened) {
            by_name
                .entry(requirement.name().to_lowercase())
                .or_insert_with(|| requirement.clone());
        }
        Self { by_name }
    }

    /// Number of indexed requirements
    #[must_use]
    pub fn len(&self) -> usize {
        self.by_name.len()
    }

    /// Whether nothing was indexed
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.by_name.is_empty()
    }
}

impl ParentRequirementProvider for TreeParentProvider {
    fn parent_requirement_of(&self, requirement: &Requirement) -> Option<Requirement> {
        let parent = requirement.parent()?;
        self.by_name.get(&parent.to_lowercase()).cloned()
    }
}

//! Requirement tree model
//!
//! A requirement is a node in the feature hierarchy: an epic, a capability,
//! a feature, a story. Children are owned values, so a tree can never be
//! cyclic. Rebuilding a node returns a new value; nothing is mutated in place.
//!
//! # Examples
//!
//! ```
//! use reqcov::core::models::Requirement;
//!
//! let checkout = Requirement::new("Checkout", "epic").with_children(vec![
//!     Requirement::new("Payment", "feature"),
//!     Requirement::new("Shipping", "feature"),
//! ]);
//!
//! assert_eq!(checkout.children().len(), 2);
//! assert_eq!(checkout.children()[0].parent(), Some("Checkout"));
//! assert_eq!(checkout.nested_children().len(), 2);
//! ```

use std::hash::{Hash, Hasher};

use serde::Serialize;

use super::TestTag;

/// A node of the requirement tree
#[derive(Debug, Clone, Serialize)]
pub struct Requirement {
    /// Requirement name (e.g., "Payment")
    name: String,

    /// Free-form type tag (e.g., "epic", "feature")
    #[serde(rename = "type")]
    requirement_type: String,

    /// Display path, defaults to the name
    path: String,

    /// Name of the parent requirement, if any
    #[serde(skip_serializing_if = "Option::is_none")]
    parent: Option<String>,

    /// Ordered, sibling-unique children
    #[serde(skip_serializing_if = "Vec::is_empty")]
    children: Vec<Self>,
}

impl Requirement {
    /// Create a leaf requirement whose path is its name
    pub fn new(name: impl Into<String>, requirement_type: impl Into<String>) -> Self {
        let name = name.into();
        Self {
            path: name.clone(),
            name,
            requirement_type: requirement_type.into(),
            parent: None,
            children: Vec::new(),
        }
    }

    /// Return a copy with the given display path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = path.into();
        self
    }

    /// Return a copy with the given parent name
    #[must_use]
    pub fn with_parent(mut self, parent: impl Into<String>) -> Self {
        self.parent = Some(parent.into());
        self
    }

    /// Return a copy of this requirement with a new list of children
    ///
    /// Duplicate children (by structural equality) are dropped, keeping the
    /// first occurrence. Children without a parent link are linked to this
    /// requirement.
    #[must_use]
    pub fn with_children(&self, children: Vec<Self>) -> Self {
        let mut unique: Vec<Self> = Vec::with_capacity(children.len());
        for child in children {
            if unique.contains(&child) {
                continue;
            }
            let child = if child.parent.is_none() {
                child.with_parent(self.name.clone())
            } else {
                child
            };
            unique.push(child);
        }

        Self {
            name: self.name.clone(),
            requirement_type: self.requirement_type.clone(),
            path: self.path.clone(),
            parent: self.parent.clone(),
            children: unique,
        }
    }

    /// Requirement name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Requirement type tag, as given
    #[must_use]
    pub fn requirement_type(&self) -> &str {
        &self.requirement_type
    }

    /// Display path
    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }

    /// Name of the parent requirement
    #[must_use]
    pub fn parent(&self) -> Option<&str> {
        self.parent.as_deref()
    }

    /// Direct children, in order
    #[must_use]
    pub fn children(&self) -> &[Self] {
        &self.children
    }

    /// Whether this requirement has any children
    #[must_use]
    pub fn has_children(&self) -> bool {
        !self.children.is_empty()
    }

    /// All descendants in pre-order, excluding this requirement
    #[must_use]
    pub fn nested_children(&self) -> Vec<&Self> {
        let mut nested = Vec::new();
        for child in &self.children {
            child.collect_into(&mut nested);
        }
        nested
    }

    /// This requirement followed by all of its descendants, in pre-order
    #[must_use]
    pub fn flattened(&self) -> Vec<&Self> {
        let mut all = Vec::new();
        self.collect_into(&mut all);
        all
    }

    fn collect_into<'a>(&'a self, into: &mut Vec<&'a Self>) {
        into.push(self);
        for child in &self.children {
            child.collect_into(into);
        }
    }

    /// Case-insensitive type comparison
    #[must_use]
    pub fn is_of_type(&self, requirement_type: &str) -> bool {
        self.requirement_type.eq_ignore_ascii_case(requirement_type)
    }

    /// The `type:name` tag that test outcomes use to reference this requirement
    #[must_use]
    pub fn as_tag(&self) -> TestTag {
        TestTag::new(self.requirement_type.clone(), self.name.clone())
    }
}

impl PartialEq for Requirement {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name
            && self.requirement_type == other.requirement_type
            && self.path == other.path
    }
}

impl Eq for Requirement {}

impl Hash for Requirement {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.name.hash(state);
        self.requirement_type.hash(state);
        self.path.hash(state);
    }
}

impl std::fmt::Display for Requirement {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({})", self.name, self.requirement_type)
    }
}

//! Serde documents for requirement trees and test outcome records

use anyhow::Context;
use serde::Deserialize;

use crate::core::models::{Requirement, TestOutcome, TestResult, TestTag};

/// A requirements file (`.toml` or `.json`)
#[derive(Debug, Default, Deserialize)]
pub struct RequirementsDocument {
    /// Top-level requirements
    #[serde(default, alias = "requirement")]
    pub requirements: Vec<RequirementEntry>,
}

/// A requirement entry and its nested children
#[derive(Debug, Deserialize)]
pub struct RequirementEntry {
    /// Requirement name
    pub name: String,

    /// Requirement type (e.g., "epic", "feature")
    #[serde(default = "default_requirement_type", rename = "type")]
    pub requirement_type: String,

    /// Location of the requirement; defaults to the name
    #[serde(default)]
    pub path: Option<String>,

    /// Explicit parent name, for top-level entries
    #[serde(default)]
    pub parent: Option<String>,

    /// Nested requirements
    #[serde(default)]
    pub children: Vec<Self>,
}

fn default_requirement_type() -> String {
    "requirement".to_string()
}

impl RequirementEntry {
    /// Convert to a domain requirement, children included
    #[must_use]
    pub fn to_requirement(&self) -> Requirement {
        let mut requirement = Requirement::new(&self.name, &self.requirement_type);
        if let Some(path) = &self.path {
            requirement = requirement.with_path(path);
        }
        if let Some(parent) = &self.parent {
            requirement = requirement.with_parent(parent);
        }
        requirement.with_children(self.children.iter().map(Self::to_requirement).collect())
    }
}

/// A test outcomes file (`.json`)
#[derive(Debug, Default, Deserialize)]
pub struct OutcomesDocument {
    /// Recorded test outcomes
    #[serde(default)]
    pub outcomes: Vec<OutcomeRecord>,
}

/// One recorded test execution
#[derive(Debug, Deserialize)]
pub struct OutcomeRecord {
    /// Test name
    pub name: String,

    /// Source location of the test
    #[serde(default)]
    pub path: Option<String>,

    /// Status name (e.g., "success", "failed", "pending")
    pub result: String,

    /// Tags as `type:name` strings
    #[serde(default)]
    pub tags: Vec<String>,

    /// Release versions already known for this test
    #[serde(default)]
    pub versions: Vec<String>,
}

impl OutcomeRecord {
    /// Convert to a domain outcome
    pub fn to_outcome(&self) -> anyhow::Result<TestOutcome> {
        let result: TestResult =
            self.result.parse().with_context(|| format!("test '{}'", self.name))?;
        let tags = self
            .tags
            .iter()
            .map(|tag| tag.parse::<TestTag>().with_context(|| format!("test '{}'", self.name)))
            .collect::<anyhow::Result<Vec<_>>>()?;

        let mut outcome = TestOutcome::new(&self.name, result).with_tags(tags);
        if let Some(path) = &self.path {
            outcome = outcome.with_path(path);
        }
        for version in &self.versions {
            outcome = outcome.with_version(version);
        }
        Ok(outcome)
    }
}

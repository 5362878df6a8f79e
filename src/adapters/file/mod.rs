//! File-based loading of requirements and test outcomes
//!
//! Requirement trees are read from TOML or JSON, test outcomes from JSON.
//! The file extension selects the format.

mod documents;

use std::collections::HashSet;
use std::fs;
use std::path::Path;

use anyhow::{Context, bail};
use log::debug;

use crate::core::models::{Requirement, TestOutcome};

pub use documents::{OutcomeRecord, OutcomesDocument, RequirementEntry, RequirementsDocument};

/// Load a requirement forest from a `.toml` or `.json` file
pub fn load_requirements(path: &Path) -> anyhow::Result<Vec<Requirement>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read requirements from {}", path.display()))?;

    let requirements = match extension(path).as_deref() {
        Some("toml") => parse_requirements_toml(&content),
        Some("json") => parse_requirements_json(&content),
        _ => bail!("Unsupported requirements format: {} (expected .toml or .json)", path.display()),
    }
    .with_context(|| format!("Invalid requirements file {}", path.display()))?;

    debug!("loaded {} top-level requirement(s) from {}", requirements.len(), path.display());
    Ok(requirements)
}

/// Load test outcomes from a `.json` file
pub fn load_outcomes(path: &Path) -> anyhow::Result<Vec<TestOutcome>> {
    let content = fs::read_to_string(path)
        .with_context(|| format!("Failed to read test outcomes from {}", path.display()))?;

    if extension(path).as_deref() != Some("json") {
        bail!("Unsupported test outcomes format: {} (expected .json)", path.display());
    }

    let outcomes = parse_outcomes_json(&content)
        .with_context(|| format!("Invalid test outcomes file {}", path.display()))?;
    debug!("loaded {} test outcome(s) from {}", outcomes.len(), path.display());
    Ok(outcomes)
}

/// Parse a TOML requirements document
pub fn parse_requirements_toml(content: &str) -> anyhow::Result<Vec<Requirement>> {
    let document: RequirementsDocument = toml::from_str(content)?;
    Ok(document.requirements.iter().map(RequirementEntry::to_requirement).collect())
}

/// Parse a JSON requirements document
pub fn parse_requirements_json(content: &str) -> anyhow::Result<Vec<Requirement>> {
    let document: RequirementsDocument = serde_json::from_str(content)?;
    Ok(document.requirements.iter().map(RequirementEntry::to_requirement).collect())
}

/// Parse a JSON test outcomes document
///
/// Two records with the same identity (same path and name, or same name and
/// tags when unlocated) are rejected.
pub fn parse_outcomes_json(content: &str) -> anyhow::Result<Vec<TestOutcome>> {
    let document: OutcomesDocument = serde_json::from_str(content)?;
    let outcomes = document
        .outcomes
        .iter()
        .map(OutcomeRecord::to_outcome)
        .collect::<anyhow::Result<Vec<_>>>()?;

    let mut seen = HashSet::new();
    if let Some(duplicate) = outcomes.iter().find(|o| !seen.insert(o.id())) {
        bail!("Duplicate test outcome '{}'", duplicate.id());
    }
    Ok(outcomes)
}

fn extension(path: &Path) -> Option<String> {
    path.extension().map(|ext| ext.to_string_lossy().to_lowercase())
}

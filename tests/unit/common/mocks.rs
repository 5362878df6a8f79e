//! Port implementations for testing
//!
//! These implementations record how often they are called so tests can
//! observe memoization without real collaborators.

use std::sync::Arc;
use std::sync::atomic::{AtomicUsize, Ordering};

use reqcov::core::models::{Requirement, TestOutcome};
use reqcov::core::ports::{ParentRequirementProvider, ReleaseTagger, RequirementMatcher};
use reqcov::core::services::TagMatcher;

/// Tag matcher that counts its calls
#[derive(Debug, Default)]
pub struct CountingMatcher {
    calls: AtomicUsize,
}

impl CountingMatcher {
    pub fn new() -> Arc<Self> {
        Arc::new(Self::default())
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl RequirementMatcher for CountingMatcher {
    fn matches(&self, outcome: &TestOutcome, requirement: &Requirement) -> bool {
        self.calls.fetch_add(1, Ordering::SeqCst);
        TagMatcher.matches(outcome, requirement)
    }
}

/// Release tagger that attaches one version to tests whose name contains a marker
#[derive(Debug)]
pub struct MarkerTagger {
    marker: String,
    version: String,
    calls: AtomicUsize,
}

impl MarkerTagger {
    pub fn new(marker: &str, version: &str) -> Arc<Self> {
        Arc::new(Self {
            marker: marker.to_string(),
            version: version.to_string(),
            calls: AtomicUsize::new(0),
        })
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl ReleaseTagger for MarkerTagger {
    fn enrich_outcomes(&self, outcomes: &[Arc<TestOutcome>]) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        for outcome in outcomes.iter().filter(|o| o.name().contains(&self.marker)) {
            outcome.add_versions([self.version.as_str()]);
        }
    }
}

/// Parent provider answering from a fixed list
#[derive(Debug, Default)]
pub struct FixedParents {
    parents: Vec<(String, Requirement)>,
}

impl FixedParents {
    pub fn with(mut self, child: &str, parent: Requirement) -> Self {
        self.parents.push((child.to_string(), parent));
        self
    }
}

impl ParentRequirementProvider for FixedParents {
    fn parent_requirement_of(&self, requirement: &Requirement) -> Option<Requirement> {
        self.parents
            .iter()
            .find(|(child, _)| child == requirement.name())
            .map(|(_, parent)| parent.clone())
    }
}

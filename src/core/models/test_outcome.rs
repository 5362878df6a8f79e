//! Executed test outcome
//!
//! A test outcome is read-only for the coverage engine, except for its
//! release versions: those are attached later by a release tagger, through
//! interior mutability, on the shared instance.

use std::collections::BTreeSet;
use std::hash::{Hash, Hasher};

use parking_lot::RwLock;

use super::{TestResult, TestTag};

/// One executed test and its result
#[derive(Debug)]
pub struct TestOutcome {
    /// Stable identity, see [`TestOutcome::id`]
    id: String,

    /// Test name
    name: String,

    /// Location of the test (e.g., "checkout/payment")
    path: Option<String>,

    /// Test status
    result: TestResult,

    /// Requirement and release tags
    tags: Vec<TestTag>,

    /// Release versions this test belongs to
    versions: RwLock<BTreeSet<String>>,
}

impl TestOutcome {
    /// Create an outcome with no path, tags or versions
    pub fn new(name: impl Into<String>, result: TestResult) -> Self {
        let name = name.into();
        Self {
            id: name.clone(),
            name,
            path: None,
            result,
            tags: Vec::new(),
            versions: RwLock::new(BTreeSet::new()),
        }
    }

    /// Return a copy located at the given path
    #[must_use]
    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self.id = self.identity();
        self
    }

    /// Return a copy carrying one more tag
    #[must_use]
    pub fn with_tag(mut self, tag: TestTag) -> Self {
        if !self.tags.contains(&tag) {
            self.tags.push(tag);
            self.id = self.identity();
        }
        self
    }

    /// Return a copy carrying the given tags as well
    #[must_use]
    pub fn with_tags(self, tags: impl IntoIterator<Item = TestTag>) -> Self {
        tags.into_iter().fold(self, Self::with_tag)
    }

    /// Return a copy already tagged with a release version
    #[must_use]
    pub fn with_version(self, version: impl Into<String>) -> Self {
        self.versions.write().insert(version.into());
        self
    }

    /// Stable identity used for equality and deduplication
    ///
    /// `path#name` for a located test. A test without a path is identified
    /// by its name and its sorted tags, so same-named tests of different
    /// requirements stay distinct.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// Test name
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Test location
    #[must_use]
    pub fn path(&self) -> Option<&str> {
        self.path.as_deref()
    }

    /// Test status
    #[must_use]
    pub const fn result(&self) -> TestResult {
        self.result
    }

    /// Tags carried by this test
    #[must_use]
    pub fn tags(&self) -> &[TestTag] {
        &self.tags
    }

    /// Snapshot of the release versions, sorted
    #[must_use]
    pub fn versions(&self) -> Vec<String> {
        self.versions.read().iter().cloned().collect()
    }

    /// Whether this test belongs to the given release version
    #[must_use]
    pub fn has_version(&self, version: &str) -> bool {
        self.versions.read().contains(version)
    }

    /// Attach release versions, returning how many were new
    ///
    /// Adding a version that is already present does nothing.
    pub fn add_versions<I, S>(&self, versions: I) -> usize
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut current = self.versions.write();
        let mut added = 0;
        for version in versions {
            if current.insert(version.into()) {
                added += 1;
            }
        }
        added
    }

    fn identity(&self) -> String {
        if let Some(path) = &self.path {
            return format!("{path}#{}", self.name);
        }
        if self.tags.is_empty() {
            return self.name.clone();
        }
        let mut tags: Vec<String> = self.tags.iter().map(ToString::to_string).collect();
        tags.sort_unstable();
        format!("{} [{}]", self.name, tags.join(", "))
    }
}

impl Clone for TestOutcome {
    fn clone(&self) -> Self {
        Self {
            id: self.id.clone(),
            name: self.name.clone(),
            path: self.path.clone(),
            result: self.result,
            tags: self.tags.clone(),
            versions: RwLock::new(self.versions.read().clone()),
        }
    }
}

impl PartialEq for TestOutcome {
    fn eq(&self, other: &Self) -> bool {
        self.id == other.id
    }
}

impl Eq for TestOutcome {}

impl Hash for TestOutcome {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.id.hash(state);
    }
}

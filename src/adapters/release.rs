//! Tag-based release enrichment
//!
//! Implements `ReleaseTagger` by reading release versions off the tags a
//! test already carries.

use std::sync::Arc;

use log::trace;

use crate::core::models::TestOutcome;
use crate::core::ports::ReleaseTagger;

/// Tag types read as release versions when none are configured
pub const DEFAULT_RELEASE_TAG_TYPES: [&str; 2] = ["version", "release"];

/// Copies tags of a release tag type (e.g., `version:1.2`) into the
/// version set of each test
#[derive(Debug, Clone)]
pub struct TagReleaseTagger {
    tag_types: Vec<String>,
}

impl TagReleaseTagger {
    /// Create a tagger reading the given tag types
    #[must_use]
    pub fn new<I, S>(tag_types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            tag_types: tag_types.into_iter().map(|t| t.into().to_lowercase()).collect(),
        }
    }

    /// Tag types read as release versions
    #[must_use]
    pub fn tag_types(&self) -> &[String] {
        &self.tag_types
    }

    fn release_names<'a>(&'a self, outcome: &'a TestOutcome) -> impl Iterator<Item = &'a str> {
        outcome
            .tags()
            .iter()
            .filter(|tag| tag.is_one_of(&self.tag_types))
            .map(|tag| tag.name.as_str())
    }
}

impl Default for TagReleaseTagger {
    fn default() -> Self {
        Self::new(DEFAULT_RELEASE_TAG_TYPES)
    }
}

impl ReleaseTagger for TagReleaseTagger {
    fn enrich_outcomes(&self, outcomes: &[Arc<TestOutcome>]) {
        for outcome in outcomes {
            let added = outcome.add_versions(self.release_names(outcome));
            if added > 0 {
                trace!("{}: {added} release version(s) attached", outcome.id());
            }
        }
    }
}

//! Test tags
//!
//! Tags link a test outcome to requirements (`feature:Payment`) and to
//! releases (`version:1.2`).

use serde::{Deserialize, Serialize};

use crate::error::CoverageError;

/// A `type:name` tag carried by a test outcome
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct TestTag {
    /// Tag type (e.g., "feature", "version")
    #[serde(rename = "type")]
    pub tag_type: String,

    /// Tag name (e.g., "Payment", "1.2")
    pub name: String,
}

/// Tag type used when a tag string has no `type:` prefix
pub const DEFAULT_TAG_TYPE: &str = "tag";

impl TestTag {
    /// Create a tag from its parts
    pub fn new(tag_type: impl Into<String>, name: impl Into<String>) -> Self {
        Self {
            tag_type: tag_type.into(),
            name: name.into(),
        }
    }

    /// Case-insensitive comparison of both type and name
    #[must_use]
    pub fn matches(&self, other: &Self) -> bool {
        self.tag_type.eq_ignore_ascii_case(&other.tag_type)
            && self.name.eq_ignore_ascii_case(&other.name)
    }

    /// Whether the tag type is one of the given types (case-insensitive)
    #[must_use]
    pub fn is_one_of(&self, tag_types: &[String]) -> bool {
        tag_types.iter().any(|t| t.eq_ignore_ascii_case(&self.tag_type))
    }
}

impl std::fmt::Display for TestTag {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}:{}", self.tag_type, self.name)
    }
}

impl std::str::FromStr for TestTag {
    type Err = CoverageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        let (tag_type, name) =
            s.split_once(':').map_or((DEFAULT_TAG_TYPE, s), |(t, n)| (t.trim(), n.trim()));

        if name.is_empty() || tag_type.is_empty() {
            return Err(CoverageError::invalid_argument(format!("malformed tag: {s:?}")));
        }
        Ok(Self::new(tag_type, name))
    }
}

/// A named release used to scope a coverage report
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Release {
    /// Version name as it appears in test tags (e.g., "1.2")
    pub name: String,

    /// Optional human label (e.g., "Spring release")
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub label: Option<String>,
}

impl Release {
    /// Create a release from its version name
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            label: None,
        }
    }
}

impl std::fmt::Display for Release {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match &self.label {
            Some(label) => write!(f, "{label} ({})", self.name),
            None => f.write_str(&self.name),
        }
    }
}

//! Engine settings
//!
//! The subset of configuration the coverage engine reads. Built from
//! [`crate::config::CoverageConfig`] or directly in tests.

/// Number of tests assumed for a requirement that has none yet
pub const DEFAULT_TESTS_PER_REQUIREMENT: usize = 4;

/// Requirement types that are dropped when they have no tests
///
/// An empty set disables the filter entirely.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ExcludedTypes(Vec<String>);

impl ExcludedTypes {
    /// Build from type names; blank names are ignored
    pub fn new<I, S>(types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut names: Vec<String> = Vec::new();
        for name in types {
            let name = name.as_ref().trim().to_lowercase();
            if !name.is_empty() && !names.contains(&name) {
                names.push(name);
            }
        }
        Self(names)
    }

    /// Whether the filter is active
    #[must_use]
    pub fn is_enabled(&self) -> bool {
        !self.0.is_empty()
    }

    /// Whether an untested requirement of this type should be dropped
    #[must_use]
    pub fn excludes(&self, requirement_type: &str) -> bool {
        self.0.iter().any(|t| t.eq_ignore_ascii_case(requirement_type))
    }

    /// The excluded type names, lowercased
    #[must_use]
    pub fn names(&self) -> &[String] {
        &self.0
    }
}

/// Settings shared by every aggregate derived from the same report
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CoverageSettings {
    /// Tests assumed for each requirement without tests
    pub estimated_tests_per_requirement: usize,

    /// Untested requirement types to leave out of reports
    pub excluded_types: ExcludedTypes,
}

impl CoverageSettings {
    /// Return a copy with a different per-requirement estimate
    #[must_use]
    pub const fn with_estimated_tests_per_requirement(mut self, estimate: usize) -> Self {
        self.estimated_tests_per_requirement = estimate;
        self
    }

    /// Return a copy excluding the given untested requirement types
    #[must_use]
    pub fn excluding<I, S>(mut self, types: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        self.excluded_types = ExcludedTypes::new(types);
        self
    }
}

impl Default for CoverageSettings {
    fn default() -> Self {
        Self {
            estimated_tests_per_requirement: DEFAULT_TESTS_PER_REQUIREMENT,
            excluded_types: ExcludedTypes::default(),
        }
    }
}

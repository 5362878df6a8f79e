//! Configuration management
//!
//! Settings are read from `reqcov.toml` in the working directory, falling
//! back to `~/.reqcov/config.toml`, then to built-in defaults. Environment
//! variables override whatever file was found.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use log::debug;
use serde::{Deserialize, Serialize};

use crate::adapters::{DEFAULT_RELEASE_TAG_TYPES, TagReleaseTagger};
use crate::core::models::{CoverageSettings, DEFAULT_TESTS_PER_REQUIREMENT};
use crate::paths;

/// Overrides the estimated number of tests per untested requirement
pub const ENV_ESTIMATED_TESTS: &str = "REQCOV_ESTIMATED_TESTS_PER_REQUIREMENT";

/// Overrides the excluded requirement types (comma separated)
pub const ENV_EXCLUDED_TYPES: &str = "REQCOV_EXCLUDE_UNRELATED_REQUIREMENTS_OF_TYPE";

/// Coverage configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CoverageConfig {
    /// Tests assumed for each requirement without tests
    pub estimated_tests_per_requirement: usize,

    /// Requirement types dropped from reports when they have no tests
    pub excluded_unrelated_requirement_types: Vec<String>,

    /// Tag types read as release versions (e.g., `version:1.2`)
    pub release_tag_types: Vec<String>,
}

impl Default for CoverageConfig {
    fn default() -> Self {
        Self {
            estimated_tests_per_requirement: DEFAULT_TESTS_PER_REQUIREMENT,
            excluded_unrelated_requirement_types: Vec::new(),
            release_tag_types: DEFAULT_RELEASE_TAG_TYPES.iter().map(ToString::to_string).collect(),
        }
    }
}

impl CoverageConfig {
    /// Get the project config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::project_config()
    }

    /// Get the global config file path
    #[must_use]
    pub fn global_config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from the standard locations and the process environment
    pub fn load() -> anyhow::Result<Self> {
        Self::load_from(&Self::config_path(), &Self::global_config_path(), |key| {
            std::env::var(key).ok()
        })
    }

    /// Load config from the first existing file, then apply `env` overrides
    ///
    /// A missing file is skipped; a file that exists but cannot be parsed is
    /// an error.
    pub fn load_from(
        project: &Path,
        global: &Path,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        let base = match [project, global].into_iter().find(|path| path.exists()) {
            Some(path) => {
                debug!("loading config from {}", path.display());
                Self::read(path)?
            },
            None => Self::default(),
        };
        base.with_env_overrides(env)
    }

    /// Read config from a TOML file
    pub fn read(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("Invalid config {}", path.display()))
    }

    /// Save config to a TOML file
    pub fn save(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }

    /// Apply environment overrides read through `env`
    pub fn with_env_overrides(
        mut self,
        env: impl Fn(&str) -> Option<String>,
    ) -> anyhow::Result<Self> {
        if let Some(value) = env(ENV_ESTIMATED_TESTS) {
            self.estimated_tests_per_requirement = value.trim().parse().with_context(|| {
                format!("{ENV_ESTIMATED_TESTS} must be a non-negative integer, got '{value}'")
            })?;
        }

        if let Some(value) = env(ENV_EXCLUDED_TYPES) {
            self.excluded_unrelated_requirement_types = value
                .split(',')
                .map(str::trim)
                .filter(|t| !t.is_empty())
                .map(String::from)
                .collect();
        }

        Ok(self)
    }

    /// Engine settings described by this config
    #[must_use]
    pub fn to_settings(&self) -> CoverageSettings {
        CoverageSettings::default()
            .with_estimated_tests_per_requirement(self.estimated_tests_per_requirement)
            .excluding(&self.excluded_unrelated_requirement_types)
    }

    /// Release tagger reading the configured tag types
    #[must_use]
    pub fn release_tagger(&self) -> TagReleaseTagger {
        TagReleaseTagger::new(&self.release_tag_types)
    }
}

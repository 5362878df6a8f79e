//! Centralized path definitions for reqcov
//!
//! This module provides a single source of truth for all filesystem paths used by reqcov.
//!
//! ## Storage Layout
//!
//! ### Per-Project (Working Directory)
//!
//! ```text
//! project/
//! └── reqcov.toml               # Project settings, takes precedence
//! ```
//!
//! ### Global (User-Level)
//!
//! ```text
//! ~/.reqcov/
//! └── config.toml               # User-wide default settings
//! ```

use std::path::{Path, PathBuf};

// =============================================================================
// Project-level paths
// =============================================================================

/// Project configuration filename
pub const PROJECT_CONFIG_FILE: &str = "reqcov.toml";

/// Get path to the project `reqcov.toml` under `dir`.
#[must_use]
pub fn project_config_in(dir: &Path) -> PathBuf {
    dir.join(PROJECT_CONFIG_FILE)
}

/// Get path to `reqcov.toml` in the current directory.
#[must_use]
pub fn project_config() -> PathBuf {
    project_config_in(Path::new("."))
}

// =============================================================================
// Global paths (user-level)
// =============================================================================

/// Global config directory name
const GLOBAL_DIR: &str = ".reqcov";

/// Global config filename
const GLOBAL_CONFIG_FILE: &str = "config.toml";

/// Get the global reqcov directory.
///
/// Returns `~/.reqcov/`.
#[must_use]
pub fn global_config_dir() -> PathBuf {
    dirs::home_dir().unwrap_or_else(|| PathBuf::from("~")).join(GLOBAL_DIR)
}

/// Get the global config file path.
///
/// Returns `~/.reqcov/config.toml`.
#[must_use]
pub fn global_config() -> PathBuf {
    global_config_dir().join(GLOBAL_CONFIG_FILE)
}

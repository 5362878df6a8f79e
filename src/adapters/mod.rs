//! Adapter implementations for port traits
//!
//! This module contains the concrete collaborators of the coverage engine:
//!
//! - `file/` - Requirement trees and test outcomes loaded from disk
//! - `release` - Release versions read from test tags
//! - `parents` - Parent lookup over a loaded requirement forest

pub mod file;
pub mod parents;
pub mod release;

pub use parents::TreeParentProvider;
pub use release::{DEFAULT_RELEASE_TAG_TYPES, TagReleaseTagger};

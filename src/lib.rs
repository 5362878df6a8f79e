//! reqcov - Requirements test coverage engine
//!
//! This library aggregates test outcomes over a hierarchy of requirements
//! (epics, features, stories) and answers coverage questions: which
//! requirements are complete, failing or untested, how many tests are still
//! missing, and what a report looks like restricted to one requirement type
//! or one release.

// Deny all clippy warnings in this crate
#![deny(
    clippy::all,
    clippy::pedantic,
    clippy::nursery,
    missing_docs,
    missing_debug_implementations,
    missing_copy_implementations,
    trivial_casts,
    trivial_numeric_casts,
    unsafe_code,
    unused_import_braces,
    unused_qualifications
)]
// Allow some pedantic lints that are too noisy or not applicable
#![allow(
    clippy::module_name_repetitions,
    clippy::missing_errors_doc,
    clippy::cargo_common_metadata
)]

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

pub mod adapters;
pub mod config;
pub mod core;
pub mod error;
pub mod output;
pub mod paths;

pub use error::{CoverageError, Result};

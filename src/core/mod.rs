//! Core domain logic for reqcov
//!
//! This module contains pure aggregation logic with no I/O dependencies.
//! All external interactions are abstracted through port traits.
//!
//! ## Architecture
//!
//! - `models/` - Domain types (Requirement, TestOutcome, RequirementOutcome)
//! - `services/` - Aggregation, filtering and estimation
//! - `ports/` - Trait definitions for matchers, release taggers and parent lookups

pub mod models;
pub mod ports;
pub mod services;

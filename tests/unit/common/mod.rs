//! Shared test fixtures and helpers
//!
//! - `fixtures.rs` - Requirement trees and test outcome builders
//! - `mocks.rs` - Hand-written port implementations that record calls

pub mod mocks;

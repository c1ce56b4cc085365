//! Test Utilities Crate
//!
//! Provides shared test infrastructure, fixtures, and helpers for the
//! travel quote validation test suite.
//!
//! # Modules
//!
//! - `fixtures`: Baseline request documents, dates, and premiums
//! - `builders`: Builder for request documents with JSON pointer edits
//! - `scenarios`: The aggregator harness scenarios with expected outcomes
//! - `assertions`: Custom assertion helpers for validation outcomes
//! - `generators`: Property-based test data generators

pub mod fixtures;
pub mod builders;
pub mod scenarios;
pub mod assertions;
pub mod generators;

pub use fixtures::*;
pub use builders::*;
pub use scenarios::*;
pub use assertions::*;
pub use generators::*;

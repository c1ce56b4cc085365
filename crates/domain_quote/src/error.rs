//! Quote domain errors
//!
//! Rejections are expected outcomes of validation and carry catalog
//! entries; the remaining variants are operational failures.

use thiserror::Error;

use crate::catalog::{ErrorCode, ValidationFailure};

/// A rejected quote request
///
/// Holds the ordered failures reported to the caller. The validator stops at
/// the first failing rule, so there is always exactly one.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
#[error("Quote request rejected: {}", summary(.failures))]
pub struct QuoteRejection {
    failures: Vec<ValidationFailure>,
}

fn summary(failures: &[ValidationFailure]) -> String {
    failures
        .iter()
        .map(|f| format!("{} ({})", f.code, f.message))
        .collect::<Vec<_>>()
        .join("; ")
}

impl QuoteRejection {
    /// Creates a rejection for a single catalog entry
    pub fn new(code: ErrorCode) -> Self {
        Self {
            failures: vec![ValidationFailure::from(code)],
        }
    }

    /// The reported failures, in order
    pub fn failures(&self) -> &[ValidationFailure] {
        &self.failures
    }

    /// The failure that decided the rejection
    pub fn primary(&self) -> ErrorCode {
        self.failures[0].code
    }

    pub fn into_failures(self) -> Vec<ValidationFailure> {
        self.failures
    }
}

impl From<ErrorCode> for QuoteRejection {
    fn from(code: ErrorCode) -> Self {
        Self::new(code)
    }
}

/// Errors that can occur in the quote domain
#[derive(Debug, Error)]
pub enum QuoteError {
    /// The request failed validation
    #[error(transparent)]
    Rejected(#[from] QuoteRejection),

    /// The pricing collaborator could not produce a premium
    #[error("Pricing failed: {0}")]
    Pricing(String),

    /// Invalid validator or catalog configuration
    #[error("Invalid quote configuration: {0}")]
    Configuration(String),
}

impl QuoteError {
    pub fn pricing(message: impl Into<String>) -> Self {
        QuoteError::Pricing(message.into())
    }

    pub fn configuration(message: impl Into<String>) -> Self {
        QuoteError::Configuration(message.into())
    }
}

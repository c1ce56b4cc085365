//! API key authentication
//!
//! Aggregator partners authenticate with a shared key sent in the
//! `x-api-key` header.

use subtle::ConstantTimeEq;
use thiserror::Error;

/// Header carrying the partner key
pub const API_KEY_HEADER: &str = "x-api-key";

/// Auth errors
#[derive(Debug, Error, PartialEq, Eq)]
pub enum AuthError {
    #[error("Missing API key")]
    MissingApiKey,
    #[error("Invalid API key")]
    InvalidApiKey,
}

/// Checks a presented key against the configured one
///
/// # Arguments
///
/// * `expected` - The configured key
/// * `presented` - The header value, if any
pub fn verify_api_key(expected: &str, presented: Option<&str>) -> Result<(), AuthError> {
    let presented = presented.ok_or(AuthError::MissingApiKey)?;
    if constant_time_eq(expected.as_bytes(), presented.as_bytes()) {
        Ok(())
    } else {
        Err(AuthError::InvalidApiKey)
    }
}

/// Compares two byte slices in constant time
fn constant_time_eq(a: &[u8], b: &[u8]) -> bool {
    a.ct_eq(b).into()
}

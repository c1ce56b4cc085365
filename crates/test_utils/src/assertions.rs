//! Custom Test Assertions
//!
//! Provides assertion helpers for validation outcomes and error envelopes
//! that give more meaningful failure messages than bare `assert_eq!`.

use domain_quote::{ErrorCode, QuoteRejection, QuoteRequest};
use serde_json::Value;

/// Asserts that validation rejected the request with the given code
///
/// # Panics
///
/// Panics if the request was accepted, or rejected with another code
pub fn assert_rejected_with(result: &Result<QuoteRequest, QuoteRejection>, expected: ErrorCode) {
    match result {
        Ok(request) => panic!(
            "Expected rejection {}, but request {} was accepted",
            expected, request.quote_transaction_id
        ),
        Err(rejection) => {
            assert_eq!(
                rejection.failures().len(),
                1,
                "Expected exactly one failure, got {:?}",
                rejection.failures()
            );
            assert_eq!(
                rejection.primary(),
                expected,
                "Expected {} ({}), got {} ({})",
                expected,
                expected.message(),
                rejection.primary(),
                rejection.primary().message()
            );
        }
    }
}

/// Asserts that validation accepted the request and returns it
///
/// # Panics
///
/// Panics if the request was rejected
pub fn assert_accepted(result: &Result<QuoteRequest, QuoteRejection>) -> &QuoteRequest {
    match result {
        Ok(request) => request,
        Err(rejection) => panic!("Expected acceptance, got {}", rejection),
    }
}

/// Asserts that a response body is the error envelope for one catalog entry
///
/// # Panics
///
/// Panics if the body is not `{"error": [{"code", "message"}]}` with the
/// expected code and its catalog message
pub fn assert_error_envelope(body: &Value, expected: ErrorCode) {
    let entries = body
        .get("error")
        .and_then(Value::as_array)
        .unwrap_or_else(|| panic!("Expected an error envelope, got {body}"));
    assert_eq!(entries.len(), 1, "Expected one error entry, got {body}");

    let entry = &entries[0];
    assert_eq!(entry["code"], expected.code(), "Unexpected code in {body}");
    assert_eq!(entry["message"], expected.message(), "Unexpected message in {body}");
}

/// Asserts that a code string belongs to the error catalog
pub fn assert_in_catalog(code: &str) {
    assert!(
        ErrorCode::from_code(code).is_some(),
        "{code} is not a catalog error code"
    );
}

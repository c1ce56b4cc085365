//! API error handling
//!
//! Every non-2xx response uses the same envelope as validation rejections:
//! `{"error": [{"code": "...", "message": "..."}]}`.

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use domain_quote::{QuoteError, QuoteRejection};
use serde::{Deserialize, Serialize};
use thiserror::Error;

/// API error types
#[derive(Debug, Error)]
pub enum ApiError {
    #[error(transparent)]
    Rejected(#[from] QuoteRejection),

    #[error("Malformed request: {0}")]
    MalformedRequest(String),

    #[error("Unauthorized")]
    Unauthorized,

    #[error("Internal server error: {0}")]
    Internal(String),
}

/// One entry of the error envelope
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEntry {
    pub code: String,
    pub message: String,
}

/// Error response body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorEnvelope {
    pub error: Vec<ErrorEntry>,
}

impl ErrorEnvelope {
    fn single(code: &str, message: impl Into<String>) -> Self {
        Self {
            error: vec![ErrorEntry {
                code: code.to_string(),
                message: message.into(),
            }],
        }
    }

    /// Codes carried by the envelope, in order
    pub fn codes(&self) -> Vec<&str> {
        self.error.iter().map(|e| e.code.as_str()).collect()
    }
}

impl From<&QuoteRejection> for ErrorEnvelope {
    fn from(rejection: &QuoteRejection) -> Self {
        Self {
            error: rejection
                .failures()
                .iter()
                .map(|f| ErrorEntry {
                    code: f.code.code().to_string(),
                    message: f.message.clone(),
                })
                .collect(),
        }
    }
}

impl ApiError {
    pub fn status(&self) -> StatusCode {
        match self {
            ApiError::Rejected(_) | ApiError::MalformedRequest(_) => StatusCode::BAD_REQUEST,
            ApiError::Unauthorized => StatusCode::UNAUTHORIZED,
            ApiError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    pub fn envelope(&self) -> ErrorEnvelope {
        match self {
            ApiError::Rejected(rejection) => ErrorEnvelope::from(rejection),
            ApiError::MalformedRequest(msg) => ErrorEnvelope::single("ER_MALFORMED_REQUEST", msg.clone()),
            ApiError::Unauthorized => ErrorEnvelope::single("ER_UNAUTHORIZED", "Unauthorized"),
            // Internal details stay in the logs
            ApiError::Internal(_) => ErrorEnvelope::single("ER_INTERNAL", "Internal server error"),
        }
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if let ApiError::Internal(msg) = &self {
            tracing::error!(error = %msg, "Quote request failed");
        }
        (self.status(), Json(self.envelope())).into_response()
    }
}

impl From<QuoteError> for ApiError {
    fn from(err: QuoteError) -> Self {
        match err {
            QuoteError::Rejected(rejection) => ApiError::Rejected(rejection),
            other => ApiError::Internal(other.to_string()),
        }
    }
}

//! API middleware

use axum::{
    body::Body,
    extract::State,
    http::Request,
    middleware::Next,
    response::Response,
};
use chrono::Utc;
use tracing::{info, warn};

use crate::auth::{verify_api_key, API_KEY_HEADER};
use crate::error::ApiError;
use crate::AppState;

/// API key middleware
///
/// Passes every request through when no key is configured.
pub async fn api_key_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Result<Response, ApiError> {
    if let Some(expected) = state.config.api_key.as_deref() {
        let presented = request
            .headers()
            .get(API_KEY_HEADER)
            .and_then(|h| h.to_str().ok());

        if let Err(e) = verify_api_key(expected, presented) {
            warn!(uri = %request.uri(), "API key rejected: {}", e);
            return Err(ApiError::Unauthorized);
        }
    }

    Ok(next.run(request).await)
}

/// Audit logging middleware
///
/// Logs every quote request and flags responses slower than the configured
/// acceptable response time.
pub async fn audit_middleware(
    State(state): State<AppState>,
    request: Request<Body>,
    next: Next,
) -> Response {
    let method = request.method().clone();
    let uri = request.uri().clone();

    let start = Utc::now();

    let response = next.run(request).await;

    let duration = Utc::now() - start;
    let duration_ms = duration.num_milliseconds();
    let status = response.status();

    info!(
        method = %method,
        uri = %uri,
        status = %status.as_u16(),
        duration_ms,
        "API request"
    );

    if duration_ms > state.config.acceptable_response_ms as i64 {
        warn!(
            uri = %uri,
            duration_ms,
            acceptable_ms = state.config.acceptable_response_ms,
            "Response time exceeded acceptable threshold"
        );
    }

    response
}

//! Quote handler

use axum::{extract::rejection::JsonRejection, extract::State, Json};
use serde_json::Value;
use tracing::info;

use crate::dto::quote::QuoteResponse;
use crate::{error::ApiError, AppState};

/// Validates and prices a travel quote request
///
/// The body is taken as untyped JSON so that every shape problem is
/// reported through the rule catalog rather than a deserializer message.
pub async fn create_quote(
    State(state): State<AppState>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Result<Json<QuoteResponse>, ApiError> {
    let Json(document) = payload.map_err(|e| ApiError::MalformedRequest(e.body_text()))?;

    let request = state.validator.validate(&document)?;
    let premium = state.pricer.price(&request).await?;
    let response = QuoteResponse::new(&request, premium);

    info!(
        quote_id = %response.quote_id,
        quote_transaction_id = %response.quote_transaction_id,
        premium = %response.premium,
        "Quote issued"
    );

    Ok(Json(response))
}

//! HTTP API Layer
//!
//! This crate exposes the travel quote validator over HTTP using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: quote submission and health check
//! - **Middleware**: API key authentication, audit logging with a response
//!   time threshold
//! - **DTOs**: quote response body
//! - **Error Handling**: every failure uses the `{"error": [...]}` envelope
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, AppState, config::ApiConfig};
//!
//! let state = AppState::new(ApiConfig::from_env()?, pricer);
//! let app = create_router(state);
//! ```

pub mod auth;
pub mod config;
pub mod dto;
pub mod error;
pub mod handlers;
pub mod middleware;
pub mod telemetry;

use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::{get, post},
    Router,
};
use core_kernel::SystemClock;
use domain_quote::{QuotePricer, QuoteValidator};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::trace::TraceLayer;

use crate::config::ApiConfig;
use crate::handlers::{health, quote};
use crate::middleware::{api_key_middleware, audit_middleware};

/// Path of the quote endpoint
pub const QUOTE_PATH: &str = "/api/ctm/travel/quote";

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub config: Arc<ApiConfig>,
    pub validator: Arc<QuoteValidator>,
    pub pricer: Arc<dyn QuotePricer>,
}

impl AppState {
    /// Builds state with a validator configured from `config`
    pub fn new(config: ApiConfig, pricer: Arc<dyn QuotePricer>) -> Self {
        let validator = build_validator(&config);
        Self {
            config: Arc::new(config),
            validator: Arc::new(validator),
            pricer,
        }
    }

    /// Replaces the validator, e.g. to pin the clock
    pub fn with_validator(mut self, validator: QuoteValidator) -> Self {
        self.validator = Arc::new(validator);
        self
    }
}

/// Creates a validator whose "today" follows the configured timezone
pub fn build_validator(config: &ApiConfig) -> QuoteValidator {
    QuoteValidator::new(config.validation_config())
        .with_clock(Arc::new(SystemClock::new(config.timezone)))
}

/// Creates the main API router
///
/// # Arguments
///
/// * `state` - Configuration, validator and pricer
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(state: AppState) -> Router {
    // Public routes (no auth required)
    let public_routes = Router::new().route("/health", get(health::health_check));

    // Audit wraps authentication so rejected keys are logged too
    let quote_routes = Router::new()
        .route(QUOTE_PATH, post(quote::create_quote))
        .layer(
            ServiceBuilder::new()
                .layer(axum_middleware::from_fn_with_state(state.clone(), audit_middleware))
                .layer(axum_middleware::from_fn_with_state(state.clone(), api_key_middleware)),
        );

    Router::new()
        .merge(public_routes)
        .merge(quote_routes)
        .layer(TraceLayer::new_for_http())
        .layer(
            CorsLayer::new()
                .allow_origin(Any)
                .allow_methods(Any)
                .allow_headers(Any),
        )
        .with_state(state)
}

//! Quote request checker
//!
//! Validates a single quote request document offline, with the same rules
//! and configuration as the API.
//!
//! # Usage
//!
//! ```bash
//! # Check a file
//! cargo run --bin quote-check -- request.json
//!
//! # Check stdin
//! cat request.json | cargo run --bin quote-check
//! ```
//!
//! Prints the error envelope the API would return for a rejected request,
//! or the normalized request when it is accepted. Exits with status 1 on
//! rejection.
//!
//! # Environment Variables
//!
//! * `QUOTE_ENVIRONMENT` - dev, uat or prod (default: dev)
//! * `QUOTE_TIMEZONE` - Timezone used for "today" (default: Australia/Sydney)
//! * `QUOTE_BOOKING_HORIZON_DAYS` - Booking window length (default: 365)
//! * `QUOTE_MAX_TRIP_DAYS` - Optional single trip length cap
//! * `QUOTE_LOG_LEVEL` - Log level: trace, debug, info, warn, error (default: info)

use std::io::Read;
use std::process::ExitCode;

use anyhow::Context;
use interface_api::{build_validator, config::ApiConfig, error::ErrorEnvelope, telemetry};

fn main() -> anyhow::Result<ExitCode> {
    // Load .env file if present (useful for local development)
    dotenvy::dotenv().ok();

    let config = ApiConfig::from_env().context("loading QUOTE_ configuration")?;
    telemetry::init_tracing(&config.log_level)?;

    let source = std::env::args().nth(1);
    let body = read_document(source.as_deref())?;
    let document: serde_json::Value =
        serde_json::from_str(&body).context("request is not valid JSON")?;

    tracing::info!(
        environment = config.environment.name(),
        timezone = %config.timezone,
        "Checking quote request"
    );

    let validator = build_validator(&config);
    match validator.validate(&document) {
        Ok(request) => {
            println!("{}", serde_json::to_string_pretty(&request)?);
            Ok(ExitCode::SUCCESS)
        }
        Err(rejection) => {
            let envelope = ErrorEnvelope::from(&rejection);
            println!("{}", serde_json::to_string_pretty(&envelope)?);
            Ok(ExitCode::FAILURE)
        }
    }
}

/// Reads the document from a path, or stdin when absent or `-`
fn read_document(source: Option<&str>) -> anyhow::Result<String> {
    match source {
        None | Some("-") => {
            let mut body = String::new();
            std::io::stdin()
                .read_to_string(&mut body)
                .context("reading request from stdin")?;
            Ok(body)
        }
        Some(path) => {
            std::fs::read_to_string(path).with_context(|| format!("reading request from {path}"))
        }
    }
}

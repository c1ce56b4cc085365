//! API configuration

use std::path::Path;
use std::time::Duration;

use core_kernel::Timezone;
use domain_quote::{MedicalAssessmentPolicy, ValidationConfig};
use serde::{Deserialize, Serialize};

/// Deployment environment of the quote service
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    #[default]
    Dev,
    Uat,
    Prod,
}

impl Environment {
    pub fn name(&self) -> &'static str {
        match self {
            Environment::Dev => "dev",
            Environment::Uat => "uat",
            Environment::Prod => "prod",
        }
    }

    /// Quote endpoint published for this environment
    pub fn default_endpoint(&self) -> &'static str {
        match self {
            Environment::Dev => {
                "https://test.mobile-api.woolworths.com.au/insurance/aggregator/svc/api/ctm/travel/quote"
            }
            Environment::Uat => {
                "https://uat.mobile-api.woolworths.com.au/insurance/aggregator/svc/api/ctm/travel/quote"
            }
            Environment::Prod => {
                "https://prod.mobile-api.woolworths.com.au/insurance/aggregator/svc/api/ctm/travel/quote"
            }
        }
    }
}

/// API configuration
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct ApiConfig {
    pub environment: Environment,
    /// Overrides the environment's published endpoint
    pub api_endpoint: Option<String>,
    /// When set, every quote request must present it in `x-api-key`
    pub api_key: Option<String>,
    /// Jurisdiction whose calendar decides "today"
    pub timezone: Timezone,
    /// Responses slower than this are logged as warnings
    pub acceptable_response_ms: u64,
    pub booking_horizon_days: u32,
    pub max_trip_days: Option<u32>,
    pub medical_assessment: MedicalAssessmentPolicy,
    /// Log level
    pub log_level: String,
}

impl Default for ApiConfig {
    fn default() -> Self {
        let validation = ValidationConfig::default();
        Self {
            environment: Environment::default(),
            api_endpoint: None,
            api_key: None,
            timezone: Timezone::default(),
            acceptable_response_ms: 12_000,
            booking_horizon_days: validation.booking_horizon_days,
            max_trip_days: validation.max_trip_days,
            medical_assessment: validation.medical_assessment,
            log_level: "info".to_string(),
        }
    }
}

impl ApiConfig {
    /// Loads configuration from `QUOTE_`-prefixed environment variables
    ///
    /// Scalar keys map directly, e.g. `QUOTE_ENVIRONMENT=prod` or
    /// `QUOTE_MAX_TRIP_DAYS=365`. The medical assessment policy is a list of
    /// tables and can only be set from a file passed to [`ApiConfig::load`].
    pub fn from_env() -> Result<Self, config::ConfigError> {
        Self::load(None)
    }

    /// Loads configuration from an optional file, overlaid by the environment
    pub fn load(file: Option<&Path>) -> Result<Self, config::ConfigError> {
        let mut builder = config::Config::builder();
        if let Some(path) = file {
            builder = builder.add_source(config::File::from(path).required(true));
        }
        builder
            .add_source(
                config::Environment::with_prefix("QUOTE")
                    .prefix_separator("_")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?
            .try_deserialize()
    }

    /// Returns the quote endpoint callers should target
    pub fn endpoint(&self) -> &str {
        self.api_endpoint
            .as_deref()
            .unwrap_or_else(|| self.environment.default_endpoint())
    }

    pub fn acceptable_response(&self) -> Duration {
        Duration::from_millis(self.acceptable_response_ms)
    }

    /// Returns the rule configuration for the validator
    pub fn validation_config(&self) -> ValidationConfig {
        ValidationConfig {
            booking_horizon_days: self.booking_horizon_days,
            max_trip_days: self.max_trip_days,
            medical_assessment: self.medical_assessment.clone(),
        }
    }
}

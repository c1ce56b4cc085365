//! Travel Quote Domain
//!
//! This crate decides whether an inbound travel insurance quote request is
//! well formed and eligible for quoting.
//!
//! # Request Lifecycle
//!
//! - **Untyped**: the body is held as a `serde_json::Value`
//! - **Validated**: `QuoteValidator` runs the rules in precedence order and
//!   either rejects with one catalog entry or produces a `QuoteRequest`
//! - **Priced**: an accepted request is handed to a `QuotePricer`
//!
//! Rejections are values, never panics. Each carries a stable code such as
//! `ER_TR_AGE_MAX` and the message callers display.
//!
//! # Examples
//!
//! ```rust
//! use chrono::NaiveDate;
//! use domain_quote::{ErrorCode, QuoteValidator, ValidationConfig};
//! use serde_json::json;
//!
//! let validator = QuoteValidator::new(ValidationConfig::default());
//! let today = NaiveDate::from_ymd_opt(2025, 3, 1).unwrap();
//!
//! let request = json!({
//!     "quoteTransactionId": "Q-CTM-TRAVEL-14",
//!     "policyType": "SINGLE",
//!     "travellerAges": [37, 37, 40],
//! });
//!
//! let rejection = validator.validate_on(&request, today).unwrap_err();
//! assert_eq!(rejection.primary(), ErrorCode::TravellerAgeMax);
//! assert_eq!(rejection.primary().message(), "The maximum number of travellers is 2");
//! ```

pub mod catalog;
pub mod cover;
pub mod destination;
pub mod error;
pub mod medical;
pub mod pricing;
pub mod request;
pub mod validation;

pub use catalog::{ErrorCode, ValidationFailure};
pub use cover::{CoverCategory, CoverLevel, CoverLevels, ExtraCover};
pub use destination::{
    Destination, DestinationCatalog, DestinationClass, DestinationIssue, TripRegion,
};
pub use error::{QuoteError, QuoteRejection};
pub use medical::{AssessmentRequirement, MedicalAssessmentPolicy};
pub use pricing::{Premium, QuotePricer};
pub use request::{ContactDetails, MaxTripDuration, PolicyType, QuoteRequest, TripDetails};
pub use validation::{QuoteValidator, ValidationConfig};

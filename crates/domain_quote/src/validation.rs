//! Quote request validation
//!
//! The validator turns an untyped request document into a `QuoteRequest` or
//! a `QuoteRejection`. Rules run in a fixed precedence order and the first
//! failing rule decides the outcome, so a rejection always carries exactly
//! one catalog entry.
//!
//! # Rule Order
//!
//! 1. `quoteTransactionId` present
//! 2. `policyType` present and known
//! 3. `travellerAges`: array, non-empty, at most 2, each 18..=110
//! 4. `travellerChildAges`: array when present, at most 6, each 0..25
//! 5. `contactDetails.email` well formed
//! 6. Trip details object matching the policy type
//! 7. Trip dates inside the booking window, end not before start
//! 8. Annual `maxTripDuration` in {15, 30, 45}
//! 9. Destinations known, quotable and not mixing domestic with overseas
//! 10. `extraCover` with both flags
//! 11. `coverLevels` with a known tier per applicable category
//! 12. `allowsMedicalAssessment` boolean, permitted by the assessment policy
//!
//! JSON `null` is treated as an absent field. A missing parent object is
//! always reported by the parent's rule, never by one of its children.

use std::ops::{Range, RangeInclusive};
use std::sync::Arc;

use chrono::NaiveDate;
use core_kernel::{BookingWindow, Clock, QuoteTransactionId, SystemClock, parse_iso_date};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;
use validator::ValidateEmail;

use crate::catalog::ErrorCode;
use crate::cover::{CoverCategory, CoverLevel, CoverLevels, ExtraCover};
use crate::destination::{Destination, DestinationCatalog, TripRegion};
use crate::error::QuoteRejection;
use crate::medical::MedicalAssessmentPolicy;
use crate::request::{ContactDetails, MaxTripDuration, PolicyType, QuoteRequest, TripDetails};

/// Maximum number of adult travellers on one quote
pub const MAX_TRAVELLERS: usize = 2;

/// Maximum number of dependents on one quote
pub const MAX_DEPENDENTS: usize = 6;

/// Accepted adult ages (inclusive)
pub const ADULT_AGES: RangeInclusive<i64> = 18..=110;

/// Accepted dependent ages (upper bound exclusive)
pub const CHILD_AGES: Range<i64> = 0..25;

/// Tunable parts of the rule set
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ValidationConfig {
    /// Trips must start within this many days of today (exclusive)
    pub booking_horizon_days: u32,
    /// Optional cap on single trip length, in days from the start date
    pub max_trip_days: Option<u32>,
    /// Combinations that refuse `allowsMedicalAssessment = false`
    pub medical_assessment: MedicalAssessmentPolicy,
}

impl Default for ValidationConfig {
    fn default() -> Self {
        Self {
            booking_horizon_days: 365,
            max_trip_days: None,
            medical_assessment: MedicalAssessmentPolicy::permissive(),
        }
    }
}

/// Validator for travel quote request documents
///
/// Stateless apart from its configuration; share it behind an `Arc` and call
/// it from any number of threads.
///
/// # Examples
///
/// ```rust
/// use chrono::NaiveDate;
/// use domain_quote::validation::{QuoteValidator, ValidationConfig};
/// use domain_quote::ErrorCode;
/// use serde_json::json;
///
/// let validator = QuoteValidator::new(ValidationConfig::default());
/// let today = NaiveDate::from_ymd_opt(2025, 1, 1).unwrap();
///
/// let rejection = validator.validate_on(&json!({}), today).unwrap_err();
/// assert_eq!(rejection.primary(), ErrorCode::QuoteTxnIdMissing);
/// ```
#[derive(Debug, Clone)]
pub struct QuoteValidator {
    config: ValidationConfig,
    catalog: DestinationCatalog,
    clock: Arc<dyn Clock>,
}

impl QuoteValidator {
    /// Creates a validator using the standard destination catalog and the
    /// system clock in the default jurisdiction
    pub fn new(config: ValidationConfig) -> Self {
        Self {
            config,
            catalog: DestinationCatalog::standard().clone(),
            clock: Arc::new(SystemClock::default()),
        }
    }

    /// Replaces the source of "today"
    pub fn with_clock(mut self, clock: Arc<dyn Clock>) -> Self {
        self.clock = clock;
        self
    }

    /// Replaces the destination catalog
    pub fn with_catalog(mut self, catalog: DestinationCatalog) -> Self {
        self.catalog = catalog;
        self
    }

    pub fn config(&self) -> &ValidationConfig {
        &self.config
    }

    pub fn catalog(&self) -> &DestinationCatalog {
        &self.catalog
    }

    /// Validates a request document against today's date
    ///
    /// # Arguments
    ///
    /// * `document` - The request body as received
    ///
    /// # Returns
    ///
    /// The typed request, or the rejection naming the first failing rule
    pub fn validate(&self, document: &Value) -> Result<QuoteRequest, QuoteRejection> {
        self.validate_on(document, self.clock.today())
    }

    /// Validates a request document as of the given calendar date
    pub fn validate_on(
        &self,
        document: &Value,
        today: NaiveDate,
    ) -> Result<QuoteRequest, QuoteRejection> {
        match self.run_rules(document, today) {
            Ok(request) => {
                debug!(
                    quote_transaction_id = %request.quote_transaction_id,
                    policy_type = %request.policy_type,
                    region = %request.region,
                    "Quote request accepted"
                );
                Ok(request)
            }
            Err(code) => {
                debug!(
                    quote_transaction_id = ?field(document, "quoteTransactionId").and_then(serde_json::Value::as_str),
                    code = %code,
                    "Quote request rejected"
                );
                Err(QuoteRejection::new(code))
            }
        }
    }

    fn run_rules(&self, document: &Value, today: NaiveDate) -> Result<QuoteRequest, ErrorCode> {
        let quote_transaction_id = check_transaction_id(field(document, "quoteTransactionId"))?;
        let policy_type = check_policy_type(field(document, "policyType"))?;
        let traveller_ages = check_traveller_ages(field(document, "travellerAges"))?;
        let traveller_child_ages = check_child_ages(field(document, "travellerChildAges"))?;
        let contact_details = check_contact_details(field(document, "contactDetails"))?;
        let trip = self.check_trip(document, policy_type, today)?;
        let (destinations, region) = self.check_destinations(field(document, "destinations"))?;
        let extra_cover = check_extra_cover(field(document, "extraCover"))?;
        let cover_levels = check_cover_levels(field(document, "coverLevels"), region)?;
        let allows_medical_assessment = self.check_medical_assessment(
            field(document, "allowsMedicalAssessment"),
            region,
            policy_type,
        )?;

        Ok(QuoteRequest {
            quote_transaction_id,
            policy_type,
            traveller_ages,
            traveller_child_ages,
            contact_details,
            trip,
            destinations,
            region,
            extra_cover,
            cover_levels,
            allows_medical_assessment,
        })
    }

    /// Rules 6 to 8: trip structure, dates and annual duration
    fn check_trip(
        &self,
        document: &Value,
        policy_type: PolicyType,
        today: NaiveDate,
    ) -> Result<TripDetails, ErrorCode> {
        match policy_type {
            PolicyType::Single => {
                let details = object(field(document, "singleTripDetails"))
                    .ok_or(ErrorCode::SingleTripDetailsMissing)?;
                let from_date = self.check_start_date(field(details, "fromDate"), today)?;
                let to_date = self.check_end_date(field(details, "toDate"), from_date)?;
                Ok(TripDetails::Single { from_date, to_date })
            }
            PolicyType::AnnualCover => {
                let details = object(field(document, "annualCoverDetails"))
                    .ok_or(ErrorCode::AnnualCoverDetailsMissing)?;
                let start_date = self.check_start_date(field(details, "startDate"), today)?;
                let max_trip_duration = field(details, "maxTripDuration")
                    .and_then(Value::as_i64)
                    .and_then(MaxTripDuration::from_days)
                    .ok_or(ErrorCode::MaxTripDuration)?;
                Ok(TripDetails::AnnualCover { start_date, max_trip_duration })
            }
        }
    }

    fn check_start_date(&self, value: Option<&Value>, today: NaiveDate) -> Result<NaiveDate, ErrorCode> {
        let date = date_value(value).ok_or(ErrorCode::FromDateInvalid)?;
        let window = BookingWindow::starting(today, self.config.booking_horizon_days);
        if !window.contains(date) {
            return Err(ErrorCode::FromDateInvalid);
        }
        Ok(date)
    }

    fn check_end_date(&self, value: Option<&Value>, from_date: NaiveDate) -> Result<NaiveDate, ErrorCode> {
        let date = date_value(value).ok_or(ErrorCode::ToDateInvalid)?;
        if date < from_date {
            return Err(ErrorCode::ToDateInvalid);
        }
        if let Some(max_days) = self.config.max_trip_days {
            if (date - from_date).num_days() >= i64::from(max_days) {
                return Err(ErrorCode::ToDateInvalid);
            }
        }
        Ok(date)
    }

    /// Rule 9
    fn check_destinations(&self, value: Option<&Value>) -> Result<(Vec<Destination>, TripRegion), ErrorCode> {
        let codes = value
            .and_then(Value::as_array)
            .ok_or(ErrorCode::UnknownDestination)?
            .iter()
            .map(|code| code.as_str().ok_or(ErrorCode::UnknownDestination))
            .collect::<Result<Vec<_>, _>>()?;

        self.catalog.classify(&codes).map_err(|issue| {
            debug!(?issue, "Destination list not quotable");
            ErrorCode::UnknownDestination
        })
    }

    /// Rule 12
    fn check_medical_assessment(
        &self,
        value: Option<&Value>,
        region: TripRegion,
        policy_type: PolicyType,
    ) -> Result<bool, ErrorCode> {
        let allows = value
            .ok_or(ErrorCode::MedicalConditionMissing)?
            .as_bool()
            .ok_or(ErrorCode::MedicalConditionInvalid)?;

        if !allows && self.config.medical_assessment.requires_assessment(region, policy_type) {
            return Err(ErrorCode::MedicalConditionInvalid);
        }
        Ok(allows)
    }
}

impl Default for QuoteValidator {
    fn default() -> Self {
        Self::new(ValidationConfig::default())
    }
}

/// Returns a member of an object, treating `null` as absent
fn field<'a>(value: &'a Value, name: &str) -> Option<&'a Value> {
    value.get(name).filter(|v| !v.is_null())
}

fn object(value: Option<&Value>) -> Option<&Value> {
    value.filter(|v| v.is_object())
}

fn date_value(value: Option<&Value>) -> Option<NaiveDate> {
    value
        .and_then(Value::as_str)
        .and_then(|s| parse_iso_date(s).ok())
}

fn age_in<R: std::ops::RangeBounds<i64>>(value: &Value, range: &R) -> Option<u8> {
    value
        .as_i64()
        .filter(|age| range.contains(age))
        .and_then(|age| u8::try_from(age).ok())
}

/// Rule 1
fn check_transaction_id(value: Option<&Value>) -> Result<QuoteTransactionId, ErrorCode> {
    value
        .and_then(Value::as_str)
        .and_then(|id| QuoteTransactionId::new(id).ok())
        .ok_or(ErrorCode::QuoteTxnIdMissing)
}

/// Rule 2
fn check_policy_type(value: Option<&Value>) -> Result<PolicyType, ErrorCode> {
    value
        .ok_or(ErrorCode::PolicyTypeMissing)?
        .as_str()
        .and_then(|s| s.parse().ok())
        .ok_or(ErrorCode::PolicyTypeInvalid)
}

/// Rule 3
fn check_traveller_ages(value: Option<&Value>) -> Result<Vec<u8>, ErrorCode> {
    let ages = value
        .ok_or(ErrorCode::TravellerAgeMissing)?
        .as_array()
        .ok_or(ErrorCode::TravellerAgeArray)?;

    if ages.is_empty() {
        return Err(ErrorCode::TravellerAgeEmpty);
    }
    if ages.len() > MAX_TRAVELLERS {
        return Err(ErrorCode::TravellerAgeMax);
    }

    ages.iter()
        .map(|age| age_in(age, &ADULT_AGES).ok_or(ErrorCode::TravellerAgeInvalid))
        .collect()
}

/// Rule 4
fn check_child_ages(value: Option<&Value>) -> Result<Vec<u8>, ErrorCode> {
    let Some(value) = value else {
        return Ok(Vec::new());
    };
    let ages = value.as_array().ok_or(ErrorCode::ChildAgeArray)?;

    if ages.len() > MAX_DEPENDENTS {
        return Err(ErrorCode::ChildAgeMax);
    }

    ages.iter()
        .map(|age| age_in(age, &CHILD_AGES).ok_or(ErrorCode::ChildAgeInvalid))
        .collect()
}

/// Rule 5
fn check_contact_details(value: Option<&Value>) -> Result<ContactDetails, ErrorCode> {
    let contact = object(value).ok_or(ErrorCode::EmailAddressInvalid)?;
    let email = field(contact, "email")
        .and_then(Value::as_str)
        .filter(|email| email.validate_email())
        .ok_or(ErrorCode::EmailAddressInvalid)?;

    let text = |name: &str| field(contact, name).and_then(Value::as_str).map(str::to_string);

    Ok(ContactDetails {
        first_name: text("firstName"),
        last_name: text("lastName"),
        email: email.to_string(),
    })
}

/// Rule 10
fn check_extra_cover(value: Option<&Value>) -> Result<ExtraCover, ErrorCode> {
    let extra = value.ok_or(ErrorCode::ExtraCoverMissing)?;
    if !extra.is_object() {
        return Err(ErrorCode::ExtraCoverInvalid);
    }

    let cruising = field(extra, "cruising").ok_or(ErrorCode::CruisingMissing)?;
    let snow_sports = field(extra, "snowSports").ok_or(ErrorCode::SnowSportsMissing)?;

    Ok(ExtraCover {
        cruising: cruising.as_bool().ok_or(ErrorCode::ExtraCoverInvalid)?,
        snow_sports: snow_sports.as_bool().ok_or(ErrorCode::ExtraCoverInvalid)?,
    })
}

/// Rule 11
fn check_cover_levels(value: Option<&Value>, region: TripRegion) -> Result<CoverLevels, ErrorCode> {
    let levels = object(value).ok_or(ErrorCode::CoverLevelsMissing)?;
    let domestic = region.is_domestic();

    let required = |category: CoverCategory| -> Result<CoverLevel, ErrorCode> {
        field(levels, category.field())
            .ok_or(category.missing_code())?
            .as_str()
            .and_then(|label| label.parse().ok())
            .ok_or(category.invalid_code())
    };
    let applicable = |category: CoverCategory| -> Result<Option<CoverLevel>, ErrorCode> {
        if category.applies_to(domestic) {
            required(category).map(Some)
        } else {
            Ok(None)
        }
    };

    Ok(CoverLevels {
        trip_cancellation: required(CoverCategory::TripCancellation)?,
        luggage: required(CoverCategory::Luggage)?,
        car_rental_excess: required(CoverCategory::CarRentalExcess)?,
        excess: required(CoverCategory::Excess)?,
        overseas_medical: applicable(CoverCategory::OverseasMedical)?,
        additional_expenses: applicable(CoverCategory::AdditionalExpenses)?,
    })
}

//! Error catalog for quote validation
//!
//! Every rejection carries exactly one entry of this catalog. Codes and
//! messages are part of the wire contract and must never change.

use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

macro_rules! error_catalog {
    ($($variant:ident => ($code:literal, $message:literal)),+ $(,)?) => {
        /// Stable error codes reported for rejected quote requests
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
        pub enum ErrorCode {
            $(
                #[doc = $message]
                $variant,
            )+
        }

        impl ErrorCode {
            /// Every catalog entry, in declaration order
            pub const ALL: &'static [ErrorCode] = &[$(ErrorCode::$variant),+];

            /// Returns the wire code (e.g. `ER_UNKN_DEST`)
            pub fn code(&self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $code,)+
                }
            }

            /// Returns the human-readable message
            pub fn message(&self) -> &'static str {
                match self {
                    $(ErrorCode::$variant => $message,)+
                }
            }

            /// Resolves a wire code back to its catalog entry
            pub fn from_code(code: &str) -> Option<Self> {
                match code {
                    $($code => Some(ErrorCode::$variant),)+
                    _ => None,
                }
            }
        }
    };
}

error_catalog! {
    QuoteTxnIdMissing => ("ER_QUOTE_TXN_ID_MISSING", "Quote transaction Id field missing"),
    PolicyTypeMissing => ("ER_POLICY_TYPE_MISSING", "Policy type field missing"),
    PolicyTypeInvalid => ("ER_POLICY_TYPE_INVALID", "Invalid policy type"),
    TravellerAgeMissing => ("ER_TR_AGE_MISSING", "Traveller ages field missing"),
    TravellerAgeEmpty => ("ER_TR_AGE_EMPTY", "Traveller ages must not be empty"),
    TravellerAgeInvalid => ("ER_TR_AGE_INVALID", "Invalid traveller age"),
    TravellerAgeMax => ("ER_TR_AGE_MAX", "The maximum number of travellers is 2"),
    TravellerAgeArray => ("ER_TR_AGE_ARR", "Traveller ages must be provided as an array"),
    ChildAgeInvalid => ("ER_TR_CHILD_AGE_INVALID", "Invalid child age"),
    ChildAgeMax => ("ER_TR_CHILD_AGE_MAX", "The maximum number of dependents is 6"),
    ChildAgeArray => ("ER_TR_CHILD_AGE_ARR", "Traveller child ages must be provided as an array"),
    EmailAddressInvalid => ("ER_EMAIL_ADDRESS_INVALID", "Invalid email address"),
    SingleTripDetailsMissing => ("ER_SINGLE_TRIP_DETAILS_MISSING", "Single trip details field missing"),
    FromDateInvalid => ("ER_FROM_DATE_INVALID", "Invalid start date"),
    ToDateInvalid => ("ER_TO_DATE_INVALID", "Invalid end date"),
    AnnualCoverDetailsMissing => ("ER_ANNUAL_COVER_DETAILS_MISSING", "Annual cover details field missing"),
    MaxTripDuration => ("ER_MAX_TRIP_DURATION", "Invalid max trip duration"),
    UnknownDestination => ("ER_UNKN_DEST", "Unknown destination received"),
    ExtraCoverMissing => ("ER_EXTRA_COVER_MISSING", "Extra cover field missing"),
    ExtraCoverInvalid => ("ER_EXTRA_COVER_INVALID", "Invalid extra cover"),
    CruisingMissing => ("ER_CRUISING_MISSING", "Cruising field missing"),
    SnowSportsMissing => ("ER_SNOW_SPORTS_MISSING", "Snow sports field missing"),
    CoverLevelsMissing => ("ER_COVER_LEVELS_MISSING", "Cover levels field missing"),
    TripCancellationMissing => ("ER_TRIP_CANX_MISSING", "Trip cancellation field missing"),
    TripCancellationInvalid => ("ER_TRIP_CANX_INVALID", "Invalid trip cancellation"),
    LuggageMissing => ("ER_LUGGAGE_MISSING", "Luggage field missing"),
    LuggageInvalid => ("ER_LUGGAGE_INVALID", "Invalid luggage"),
    ExcessMissing => ("ER_EXCESS_MISSING", "Excess field missing"),
    ExcessInvalid => ("ER_EXCESS_INVALID", "Invalid excess"),
    CarRentalExcessMissing => ("ER_CAR_EXCESS_MISSING", "Car rental excess field missing"),
    CarRentalExcessInvalid => ("ER_CAR_EXCESS_INVALID", "Invalid car rental excess"),
    OverseasMedicalInvalid => ("ER_OVERSEAS_MEDICAL_INVALID", "Invalid overseas medical"),
    AdditionalExpensesInvalid => ("ER_ADDITIONAL_EXPENSES_INVALID", "Invalid additional expenses"),
    MedicalConditionMissing => ("ER_MEDICAL_CONDITION_MISSING", "Medical condition field missing"),
    MedicalConditionInvalid => ("ER_MEDICAL_CONDITION_INVALID", "Invalid medical condition"),
}

impl fmt::Display for ErrorCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

impl Serialize for ErrorCode {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.code())
    }
}

impl<'de> Deserialize<'de> for ErrorCode {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let code = String::deserialize(deserializer)?;
        ErrorCode::from_code(&code)
            .ok_or_else(|| serde::de::Error::custom(format!("Unknown error code: {}", code)))
    }
}

/// A single `{code, message}` element of a rejection body
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ValidationFailure {
    /// Catalog code
    pub code: ErrorCode,
    /// Catalog message for `code`
    pub message: String,
}

impl From<ErrorCode> for ValidationFailure {
    fn from(code: ErrorCode) -> Self {
        Self {
            code,
            message: code.message().to_string(),
        }
    }
}

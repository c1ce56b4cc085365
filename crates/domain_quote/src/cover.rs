//! Cover tiers and benefit categories
//!
//! Each benefit category on a quote selects one tier from a closed set of
//! labels such as `NO_COVER` or `TWO_HUNDRED`.

use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::catalog::ErrorCode;

/// Coverage tier selected for a benefit category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum CoverLevel {
    NoCover,
    OneHundred,
    TwoHundred,
    TwoHundredFifty,
    FiveHundred,
    OneThousand,
    TwoThousand,
    FiveThousand,
    TenThousand,
    Unlimited,
}

impl CoverLevel {
    /// Every tier, from lowest to highest
    pub const ALL: [CoverLevel; 10] = [
        CoverLevel::NoCover,
        CoverLevel::OneHundred,
        CoverLevel::TwoHundred,
        CoverLevel::TwoHundredFifty,
        CoverLevel::FiveHundred,
        CoverLevel::OneThousand,
        CoverLevel::TwoThousand,
        CoverLevel::FiveThousand,
        CoverLevel::TenThousand,
        CoverLevel::Unlimited,
    ];

    /// Returns the wire label (e.g. `TWO_HUNDRED`)
    pub fn label(&self) -> &'static str {
        match self {
            CoverLevel::NoCover => "NO_COVER",
            CoverLevel::OneHundred => "ONE_HUNDRED",
            CoverLevel::TwoHundred => "TWO_HUNDRED",
            CoverLevel::TwoHundredFifty => "TWO_HUNDRED_FIFTY",
            CoverLevel::FiveHundred => "FIVE_HUNDRED",
            CoverLevel::OneThousand => "ONE_THOUSAND",
            CoverLevel::TwoThousand => "TWO_THOUSAND",
            CoverLevel::FiveThousand => "FIVE_THOUSAND",
            CoverLevel::TenThousand => "TEN_THOUSAND",
            CoverLevel::Unlimited => "UNLIMITED",
        }
    }

    /// Returns the monetary limit of the tier (AUD)
    ///
    /// `None` means the tier is uncapped.
    pub fn limit(&self) -> Option<Decimal> {
        match self {
            CoverLevel::NoCover => Some(dec!(0)),
            CoverLevel::OneHundred => Some(dec!(100)),
            CoverLevel::TwoHundred => Some(dec!(200)),
            CoverLevel::TwoHundredFifty => Some(dec!(250)),
            CoverLevel::FiveHundred => Some(dec!(500)),
            CoverLevel::OneThousand => Some(dec!(1000)),
            CoverLevel::TwoThousand => Some(dec!(2000)),
            CoverLevel::FiveThousand => Some(dec!(5000)),
            CoverLevel::TenThousand => Some(dec!(10000)),
            CoverLevel::Unlimited => None,
        }
    }
}

impl FromStr for CoverLevel {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CoverLevel::ALL
            .into_iter()
            .find(|level| level.label() == s)
            .ok_or(())
    }
}

impl fmt::Display for CoverLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Benefit categories of the `coverLevels` object, in validation order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum CoverCategory {
    TripCancellation,
    Luggage,
    CarRentalExcess,
    Excess,
    OverseasMedical,
    AdditionalExpenses,
}

impl CoverCategory {
    pub const ALL: [CoverCategory; 6] = [
        CoverCategory::TripCancellation,
        CoverCategory::Luggage,
        CoverCategory::CarRentalExcess,
        CoverCategory::Excess,
        CoverCategory::OverseasMedical,
        CoverCategory::AdditionalExpenses,
    ];

    /// Returns the JSON field name
    pub fn field(&self) -> &'static str {
        match self {
            CoverCategory::TripCancellation => "tripCancellation",
            CoverCategory::Luggage => "luggage",
            CoverCategory::CarRentalExcess => "carRentalExcess",
            CoverCategory::Excess => "excess",
            CoverCategory::OverseasMedical => "overseasMedical",
            CoverCategory::AdditionalExpenses => "additionalExpenses",
        }
    }

    /// Code reported when the field is absent
    ///
    /// Overseas medical and additional expenses have no dedicated "missing"
    /// entry and report their "invalid" code instead.
    pub fn missing_code(&self) -> ErrorCode {
        match self {
            CoverCategory::TripCancellation => ErrorCode::TripCancellationMissing,
            CoverCategory::Luggage => ErrorCode::LuggageMissing,
            CoverCategory::CarRentalExcess => ErrorCode::CarRentalExcessMissing,
            CoverCategory::Excess => ErrorCode::ExcessMissing,
            CoverCategory::OverseasMedical => ErrorCode::OverseasMedicalInvalid,
            CoverCategory::AdditionalExpenses => ErrorCode::AdditionalExpensesInvalid,
        }
    }

    /// Code reported when the field holds an unknown tier
    pub fn invalid_code(&self) -> ErrorCode {
        match self {
            CoverCategory::TripCancellation => ErrorCode::TripCancellationInvalid,
            CoverCategory::Luggage => ErrorCode::LuggageInvalid,
            CoverCategory::CarRentalExcess => ErrorCode::CarRentalExcessInvalid,
            CoverCategory::Excess => ErrorCode::ExcessInvalid,
            CoverCategory::OverseasMedical => ErrorCode::OverseasMedicalInvalid,
            CoverCategory::AdditionalExpenses => ErrorCode::AdditionalExpensesInvalid,
        }
    }

    /// Returns true if the category is checked for a trip of this kind
    ///
    /// Overseas medical only applies overseas; additional expenses only
    /// applies to domestic trips.
    pub fn applies_to(&self, domestic: bool) -> bool {
        match self {
            CoverCategory::OverseasMedical => !domestic,
            CoverCategory::AdditionalExpenses => domestic,
            _ => true,
        }
    }
}

/// Optional activities added to the policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ExtraCover {
    pub cruising: bool,
    pub snow_sports: bool,
}

/// Selected tier per benefit category
///
/// `overseas_medical` is only retained for overseas trips and
/// `additional_expenses` only for domestic trips.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CoverLevels {
    pub trip_cancellation: CoverLevel,
    pub luggage: CoverLevel,
    pub car_rental_excess: CoverLevel,
    pub excess: CoverLevel,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub overseas_medical: Option<CoverLevel>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub additional_expenses: Option<CoverLevel>,
}

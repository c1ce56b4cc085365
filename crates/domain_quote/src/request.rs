//! Validated quote request model
//!
//! Values of these types only come out of `QuoteValidator`, so holding a
//! `QuoteRequest` means every rule has already passed.

use chrono::NaiveDate;
use core_kernel::QuoteTransactionId;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::cover::{CoverLevels, ExtraCover};
use crate::destination::{Destination, TripRegion};

/// Kind of travel policy being quoted
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum PolicyType {
    /// A single trip with fixed dates
    Single,
    /// Rolling cover for a year, capped per trip
    AnnualCover,
}

impl PolicyType {
    pub fn label(&self) -> &'static str {
        match self {
            PolicyType::Single => "SINGLE",
            PolicyType::AnnualCover => "ANNUAL_COVER",
        }
    }
}

impl FromStr for PolicyType {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "SINGLE" => Ok(PolicyType::Single),
            "ANNUAL_COVER" => Ok(PolicyType::AnnualCover),
            _ => Err(()),
        }
    }
}

impl fmt::Display for PolicyType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Maximum length of any one trip under an annual policy
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MaxTripDuration {
    Days15,
    Days30,
    Days45,
}

impl MaxTripDuration {
    pub fn days(&self) -> u32 {
        match self {
            MaxTripDuration::Days15 => 15,
            MaxTripDuration::Days30 => 30,
            MaxTripDuration::Days45 => 45,
        }
    }

    pub fn from_days(days: i64) -> Option<Self> {
        match days {
            15 => Some(MaxTripDuration::Days15),
            30 => Some(MaxTripDuration::Days30),
            45 => Some(MaxTripDuration::Days45),
            _ => None,
        }
    }
}

impl Serialize for MaxTripDuration {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: serde::Serializer,
    {
        serializer.serialize_u32(self.days())
    }
}

/// Contact details of the primary traveller
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct ContactDetails {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub first_name: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub last_name: Option<String>,
    pub email: String,
}

/// Trip details selected by the policy type
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(tag = "policyType", rename_all_fields = "camelCase")]
pub enum TripDetails {
    #[serde(rename = "SINGLE")]
    Single {
        from_date: NaiveDate,
        to_date: NaiveDate,
    },
    #[serde(rename = "ANNUAL_COVER")]
    AnnualCover {
        start_date: NaiveDate,
        max_trip_duration: MaxTripDuration,
    },
}

impl TripDetails {
    /// First day of cover
    pub fn start_date(&self) -> NaiveDate {
        match self {
            TripDetails::Single { from_date, .. } => *from_date,
            TripDetails::AnnualCover { start_date, .. } => *start_date,
        }
    }

    pub fn policy_type(&self) -> PolicyType {
        match self {
            TripDetails::Single { .. } => PolicyType::Single,
            TripDetails::AnnualCover { .. } => PolicyType::AnnualCover,
        }
    }
}

/// An accepted travel quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteRequest {
    pub quote_transaction_id: QuoteTransactionId,
    pub policy_type: PolicyType,
    pub traveller_ages: Vec<u8>,
    pub traveller_child_ages: Vec<u8>,
    pub contact_details: ContactDetails,
    pub trip: TripDetails,
    pub destinations: Vec<Destination>,
    pub region: TripRegion,
    pub extra_cover: ExtraCover,
    pub cover_levels: CoverLevels,
    pub allows_medical_assessment: bool,
}

impl QuoteRequest {
    /// Number of people covered, adults and dependents
    pub fn insured_count(&self) -> usize {
        self.traveller_ages.len() + self.traveller_child_ages.len()
    }

    /// Returns true if the policy covers dependents
    pub fn is_family(&self) -> bool {
        !self.traveller_child_ages.is_empty()
    }
}

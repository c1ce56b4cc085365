//! Pre-built Test Fixtures
//!
//! Provides ready-to-use quote request documents and supporting data. Trip
//! dates are always computed relative to a caller-supplied "today" so the
//! same fixture works against a fixed clock or the system clock.

use std::sync::Arc;

use chrono::{Days, NaiveDate};
use core_kernel::FixedClock;
use domain_quote::Premium;
use fake::faker::internet::en::SafeEmail;
use fake::faker::name::en::{FirstName, LastName};
use fake::Fake;
use rust_decimal_macros::dec;
use serde_json::{json, Value};

/// Transaction id used by the aggregator harness
pub const BASELINE_TRANSACTION_ID: &str = "Q-CTM-TRAVEL-14";

/// Fixture for calendar dates
pub struct DateFixtures;

impl DateFixtures {
    /// A fixed "today" for deterministic tests
    pub fn today() -> NaiveDate {
        NaiveDate::from_ymd_opt(2025, 3, 14).unwrap()
    }

    /// Clock pinned to [`DateFixtures::today`]
    pub fn clock() -> Arc<FixedClock> {
        Arc::new(FixedClock(Self::today()))
    }

    /// Date `offset` days from `today` (negative goes back)
    pub fn offset(today: NaiveDate, offset: i64) -> NaiveDate {
        if offset >= 0 {
            today.checked_add_days(Days::new(offset as u64)).unwrap()
        } else {
            today.checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
        }
    }

    /// ISO `YYYY-MM-DD` rendering of a date `offset` days from `today`
    pub fn iso(today: NaiveDate, offset: i64) -> String {
        Self::offset(today, offset).format("%Y-%m-%d").to_string()
    }

    /// A date `offset` days from `today` in a format the API rejects
    ///
    /// Day first, so the value never passes the ISO shape check.
    pub fn misformatted(today: NaiveDate, offset: i64) -> String {
        Self::offset(today, offset).format("%d-%m-%Y").to_string()
    }
}

/// Fixture for whole request documents
pub struct RequestFixtures;

impl RequestFixtures {
    /// The aggregator harness's default request
    ///
    /// A single trip to the UK for two adults and six dependents. Annual
    /// cover details are present too and ignored for single trips.
    pub fn baseline(today: NaiveDate) -> Value {
        json!({
            "quoteTransactionId": BASELINE_TRANSACTION_ID,
            "policyType": "SINGLE",
            "travellerAges": [37, 37],
            "travellerChildAges": [2, 4, 6, 8, 10, 15],
            "contactDetails": {
                "firstName": "Dennis",
                "lastName": "Reynolds",
                "email": "dennis@paddys.com"
            },
            "singleTripDetails": {
                "fromDate": DateFixtures::iso(today, 5),
                "toDate": DateFixtures::iso(today, 15)
            },
            "annualCoverDetails": {
                "startDate": DateFixtures::iso(today, 15),
                "maxTripDuration": 30
            },
            "destinations": ["GBR"],
            "extraCover": {
                "cruising": false,
                "snowSports": false
            },
            "coverLevels": {
                "tripCancellation": "NO_COVER",
                "luggage": "NO_COVER",
                "carRentalExcess": "NO_COVER",
                "excess": "TWO_HUNDRED",
                "overseasMedical": "NO_COVER",
                "additionalExpenses": "NO_COVER"
            },
            "allowsMedicalAssessment": false
        })
    }

    /// Single trip within Australia for one adult
    pub fn single_domestic(today: NaiveDate) -> Value {
        let mut document = Self::baseline(today);
        document["destinations"] = json!(["AUS"]);
        document["travellerAges"] = json!([40]);
        document["travellerChildAges"] = json!([]);
        document
    }

    /// Annual worldwide cover for two adults
    pub fn annual_worldwide(today: NaiveDate) -> Value {
        let mut document = Self::baseline(today);
        document["policyType"] = json!("ANNUAL_COVER");
        document["destinations"] = json!(["WW"]);
        document["travellerAges"] = json!([40, 35]);
        if let Some(object) = document.as_object_mut() {
            object.remove("singleTripDetails");
        }
        document
    }

    /// Contact details with randomly generated, well-formed values
    pub fn random_contact() -> Value {
        let first_name: String = FirstName().fake();
        let last_name: String = LastName().fake();
        let email: String = SafeEmail().fake();
        json!({
            "firstName": first_name,
            "lastName": last_name,
            "email": email
        })
    }
}

/// Fixture for pricing data
pub struct PremiumFixtures;

impl PremiumFixtures {
    /// A typical single trip premium
    pub fn standard() -> Premium {
        Premium::aud(dec!(129.50))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_baseline_dates_follow_today() {
        let today = DateFixtures::today();
        let document = RequestFixtures::baseline(today);
        assert_eq!(document["singleTripDetails"]["fromDate"], "2025-03-19");
        assert_eq!(document["singleTripDetails"]["toDate"], "2025-03-29");
    }

    #[test]
    fn test_clock_is_pinned_to_today() {
        use core_kernel::Clock;
        assert_eq!(DateFixtures::clock().today(), DateFixtures::today());
    }

    #[test]
    fn test_misformatted_is_day_first() {
        let today = DateFixtures::today();
        assert_eq!(DateFixtures::misformatted(today, 0), "14-03-2025");
        assert_eq!(DateFixtures::iso(today, -14), "2025-02-28");
    }

    #[test]
    fn test_random_contact_has_email() {
        let contact = RequestFixtures::random_contact();
        assert!(contact["email"].as_str().unwrap().contains('@'));
    }
}

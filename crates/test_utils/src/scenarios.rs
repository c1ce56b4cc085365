//! Aggregator Harness Scenarios
//!
//! The aggregator's acceptance harness is the behavioral contract of the
//! quote endpoint. Every scenario it sends is reproduced here with the
//! outcome it expects, so suites can replay them against the validator and
//! against the HTTP router.

use chrono::NaiveDate;
use domain_quote::ErrorCode;
use serde_json::{json, Value};

use crate::builders::QuoteRequestBuilder;
use crate::fixtures::DateFixtures;

/// Outcome a scenario expects
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Expectation {
    Accepted,
    Rejected(ErrorCode),
}

/// One harness request and its expected outcome
#[derive(Debug, Clone)]
pub struct Scenario {
    pub name: &'static str,
    pub document: Value,
    pub expectation: Expectation,
}

impl Scenario {
    fn rejected(name: &'static str, builder: QuoteRequestBuilder, code: ErrorCode) -> Self {
        Self {
            name,
            document: builder.build(),
            expectation: Expectation::Rejected(code),
        }
    }

    fn accepted(name: &'static str, builder: QuoteRequestBuilder) -> Self {
        Self {
            name,
            document: builder.build(),
            expectation: Expectation::Accepted,
        }
    }
}

/// Scenarios the harness expects to be rejected, in harness order
pub fn error_scenarios(today: NaiveDate) -> Vec<Scenario> {
    let base = || QuoteRequestBuilder::new(today);
    let annual_wwd = || base().policy_type("ANNUAL_COVER").destinations(&["WWD"]);

    vec![
        Scenario::rejected("missingquoteTransactionId", base().remove("/quoteTransactionId"), ErrorCode::QuoteTxnIdMissing),
        Scenario::rejected("invalidPolicyType", base().policy_type("MULTI"), ErrorCode::PolicyTypeInvalid),
        Scenario::rejected("missingPolicyType", base().remove("/policyType"), ErrorCode::PolicyTypeMissing),
        Scenario::rejected("invalidtravellerAges", base().traveller_ages([-24, 25]), ErrorCode::TravellerAgeInvalid),
        Scenario::rejected("invalidtravellerAges greater than 110", base().traveller_ages([111]), ErrorCode::TravellerAgeInvalid),
        Scenario::rejected("invalidtravellerAges less than 18", base().traveller_ages([17]), ErrorCode::TravellerAgeInvalid),
        Scenario::rejected("missingTravellerAges", base().remove("/travellerAges"), ErrorCode::TravellerAgeMissing),
        Scenario::rejected("emptyTravellerAges", base().traveller_ages([]), ErrorCode::TravellerAgeEmpty),
        Scenario::rejected("exceedingMaxTravellers", base().traveller_ages([30, 35, 40]), ErrorCode::TravellerAgeMax),
        Scenario::rejected("NotAnArrayTravellerAge", base().set("/travellerAges", json!(30)), ErrorCode::TravellerAgeArray),
        Scenario::rejected("invalidChildAge", base().child_ages([5, -3]), ErrorCode::ChildAgeInvalid),
        Scenario::rejected("invalidChildAge greater than equal 25", base().child_ages([5, 25]), ErrorCode::ChildAgeInvalid),
        Scenario::rejected("exceedingMaxDependents", base().child_ages([5, 6, 7, 8, 9, 10, 11]), ErrorCode::ChildAgeMax),
        Scenario::rejected("NotAnArrayTravellerChildAge", base().set("/travellerChildAges", json!(5)), ErrorCode::ChildAgeArray),
        Scenario::rejected("invalidEmailFormat", base().set("/contactDetails/email", json!("invalidemail.com")), ErrorCode::EmailAddressInvalid),
        Scenario::rejected("missingSingleTripDetails", base().remove("/singleTripDetails"), ErrorCode::SingleTripDetailsMissing),
        Scenario::rejected(
            "invalidFormatStartDate",
            base().set("/singleTripDetails/fromDate", json!(DateFixtures::misformatted(today, 20))),
            ErrorCode::FromDateInvalid,
        ),
        Scenario::rejected(
            "invalidFormatEndDate",
            base().set("/singleTripDetails/toDate", json!(DateFixtures::misformatted(today, 20))),
            ErrorCode::ToDateInvalid,
        ),
        Scenario::rejected("The end date is smaller than the start date", base().single_trip(10, 0), ErrorCode::ToDateInvalid),
        Scenario::rejected("The start date is the past days", base().single_trip(-10, 10), ErrorCode::FromDateInvalid),
        Scenario::rejected(
            "The start date is greater than equal 365 days from today",
            base().single_trip(365, 375),
            ErrorCode::FromDateInvalid,
        ),
        Scenario::rejected("missingAnnualCoverDetails", annual_wwd().remove("/annualCoverDetails"), ErrorCode::AnnualCoverDetailsMissing),
        Scenario::rejected(
            "invalidMaxTripDuration",
            annual_wwd().set("/annualCoverDetails/maxTripDuration", json!([60])),
            ErrorCode::MaxTripDuration,
        ),
        Scenario::rejected("unknownDestination", base().destinations(&["XYZ"]), ErrorCode::UnknownDestination),
        Scenario::rejected("destination both Domestic and International", base().destinations(&["AUS", "FRA"]), ErrorCode::UnknownDestination),
        Scenario::rejected("unsafeDestination", base().destinations(&["AFG"]), ErrorCode::UnknownDestination),
        Scenario::rejected("noProductDestination", base().destinations(&["SJM"]), ErrorCode::UnknownDestination),
        Scenario::rejected("missingExtraCover", base().remove("/extraCover"), ErrorCode::ExtraCoverMissing),
        Scenario::rejected("invalidExtraCover", base().set("/extraCover/cruising", json!("invalid")), ErrorCode::ExtraCoverInvalid),
        Scenario::rejected("missingCruisingField", base().remove("/extraCover/cruising"), ErrorCode::CruisingMissing),
        Scenario::rejected("missingSnowSportsField", base().remove("/extraCover/snowSports"), ErrorCode::SnowSportsMissing),
        Scenario::rejected("missingCoverLevels", base().remove("/coverLevels"), ErrorCode::CoverLevelsMissing),
        Scenario::rejected("missingTripCancellation", base().remove("/coverLevels/tripCancellation"), ErrorCode::TripCancellationMissing),
        Scenario::rejected("invalidTripCancellation", base().cover_level("tripCancellation", "invalid"), ErrorCode::TripCancellationInvalid),
        Scenario::rejected("missingLuggage", base().remove("/coverLevels/luggage"), ErrorCode::LuggageMissing),
        Scenario::rejected("invalidLuggage", base().cover_level("luggage", "invalid"), ErrorCode::LuggageInvalid),
        Scenario::rejected("missingExcess", base().remove("/coverLevels/excess"), ErrorCode::ExcessMissing),
        Scenario::rejected("invalidExcess", base().cover_level("excess", "invalid"), ErrorCode::ExcessInvalid),
        Scenario::rejected("missingCarRentalExcess", base().remove("/coverLevels/carRentalExcess"), ErrorCode::CarRentalExcessMissing),
        Scenario::rejected("invalidCarRentalExcess", base().cover_level("carRentalExcess", "invalid"), ErrorCode::CarRentalExcessInvalid),
        Scenario::rejected("invalidOverseasMedical", base().cover_level("overseasMedical", "invalid"), ErrorCode::OverseasMedicalInvalid),
        Scenario::rejected(
            "invalidAdditionalExpenses",
            base().destinations(&["AUS"]).cover_level("additionalExpenses", "invalid"),
            ErrorCode::AdditionalExpensesInvalid,
        ),
        Scenario::rejected("missingAllowsMedicalAssessment", base().remove("/allowsMedicalAssessment"), ErrorCode::MedicalConditionMissing),
        Scenario::rejected(
            "invalidAllowsMedicalAssessment",
            base().allows_medical_assessment(json!("invalid")),
            ErrorCode::MedicalConditionInvalid,
        ),
        Scenario::rejected(
            "AllowsMedicalAssessmentIsFalseWithDomestic",
            base().destinations(&["AUS"]).allows_medical_assessment(json!("false")),
            ErrorCode::MedicalConditionInvalid,
        ),
        Scenario::rejected(
            "AllowsMedicalAssessmentIsFalseWithInternational",
            base().allows_medical_assessment(json!("false")),
            ErrorCode::MedicalConditionInvalid,
        ),
        Scenario::rejected(
            "AllowsMedicalAssessmentIsFalseWithAnnualCover",
            base().annual().destinations(&["WW"]).allows_medical_assessment(json!("false")),
            ErrorCode::MedicalConditionInvalid,
        ),
    ]
}

/// Scenarios the harness expects to be accepted
pub fn success_scenarios(today: NaiveDate) -> Vec<Scenario> {
    let base = || QuoteRequestBuilder::new(today);

    vec![
        Scenario::accepted(
            "Single Trip Domestic with 1 traveller",
            base().destinations(&["AUS"]).traveller_ages([40]).child_ages([]),
        ),
        Scenario::accepted(
            "Single Trip Domestic with 2 travellers",
            base().destinations(&["AUS"]).traveller_ages([40, 35]).child_ages([]),
        ),
        Scenario::accepted(
            "Single Trip Domestic with Family travellers",
            base().destinations(&["AUS"]).traveller_ages([40, 35]).child_ages([5, 10, 15]),
        ),
        Scenario::accepted(
            "Single Trip International with 1 traveller",
            base().destinations(&["USA"]).traveller_ages([40]).child_ages([]),
        ),
        Scenario::accepted(
            "Single Trip International with 2 travellers",
            base().destinations(&["AUS"]).traveller_ages([40, 35]).child_ages([]),
        ),
        Scenario::accepted(
            "Single Trip International with Family travellers",
            base().destinations(&["AUS"]).traveller_ages([40, 35]).child_ages([5, 10, 15]),
        ),
        Scenario::accepted(
            "Single Trip International with multi destination",
            base().destinations(&["USA", "FRA"]),
        ),
        Scenario::accepted(
            "Annual Cover trip with 1 traveller",
            base().annual().destinations(&["WW"]).traveller_ages([40]),
        ),
        Scenario::accepted(
            "Annual Cover trip with 2 travellers",
            base().annual().destinations(&["WW"]).traveller_ages([40, 35]),
        ),
        Scenario::accepted(
            "Annual Cover trip with Family travellers",
            base().annual().destinations(&["WW"]).traveller_ages([40, 35]).child_ages([5, 10, 15]),
        ),
    ]
}

/// Every harness scenario, errors first
pub fn all_scenarios(today: NaiveDate) -> Vec<Scenario> {
    let mut scenarios = error_scenarios(today);
    scenarios.extend(success_scenarios(today));
    scenarios
}

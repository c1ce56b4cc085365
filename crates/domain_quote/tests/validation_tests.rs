//! Rule-by-rule tests for the quote request validator

use chrono::{Days, NaiveDate};
use serde_json::{json, Value};

use domain_quote::{
    CoverLevel, ErrorCode, MaxTripDuration, PolicyType, QuoteRequest, QuoteValidator,
    TripDetails, TripRegion, ValidationConfig,
};

fn today() -> NaiveDate {
    NaiveDate::from_ymd_opt(2025, 11, 20).unwrap()
}

fn iso(offset: i64) -> String {
    let date = if offset >= 0 {
        today().checked_add_days(Days::new(offset as u64)).unwrap()
    } else {
        today().checked_sub_days(Days::new(offset.unsigned_abs())).unwrap()
    };
    date.format("%Y-%m-%d").to_string()
}

fn single_trip() -> Value {
    json!({
        "quoteTransactionId": "Q-CTM-TRAVEL-14",
        "policyType": "SINGLE",
        "travellerAges": [37, 37],
        "travellerChildAges": [2, 4, 6, 8, 10, 15],
        "contactDetails": {
            "firstName": "Dennis",
            "lastName": "Reynolds",
            "email": "dennis@paddys.com"
        },
        "singleTripDetails": {"fromDate": iso(5), "toDate": iso(15)},
        "destinations": ["GBR"],
        "extraCover": {"cruising": false, "snowSports": false},
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

fn annual_cover() -> Value {
    let mut document = single_trip();
    let object = document.as_object_mut().unwrap();
    object.remove("singleTripDetails");
    object.insert("policyType".into(), json!("ANNUAL_COVER"));
    object.insert(
        "annualCoverDetails".into(),
        json!({"startDate": iso(15), "maxTripDuration": 30}),
    );
    object.insert("destinations".into(), json!(["WW"]));
    document
}

fn validate(document: &Value) -> Result<QuoteRequest, ErrorCode> {
    QuoteValidator::default()
        .validate_on(document, today())
        .map_err(|rejection| rejection.primary())
}

fn rejected(document: &Value) -> ErrorCode {
    validate(document).expect_err("request should be rejected")
}

fn with(mut document: Value, pointer: &str, value: Value) -> Value {
    *document.pointer_mut(pointer).expect("pointer exists") = value;
    document
}

fn without(mut document: Value, pointer: &str) -> Value {
    let (parent, key) = pointer.rsplit_once('/').unwrap();
    let parent = if parent.is_empty() {
        &mut document
    } else {
        document.pointer_mut(parent).unwrap()
    };
    parent.as_object_mut().unwrap().remove(key);
    document
}

// ============================================================================
// Identification and policy type
// ============================================================================

mod identification_tests {
    use super::*;

    #[test]
    fn test_missing_transaction_id() {
        let document = without(single_trip(), "/quoteTransactionId");
        assert_eq!(rejected(&document), ErrorCode::QuoteTxnIdMissing);
    }

    #[test]
    fn test_blank_transaction_id() {
        let document = with(single_trip(), "/quoteTransactionId", json!("   "));
        assert_eq!(rejected(&document), ErrorCode::QuoteTxnIdMissing);
    }

    #[test]
    fn test_missing_policy_type() {
        let document = without(single_trip(), "/policyType");
        assert_eq!(rejected(&document), ErrorCode::PolicyTypeMissing);
    }

    #[test]
    fn test_unknown_policy_type() {
        let document = with(single_trip(), "/policyType", json!("MULTI_TRIP"));
        assert_eq!(rejected(&document), ErrorCode::PolicyTypeInvalid);
    }

    #[test]
    fn test_non_string_policy_type() {
        let document = with(single_trip(), "/policyType", json!(1));
        assert_eq!(rejected(&document), ErrorCode::PolicyTypeInvalid);
    }
}

// ============================================================================
// Traveller ages
// ============================================================================

mod traveller_tests {
    use super::*;

    #[test]
    fn test_missing_ages() {
        let document = without(single_trip(), "/travellerAges");
        assert_eq!(rejected(&document), ErrorCode::TravellerAgeMissing);
    }

    #[test]
    fn test_ages_not_array() {
        let document = with(single_trip(), "/travellerAges", json!(37));
        assert_eq!(rejected(&document), ErrorCode::TravellerAgeArray);
    }

    #[test]
    fn test_empty_ages() {
        let document = with(single_trip(), "/travellerAges", json!([]));
        assert_eq!(rejected(&document), ErrorCode::TravellerAgeEmpty);
    }

    #[test]
    fn test_more_than_two_travellers() {
        let document = with(single_trip(), "/travellerAges", json!([30, 30, 30]));
        assert_eq!(rejected(&document), ErrorCode::TravellerAgeMax);
    }

    #[test]
    fn test_count_checked_before_values() {
        let document = with(single_trip(), "/travellerAges", json!([5, 200, "x"]));
        assert_eq!(rejected(&document), ErrorCode::TravellerAgeMax);
    }

    #[test]
    fn test_age_boundaries() {
        for age in [18, 110] {
            let document = with(single_trip(), "/travellerAges", json!([age]));
            assert!(validate(&document).is_ok(), "age {age} should be accepted");
        }
        for age in [17, 111, -1] {
            let document = with(single_trip(), "/travellerAges", json!([age]));
            assert_eq!(rejected(&document), ErrorCode::TravellerAgeInvalid, "age {age}");
        }
    }

    #[test]
    fn test_non_numeric_age() {
        let document = with(single_trip(), "/travellerAges", json!(["37"]));
        assert_eq!(rejected(&document), ErrorCode::TravellerAgeInvalid);
    }

    #[test]
    fn test_child_ages_optional() {
        let document = without(single_trip(), "/travellerChildAges");
        let request = validate(&document).unwrap();
        assert!(!request.is_family());
        assert_eq!(request.insured_count(), 2);
    }

    #[test]
    fn test_child_ages_not_array() {
        let document = with(single_trip(), "/travellerChildAges", json!("2,4"));
        assert_eq!(rejected(&document), ErrorCode::ChildAgeArray);
    }

    #[test]
    fn test_more_than_six_dependents() {
        let document = with(single_trip(), "/travellerChildAges", json!([1, 2, 3, 4, 5, 6, 7]));
        assert_eq!(rejected(&document), ErrorCode::ChildAgeMax);
    }

    #[test]
    fn test_child_age_boundaries() {
        let document = with(single_trip(), "/travellerChildAges", json!([0, 24]));
        assert!(validate(&document).is_ok());

        let document = with(single_trip(), "/travellerChildAges", json!([25]));
        assert_eq!(rejected(&document), ErrorCode::ChildAgeInvalid);
    }
}

// ============================================================================
// Contact details
// ============================================================================

mod contact_tests {
    use super::*;

    #[test]
    fn test_invalid_email() {
        let document = with(single_trip(), "/contactDetails/email", json!("invalidemail.com"));
        assert_eq!(rejected(&document), ErrorCode::EmailAddressInvalid);
    }

    #[test]
    fn test_missing_email() {
        let document = without(single_trip(), "/contactDetails/email");
        assert_eq!(rejected(&document), ErrorCode::EmailAddressInvalid);
    }

    #[test]
    fn test_missing_contact_details() {
        let document = without(single_trip(), "/contactDetails");
        assert_eq!(rejected(&document), ErrorCode::EmailAddressInvalid);
    }

    #[test]
    fn test_names_are_optional() {
        let document = with(
            single_trip(),
            "/contactDetails",
            json!({"email": "charlie@paddys.com"}),
        );
        let request = validate(&document).unwrap();
        assert_eq!(request.contact_details.first_name, None);
        assert_eq!(request.contact_details.email, "charlie@paddys.com");
    }
}

// ============================================================================
// Trip details
// ============================================================================

mod trip_tests {
    use super::*;

    #[test]
    fn test_missing_single_trip_details() {
        let document = without(single_trip(), "/singleTripDetails");
        assert_eq!(rejected(&document), ErrorCode::SingleTripDetailsMissing);
    }

    #[test]
    fn test_missing_annual_cover_details() {
        let document = without(annual_cover(), "/annualCoverDetails");
        assert_eq!(rejected(&document), ErrorCode::AnnualCoverDetailsMissing);
    }

    #[test]
    fn test_from_date_in_past() {
        let document = with(single_trip(), "/singleTripDetails/fromDate", json!(iso(-10)));
        assert_eq!(rejected(&document), ErrorCode::FromDateInvalid);
    }

    #[test]
    fn test_from_date_today_accepted() {
        let document = with(single_trip(), "/singleTripDetails/fromDate", json!(iso(0)));
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn test_booking_horizon() {
        let document = with(
            single_trip(),
            "/singleTripDetails",
            json!({"fromDate": iso(364), "toDate": iso(370)}),
        );
        assert!(validate(&document).is_ok());

        let document = with(
            single_trip(),
            "/singleTripDetails",
            json!({"fromDate": iso(365), "toDate": iso(370)}),
        );
        assert_eq!(rejected(&document), ErrorCode::FromDateInvalid);
    }

    #[test]
    fn test_from_date_wrong_format() {
        for bad in ["20-11-2025", "2025/11/25", "2025-13-01", "not a date"] {
            let document = with(single_trip(), "/singleTripDetails/fromDate", json!(bad));
            assert_eq!(rejected(&document), ErrorCode::FromDateInvalid, "{bad}");
        }
    }

    #[test]
    fn test_to_date_before_from_date() {
        let document = with(
            single_trip(),
            "/singleTripDetails",
            json!({"fromDate": iso(10), "toDate": iso(9)}),
        );
        assert_eq!(rejected(&document), ErrorCode::ToDateInvalid);
    }

    #[test]
    fn test_same_day_trip_accepted() {
        let document = with(
            single_trip(),
            "/singleTripDetails",
            json!({"fromDate": iso(10), "toDate": iso(10)}),
        );
        assert!(validate(&document).is_ok());
    }

    #[test]
    fn test_missing_to_date() {
        let document = without(single_trip(), "/singleTripDetails/toDate");
        assert_eq!(rejected(&document), ErrorCode::ToDateInvalid);
    }

    #[test]
    fn test_annual_start_date_in_past() {
        let document = with(annual_cover(), "/annualCoverDetails/startDate", json!(iso(-1)));
        assert_eq!(rejected(&document), ErrorCode::FromDateInvalid);
    }

    #[test]
    fn test_max_trip_duration_values() {
        for days in [15, 30, 45] {
            let document = with(annual_cover(), "/annualCoverDetails/maxTripDuration", json!(days));
            assert!(validate(&document).is_ok(), "{days} days");
        }
        for bad in [json!(60), json!([30]), json!("30"), json!(30.5)] {
            let document = with(annual_cover(), "/annualCoverDetails/maxTripDuration", bad.clone());
            assert_eq!(rejected(&document), ErrorCode::MaxTripDuration, "{bad}");
        }
    }

    #[test]
    fn test_annual_request_typed() {
        let request = validate(&annual_cover()).unwrap();
        assert_eq!(request.policy_type, PolicyType::AnnualCover);
        assert!(matches!(
            request.trip,
            TripDetails::AnnualCover { max_trip_duration: MaxTripDuration::Days30, .. }
        ));
    }

    #[test]
    fn test_shorter_horizon_from_config() {
        let validator = QuoteValidator::new(ValidationConfig {
            booking_horizon_days: 30,
            ..ValidationConfig::default()
        });
        let document = with(
            single_trip(),
            "/singleTripDetails",
            json!({"fromDate": iso(30), "toDate": iso(35)}),
        );
        let rejection = validator.validate_on(&document, today()).unwrap_err();
        assert_eq!(rejection.primary(), ErrorCode::FromDateInvalid);
    }
}

// ============================================================================
// Destinations
// ============================================================================

mod destination_tests {
    use super::*;

    #[test]
    fn test_unsafe_destination() {
        let document = with(single_trip(), "/destinations", json!(["AFG"]));
        assert_eq!(rejected(&document), ErrorCode::UnknownDestination);
    }

    #[test]
    fn test_domestic_mixed_with_international() {
        let document = with(single_trip(), "/destinations", json!(["AUS", "FRA"]));
        assert_eq!(rejected(&document), ErrorCode::UnknownDestination);
    }

    #[test]
    fn test_unknown_and_empty() {
        for destinations in [json!(["XYZ"]), json!([]), json!("GBR"), json!([42])] {
            let document = with(single_trip(), "/destinations", destinations.clone());
            assert_eq!(rejected(&document), ErrorCode::UnknownDestination, "{destinations}");
        }
        let document = without(single_trip(), "/destinations");
        assert_eq!(rejected(&document), ErrorCode::UnknownDestination);
    }

    #[test]
    fn test_no_product_destination() {
        let document = with(single_trip(), "/destinations", json!(["SJM"]));
        assert_eq!(rejected(&document), ErrorCode::UnknownDestination);
    }

    #[test]
    fn test_multi_destination_international() {
        let document = with(single_trip(), "/destinations", json!(["GBR", "FRA", "ITA"]));
        let request = validate(&document).unwrap();
        assert_eq!(request.region, TripRegion::International);
        assert_eq!(request.destinations.len(), 3);
    }

    #[test]
    fn test_worldwide_region() {
        let request = validate(&annual_cover()).unwrap();
        assert_eq!(request.region, TripRegion::Worldwide);
    }
}

// ============================================================================
// Extra cover
// ============================================================================

mod extra_cover_tests {
    use super::*;

    #[test]
    fn test_missing_extra_cover() {
        let document = without(single_trip(), "/extraCover");
        assert_eq!(rejected(&document), ErrorCode::ExtraCoverMissing);
    }

    #[test]
    fn test_extra_cover_not_object() {
        let document = with(single_trip(), "/extraCover", json!(true));
        assert_eq!(rejected(&document), ErrorCode::ExtraCoverInvalid);
    }

    #[test]
    fn test_missing_cruising() {
        let document = without(single_trip(), "/extraCover/cruising");
        assert_eq!(rejected(&document), ErrorCode::CruisingMissing);
    }

    #[test]
    fn test_missing_snow_sports() {
        let document = without(single_trip(), "/extraCover/snowSports");
        assert_eq!(rejected(&document), ErrorCode::SnowSportsMissing);
    }

    #[test]
    fn test_non_boolean_flag() {
        let document = with(single_trip(), "/extraCover/cruising", json!("yes"));
        assert_eq!(rejected(&document), ErrorCode::ExtraCoverInvalid);
    }
}

// ============================================================================
// Cover levels
// ============================================================================

mod cover_level_tests {
    use super::*;

    #[test]
    fn test_missing_cover_levels() {
        let document = without(single_trip(), "/coverLevels");
        assert_eq!(rejected(&document), ErrorCode::CoverLevelsMissing);
    }

    #[test]
    fn test_missing_and_invalid_tiers() {
        let cases = [
            ("tripCancellation", ErrorCode::TripCancellationMissing, ErrorCode::TripCancellationInvalid),
            ("luggage", ErrorCode::LuggageMissing, ErrorCode::LuggageInvalid),
            ("carRentalExcess", ErrorCode::CarRentalExcessMissing, ErrorCode::CarRentalExcessInvalid),
            ("excess", ErrorCode::ExcessMissing, ErrorCode::ExcessInvalid),
            ("overseasMedical", ErrorCode::OverseasMedicalInvalid, ErrorCode::OverseasMedicalInvalid),
        ];
        for (field, missing, invalid) in cases {
            let pointer = format!("/coverLevels/{field}");
            assert_eq!(rejected(&without(single_trip(), &pointer)), missing, "{field} missing");
            assert_eq!(
                rejected(&with(single_trip(), &pointer, json!("invalid"))),
                invalid,
                "{field} invalid"
            );
        }
    }

    #[test]
    fn test_additional_expenses_only_checked_domestically() {
        let overseas = with(single_trip(), "/coverLevels/additionalExpenses", json!("invalid"));
        assert!(validate(&overseas).is_ok());

        let domestic = with(single_trip(), "/destinations", json!(["AUS"]));
        let domestic = with(domestic, "/coverLevels/additionalExpenses", json!("invalid"));
        assert_eq!(rejected(&domestic), ErrorCode::AdditionalExpensesInvalid);
    }

    #[test]
    fn test_overseas_medical_ignored_domestically() {
        let domestic = with(single_trip(), "/destinations", json!(["AUS"]));
        let domestic = without(domestic, "/coverLevels/overseasMedical");
        let request = validate(&domestic).unwrap();
        assert_eq!(request.region, TripRegion::Domestic);
        assert_eq!(request.cover_levels.overseas_medical, None);
        assert_eq!(request.cover_levels.additional_expenses, Some(CoverLevel::NoCover));
    }
}

// ============================================================================
// Medical assessment
// ============================================================================

mod medical_tests {
    use super::*;

    #[test]
    fn test_missing_medical_flag() {
        let document = without(single_trip(), "/allowsMedicalAssessment");
        assert_eq!(rejected(&document), ErrorCode::MedicalConditionMissing);
    }

    #[test]
    fn test_string_medical_flag() {
        let document = with(single_trip(), "/allowsMedicalAssessment", json!("false"));
        assert_eq!(rejected(&document), ErrorCode::MedicalConditionInvalid);
    }

    #[test]
    fn test_both_booleans_accepted_by_default() {
        for flag in [true, false] {
            let document = with(single_trip(), "/allowsMedicalAssessment", json!(flag));
            assert_eq!(validate(&document).unwrap().allows_medical_assessment, flag);
        }
    }
}

// ============================================================================
// Pipeline properties
// ============================================================================

mod pipeline_tests {
    use super::*;

    #[test]
    fn test_validation_is_idempotent() {
        let documents = [
            single_trip(),
            annual_cover(),
            with(single_trip(), "/destinations", json!(["AFG"])),
        ];
        for document in documents {
            assert_eq!(validate(&document), validate(&document));
        }
    }

    #[test]
    fn test_rejection_message_matches_catalog() {
        let rejection = QuoteValidator::default()
            .validate_on(&without(single_trip(), "/extraCover"), today())
            .unwrap_err();
        let failure = &rejection.failures()[0];
        assert_eq!(failure.code, ErrorCode::ExtraCoverMissing);
        assert_eq!(failure.message, "Extra cover field missing");
    }

    #[test]
    fn test_earlier_rule_reported_first() {
        let document = without(single_trip(), "/coverLevels");
        let document = with(document, "/policyType", json!("BOGUS"));
        assert_eq!(rejected(&document), ErrorCode::PolicyTypeInvalid);
    }
}

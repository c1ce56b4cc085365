//! Property-Based Test Generators
//!
//! Provides proptest strategies for quote request documents. Strategies
//! ending in `_strategy` without a qualifier produce values every rule
//! accepts; the `invalid_` and `arbitrary_` ones do not.

use chrono::NaiveDate;
use domain_quote::CoverLevel;
use proptest::prelude::*;
use proptest::sample::{select, subsequence};
use serde_json::{json, Map, Value};

use crate::builders::QuoteRequestBuilder;

/// Overseas codes with a product in the standard catalog
pub const INTERNATIONAL_CODES: &[&str] = &[
    "GBR", "FRA", "USA", "NZL", "JPN", "ITA", "DEU", "CAN", "SGP", "FJI", "THA", "IDN",
];

/// Codes the standard catalog refuses to quote
pub const UNQUOTABLE_CODES: &[&str] = &["AFG", "SYR", "PRK", "YEM", "SJM", "ATA", "BVT", "XYZ"];

/// Strategy for accepted adult ages
pub fn adult_age_strategy() -> impl Strategy<Value = i64> {
    18i64..=110i64
}

/// Strategy for adult ages outside the accepted range
pub fn invalid_adult_age_strategy() -> impl Strategy<Value = i64> {
    prop_oneof![-1000i64..18i64, 111i64..1000i64]
}

/// Strategy for accepted dependent ages
pub fn child_age_strategy() -> impl Strategy<Value = i64> {
    0i64..25i64
}

/// Strategy for one or two adult travellers
pub fn traveller_ages_strategy() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(adult_age_strategy(), 1..=2)
}

/// Strategy for more travellers than a quote allows, with any ages
pub fn oversized_traveller_ages_strategy() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(any::<i64>(), 3..12)
}

/// Strategy for up to six dependents
pub fn child_ages_strategy() -> impl Strategy<Value = Vec<i64>> {
    proptest::collection::vec(child_age_strategy(), 0..=6)
}

/// Strategy for cover tiers
pub fn cover_level_strategy() -> impl Strategy<Value = CoverLevel> {
    select(CoverLevel::ALL.to_vec())
}

/// Strategy for a quotable destination list
pub fn destinations_strategy() -> impl Strategy<Value = Vec<&'static str>> {
    prop_oneof![
        Just(vec!["AUS"]),
        subsequence(INTERNATIONAL_CODES.to_vec(), 1..=4),
        Just(vec!["WW"]),
        Just(vec!["WWD"]),
    ]
}

/// Strategy for an annual maximum trip duration
pub fn max_trip_duration_strategy() -> impl Strategy<Value = i64> {
    select(vec![15i64, 30, 45])
}

fn cover_levels_strategy() -> impl Strategy<Value = Value> {
    proptest::collection::vec(cover_level_strategy(), 6).prop_map(|levels| {
        json!({
            "tripCancellation": levels[0].label(),
            "luggage": levels[1].label(),
            "carRentalExcess": levels[2].label(),
            "excess": levels[3].label(),
            "overseasMedical": levels[4].label(),
            "additionalExpenses": levels[5].label()
        })
    })
}

/// Strategy for request documents every rule accepts as of `today`
pub fn valid_request_strategy(today: NaiveDate) -> impl Strategy<Value = Value> {
    let travellers = (traveller_ages_strategy(), child_ages_strategy());
    let trip = (any::<bool>(), 0i64..365i64, 0i64..60i64, max_trip_duration_strategy());
    let cover = (
        destinations_strategy(),
        any::<bool>(),
        any::<bool>(),
        cover_levels_strategy(),
        any::<bool>(),
    );

    (travellers, trip, cover).prop_map(
        move |((ages, children), (annual, start, length, duration), (destinations, cruising, snow_sports, levels, medical))| {
            let builder = QuoteRequestBuilder::new(today)
                .traveller_ages(ages)
                .child_ages(children)
                .destinations(&destinations)
                .set("/extraCover", json!({"cruising": cruising, "snowSports": snow_sports}))
                .set("/coverLevels", levels)
                .allows_medical_assessment(json!(medical));

            let builder = if annual {
                builder.annual().annual_cover(start, duration)
            } else {
                builder.single_trip(start, start + length)
            };
            builder.build()
        },
    )
}

/// Strategy for arbitrary JSON values of limited depth
pub fn arbitrary_json_strategy() -> impl Strategy<Value = Value> {
    let leaf = prop_oneof![
        Just(Value::Null),
        any::<bool>().prop_map(Value::Bool),
        any::<i64>().prop_map(|n| json!(n)),
        any::<f64>().prop_filter("finite", |f| f.is_finite()).prop_map(|f| json!(f)),
        "[A-Z_]{0,12}".prop_map(Value::String),
    ];
    leaf.prop_recursive(3, 32, 6, |inner| {
        prop_oneof![
            proptest::collection::vec(inner.clone(), 0..6).prop_map(Value::Array),
            proptest::collection::btree_map("[a-zA-Z]{1,10}", inner, 0..6)
                .prop_map(|entries| Value::Object(entries.into_iter().collect::<Map<_, _>>())),
        ]
    })
}

/// Strategy for valid requests with one top-level field replaced by noise
pub fn corrupted_request_strategy(today: NaiveDate) -> impl Strategy<Value = Value> {
    let fields = select(vec![
        "quoteTransactionId",
        "policyType",
        "travellerAges",
        "travellerChildAges",
        "contactDetails",
        "singleTripDetails",
        "annualCoverDetails",
        "destinations",
        "extraCover",
        "coverLevels",
        "allowsMedicalAssessment",
    ]);
    (valid_request_strategy(today), fields, arbitrary_json_strategy()).prop_map(
        |(mut document, field, noise)| {
            if let Some(object) = document.as_object_mut() {
                object.insert(field.to_string(), noise);
            }
            document
        },
    )
}

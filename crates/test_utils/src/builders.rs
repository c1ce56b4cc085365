//! Test Data Builders
//!
//! Provides a builder for quote request documents. Start from the harness
//! baseline and change only the fields a test cares about. Arbitrary edits
//! are addressed with JSON pointers (`/coverLevels/luggage`).

use chrono::NaiveDate;
use serde_json::{json, Value};

use crate::fixtures::{DateFixtures, RequestFixtures};

/// Builder for quote request documents
#[derive(Debug, Clone)]
pub struct QuoteRequestBuilder {
    today: NaiveDate,
    document: Value,
}

impl QuoteRequestBuilder {
    /// Creates a builder seeded with the harness baseline
    pub fn new(today: NaiveDate) -> Self {
        Self::from_document(today, RequestFixtures::baseline(today))
    }

    /// Creates a builder around an existing document
    pub fn from_document(today: NaiveDate, document: Value) -> Self {
        Self { today, document }
    }

    /// Sets the policy type label
    pub fn policy_type(self, policy_type: &str) -> Self {
        self.set("/policyType", json!(policy_type))
    }

    /// Switches to annual cover and drops the single trip details
    pub fn annual(self) -> Self {
        self.policy_type("ANNUAL_COVER").remove("/singleTripDetails")
    }

    /// Sets the adult traveller ages
    pub fn traveller_ages(self, ages: impl IntoIterator<Item = i64>) -> Self {
        let ages: Vec<i64> = ages.into_iter().collect();
        self.set("/travellerAges", json!(ages))
    }

    /// Sets the dependent ages
    pub fn child_ages(self, ages: impl IntoIterator<Item = i64>) -> Self {
        let ages: Vec<i64> = ages.into_iter().collect();
        self.set("/travellerChildAges", json!(ages))
    }

    /// Sets the destination codes
    pub fn destinations(self, codes: &[&str]) -> Self {
        self.set("/destinations", json!(codes))
    }

    /// Sets single trip dates as offsets from today
    pub fn single_trip(self, from_offset: i64, to_offset: i64) -> Self {
        let today = self.today;
        self.set(
            "/singleTripDetails",
            json!({
                "fromDate": DateFixtures::iso(today, from_offset),
                "toDate": DateFixtures::iso(today, to_offset)
            }),
        )
    }

    /// Sets annual cover details with the start as an offset from today
    pub fn annual_cover(self, start_offset: i64, max_trip_duration: i64) -> Self {
        let today = self.today;
        self.set(
            "/annualCoverDetails",
            json!({
                "startDate": DateFixtures::iso(today, start_offset),
                "maxTripDuration": max_trip_duration
            }),
        )
    }

    /// Sets the tier label of one cover category
    pub fn cover_level(self, field: &str, label: &str) -> Self {
        self.set(&format!("/coverLevels/{field}"), json!(label))
    }

    /// Sets the medical assessment flag
    pub fn allows_medical_assessment(self, value: Value) -> Self {
        self.set("/allowsMedicalAssessment", value)
    }

    /// Sets the value at a JSON pointer, creating the last segment if needed
    ///
    /// # Panics
    ///
    /// Panics if the parent of the pointer is not an object
    pub fn set(mut self, pointer: &str, value: Value) -> Self {
        let (parent, key) = split_pointer(pointer);
        parent_object(&mut self.document, parent, pointer).insert(key.to_string(), value);
        self
    }

    /// Removes the value at a JSON pointer
    ///
    /// # Panics
    ///
    /// Panics if the parent of the pointer is not an object
    pub fn remove(mut self, pointer: &str) -> Self {
        let (parent, key) = split_pointer(pointer);
        parent_object(&mut self.document, parent, pointer).remove(key);
        self
    }

    /// Returns the document
    pub fn build(self) -> Value {
        self.document
    }
}

fn split_pointer(pointer: &str) -> (&str, &str) {
    pointer
        .rsplit_once('/')
        .unwrap_or_else(|| panic!("JSON pointer must start with '/': {pointer}"))
}

fn parent_object<'a>(
    document: &'a mut Value,
    parent: &str,
    pointer: &str,
) -> &'a mut serde_json::Map<String, Value> {
    let node = if parent.is_empty() {
        document
    } else {
        document
            .pointer_mut(parent)
            .unwrap_or_else(|| panic!("no parent for {pointer}"))
    };
    node.as_object_mut()
        .unwrap_or_else(|| panic!("parent of {pointer} is not an object"))
}

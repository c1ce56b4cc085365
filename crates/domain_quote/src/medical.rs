//! Medical assessment policy
//!
//! Some products can only be quoted when the applicant agrees to a medical
//! assessment. Which trip region / policy type combinations require it is a
//! business decision, so it is configured rather than hard-coded. The
//! default policy requires assessment for nothing.

use serde::{Deserialize, Serialize};

use crate::destination::TripRegion;
use crate::request::PolicyType;

/// A combination for which `allowsMedicalAssessment = false` is refused
///
/// An absent field matches any value.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AssessmentRequirement {
    #[serde(default)]
    pub region: Option<TripRegion>,
    #[serde(default)]
    pub policy_type: Option<PolicyType>,
}

impl AssessmentRequirement {
    pub fn matches(&self, region: TripRegion, policy_type: PolicyType) -> bool {
        self.region.map_or(true, |r| r == region)
            && self.policy_type.map_or(true, |p| p == policy_type)
    }
}

/// Set of combinations that require a medical assessment
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct MedicalAssessmentPolicy {
    #[serde(default)]
    pub requirements: Vec<AssessmentRequirement>,
}

impl MedicalAssessmentPolicy {
    /// Policy that never requires assessment
    pub fn permissive() -> Self {
        Self::default()
    }

    /// Adds a required combination
    pub fn require(mut self, region: Option<TripRegion>, policy_type: Option<PolicyType>) -> Self {
        self.requirements.push(AssessmentRequirement { region, policy_type });
        self
    }

    /// Returns true if the applicant must allow a medical assessment
    pub fn requires_assessment(&self, region: TripRegion, policy_type: PolicyType) -> bool {
        self.requirements
            .iter()
            .any(|r| r.matches(region, policy_type))
    }
}

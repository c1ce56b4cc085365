//! Destination catalog
//!
//! Destination codes (ISO 3166 alpha-3 countries plus a few region codes) are
//! partitioned into classes that drive cross-field eligibility:
//!
//! - **Domestic**: travel within Australia
//! - **International**: a single overseas country
//! - **Worldwide**: region codes covering every insurable country
//! - **Unsafe**: destinations under a "do not travel" advisory
//! - **NoProduct**: destinations no product is offered for
//!
//! Only Domestic, International and Worldwide codes are quotable, and a trip
//! may not mix Domestic with anything overseas.

use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fmt;

/// Classification of a single destination code
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum DestinationClass {
    Domestic,
    International,
    Worldwide,
    Unsafe,
    NoProduct,
}

impl DestinationClass {
    /// Returns true if quotes may be issued for this class
    pub fn is_quotable(&self) -> bool {
        matches!(
            self,
            DestinationClass::Domestic | DestinationClass::International | DestinationClass::Worldwide
        )
    }
}

/// Classification of a whole trip
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum TripRegion {
    /// Every destination is domestic
    Domestic,
    /// Overseas travel to specific countries
    International,
    /// At least one worldwide region code
    Worldwide,
}

impl TripRegion {
    pub fn is_domestic(&self) -> bool {
        matches!(self, TripRegion::Domestic)
    }
}

impl fmt::Display for TripRegion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let label = match self {
            TripRegion::Domestic => "DOMESTIC",
            TripRegion::International => "INTERNATIONAL",
            TripRegion::Worldwide => "WORLDWIDE",
        };
        f.write_str(label)
    }
}

/// A resolved, quotable destination
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Destination {
    pub code: String,
    pub class: DestinationClass,
}

/// Why a destination list cannot be quoted
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DestinationIssue {
    /// No destinations were supplied
    Empty,
    /// A code is not in the catalog
    Unknown(String),
    /// A code is in the catalog but not quotable
    NotQuotable(String, DestinationClass),
    /// Domestic and overseas destinations in one trip
    MixedDomesticAndOverseas,
}

const DOMESTIC: &[&str] = &["AUS"];

const WORLDWIDE: &[&str] = &["WW", "WWD"];

const UNSAFE: &[&str] = &[
    "AFG", "BLR", "BFA", "CAF", "HTI", "IRN", "IRQ", "LBY", "MLI", "MMR", "NER", "PRK", "RUS",
    "SDN", "SOM", "SSD", "SYR", "UKR", "VEN", "YEM",
];

const NO_PRODUCT: &[&str] = &["ATA", "ATF", "BVT", "HMD", "IOT", "SGS", "SJM", "UMI"];

const INTERNATIONAL: &[&str] = &[
    // Oceania and the Pacific
    "NZL", "FJI", "PNG", "VUT", "WSM", "TON", "NCL", "PYF", "COK", "SLB", "KIR", "NRU", "TUV",
    // Asia
    "JPN", "CHN", "HKG", "MAC", "TWN", "KOR", "MNG", "IND", "IDN", "THA", "SGP", "MYS", "VNM",
    "PHL", "KHM", "LAO", "BRN", "TLS", "NPL", "BTN", "LKA", "MDV", "BGD", "KAZ", "UZB",
    // Middle East
    "ARE", "QAT", "OMN", "BHR", "KWT", "SAU", "JOR", "ISR",
    // Europe
    "GBR", "IRL", "FRA", "DEU", "ITA", "ESP", "PRT", "GRC", "NLD", "BEL", "LUX", "CHE", "AUT",
    "DNK", "SWE", "NOR", "FIN", "ISL", "POL", "CZE", "SVK", "HUN", "SVN", "HRV", "BIH", "SRB",
    "MNE", "ALB", "MKD", "BGR", "ROU", "EST", "LVA", "LTU", "MLT", "CYP", "MCO", "AND", "SMR",
    "VAT", "LIE", "TUR", "GEO", "ARM",
    // Africa
    "EGY", "MAR", "TUN", "ZAF", "NAM", "BWA", "ZWE", "ZMB", "KEN", "TZA", "UGA", "RWA", "MUS",
    "SYC", "MDG", "GHA", "SEN",
    // Americas
    "USA", "CAN", "MEX", "GTM", "BLZ", "CRI", "PAN", "CUB", "JAM", "BHS", "BRB", "DOM", "PRI",
    "COL", "ECU", "PER", "BOL", "CHL", "ARG", "URY", "PRY", "BRA",
];

static STANDARD_CATALOG: Lazy<DestinationCatalog> = Lazy::new(|| {
    let mut catalog = DestinationCatalog::empty();
    catalog.extend(DOMESTIC, DestinationClass::Domestic);
    catalog.extend(INTERNATIONAL, DestinationClass::International);
    catalog.extend(WORLDWIDE, DestinationClass::Worldwide);
    catalog.extend(UNSAFE, DestinationClass::Unsafe);
    catalog.extend(NO_PRODUCT, DestinationClass::NoProduct);
    catalog
});

/// Lookup table from destination code to class
///
/// Codes are matched exactly (case-sensitive). Later insertions win, so a
/// country can be moved between classes (e.g. onto the unsafe list) by
/// inserting it again.
#[derive(Debug, Clone, Default)]
pub struct DestinationCatalog {
    entries: HashMap<String, DestinationClass>,
}

impl DestinationCatalog {
    /// Creates a catalog with no entries
    pub fn empty() -> Self {
        Self::default()
    }

    /// Returns the standard catalog
    pub fn standard() -> &'static DestinationCatalog {
        &STANDARD_CATALOG
    }

    /// Adds or reclassifies a code
    pub fn insert(&mut self, code: impl Into<String>, class: DestinationClass) {
        self.entries.insert(code.into(), class);
    }

    fn extend(&mut self, codes: &[&str], class: DestinationClass) {
        for code in codes {
            self.insert(*code, class);
        }
    }

    /// Returns the class of a code, if known
    pub fn class_of(&self, code: &str) -> Option<DestinationClass> {
        self.entries.get(code).copied()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Resolves a destination list and classifies the trip
    ///
    /// # Arguments
    ///
    /// * `codes` - Destination codes in request order
    ///
    /// # Returns
    ///
    /// The resolved destinations and the trip region, or the first issue found
    pub fn classify<S: AsRef<str>>(
        &self,
        codes: &[S],
    ) -> Result<(Vec<Destination>, TripRegion), DestinationIssue> {
        if codes.is_empty() {
            return Err(DestinationIssue::Empty);
        }

        let mut destinations = Vec::with_capacity(codes.len());
        for code in codes {
            let code = code.as_ref();
            let class = self
                .class_of(code)
                .ok_or_else(|| DestinationIssue::Unknown(code.to_string()))?;
            if !class.is_quotable() {
                return Err(DestinationIssue::NotQuotable(code.to_string(), class));
            }
            destinations.push(Destination {
                code: code.to_string(),
                class,
            });
        }

        let domestic = destinations
            .iter()
            .filter(|d| d.class == DestinationClass::Domestic)
            .count();

        let region = if domestic == destinations.len() {
            TripRegion::Domestic
        } else if domestic > 0 {
            return Err(DestinationIssue::MixedDomesticAndOverseas);
        } else if destinations.iter().any(|d| d.class == DestinationClass::Worldwide) {
            TripRegion::Worldwide
        } else {
            TripRegion::International
        };

        Ok((destinations, region))
    }
}

//! Calendar handling for quote validation
//!
//! Quote rules compare dates at calendar-day granularity. "Today" is the
//! calendar date in the jurisdiction the quote is issued for, so this module
//! provides:
//! - `Timezone`: a serializable wrapper around `chrono_tz::Tz`
//! - `Clock`: the source of "today" (system clock or a fixed date)
//! - `BookingWindow`: the half-open range of dates a trip may start in
//! - `parse_iso_date`: strict `YYYY-MM-DD` parsing

use chrono::{DateTime, Days, NaiveDate, Utc};
use chrono_tz::Tz;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// Timezone wrapper for quote jurisdictions
///
/// Wraps chrono_tz::Tz with custom serialization support.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Timezone(pub Tz);

impl Serialize for Timezone {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(self.0.name())
    }
}

impl<'de> Deserialize<'de> for Timezone {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let s = String::deserialize(deserializer)?;
        s.parse().map_err(serde::de::Error::custom)
    }
}

impl FromStr for Timezone {
    type Err = TemporalError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Tz::from_str(s)
            .map(Timezone)
            .map_err(|_| TemporalError::UnknownTimezone(s.to_string()))
    }
}

impl Timezone {
    pub fn new(tz: Tz) -> Self {
        Self(tz)
    }

    /// Returns the IANA name of the timezone
    pub fn name(&self) -> &'static str {
        self.0.name()
    }

    /// Returns the local calendar date of a UTC instant
    pub fn date_of(&self, instant: DateTime<Utc>) -> NaiveDate {
        instant.with_timezone(&self.0).date_naive()
    }

    /// Returns today's calendar date in this timezone
    pub fn today(&self) -> NaiveDate {
        self.date_of(Utc::now())
    }
}

impl Default for Timezone {
    fn default() -> Self {
        Self(chrono_tz::Australia::Sydney)
    }
}

impl fmt::Display for Timezone {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Errors related to temporal operations
#[derive(Debug, Error, PartialEq, Eq)]
pub enum TemporalError {
    #[error("Invalid date format: {0} (expected YYYY-MM-DD)")]
    InvalidDateFormat(String),

    #[error("Unknown timezone: {0}")]
    UnknownTimezone(String),
}

/// Parses a calendar date in strict `YYYY-MM-DD` form
///
/// Unpadded components, surrounding whitespace and trailing text are rejected,
/// as are impossible dates such as `2025-02-30`.
///
/// # Examples
///
/// ```rust
/// use core_kernel::temporal::parse_iso_date;
///
/// assert!(parse_iso_date("2025-03-09").is_ok());
/// assert!(parse_iso_date("2025-3-9").is_err());
/// assert!(parse_iso_date("09-03-2025").is_err());
/// ```
pub fn parse_iso_date(s: &str) -> Result<NaiveDate, TemporalError> {
    let bytes = s.as_bytes();
    let well_formed = bytes.len() == 10
        && bytes.iter().enumerate().all(|(i, b)| match i {
            4 | 7 => *b == b'-',
            _ => b.is_ascii_digit(),
        });

    if !well_formed {
        return Err(TemporalError::InvalidDateFormat(s.to_string()));
    }

    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .map_err(|_| TemporalError::InvalidDateFormat(s.to_string()))
}

/// Source of the current calendar date
///
/// Validation never reads the wall clock directly so that date rules can be
/// exercised against a fixed "today".
pub trait Clock: Send + Sync + fmt::Debug {
    /// Returns today's calendar date
    fn today(&self) -> NaiveDate;
}

/// Clock backed by the system time, observed in a jurisdiction timezone
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock {
    timezone: Timezone,
}

impl SystemClock {
    pub fn new(timezone: Timezone) -> Self {
        Self { timezone }
    }

    pub fn timezone(&self) -> Timezone {
        self.timezone
    }
}

impl Clock for SystemClock {
    fn today(&self) -> NaiveDate {
        self.timezone.today()
    }
}

/// Clock that always reports the same date
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FixedClock(pub NaiveDate);

impl Clock for FixedClock {
    fn today(&self) -> NaiveDate {
        self.0
    }
}

/// The range of dates a trip may start in: `[opens, opens + horizon_days)`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BookingWindow {
    /// First bookable date (inclusive)
    pub opens: NaiveDate,
    /// Number of bookable days from `opens`
    pub horizon_days: u32,
}

impl BookingWindow {
    /// Creates a window opening on `today`
    pub fn starting(today: NaiveDate, horizon_days: u32) -> Self {
        Self { opens: today, horizon_days }
    }

    /// Returns the first date outside the window
    pub fn closes(&self) -> NaiveDate {
        self.opens
            .checked_add_days(Days::new(u64::from(self.horizon_days)))
            .unwrap_or(NaiveDate::MAX)
    }

    /// Returns true if the date is before the window opens
    pub fn is_past(&self, date: NaiveDate) -> bool {
        date < self.opens
    }

    /// Returns true if the date falls inside the window
    pub fn contains(&self, date: NaiveDate) -> bool {
        date >= self.opens && date < self.closes()
    }
}

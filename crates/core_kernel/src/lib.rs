//! Core Kernel - Foundational types for travel quote validation
//!
//! This crate provides the building blocks shared by the quote domain and the
//! API layer:
//! - Calendar handling: timezone-aware "today", clocks, booking windows
//! - Strict ISO date parsing
//! - Common identifiers and value objects

pub mod temporal;
pub mod identifiers;
pub mod error;

pub use temporal::{
    BookingWindow, Clock, FixedClock, SystemClock, TemporalError, Timezone, parse_iso_date,
};
pub use identifiers::{QuoteId, QuoteTransactionId};
pub use error::CoreError;

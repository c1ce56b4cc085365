//! Pricing port
//!
//! Premium calculation lives outside this crate. The HTTP adapter only needs
//! something that turns an accepted `QuoteRequest` into a premium, so the
//! seam is a single async trait.

use async_trait::async_trait;
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::error::QuoteError;
use crate::request::QuoteRequest;

/// Premium offered for an accepted request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Premium {
    pub amount: Decimal,
    /// ISO 4217 code
    pub currency: String,
}

impl Premium {
    /// Creates a premium in Australian dollars
    pub fn aud(amount: Decimal) -> Self {
        Self {
            amount,
            currency: "AUD".to_string(),
        }
    }
}

/// Port for premium calculation
#[async_trait]
pub trait QuotePricer: Send + Sync {
    /// Prices a request that has already passed validation
    async fn price(&self, request: &QuoteRequest) -> Result<Premium, QuoteError>;
}

/// Mock pricer for testing
#[cfg(any(test, feature = "mock"))]
pub mod mock {
    use super::*;
    use std::sync::atomic::{AtomicUsize, Ordering};

    #[derive(Debug)]
    enum Outcome {
        Premium(Premium),
        Failure(String),
    }

    /// Pricer returning a canned outcome and counting calls
    #[derive(Debug)]
    pub struct MockQuotePricer {
        outcome: Outcome,
        calls: AtomicUsize,
    }

    impl MockQuotePricer {
        /// Always returns the given premium
        pub fn fixed(premium: Premium) -> Self {
            Self {
                outcome: Outcome::Premium(premium),
                calls: AtomicUsize::new(0),
            }
        }

        /// Always fails with a pricing error
        pub fn failing(message: impl Into<String>) -> Self {
            Self {
                outcome: Outcome::Failure(message.into()),
                calls: AtomicUsize::new(0),
            }
        }

        /// Number of requests priced so far
        pub fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    impl Default for MockQuotePricer {
        fn default() -> Self {
            Self::fixed(Premium::aud(Decimal::new(12_950, 2)))
        }
    }

    #[async_trait]
    impl QuotePricer for MockQuotePricer {
        async fn price(&self, _request: &QuoteRequest) -> Result<Premium, QuoteError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            match &self.outcome {
                Outcome::Premium(premium) => Ok(premium.clone()),
                Outcome::Failure(message) => Err(QuoteError::pricing(message.clone())),
            }
        }
    }
}

//! Quote DTOs

use core_kernel::QuoteId;
use domain_quote::{PolicyType, Premium, QuoteRequest, TripRegion};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Body returned for an accepted, priced quote request
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuoteResponse {
    pub quote_id: String,
    pub quote_transaction_id: String,
    pub policy_type: PolicyType,
    pub region: TripRegion,
    pub premium: Decimal,
    pub currency: String,
}

impl QuoteResponse {
    pub fn new(request: &QuoteRequest, premium: Premium) -> Self {
        Self {
            quote_id: QuoteId::new().to_string(),
            quote_transaction_id: request.quote_transaction_id.to_string(),
            policy_type: request.policy_type,
            region: request.region,
            premium: premium.amount,
            currency: premium.currency,
        }
    }
}

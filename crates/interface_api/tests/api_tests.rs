//! In-process tests for the quote HTTP API

use std::sync::Arc;

use axum::http::{HeaderName, HeaderValue, StatusCode};
use axum_test::TestServer;
use domain_quote::pricing::mock::MockQuotePricer;
use domain_quote::{ErrorCode, QuotePricer, QuoteValidator};
use serde_json::{json, Value};

use interface_api::config::{ApiConfig, Environment};
use interface_api::dto::quote::QuoteResponse;
use interface_api::{create_router, AppState, QUOTE_PATH};
use test_utils::{
    assert_error_envelope, error_scenarios, success_scenarios, DateFixtures, Expectation,
    PremiumFixtures, RequestFixtures,
};

fn server_with(config: ApiConfig, pricer: Arc<dyn QuotePricer>) -> TestServer {
    let validator = QuoteValidator::new(config.validation_config())
        .with_clock(DateFixtures::clock());
    let state = AppState::new(config, pricer).with_validator(validator);
    TestServer::new(create_router(state)).unwrap()
}

fn server() -> TestServer {
    server_with(
        ApiConfig::default(),
        Arc::new(MockQuotePricer::fixed(PremiumFixtures::standard())),
    )
}

fn api_key_header() -> HeaderName {
    HeaderName::from_static("x-api-key")
}

// ============================================================================
// Quote endpoint
// ============================================================================

mod quote_tests {
    use super::*;

    #[tokio::test]
    async fn test_accepted_request_is_priced() {
        let response = server()
            .post(QUOTE_PATH)
            .json(&RequestFixtures::baseline(DateFixtures::today()))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body: QuoteResponse = response.json();
        assert!(body.quote_id.starts_with("QTE-"));
        assert_eq!(body.quote_transaction_id, "Q-CTM-TRAVEL-14");
        assert_eq!(body.premium, PremiumFixtures::standard().amount);
        assert_eq!(body.currency, "AUD");
    }

    #[tokio::test]
    async fn test_response_uses_camel_case() {
        let response = server()
            .post(QUOTE_PATH)
            .json(&RequestFixtures::annual_worldwide(DateFixtures::today()))
            .await;

        let body: Value = response.json();
        assert_eq!(body["policyType"], "ANNUAL_COVER");
        assert_eq!(body["region"], "WORLDWIDE");
        assert!(body.get("quoteTransactionId").is_some());
    }

    #[tokio::test]
    async fn test_rejection_envelope() {
        let mut document = RequestFixtures::baseline(DateFixtures::today());
        document["travellerAges"] = json!([30, 35, 40]);

        let response = server().post(QUOTE_PATH).json(&document).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_error_envelope(&response.json::<Value>(), ErrorCode::TravellerAgeMax);
    }

    #[tokio::test]
    async fn test_malformed_json() {
        let response = server()
            .post(QUOTE_PATH)
            .text("{\"quoteTransactionId\": ")
            .content_type("application/json")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body: Value = response.json();
        assert_eq!(body["error"][0]["code"], "ER_MALFORMED_REQUEST");
    }

    #[tokio::test]
    async fn test_rejected_request_not_priced() {
        let pricer = Arc::new(MockQuotePricer::fixed(PremiumFixtures::standard()));
        let server = server_with(ApiConfig::default(), pricer.clone());

        let mut document = RequestFixtures::baseline(DateFixtures::today());
        document["destinations"] = json!(["AFG"]);
        server.post(QUOTE_PATH).json(&document).await;

        assert_eq!(pricer.calls(), 0);
    }

    #[tokio::test]
    async fn test_pricing_failure_is_internal_error() {
        let server = server_with(
            ApiConfig::default(),
            Arc::new(MockQuotePricer::failing("rating engine offline")),
        );

        let response = server
            .post(QUOTE_PATH)
            .json(&RequestFixtures::baseline(DateFixtures::today()))
            .await;

        assert_eq!(response.status_code(), StatusCode::INTERNAL_SERVER_ERROR);
        let body: Value = response.json();
        assert_eq!(body["error"][0]["code"], "ER_INTERNAL");
        assert!(!body.to_string().contains("rating engine"));
    }
}

// ============================================================================
// Harness replay over HTTP
// ============================================================================

mod harness_tests {
    use super::*;

    #[tokio::test]
    async fn test_every_harness_scenario() {
        let server = server();
        let today = DateFixtures::today();

        for scenario in error_scenarios(today).into_iter().chain(success_scenarios(today)) {
            let response = server.post(QUOTE_PATH).json(&scenario.document).await;
            match scenario.expectation {
                Expectation::Accepted => {
                    assert_eq!(response.status_code(), StatusCode::OK, "{}", scenario.name);
                }
                Expectation::Rejected(code) => {
                    assert_eq!(response.status_code(), StatusCode::BAD_REQUEST, "{}", scenario.name);
                    assert_error_envelope(&response.json::<Value>(), code);
                }
            }
        }
    }
}

// ============================================================================
// Authentication
// ============================================================================

mod auth_tests {
    use super::*;

    fn keyed_server() -> TestServer {
        server_with(
            ApiConfig {
                api_key: Some("partner-key".to_string()),
                ..ApiConfig::default()
            },
            Arc::new(MockQuotePricer::default()),
        )
    }

    #[tokio::test]
    async fn test_missing_key_rejected() {
        let response = keyed_server()
            .post(QUOTE_PATH)
            .json(&RequestFixtures::baseline(DateFixtures::today()))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
        let body: Value = response.json();
        assert_eq!(body["error"][0]["code"], "ER_UNAUTHORIZED");
    }

    #[tokio::test]
    async fn test_wrong_key_rejected() {
        let response = keyed_server()
            .post(QUOTE_PATH)
            .add_header(api_key_header(), HeaderValue::from_static("someone-else"))
            .json(&RequestFixtures::baseline(DateFixtures::today()))
            .await;

        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn test_correct_key_accepted() {
        let response = keyed_server()
            .post(QUOTE_PATH)
            .add_header(api_key_header(), HeaderValue::from_static("partner-key"))
            .json(&RequestFixtures::baseline(DateFixtures::today()))
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn test_health_needs_no_key() {
        let response = keyed_server().get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }
}

// ============================================================================
// Health
// ============================================================================

mod health_tests {
    use super::*;

    #[tokio::test]
    async fn test_health_reports_environment() {
        let server = server_with(
            ApiConfig {
                environment: Environment::Uat,
                ..ApiConfig::default()
            },
            Arc::new(MockQuotePricer::default()),
        );

        let body: Value = server.get("/health").await.json();
        assert_eq!(body["status"], "healthy");
        assert_eq!(body["environment"], "uat");
        assert_eq!(
            body["endpoint"],
            "https://uat.mobile-api.woolworths.com.au/insurance/aggregator/svc/api/ctm/travel/quote"
        );
    }
}

//! Shared helpers for the integration tests.

use std::time::Duration;

use axum::{body::to_bytes, response::Response};
use donation_map::server::{
    client::{build_http_client, mda::MdaClient, places::PlacesClient},
    service::retry::RetryContext,
};
use donation_map_test_utils::{
    constant::{TEST_GOOGLE_API_KEY, TEST_USER_AGENT},
    TestContext,
};
use serde::de::DeserializeOwned;

/// Reads a response body and deserializes it as JSON
pub async fn response_json<T: DeserializeOwned>(response: Response) -> T {
    let body = to_bytes(response.into_body(), usize::MAX).await.unwrap();
    serde_json::from_slice(&body).unwrap()
}

/// MDA client pointed at the mock server
pub fn mda_client(test: &TestContext, limit: Option<usize>) -> MdaClient {
    let http = build_http_client(TEST_USER_AGENT, Duration::from_secs(5), true).unwrap();

    MdaClient::new(http, test.mda_landing_url(), test.mda_api_url(), limit)
}

/// Places client pointed at the mock server, without pacing
pub fn places_client(test: &TestContext) -> PlacesClient {
    let http = build_http_client(TEST_USER_AGENT, Duration::from_secs(5), false).unwrap();

    PlacesClient::new(http, test.places_url(), TEST_GOOGLE_API_KEY, Duration::ZERO)
}

/// Retry policy without backoff delays
pub fn retry() -> RetryContext {
    RetryContext::new().with_initial_backoff(Duration::ZERO)
}

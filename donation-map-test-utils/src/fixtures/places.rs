//! Places text search mock endpoints.
//!
//! Endpoints are matched on the `query` parameter only, the key and locale parameters are
//! accepted as sent.

use mockito::{Matcher, Mock};
use serde_json::json;

use crate::{constant::PLACES_PATH, TestContext};

/// Top result returned by a mock text search.
#[derive(Debug, Clone)]
pub struct PlaceResult {
    pub latitude: f64,
    pub longitude: f64,
    pub types: Vec<String>,
}

impl PlaceResult {
    /// A street address level match.
    pub fn exact(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            types: vec!["street_address".to_string()],
        }
    }

    /// A city level match.
    pub fn locality(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            types: vec!["locality".to_string(), "political".to_string()],
        }
    }
}

impl TestContext {
    pub fn places<'a>(&'a mut self) -> PlacesFixtures<'a> {
        PlacesFixtures { setup: self }
    }
}

pub struct PlacesFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> PlacesFixtures<'a> {
    /// Create an endpoint answering `query` with status `OK` and a single result.
    pub fn create_result_endpoint(
        &mut self,
        query: &str,
        result: PlaceResult,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "status": "OK",
            "results": [{
                "formatted_address": query,
                "geometry": {
                    "location": { "lat": result.latitude, "lng": result.longitude }
                },
                "types": result.types
            }]
        });

        self.create_json_endpoint(query, 200, body.to_string(), expected_requests)
    }

    /// Create an endpoint answering `query` with status `ZERO_RESULTS`.
    pub fn create_zero_results_endpoint(&mut self, query: &str, expected_requests: usize) -> Mock {
        let body = json!({ "status": "ZERO_RESULTS", "results": [] });

        self.create_json_endpoint(query, 200, body.to_string(), expected_requests)
    }

    /// Create an endpoint answering `query` with a non-OK service status such as
    /// `OVER_QUERY_LIMIT` or `UNKNOWN_ERROR`.
    pub fn create_status_endpoint(
        &mut self,
        query: &str,
        status: &str,
        expected_requests: usize,
    ) -> Mock {
        let body = json!({
            "status": status,
            "results": [],
            "error_message": format!("{status} from mock server")
        });

        self.create_json_endpoint(query, 200, body.to_string(), expected_requests)
    }

    /// Create an endpoint answering `query` with an HTTP error status.
    pub fn create_http_error_endpoint(
        &mut self,
        query: &str,
        status: usize,
        expected_requests: usize,
    ) -> Mock {
        self.create_json_endpoint(query, status, "{}".to_string(), expected_requests)
    }

    /// Create an endpoint matching any text search, used to assert how many outbound
    /// requests were made in total.
    pub fn create_any_query_endpoint(&mut self, expected_requests: usize) -> Mock {
        self.setup
            .server
            .mock("GET", PLACES_PATH)
            .match_query(Matcher::Any)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(json!({ "status": "ZERO_RESULTS", "results": [] }).to_string())
            .expect(expected_requests)
            .create()
    }

    fn create_json_endpoint(
        &mut self,
        query: &str,
        status: usize,
        body: String,
        expected_requests: usize,
    ) -> Mock {
        self.setup
            .server
            .mock("GET", PLACES_PATH)
            .match_query(Matcher::UrlEncoded("query".into(), query.into()))
            .with_status(status)
            .with_header("content-type", "application/json")
            .with_body(body)
            .expect(expected_requests)
            .create()
    }
}

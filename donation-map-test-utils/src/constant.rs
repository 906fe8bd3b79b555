//! Test configuration constants for the mock MDA and Places endpoints.
//!
//! These values are placeholders, none of them are real credentials.

/// User agent string for test HTTP clients.
pub static TEST_USER_AGENT: &str = "donation-map-tests/0.1 (contact@example.com)";

/// Placeholder Google API key passed to the test Places client.
pub static TEST_GOOGLE_API_KEY: &str = "google_api_key";

/// Anti-forgery token embedded in the mock MDA landing page.
pub static TEST_CSRF_TOKEN: &str = "test-csrf-token";

/// Path of the mock MDA landing page.
pub static MDA_LANDING_PATH: &str = "/blood-donation";

/// Path of the mock MDA invoker API.
pub static MDA_API_PATH: &str = "/umbraco/api/invoker/execute";

/// Path of the mock Places text search endpoint.
pub static PLACES_PATH: &str = "/maps/api/place/textsearch/json";

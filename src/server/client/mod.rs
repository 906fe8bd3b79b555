//! HTTP clients for the two upstream collaborators: the MDA station listing API and the
//! Google Places text search used for geocoding.

pub mod mda;
pub mod places;

use std::time::Duration;

/// Builds a `reqwest` client with a bounded per-request timeout.
///
/// `cookies` enables a cookie store, which MDA requires to carry the session from its
/// landing page into the API call.
pub fn build_http_client(
    user_agent: &str,
    timeout: Duration,
    cookies: bool,
) -> Result<reqwest::Client, reqwest::Error> {
    reqwest::Client::builder()
        .user_agent(user_agent)
        .timeout(timeout)
        .connect_timeout(timeout)
        .cookie_store(cookies)
        .build()
}

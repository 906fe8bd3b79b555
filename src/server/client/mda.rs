//! MDA blood-donation station listing client.
//!
//! The listing API sits behind the public blood donation page: a session cookie and the
//! page's anti-forgery token have to be collected from the landing page before the JSON
//! invoker endpoint will answer.

use regex::Regex;
use serde::Deserialize;
use serde_json::json;

use crate::server::{
    client::build_http_client, config::Config, error::upstream::UpstreamError,
    model::station::RawStation,
};

static CSRF_FIELD_NAME: &str = "__RequestVerificationToken";

pub struct MdaClient {
    http: reqwest::Client,
    landing_url: String,
    api_url: String,
    limit: Option<usize>,
}

#[derive(Deserialize)]
struct InvokerResponse {
    #[serde(rename = "Result")]
    result: Option<String>,
}

impl MdaClient {
    /// Creates a new instance of [`MdaClient`]
    ///
    /// `http` must keep cookies between requests, see [`build_http_client`].
    pub fn new(
        http: reqwest::Client,
        landing_url: impl Into<String>,
        api_url: impl Into<String>,
        limit: Option<usize>,
    ) -> Self {
        Self {
            http,
            landing_url: landing_url.into(),
            api_url: api_url.into(),
            limit,
        }
    }

    pub fn from_config(config: &Config) -> Result<Self, reqwest::Error> {
        // The invoker endpoint is slow to build the full listing set
        let http = build_http_client(&config.user_agent, config.http_timeout * 3, true)?;

        Ok(Self::new(
            http,
            &config.mda_landing_url,
            &config.mda_api_url,
            config.mda_fetch_limit,
        ))
    }

    /// Fetches the full station listing set.
    ///
    /// # Returns
    /// - `Ok(Vec<RawStation>)` - Listings, truncated to the configured limit if any
    /// - `Err(UpstreamError)` - Landing page or API unreachable, error status, or malformed payload
    pub async fn fetch_listings(&self) -> Result<Vec<RawStation>, UpstreamError> {
        tracing::info!("Fetching station listings from MDA");

        let landing = self
            .http
            .get(&self.landing_url)
            .send()
            .await?
            .error_for_status()?
            .text()
            .await?;

        let mut request = self
            .http
            .post(&self.api_url)
            .header("Accept", "application/json, text/plain, */*")
            .header("Referer", &self.landing_url)
            .header("X-Requested-With", "XMLHttpRequest")
            .json(&json!({
                "RequestHeader": {
                    "Application": 101,
                    "Module": "BloodBank",
                    "Function": "GetAllDetailsDonations",
                    "Token": ""
                },
                "RequestData": ""
            }));

        match extract_csrf_token(&landing) {
            Some(token) => request = request.header(CSRF_FIELD_NAME, token),
            None => tracing::debug!("MDA landing page carried no anti-forgery token"),
        }

        let response: InvokerResponse = request.send().await?.error_for_status()?.json().await?;

        let payload = response
            .result
            .filter(|result| !result.trim().is_empty())
            .ok_or(UpstreamError::MissingResult)?;

        let mut stations: Vec<RawStation> = serde_json::from_str(&payload)?;

        if let Some(limit) = self.limit {
            stations.truncate(limit);
        }

        tracing::info!("Fetched {} station listings from MDA", stations.len());

        Ok(stations)
    }
}

/// Finds the value of the hidden `__RequestVerificationToken` input in the landing page.
///
/// The value is only read from the `<input>` tag carrying the token name, whichever order
/// its attributes come in.
fn extract_csrf_token(html: &str) -> Option<&str> {
    let tag_re = Regex::new(&format!(
        r#"(?i)<input\b[^>]*\bname\s*=\s*"{}"[^>]*>"#,
        regex::escape(CSRF_FIELD_NAME)
    ))
    .ok()?;
    let value_re = Regex::new(r#"(?i)\bvalue\s*=\s*"([^"]*)""#).ok()?;

    let tag = tag_re.find(html)?.as_str();
    let token = value_re.captures(tag)?.get(1)?.as_str();

    Some(token).filter(|token| !token.is_empty())
}

//! Google Places text search client.
//!
//! Each call costs quota, so callers go through the geocode cache first (see
//! [`GeocodeService`](crate::server::service::geocode::GeocodeService)). The client
//! itself only spaces requests out by a minimum delay.

use std::{
    sync::Mutex,
    time::{Duration, Instant},
};

use serde::Deserialize;

use crate::server::{client::build_http_client, config::Config, error::geocode::GeocodeError};

/// Top candidate returned by a text search.
#[derive(Debug, Clone, PartialEq)]
pub struct PlaceCandidate {
    pub latitude: f64,
    pub longitude: f64,
    /// Place types such as `street_address`, `establishment` or `locality`.
    pub types: Vec<String>,
    pub formatted_address: Option<String>,
}

#[derive(Deserialize)]
struct TextSearchResponse {
    status: String,
    #[serde(default)]
    results: Vec<TextSearchResult>,
    error_message: Option<String>,
}

#[derive(Deserialize)]
struct TextSearchResult {
    geometry: Geometry,
    #[serde(default)]
    types: Vec<String>,
    formatted_address: Option<String>,
}

#[derive(Deserialize)]
struct Geometry {
    location: LatLng,
}

#[derive(Deserialize)]
struct LatLng {
    lat: f64,
    lng: f64,
}

pub struct PlacesClient {
    http: reqwest::Client,
    api_url: String,
    api_key: String,
    min_delay: Duration,
    last_request: Mutex<Option<Instant>>,
}

impl PlacesClient {
    /// Creates a new instance of [`PlacesClient`]
    pub fn new(
        http: reqwest::Client,
        api_url: impl Into<String>,
        api_key: impl Into<String>,
        min_delay: Duration,
    ) -> Self {
        Self {
            http,
            api_url: api_url.into(),
            api_key: api_key.into(),
            min_delay,
            last_request: Mutex::new(None),
        }
    }

    pub fn from_config(config: &Config, api_key: &str) -> Result<Self, reqwest::Error> {
        let http = build_http_client(&config.user_agent, config.http_timeout, false)?;

        Ok(Self::new(
            http,
            &config.places_api_url,
            api_key,
            config.geocode_min_delay,
        ))
    }

    /// Runs a single text search restricted to Israel.
    ///
    /// # Returns
    /// - `Ok(Some(PlaceCandidate))` - The top result
    /// - `Ok(None)` - The service answered `ZERO_RESULTS`
    /// - `Err(GeocodeError::Request)` - Transport failure, timeout or HTTP error status
    /// - `Err(GeocodeError::Status)` - Any other service status (quota, denied key, ...)
    pub async fn text_search(&self, query: &str) -> Result<Option<PlaceCandidate>, GeocodeError> {
        self.pace().await;

        let response: TextSearchResponse = self
            .http
            .get(&self.api_url)
            .query(&[
                ("query", query),
                ("key", self.api_key.as_str()),
                ("language", "iw"),
                ("region", "il"),
            ])
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        match response.status.as_str() {
            "OK" => Ok(response
                .results
                .into_iter()
                .next()
                .map(|result| PlaceCandidate {
                    latitude: result.geometry.location.lat,
                    longitude: result.geometry.location.lng,
                    types: result.types,
                    formatted_address: result.formatted_address,
                })),
            "ZERO_RESULTS" => Ok(None),
            _ => Err(GeocodeError::Status {
                status: response.status,
                message: response.error_message.unwrap_or_default(),
            }),
        }
    }

    /// Waits until at least `min_delay` has passed since the previous request.
    async fn pace(&self) {
        let wait = {
            let mut last_request = self
                .last_request
                .lock()
                .unwrap_or_else(|poisoned| poisoned.into_inner());
            let now = Instant::now();
            let wait = last_request
                .map(|last| self.min_delay.saturating_sub(now.duration_since(last)))
                .unwrap_or_default();
            *last_request = Some(now + wait);
            wait
        };

        if !wait.is_zero() {
            tokio::time::sleep(wait).await;
        }
    }
}

use std::time::Duration;

use chrono::NaiveDate;
use donation_map_test_utils::{
    constant::{TEST_GOOGLE_API_KEY, TEST_USER_AGENT},
    TestContext,
};

use crate::server::{
    client::{build_http_client, places::PlacesClient},
    model::station::StationListing,
    service::retry::RetryContext,
};

mod geocode;

/// Places client pointed at the mock server, without pacing
fn places_client(test: &TestContext) -> PlacesClient {
    let http = build_http_client(TEST_USER_AGENT, Duration::from_secs(5), false).unwrap();

    PlacesClient::new(http, test.places_url(), TEST_GOOGLE_API_KEY, Duration::ZERO)
}

/// Retry policy without backoff delays
fn retry() -> RetryContext {
    RetryContext::new()
        .with_max_attempts(3)
        .with_initial_backoff(Duration::ZERO)
}

fn listing(city: &str, street: &str, house_number: &str, venue: &str) -> StationListing {
    StationListing {
        scheduling_url: "https://example.com/schedule/1".to_string(),
        donation_date: NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
        city: city.to_string(),
        street: street.to_string(),
        house_number: house_number.to_string(),
        venue_name: venue.to_string(),
        from_hour: "08:30".to_string(),
        to_hour: "13:00".to_string(),
    }
}

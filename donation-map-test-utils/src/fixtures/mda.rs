//! MDA listing payloads and mock endpoints.

use mockito::Mock;
use serde_json::{json, Value};

use crate::{
    constant::{MDA_API_PATH, MDA_LANDING_PATH, TEST_CSRF_TOKEN},
    fixtures::donation::mock_scheduling_url,
    TestContext,
};

/// Builds one entry of the MDA `Result` array.
///
/// The house number is sent as a JSON number, the way MDA does for most stations.
pub fn mock_station(
    id: i32,
    donation_date: &str,
    city: &str,
    street: &str,
    house_number: i32,
    venue_name: &str,
) -> Value {
    json!({
        "DateDonation": format!("{donation_date}T00:00:00"),
        "City": city,
        "Street": street,
        "NumHouse": house_number,
        "Name": venue_name,
        "FromHour": "08:30",
        "ToHour": "13:00",
        "SchedulingURL": mock_scheduling_url(id),
        "AccountType": "1"
    })
}

impl TestContext {
    pub fn mda<'a>(&'a mut self) -> MdaFixtures<'a> {
        MdaFixtures { setup: self }
    }
}

pub struct MdaFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> MdaFixtures<'a> {
    /// Create the landing page and invoker API endpoints.
    ///
    /// The landing page carries the anti-forgery token, the API endpoint only answers when the
    /// token header is present and wraps `stations` into the `Result` string the way MDA does.
    ///
    /// # Returns
    /// - `Vec<Mock>` - Landing page mock and API mock, both expecting `expected_requests` calls
    pub fn create_listing_endpoints(
        &mut self,
        stations: Vec<Value>,
        expected_requests: usize,
    ) -> Vec<Mock> {
        let landing = self.create_landing_endpoint(expected_requests);

        let body = json!({ "Result": Value::Array(stations).to_string() });
        let api = self
            .setup
            .server
            .mock("POST", MDA_API_PATH)
            .match_header("__RequestVerificationToken", TEST_CSRF_TOKEN)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(body.to_string())
            .expect(expected_requests)
            .create();

        vec![landing, api]
    }

    /// Create a landing page endpoint and an invoker API endpoint answering with `status`.
    pub fn create_listing_error_endpoints(
        &mut self,
        status: usize,
        expected_requests: usize,
    ) -> Vec<Mock> {
        let landing = self.create_landing_endpoint(expected_requests);

        let api = self
            .setup
            .server
            .mock("POST", MDA_API_PATH)
            .with_status(status)
            .with_body("Service Unavailable")
            .expect(expected_requests)
            .create();

        vec![landing, api]
    }

    fn create_landing_endpoint(&mut self, expected_requests: usize) -> Mock {
        let html = format!(
            r#"<html><body><form><input name="__RequestVerificationToken" type="hidden" value="{TEST_CSRF_TOKEN}" /></form></body></html>"#
        );

        self.setup
            .server
            .mock("GET", MDA_LANDING_PATH)
            .with_status(200)
            .with_header("content-type", "text/html")
            .with_header("set-cookie", "session=test; Path=/")
            .with_body(html)
            .expect(expected_requests)
            .create()
    }
}

//! Declarative test builder.
//!
//! This module provides the `TestBuilder` API for configuring test environments before execution.
//! The builder pattern allows chaining multiple configuration methods together, with all operations
//! queued and executed during the final `build()` call.

use chrono::NaiveDate;
use sea_orm::Schema;
use serde_json::Value;

use crate::{error::TestError, fixtures::places::PlaceResult, TestContext};

enum PlacesEndpoint {
    Result(PlaceResult),
    ZeroResults,
    Status(String),
    HttpError(usize),
}

/// Builder for declarative test initialization.
///
/// Provides an interface for setting up test environments with database tables,
/// fixture rows, and HTTP endpoints. Methods can be chained together and finalized
/// with `build()` to create a complete test setup.
pub struct TestBuilder {
    // Tables to create
    donation_tables: bool,
    geocache_tables: bool,

    // Database fixtures to insert
    donations: Vec<(i32, NaiveDate, String)>, // (id, donation_date, city)
    cached_addresses: Vec<(String, f64, f64, bool)>, // (key, latitude, longitude, is_exact)

    // Mock endpoints to create
    listing_endpoints: Vec<(Vec<Value>, usize)>, // (stations, expected_requests)
    listing_error_endpoints: Vec<(usize, usize)>, // (status, expected_requests)
    places_endpoints: Vec<(String, PlacesEndpoint, usize)>, // (query, response, expected_requests)
}

impl TestBuilder {
    /// Create a new TestBuilder with no tables, fixtures, or mock endpoints configured.
    pub fn new() -> Self {
        Self {
            donation_tables: false,
            geocache_tables: false,
            donations: Vec::new(),
            cached_addresses: Vec::new(),
            listing_endpoints: Vec::new(),
            listing_error_endpoints: Vec::new(),
            places_endpoints: Vec::new(),
        }
    }

    /// Create the `donation` table in the donations database.
    pub fn with_donation_tables(mut self) -> Self {
        self.donation_tables = true;
        self
    }

    /// Create the `geocache` table in the geocache database.
    pub fn with_geocache_tables(mut self) -> Self {
        self.geocache_tables = true;
        self
    }

    /// Insert a mock donation row.
    ///
    /// See [`mock_donation`](crate::fixtures::donation::mock_donation) for the generated values.
    ///
    /// # Arguments
    /// - `id` - Distinguishes the scheduling URL, venue and house number
    /// - `donation_date` - Date of the donation session
    /// - `city` - City of the station
    pub fn with_mock_donation(mut self, id: i32, donation_date: NaiveDate, city: &str) -> Self {
        self.donations.push((id, donation_date, city.to_string()));
        self
    }

    /// Insert a geocode cache entry under an already normalized key.
    pub fn with_cached_address(
        mut self,
        key: &str,
        latitude: f64,
        longitude: f64,
        is_exact: bool,
    ) -> Self {
        self.cached_addresses
            .push((key.to_string(), latitude, longitude, is_exact));
        self
    }

    /// Add the MDA landing page and invoker API endpoints returning `stations`.
    ///
    /// # Arguments
    /// - `stations` - Entries of the `Result` array, see [`mock_station`](crate::fixtures::mda::mock_station)
    /// - `expected_requests` - Number of times each endpoint should be called
    pub fn with_listing_endpoints(mut self, stations: Vec<Value>, expected_requests: usize) -> Self {
        self.listing_endpoints.push((stations, expected_requests));
        self
    }

    /// Add MDA endpoints where the invoker API fails with the given HTTP status.
    pub fn with_listing_error_endpoints(mut self, status: usize, expected_requests: usize) -> Self {
        self.listing_error_endpoints.push((status, expected_requests));
        self
    }

    /// Add a Places endpoint answering `query` with a single result.
    pub fn with_places_result(
        mut self,
        query: &str,
        result: PlaceResult,
        expected_requests: usize,
    ) -> Self {
        self.places_endpoints.push((
            query.to_string(),
            PlacesEndpoint::Result(result),
            expected_requests,
        ));
        self
    }

    /// Add a Places endpoint answering `query` with `ZERO_RESULTS`.
    pub fn with_places_zero_results(mut self, query: &str, expected_requests: usize) -> Self {
        self.places_endpoints.push((
            query.to_string(),
            PlacesEndpoint::ZeroResults,
            expected_requests,
        ));
        self
    }

    /// Add a Places endpoint answering `query` with a non-OK service status.
    pub fn with_places_status(mut self, query: &str, status: &str, expected_requests: usize) -> Self {
        self.places_endpoints.push((
            query.to_string(),
            PlacesEndpoint::Status(status.to_string()),
            expected_requests,
        ));
        self
    }

    /// Add a Places endpoint answering `query` with an HTTP error status.
    pub fn with_places_http_error(
        mut self,
        query: &str,
        status: usize,
        expected_requests: usize,
    ) -> Self {
        self.places_endpoints.push((
            query.to_string(),
            PlacesEndpoint::HttpError(status),
            expected_requests,
        ));
        self
    }

    /// Build the test setup by creating all configured tables, fixtures, and mock endpoints.
    ///
    /// Executes all queued operations in the following order:
    /// 1. Creates database tables
    /// 2. Inserts database fixtures
    /// 3. Creates mock HTTP endpoints for MDA and Places
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Fully configured test environment ready for use
    /// - `Err(TestError::DbErr)` - Database table creation or fixture insertion failed
    pub async fn build(self) -> Result<TestContext, TestError> {
        let mut setup = TestContext::new().await?;
        let schema = Schema::new(sea_orm::DbBackend::Sqlite);

        // 1. Create tables
        if self.donation_tables {
            TestContext::create_tables(
                &setup.donations_db,
                vec![schema.create_table_from_entity(entity::prelude::Donation)],
            )
            .await?;
        }

        if self.geocache_tables {
            TestContext::create_tables(
                &setup.geocache_db,
                vec![schema.create_table_from_entity(entity::prelude::Geocache)],
            )
            .await?;
        }

        // 2. Insert database fixtures
        for (id, donation_date, city) in self.donations {
            setup
                .donation()
                .insert_mock_donation(id, donation_date, &city)
                .await?;
        }

        for (key, latitude, longitude, is_exact) in self.cached_addresses {
            setup
                .geocache()
                .insert_cached_address(&key, latitude, longitude, is_exact)
                .await?;
        }

        // 3. Create mock endpoints
        // Note: Mocks for the same query are matched in creation order until each has
        // received its expected requests, which lets a test queue an error before a success
        let mut mocks = Vec::new();

        for (stations, expected) in self.listing_endpoints {
            mocks.extend(setup.mda().create_listing_endpoints(stations, expected));
        }

        for (status, expected) in self.listing_error_endpoints {
            mocks.extend(setup.mda().create_listing_error_endpoints(status, expected));
        }

        for (query, endpoint, expected) in self.places_endpoints {
            let mock = match endpoint {
                PlacesEndpoint::Result(result) => {
                    setup.places().create_result_endpoint(&query, result, expected)
                }
                PlacesEndpoint::ZeroResults => {
                    setup.places().create_zero_results_endpoint(&query, expected)
                }
                PlacesEndpoint::Status(status) => {
                    setup.places().create_status_endpoint(&query, &status, expected)
                }
                PlacesEndpoint::HttpError(status) => {
                    setup.places().create_http_error_endpoint(&query, status, expected)
                }
            };
            mocks.push(mock);
        }

        // Store mocks in setup so they live as long as the test
        setup.mocks = mocks;

        Ok(setup)
    }
}

impl Default for TestBuilder {
    fn default() -> Self {
        Self::new()
    }
}

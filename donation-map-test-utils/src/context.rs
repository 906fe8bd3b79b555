//! Test context structure and utilities.
//!
//! This module provides the `TestContext` returned by `TestBuilder`. The context holds two
//! in-memory SQLite databases, one per store, and a mock HTTP server standing in for both
//! the MDA listing API and the Google Places API.

use mockito::{Mock, Server, ServerGuard};
use sea_orm::{sea_query::TableCreateStatement, ConnectionTrait, Database, DatabaseConnection};

use crate::{
    constant::{MDA_API_PATH, MDA_LANDING_PATH, PLACES_PATH},
    error::TestError,
};

/// Test context structure returned by `TestBuilder`
///
/// # Usage
///
/// Most users should create this via [`TestBuilder`](crate::TestBuilder) rather
/// than constructing it directly.
///
/// ```ignore
/// let mut test = TestBuilder::new()
///     .with_donation_tables()
///     .with_geocache_tables()
///     .build()
///     .await?;
///
/// test.geocache().insert_cached_address("tel aviv, herzl, 1", 32.08, 34.78, true).await?;
/// let places = PlacesClient::new(http, test.places_url(), TEST_GOOGLE_API_KEY, Duration::ZERO);
///
/// // Assert all mocks were called
/// test.assert_mocks();
/// ```
pub struct TestContext {
    /// In-memory stand-in for `donations.db`
    pub donations_db: DatabaseConnection,
    /// In-memory stand-in for `geocache.db`
    pub geocache_db: DatabaseConnection,

    /// Mock HTTP server for the MDA and Places endpoints
    pub(crate) server: ServerGuard,
    /// Collection of mock HTTP endpoints for assertion
    pub(crate) mocks: Vec<Mock>,
}

impl TestContext {
    /// Convert the donations database into any type that can be constructed from it
    ///
    /// This allows conversion to AppState without creating a circular dependency
    /// between the test-utils crate and the main crate.
    ///
    /// ```ignore
    /// let app_state: AppState = test.to_app_state();
    /// ```
    pub fn to_app_state<T>(&self) -> T
    where
        T: From<DatabaseConnection>,
    {
        T::from(self.donations_db.clone())
    }

    pub fn mda_landing_url(&self) -> String {
        format!("{}{}", self.server.url(), MDA_LANDING_PATH)
    }

    pub fn mda_api_url(&self) -> String {
        format!("{}{}", self.server.url(), MDA_API_PATH)
    }

    pub fn places_url(&self) -> String {
        format!("{}{}", self.server.url(), PLACES_PATH)
    }
}

impl TestContext {
    /// Create a new test context.
    ///
    /// # Returns
    /// - `Ok(TestContext)` - Both in-memory databases and the mock server are ready
    /// - `Err(TestError::DbErr)` - Database connection failed
    pub(crate) async fn new() -> Result<Self, TestError> {
        let server = Server::new_async().await;

        let donations_db = Database::connect("sqlite::memory:").await?;
        let geocache_db = Database::connect("sqlite::memory:").await?;

        Ok(TestContext {
            donations_db,
            geocache_db,
            server,
            mocks: Vec::new(),
        })
    }

    /// Executes CREATE TABLE statements against the given database.
    pub(crate) async fn create_tables(
        db: &DatabaseConnection,
        stmts: Vec<TableCreateStatement>,
    ) -> Result<(), TestError> {
        for stmt in stmts {
            db.execute(&stmt).await?;
        }

        Ok(())
    }

    /// Assert all mock endpoints were called as expected.
    ///
    /// # Panics
    /// Panics if any mock endpoint was not called the expected number of times
    pub fn assert_mocks(&self) {
        for mock in &self.mocks {
            mock.assert();
        }
    }
}

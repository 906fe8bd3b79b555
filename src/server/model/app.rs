use sea_orm::DatabaseConnection;

/// Shared state for HTTP handlers.
///
/// The server only ever reads donations, geocoding and writes belong to the pipeline.
#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
}

impl From<DatabaseConnection> for AppState {
    fn from(db: DatabaseConnection) -> Self {
        Self { db }
    }
}

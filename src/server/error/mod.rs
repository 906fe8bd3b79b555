//! Error types for the donation map server and pipeline.
//!
//! Each domain (configuration, geocoding, upstream listings, client requests) has its own
//! `thiserror` enum. They are aggregated into [`Error`], which converts from the underlying
//! library errors via `?` and maps onto HTTP responses for the API layer.

pub mod config;
pub mod geocode;
pub mod request;
pub mod retry;
pub mod upstream;

use axum::{
    http::StatusCode,
    response::{IntoResponse, Response},
    Json,
};
use thiserror::Error;

use crate::{
    model::api::ErrorDto,
    server::error::{
        config::ConfigError, geocode::GeocodeError, request::RequestError,
        upstream::UpstreamError,
    },
};

/// Main error type for the donation map.
///
/// # Error Categories
/// - Configuration errors (missing/invalid environment variables)
/// - Geocoding errors (no candidate for an address, Places service failures)
/// - Upstream errors (MDA listing API unreachable or malformed)
/// - Request errors (malformed client input)
/// - Storage errors (either SQLite database)
#[derive(Error, Debug)]
pub enum Error {
    /// Configuration error (missing or invalid environment variables).
    #[error(transparent)]
    ConfigError(#[from] ConfigError),
    /// Geocoding error, either a per-address miss or a systemic service failure.
    #[error(transparent)]
    GeocodeError(#[from] GeocodeError),
    /// MDA listing fetch failed before any processing began.
    #[error(transparent)]
    UpstreamError(#[from] UpstreamError),
    /// Malformed client input on an API request.
    #[error(transparent)]
    RequestError(#[from] RequestError),
    /// Database error on either store (query failures, connection issues, constraint violations).
    #[error(transparent)]
    DbErr(#[from] sea_orm::DbErr),
    /// HTTP client construction error (invalid TLS backend or user agent).
    #[error(transparent)]
    ReqwestError(#[from] reqwest::Error),
    /// I/O error while binding or serving the HTTP listener.
    #[error(transparent)]
    IoError(#[from] std::io::Error),
}

/// Converts application errors into HTTP responses.
///
/// # Returns
/// - 400 Bad Request - For malformed client input
/// - 500 Internal Server Error - For all other errors (with error logging)
impl IntoResponse for Error {
    fn into_response(self) -> Response {
        match self {
            Self::RequestError(err) => err.into_response(),
            err => InternalServerError(err).into_response(),
        }
    }
}

/// Wrapper type for converting any displayable error into a 500 Internal Server Error response.
///
/// Logs the error message and returns a generic "Internal server error" message to the
/// client to avoid leaking implementation details such as database paths.
pub struct InternalServerError<E>(pub E);

impl<E: std::fmt::Display> IntoResponse for InternalServerError<E> {
    fn into_response(self) -> Response {
        tracing::error!("{}", self.0);

        (
            StatusCode::INTERNAL_SERVER_ERROR,
            Json(ErrorDto {
                error: "Internal server error".to_string(),
            }),
        )
            .into_response()
    }
}

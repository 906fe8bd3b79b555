//! Geocoding error types.
//!
//! `Miss` and `EmptyAddress` are per-record: the pipeline skips the station and moves on.
//! `Request` and `Status` mean the Places service itself is unusable (network, timeout,
//! quota, credentials) and abort the current run.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum GeocodeError {
    /// The address has no city, street or house number left after normalization.
    #[error("Address is empty after normalization")]
    EmptyAddress,
    /// Every query in the fallback chain returned no candidate.
    #[error("No geocoding candidate found for address {address:?}")]
    Miss { address: String },
    /// Transport failure, timeout or HTTP error status from the Places service.
    #[error("Geocoding service request failed: {0}")]
    Request(#[from] reqwest::Error),
    /// The Places service answered with a non-OK status such as `OVER_QUERY_LIMIT`.
    #[error("Geocoding service returned status {status}: {message}")]
    Status { status: String, message: String },
}

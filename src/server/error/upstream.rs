//! Errors fetching the MDA station listing set.
//!
//! Any of these aborts a pipeline run before a single listing is processed, so a broken
//! upstream never reaches the donations store.

use thiserror::Error;

#[derive(Error, Debug)]
pub enum UpstreamError {
    /// Transport failure, timeout, or non-success HTTP status from MDA.
    #[error("Failed to fetch MDA station listings: {0}")]
    Request(#[from] reqwest::Error),
    /// The API answered but without the `Result` payload.
    #[error("MDA response is missing its Result payload")]
    MissingResult,
    /// The `Result` payload is not a JSON array of station listings.
    #[error("MDA Result payload is malformed: {0}")]
    MalformedPayload(#[from] serde_json::Error),
}

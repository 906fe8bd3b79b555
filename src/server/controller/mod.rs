//! HTTP controller endpoints for the donation map API.
//!
//! Axum handlers that validate query parameters, read from the donations store and return
//! JSON. Each handler carries a utoipa path annotation collected by the router.

pub mod donation;

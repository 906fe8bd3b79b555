//! Blood donation station map.
//!
//! Ingests MDA blood-donation station listings, geocodes each station through a
//! cached Google Places lookup, stores the results in SQLite and serves them to a
//! map frontend over a small HTTP API.

pub mod model;
pub mod server;

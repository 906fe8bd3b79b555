//! Server application models and type definitions.
//!
//! Application state for the HTTP layer, database model aliases, and the typed station
//! listings the pipeline works on.

pub mod app;
pub mod db;
pub mod geocode;
pub mod station;

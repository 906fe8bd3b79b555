//! Test fixture modules for database rows and HTTP mocks.
//!
//! - `donation` - rows in the donations store
//! - `geocache` - rows in the geocode cache
//! - `mda` - station listing payloads and MDA endpoints
//! - `places` - Places text search endpoints

pub mod donation;
pub mod geocache;
pub mod mda;
pub mod places;

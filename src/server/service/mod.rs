//! Service layer for business logic and orchestration.
//!
//! Services coordinate repositories and external clients: geocoding with the cache in front
//! of the Places API, turning one raw listing into a stored station, and running a full
//! ingestion pass. [`retry`] holds the shared retry policy for transient failures.

pub mod geocode;
pub mod pipeline;
pub mod retry;
pub mod station;

#[cfg(test)]
mod tests;

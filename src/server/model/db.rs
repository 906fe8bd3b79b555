//! Database model type aliases.
//!
//! Short names for the SeaORM models generated in the `entity` crate.

/// A processed, geocoded donation station.
///
/// # Fields (from `entity::donation::Model`)
/// - `id` - Surrogate primary key
/// - `scheduling_url` - MDA booking link, unique natural key of a station-date slot
/// - `donation_date` - Calendar date of the session
/// - `city`, `street`, `house_number`, `venue_name` - Normalized address fields
/// - `from_hour`, `to_hour` - Opening hours as published by MDA
/// - `latitude`, `longitude` - Resolved coordinates
/// - `created_at` - Timestamp of the first ingestion of this slot
/// - `updated_at` - Timestamp of the latest upsert
pub type DonationModel = entity::donation::Model;

/// A cached geocoding result.
///
/// # Fields (from `entity::geocache::Model`)
/// - `id` - Surrogate primary key
/// - `key` - Normalized address key, unique
/// - `latitude`, `longitude` - Coordinates returned by the geocoder
/// - `is_exact` - Whether the match was street/venue level rather than city level
/// - `updated_at` - Timestamp of the latest store for this key
pub type GeocacheModel = entity::geocache::Model;

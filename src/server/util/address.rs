//! Address normalization and geocode cache keys.
//!
//! MDA listings are typed by hand and the same venue shows up with different spacing and
//! casing from one week to the next. Every component that compares addresses goes through
//! [`normalize_text`] and [`AddressKey`] so that those variants collapse onto one cache entry.

use std::fmt;

use crate::server::error::geocode::GeocodeError;

/// Trims a free-text field and collapses runs of whitespace into single spaces.
///
/// Casing is preserved, this is used for the values that are stored and displayed.
pub fn normalize_text(value: &str) -> String {
    value.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Normalized geocode cache key, `"<city>, <street>, <house number>"` in lower case.
///
/// Trailing empty components are dropped, so a listing without a house number keys on
/// `"<city>, <street>"`. A key can never be empty: an address that normalizes to nothing
/// is rejected with [`GeocodeError::EmptyAddress`] before it reaches the cache.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct AddressKey(String);

impl AddressKey {
    /// Builds a key from the city, street and house number of a listing.
    pub fn from_parts(city: &str, street: &str, house_number: &str) -> Result<Self, GeocodeError> {
        Self::new(&format!("{city}, {street}, {house_number}"))
    }

    /// Normalizes a free-form, comma separated address string into a key.
    ///
    /// Each comma separated component is trimmed, whitespace-collapsed and lower-cased.
    pub fn new(address: &str) -> Result<Self, GeocodeError> {
        let mut parts: Vec<String> = address
            .split(',')
            .map(|part| normalize_text(part).to_lowercase())
            .collect();

        while parts.last().is_some_and(|part| part.is_empty()) {
            parts.pop();
        }

        if parts.iter().all(|part| part.is_empty()) {
            return Err(GeocodeError::EmptyAddress);
        }

        Ok(Self(parts.join(", ")))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for AddressKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

//! Address resolution with the geocode cache in front of the Places API.
//!
//! Every resolution consults the cache before any outbound request, so an address is paid
//! for once. On a cache miss the listing's address is tried as a chain of progressively
//! coarser text queries and the first query with a candidate wins.

use deunicode::deunicode;
use sea_orm::ConnectionTrait;

use crate::server::{
    client::places::PlacesClient,
    data::geocache::GeocacheRepository,
    error::{geocode::GeocodeError, Error},
    model::{geocode::Coordinates, station::StationListing},
    service::retry::RetryContext,
    util::address::{normalize_text, AddressKey},
};

/// Place types precise enough to pin a station on the map.
static EXACT_PLACE_TYPES: &[&str] = &[
    "street_address",
    "premise",
    "subpremise",
    "establishment",
    "point_of_interest",
];

/// How specific a query of the fallback chain is.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QueryLevel {
    /// Street with or without house number.
    Street,
    /// Venue name within the city. The cache key does not carry the venue, so a hit is
    /// shared by every station of the city without a street and is never exact.
    Venue,
    /// City name only.
    City,
}

/// One text query of the fallback chain.
#[derive(Debug, Clone, PartialEq)]
pub struct GeocodeQuery {
    pub text: String,
    pub level: QueryLevel,
}

pub struct GeocodeService<'a, C: ConnectionTrait> {
    geocache: GeocacheRepository<'a, C>,
    places: &'a PlacesClient,
    retry: RetryContext,
}

impl<'a, C: ConnectionTrait> GeocodeService<'a, C> {
    /// Creates a new instance of [`GeocodeService`]
    pub fn new(geocache_db: &'a C, places: &'a PlacesClient, retry: RetryContext) -> Self {
        Self {
            geocache: GeocacheRepository::new(geocache_db),
            places,
            retry,
        }
    }

    /// Resolves the coordinates of a listing's address.
    ///
    /// # Returns
    /// - `Ok(Coordinates)` - From the cache, or from the Places API and then cached
    /// - `Err(Error::GeocodeError(GeocodeError::EmptyAddress))` - Nothing to look up, no cache or network access
    /// - `Err(Error::GeocodeError(GeocodeError::Miss))` - No query in the chain produced a candidate
    /// - `Err(Error::GeocodeError(_))` - Places API unusable after retries
    /// - `Err(Error::DbErr)` - Geocode cache read or write failed
    pub async fn resolve(&self, listing: &StationListing) -> Result<Coordinates, Error> {
        let key = AddressKey::from_parts(&listing.city, &listing.street, &listing.house_number)?;

        if let Some(entry) = self.geocache.lookup(&key).await? {
            tracing::debug!("Geocode cache hit for {:?}", key.as_str());
            return Ok(Coordinates::from(&entry));
        }

        for query in build_queries(listing) {
            let places = self.places;
            let text = query.text.as_str();

            let candidate = self
                .retry
                .execute_with_retry(&format!("geocoding query {text:?}"), || async move {
                    places.text_search(text).await.map_err(Error::from)
                })
                .await?;

            let Some(candidate) = candidate else {
                tracing::debug!("No geocoding candidate for query {:?}", text);
                continue;
            };

            let coordinates = Coordinates {
                latitude: candidate.latitude,
                longitude: candidate.longitude,
                is_exact: is_exact_match(&query, &candidate.types),
            };

            self.geocache.store(&key, coordinates).await?;

            tracing::debug!(
                "Geocoded {:?} via {:?} to {:?} (exact: {})",
                key.as_str(),
                text,
                candidate.formatted_address.as_deref().unwrap_or_default(),
                coordinates.is_exact
            );

            return Ok(coordinates);
        }

        Err(GeocodeError::Miss {
            address: key.to_string(),
        }
        .into())
    }
}

/// Builds the fallback chain, most specific query first, without duplicates.
///
/// 1. `"<street> <house number>, <city>"`
/// 2. `"<street>, <city>"`
/// 3. `"<venue name>, <city>"`
/// 4. `"<city>"`
///
/// The same four queries follow transliterated to Latin script, for addresses the
/// geocoder only knows by their Latin spelling.
pub fn build_queries(listing: &StationListing) -> Vec<GeocodeQuery> {
    let native = query_chain(
        &listing.city,
        &listing.street,
        &listing.house_number,
        &listing.venue_name,
    );
    let latin = query_chain(
        &transliterate(&listing.city),
        &transliterate(&listing.street),
        &transliterate(&listing.house_number),
        &transliterate(&listing.venue_name),
    );

    let mut queries: Vec<GeocodeQuery> = Vec::new();
    for query in native.into_iter().chain(latin) {
        if query.text.is_empty() || queries.iter().any(|q| q.text == query.text) {
            continue;
        }
        queries.push(query);
    }

    queries
}

fn query_chain(city: &str, street: &str, house_number: &str, venue: &str) -> Vec<GeocodeQuery> {
    let street_number = match (street.is_empty(), house_number.is_empty()) {
        (false, false) => format!("{street} {house_number}"),
        _ => String::new(),
    };

    let places = [
        (street_number.as_str(), QueryLevel::Street),
        (street, QueryLevel::Street),
        (venue, QueryLevel::Venue),
    ];

    places
        .into_iter()
        .filter(|(place, _)| !place.is_empty())
        .map(|(place, level)| GeocodeQuery {
            text: join_with_city(place, city),
            level,
        })
        .chain([GeocodeQuery {
            text: city.to_string(),
            level: QueryLevel::City,
        }])
        .collect()
}

fn transliterate(value: &str) -> String {
    normalize_text(&deunicode(value))
}

fn join_with_city(place: &str, city: &str) -> String {
    if city.is_empty() {
        place.to_string()
    } else {
        format!("{place}, {city}")
    }
}

/// A result is exact when it came from a street query and the top candidate is an
/// address, building or named place rather than a locality or route.
pub fn is_exact_match(query: &GeocodeQuery, types: &[String]) -> bool {
    query.level == QueryLevel::Street
        && types
            .iter()
            .any(|place_type| EXACT_PLACE_TYPES.contains(&place_type.as_str()))
}

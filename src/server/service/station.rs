use sea_orm::ConnectionTrait;

use crate::server::{
    data::donation::DonationRepository,
    error::{geocode::GeocodeError, Error},
    model::{
        db::DonationModel,
        station::{RawStation, SkipReason, StationListing},
    },
    service::geocode::GeocodeService,
};

/// Result of processing one listing.
#[derive(Debug)]
pub enum StationOutcome {
    /// The listing was geocoded and upserted.
    Stored(DonationModel),
    /// The listing was dropped, the run continues.
    Skipped(SkipReason),
}

/// Turns raw listings into stored, geocoded stations.
pub struct StationProcessor<'a, C: ConnectionTrait> {
    donations: DonationRepository<'a, C>,
    geocode: GeocodeService<'a, C>,
}

impl<'a, C: ConnectionTrait> StationProcessor<'a, C> {
    /// Creates a new instance of [`StationProcessor`]
    pub fn new(donations_db: &'a C, geocode: GeocodeService<'a, C>) -> Self {
        Self {
            donations: DonationRepository::new(donations_db),
            geocode,
        }
    }

    /// Validates, geocodes and upserts a single listing.
    ///
    /// # Returns
    /// - `Ok(StationOutcome::Stored)` - The station row as stored
    /// - `Ok(StationOutcome::Skipped)` - Invalid listing, empty address or no geocoding match
    /// - `Err(Error)` - Geocoding service or storage failure, the run must abort
    pub async fn process(&self, raw: RawStation) -> Result<StationOutcome, Error> {
        let scheduling_url = raw.scheduling_url.clone().unwrap_or_default();

        let listing = match StationListing::try_from(raw) {
            Ok(listing) => listing,
            Err(reason) => return Ok(skip(&scheduling_url, reason)),
        };

        let coordinates = match self.geocode.resolve(&listing).await {
            Ok(coordinates) => coordinates,
            Err(Error::GeocodeError(GeocodeError::EmptyAddress)) => {
                return Ok(skip(&scheduling_url, SkipReason::EmptyAddress))
            }
            Err(Error::GeocodeError(GeocodeError::Miss { address })) => {
                return Ok(skip(&scheduling_url, SkipReason::GeocodeMiss(address)))
            }
            Err(e) => return Err(e),
        };

        let donation = self.donations.upsert(listing, coordinates).await?;

        Ok(StationOutcome::Stored(donation))
    }
}

fn skip(scheduling_url: &str, reason: SkipReason) -> StationOutcome {
    tracing::warn!("Skipping listing {:?}: {}", scheduling_url, reason);

    StationOutcome::Skipped(reason)
}

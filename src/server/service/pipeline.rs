//! One full ingestion pass: fetch every MDA listing, then geocode and store them in order.
//!
//! Listings are processed sequentially. A per-record problem is counted and skipped, a
//! systemic one (geocoding service down, storage failure) stops the run where it is. Rows
//! committed before the failure stay, nothing is ever deleted.

use std::{collections::HashSet, fmt};

use sea_orm::ConnectionTrait;

use crate::server::{
    client::mda::MdaClient,
    error::Error,
    model::station::SkipReason,
    service::station::{StationOutcome, StationProcessor},
    util::address::normalize_text,
};

/// Counters reported at the end of a run.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct PipelineSummary {
    /// Listings returned by MDA (after the optional fetch limit)
    pub fetched: usize,
    /// Listings upserted into the donations store
    pub stored: usize,
    /// Listings whose scheduling URL already appeared earlier in the run
    pub duplicates: usize,
    pub skipped_invalid: usize,
    pub skipped_empty_address: usize,
    pub skipped_geocode_miss: usize,
}

impl PipelineSummary {
    fn record_skip(&mut self, reason: &SkipReason) {
        match reason {
            SkipReason::InvalidListing(_) => self.skipped_invalid += 1,
            SkipReason::EmptyAddress => self.skipped_empty_address += 1,
            SkipReason::GeocodeMiss(_) => self.skipped_geocode_miss += 1,
        }
    }

    pub fn skipped(&self) -> usize {
        self.skipped_invalid + self.skipped_empty_address + self.skipped_geocode_miss
    }
}

impl fmt::Display for PipelineSummary {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "fetched={} stored={} duplicates={} skipped_invalid={} skipped_empty_address={} skipped_geocode_miss={}",
            self.fetched,
            self.stored,
            self.duplicates,
            self.skipped_invalid,
            self.skipped_empty_address,
            self.skipped_geocode_miss
        )
    }
}

pub struct PipelineRunner<'a, C: ConnectionTrait> {
    mda: &'a MdaClient,
    processor: StationProcessor<'a, C>,
}

impl<'a, C: ConnectionTrait> PipelineRunner<'a, C> {
    /// Creates a new instance of [`PipelineRunner`]
    pub fn new(mda: &'a MdaClient, processor: StationProcessor<'a, C>) -> Self {
        Self { mda, processor }
    }

    /// Runs one fetch, geocode and store cycle.
    ///
    /// # Returns
    /// - `Ok(PipelineSummary)` - Every listing was stored or skipped
    /// - `Err(Error::UpstreamError)` - The listing fetch failed, no store was touched
    /// - `Err(Error)` - A systemic failure aborted the run, earlier upserts are kept
    pub async fn run(&self) -> Result<PipelineSummary, Error> {
        let listings = self.mda.fetch_listings().await?;

        let mut summary = PipelineSummary {
            fetched: listings.len(),
            ..Default::default()
        };
        let mut seen = HashSet::new();

        for (index, raw) in listings.into_iter().enumerate() {
            if let Some(url) = raw.scheduling_url.as_deref().map(normalize_text) {
                if !url.is_empty() && !seen.insert(url) {
                    summary.duplicates += 1;
                }
            }

            match self.processor.process(raw).await {
                Ok(StationOutcome::Stored(_)) => summary.stored += 1,
                Ok(StationOutcome::Skipped(reason)) => summary.record_skip(&reason),
                Err(e) => {
                    tracing::error!(
                        "Pipeline run aborted at listing {}/{}: {}",
                        index + 1,
                        summary.fetched,
                        e
                    );
                    tracing::error!("Partial summary: {}", summary);

                    return Err(e);
                }
            }
        }

        tracing::info!("Pipeline run complete: {}", summary);

        Ok(summary)
    }
}

//! Date parsing helpers for the API layer and MDA listings.

use chrono::{Local, NaiveDate};

use crate::server::error::request::RequestError;

/// Current calendar date in the server's local timezone.
///
/// MDA publishes stations by Israeli calendar date, the server is expected to run in
/// that timezone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Parses a `donation_date` query parameter.
///
/// Only the exact `YYYY-MM-DD` shape is accepted, `2024-1-5` is rejected even though
/// chrono alone would parse it.
pub fn parse_query_date(value: &str) -> Result<NaiveDate, RequestError> {
    let well_formed = value.len() == 10
        && value.char_indices().all(|(i, c)| match i {
            4 | 7 => c == '-',
            _ => c.is_ascii_digit(),
        });

    if !well_formed {
        return Err(RequestError::InvalidDate(value.to_string()));
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .map_err(|_| RequestError::InvalidDate(value.to_string()))
}

/// Parses MDA's `DateDonation` field, a timestamp such as `2024-01-01T00:00:00` of
/// which only the date part is meaningful.
pub fn parse_listing_date(value: &str) -> Option<NaiveDate> {
    let date = value.trim().split('T').next()?;
    NaiveDate::parse_from_str(date, "%Y-%m-%d").ok()
}

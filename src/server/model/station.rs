//! Station listings as received from MDA and as validated for processing.
//!
//! [`RawStation`] mirrors the upstream payload loosely: every field is optional and text
//! fields accept numbers, because MDA's data is hand-entered. [`StationListing`] is the
//! strongly typed form the processor works on; converting between the two is the only
//! place where upstream data is validated.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Deserializer, Serialize};

use crate::server::util::{address::normalize_text, time::parse_listing_date};

/// One station listing exactly as found in the MDA `Result` array.
#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct RawStation {
    #[serde(rename = "DateDonation", default, deserialize_with = "text_or_number")]
    pub date_donation: Option<String>,
    #[serde(rename = "City", default, deserialize_with = "text_or_number")]
    pub city: Option<String>,
    #[serde(rename = "Street", default, deserialize_with = "text_or_number")]
    pub street: Option<String>,
    #[serde(rename = "NumHouse", default, deserialize_with = "text_or_number")]
    pub num_house: Option<String>,
    #[serde(rename = "Name", default, deserialize_with = "text_or_number")]
    pub name: Option<String>,
    #[serde(rename = "FromHour", default, deserialize_with = "text_or_number")]
    pub from_hour: Option<String>,
    #[serde(rename = "ToHour", default, deserialize_with = "text_or_number")]
    pub to_hour: Option<String>,
    #[serde(rename = "SchedulingURL", default, deserialize_with = "text_or_number")]
    pub scheduling_url: Option<String>,
}

#[derive(Deserialize)]
#[serde(untagged)]
enum TextOrNumber {
    Text(String),
    Number(serde_json::Number),
}

fn text_or_number<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(
        Option::<TextOrNumber>::deserialize(deserializer)?.map(|value| match value {
            TextOrNumber::Text(text) => text,
            TextOrNumber::Number(number) => number.to_string(),
        }),
    )
}

/// A validated listing with normalized text fields.
#[derive(Debug, Clone, PartialEq)]
pub struct StationListing {
    pub scheduling_url: String,
    pub donation_date: NaiveDate,
    pub city: String,
    pub street: String,
    pub house_number: String,
    pub venue_name: String,
    pub from_hour: String,
    pub to_hour: String,
}

/// Why a listing was dropped from a pipeline run.
#[derive(Debug, Clone, PartialEq)]
pub enum SkipReason {
    /// The listing is missing a required field or carries an unparsable date.
    InvalidListing(String),
    /// City, street and house number are all blank.
    EmptyAddress,
    /// No geocoding query produced a candidate for this address.
    GeocodeMiss(String),
}

impl fmt::Display for SkipReason {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidListing(detail) => write!(f, "invalid listing: {detail}"),
            Self::EmptyAddress => f.write_str("empty address"),
            Self::GeocodeMiss(address) => write!(f, "no geocoding match for {address:?}"),
        }
    }
}

impl TryFrom<RawStation> for StationListing {
    type Error = SkipReason;

    fn try_from(raw: RawStation) -> Result<Self, Self::Error> {
        let scheduling_url = required(raw.scheduling_url, "SchedulingURL")?;
        let date_text = required(raw.date_donation, "DateDonation")?;
        let donation_date = parse_listing_date(&date_text).ok_or_else(|| {
            SkipReason::InvalidListing(format!("unparsable DateDonation {date_text:?}"))
        })?;

        Ok(Self {
            donation_date,
            city: optional(raw.city),
            street: optional(raw.street),
            house_number: optional(raw.num_house),
            venue_name: optional(raw.name),
            from_hour: required(raw.from_hour, "FromHour")?,
            to_hour: required(raw.to_hour, "ToHour")?,
            scheduling_url,
        })
    }
}

fn required(value: Option<String>, field: &str) -> Result<String, SkipReason> {
    let value = optional(value);
    if value.is_empty() {
        return Err(SkipReason::InvalidListing(format!("missing {field}")));
    }

    Ok(value)
}

fn optional(value: Option<String>) -> String {
    value.as_deref().map(normalize_text).unwrap_or_default()
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// A geocoded blood donation station open on a given date
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, utoipa::ToSchema)]
pub struct DonationDto {
    /// Date of the donation session
    #[schema(value_type = String, format = Date, example = "2024-01-01")]
    pub donation_date: NaiveDate,
    pub city: String,
    pub street: String,
    pub house_number: String,
    /// Name of the venue hosting the station
    pub venue_name: String,
    /// Opening hour as published by MDA, e.g. `08:30`
    pub from_hour: String,
    /// Closing hour as published by MDA, e.g. `13:00`
    pub to_hour: String,
    /// Link to book an appointment, unique per station and date
    pub scheduling_url: String,
    pub latitude: f64,
    pub longitude: f64,
}

impl From<entity::donation::Model> for DonationDto {
    fn from(model: entity::donation::Model) -> Self {
        Self {
            donation_date: model.donation_date,
            city: model.city,
            street: model.street,
            house_number: model.house_number,
            venue_name: model.venue_name,
            from_hour: model.from_hour,
            to_hour: model.to_hour,
            scheduling_url: model.scheduling_url,
            latitude: model.latitude,
            longitude: model.longitude,
        }
    }
}

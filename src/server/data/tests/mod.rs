use chrono::NaiveDate;

use crate::server::model::{geocode::Coordinates, station::StationListing};


fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).unwrap()
}

fn listing(scheduling_url: &str, donation_date: NaiveDate, city: &str, venue: &str) -> StationListing {
    StationListing {
        scheduling_url: scheduling_url.to_string(),
        donation_date,
        city: city.to_string(),
        street: "Herzl".to_string(),
        house_number: "1".to_string(),
        venue_name: venue.to_string(),
        from_hour: "08:30".to_string(),
        to_hour: "13:00".to_string(),
    }
}

fn coordinates(latitude: f64, longitude: f64) -> Coordinates {
    Coordinates {
        latitude,
        longitude,
        is_exact: true,
    }
}

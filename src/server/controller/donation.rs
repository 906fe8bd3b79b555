use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
    Json,
};
use serde::Deserialize;
use utoipa::IntoParams;

use crate::{
    model::{api::ErrorDto, donation::DonationDto},
    server::{
        data::donation::DonationRepository,
        error::Error,
        model::app::AppState,
        util::{
            address::normalize_text,
            time::{parse_query_date, today},
        },
    },
};

pub static DONATION_TAG: &str = "donation";

#[derive(Debug, Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct DonationQuery {
    /// Date of the sessions as `YYYY-MM-DD`, defaults to today
    #[param(example = "2024-01-01")]
    pub donation_date: Option<String>,
    /// Restrict the results to one city
    pub city: Option<String>,
}

/// Get donation stations open on a date
///
/// Stations are ordered by city, then venue name.
#[utoipa::path(
    get,
    path = "/donations",
    tag = DONATION_TAG,
    params(DonationQuery),
    responses(
        (status = 200, description = "Stations open on the requested date", body = Vec<DonationDto>),
        (status = 400, description = "Malformed donation_date", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_donations(
    State(state): State<AppState>,
    Query(params): Query<DonationQuery>,
) -> Result<impl IntoResponse, Error> {
    let donation_date = match params.donation_date.as_deref() {
        Some(value) => parse_query_date(value)?,
        None => today(),
    };
    let city = params
        .city
        .as_deref()
        .map(normalize_text)
        .filter(|city| !city.is_empty());

    let donations = DonationRepository::new(&state.db)
        .query(donation_date, city.as_deref())
        .await?;

    let donation_dtos: Vec<DonationDto> = donations.into_iter().map(DonationDto::from).collect();

    Ok((StatusCode::OK, Json(donation_dtos)))
}

/// Get all cities with stored donation stations
#[utoipa::path(
    get,
    path = "/cities",
    tag = DONATION_TAG,
    responses(
        (status = 200, description = "Distinct city names in ascending order", body = Vec<String>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_cities(State(state): State<AppState>) -> Result<impl IntoResponse, Error> {
    let cities = DonationRepository::new(&state.db).cities().await?;

    Ok((StatusCode::OK, Json(cities)))
}

use chrono::{NaiveDate, Utc};
use migration::OnConflict;
use sea_orm::{
    ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter, QueryOrder,
    QuerySelect,
};

use crate::server::model::{db::DonationModel, geocode::Coordinates, station::StationListing};

pub struct DonationRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> DonationRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Inserts a geocoded listing or replaces the row sharing its scheduling URL.
    ///
    /// `created_at` keeps the timestamp of the first insert, every other column including
    /// `updated_at` is overwritten.
    pub async fn upsert(
        &self,
        listing: StationListing,
        coordinates: Coordinates,
    ) -> Result<DonationModel, DbErr> {
        let now = Utc::now().naive_utc();

        let donation = entity::donation::ActiveModel {
            scheduling_url: ActiveValue::Set(listing.scheduling_url),
            donation_date: ActiveValue::Set(listing.donation_date),
            city: ActiveValue::Set(listing.city),
            street: ActiveValue::Set(listing.street),
            house_number: ActiveValue::Set(listing.house_number),
            venue_name: ActiveValue::Set(listing.venue_name),
            from_hour: ActiveValue::Set(listing.from_hour),
            to_hour: ActiveValue::Set(listing.to_hour),
            latitude: ActiveValue::Set(coordinates.latitude),
            longitude: ActiveValue::Set(coordinates.longitude),
            created_at: ActiveValue::Set(now),
            updated_at: ActiveValue::Set(now),
            ..Default::default()
        };

        entity::prelude::Donation::insert_many([donation])
            .on_conflict(
                OnConflict::column(entity::donation::Column::SchedulingUrl)
                    .update_columns([
                        entity::donation::Column::DonationDate,
                        entity::donation::Column::City,
                        entity::donation::Column::Street,
                        entity::donation::Column::HouseNumber,
                        entity::donation::Column::VenueName,
                        entity::donation::Column::FromHour,
                        entity::donation::Column::ToHour,
                        entity::donation::Column::Latitude,
                        entity::donation::Column::Longitude,
                        entity::donation::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?
            .pop()
            .ok_or(DbErr::RecordNotInserted)
    }

    /// Stations on `donation_date`, optionally restricted to one city.
    ///
    /// Ordered by city, then venue name.
    pub async fn query(
        &self,
        donation_date: NaiveDate,
        city: Option<&str>,
    ) -> Result<Vec<DonationModel>, DbErr> {
        let mut select = entity::prelude::Donation::find()
            .filter(entity::donation::Column::DonationDate.eq(donation_date));

        if let Some(city) = city {
            select = select.filter(entity::donation::Column::City.eq(city));
        }

        select
            .order_by_asc(entity::donation::Column::City)
            .order_by_asc(entity::donation::Column::VenueName)
            .all(self.db)
            .await
    }

    /// Distinct cities with at least one stored station, in ascending order.
    pub async fn cities(&self) -> Result<Vec<String>, DbErr> {
        entity::prelude::Donation::find()
            .select_only()
            .column(entity::donation::Column::City)
            .distinct()
            .order_by_asc(entity::donation::Column::City)
            .into_tuple::<String>()
            .all(self.db)
            .await
    }

    pub async fn find_by_scheduling_url(
        &self,
        scheduling_url: &str,
    ) -> Result<Option<DonationModel>, DbErr> {
        entity::prelude::Donation::find()
            .filter(entity::donation::Column::SchedulingUrl.eq(scheduling_url))
            .one(self.db)
            .await
    }
}

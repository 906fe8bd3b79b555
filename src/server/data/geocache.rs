use chrono::Utc;
use migration::OnConflict;
use sea_orm::{ActiveValue, ColumnTrait, ConnectionTrait, DbErr, EntityTrait, QueryFilter};

use crate::server::{
    model::{db::GeocacheModel, geocode::Coordinates},
    util::address::AddressKey,
};

pub struct GeocacheRepository<'a, C: ConnectionTrait> {
    db: &'a C,
}

impl<'a, C: ConnectionTrait> GeocacheRepository<'a, C> {
    pub fn new(db: &'a C) -> Self {
        Self { db }
    }

    /// Get the cached result for a normalized address
    pub async fn lookup(&self, key: &AddressKey) -> Result<Option<GeocacheModel>, DbErr> {
        entity::prelude::Geocache::find()
            .filter(entity::geocache::Column::Key.eq(key.as_str()))
            .one(self.db)
            .await
    }

    /// Inserts or overwrites the entry for `key` and refreshes its `updated_at`
    pub async fn store(
        &self,
        key: &AddressKey,
        coordinates: Coordinates,
    ) -> Result<GeocacheModel, DbErr> {
        let entry = entity::geocache::ActiveModel {
            key: ActiveValue::Set(key.as_str().to_string()),
            latitude: ActiveValue::Set(coordinates.latitude),
            longitude: ActiveValue::Set(coordinates.longitude),
            is_exact: ActiveValue::Set(coordinates.is_exact),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        };

        entity::prelude::Geocache::insert_many([entry])
            .on_conflict(
                OnConflict::column(entity::geocache::Column::Key)
                    .update_columns([
                        entity::geocache::Column::Latitude,
                        entity::geocache::Column::Longitude,
                        entity::geocache::Column::IsExact,
                        entity::geocache::Column::UpdatedAt,
                    ])
                    .to_owned(),
            )
            .exec_with_returning(self.db)
            .await?
            .pop()
            .ok_or(DbErr::RecordNotInserted)
    }
}

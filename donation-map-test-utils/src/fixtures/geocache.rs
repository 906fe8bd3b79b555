use chrono::Utc;
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn geocache<'a>(&'a mut self) -> GeocacheFixtures<'a> {
        GeocacheFixtures { setup: self }
    }
}

pub struct GeocacheFixtures<'a> {
    pub setup: &'a mut TestContext,
}

impl<'a> GeocacheFixtures<'a> {
    /// Inserts a cache entry under an already normalized key such as `"tel aviv, herzl, 1"`.
    pub async fn insert_cached_address(
        &mut self,
        key: &str,
        latitude: f64,
        longitude: f64,
        is_exact: bool,
    ) -> Result<entity::geocache::Model, TestError> {
        let entry = entity::geocache::ActiveModel {
            key: ActiveValue::Set(key.to_string()),
            latitude: ActiveValue::Set(latitude),
            longitude: ActiveValue::Set(longitude),
            is_exact: ActiveValue::Set(is_exact),
            updated_at: ActiveValue::Set(Utc::now().naive_utc()),
            ..Default::default()
        }
        .insert(&self.setup.geocache_db)
        .await?;

        Ok(entry)
    }
}

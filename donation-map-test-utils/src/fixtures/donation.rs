use chrono::{NaiveDate, Utc};
use sea_orm::{ActiveModelTrait, ActiveValue};

use crate::{TestContext, TestError};

impl TestContext {
    pub fn donation<'a>(&'a mut self) -> DonationFixtures<'a> {
        DonationFixtures { setup: self }
    }
}

pub struct DonationFixtures<'a> {
    pub setup: &'a mut TestContext,
}

/// Scheduling URL used by [`mock_donation`] for a given ID.
pub fn mock_scheduling_url(id: i32) -> String {
    format!("https://example.com/schedule/{id}")
}

/// Builds an unsaved donation row.
///
/// The venue is `"Venue <id>"`, the street `"Herzl"` and the house number the ID itself, so
/// rows created with different IDs sort predictably by venue.
pub fn mock_donation(
    id: i32,
    donation_date: NaiveDate,
    city: &str,
) -> entity::donation::ActiveModel {
    let now = Utc::now().naive_utc();

    entity::donation::ActiveModel {
        scheduling_url: ActiveValue::Set(mock_scheduling_url(id)),
        donation_date: ActiveValue::Set(donation_date),
        city: ActiveValue::Set(city.to_string()),
        street: ActiveValue::Set("Herzl".to_string()),
        house_number: ActiveValue::Set(id.to_string()),
        venue_name: ActiveValue::Set(format!("Venue {id}")),
        from_hour: ActiveValue::Set("08:30".to_string()),
        to_hour: ActiveValue::Set("13:00".to_string()),
        latitude: ActiveValue::Set(32.0 + f64::from(id) / 100.0),
        longitude: ActiveValue::Set(34.7 + f64::from(id) / 100.0),
        created_at: ActiveValue::Set(now),
        updated_at: ActiveValue::Set(now),
        ..Default::default()
    }
}

impl<'a> DonationFixtures<'a> {
    /// Inserts a mock donation row into the donations database.
    ///
    /// # Returns
    /// - `Ok(Model)` - The inserted row
    /// - `Err(TestError::DbErr)` - Insert failed, e.g. the table was not created
    pub async fn insert_mock_donation(
        &mut self,
        id: i32,
        donation_date: NaiveDate,
        city: &str,
    ) -> Result<entity::donation::Model, TestError> {
        let donation = mock_donation(id, donation_date, city)
            .insert(&self.setup.donations_db)
            .await?;

        Ok(donation)
    }
}

//! Tests for DonationRepository::find_by_scheduling_url method.

use donation_map_test_utils::fixtures::donation::mock_scheduling_url;

use super::*;

#[tokio::test]
async fn finds_existing_row() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_donation_tables()
        .with_mock_donation(7, date(2024, 3, 10), "Haifa")
        .build()
        .await?;
    let repo = DonationRepository::new(&test.donations_db);

    let found = repo.find_by_scheduling_url(&mock_scheduling_url(7)).await?;

    assert!(found.is_some());
    assert_eq!(found.unwrap().venue_name, "Venue 7");

    Ok(())
}

#[tokio::test]
async fn none_for_unknown_url() -> Result<(), TestError> {
    let test = TestBuilder::new().with_donation_tables().build().await?;
    let repo = DonationRepository::new(&test.donations_db);

    let found = repo.find_by_scheduling_url("https://example.com/missing").await?;

    assert!(found.is_none());

    Ok(())
}

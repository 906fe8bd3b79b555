//! Tests for DonationRepository::cities method.

use super::*;

/// Expect each city once, in ascending order
#[tokio::test]
async fn returns_distinct_sorted_cities() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_donation_tables()
        .with_mock_donation(1, date(2024, 3, 10), "Tel Aviv")
        .with_mock_donation(2, date(2024, 3, 10), "Haifa")
        .with_mock_donation(3, date(2024, 3, 11), "Tel Aviv")
        .build()
        .await?;
    let repo = DonationRepository::new(&test.donations_db);

    let cities = repo.cities().await?;

    assert_eq!(cities, vec!["Haifa".to_string(), "Tel Aviv".to_string()]);

    Ok(())
}

/// Expect an empty list when no station is stored
#[tokio::test]
async fn empty_without_rows() -> Result<(), TestError> {
    let test = TestBuilder::new().with_donation_tables().build().await?;
    let repo = DonationRepository::new(&test.donations_db);

    assert!(repo.cities().await?.is_empty());

    Ok(())
}

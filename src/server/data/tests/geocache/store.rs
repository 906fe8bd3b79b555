//! Tests for GeocacheRepository::store method.

use super::*;

#[tokio::test]
async fn stores_new_entry() -> Result<(), TestError> {
    let test = TestBuilder::new().with_geocache_tables().build().await?;
    let repo = GeocacheRepository::new(&test.geocache_db);

    let key = AddressKey::from_parts("Haifa", "Herzl", "1").unwrap();
    let stored = repo.store(&key, coordinates(32.8, 35.0)).await?;

    assert_eq!(stored.key, "haifa, herzl, 1");
    assert_eq!(repo.lookup(&key).await?, Some(stored));

    Ok(())
}

/// Expect the existing entry to be overwritten rather than duplicated
#[tokio::test]
async fn overwrites_existing_entry() -> Result<(), TestError> {
    let test = TestBuilder::new()
        .with_geocache_tables()
        .with_cached_address("haifa, herzl, 1", 1.0, 2.0, false)
        .build()
        .await?;
    let repo = GeocacheRepository::new(&test.geocache_db);

    let key = AddressKey::from_parts("Haifa", "Herzl", "1").unwrap();
    let initial = repo.lookup(&key).await?.unwrap();

    tokio::time::sleep(tokio::time::Duration::from_millis(10)).await;

    let stored = repo.store(&key, coordinates(32.8, 35.0)).await?;

    assert_eq!(stored.id, initial.id);
    assert_eq!(stored.latitude, 32.8);
    assert!(stored.is_exact);
    assert!(stored.updated_at > initial.updated_at);

    Ok(())
}

pub use sea_orm_migration::prelude::*;

mod m20250612_000001_donation;
mod m20250612_000002_geocache;

/// Migrations for `donations.db`.
pub struct DonationsMigrator;

#[async_trait::async_trait]
impl MigratorTrait for DonationsMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250612_000001_donation::Migration)]
    }
}

/// Migrations for `geocache.db`.
///
/// The geocode cache lives in its own SQLite file so it survives a full
/// refresh of the donations dataset.
pub struct GeocacheMigrator;

#[async_trait::async_trait]
impl MigratorTrait for GeocacheMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250612_000002_geocache::Migration)]
    }
}

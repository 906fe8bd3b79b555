use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Geocache::Table)
                    .if_not_exists()
                    .col(pk_auto(Geocache::Id))
                    .col(string_uniq(Geocache::Key))
                    .col(double(Geocache::Latitude))
                    .col(double(Geocache::Longitude))
                    .col(boolean(Geocache::IsExact))
                    .col(timestamp(Geocache::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_table(Table::drop().table(Geocache::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Geocache {
    Table,
    Id,
    Key,
    Latitude,
    Longitude,
    IsExact,
    UpdatedAt,
}

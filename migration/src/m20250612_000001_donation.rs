use sea_orm_migration::{prelude::*, schema::*};

static IDX_DONATION_DONATION_DATE: &str = "idx_donation_donation_date";
static IDX_DONATION_CITY: &str = "idx_donation_city";

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Donation::Table)
                    .if_not_exists()
                    .col(pk_auto(Donation::Id))
                    .col(string_uniq(Donation::SchedulingUrl))
                    .col(date(Donation::DonationDate))
                    .col(string(Donation::City))
                    .col(string(Donation::Street))
                    .col(string(Donation::HouseNumber))
                    .col(string(Donation::VenueName))
                    .col(string(Donation::FromHour))
                    .col(string(Donation::ToHour))
                    .col(double(Donation::Latitude))
                    .col(double(Donation::Longitude))
                    .col(timestamp(Donation::CreatedAt))
                    .col(timestamp(Donation::UpdatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_DONATION_DONATION_DATE)
                    .table(Donation::Table)
                    .col(Donation::DonationDate)
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .if_not_exists()
                    .name(IDX_DONATION_CITY)
                    .table(Donation::Table)
                    .col(Donation::City)
                    .to_owned(),
            )
            .await?;

        Ok(())
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONATION_CITY)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_index(
                Index::drop()
                    .name(IDX_DONATION_DONATION_DATE)
                    .table(Donation::Table)
                    .to_owned(),
            )
            .await?;

        manager
            .drop_table(Table::drop().table(Donation::Table).to_owned())
            .await?;

        Ok(())
    }
}

#[derive(DeriveIden)]
pub enum Donation {
    Table,
    Id,
    SchedulingUrl,
    DonationDate,
    City,
    Street,
    HouseNumber,
    VenueName,
    FromHour,
    ToHour,
    Latitude,
    Longitude,
    CreatedAt,
    UpdatedAt,
}

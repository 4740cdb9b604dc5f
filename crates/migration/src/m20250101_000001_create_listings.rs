//! Create `listings` table.
//!
//! `plot_id` is the primary key; its uniqueness is what ultimately rejects
//! duplicate listings, even when two creates race past the lookup.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Listings::Table)
                    .if_not_exists()
                    .col(string(Listings::PlotId).primary_key())
                    .col(string(Listings::Title))
                    .col(string(Listings::Location))
                    .col(string_len(Listings::Category, 8))
                    .col(double(Listings::Price))
                    .col(boolean(Listings::Available).default(true))
                    .col(timestamp_with_time_zone(Listings::CreatedAt))
                    .col(timestamp_with_time_zone(Listings::UpdatedAt))
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Listings::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Listings {
    Table,
    PlotId,
    Title,
    Location,
    Category,
    Price,
    Available,
    CreatedAt,
    UpdatedAt,
}

//! Create `inquiries` table.
//! Append-only; `plot_id` is indexed for the list filter but deliberately has
//! no foreign key to `listings`.
use sea_orm_migration::{prelude::*, schema::*};

#[derive(DeriveMigrationName)]
pub struct Migration;

#[async_trait::async_trait]
impl MigrationTrait for Migration {
    async fn up(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager
            .create_table(
                Table::create()
                    .table(Inquiries::Table)
                    .if_not_exists()
                    .col(pk_auto(Inquiries::Id))
                    .col(string(Inquiries::PlotId))
                    .col(string(Inquiries::Name))
                    .col(string(Inquiries::Email))
                    .col(string(Inquiries::Phone))
                    .col(text(Inquiries::Message))
                    .col(timestamp_with_time_zone(Inquiries::CreatedAt))
                    .to_owned(),
            )
            .await?;

        manager
            .create_index(
                Index::create()
                    .name("idx_inquiries_plot_id")
                    .table(Inquiries::Table)
                    .col(Inquiries::PlotId)
                    .if_not_exists()
                    .to_owned(),
            )
            .await
    }

    async fn down(&self, manager: &SchemaManager) -> Result<(), DbErr> {
        manager.drop_table(Table::drop().table(Inquiries::Table).to_owned()).await
    }
}

#[derive(DeriveIden)]
enum Inquiries {
    Table,
    Id,
    PlotId,
    Name,
    Email,
    Phone,
    Message,
    CreatedAt,
}

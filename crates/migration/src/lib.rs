//! Schema for both services. Each service owns its own migrator and its own
//! bookkeeping table, so the two can share a database without tripping over
//! each other's applied-migration history.
pub use sea_orm_migration::prelude::*;

mod m20250101_000001_create_listings;
mod m20250101_000002_create_inquiries;

/// Tables owned by the listing service.
pub struct ListingMigrator;

#[async_trait::async_trait]
impl MigratorTrait for ListingMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000001_create_listings::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("listing_service_migrations").into_iden()
    }
}

/// Tables owned by the inquiry service.
pub struct InquiryMigrator;

#[async_trait::async_trait]
impl MigratorTrait for InquiryMigrator {
    fn migrations() -> Vec<Box<dyn MigrationTrait>> {
        vec![Box::new(m20250101_000002_create_inquiries::Migration)]
    }

    fn migration_table_name() -> DynIden {
        Alias::new("inquiry_service_migrations").into_iden()
    }
}

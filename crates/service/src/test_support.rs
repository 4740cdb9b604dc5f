#![cfg(test)]
use sea_orm::DatabaseConnection;
use tempfile::TempDir;

use migration::{InquiryMigrator, ListingMigrator, MigratorTrait};
use models::db::connect;

/// A migrated SQLite database private to one test; the file goes away on drop.
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn get_db() -> Result<TestDb, anyhow::Error> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("service.db").display());
    let db = connect(&url).await?;
    ListingMigrator::up(&db, None).await?;
    InquiryMigrator::up(&db, None).await?;
    Ok(TestDb { db, _dir: dir })
}

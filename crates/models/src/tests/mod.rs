use anyhow::Result;
use migration::{InquiryMigrator, ListingMigrator, MigratorTrait};
use sea_orm::{ConnectionTrait, DatabaseConnection, DbBackend, Statement};
use tempfile::TempDir;

use crate::db::connect;



/// SQLite file in a temp dir with both services' tables; removed on drop.
pub struct TestDb {
    pub db: DatabaseConnection,
    _dir: TempDir,
}

pub async fn setup_test_db() -> Result<TestDb> {
    let dir = tempfile::tempdir()?;
    let url = format!("sqlite://{}?mode=rwc", dir.path().join("models.db").display());
    let db = connect(&url).await?;
    ListingMigrator::up(&db, None).await?;
    InquiryMigrator::up(&db, None).await?;
    Ok(TestDb { db, _dir: dir })
}

#[tokio::test]
async fn migrators_are_idempotent_and_share_a_database() -> Result<()> {
    let t = setup_test_db().await?;
    ListingMigrator::up(&t.db, None).await?;
    InquiryMigrator::up(&t.db, None).await?;
    assert!(ListingMigrator::get_pending_migrations(&t.db).await?.is_empty());
    assert!(InquiryMigrator::get_pending_migrations(&t.db).await?.is_empty());
    Ok(())
}

#[tokio::test]
async fn plot_id_columns_are_unbounded_and_ddl_is_clean() -> Result<()> {
    let t = setup_test_db().await?;
    for table in ["listings", "inquiries"] {
        let row = t
            .db
            .query_one(Statement::from_sql_and_values(
                DbBackend::Sqlite,
                "SELECT sql FROM sqlite_master WHERE type = 'table' AND name = ?",
                [table.into()],
            ))
            .await?
            .expect("table created by migrator");
        let ddl: String = row.try_get("", "sql")?;
        assert!(ddl.contains("\"plot_id\" varchar NOT NULL"), "{ddl}");
        assert!(!ddl.contains("NOT NULL NOT NULL"), "{ddl}");
    }
    Ok(())
}

use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{ActiveModelTrait, DatabaseConnection, DbErr, EntityTrait, QueryOrder, QuerySelect, TransactionTrait};

use models::listing::{self, ValidListing};

use crate::pagination::Pagination;
use crate::store::{RecordStore, StoreError};

/// SeaORM-backed listing store.
#[derive(Clone)]
pub struct SeaOrmListingStore {
    db: DatabaseConnection,
}

impl SeaOrmListingStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordStore for SeaOrmListingStore {
    type Record = listing::Model;
    type Key = str;
    type New = ValidListing;
    type Filter = ();

    async fn find_by_key(&self, plot_id: &str) -> Result<Option<listing::Model>, StoreError> {
        Ok(listing::Entity::find_by_id(plot_id.to_owned()).one(&self.db).await?)
    }

    async fn insert(&self, new: ValidListing) -> Result<listing::Model, StoreError> {
        let am = new.into_active_model(Utc::now().into());
        let model = self
            .db
            .transaction::<_, listing::Model, DbErr>(|txn| Box::pin(async move { am.insert(txn).await }))
            .await?;
        Ok(model)
    }

    async fn list(&self, _filter: &(), page: Pagination) -> Result<Vec<listing::Model>, StoreError> {
        let rows = listing::Entity::find()
            .order_by_asc(listing::Column::CreatedAt)
            .order_by_asc(listing::Column::PlotId)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::get_db;
    use models::listing::{Category, NewListing};

    fn valid(plot_id: &str, price: f64) -> ValidListing {
        NewListing {
            plot_id: plot_id.into(),
            title: format!("Plot {plot_id}"),
            location: "Kandy".into(),
            category: "Rent".into(),
            price,
            available: false,
        }
        .validate()
        .unwrap()
    }

    #[tokio::test]
    async fn insert_then_find_round_trips() -> anyhow::Result<()> {
        let t = get_db().await?;
        let store = SeaOrmListingStore::new(t.db.clone());

        assert!(store.find_by_key("P1").await?.is_none());
        let created = store.insert(valid("P1", 250_000.0)).await?;
        assert_eq!(created.category, Category::Rent);
        assert!(!created.available);
        assert_eq!(created.created_at, created.updated_at);

        let found = store.find_by_key("P1").await?.expect("listing persisted");
        assert_eq!(found.plot_id, "P1");
        assert_eq!(found.price, 250_000.0);
        Ok(())
    }

    #[tokio::test]
    async fn second_insert_of_same_key_is_duplicate_and_leaves_first_intact() -> anyhow::Result<()> {
        let t = get_db().await?;
        let store = SeaOrmListingStore::new(t.db.clone());

        store.insert(valid("P1", 100.0)).await?;
        let err = store.insert(valid("P1", 999.0)).await.unwrap_err();
        assert!(matches!(err, StoreError::Duplicate(_)), "got {err:?}");

        let kept = store.find_by_key("P1").await?.unwrap();
        assert_eq!(kept.price, 100.0);
        assert_eq!(store.list(&(), Pagination::default()).await?.len(), 1);
        Ok(())
    }

    #[tokio::test]
    async fn list_is_insertion_ordered_and_windowed() -> anyhow::Result<()> {
        let t = get_db().await?;
        let store = SeaOrmListingStore::new(t.db.clone());
        for i in 0..5 {
            store.insert(valid(&format!("P{i}"), 10.0 + i as f64)).await?;
        }

        let all = store.list(&(), Pagination::default()).await?;
        let ids: Vec<_> = all.iter().map(|l| l.plot_id.as_str()).collect();
        assert_eq!(ids, ["P0", "P1", "P2", "P3", "P4"]);

        let page = store.list(&(), Pagination::new(1, 2)).await?;
        let ids: Vec<_> = page.iter().map(|l| l.plot_id.as_str()).collect();
        assert_eq!(ids, ["P1", "P2"]);

        assert!(store.list(&(), Pagination::new(0, 0)).await?.is_empty());
        assert!(store.list(&(), Pagination::new(10, 5)).await?.is_empty());

        // stable across repeated reads
        assert_eq!(store.list(&(), Pagination::new(1, 2)).await?, page);
        Ok(())
    }
}

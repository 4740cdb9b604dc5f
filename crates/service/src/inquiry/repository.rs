use async_trait::async_trait;
use chrono::Utc;
use sea_orm::{
    ActiveModelTrait, ColumnTrait, DatabaseConnection, DbErr, EntityTrait, QueryFilter, QueryOrder, QuerySelect,
    TransactionTrait,
};

use models::inquiry::{self, ValidInquiry};

use crate::pagination::Pagination;
use crate::store::{RecordStore, StoreError};

/// Equality filters for listing inquiries.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct InquiryFilter {
    /// Exact, case-sensitive match.
    pub plot_id: Option<String>,
}

impl InquiryFilter {
    pub fn by_plot(plot_id: impl Into<String>) -> Self { Self { plot_id: Some(plot_id.into()) } }

    pub fn matches(&self, record: &inquiry::Model) -> bool {
        self.plot_id.as_deref().map_or(true, |p| record.plot_id == p)
    }
}

/// SeaORM-backed inquiry store.
#[derive(Clone)]
pub struct SeaOrmInquiryStore {
    db: DatabaseConnection,
}

impl SeaOrmInquiryStore {
    pub fn new(db: DatabaseConnection) -> Self { Self { db } }
}

#[async_trait]
impl RecordStore for SeaOrmInquiryStore {
    type Record = inquiry::Model;
    type Key = i32;
    type New = ValidInquiry;
    type Filter = InquiryFilter;

    async fn find_by_key(&self, id: &i32) -> Result<Option<inquiry::Model>, StoreError> {
        Ok(inquiry::Entity::find_by_id(*id).one(&self.db).await?)
    }

    async fn insert(&self, new: ValidInquiry) -> Result<inquiry::Model, StoreError> {
        let am = new.into_active_model(Utc::now().into());
        let model = self
            .db
            .transaction::<_, inquiry::Model, DbErr>(|txn| Box::pin(async move { am.insert(txn).await }))
            .await?;
        Ok(model)
    }

    async fn list(&self, filter: &InquiryFilter, page: Pagination) -> Result<Vec<inquiry::Model>, StoreError> {
        let mut q = inquiry::Entity::find();
        if let Some(plot_id) = &filter.plot_id {
            q = q.filter(inquiry::Column::PlotId.eq(plot_id.as_str()));
        }
        let rows = q
            .order_by_asc(inquiry::Column::Id)
            .offset(page.skip)
            .limit(page.limit)
            .all(&self.db)
            .await?;
        Ok(rows)
    }
}

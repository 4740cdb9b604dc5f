use std::sync::Arc;

use tracing::{error, info, instrument};

use models::inquiry::{self, NewInquiry};

use super::repository::InquiryFilter;
use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::store::InquiryStore;

/// Inquiries are append-only: validate, then insert unconditionally.
pub struct InquiryService<S> {
    store: Arc<S>,
}

impl<S: InquiryStore> InquiryService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    #[instrument(skip(self, input), fields(plot_id = %input.plot_id))]
    pub async fn create(&self, input: NewInquiry) -> Result<inquiry::Model, ServiceError> {
        let valid = input.validate()?;
        let model = self.store.insert(valid).await.map_err(|e| {
            error!(error = %e, "inquiry insert failed");
            ServiceError::Storage("Failed to create inquiry".into())
        })?;
        info!(id = model.id, plot_id = %model.plot_id, "inquiry_created");
        Ok(model)
    }

    #[instrument(skip(self))]
    pub async fn list(&self, filter: InquiryFilter, page: Pagination) -> Result<Vec<inquiry::Model>, ServiceError> {
        let rows = self.store.list(&filter, page).await.map_err(|e| {
            error!(error = %e, "inquiry query failed");
            ServiceError::Storage("Failed to retrieve inquiries".into())
        })?;
        info!(count = rows.len(), "listed_records");
        Ok(rows)
    }
}

use std::sync::Arc;

use tracing::{error, info, instrument, warn};

use models::listing::{self, NewListing};

use crate::errors::ServiceError;
use crate::pagination::Pagination;
use crate::store::{ListingStore, StoreError};

const CREATE_FAILED: &str = "Failed to create listing";
const LIST_FAILED: &str = "Failed to retrieve listings";

/// Listing business rules: validate, reject duplicates, persist.
pub struct ListingService<S> {
    store: Arc<S>,
}

impl<S: ListingStore> ListingService<S> {
    pub fn new(store: Arc<S>) -> Self { Self { store } }

    /// Validation happens before any store access. The existence check is an
    /// early exit only; the store's primary key decides lost races.
    #[instrument(skip(self, input), fields(plot_id = %input.plot_id))]
    pub async fn create(&self, input: NewListing) -> Result<listing::Model, ServiceError> {
        let valid = input.validate()?;
        let plot_id = valid.plot_id().to_owned();

        match self.store.find_by_key(plot_id.as_str()).await {
            Ok(Some(_)) => {
                warn!(plot_id = %plot_id, "duplicate_plot_id");
                return Err(ServiceError::duplicate_listing(&plot_id));
            }
            Ok(None) => {}
            Err(e) => {
                error!(error = %e, "listing lookup failed");
                return Err(ServiceError::Storage(CREATE_FAILED.into()));
            }
        }

        match self.store.insert(valid).await {
            Ok(model) => {
                info!(plot_id = %model.plot_id, category = %model.category, "listing_created");
                Ok(model)
            }
            Err(StoreError::Duplicate(detail)) => {
                warn!(plot_id = %plot_id, %detail, "duplicate_plot_id");
                Err(ServiceError::duplicate_listing(&plot_id))
            }
            Err(StoreError::Backend(e)) => {
                error!(error = %e, "listing insert failed");
                Err(ServiceError::Storage(CREATE_FAILED.into()))
            }
        }
    }

    #[instrument(skip(self))]
    pub async fn list(&self, page: Pagination) -> Result<Vec<listing::Model>, ServiceError> {
        let rows = self.store.list(&(), page).await.map_err(|e| {
            error!(error = %e, "listing query failed");
            ServiceError::Storage(LIST_FAILED.into())
        })?;
        info!(count = rows.len(), "listed_records");
        Ok(rows)
    }
}

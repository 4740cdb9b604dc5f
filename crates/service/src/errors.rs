use thiserror::Error;

use models::errors::{FieldErrors, ModelError};

#[derive(Debug, Error)]
pub enum ServiceError {
    #[error("validation error: {0}")]
    Validation(FieldErrors),
    #[error("conflict: {0}")]
    Conflict(String),
    /// Carries a caller-safe message only; the backend detail is logged where it happens.
    #[error("storage error: {0}")]
    Storage(String),
}

impl ServiceError {
    pub fn duplicate_listing(plot_id: &str) -> Self {
        Self::Conflict(format!("Listing with plot_id '{}' already exists", plot_id))
    }
}

impl From<ModelError> for ServiceError {
    fn from(e: ModelError) -> Self {
        match e {
            ModelError::Validation(errs) => Self::Validation(errs),
        }
    }
}

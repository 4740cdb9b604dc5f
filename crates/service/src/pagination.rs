//! Pagination utilities for service layer
//!
//! Offset/limit windowing shared by both list operations.

use crate::errors::ServiceError;
use models::errors::FieldErrors;

pub const DEFAULT_LIMIT: u64 = 100;

/// Pagination parameters
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Pagination {
    /// records to skip from the start of the ordering
    pub skip: u64,
    /// maximum records to return
    pub limit: u64,
}

impl Pagination {
    pub fn new(skip: u64, limit: u64) -> Self { Self { skip, limit } }

    /// Build from raw query values. Absent means default, negative is a validation error.
    pub fn from_query(skip: Option<i64>, limit: Option<i64>) -> Result<Self, ServiceError> {
        let mut errs = FieldErrors::new();
        let skip = non_negative("skip", skip, 0, &mut errs);
        let limit = non_negative("limit", limit, DEFAULT_LIMIT, &mut errs);
        if errs.is_empty() { Ok(Self { skip, limit }) } else { Err(ServiceError::Validation(errs)) }
    }

    /// Apply the window to an already ordered sequence.
    pub fn window<T>(&self, items: impl IntoIterator<Item = T>) -> Vec<T> {
        let skip = usize::try_from(self.skip).unwrap_or(usize::MAX);
        let limit = usize::try_from(self.limit).unwrap_or(usize::MAX);
        items.into_iter().skip(skip).take(limit).collect()
    }
}

fn non_negative(field: &'static str, value: Option<i64>, default: u64, errs: &mut FieldErrors) -> u64 {
    match value {
        None => default,
        Some(v) => u64::try_from(v).unwrap_or_else(|_| {
            errs.push(field, "must be greater than or equal to 0");
            default
        }),
    }
}

impl Default for Pagination {
    fn default() -> Self { Self { skip: 0, limit: DEFAULT_LIMIT } }
}

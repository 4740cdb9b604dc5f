//! Persistence seam shared by both services.
//!
//! A [`RecordStore`] owns the transaction discipline around a single entity:
//! `insert` commits on success and rolls back on every failure path, and a
//! primary-key collision is reported as [`StoreError::Duplicate`] so callers
//! can tell "already exists" apart from "the database is unhappy".

use async_trait::async_trait;
use sea_orm::{DbErr, SqlErr, TransactionError};
use thiserror::Error;

use models::inquiry;
use models::listing;

use crate::inquiry::repository::InquiryFilter;
use crate::pagination::Pagination;

pub mod mock;

#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("duplicate key: {0}")]
    Duplicate(String),
    #[error("backend failure: {0}")]
    Backend(String),
}

impl From<DbErr> for StoreError {
    fn from(e: DbErr) -> Self {
        match e.sql_err() {
            Some(SqlErr::UniqueConstraintViolation(detail)) => StoreError::Duplicate(detail),
            _ => StoreError::Backend(e.to_string()),
        }
    }
}

impl From<TransactionError<DbErr>> for StoreError {
    fn from(e: TransactionError<DbErr>) -> Self {
        match e {
            TransactionError::Connection(e) | TransactionError::Transaction(e) => e.into(),
        }
    }
}

/// Keyed lookup, transactional insert and ordered, windowed listing of one record type.
#[async_trait]
pub trait RecordStore: Send + Sync {
    type Record: Send;
    type Key: ?Sized + Sync;
    /// Validated input; stores never see unchecked data.
    type New: Send;
    type Filter: Send + Sync;

    async fn find_by_key(&self, key: &Self::Key) -> Result<Option<Self::Record>, StoreError>;

    /// Assign server-side fields (timestamps, generated ids) and persist in one transaction.
    async fn insert(&self, new: Self::New) -> Result<Self::Record, StoreError>;

    /// Records matching `filter` in insertion order, windowed by `page`.
    async fn list(&self, filter: &Self::Filter, page: Pagination) -> Result<Vec<Self::Record>, StoreError>;
}

/// Listings keyed by plot id, no list filter.
pub trait ListingStore:
    RecordStore<Record = listing::Model, Key = str, New = listing::ValidListing, Filter = ()>
{
}

impl<T> ListingStore for T where
    T: RecordStore<Record = listing::Model, Key = str, New = listing::ValidListing, Filter = ()>
{
}

/// Inquiries keyed by generated id, optionally filtered by plot id.
pub trait InquiryStore:
    RecordStore<Record = inquiry::Model, Key = i32, New = inquiry::ValidInquiry, Filter = InquiryFilter>
{
}

impl<T> InquiryStore for T where
    T: RecordStore<Record = inquiry::Model, Key = i32, New = inquiry::ValidInquiry, Filter = InquiryFilter>
{
}

//! Service layer providing the listing and inquiry use cases on top of models.
//! - `store` is the persistence seam (`RecordStore`) with SeaORM and in-memory implementations.
//! - `listing` / `inquiry` hold the business services, independent of HTTP.
//! - Errors are `ServiceError`; backend detail never leaves this crate.

pub mod errors;
pub mod pagination;
pub mod store;
pub mod listing;
pub mod inquiry;
#[cfg(test)]
pub mod test_support;

pub use errors::ServiceError;
pub use pagination::Pagination;
pub use store::{InquiryStore, ListingStore, RecordStore, StoreError};

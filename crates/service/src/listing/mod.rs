pub mod repository;
pub mod service;

pub use repository::SeaOrmListingStore;
pub use service::ListingService;

pub mod repository;
pub mod service;

pub use repository::{InquiryFilter, SeaOrmInquiryStore};
pub use service::InquiryService;

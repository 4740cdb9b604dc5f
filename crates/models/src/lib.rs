//! Entities and input validation for listings and inquiries.
//!
//! Input structs (`NewListing`, `NewInquiry`) are what clients send; `validate`
//! turns them into `Valid*` values, the only thing a store accepts.

pub mod errors;
pub mod db;
pub mod listing;
pub mod inquiry;

#[cfg(test)]
mod tests;

//! Shared building blocks for the listing and inquiry services:
//! response types, logging setup, Prometheus metrics and runtime helpers.

pub mod types;
pub mod utils;
pub mod metrics;
pub mod env;

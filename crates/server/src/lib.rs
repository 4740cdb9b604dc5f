pub mod descriptor;
pub mod errors;
pub mod launch;
pub mod openapi;
pub mod routes;
pub mod startup;
pub mod state;

pub use launch::launch;
pub use routes::{inquiry_router, listing_router};
pub use startup::{run, ServiceKind};

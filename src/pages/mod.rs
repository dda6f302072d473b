//! # Pages Module
//!
//! The static marketing landing page and the API banner.

pub mod handlers;
pub mod routes;

pub use routes::pages_routes;

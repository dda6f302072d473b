//! # Targeting Proxy Module
//!
//! Forwards targeting analysis and segment listing to the engine backend,
//! reshaping the analysis response for the browser. Same uniform failure
//! policy as the other proxy modules.

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::targeting_routes;

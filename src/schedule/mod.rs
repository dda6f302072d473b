//! # Schedule Proxy Module
//!
//! Forwards scheduling requests to the engine backend:
//! - Renames browser camelCase fields to the backend's snake_case
//! - Returns a static confirmation on cancel, regardless of backend body
//! - Collapses all upstream failures into a fixed-string 500

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::schedule_routes;

//! # Dashboard Module
//!
//! Serves the data behind the dashboard shell: the per-session sidebar
//! tree, the home-screen counters, the content library listing, and the
//! proxied analytics overview.

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::dashboard_routes;

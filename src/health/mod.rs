//! # System Status Module
//!
//! Exposes the background monitor's view of the external services
//! (engine backend, hosted database, Ollama) plus storage and content
//! figures from the stats endpoint.

pub mod handlers;
pub mod models;
pub mod routes;

#[cfg(test)]
mod tests;

pub use routes::health_routes;

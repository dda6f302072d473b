//! Generation proxy routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the generation proxy router
///
/// # Routes
/// - `POST /api/generate` - Submit a generation request
/// - `GET /api/generate?id=` - Poll generation status
pub fn generate_routes() -> Router {
    Router::new().route(
        "/api/generate",
        post(handlers::generate_content).get(handlers::generation_status),
    )
}

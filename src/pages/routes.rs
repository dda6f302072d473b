//! Static page routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the static pages router
///
/// # Routes
/// - `GET /` - Marketing landing page
/// - `GET /api` - Service banner
pub fn pages_routes() -> Router {
    Router::new()
        .route("/", get(handlers::landing))
        .route("/api", get(handlers::api_root))
}

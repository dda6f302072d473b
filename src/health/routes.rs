//! System status routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the system status router
///
/// # Routes
/// - `GET /api/health` - Last observed status snapshot
pub fn health_routes() -> Router {
    Router::new().route("/api/health", get(handlers::get_system_status))
}

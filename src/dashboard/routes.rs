//! Dashboard shell routes

use axum::{routing::get, Router};

use super::handlers;

/// Creates and returns the dashboard router
///
/// # Routes
/// - `GET /api/dashboard/navigation` - Sidebar tree for the session
/// - `GET /api/dashboard/overview` - Per-user counters
/// - `GET /api/library?limit=` - Recent content for the session user
/// - `GET /api/analytics` - Engine analytics overview (proxied)
pub fn dashboard_routes() -> Router {
    Router::new()
        .route("/api/dashboard/navigation", get(handlers::get_navigation))
        .route("/api/dashboard/overview", get(handlers::get_overview))
        .route("/api/library", get(handlers::get_library))
        .route("/api/analytics", get(handlers::get_analytics))
}

//! Targeting proxy routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the targeting proxy router
///
/// # Routes
/// - `POST /api/targeting` - Run targeting analysis for a content item
/// - `GET /api/targeting` - List available audience segments
pub fn targeting_routes() -> Router {
    Router::new().route(
        "/api/targeting",
        post(handlers::analyze_targeting).get(handlers::list_segments),
    )
}

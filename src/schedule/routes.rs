//! Schedule proxy routes

use axum::{routing::post, Router};

use super::handlers;

/// Creates and returns the schedule proxy router
///
/// # Routes
/// - `POST /api/schedule` - Schedule content distribution
/// - `GET /api/schedule` - List all schedules
/// - `DELETE /api/schedule?id=` - Cancel a schedule
pub fn schedule_routes() -> Router {
    Router::new().route(
        "/api/schedule",
        post(handlers::schedule_content)
            .get(handlers::list_schedules)
            .delete(handlers::cancel_schedule),
    )
}

//! Schedule proxy handlers

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{reshape_schedule, CancelQuery, SchedulePayload, ScheduleRequest};
use crate::common::{ApiError, AppState};

/// POST /api/schedule
/// Forwards a scheduling request to the engine backend with field names
/// renamed to snake_case.
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "data": { "scheduleId": "...", "status": "...", "scheduledFor": "..." }
/// }
/// ```
pub async fn schedule_content(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(req): Json<ScheduleRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let payload = SchedulePayload::from(req);

    info!(
        content_id = %payload.content_id,
        platforms = payload.platforms.len(),
        "Forwarding schedule request to engine"
    );

    match state.engine.schedule(&payload).await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "data": reshape_schedule(&data),
        }))),
        Err(e) => {
            error!(error = %e, "Schedule request failed");
            Err(ApiError::Upstream("Failed to schedule content".to_string()))
        }
    }
}

/// GET /api/schedule
/// Lists all schedules. No pagination and no per-user filter at this layer;
/// filtering is the backend's concern.
pub async fn list_schedules(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    match state.engine.list_schedules().await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "schedules": data.get("schedules").cloned().unwrap_or(serde_json::Value::Null),
        }))),
        Err(e) => {
            error!(error = %e, "Schedule list fetch failed");
            Err(ApiError::Upstream("Failed to fetch schedules".to_string()))
        }
    }
}

/// DELETE /api/schedule?id=
/// Cancels a schedule. A missing `id` short-circuits with 400 before any
/// backend call; on success the static confirmation is returned regardless
/// of the backend response body.
pub async fn cancel_schedule(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<CancelQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Schedule ID required".to_string()))?;

    let state = state_lock.read().await.clone();

    match state.engine.cancel_schedule(&id).await {
        Ok(()) => {
            info!(schedule_id = %id, "Schedule cancelled");
            Ok(Json(serde_json::json!({
                "success": true,
                "message": "Schedule cancelled",
            })))
        }
        Err(e) => {
            error!(error = %e, schedule_id = %id, "Schedule cancel failed");
            Err(ApiError::Upstream("Failed to cancel schedule".to_string()))
        }
    }
}

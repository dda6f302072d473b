//! Targeting proxy handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{reshape_targeting, TargetingPayload, TargetingRequest};
use crate::common::{ApiError, AppState};

/// POST /api/targeting
/// Forwards a targeting analysis request to the engine backend.
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "data": { "suggestions": [], "estimatedReach": 0, "recommendedTime": "..." }
/// }
/// ```
pub async fn analyze_targeting(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(req): Json<TargetingRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let payload = TargetingPayload::from(req);

    info!(
        content_id = %payload.content_id,
        segments = payload.segments.len(),
        "Forwarding targeting analysis to engine"
    );

    match state.engine.analyze_targeting(&payload).await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "data": reshape_targeting(&data),
        }))),
        Err(e) => {
            error!(error = %e, "Targeting analysis failed");
            Err(ApiError::Upstream("Failed to analyze targeting".to_string()))
        }
    }
}

/// GET /api/targeting
/// Lists the available audience segments. Forwarded with no parameters.
pub async fn list_segments(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    match state.engine.segments().await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "segments": data.get("segments").cloned().unwrap_or(serde_json::Value::Null),
        }))),
        Err(e) => {
            error!(error = %e, "Segments fetch failed");
            Err(ApiError::Upstream("Failed to fetch segments".to_string()))
        }
    }
}

//! Generation proxy handlers
//!
//! Thin forwards to the engine backend. Per the common failure policy, any
//! non-OK upstream status or network failure collapses into a fixed-string
//! 500; the upstream detail is logged and discarded.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, info};

use super::models::{reshape_generation, GenerateRequest, GenerationPayload, StatusQuery};
use crate::common::{ApiError, AppState};

/// POST /api/generate
/// Forwards a generation request to the engine backend, defaulting `style`
/// and `quality` and tagging the fixed workflow.
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "data": { "id": "...", "status": "...", "imageUrl": "...", "metadata": {} }
/// }
/// ```
pub async fn generate_content(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(req): Json<GenerateRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let payload = GenerationPayload::from(req);

    info!(
        style = %payload.style,
        quality = %payload.quality,
        "Forwarding generation request to engine"
    );

    match state.engine.generate(&payload).await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "data": reshape_generation(&data),
        }))),
        Err(e) => {
            error!(error = %e, "Generation request failed");
            Err(ApiError::Upstream("Failed to generate content".to_string()))
        }
    }
}

/// GET /api/generate?id=
/// Polls the status of a generation. A missing `id` short-circuits with 400
/// before any backend call is made.
pub async fn generation_status(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Query(query): Query<StatusQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let id = query
        .id
        .filter(|id| !id.is_empty())
        .ok_or_else(|| ApiError::BadRequest("Generation ID required".to_string()))?;

    let state = state_lock.read().await.clone();

    match state.engine.generation_status(&id).await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "data": data,
        }))),
        Err(e) => {
            error!(error = %e, generation_id = %id, "Generation status check failed");
            Err(ApiError::Upstream(
                "Failed to check generation status".to_string(),
            ))
        }
    }
}

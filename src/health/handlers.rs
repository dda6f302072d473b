//! System status handlers

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;

use super::models::SystemStatus;
use crate::common::{ApiError, AppState};

/// GET /api/health
/// Returns the monitor's last snapshot. The poller runs in the background
/// every 5 seconds; this handler never waits on a probe.
pub async fn get_system_status(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<SystemStatus>, ApiError> {
    let state = state_lock.read().await.clone();
    Ok(Json(state.monitor.snapshot().await))
}

//! Dashboard shell handlers
//!
//! Everything here is read-only: counters and rows come from the hosted
//! database service, analytics from the engine backend. Nothing is cached
//! between requests.

use axum::extract::{Extension, Json, Query};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{error, warn};

use super::models::{navigation, LibraryQuery, DEFAULT_LIBRARY_LIMIT};
use crate::auth::AuthedUser;
use crate::common::{ApiError, AppState};

/// GET /api/dashboard/navigation
/// The sidebar tree for the current session. Tier and admin status are
/// session-derived; the Content badge is the user's live content count.
pub async fn get_navigation(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = match state.supabase.get_profile(&authed.id).await {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, user_id = %authed.id, "Profile fetch failed for navigation");
            None
        }
    };

    let content_count = state.supabase.count_content(&authed.id).await.ok();

    Ok(Json(serde_json::json!({
        "success": true,
        "tier": profile.as_ref().map(|p| p.subscription_tier),
        "isAdmin": authed.is_admin,
        "menu": navigation(authed.is_admin, content_count),
    })))
}

/// GET /api/dashboard/overview
/// Per-user counters for the dashboard home screen.
pub async fn get_overview(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let (profile, content_count, scheduled_count, upcoming) = tokio::join!(
        state.supabase.get_profile(&authed.id),
        state.supabase.count_content(&authed.id),
        state.supabase.count_scheduled(&authed.id),
        state.supabase.scheduled_posts(&authed.id),
    );

    let profile = profile.map_err(|e| {
        error!(error = %e, user_id = %authed.id, "Profile fetch failed for overview");
        ApiError::InternalServer("failed to load profile".to_string())
    })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "overview": {
            "tier": profile.as_ref().map(|p| p.subscription_tier),
            "creditsRemaining": profile.as_ref().map(|p| p.credits_remaining),
            "totalGenerated": profile.as_ref().map(|p| p.total_generated),
            "contentCount": content_count.unwrap_or(0),
            "scheduledCount": scheduled_count.unwrap_or(0),
        },
        "upcoming": upcoming.unwrap_or_default(),
    })))
}

/// GET /api/library?limit=
/// Recent content rows for the session user, newest first.
pub async fn get_library(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
    Query(query): Query<LibraryQuery>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();
    let limit = query.limit.unwrap_or(DEFAULT_LIBRARY_LIMIT);

    let content = state
        .supabase
        .recent_content(&authed.id, limit)
        .await
        .map_err(|e| {
            error!(error = %e, user_id = %authed.id, "Content fetch failed for library");
            ApiError::InternalServer("failed to load content".to_string())
        })?;

    Ok(Json(serde_json::json!({
        "success": true,
        "content": content,
    })))
}

/// GET /api/analytics
/// Proxies the engine's aggregated analytics overview. Same uniform failure
/// policy as the other proxy routes.
pub async fn get_analytics(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    match state.engine.analytics_overview().await {
        Ok(data) => Ok(Json(serde_json::json!({
            "success": true,
            "data": data,
        }))),
        Err(e) => {
            error!(error = %e, "Analytics fetch failed");
            Err(ApiError::Upstream("Failed to fetch analytics".to_string()))
        }
    }
}

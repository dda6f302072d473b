//! Authentication handlers
//!
//! Both operations are delegated to the hosted auth service; this layer
//! only forwards credentials, creates the companion profile row at sign-up,
//! and surfaces auth-service errors verbatim. There is no server-side
//! session store: clients hold the auth service's own token.

use axum::extract::{Extension, Json};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, error, info, warn};

use super::extractors::AuthedUser;
use super::models::{default_name, LoginRequest, SignupRequest, SIGNUP_CREDITS, SIGNUP_TIER};
use crate::common::{safe_email_log, ApiError, AppState};
use crate::services::supabase::NewProfile;
use crate::services::SupabaseError;

/// POST /api/auth/login
/// Password sign-in against the hosted auth service.
///
/// # Response
/// ```json
/// {
///   "success": true,
///   "session": { "access_token": "...", "refresh_token": "...", "expires_in": 3600 },
///   "user": { "id": "...", "email": "...", "profile": { ... } }
/// }
/// ```
pub async fn login(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(req): Json<LoginRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    info!(email = %safe_email_log(&req.email), "Received login request");

    let session = match state.supabase.sign_in(&req.email, &req.password).await {
        Ok(s) => s,
        Err(SupabaseError::Auth(msg)) => {
            warn!(email = %safe_email_log(&req.email), "Sign-in rejected by auth service");
            return Err(ApiError::AuthService(msg));
        }
        Err(e) => {
            error!(error = %e, "Auth service unreachable during sign-in");
            return Err(ApiError::InternalServer(
                "auth service unavailable".to_string(),
            ));
        }
    };

    // Best-effort profile fetch; a missing row does not block the login
    let profile = match state.supabase.get_profile_by_email(&session.user.email).await {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, "Profile fetch failed during login");
            None
        }
    };

    info!(
        user_id = %session.user.id,
        email = %safe_email_log(&session.user.email),
        "User signed in"
    );

    Ok(Json(serde_json::json!({
        "success": true,
        "session": {
            "access_token": session.access_token,
            "refresh_token": session.refresh_token,
            "expires_in": session.expires_in,
        },
        "user": {
            "id": session.user.id,
            "email": session.user.email,
            "profile": profile,
        },
    })))
}

/// POST /api/auth/signup
/// Sign-up against the hosted auth service, then create the companion
/// profile row (free tier, 10 starting credits). A duplicate-key conflict
/// on the profile insert is treated as a no-op: the account already had a
/// profile and the sign-up still reports success.
pub async fn signup(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    Json(req): Json<SignupRequest>,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    info!(email = %safe_email_log(&req.email), "Received signup request");

    let user = match state
        .supabase
        .sign_up(&req.email, &req.password, req.name.as_deref())
        .await
    {
        Ok(u) => u,
        Err(SupabaseError::Auth(msg)) => {
            warn!(email = %safe_email_log(&req.email), "Sign-up rejected by auth service");
            return Err(ApiError::AuthService(msg));
        }
        Err(e) => {
            error!(error = %e, "Auth service unreachable during sign-up");
            return Err(ApiError::InternalServer(
                "auth service unavailable".to_string(),
            ));
        }
    };

    let profile = NewProfile {
        id: user.id.clone(),
        email: req.email.clone(),
        name: req
            .name
            .filter(|n| !n.trim().is_empty())
            .unwrap_or_else(|| default_name(&req.email)),
        subscription_tier: SIGNUP_TIER,
        credits_remaining: SIGNUP_CREDITS,
        total_generated: 0,
    };

    match state.supabase.insert_profile(&profile).await {
        Ok(()) => {
            info!(user_id = %user.id, "Profile row created at sign-up");
        }
        Err(SupabaseError::DuplicateKey) => {
            // Re-signup for an existing account; the profile already exists
            debug!(user_id = %user.id, "Profile already exists, skipping insert");
        }
        Err(e) => {
            // Profile creation is best-effort; log and keep the success path
            error!(error = %e, user_id = %user.id, "Profile creation failed at sign-up");
        }
    }

    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Account created successfully! Please check your email to verify your account.",
    })))
}

/// GET /api/me
/// Returns the authenticated session identity plus a freshly fetched
/// profile row.
pub async fn me_handler(
    Extension(state_lock): Extension<Arc<RwLock<AppState>>>,
    authed: AuthedUser,
) -> Result<Json<serde_json::Value>, ApiError> {
    let state = state_lock.read().await.clone();

    let profile = match state.supabase.get_profile(&authed.id).await {
        Ok(p) => p,
        Err(e) => {
            warn!(error = %e, user_id = %authed.id, "Profile fetch failed for /api/me");
            None
        }
    };

    Ok(Json(serde_json::json!({
        "success": true,
        "user": {
            "id": authed.id,
            "email": authed.email,
            "isAdmin": authed.is_admin,
            "profile": profile,
        },
    })))
}

/// POST /api/auth/logout
/// The session token lives with the client; logout is a client-side token
/// discard and this endpoint only confirms the request.
pub async fn logout_handler(_authed: AuthedUser) -> Result<Json<serde_json::Value>, ApiError> {
    info!("User logout successful");
    Ok(Json(serde_json::json!({
        "success": true,
        "message": "Logout successful",
    })))
}

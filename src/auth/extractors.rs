//! Authentication extractors for Axum

use async_trait::async_trait;
use axum::{
    extract::{Extension, FromRequestParts},
    http::{header::AUTHORIZATION, request::Parts},
};
use jsonwebtoken::{decode, Algorithm, DecodingKey, Validation};
use std::sync::Arc;
use tokio::sync::RwLock;
use tracing::{debug, warn};

use super::models::Claims;
use crate::common::{safe_email_log, ApiError, AppState};

/// Authenticated user extractor
///
/// Validates the bearer access token issued by the hosted auth service.
/// When `SUPABASE_JWT_SECRET` is configured, the token is verified locally
/// as HS256; otherwise the auth service itself is asked to resolve it.
/// Admin status comes from the `ADMIN_EMAILS` allow-list.
///
/// The session is the auth service's own token; nothing about it is cached
/// or duplicated server-side.
#[derive(Debug)]
pub struct AuthedUser {
    pub id: String,
    pub email: String,
    pub is_admin: bool,
}

#[async_trait]
impl<S> FromRequestParts<S> for AuthedUser
where
    S: Send + Sync,
{
    type Rejection = ApiError;

    async fn from_request_parts(parts: &mut Parts, state: &S) -> Result<Self, Self::Rejection> {
        let Extension(state_lock): Extension<Arc<RwLock<AppState>>> =
            Extension::from_request_parts(parts, state)
                .await
                .map_err(|_| ApiError::InternalServer("missing app state".to_string()))?;

        let app_state = state_lock.read().await.clone();

        // Extract Bearer token from Authorization header
        let token = parts
            .headers
            .get(AUTHORIZATION)
            .and_then(|h| h.to_str().ok())
            .map(|s| s.to_string());

        let token = match token {
            Some(t) => t,
            None => {
                warn!("Authentication failed: missing Authorization header");
                return Err(ApiError::Unauthorized("missing auth".into()));
            }
        };

        // Handle "Bearer <token>" format or raw token
        let bare_token = if let Some(rest) = token.strip_prefix("Bearer ") {
            rest.to_string()
        } else {
            token
        };

        let (id, email) = match &app_state.jwt_secret {
            Some(secret) => {
                // Local HS256 verification against the project's JWT secret
                let decoded = match decode::<Claims>(
                    &bare_token,
                    &DecodingKey::from_secret(secret.as_bytes()),
                    &Validation::new(Algorithm::HS256),
                ) {
                    Ok(d) => d,
                    Err(e) => {
                        warn!(error = %e, "Access token validation failed");
                        return Err(ApiError::Unauthorized("invalid token".into()));
                    }
                };

                let email = decoded.claims.email.unwrap_or_default();
                (decoded.claims.sub, email)
            }
            None => {
                // No local secret configured: ask the auth service
                let user = app_state.supabase.auth_user(&bare_token).await.map_err(|e| {
                    warn!(error = %e, "Auth service rejected access token");
                    ApiError::Unauthorized("invalid token".into())
                })?;
                (user.id, user.email)
            }
        };

        let is_admin = app_state.admin_emails.contains(&email.to_lowercase());
        debug!(
            user_id = %id,
            email = %safe_email_log(&email),
            is_admin = is_admin,
            "Authenticated session resolved"
        );

        Ok(AuthedUser {
            id,
            email,
            is_admin,
        })
    }
}

// src/services/supabase.rs
//! Client for the hosted Supabase auth/database service.
//!
//! Auth goes through the GoTrue endpoints (`/auth/v1/*`) and row access
//! through PostgREST (`/rest/v1/*`). All entities are owned and persisted
//! by the hosted service; this client never enforces invariants locally
//! and keeps no cache of what it reads.

use reqwest::{Client, StatusCode};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::{debug, warn};

use crate::common::safe_email_log;

#[derive(Debug, thiserror::Error)]
pub enum SupabaseError {
    #[error("request failed: {0}")]
    Request(#[from] reqwest::Error),

    /// Error message reported by the auth service, kept verbatim so the
    /// handler can surface it to the user unchanged.
    #[error("{0}")]
    Auth(String),

    /// Postgres unique-constraint violation (code 23505) on an insert
    #[error("duplicate key")]
    DuplicateKey,

    #[error("unexpected response: {0}")]
    Unexpected(String),
}

// ---- Database row types ----
// These mirror the `profiles`, `content` and `schedules` tables held by the
// hosted service. Status transitions happen remotely and are only observed
// here by re-fetching.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SubscriptionTier {
    Free,
    Basic,
    Pro,
    Enterprise,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ContentStatus {
    Pending,
    Processing,
    Completed,
    Failed,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ScheduleStatus {
    Scheduled,
    Processing,
    Completed,
    Cancelled,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Profile {
    pub id: String,
    pub email: String,
    pub name: Option<String>,
    pub subscription_tier: SubscriptionTier,
    pub credits_remaining: i64,
    pub total_generated: i64,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Content {
    pub id: String,
    pub user_id: String,
    pub prompt: String,
    pub image_url: Option<String>,
    pub style: String,
    pub quality: String,
    pub status: ContentStatus,
    #[serde(default)]
    pub metadata: Value,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Schedule {
    pub id: String,
    pub content_id: String,
    pub user_id: String,
    pub scheduled_for: String,
    pub platforms: Vec<String>,
    pub target_segments: Vec<String>,
    pub status: ScheduleStatus,
    pub created_at: Option<String>,
}

/// Row payload for the profile created at sign-up
#[derive(Debug, Serialize)]
pub struct NewProfile {
    pub id: String,
    pub email: String,
    pub name: String,
    pub subscription_tier: SubscriptionTier,
    pub credits_remaining: i64,
    pub total_generated: i64,
}

// ---- Auth types ----

#[derive(Debug, Clone, Deserialize)]
pub struct AuthUser {
    pub id: String,
    pub email: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct AuthSession {
    pub access_token: String,
    pub refresh_token: Option<String>,
    pub expires_in: Option<i64>,
    pub user: AuthUser,
}

/// Client for the hosted Supabase project
pub struct SupabaseService {
    http: Client,
    base_url: String,
    anon_key: String,
}

impl SupabaseService {
    pub fn new(http: Client, base_url: String, anon_key: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            anon_key,
            http,
        }
    }

    /// POST /auth/v1/token?grant_type=password - password sign-in
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<AuthSession, SupabaseError> {
        debug!(email = %safe_email_log(email), "Signing in via GoTrue");

        let url = format!("{}/auth/v1/token?grant_type=password", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({ "email": email, "password": password }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::auth_error(status, resp.json::<Value>().await.ok()));
        }

        let session = resp.json::<AuthSession>().await.map_err(|e| {
            SupabaseError::Unexpected(format!("malformed token response: {}", e))
        })?;
        Ok(session)
    }

    /// POST /auth/v1/signup - password sign-up
    ///
    /// Depending on the project's email-confirmation setting, GoTrue returns
    /// either the bare user object or a full session wrapping one.
    pub async fn sign_up(
        &self,
        email: &str,
        password: &str,
        name: Option<&str>,
    ) -> Result<AuthUser, SupabaseError> {
        debug!(email = %safe_email_log(email), "Signing up via GoTrue");

        let url = format!("{}/auth/v1/signup", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .json(&serde_json::json!({
                "email": email,
                "password": password,
                "data": { "name": name },
            }))
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::auth_error(status, resp.json::<Value>().await.ok()));
        }

        let body = resp.json::<Value>().await.map_err(|e| {
            SupabaseError::Unexpected(format!("malformed signup response: {}", e))
        })?;

        let user_value = if body.get("user").map_or(false, |u| u.is_object()) {
            body["user"].clone()
        } else {
            body
        };

        serde_json::from_value::<AuthUser>(user_value)
            .map_err(|e| SupabaseError::Unexpected(format!("signup response missing user: {}", e)))
    }

    /// GET /auth/v1/user - resolve the user behind an access token
    pub async fn auth_user(&self, access_token: &str) -> Result<AuthUser, SupabaseError> {
        let url = format!("{}/auth/v1/user", self.base_url);
        let resp = self
            .http
            .get(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(Self::auth_error(status, resp.json::<Value>().await.ok()));
        }

        resp.json::<AuthUser>()
            .await
            .map_err(|e| SupabaseError::Unexpected(format!("malformed user response: {}", e)))
    }

    /// Extract the human-readable message from a GoTrue error body
    ///
    /// GoTrue has used both `{error, error_description}` and `{code, msg}`
    /// shapes across versions; fall back to the status code when neither is
    /// present.
    fn auth_error(status: StatusCode, body: Option<Value>) -> SupabaseError {
        let message = body
            .as_ref()
            .and_then(|b| {
                b.get("error_description")
                    .or_else(|| b.get("msg"))
                    .or_else(|| b.get("message"))
                    .or_else(|| b.get("error"))
            })
            .and_then(|v| v.as_str())
            .map(str::to_string)
            .unwrap_or_else(|| format!("auth service returned status {}", status));
        SupabaseError::Auth(message)
    }

    // ---- PostgREST row access ----

    fn rest(&self, path_and_query: &str) -> reqwest::RequestBuilder {
        let url = format!("{}/rest/v1/{}", self.base_url, path_and_query);
        self.http
            .get(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
    }

    /// Fetch a profile row by primary key
    pub async fn get_profile(&self, user_id: &str) -> Result<Option<Profile>, SupabaseError> {
        let query = format!(
            "profiles?id=eq.{}&select=*&limit=1",
            urlencoding::encode(user_id)
        );
        self.fetch_one(&query).await
    }

    /// Fetch a profile row by email
    pub async fn get_profile_by_email(&self, email: &str) -> Result<Option<Profile>, SupabaseError> {
        let query = format!(
            "profiles?email=eq.{}&select=*&limit=1",
            urlencoding::encode(email)
        );
        self.fetch_one(&query).await
    }

    /// Insert the profile row created at sign-up
    ///
    /// A unique-constraint violation maps to `DuplicateKey` so the sign-up
    /// handler can treat a pre-existing profile as a no-op.
    pub async fn insert_profile(&self, profile: &NewProfile) -> Result<(), SupabaseError> {
        let url = format!("{}/rest/v1/profiles", self.base_url);
        let resp = self
            .http
            .post(&url)
            .header("apikey", &self.anon_key)
            .bearer_auth(&self.anon_key)
            .header("Prefer", "return=minimal")
            .json(profile)
            .send()
            .await?;

        let status = resp.status();
        if status.is_success() {
            return Ok(());
        }

        let body = resp.json::<Value>().await.unwrap_or(Value::Null);
        if body.get("code").and_then(|c| c.as_str()) == Some("23505") {
            return Err(SupabaseError::DuplicateKey);
        }

        warn!(status = %status, body = %body, "Profile insert rejected by PostgREST");
        Err(SupabaseError::Unexpected(format!(
            "profile insert failed with status {}",
            status
        )))
    }

    /// Most recent content rows for a user, newest first
    pub async fn recent_content(
        &self,
        user_id: &str,
        limit: usize,
    ) -> Result<Vec<Content>, SupabaseError> {
        let query = format!(
            "content?user_id=eq.{}&select=*&order=created_at.desc&limit={}",
            urlencoding::encode(user_id),
            limit
        );
        self.fetch_rows(&query).await
    }

    /// Total content rows for a user
    pub async fn count_content(&self, user_id: &str) -> Result<i64, SupabaseError> {
        let query = format!("content?user_id=eq.{}&select=id", urlencoding::encode(user_id));
        self.count_rows(&query).await
    }

    /// Upcoming scheduled posts for a user, soonest first
    pub async fn scheduled_posts(&self, user_id: &str) -> Result<Vec<Schedule>, SupabaseError> {
        let query = format!(
            "schedules?user_id=eq.{}&status=eq.scheduled&select=*&order=scheduled_for.asc",
            urlencoding::encode(user_id)
        );
        self.fetch_rows(&query).await
    }

    /// Schedules still in the `scheduled` state for a user
    pub async fn count_scheduled(&self, user_id: &str) -> Result<i64, SupabaseError> {
        let query = format!(
            "schedules?user_id=eq.{}&status=eq.scheduled&select=id",
            urlencoding::encode(user_id)
        );
        self.count_rows(&query).await
    }

    async fn fetch_one<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<Option<T>, SupabaseError> {
        let mut rows: Vec<T> = self.fetch_rows(query).await?;
        Ok(if rows.is_empty() {
            None
        } else {
            Some(rows.remove(0))
        })
    }

    async fn fetch_rows<T: serde::de::DeserializeOwned>(
        &self,
        query: &str,
    ) -> Result<Vec<T>, SupabaseError> {
        let resp = self.rest(query).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(SupabaseError::Unexpected(format!(
                "row fetch failed with status {}",
                status
            )));
        }
        resp.json::<Vec<T>>()
            .await
            .map_err(|e| SupabaseError::Unexpected(format!("malformed row response: {}", e)))
    }

    /// Exact row count via PostgREST's `content-range` header
    async fn count_rows(&self, query: &str) -> Result<i64, SupabaseError> {
        let resp = self
            .rest(query)
            .header("Prefer", "count=exact")
            .header("Range", "0-0")
            .send()
            .await?;

        let status = resp.status();
        if !status.is_success() {
            return Err(SupabaseError::Unexpected(format!(
                "count failed with status {}",
                status
            )));
        }

        let header = resp
            .headers()
            .get("content-range")
            .and_then(|v| v.to_str().ok())
            .unwrap_or("");

        parse_content_range(header).ok_or_else(|| {
            SupabaseError::Unexpected(format!("unparseable content-range header: {:?}", header))
        })
    }
}

/// Parse the total from a PostgREST `content-range` header value
/// (e.g. `0-9/57` or `*/0`)
pub(crate) fn parse_content_range(value: &str) -> Option<i64> {
    value.rsplit('/').next()?.parse::<i64>().ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_parse_content_range() {
        assert_eq!(parse_content_range("0-9/57"), Some(57));
        assert_eq!(parse_content_range("*/0"), Some(0));
        assert_eq!(parse_content_range(""), None);
        assert_eq!(parse_content_range("0-9/*"), None);
    }

    #[test]
    fn test_subscription_tier_wire_format() {
        assert_eq!(
            serde_json::to_value(SubscriptionTier::Enterprise).unwrap(),
            json!("enterprise")
        );
        let tier: SubscriptionTier = serde_json::from_value(json!("free")).unwrap();
        assert_eq!(tier, SubscriptionTier::Free);
    }

    #[test]
    fn test_profile_row_deserializes() {
        let profile: Profile = serde_json::from_value(json!({
            "id": "user-1",
            "email": "test@example.com",
            "name": "Test User",
            "subscription_tier": "pro",
            "credits_remaining": 42,
            "total_generated": 7,
            "created_at": "2024-01-01T00:00:00Z",
            "updated_at": "2024-01-02T00:00:00Z",
        }))
        .expect("profile row should deserialize");

        assert_eq!(profile.subscription_tier, SubscriptionTier::Pro);
        assert_eq!(profile.credits_remaining, 42);
    }

    #[test]
    fn test_content_row_metadata_defaults() {
        // PostgREST may omit metadata entirely; the field defaults to null
        let content: Content = serde_json::from_value(json!({
            "id": "content-1",
            "user_id": "user-1",
            "prompt": "a cat",
            "image_url": null,
            "style": "photorealistic",
            "quality": "standard",
            "status": "pending",
            "created_at": null,
            "updated_at": null,
        }))
        .expect("content row should deserialize");

        assert_eq!(content.status, ContentStatus::Pending);
        assert!(content.metadata.is_null());
    }

    #[test]
    fn test_schedule_row_deserializes() {
        let schedule: Schedule = serde_json::from_value(json!({
            "id": "sched-1",
            "content_id": "content-1",
            "user_id": "user-1",
            "scheduled_for": "2024-01-15T14:00:00Z",
            "platforms": ["instagram"],
            "target_segments": ["tech-18-24"],
            "status": "scheduled",
            "created_at": "2024-01-10T00:00:00Z",
        }))
        .expect("schedule row should deserialize");

        assert_eq!(schedule.status, ScheduleStatus::Scheduled);
        assert_eq!(schedule.platforms, vec!["instagram"]);
    }

    #[test]
    fn test_gotrue_error_message_shapes() {
        // Both historical GoTrue error shapes surface their message verbatim
        let err = SupabaseService::auth_error(
            StatusCode::BAD_REQUEST,
            Some(json!({ "error": "invalid_grant", "error_description": "Invalid login credentials" })),
        );
        assert!(matches!(err, SupabaseError::Auth(msg) if msg == "Invalid login credentials"));

        let err = SupabaseService::auth_error(
            StatusCode::UNPROCESSABLE_ENTITY,
            Some(json!({ "code": 422, "msg": "Password should be at least 6 characters" })),
        );
        assert!(
            matches!(err, SupabaseError::Auth(msg) if msg == "Password should be at least 6 characters")
        );

        let err = SupabaseService::auth_error(StatusCode::BAD_GATEWAY, None);
        assert!(matches!(err, SupabaseError::Auth(msg) if msg.contains("502")));
    }
}

// src/services/engine.rs
//! Thin HTTP client for the OnlyEngine FastAPI backend.
//!
//! Every call is a single forward with no retry, no caching and no
//! idempotency key; callers collapse all failures into a fixed per-route
//! message, so this client only distinguishes "bad status" from "network
//! error" for logging purposes.

use reqwest::Client;
use serde::Serialize;
use serde_json::Value;
use tracing::debug;

#[derive(Debug, thiserror::Error)]
pub enum EngineError {
    #[error("engine request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("engine returned status {0}")]
    Status(reqwest::StatusCode),
}

/// Client for the content generation / scheduling / targeting backend
pub struct EngineClient {
    http: Client,
    base_url: String,
}

impl EngineClient {
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
        }
    }

    async fn get_json(&self, path: &str) -> Result<Value, EngineError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "GET to engine backend");

        let resp = self.http.get(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EngineError::Status(status));
        }
        Ok(resp.json::<Value>().await?)
    }

    async fn post_json<T: Serialize + ?Sized>(
        &self,
        path: &str,
        payload: &T,
    ) -> Result<Value, EngineError> {
        let url = format!("{}{}", self.base_url, path);
        debug!(url = %url, "POST to engine backend");

        let resp = self.http.post(&url).json(payload).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EngineError::Status(status));
        }
        Ok(resp.json::<Value>().await?)
    }

    /// POST /api/generate - submit a generation request
    pub async fn generate<T: Serialize>(&self, payload: &T) -> Result<Value, EngineError> {
        self.post_json("/api/generate", payload).await
    }

    /// GET /api/generate/{id} - poll the status of a generation
    pub async fn generation_status(&self, id: &str) -> Result<Value, EngineError> {
        let path = format!("/api/generate/{}", urlencoding::encode(id));
        self.get_json(&path).await
    }

    /// POST /api/schedule - schedule content distribution
    pub async fn schedule<T: Serialize>(&self, payload: &T) -> Result<Value, EngineError> {
        self.post_json("/api/schedule", payload).await
    }

    /// GET /api/schedule/list - list all schedules (no pagination upstream)
    pub async fn list_schedules(&self) -> Result<Value, EngineError> {
        self.get_json("/api/schedule/list").await
    }

    /// DELETE /api/schedule/{id} - cancel a schedule
    ///
    /// The backend response body is discarded; callers report a static
    /// confirmation on success.
    pub async fn cancel_schedule(&self, id: &str) -> Result<(), EngineError> {
        let url = format!(
            "{}/api/schedule/{}",
            self.base_url,
            urlencoding::encode(id)
        );
        debug!(url = %url, "DELETE to engine backend");

        let resp = self.http.delete(&url).send().await?;
        let status = resp.status();
        if !status.is_success() {
            return Err(EngineError::Status(status));
        }
        Ok(())
    }

    /// POST /api/targeting/analyze - run targeting analysis for a content item
    pub async fn analyze_targeting<T: Serialize>(&self, payload: &T) -> Result<Value, EngineError> {
        self.post_json("/api/targeting/analyze", payload).await
    }

    /// GET /api/targeting/segments - list available audience segments
    pub async fn segments(&self) -> Result<Value, EngineError> {
        self.get_json("/api/targeting/segments").await
    }

    /// GET /api/analytics/overview - aggregated analytics figures
    pub async fn analytics_overview(&self) -> Result<Value, EngineError> {
        self.get_json("/api/analytics/overview").await
    }
}

// src/services/monitor.rs
//! Background poller for the status/stats backend.
//!
//! Every tick fires the three service probes concurrently plus one detailed
//! stats fetch, then swaps the snapshot. Each probe failure is caught
//! individually and mapped to `offline`; there is no backoff, and a slow
//! probe does not hold up the next tick (each refresh runs detached).

use reqwest::Client;
use serde_json::Value;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tracing::{debug, info, warn};

use crate::health::models::{
    ContentFigures, ServiceState, StorageFigures, SystemStatus, STORAGE_TOTAL_BYTES,
};

/// Refresh cadence for the dashboard status panel
pub const POLL_INTERVAL: Duration = Duration::from_secs(5);

pub struct StatusMonitor {
    http: Client,
    base_url: String,
    snapshot: RwLock<SystemStatus>,
}

impl StatusMonitor {
    pub fn new(http: Client, base_url: String) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            http,
            snapshot: RwLock::new(SystemStatus::default()),
        }
    }

    /// Last snapshot; never blocks on an in-flight probe
    pub async fn snapshot(&self) -> SystemStatus {
        self.snapshot.read().await.clone()
    }

    /// Spawn the polling loop
    pub fn start(self: Arc<Self>) {
        info!(base_url = %self.base_url, "Starting system status monitor");
        tokio::spawn(async move {
            let mut interval = tokio::time::interval(POLL_INTERVAL);
            loop {
                interval.tick().await;
                let monitor = self.clone();
                // Detached so an unresponsive backend cannot delay the
                // next tick; overlapping refreshes only race on the swap.
                tokio::spawn(async move {
                    monitor.refresh().await;
                });
            }
        });
    }

    /// Run all probes once and swap the snapshot
    pub async fn refresh(&self) {
        let (backend, db_probe, ollama_probe) = tokio::join!(
            self.probe("/api/stats"),
            self.probe("/api/test-db"),
            self.probe_ollama(),
        );

        let stats = self.fetch_stats().await;
        let status = build_status(backend, db_probe, ollama_probe, stats.as_ref());

        debug!(
            backend = ?status.backend,
            database = ?status.database,
            ollama = ?status.ollama,
            "System status refreshed"
        );

        *self.snapshot.write().await = status;
    }

    /// Plain reachability probe: OK status means online, any other status
    /// means error, a network failure means offline
    async fn probe(&self, path: &str) -> ServiceState {
        let url = format!("{}{}", self.base_url, path);
        match self.http.get(&url).send().await {
            Ok(resp) if resp.status().is_success() => ServiceState::Online,
            Ok(resp) => {
                warn!(url = %url, status = %resp.status(), "Status probe returned error");
                ServiceState::Error
            }
            Err(_) => ServiceState::Offline,
        }
    }

    /// The Ollama probe reports success in its JSON body, not the status code
    async fn probe_ollama(&self) -> ServiceState {
        let url = format!("{}/api/test-ollama", self.base_url);
        match self.http.get(&url).send().await {
            Ok(resp) => match resp.json::<Value>().await {
                Ok(body) if body.get("success").and_then(|v| v.as_bool()) == Some(true) => {
                    ServiceState::Online
                }
                _ => ServiceState::Error,
            },
            Err(_) => ServiceState::Offline,
        }
    }

    async fn fetch_stats(&self) -> Option<Value> {
        let url = format!("{}/api/stats", self.base_url);
        let resp = self.http.get(&url).send().await.ok()?;
        if !resp.status().is_success() {
            return None;
        }
        resp.json::<Value>().await.ok()
    }
}

/// Fold the probe results and the stats payload into a snapshot
///
/// The stats payload, when available, is authoritative for the database and
/// Ollama states (`supabase_status` / `ollama_status` fields); the direct
/// probes are the fallback when the stats fetch itself failed.
pub fn build_status(
    backend: ServiceState,
    db_probe: ServiceState,
    ollama_probe: ServiceState,
    stats: Option<&Value>,
) -> SystemStatus {
    let inner = stats.and_then(|s| s.get("stats"));

    let database = match inner.and_then(|s| s.get("supabase_status")).and_then(Value::as_str) {
        Some("online") => ServiceState::Online,
        Some(_) => ServiceState::Offline,
        None => db_probe,
    };

    let ollama = match inner.and_then(|s| s.get("ollama_status")).and_then(Value::as_str) {
        Some("online") => ServiceState::Online,
        Some("error") => ServiceState::Error,
        Some(_) => ServiceState::Offline,
        None => ollama_probe,
    };

    let storage_used = inner
        .and_then(|s| s.get("storage_used"))
        .and_then(Value::as_u64)
        .unwrap_or(0);

    let total_content = inner
        .and_then(|s| s.get("total_content"))
        .and_then(Value::as_i64)
        .unwrap_or(0);

    SystemStatus {
        backend,
        database,
        ollama,
        storage: StorageFigures {
            used: storage_used,
            total: STORAGE_TOTAL_BYTES,
            percentage: (storage_used as f64 / STORAGE_TOTAL_BYTES as f64) * 100.0,
        },
        content: ContentFigures {
            total: total_content,
            processing: 0,
            completed: total_content,
        },
        checked_at: Some(chrono::Utc::now()),
    }
}

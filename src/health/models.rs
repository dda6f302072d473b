//! System status data models

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Probe result for one external collaborator
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ServiceState {
    /// Reachable and reporting success
    Online,
    /// Unreachable (network failure)
    Offline,
    /// Reachable but reporting a failure
    Error,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct StorageFigures {
    pub used: u64,
    pub total: u64,
    pub percentage: f64,
}

#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
pub struct ContentFigures {
    pub total: i64,
    pub processing: i64,
    pub completed: i64,
}

/// Last observed snapshot of the external services
///
/// No synthetic CPU/memory percentages; only figures actually present
/// in the stats payload are reported.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SystemStatus {
    pub backend: ServiceState,
    pub database: ServiceState,
    pub ollama: ServiceState,
    pub storage: StorageFigures,
    pub content: ContentFigures,
    pub checked_at: Option<DateTime<Utc>>,
}

/// Fixed storage capacity reported by the dashboard (10 GiB)
pub const STORAGE_TOTAL_BYTES: u64 = 10 * 1024 * 1024 * 1024;

impl Default for SystemStatus {
    fn default() -> Self {
        Self {
            backend: ServiceState::Offline,
            database: ServiceState::Offline,
            ollama: ServiceState::Offline,
            storage: StorageFigures {
                used: 0,
                total: STORAGE_TOTAL_BYTES,
                percentage: 0.0,
            },
            content: ContentFigures {
                total: 0,
                processing: 0,
                completed: 0,
            },
            checked_at: None,
        }
    }
}

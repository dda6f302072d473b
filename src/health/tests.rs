//! Tests for system status module
//!
//! These tests verify the snapshot folding rules:
//! - Stats payload fields are authoritative over the direct probes
//! - Probe results are the fallback when the stats fetch failed
//! - Storage percentage and serialized wire shape

#[cfg(test)]
mod tests {
    use super::super::models::*;
    use crate::services::monitor::build_status;
    use serde_json::json;

    #[test]
    fn test_build_status_prefers_stats_payload() {
        let stats = json!({
            "stats": {
                "supabase_status": "online",
                "ollama_status": "error",
                "storage_used": 1073741824u64,
                "total_content": 42,
            }
        });

        let status = build_status(
            ServiceState::Online,
            ServiceState::Offline, // direct probe disagrees; stats wins
            ServiceState::Online,
            Some(&stats),
        );

        assert_eq!(status.backend, ServiceState::Online);
        assert_eq!(status.database, ServiceState::Online);
        assert_eq!(status.ollama, ServiceState::Error);
        assert_eq!(status.storage.used, 1073741824);
        assert_eq!(status.content.total, 42);
        assert_eq!(status.content.completed, 42);
    }

    #[test]
    fn test_build_status_falls_back_to_probes() {
        let status = build_status(
            ServiceState::Offline,
            ServiceState::Error,
            ServiceState::Offline,
            None,
        );

        assert_eq!(status.backend, ServiceState::Offline);
        assert_eq!(status.database, ServiceState::Error);
        assert_eq!(status.ollama, ServiceState::Offline);
        assert_eq!(status.storage.used, 0);
        assert_eq!(status.content.total, 0);
    }

    #[test]
    fn test_storage_percentage_of_fixed_capacity() {
        let stats = json!({
            "stats": { "storage_used": STORAGE_TOTAL_BYTES / 2 }
        });

        let status = build_status(
            ServiceState::Online,
            ServiceState::Online,
            ServiceState::Online,
            Some(&stats),
        );

        assert_eq!(status.storage.total, STORAGE_TOTAL_BYTES);
        assert!((status.storage.percentage - 50.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_default_snapshot_is_all_offline() {
        let status = SystemStatus::default();

        assert_eq!(status.backend, ServiceState::Offline);
        assert_eq!(status.database, ServiceState::Offline);
        assert_eq!(status.ollama, ServiceState::Offline);
        assert!(status.checked_at.is_none());
    }

    #[test]
    fn test_snapshot_wire_shape_is_camel_case() {
        let value = serde_json::to_value(SystemStatus::default())
            .expect("snapshot should serialize");

        assert_eq!(value["backend"], "offline");
        assert!(value.get("checkedAt").is_some());
        assert_eq!(value["storage"]["total"], STORAGE_TOTAL_BYTES);
        // No synthetic performance block: those numbers were mock placeholders
        assert!(value.get("performance").is_none());
    }
}

//! Tests for schedule proxy module
//!
//! These tests verify the field renaming contract between the browser's
//! camelCase request and the backend's snake_case payload, plus the
//! response reshaping.

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_camel_case() {
        let req: models::ScheduleRequest = serde_json::from_value(json!({
            "contentId": "content-1",
            "scheduledTime": "2024-01-15T14:00:00Z",
            "platforms": ["instagram", "twitter"],
            "targetSegments": ["tech", "creators"],
        }))
        .expect("camelCase request should deserialize");

        assert_eq!(req.content_id, "content-1");
        assert_eq!(req.scheduled_time, "2024-01-15T14:00:00Z");
        assert_eq!(req.platforms, vec!["instagram", "twitter"]);
        assert_eq!(req.target_segments, vec!["tech", "creators"]);
    }

    #[test]
    fn test_payload_forwards_snake_case() {
        let req: models::ScheduleRequest = serde_json::from_value(json!({
            "contentId": "content-1",
            "scheduledTime": "2024-01-15T14:00:00Z",
            "platforms": ["instagram"],
            "targetSegments": ["tech"],
        }))
        .expect("request should deserialize");

        let value = serde_json::to_value(models::SchedulePayload::from(req))
            .expect("payload should serialize");

        assert_eq!(
            value,
            json!({
                "content_id": "content-1",
                "scheduled_time": "2024-01-15T14:00:00Z",
                "platforms": ["instagram"],
                "target_segments": ["tech"],
            })
        );
    }

    #[test]
    fn test_reshape_schedule_renames_fields() {
        let backend = json!({
            "schedule_id": "sched-1",
            "status": "scheduled",
            "scheduled_for": "2024-01-15T14:00:00Z",
        });

        let reshaped = models::reshape_schedule(&backend);

        assert_eq!(reshaped["scheduleId"], "sched-1");
        assert_eq!(reshaped["status"], "scheduled");
        assert_eq!(reshaped["scheduledFor"], "2024-01-15T14:00:00Z");
        assert!(reshaped.get("schedule_id").is_none());
    }

    #[test]
    fn test_reshape_schedule_tolerates_missing_fields() {
        let reshaped = models::reshape_schedule(&json!({}));

        assert!(reshaped["scheduleId"].is_null());
        assert!(reshaped["status"].is_null());
        assert!(reshaped["scheduledFor"].is_null());
    }

    #[test]
    fn test_cancel_query_id_optional() {
        let query: models::CancelQuery =
            serde_json::from_value(json!({})).expect("empty query should deserialize");
        assert!(query.id.is_none());

        let query: models::CancelQuery =
            serde_json::from_value(json!({ "id": "abc123" })).expect("query should deserialize");
        assert_eq!(query.id.as_deref(), Some("abc123"));
    }
}

//! Tests for targeting proxy module

#[cfg(test)]
mod tests {
    use super::super::*;
    use serde_json::json;

    #[test]
    fn test_request_accepts_camel_case() {
        let req: models::TargetingRequest = serde_json::from_value(json!({
            "contentId": "content-1",
            "platforms": ["instagram"],
            "segments": ["tech-18-24"],
        }))
        .expect("camelCase request should deserialize");

        assert_eq!(req.content_id, "content-1");
        assert_eq!(req.platforms, vec!["instagram"]);
        assert_eq!(req.segments, vec!["tech-18-24"]);
    }

    #[test]
    fn test_payload_forwards_snake_case() {
        let req: models::TargetingRequest = serde_json::from_value(json!({
            "contentId": "content-1",
            "platforms": ["instagram"],
            "segments": ["tech-18-24"],
        }))
        .expect("request should deserialize");

        let value = serde_json::to_value(models::TargetingPayload::from(req))
            .expect("payload should serialize");

        assert_eq!(
            value,
            json!({
                "content_id": "content-1",
                "platforms": ["instagram"],
                "segments": ["tech-18-24"],
            })
        );
    }

    #[test]
    fn test_reshape_targeting_renames_fields() {
        let backend = json!({
            "suggestions": [
                { "platform": "instagram", "best_time": "18:00" },
            ],
            "estimated_reach": 8500,
            "recommended_time": "2024-01-15T14:00:00Z",
        });

        let reshaped = models::reshape_targeting(&backend);

        assert_eq!(reshaped["estimatedReach"], 8500);
        assert_eq!(reshaped["recommendedTime"], "2024-01-15T14:00:00Z");
        assert_eq!(reshaped["suggestions"][0]["platform"], "instagram");
        assert!(reshaped.get("estimated_reach").is_none());
    }

    #[test]
    fn test_reshape_targeting_tolerates_missing_fields() {
        let reshaped = models::reshape_targeting(&json!({}));

        assert!(reshaped["suggestions"].is_null());
        assert!(reshaped["estimatedReach"].is_null());
        assert!(reshaped["recommendedTime"].is_null());
    }
}

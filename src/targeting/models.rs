//! Targeting proxy data models

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Browser-facing targeting analysis request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TargetingRequest {
    pub content_id: String,
    pub platforms: Vec<String>,
    pub segments: Vec<String>,
}

/// Payload forwarded to the engine's analysis endpoint
#[derive(Debug, PartialEq, Serialize)]
pub struct TargetingPayload {
    pub content_id: String,
    pub platforms: Vec<String>,
    pub segments: Vec<String>,
}

impl From<TargetingRequest> for TargetingPayload {
    fn from(req: TargetingRequest) -> Self {
        Self {
            content_id: req.content_id,
            platforms: req.platforms,
            segments: req.segments,
        }
    }
}

/// Reshape the engine's snake_case analysis reply for the browser
pub fn reshape_targeting(data: &Value) -> Value {
    json!({
        "suggestions": data.get("suggestions").cloned().unwrap_or(Value::Null),
        "estimatedReach": data.get("estimated_reach").cloned().unwrap_or(Value::Null),
        "recommendedTime": data.get("recommended_time").cloned().unwrap_or(Value::Null),
    })
}

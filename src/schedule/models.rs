//! Schedule proxy data models

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Browser-facing scheduling request
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ScheduleRequest {
    pub content_id: String,
    pub scheduled_time: String,
    pub platforms: Vec<String>,
    pub target_segments: Vec<String>,
}

/// Payload forwarded to the engine backend (snake_case field names)
///
/// No validation that the scheduled time is in the future; the backend owns
/// the schedule lifecycle.
#[derive(Debug, PartialEq, Serialize)]
pub struct SchedulePayload {
    pub content_id: String,
    pub scheduled_time: String,
    pub platforms: Vec<String>,
    pub target_segments: Vec<String>,
}

impl From<ScheduleRequest> for SchedulePayload {
    fn from(req: ScheduleRequest) -> Self {
        Self {
            content_id: req.content_id,
            scheduled_time: req.scheduled_time,
            platforms: req.platforms,
            target_segments: req.target_segments,
        }
    }
}

/// Query parameters for the cancel endpoint
#[derive(Debug, Deserialize)]
pub struct CancelQuery {
    pub id: Option<String>,
}

/// Reshape the engine's snake_case schedule reply for the browser
pub fn reshape_schedule(data: &Value) -> Value {
    json!({
        "scheduleId": data.get("schedule_id").cloned().unwrap_or(Value::Null),
        "status": data.get("status").cloned().unwrap_or(Value::Null),
        "scheduledFor": data.get("scheduled_for").cloned().unwrap_or(Value::Null),
    })
}

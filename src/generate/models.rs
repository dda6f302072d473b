//! Generation proxy data models

use serde::{Deserialize, Serialize};
use serde_json::{json, Value};

/// Style applied when the client omits one
pub const DEFAULT_STYLE: &str = "photorealistic";
/// Quality applied when the client omits one
pub const DEFAULT_QUALITY: &str = "standard";
/// Fixed workflow tag attached to every forwarded generation request
pub const WORKFLOW: &str = "comfyui";

/// Browser-facing generation request
#[derive(Debug, Deserialize)]
pub struct GenerateRequest {
    pub prompt: String,
    pub style: Option<String>,
    pub quality: Option<String>,
}

/// Payload forwarded to the engine backend
#[derive(Debug, PartialEq, Serialize)]
pub struct GenerationPayload {
    pub prompt: String,
    pub style: String,
    pub quality: String,
    pub workflow: String,
}

impl From<GenerateRequest> for GenerationPayload {
    fn from(req: GenerateRequest) -> Self {
        Self {
            prompt: req.prompt,
            style: req.style.unwrap_or_else(|| DEFAULT_STYLE.to_string()),
            quality: req.quality.unwrap_or_else(|| DEFAULT_QUALITY.to_string()),
            workflow: WORKFLOW.to_string(),
        }
    }
}

/// Query parameters for the status poll endpoint
#[derive(Debug, Deserialize)]
pub struct StatusQuery {
    pub id: Option<String>,
}

/// Reshape the engine's snake_case generation reply for the browser
pub fn reshape_generation(data: &Value) -> Value {
    json!({
        "id": data.get("id").cloned().unwrap_or(Value::Null),
        "status": data.get("status").cloned().unwrap_or(Value::Null),
        "imageUrl": data.get("image_url").cloned().unwrap_or(Value::Null),
        "metadata": data.get("metadata").cloned().unwrap_or(Value::Null),
    })
}

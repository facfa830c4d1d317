use serde::{Deserialize, Serialize};
use serde_json::Value;

#[derive(Debug, Deserialize)]
pub struct CallDetailsQuery {
    pub call_id: Option<String>,
}

#[derive(Debug, Serialize)]
pub struct CallDetailsResponse {
    pub summary: Option<Value>,
    pub analysis: Value,
    #[serde(rename = "structuredData")]
    pub structured_data: Value,
    pub insights: Option<Value>,
    pub transcript: Option<Value>,
    pub call: CallMetadata,
}

#[derive(Debug, Serialize)]
pub struct CallMetadata {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Value>,
    #[serde(rename = "assistantId", skip_serializing_if = "Option::is_none")]
    pub assistant_id: Option<Value>,
    #[serde(rename = "startedAt", skip_serializing_if = "Option::is_none")]
    pub started_at: Option<Value>,
    #[serde(rename = "endedAt", skip_serializing_if = "Option::is_none")]
    pub ended_at: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub duration: Option<Value>,
}

#[derive(Debug, Serialize)]
pub struct ErrorResponse {
    pub error: String,
}

//! Request and response bodies.

use focus_core::Profile;
use serde::{Deserialize, Serialize};

/// `POST /api/chat` request body.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatRequest {
    /// Missing and `null` are both treated as an empty message.
    #[serde(default)]
    pub message: Option<String>,
    /// Missing and `null` are both treated as an empty profile.
    #[serde(default)]
    pub profile: Option<Profile>,
}

/// `POST /api/chat` response body.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ChatResponse {
    pub message: String,
    /// Local time, `YYYY-MM-DDTHH:MM:SS`.
    pub timestamp: String,
}

/// Error body returned for every non-2xx response.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ErrorResponse {
    pub error: String,
    pub message: String,
}

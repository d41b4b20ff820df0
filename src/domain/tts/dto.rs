use serde::{Deserialize, Serialize};

/// Body of a successful `GET /tts` response
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TtsResponse {
    pub file: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub message: Option<String>,
    /// Fully qualified playable URL, only sent by some server versions
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub url: Option<String>,
}

use serde::{Deserialize, Serialize};

/// Main application error type
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("Invalid input: {0}")]
    BadRequest(String),

    #[error("Please enter some Thai text before generating speech")]
    EmptyText,

    #[error("No voice selected, the voice catalog is empty")]
    NoVoiceSelected,

    #[error("Unknown voice: {0}")]
    UnknownVoice(String),

    #[error("A synthesis request is already in progress")]
    Busy,

    #[error("Could not reach the TTS server: {0}")]
    Transport(#[from] reqwest::Error),

    /// Server supplied detail, or the transport status text
    #[error("{0}")]
    Server(String),

    #[error("Malformed response: {0}")]
    MalformedResponse(String),

    #[error("Unable to load the audio file. The link may have expired or the relay is down ({0})")]
    MediaUnavailable(String),

    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(String),
}

/// Error body returned by the remote service on failure.
/// FastAPI style servers put the human readable reason in `detail`.
#[derive(Debug, Serialize, Deserialize)]
pub struct ErrorResponse {
    #[serde(default)]
    pub detail: Option<serde_json::Value>,
}

impl ErrorResponse {
    /// The server supplied detail, when it is a non-empty string
    pub fn detail_message(&self) -> Option<String> {
        match &self.detail {
            Some(serde_json::Value::String(s)) if !s.trim().is_empty() => Some(s.clone()),
            _ => None,
        }
    }
}

impl AppError {
    /// Message shown to the user for a failed submission
    pub fn user_message(&self) -> String {
        match self {
            Self::Server(msg) => format!("Something went wrong: {}", msg),
            Self::Transport(e) => format!("Something went wrong: {}", e),
            Self::MalformedResponse(msg) => format!("Something went wrong: {}", msg),
            other => other.to_string(),
        }
    }
}

/// Custom result type for the application
pub type AppResult<T> = Result<T, AppError>;

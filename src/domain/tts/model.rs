use chrono::{DateTime, Utc};

/// Reference to a generated audio resource. Only one is live at a time.
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisResult {
    pub file_name: String,
    /// Absolute, playable without further base-URL composition
    pub audio_url: String,
    /// Local name offered when downloading
    pub download_name: String,
    pub message: Option<String>,
    pub generated_at: DateTime<Utc>,
}

impl SynthesisResult {
    /// Download name with path separators replaced, safe to join onto a directory
    pub fn local_file_name(&self) -> String {
        self.download_name.replace(['/', '\\'], "_")
    }
}

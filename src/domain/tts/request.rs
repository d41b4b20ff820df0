use super::params::{Pitch, RateMultiplier};
use crate::error::{AppError, AppResult};

/// One text-to-speech conversion, built fresh per submission
#[derive(Debug, Clone, PartialEq)]
pub struct SynthesisRequest {
    pub text: String,
    pub voice_id: String,
    pub rate_percent: i32,
    pub pitch_hz: Option<i32>,
}

impl SynthesisRequest {
    /// Build a request from raw form values. Text is trimmed; `pitch` is only
    /// carried when the caller passes one.
    pub fn new(
        text: &str,
        voice_id: &str,
        rate: RateMultiplier,
        pitch: Option<Pitch>,
    ) -> AppResult<Self> {
        let text = text.trim();
        if text.is_empty() {
            return Err(AppError::EmptyText);
        }
        if voice_id.is_empty() {
            return Err(AppError::NoVoiceSelected);
        }

        Ok(Self {
            text: text.to_string(),
            voice_id: voice_id.to_string(),
            rate_percent: rate.to_percent(),
            pitch_hz: pitch.map(|p| p.hz()),
        })
    }

    pub fn query_string(&self) -> String {
        let mut query = format!(
            "text={}&voice={}&rate={}",
            urlencoding::encode(&self.text),
            urlencoding::encode(&self.voice_id),
            self.rate_percent
        );
        if let Some(pitch) = self.pitch_hz {
            query.push_str(&format!("&pitch={}", pitch));
        }
        query
    }

    /// Full synthesis endpoint URL under the given base address
    pub fn endpoint(&self, base_url: &str) -> String {
        format!("{}/tts?{}", base_url, self.query_string())
    }
}

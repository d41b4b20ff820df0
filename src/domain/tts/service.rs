use super::dto::TtsResponse;
use super::model::SynthesisResult;
use super::request::SynthesisRequest;
use crate::error::{AppError, AppResult};
use crate::infrastructure::repositories::TtsRepository;
use async_trait::async_trait;
use chrono::Utc;
use reqwest::Url;
use std::sync::Arc;

pub struct SynthesisService {
    tts_repo: Arc<dyn TtsRepository>,
    base_url: String,
    download_prefix: String,
}

impl SynthesisService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>, base_url: String, download_prefix: String) -> Self {
        Self {
            tts_repo,
            base_url,
            download_prefix,
        }
    }
}

#[async_trait]
pub trait SynthesisServiceApi: Send + Sync {
    /// Submit one synthesis request to the remote service
    ///
    /// Returns a result whose `audio_url` is absolute: the server supplied
    /// URL when it is well formed, otherwise one composed from the base
    /// address and the returned file name.
    async fn synthesize(&self, request: &SynthesisRequest) -> AppResult<SynthesisResult>;
}

#[async_trait]
impl SynthesisServiceApi for SynthesisService {
    async fn synthesize(&self, request: &SynthesisRequest) -> AppResult<SynthesisResult> {
        tracing::info!(
            voice = %request.voice_id,
            rate_percent = request.rate_percent,
            pitch_hz = ?request.pitch_hz,
            text_length = request.text.chars().count(),
            "TTS synthesis request"
        );

        let response = self.tts_repo.synthesize(request).await?;

        if response.file.trim().is_empty() {
            return Err(AppError::MalformedResponse(
                "response did not name a generated file".to_string(),
            ));
        }

        let audio_url = resolve_audio_url(&self.base_url, &response);

        tracing::info!(
            file = %response.file,
            audio_url = %audio_url,
            server_url = response.url.is_some(),
            "TTS synthesis completed"
        );

        Ok(SynthesisResult {
            download_name: format!("{}{}", self.download_prefix, response.file),
            file_name: response.file,
            audio_url,
            message: response.message,
            generated_at: Utc::now(),
        })
    }
}

/// Pick the playable URL for a synthesis response.
///
/// A server supplied `url` is used verbatim when it parses as an absolute
/// http(s) URL; anything else falls back to `{base}/download/{file}`.
pub fn resolve_audio_url(base_url: &str, response: &TtsResponse) -> String {
    if let Some(url) = response.url.as_deref() {
        match Url::parse(url) {
            Ok(parsed) if matches!(parsed.scheme(), "http" | "https") => return url.to_string(),
            _ => {
                tracing::debug!(url = %url, "Ignoring malformed server audio URL");
            }
        }
    }

    format!(
        "{}/download/{}",
        base_url,
        urlencoding::encode(&response.file)
    )
}

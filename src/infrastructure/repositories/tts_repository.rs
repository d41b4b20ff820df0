use crate::domain::tts::{SynthesisRequest, TtsResponse};
use crate::domain::voice::VoiceOption;
use crate::error::AppResult;
use async_trait::async_trait;

/// Access to the remote TTS service.
///
/// Implementations are responsible for:
/// - Sending the relay bypass header with every call
/// - Mapping non-success statuses to `AppError::Server`, preferring the
///   server supplied `detail`
/// - Treating undecodable bodies as `AppError::MalformedResponse`
#[async_trait]
pub trait TtsRepository: Send + Sync {
    /// `GET /voices`, in display order
    async fn list_voices(&self) -> AppResult<Vec<VoiceOption>>;

    /// `GET /tts` with the request's query parameters
    async fn synthesize(&self, request: &SynthesisRequest) -> AppResult<TtsResponse>;

    /// Fetch the audio bytes behind a resolved playable URL
    ///
    /// # Errors
    /// Returns `AppError::MediaUnavailable` when the resource cannot be loaded
    async fn fetch_audio(&self, audio_url: &str) -> AppResult<Vec<u8>>;
}

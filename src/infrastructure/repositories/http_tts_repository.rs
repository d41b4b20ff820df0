use super::tts_repository::TtsRepository;
use crate::domain::tts::{SynthesisRequest, TtsResponse};
use crate::domain::voice::VoiceOption;
use crate::error::{AppError, AppResult, ErrorResponse};
use async_trait::async_trait;
use reqwest::header::ACCEPT;
use reqwest::{Response, StatusCode};

/// HTTP implementation of the TTS repository against the remote service
pub struct HttpTtsRepository {
    http_client: reqwest::Client,
    base_url: String,
}

impl HttpTtsRepository {
    pub fn new(http_client: reqwest::Client, base_url: String) -> Self {
        Self {
            http_client,
            base_url,
        }
    }

    /// Turn a non-success response into a server error, preferring `detail`
    async fn error_from_response(response: Response) -> AppError {
        let status = response.status();
        let detail = response
            .json::<ErrorResponse>()
            .await
            .ok()
            .and_then(|body| body.detail_message());

        AppError::Server(detail.unwrap_or_else(|| format!("Server error: {}", status_text(status))))
    }
}

#[async_trait]
impl TtsRepository for HttpTtsRepository {
    async fn list_voices(&self) -> AppResult<Vec<VoiceOption>> {
        let url = format!("{}/voices", self.base_url);
        tracing::debug!(url = %url, "Fetching voice catalog");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<Vec<VoiceOption>>()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse voice list: {}", e)))
    }

    async fn synthesize(&self, request: &SynthesisRequest) -> AppResult<TtsResponse> {
        let url = request.endpoint(&self.base_url);
        tracing::debug!(url = %url, "Calling TTS endpoint");

        let response = self.http_client.get(&url).send().await?;

        if !response.status().is_success() {
            return Err(Self::error_from_response(response).await);
        }

        response
            .json::<TtsResponse>()
            .await
            .map_err(|e| AppError::MalformedResponse(format!("Failed to parse TTS response: {}", e)))
    }

    async fn fetch_audio(&self, audio_url: &str) -> AppResult<Vec<u8>> {
        let response = self
            .http_client
            .get(audio_url)
            .header(ACCEPT, "*/*")
            .send()
            .await
            .map_err(|e| AppError::MediaUnavailable(e.to_string()))?;

        let status = response.status();
        if !status.is_success() {
            return Err(AppError::MediaUnavailable(format!(
                "download returned {}",
                status_text(status)
            )));
        }

        let bytes = response
            .bytes()
            .await
            .map_err(|e| AppError::MediaUnavailable(e.to_string()))?;

        if bytes.is_empty() {
            return Err(AppError::MediaUnavailable("empty audio file".to_string()));
        }

        Ok(bytes.to_vec())
    }
}

fn status_text(status: StatusCode) -> String {
    status
        .canonical_reason()
        .map(str::to_string)
        .unwrap_or_else(|| status.as_u16().to_string())
}

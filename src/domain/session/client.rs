use super::state::SessionState;
use crate::domain::tts::{SynthesisResult, SynthesisService, SynthesisServiceApi};
use crate::domain::voice::VoiceCatalogService;
use crate::error::{AppError, AppResult};
use crate::infrastructure::config::Config;
use crate::infrastructure::playback::{AudioPlayer, PlaybackError};
use crate::infrastructure::repositories::TtsRepository;
use std::path::{Path, PathBuf};
use std::sync::Arc;
use std::time::Duration;
use tracing::Instrument;
use uuid::Uuid;

/// How a submission cycle ended
#[derive(Debug, Clone, PartialEq)]
pub enum SubmitOutcome {
    /// Refused before any network call
    Rejected(String),
    Succeeded(SynthesisResult),
    Failed(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PlaybackOutcome {
    Played,
    /// Player unavailable or refused; logged and otherwise ignored
    Blocked,
    /// The media failed to load, the session carries a diagnostic
    MediaError,
    NothingToPlay,
}

/// Owns the session state and runs the catalog load, submission, playback
/// and download flows against it. One cycle at a time, enforced by `&mut self`
/// and the busy flag.
pub struct SynthesisClient {
    state: SessionState,
    mounted: bool,
    catalog_service: VoiceCatalogService,
    synthesis_service: Arc<dyn SynthesisServiceApi>,
    tts_repo: Arc<dyn TtsRepository>,
    player: Arc<dyn AudioPlayer>,
    autoplay_delay: Duration,
}

impl SynthesisClient {
    pub fn new(
        config: &Config,
        tts_repo: Arc<dyn TtsRepository>,
        player: Arc<dyn AudioPlayer>,
    ) -> Self {
        let synthesis_service = Arc::new(SynthesisService::new(
            tts_repo.clone(),
            config.api_base_url.clone(),
            config.download_prefix.clone(),
        ));

        Self {
            state: SessionState::new(config.pitch_enabled),
            mounted: false,
            catalog_service: VoiceCatalogService::new(tts_repo.clone()),
            synthesis_service,
            tts_repo,
            player,
            autoplay_delay: config.autoplay_delay(),
        }
    }

    pub fn state(&self) -> &SessionState {
        &self.state
    }

    /// Load the voice catalog. Only the first call touches the network.
    pub async fn mount(&mut self) {
        if self.mounted {
            tracing::debug!("Client already mounted, catalog not refetched");
            return;
        }
        self.mounted = true;

        let load = self.catalog_service.load().await;
        self.state.apply_catalog(load);
    }

    pub fn select_voice(&mut self, voice_id: &str) -> AppResult<()> {
        self.state.select_voice(voice_id)
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.state.set_text(text);
    }

    pub fn set_rate(&mut self, multiplier: f64) -> AppResult<()> {
        self.state.set_rate(multiplier)
    }

    pub fn set_pitch(&mut self, hz: i32) -> AppResult<()> {
        self.state.set_pitch(hz)
    }

    /// Run one submission cycle
    pub async fn submit(&mut self) -> SubmitOutcome {
        let cycle_id = Uuid::new_v4();
        let span = tracing::info_span!("synthesis_cycle", cycle_id = %cycle_id);
        self.run_cycle().instrument(span).await
    }

    async fn run_cycle(&mut self) -> SubmitOutcome {
        let request = match self.state.validate() {
            Ok(request) => request,
            Err(e) => {
                tracing::warn!(error = %e, "Submission rejected");
                return SubmitOutcome::Rejected(e.to_string());
            }
        };

        self.state.start_request();

        match self.synthesis_service.synthesize(&request).await {
            Ok(result) => {
                self.state.succeed(result.clone());
                SubmitOutcome::Succeeded(result)
            }
            Err(e) => {
                tracing::error!(error = %e, "TTS synthesis failed");
                let message = e.user_message();
                self.state.fail(message.clone());
                SubmitOutcome::Failed(message)
            }
        }
    }

    /// Best-effort playback of the current result after the autoplay delay
    pub async fn autoplay(&mut self) -> PlaybackOutcome {
        let Some(audio_url) = self.state.result().map(|r| r.audio_url.clone()) else {
            return PlaybackOutcome::NothingToPlay;
        };

        tokio::time::sleep(self.autoplay_delay).await;

        match self.player.play(&audio_url).await {
            Ok(()) => PlaybackOutcome::Played,
            Err(PlaybackError::Blocked(reason)) => {
                tracing::info!(reason = %reason, "Autoplay blocked");
                PlaybackOutcome::Blocked
            }
            Err(PlaybackError::Load(reason)) => {
                tracing::warn!(url = %audio_url, reason = %reason, "Audio failed to load");
                self.state.report_media_error(&reason);
                PlaybackOutcome::MediaError
            }
        }
    }

    /// Save the current result's audio into `dir` under its download name
    pub async fn download(&mut self, dir: &Path) -> AppResult<PathBuf> {
        let result = self
            .state
            .result()
            .cloned()
            .ok_or_else(|| AppError::BadRequest("Nothing to download yet".to_string()))?;

        let bytes = match self.tts_repo.fetch_audio(&result.audio_url).await {
            Ok(bytes) => bytes,
            Err(e) => {
                let detail = match &e {
                    AppError::MediaUnavailable(detail) => detail.clone(),
                    other => other.to_string(),
                };
                tracing::warn!(url = %result.audio_url, error = %e, "Audio download failed");
                self.state.report_media_error(&detail);
                return Err(AppError::MediaUnavailable(detail));
            }
        };

        tokio::fs::create_dir_all(dir).await?;
        let path = dir.join(result.local_file_name());
        tokio::fs::write(&path, &bytes).await?;

        tracing::info!(path = %path.display(), size = bytes.len(), "Audio saved");
        Ok(path)
    }
}

use crate::infrastructure::config::Config;
use async_trait::async_trait;
use std::process::Stdio;
use std::sync::Arc;

#[derive(Debug, thiserror::Error)]
pub enum PlaybackError {
    /// Playback refused before the media was touched. Never fatal.
    #[error("autoplay blocked: {0}")]
    Blocked(String),
    /// The media reference could not be loaded
    #[error("media failed to load: {0}")]
    Load(String),
}

/// Plays a resolved audio URL
#[async_trait]
pub trait AudioPlayer: Send + Sync {
    async fn play(&self, audio_url: &str) -> Result<(), PlaybackError>;
}

/// Runs an external player (mpv, ffplay, ...) with the URL as last argument
pub struct CommandPlayer {
    program: String,
    args: Vec<String>,
}

impl CommandPlayer {
    /// Parse a whitespace separated command line such as `ffplay -nodisp -autoexit`
    pub fn from_command_line(command_line: &str) -> Option<Self> {
        let mut parts = command_line.split_whitespace().map(str::to_string);
        let program = parts.next()?;
        Some(Self {
            program,
            args: parts.collect(),
        })
    }
}

#[async_trait]
impl AudioPlayer for CommandPlayer {
    async fn play(&self, audio_url: &str) -> Result<(), PlaybackError> {
        tracing::debug!(program = %self.program, url = %audio_url, "Starting audio player");

        let status = tokio::process::Command::new(&self.program)
            .args(&self.args)
            .arg(audio_url)
            .stdin(Stdio::null())
            .stdout(Stdio::null())
            .stderr(Stdio::null())
            .status()
            .await
            .map_err(|e| PlaybackError::Blocked(format!("cannot start {}: {}", self.program, e)))?;

        if status.success() {
            Ok(())
        } else {
            Err(PlaybackError::Load(format!(
                "{} exited with {}",
                self.program, status
            )))
        }
    }
}

/// Used when no player is configured; every attempt counts as blocked
pub struct DisabledPlayer;

#[async_trait]
impl AudioPlayer for DisabledPlayer {
    async fn play(&self, _audio_url: &str) -> Result<(), PlaybackError> {
        Err(PlaybackError::Blocked("no audio player configured".to_string()))
    }
}

pub fn player_from_config(config: &Config) -> Arc<dyn AudioPlayer> {
    match config
        .player_command
        .as_deref()
        .and_then(CommandPlayer::from_command_line)
    {
        Some(player) => Arc::new(player),
        None => Arc::new(DisabledPlayer),
    }
}

use serde::Deserialize;
use std::env;
use std::path::PathBuf;
use std::time::Duration;

const DEFAULT_BASE_URL: &str = "http://localhost:8000";
const DEFAULT_BYPASS_HEADER: &str = "ngrok-skip-browser-warning";
const DEFAULT_DOWNLOAD_PREFIX: &str = "thai_speech_";

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    /// Base address of the remote TTS service, without trailing slash
    pub api_base_url: String,
    // Relay interstitial bypass
    pub bypass_header: String,
    pub bypass_value: String,
    /// Whether the `pitch` parameter is sent with synthesis requests
    pub pitch_enabled: bool,
    pub autoplay_delay_ms: u64,
    /// External player invoked with the audio URL as its last argument
    pub player_command: Option<String>,
    pub download_prefix: String,
    pub download_dir: PathBuf,
    pub log_format: LogFormat,
}

#[derive(Debug, Clone, Deserialize, PartialEq)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    Pretty,
    Json,
}

impl Config {
    pub fn from_env() -> Result<Self, Box<dyn std::error::Error>> {
        dotenvy::dotenv().ok();

        let config = Config {
            api_base_url: normalize_base_url(
                &env::var("TTS_API_BASE_URL").unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            ),
            bypass_header: env::var("TTS_BYPASS_HEADER")
                .unwrap_or_else(|_| DEFAULT_BYPASS_HEADER.to_string()),
            bypass_value: env::var("TTS_BYPASS_VALUE").unwrap_or_else(|_| "true".to_string()),
            pitch_enabled: parse_flag(
                &env::var("TTS_PITCH_ENABLED").unwrap_or_else(|_| "true".to_string()),
            ),
            autoplay_delay_ms: env::var("TTS_AUTOPLAY_DELAY_MS")
                .unwrap_or_else(|_| "100".to_string())
                .parse()?,
            player_command: env::var("TTS_PLAYER_COMMAND")
                .ok()
                .filter(|s| !s.trim().is_empty()),
            download_prefix: env::var("TTS_DOWNLOAD_PREFIX")
                .unwrap_or_else(|_| DEFAULT_DOWNLOAD_PREFIX.to_string()),
            download_dir: env::var("TTS_DOWNLOAD_DIR")
                .map(PathBuf::from)
                .unwrap_or_else(|_| PathBuf::from(".")),
            log_format: env::var("LOG_FORMAT")
                .unwrap_or_else(|_| "pretty".to_string())
                .parse::<String>()
                .map(|s| match s.as_str() {
                    "json" => LogFormat::Json,
                    _ => LogFormat::Pretty,
                })?,
        };

        Ok(config)
    }

    /// Defaults pointed at the given base address, used by tests and embedders
    pub fn with_base_url(base_url: &str) -> Self {
        Self {
            api_base_url: normalize_base_url(base_url),
            bypass_header: DEFAULT_BYPASS_HEADER.to_string(),
            bypass_value: "true".to_string(),
            pitch_enabled: true,
            autoplay_delay_ms: 100,
            player_command: None,
            download_prefix: DEFAULT_DOWNLOAD_PREFIX.to_string(),
            download_dir: PathBuf::from("."),
            log_format: LogFormat::Pretty,
        }
    }

    pub fn autoplay_delay(&self) -> Duration {
        Duration::from_millis(self.autoplay_delay_ms)
    }
}

fn normalize_base_url(raw: &str) -> String {
    raw.trim().trim_end_matches('/').to_string()
}

// Only "true" (any case) enables a flag
fn parse_flag(raw: &str) -> bool {
    raw.trim().to_lowercase() == "true"
}

use reqwest::header::{HeaderMap, HeaderName, HeaderValue, ACCEPT};

use crate::error::{AppError, AppResult};
use crate::infrastructure::config::Config;

const USER_AGENT: &str = "thai-tts-client";

/// Build the HTTP client used for every call to the remote TTS service.
///
/// The relay bypass header is installed as a default header so that the
/// voice listing, synthesis and download calls all skip the interstitial page.
/// No request timeout is configured, the transport's own behaviour applies.
pub fn build_http_client(config: &Config) -> AppResult<reqwest::Client> {
    let mut headers = HeaderMap::new();
    headers.insert(ACCEPT, HeaderValue::from_static("application/json"));

    let name = HeaderName::from_bytes(config.bypass_header.as_bytes())
        .map_err(|e| AppError::Config(format!("Invalid bypass header name: {}", e)))?;
    let value = HeaderValue::from_str(&config.bypass_value)
        .map_err(|e| AppError::Config(format!("Invalid bypass header value: {}", e)))?;
    headers.insert(name, value);

    reqwest::Client::builder()
        .user_agent(USER_AGENT)
        .default_headers(headers)
        .build()
        .map_err(|e| AppError::Config(format!("Failed to build HTTP client: {}", e)))
}

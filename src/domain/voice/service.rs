use super::fallback::fallback_voices;
use super::model::VoiceCatalog;
use crate::infrastructure::repositories::TtsRepository;
use std::sync::Arc;

/// Shown when the live catalog could not be fetched
pub const CATALOG_UNAVAILABLE_MESSAGE: &str = "Could not connect to the TTS server. \
Check the configured base URL (TTS_API_BASE_URL) or make sure the server is running. \
Showing demo voices instead.";

/// Outcome of loading the catalog. A failed load still yields a usable catalog.
#[derive(Debug, Clone)]
pub struct CatalogLoad {
    pub catalog: VoiceCatalog,
    pub diagnostic: Option<String>,
}

pub struct VoiceCatalogService {
    tts_repo: Arc<dyn TtsRepository>,
}

impl VoiceCatalogService {
    pub fn new(tts_repo: Arc<dyn TtsRepository>) -> Self {
        Self { tts_repo }
    }

    /// Fetch the live catalog once, substituting the fallback list on any failure
    pub async fn load(&self) -> CatalogLoad {
        match self.tts_repo.list_voices().await {
            Ok(voices) => {
                tracing::info!(voice_count = voices.len(), "Voice catalog loaded");
                if voices.is_empty() {
                    tracing::warn!("Remote voice catalog is empty, submission disabled");
                }
                CatalogLoad {
                    catalog: VoiceCatalog::live(voices),
                    diagnostic: None,
                }
            }
            Err(e) => {
                tracing::error!(error = %e, "Failed to load voice catalog, using fallback voices");
                CatalogLoad {
                    catalog: VoiceCatalog::fallback(fallback_voices()),
                    diagnostic: Some(CATALOG_UNAVAILABLE_MESSAGE.to_string()),
                }
            }
        }
    }
}

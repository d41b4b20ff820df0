use serde::{Deserialize, Serialize};

/// A selectable synthesized-speech identity offered by the remote service
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct VoiceOption {
    pub id: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub gender: Option<String>,
}

/// Where the catalog currently on screen came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CatalogSource {
    Live,
    Fallback,
}

/// Ordered voice list. Order is display order and the first entry is the
/// default selection.
#[derive(Debug, Clone, PartialEq)]
pub struct VoiceCatalog {
    voices: Vec<VoiceOption>,
    source: CatalogSource,
}

impl VoiceCatalog {
    pub fn live(voices: Vec<VoiceOption>) -> Self {
        Self {
            voices,
            source: CatalogSource::Live,
        }
    }

    pub fn fallback(voices: Vec<VoiceOption>) -> Self {
        Self {
            voices,
            source: CatalogSource::Fallback,
        }
    }

    pub fn voices(&self) -> &[VoiceOption] {
        &self.voices
    }

    pub fn source(&self) -> CatalogSource {
        self.source
    }

    pub fn is_empty(&self) -> bool {
        self.voices.is_empty()
    }

    pub fn default_voice(&self) -> Option<&VoiceOption> {
        self.voices.first()
    }

    pub fn find(&self, id: &str) -> Option<&VoiceOption> {
        self.voices.iter().find(|v| v.id == id)
    }

    pub fn contains(&self, id: &str) -> bool {
        self.find(id).is_some()
    }
}

impl Default for VoiceCatalog {
    fn default() -> Self {
        Self::live(Vec::new())
    }
}

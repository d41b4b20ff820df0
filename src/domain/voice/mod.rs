pub mod fallback;
pub mod model;
pub mod service;

pub use fallback::fallback_voices;
pub use model::{CatalogSource, VoiceCatalog, VoiceOption};
pub use service::{CatalogLoad, VoiceCatalogService, CATALOG_UNAVAILABLE_MESSAGE};

pub mod dto;
pub mod model;
pub mod params;
pub mod request;
pub mod service;

pub use dto::TtsResponse;
pub use model::SynthesisResult;
pub use params::{Pitch, RateMultiplier};
pub use request::SynthesisRequest;
pub use service::{resolve_audio_url, SynthesisService, SynthesisServiceApi};

pub mod client;
pub mod state;

pub use client::{PlaybackOutcome, SubmitOutcome, SynthesisClient};
pub use state::{Phase, SessionState, DEFAULT_TEXT};

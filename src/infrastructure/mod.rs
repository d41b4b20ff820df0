pub mod config;
pub mod http;
pub mod playback;
pub mod repositories;

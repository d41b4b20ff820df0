//! Plain-text rendering of the session for the terminal front end

use crate::domain::session::SessionState;
use crate::domain::tts::SynthesisResult;
use crate::domain::voice::{CatalogSource, VoiceCatalog};
use std::fmt::Write;

pub fn render_catalog(catalog: &VoiceCatalog, selected: Option<&str>) -> String {
    let mut out = String::new();

    if catalog.is_empty() {
        out.push_str("No voices available, submission disabled\n");
        return out;
    }

    let heading = match catalog.source() {
        CatalogSource::Live => "Voices:",
        CatalogSource::Fallback => "Voices (demo list, server unavailable):",
    };
    let _ = writeln!(out, "{}", heading);

    for voice in catalog.voices() {
        let marker = if Some(voice.id.as_str()) == selected { '*' } else { ' ' };
        match &voice.gender {
            Some(gender) => {
                let _ = writeln!(out, " {} {:<28} {} [{}]", marker, voice.id, voice.name, gender);
            }
            None => {
                let _ = writeln!(out, " {} {:<28} {}", marker, voice.id, voice.name);
            }
        }
    }

    out
}

/// Voice, speed and pitch line shown above the submit action
pub fn render_settings(state: &SessionState) -> String {
    let voice = state.selected_voice().unwrap_or("-");
    if state.pitch_enabled() {
        format!("Voice: {}  Speed: {}  Pitch: {}", voice, state.rate(), state.pitch())
    } else {
        format!("Voice: {}  Speed: {}", voice, state.rate())
    }
}

pub fn render_result(result: &SynthesisResult) -> String {
    let mut out = String::from("Result:\n");
    let _ = writeln!(out, "  Audio:    {}", result.audio_url);
    let _ = writeln!(out, "  Download: {}", result.download_name);
    if let Some(message) = &result.message {
        let _ = writeln!(out, "  Server:   {}", message);
    }
    let _ = writeln!(
        out,
        "  Created:  {}",
        result.generated_at.format("%Y-%m-%d %H:%M:%S UTC")
    );
    out
}

pub fn render_error(message: &str) -> String {
    format!("Error: {}", message)
}

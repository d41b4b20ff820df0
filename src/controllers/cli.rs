use super::render::{render_catalog, render_error, render_result, render_settings};
use crate::domain::session::{PlaybackOutcome, SubmitOutcome, SynthesisClient};
use crate::error::AppResult;
use std::io::Write;
use std::path::PathBuf;

/// Values collected from the command line, the equivalent of the form fields
#[derive(Debug, Clone)]
pub struct CliOptions {
    pub text: Option<String>,
    pub voice: Option<String>,
    pub rate: f64,
    pub pitch: i32,
    pub list_voices: bool,
    pub download_dir: Option<PathBuf>,
    pub play: bool,
}

impl Default for CliOptions {
    fn default() -> Self {
        Self {
            text: None,
            voice: None,
            rate: 1.0,
            pitch: 0,
            list_voices: false,
            download_dir: None,
            play: true,
        }
    }
}

pub struct CliController {
    client: SynthesisClient,
}

impl CliController {
    pub fn new(client: SynthesisClient) -> Self {
        Self { client }
    }

    pub fn client(&self) -> &SynthesisClient {
        &self.client
    }

    /// Run one pass of the form: load voices, apply options, submit, then
    /// play and download the result. Returns whether the submission succeeded.
    pub async fn run<W: Write>(&mut self, options: CliOptions, out: &mut W) -> AppResult<bool> {
        self.client.mount().await;

        if let Some(diagnostic) = self.client.state().error() {
            writeln!(out, "{}", render_error(diagnostic))?;
        }

        let state = self.client.state();
        if options.list_voices || state.catalog().is_empty() {
            write!(out, "{}", render_catalog(state.catalog(), state.selected_voice()))?;
        }
        if options.list_voices {
            return Ok(true);
        }

        if let Err(e) = self.apply_options(&options) {
            writeln!(out, "{}", render_error(&e.to_string()))?;
            return Ok(false);
        }

        writeln!(out, "{}", render_settings(self.client.state()))?;

        match self.client.submit().await {
            SubmitOutcome::Rejected(message) => {
                writeln!(out, "! {}", message)?;
                return Ok(false);
            }
            SubmitOutcome::Failed(message) => {
                writeln!(out, "{}", render_error(&message))?;
                return Ok(false);
            }
            SubmitOutcome::Succeeded(result) => {
                write!(out, "{}", render_result(&result))?;
            }
        }

        if options.play && self.client.autoplay().await == PlaybackOutcome::MediaError {
            if let Some(message) = self.client.state().error() {
                writeln!(out, "{}", render_error(message))?;
            }
        }

        if let Some(dir) = &options.download_dir {
            match self.client.download(dir).await {
                Ok(path) => writeln!(out, "Saved {}", path.display())?,
                Err(e) => writeln!(out, "{}", render_error(&e.to_string()))?,
            }
        }

        Ok(true)
    }

    fn apply_options(&mut self, options: &CliOptions) -> AppResult<()> {
        if let Some(text) = &options.text {
            self.client.set_text(text.clone());
        }
        if let Some(voice) = &options.voice {
            self.client.select_voice(voice)?;
        }
        self.client.set_rate(options.rate)?;
        self.client.set_pitch(options.pitch)?;
        Ok(())
    }
}

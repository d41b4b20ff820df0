use crate::domain::tts::{Pitch, RateMultiplier, SynthesisRequest, SynthesisResult};
use crate::domain::voice::{CatalogLoad, VoiceCatalog};
use crate::error::{AppError, AppResult};

pub const DEFAULT_TEXT: &str = "สวัสดีครับ ยินดีที่ได้รู้จัก";

/// Phase of a submission cycle.
///
/// `Idle -> Validating -> (Rejected | Requesting) -> (Succeeded | Failed) -> Idle`
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    Validating,
    Rejected,
    Requesting,
    Succeeded,
    Failed,
}

/// Everything the form shows. Mutated only through the transition functions
/// below; busy is exactly `phase == Requesting`.
#[derive(Debug, Clone)]
pub struct SessionState {
    catalog: VoiceCatalog,
    selected_voice: Option<String>,
    text: String,
    rate: RateMultiplier,
    pitch: Pitch,
    pitch_enabled: bool,
    phase: Phase,
    last_cycle: Vec<Phase>,
    result: Option<SynthesisResult>,
    error: Option<String>,
    notice: Option<String>,
}

impl SessionState {
    pub fn new(pitch_enabled: bool) -> Self {
        Self {
            catalog: VoiceCatalog::default(),
            selected_voice: None,
            text: DEFAULT_TEXT.to_string(),
            rate: RateMultiplier::default(),
            pitch: Pitch::default(),
            pitch_enabled,
            phase: Phase::Idle,
            last_cycle: Vec::new(),
            result: None,
            error: None,
            notice: None,
        }
    }

    pub fn catalog(&self) -> &VoiceCatalog {
        &self.catalog
    }

    pub fn selected_voice(&self) -> Option<&str> {
        self.selected_voice.as_deref()
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn rate(&self) -> RateMultiplier {
        self.rate
    }

    pub fn pitch(&self) -> Pitch {
        self.pitch
    }

    pub fn pitch_enabled(&self) -> bool {
        self.pitch_enabled
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    /// Phases visited by the most recent submission cycle, in order
    pub fn last_cycle(&self) -> &[Phase] {
        &self.last_cycle
    }

    pub fn is_busy(&self) -> bool {
        self.phase == Phase::Requesting
    }

    pub fn result(&self) -> Option<&SynthesisResult> {
        self.result.as_ref()
    }

    pub fn error(&self) -> Option<&str> {
        self.error.as_deref()
    }

    /// Blocking notification from the last rejected submission
    pub fn notice(&self) -> Option<&str> {
        self.notice.as_deref()
    }

    /// Whether the submit control is enabled
    pub fn can_submit(&self) -> bool {
        !self.is_busy() && self.selected_voice.is_some() && !self.text.trim().is_empty()
    }

    /// Replace the catalog wholesale and select its first voice
    pub fn apply_catalog(&mut self, load: CatalogLoad) {
        self.selected_voice = load.catalog.default_voice().map(|v| v.id.clone());
        self.catalog = load.catalog;
        if let Some(diagnostic) = load.diagnostic {
            self.error = Some(diagnostic);
        }
    }

    pub fn select_voice(&mut self, voice_id: &str) -> AppResult<()> {
        if !self.catalog.contains(voice_id) {
            return Err(AppError::UnknownVoice(voice_id.to_string()));
        }
        self.selected_voice = Some(voice_id.to_string());
        Ok(())
    }

    pub fn set_text(&mut self, text: impl Into<String>) {
        self.text = text.into();
    }

    pub fn set_rate(&mut self, multiplier: f64) -> AppResult<()> {
        self.rate = RateMultiplier::new(multiplier)?;
        Ok(())
    }

    pub fn set_pitch(&mut self, hz: i32) -> AppResult<()> {
        self.pitch = Pitch::new(hz)?;
        Ok(())
    }

    /// Start a cycle and build the request from the current form values.
    /// Leaves the state in `Validating` on success, `Rejected` otherwise.
    /// A cycle already in `Requesting` is left untouched and `Busy` is returned.
    pub fn validate(&mut self) -> AppResult<SynthesisRequest> {
        if self.is_busy() {
            return Err(AppError::Busy);
        }

        self.last_cycle.clear();
        self.notice = None;
        self.enter(Phase::Validating);

        let pitch = self.pitch_enabled.then_some(self.pitch);
        let voice = self.selected_voice.clone().unwrap_or_default();

        SynthesisRequest::new(&self.text, &voice, self.rate, pitch).map_err(|e| self.reject(e))
    }

    /// Enter busy and clear the previous outcome
    pub fn start_request(&mut self) {
        self.result = None;
        self.error = None;
        self.enter(Phase::Requesting);
    }

    pub fn succeed(&mut self, result: SynthesisResult) {
        self.result = Some(result);
        self.enter(Phase::Succeeded);
        self.enter(Phase::Idle);
    }

    pub fn fail(&mut self, message: String) {
        self.result = None;
        self.error = Some(message);
        self.enter(Phase::Failed);
        self.enter(Phase::Idle);
    }

    /// The media behind the current result could not be loaded
    pub fn report_media_error(&mut self, detail: &str) {
        self.error = Some(AppError::MediaUnavailable(detail.to_string()).to_string());
    }

    fn reject(&mut self, err: AppError) -> AppError {
        self.notice = Some(err.to_string());
        self.enter(Phase::Rejected);
        self.enter(Phase::Idle);
        err
    }

    fn enter(&mut self, phase: Phase) {
        tracing::debug!(from = ?self.phase, to = ?phase, "Session phase transition");
        self.phase = phase;
        if phase != Phase::Idle {
            self.last_cycle.push(phase);
        }
    }
}

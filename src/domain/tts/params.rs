use crate::error::{AppError, AppResult};
use std::fmt;

pub const MIN_RATE: f64 = 0.5;
pub const MAX_RATE: f64 = 3.0;
pub const MIN_PITCH_HZ: i32 = -20;
pub const MAX_PITCH_HZ: i32 = 20;

/// Displayed speed multiplier (`1.0` is normal speed), snapped to 0.1 steps
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RateMultiplier(f64);

impl RateMultiplier {
    pub fn new(value: f64) -> AppResult<Self> {
        if !value.is_finite() {
            return Err(AppError::BadRequest(format!("Invalid rate: {}", value)));
        }

        let snapped = (value * 10.0).round() / 10.0;
        if !(MIN_RATE..=MAX_RATE).contains(&snapped) {
            return Err(AppError::BadRequest(format!(
                "Rate must be between {}x and {}x, got {}x",
                MIN_RATE, MAX_RATE, value
            )));
        }

        Ok(Self(snapped))
    }

    pub fn value(&self) -> f64 {
        self.0
    }

    /// Signed percent offset from normal speed sent as `rate`.
    /// 1.5x -> +50, 0.8x -> -20
    pub fn to_percent(&self) -> i32 {
        ((self.0 - 1.0) * 100.0).round() as i32
    }
}

impl Default for RateMultiplier {
    fn default() -> Self {
        Self(1.0)
    }
}

impl fmt::Display for RateMultiplier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x", self.0)
    }
}

/// Pitch offset in Hz
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Pitch(i32);

impl Pitch {
    pub fn new(hz: i32) -> AppResult<Self> {
        if !(MIN_PITCH_HZ..=MAX_PITCH_HZ).contains(&hz) {
            return Err(AppError::BadRequest(format!(
                "Pitch must be between {}Hz and +{}Hz, got {}Hz",
                MIN_PITCH_HZ, MAX_PITCH_HZ, hz
            )));
        }
        Ok(Self(hz))
    }

    pub fn hz(&self) -> i32 {
        self.0
    }
}

impl fmt::Display for Pitch {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0 > 0 {
            write!(f, "+{}Hz", self.0)
        } else {
            write!(f, "{}Hz", self.0)
        }
    }
}

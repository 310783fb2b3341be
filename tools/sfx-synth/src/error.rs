//! Error types for the synthesis pipeline
//!
//! Every error names the pipeline stage it came from, so a failed render can be
//! diagnosed from the message alone.

use std::fmt;
use std::path::PathBuf;

use thiserror::Error;

/// Pipeline stage that produced an error
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Stage {
    /// Parameter validation before any buffer is allocated
    Params,
    /// Time axis construction (sample rate, duration)
    TimeAxis,
    Envelope,
    Oscillator,
    Noise,
    Mixer,
    ClickSuppressor,
    Limiter,
    /// WAV encoding and file output
    Writer,
}

impl fmt::Display for Stage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Stage::Params => "parameters",
            Stage::TimeAxis => "time axis",
            Stage::Envelope => "envelope",
            Stage::Oscillator => "oscillator",
            Stage::Noise => "noise",
            Stage::Mixer => "mixer",
            Stage::ClickSuppressor => "click suppressor",
            Stage::Limiter => "limiter",
            Stage::Writer => "writer",
        };
        f.write_str(name)
    }
}

/// Errors produced while synthesizing or writing a sound
#[derive(Debug, Error)]
pub enum SynthError {
    #[error("{stage}: invalid parameter `{name}` = {value}: {reason}")]
    InvalidParameter {
        stage: Stage,
        name: String,
        value: f64,
        reason: &'static str,
    },

    #[error("{stage}: degenerate signal: {reason}")]
    DegenerateSignal { stage: Stage, reason: &'static str },

    #[error("{stage}: length mismatch (expected {expected} samples, found {found})")]
    LengthMismatch {
        stage: Stage,
        expected: usize,
        found: usize,
    },

    #[error("writer: failed to encode WAV: {0}")]
    Encode(#[source] Box<dyn std::error::Error + Send + Sync>),

    #[error("writer: failed to write {}: {source}", path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl SynthError {
    pub(crate) fn invalid(
        stage: Stage,
        name: impl Into<String>,
        value: f64,
        reason: &'static str,
    ) -> Self {
        SynthError::InvalidParameter {
            stage,
            name: name.into(),
            value,
            reason,
        }
    }

    /// Stage the error was raised in
    pub fn stage(&self) -> Stage {
        match self {
            SynthError::InvalidParameter { stage, .. }
            | SynthError::DegenerateSignal { stage, .. }
            | SynthError::LengthMismatch { stage, .. } => *stage,
            SynthError::Encode(_) | SynthError::Io { .. } => Stage::Writer,
        }
    }
}

#[cfg(feature = "wav-export")]
impl From<hound::Error> for SynthError {
    fn from(err: hound::Error) -> Self {
        SynthError::Encode(Box::new(err))
    }
}

pub type Result<T> = std::result::Result<T, SynthError>;

/// Reject values that are NaN, infinite or not strictly positive
pub(crate) fn require_positive(stage: Stage, name: &str, value: f64) -> Result<f64> {
    if !value.is_finite() {
        return Err(SynthError::invalid(stage, name, value, "must be finite"));
    }
    if value <= 0.0 {
        return Err(SynthError::invalid(stage, name, value, "must be greater than zero"));
    }
    Ok(value)
}

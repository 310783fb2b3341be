//! Frequency-swept sine oscillators
//!
//! Each `Sweep` glides exponentially down from its start frequency. Phase is
//! accumulated sample by sample (the running integral of the instantaneous
//! frequency) so the sweep stays continuous.

use std::f64::consts::TAU;

use super::time::TimeAxis;
use crate::error::{require_positive, Result, Stage, SynthError};

/// Sine oscillator with frequency `f(t) = start_freq · exp(-freq_decay·t)`
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sweep {
    start_freq: f64,
    freq_decay: f64,
}

impl Sweep {
    /// Create a sweep
    ///
    /// # Arguments
    /// * `start_freq` - Frequency at t=0 in Hz, below Nyquist
    /// * `freq_decay` - Exponential frequency decay rate in 1/s
    /// * `sample_rate` - Sample rate the sweep will be rendered at
    pub fn new(start_freq: f64, freq_decay: f64, sample_rate: u32) -> Result<Self> {
        let start_freq = require_positive(Stage::Oscillator, "start_freq", start_freq)?;
        let freq_decay = require_positive(Stage::Oscillator, "freq_decay", freq_decay)?;

        let nyquist = sample_rate as f64 / 2.0;
        if start_freq >= nyquist {
            return Err(SynthError::invalid(
                Stage::Oscillator,
                "start_freq",
                start_freq,
                "must be below the Nyquist frequency",
            ));
        }

        Ok(Self {
            start_freq,
            freq_decay,
        })
    }

    pub fn start_freq(&self) -> f64 {
        self.start_freq
    }

    pub fn freq_decay(&self) -> f64 {
        self.freq_decay
    }

    /// Instantaneous frequency at time `t` seconds
    pub fn frequency_at(&self, t: f64) -> f64 {
        self.start_freq * (-self.freq_decay * t).exp()
    }

    /// Accumulated phase in radians for every sample of the axis
    ///
    /// `phase[0] = 0` and `phase[i] = phase[i-1] + 2π·f(t_i)/sample_rate`.
    /// The phase is not wrapped, so the sequence is non-decreasing.
    pub fn phase(&self, axis: &TimeAxis) -> Vec<f64> {
        let step = TAU / axis.sample_rate() as f64;

        let mut phase = 0.0f64;
        axis.times()
            .enumerate()
            .map(|(i, t)| {
                if i > 0 {
                    phase += step * self.frequency_at(t);
                }
                phase
            })
            .collect()
    }

    /// Render `envelope[i] · sin(phase[i])`
    ///
    /// The envelope must cover the whole axis.
    pub fn render(&self, axis: &TimeAxis, envelope: &[f64]) -> Result<Vec<f64>> {
        if envelope.len() != axis.len() {
            return Err(SynthError::LengthMismatch {
                stage: Stage::Oscillator,
                expected: axis.len(),
                found: envelope.len(),
            });
        }

        Ok(self
            .phase(axis)
            .into_iter()
            .zip(envelope)
            .map(|(phase, &amp)| amp * phase.sin())
            .collect())
    }
}

//! Exponential decay envelope
//!
//! Provides the `exp(-k·t)` amplitude curve used to shape every layer of a
//! swoosh.

use super::time::TimeAxis;
use crate::error::{require_positive, Result, Stage};

/// Exponential decay envelope `E(t) = exp(-rate·t)`
///
/// Values lie in `(0, 1]` for every `t >= 0`: the curve starts at 1.0 and
/// never decays all the way to zero. Samples that would underflow are held at
/// `f64::MIN_POSITIVE`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DecayEnvelope {
    rate: f64,
}

impl DecayEnvelope {
    /// Create an envelope with the given decay rate (1/s)
    ///
    /// A rate of zero or below would hold or grow instead of decaying, so it
    /// is rejected.
    pub fn new(rate: f64) -> Result<Self> {
        let rate = require_positive(Stage::Envelope, "amp_decay", rate)?;
        Ok(Self { rate })
    }

    /// Decay rate in 1/s
    pub fn rate(&self) -> f64 {
        self.rate
    }

    /// Envelope value at time `t` seconds
    pub fn value_at(&self, t: f64) -> f64 {
        (-self.rate * t).exp().max(f64::MIN_POSITIVE)
    }

    /// Generate the envelope curve over the time axis
    pub fn generate(&self, axis: &TimeAxis) -> Vec<f64> {
        axis.times().map(|t| self.value_at(t)).collect()
    }
}

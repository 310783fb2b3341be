//! Synthesis parameters
//!
//! Every field has a default, so a TOML file only needs to list what it
//! changes. The defaults reproduce the stock swoosh: a 2 kHz lead sweep, an
//! 800 Hz body sweep and a short burst of noise, 250ms at 44.1kHz.

use serde::Deserialize;

use crate::audio::{DEFAULT_SAMPLE_RATE, Synth};
use crate::error::Result;

/// One frequency-swept sine layer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct SweepVoice {
    /// Frequency at t=0 in Hz
    pub start_freq: f64,
    /// Exponential frequency decay rate in 1/s
    pub freq_decay: f64,
    /// Exponential amplitude decay rate in 1/s
    pub amp_decay: f64,
    /// Mix weight
    pub weight: f64,
}

impl Default for SweepVoice {
    fn default() -> Self {
        Self::lead()
    }
}

impl SweepVoice {
    /// High sweep carrying most of the energy
    pub fn lead() -> Self {
        Self {
            start_freq: 2000.0,
            freq_decay: 15.0,
            amp_decay: 20.0,
            weight: 0.7,
        }
    }

    /// Lower sweep that gives the swoosh some body
    pub fn body() -> Self {
        Self {
            start_freq: 800.0,
            freq_decay: 12.0,
            amp_decay: 15.0,
            weight: 0.3,
        }
    }
}

/// Decaying noise layer
#[derive(Debug, Clone, Copy, PartialEq, Deserialize)]
#[serde(default)]
pub struct NoiseLayer {
    /// Standard deviation of the Gaussian noise
    pub sigma: f64,
    /// Exponential amplitude decay rate in 1/s
    pub decay: f64,
    /// Mix weight
    pub weight: f64,
}

impl Default for NoiseLayer {
    fn default() -> Self {
        Self {
            sigma: 0.1,
            decay: 25.0,
            weight: 1.0,
        }
    }
}

/// Full parameter set for one swoosh render
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct SwooshParams {
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Duration in seconds
    pub duration: f64,
    /// Swept sine layers, mixed in order
    pub voices: Vec<SweepVoice>,
    /// Noise layer, added after the voices
    pub noise: NoiseLayer,
    /// Fade-in/fade-out length in seconds
    pub fade: f64,
    /// Soft clipper drive gain (> 1)
    pub drive: f64,
    /// Noise seed; a random seed is picked (and reported) when absent
    pub seed: Option<u64>,
}

impl Default for SwooshParams {
    fn default() -> Self {
        Self {
            sample_rate: DEFAULT_SAMPLE_RATE,
            duration: 0.25,
            voices: vec![SweepVoice::lead(), SweepVoice::body()],
            noise: NoiseLayer::default(),
            fade: 0.005,
            drive: 1.5,
            seed: None,
        }
    }
}

impl SwooshParams {
    /// Check every parameter without rendering anything
    pub fn validate(&self) -> Result<()> {
        Synth::new(self).map(|_| ())
    }

    /// Total number of samples a render will produce
    pub fn sample_count(&self) -> Result<usize> {
        Synth::new(self).map(|synth| synth.axis().len())
    }
}

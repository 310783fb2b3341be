//! Discrete time axis shared by every synthesis stage

use crate::error::{require_positive, Result, SynthError, Stage};

/// Longest render accepted, in samples (just over three minutes at 44.1kHz)
pub const MAX_SAMPLES: usize = 1 << 23;

/// Sample timestamps `t_i = i / sample_rate` for `i` in `0..len`
///
/// All generators render against the same axis, so every waveform in a
/// render has the same length.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TimeAxis {
    sample_rate: u32,
    len: usize,
}

impl TimeAxis {
    /// Create an axis covering `[0, duration)` seconds
    ///
    /// The sample count is `round(sample_rate * duration)` and may not exceed
    /// [`MAX_SAMPLES`].
    pub fn new(sample_rate: u32, duration: f64) -> Result<Self> {
        if sample_rate == 0 {
            return Err(SynthError::invalid(
                Stage::TimeAxis,
                "sample_rate",
                0.0,
                "must be greater than zero",
            ));
        }
        let duration = require_positive(Stage::TimeAxis, "duration", duration)?;

        let count = (sample_rate as f64 * duration).round();
        if count > MAX_SAMPLES as f64 {
            return Err(SynthError::invalid(
                Stage::TimeAxis,
                "duration",
                duration,
                "longer than the maximum render length",
            ));
        }
        let len = count as usize;
        if len == 0 {
            return Err(SynthError::invalid(
                Stage::TimeAxis,
                "duration",
                duration,
                "shorter than one sample",
            ));
        }

        Ok(Self { sample_rate, len })
    }

    /// Sample rate in Hz
    pub fn sample_rate(&self) -> u32 {
        self.sample_rate
    }

    /// Number of samples
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Duration covered by the axis in seconds
    pub fn duration(&self) -> f64 {
        self.len as f64 / self.sample_rate as f64
    }

    /// Timestamp of sample `i` in seconds
    pub fn time(&self, i: usize) -> f64 {
        i as f64 / self.sample_rate as f64
    }

    /// Iterate over all sample timestamps in order
    pub fn times(&self) -> impl Iterator<Item = f64> + '_ {
        (0..self.len).map(|i| self.time(i))
    }
}

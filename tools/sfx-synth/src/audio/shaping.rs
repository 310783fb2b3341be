//! Output shaping: boundary fades, soft clipping and peak normalization

use crate::error::{Result, Stage, SynthError};

/// Fade length in samples for a fade of `seconds`
///
/// Truncates: 5ms at 44.1kHz is 220 samples. Lengths too large for `usize`
/// saturate at `usize::MAX`.
pub fn fade_len(sample_rate: u32, seconds: f64) -> usize {
    (seconds * sample_rate as f64).floor().max(0.0) as usize
}

/// Apply linear fade-in and fade-out ramps of `fade_len` samples
///
/// The first sample and the last sample end up at exactly zero, which removes
/// the click of a waveform starting or stopping mid-cycle. Interior samples
/// are left untouched.
///
/// Fails if `fade_len` is zero or if the two fades would overlap
/// (`fade_len > samples.len() / 2`).
pub fn fade_edges(samples: &mut [f64], fade_len: usize) -> Result<()> {
    if fade_len == 0 {
        return Err(SynthError::invalid(
            Stage::ClickSuppressor,
            "fade",
            0.0,
            "fade must cover at least one sample",
        ));
    }
    if fade_len > samples.len() / 2 {
        return Err(SynthError::invalid(
            Stage::ClickSuppressor,
            "fade",
            fade_len as f64,
            "fade-in and fade-out would overlap",
        ));
    }

    let len = samples.len();
    let span = (fade_len - 1).max(1) as f64;
    for i in 0..fade_len {
        let gain = i as f64 / span;
        samples[i] *= gain;
        samples[len - 1 - i] *= gain;
    }

    Ok(())
}

/// Soft-clip every sample with `tanh(drive·x)`
///
/// Peaks are compressed smoothly into (-1, 1) instead of being cut off.
pub fn soft_clip(samples: &mut [f64], drive: f64) -> Result<()> {
    if !drive.is_finite() || drive <= 1.0 {
        return Err(SynthError::invalid(
            Stage::Limiter,
            "drive",
            drive,
            "must be finite and greater than 1",
        ));
    }

    for sample in samples.iter_mut() {
        *sample = (drive * *sample).tanh();
    }
    Ok(())
}

/// Largest absolute sample value
pub fn peak(samples: &[f64]) -> f64 {
    samples.iter().map(|s| s.abs()).fold(0.0f64, f64::max)
}

/// Scale samples so the peak amplitude is exactly 1.0
///
/// A silent waveform cannot be normalized: it means every layer upstream was
/// muted, so it is reported instead of producing NaNs.
pub fn normalize(samples: &mut [f64]) -> Result<()> {
    if samples.iter().any(|s| !s.is_finite()) {
        return Err(SynthError::DegenerateSignal {
            stage: Stage::Limiter,
            reason: "waveform contains non-finite samples",
        });
    }

    let max_amplitude = peak(samples);
    if max_amplitude == 0.0 {
        return Err(SynthError::DegenerateSignal {
            stage: Stage::Limiter,
            reason: "waveform is silent",
        });
    }

    // Divide rather than multiply by the reciprocal so the peak lands on 1.0 exactly
    for sample in samples.iter_mut() {
        *sample /= max_amplitude;
    }
    Ok(())
}

/// Soft-clip with `drive`, then normalize to full scale
pub fn limit(samples: &mut [f64], drive: f64) -> Result<()> {
    soft_clip(samples, drive)?;
    normalize(samples)
}

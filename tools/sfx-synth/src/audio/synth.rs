//! Swoosh synthesis pipeline
//!
//! Wires the generators and shaping stages together:
//! voices + noise → mix → fade edges → soft clip + normalize → PCM.

#[cfg(feature = "wav-export")]
use std::path::{Path, PathBuf};

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg64;
use tracing::{debug, debug_span};

use super::envelope::DecayEnvelope;
use super::export::{mix, to_pcm_i16};
use super::noise::NoiseTexture;
use super::oscillators::Sweep;
use super::shaping::{fade_edges, fade_len, limit, peak};
use super::time::TimeAxis;
use crate::error::{Result, Stage, SynthError};
use crate::params::SwooshParams;

/// A validated swept-sine layer
#[derive(Debug, Clone, Copy)]
struct Voice {
    sweep: Sweep,
    envelope: DecayEnvelope,
    weight: f64,
}

/// Swoosh synthesizer built from validated parameters
///
/// Construction checks every parameter and allocates no sample buffers, so
/// bad input is rejected before any synthesis work starts. A `Synth` holds no
/// state between renders.
///
/// # Example
/// ```
/// use sfx_synth::{SwooshParams, audio::Synth};
///
/// let params = SwooshParams::default();
/// let synth = Synth::new(&params)?;
/// let pcm = synth.render_seeded(42)?;
/// assert_eq!(pcm.len(), 11025);
/// # Ok::<(), sfx_synth::SynthError>(())
/// ```
#[derive(Debug, Clone)]
pub struct Synth {
    axis: TimeAxis,
    voices: Vec<Voice>,
    noise: NoiseTexture,
    noise_weight: f64,
    fade_len: usize,
    drive: f64,
}

/// Rename an `InvalidParameter` so it points at the offending config field
fn scoped(err: SynthError, prefix: &str) -> SynthError {
    match err {
        SynthError::InvalidParameter {
            stage,
            name,
            value,
            reason,
        } => SynthError::InvalidParameter {
            stage,
            name: format!("{}.{}", prefix, name),
            value,
            reason,
        },
        other => other,
    }
}

fn require_finite(stage: Stage, name: String, value: f64) -> Result<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(SynthError::invalid(stage, name, value, "must be finite"))
    }
}

impl Synth {
    /// Validate `params` and build the synthesizer
    pub fn new(params: &SwooshParams) -> Result<Self> {
        let axis = TimeAxis::new(params.sample_rate, params.duration)?;

        if params.voices.is_empty() {
            return Err(SynthError::invalid(
                Stage::Params,
                "voices",
                0.0,
                "at least one voice is required",
            ));
        }

        let voices = params
            .voices
            .iter()
            .enumerate()
            .map(|(i, voice)| -> Result<Voice> {
                let prefix = format!("voices[{}]", i);
                let sweep = Sweep::new(voice.start_freq, voice.freq_decay, axis.sample_rate())
                    .map_err(|e| scoped(e, &prefix))?;
                let envelope =
                    DecayEnvelope::new(voice.amp_decay).map_err(|e| scoped(e, &prefix))?;
                let weight =
                    require_finite(Stage::Mixer, format!("{}.weight", prefix), voice.weight)?;
                Ok(Voice {
                    sweep,
                    envelope,
                    weight,
                })
            })
            .collect::<Result<Vec<_>>>()?;

        let noise = NoiseTexture::new(params.noise.sigma, params.noise.decay)
            .map_err(|e| scoped(e, "noise"))?;
        let noise_weight =
            require_finite(Stage::Mixer, "noise.weight".to_string(), params.noise.weight)?;

        if !params.fade.is_finite() || params.fade < 0.0 {
            return Err(SynthError::invalid(
                Stage::ClickSuppressor,
                "fade",
                params.fade,
                "must be finite and non-negative",
            ));
        }
        // Checked in f64, before the cast to usize
        let fade_samples = (params.fade * axis.sample_rate() as f64).floor();
        if fade_samples > (axis.len() / 2) as f64 {
            return Err(SynthError::invalid(
                Stage::ClickSuppressor,
                "fade",
                params.fade,
                "fade-in and fade-out would overlap",
            ));
        }
        let fade_len = fade_len(axis.sample_rate(), params.fade);
        if fade_len == 0 {
            return Err(SynthError::invalid(
                Stage::ClickSuppressor,
                "fade",
                params.fade,
                "shorter than one sample",
            ));
        }

        if !params.drive.is_finite() || params.drive <= 1.0 {
            return Err(SynthError::invalid(
                Stage::Limiter,
                "drive",
                params.drive,
                "must be finite and greater than 1",
            ));
        }

        Ok(Self {
            axis,
            voices,
            noise,
            noise_weight,
            fade_len,
            drive: params.drive,
        })
    }

    /// Time axis every layer is rendered on
    pub fn axis(&self) -> &TimeAxis {
        &self.axis
    }

    /// Fade length in samples at each boundary
    pub fn fade_len(&self) -> usize {
        self.fade_len
    }

    /// Render the normalized waveform (peak exactly 1.0), drawing noise from `rng`
    pub fn render<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<f64>> {
        let axis = &self.axis;

        let mut layers = Vec::with_capacity(self.voices.len() + 1);
        for voice in &self.voices {
            let envelope = voice.envelope.generate(axis);
            let samples = voice.sweep.render(axis, &envelope)?;
            debug!(
                start_freq = voice.sweep.start_freq(),
                freq_decay = voice.sweep.freq_decay(),
                amp_decay = voice.envelope.rate(),
                "rendered voice"
            );
            layers.push((samples, voice.weight));
        }
        layers.push((self.noise.render(axis, rng), self.noise_weight));

        let refs: Vec<(&[f64], f64)> = layers.iter().map(|(s, w)| (s.as_slice(), *w)).collect();
        let mut wave = mix(&refs)?;
        debug!(layers = refs.len(), peak = peak(&wave), "mixed layers");

        fade_edges(&mut wave, self.fade_len)?;
        debug!(fade_len = self.fade_len, "faded edges");

        limit(&mut wave, self.drive)?;
        debug!(drive = self.drive, "limited and normalized");

        Ok(wave)
    }

    /// Render straight to 16-bit PCM
    pub fn render_pcm<R: Rng + ?Sized>(&self, rng: &mut R) -> Result<Vec<i16>> {
        Ok(to_pcm_i16(&self.render(rng)?))
    }

    /// Render to 16-bit PCM with noise seeded from `seed`
    pub fn render_seeded(&self, seed: u64) -> Result<Vec<i16>> {
        let mut rng = Pcg64::seed_from_u64(seed);
        self.render_pcm(&mut rng)
    }
}

/// Output of a complete render
#[derive(Debug, Clone)]
pub struct Rendered {
    /// 16-bit PCM samples
    pub pcm: Vec<i16>,
    /// Sample rate in Hz
    pub sample_rate: u32,
    /// Seed the noise was drawn with
    pub seed: u64,
}

impl Rendered {
    /// Duration in seconds
    pub fn duration(&self) -> f64 {
        self.pcm.len() as f64 / self.sample_rate as f64
    }
}

/// Run the full pipeline without touching the filesystem
///
/// Uses `params.seed` when given, otherwise a fresh random seed which is
/// returned in the result so the render can be reproduced.
pub fn render_swoosh(params: &SwooshParams) -> Result<Rendered> {
    let synth = Synth::new(params)?;
    let seed = params.seed.unwrap_or_else(rand::random);

    let _span = debug_span!("swoosh", seed).entered();
    let pcm = synth.render_seeded(seed)?;
    debug!(samples = pcm.len(), "quantized");

    Ok(Rendered {
        pcm,
        sample_rate: synth.axis().sample_rate(),
        seed,
    })
}

/// Summary of a swoosh written to disk
#[cfg(feature = "wav-export")]
#[derive(Debug, Clone)]
pub struct SwooshReport {
    pub path: PathBuf,
    pub samples: usize,
    pub sample_rate: u32,
    pub seed: u64,
}

#[cfg(feature = "wav-export")]
impl Rendered {
    /// Write the samples to `path` as a mono 16-bit WAV
    pub fn write(&self, path: &Path) -> Result<SwooshReport> {
        super::export::write_wav(&self.pcm, self.sample_rate, path)?;

        tracing::info!(
            path = %path.display(),
            samples = self.pcm.len(),
            duration = self.duration(),
            seed = self.seed,
            "wrote swoosh"
        );

        Ok(SwooshReport {
            path: path.to_path_buf(),
            samples: self.pcm.len(),
            sample_rate: self.sample_rate,
            seed: self.seed,
        })
    }
}

/// Render a swoosh and write it to `path` as a mono 16-bit WAV
///
/// Nothing is written unless every stage succeeds.
///
/// Requires the `wav-export` feature.
#[cfg(feature = "wav-export")]
pub fn generate_swoosh(params: &SwooshParams, path: &Path) -> Result<SwooshReport> {
    render_swoosh(params)?.write(path)
}

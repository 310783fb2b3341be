//! Procedural swoosh synthesis
//!
//! This module provides the building blocks of the swoosh pipeline, from
//! decay envelopes and swept oscillators to PCM conversion and WAV export,
//! plus the `Synth` that chains them together.
//!
//! # Example
//! ```no_run
//! use sfx_synth::audio::*;
//! use rand::SeedableRng;
//!
//! let axis = TimeAxis::new(DEFAULT_SAMPLE_RATE, 0.25)?;
//!
//! // A falling sine sweep shaped by its own decay envelope
//! let envelope = DecayEnvelope::new(20.0)?.generate(&axis);
//! let lead = Sweep::new(2000.0, 15.0, DEFAULT_SAMPLE_RATE)?.render(&axis, &envelope)?;
//!
//! // Some decaying noise for texture
//! let mut rng = rand_pcg::Pcg64::seed_from_u64(7);
//! let air = NoiseTexture::new(0.1, 25.0)?.render(&axis, &mut rng);
//!
//! // Mix, de-click, limit and quantize
//! let mut wave = mix(&[(&lead, 0.7), (&air, 1.0)])?;
//! fade_edges(&mut wave, fade_len(DEFAULT_SAMPLE_RATE, 0.005))?;
//! limit(&mut wave, 1.5)?;
//! let pcm = to_pcm_i16(&wave);
//!
//! // Export to WAV (requires wav-export feature)
//! #[cfg(feature = "wav-export")]
//! write_wav(&pcm, DEFAULT_SAMPLE_RATE, std::path::Path::new("swoosh.wav"))?;
//! # Ok::<(), sfx_synth::SynthError>(())
//! ```

mod envelope;
mod export;
mod noise;
mod oscillators;
mod shaping;
mod synth;
mod time;

/// Default sample rate (44.1kHz)
pub const DEFAULT_SAMPLE_RATE: u32 = 44100;

// Time axis and generators
pub use envelope::DecayEnvelope;
pub use noise::NoiseTexture;
pub use oscillators::Sweep;
pub use time::{TimeAxis, MAX_SAMPLES};

// Shaping
pub use shaping::{fade_edges, fade_len, limit, normalize, peak, soft_clip};

// Mixing and PCM conversion
pub use export::{from_pcm_i16, mix, to_pcm_i16, PCM_FULL_SCALE};

#[cfg(feature = "wav-export")]
pub use export::{encode_wav, write_wav};

// Pipeline
pub use synth::{render_swoosh, Rendered, Synth};

#[cfg(feature = "wav-export")]
pub use synth::{generate_swoosh, SwooshReport};

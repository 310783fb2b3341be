//! Procedural sound effect synthesis
//!
//! Renders short "swoosh" effects from swept sine voices and decaying noise,
//! then de-clicks, soft-clips, normalizes and quantizes them to 16-bit PCM.
//!
//! # Example
//! ```no_run
//! use sfx_synth::{generate_swoosh, SwooshParams};
//! use std::path::Path;
//!
//! let params = SwooshParams {
//!     seed: Some(42),
//!     ..SwooshParams::default()
//! };
//!
//! let report = generate_swoosh(&params, Path::new("assets/swoosh.wav"))?;
//! println!("{} samples, seed {}", report.samples, report.seed);
//! # Ok::<(), sfx_synth::SynthError>(())
//! ```

pub mod audio;
pub mod error;
pub mod params;

pub use audio::{render_swoosh, Rendered, Synth};
#[cfg(feature = "wav-export")]
pub use audio::{generate_swoosh, SwooshReport};
pub use error::{Result, Stage, SynthError};
pub use params::{NoiseLayer, SweepVoice, SwooshParams};

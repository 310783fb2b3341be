//! Mixing, PCM conversion and WAV export
//!
//! Provides the layer mixer, the 16-bit quantizer and the WAV container
//! writer.

#[cfg(feature = "wav-export")]
use std::path::Path;

use crate::error::{Result, Stage, SynthError};

/// Full-scale value of a 16-bit sample; -32768 is never produced
pub const PCM_FULL_SCALE: f64 = i16::MAX as f64;

/// Mix layers together
///
/// Each layer is multiplied by its weight and summed sample by sample.
/// The result is NOT normalized and may leave the -1.0 to 1.0 range.
///
/// # Arguments
/// * `layers` - Slice of (samples, weight) tuples, all the same length
///
/// # Example
/// ```
/// use sfx_synth::audio::mix;
///
/// let lead = vec![1.0, 0.5];
/// let body = vec![0.5, 0.5];
/// let mixed = mix(&[(&lead, 0.7), (&body, 0.3)]).unwrap();
/// assert!((mixed[0] - 0.85).abs() < 1e-12);
/// ```
pub fn mix(layers: &[(&[f64], f64)]) -> Result<Vec<f64>> {
    let Some((first, _)) = layers.first() else {
        return Err(SynthError::invalid(
            Stage::Mixer,
            "layers",
            0.0,
            "nothing to mix",
        ));
    };

    let len = first.len();
    if let Some((other, _)) = layers.iter().find(|(s, _)| s.len() != len) {
        return Err(SynthError::LengthMismatch {
            stage: Stage::Mixer,
            expected: len,
            found: other.len(),
        });
    }

    let mut result = vec![0.0f64; len];
    for (samples, weight) in layers {
        for (out, &sample) in result.iter_mut().zip(samples.iter()) {
            *out += sample * weight;
        }
    }

    Ok(result)
}

/// Convert samples (-1.0 to 1.0) to PCM i16
///
/// Samples are scaled by 32767 and rounded to the nearest integer; anything
/// outside -1.0 to 1.0 is clamped first, so ±1.0 maps to ±32767.
pub fn to_pcm_i16(samples: &[f64]) -> Vec<i16> {
    samples
        .iter()
        .map(|&s| (s.clamp(-1.0, 1.0) * PCM_FULL_SCALE).round() as i16)
        .collect()
}

/// Convert PCM i16 samples back to f64 (-1.0 to 1.0)
pub fn from_pcm_i16(samples: &[i16]) -> Vec<f64> {
    samples.iter().map(|&s| s as f64 / PCM_FULL_SCALE).collect()
}

#[cfg(feature = "wav-export")]
fn wav_spec(sample_rate: u32) -> hound::WavSpec {
    hound::WavSpec {
        channels: 1,
        sample_rate,
        bits_per_sample: 16,
        sample_format: hound::SampleFormat::Int,
    }
}

/// Encode PCM samples as a mono 16-bit WAV file in memory
///
/// Requires the `wav-export` feature.
#[cfg(feature = "wav-export")]
pub fn encode_wav(samples: &[i16], sample_rate: u32) -> Result<Vec<u8>> {
    use std::io::Cursor;

    let mut cursor = Cursor::new(Vec::with_capacity(44 + samples.len() * 2));
    {
        let mut writer = hound::WavWriter::new(&mut cursor, wav_spec(sample_rate))?;
        for &sample in samples {
            writer.write_sample(sample)?;
        }
        writer.finalize()?;
    }

    Ok(cursor.into_inner())
}

/// Write PCM samples to a WAV file
///
/// The whole file is encoded before anything touches the disk, so an encoding
/// failure never leaves a partial file behind. The path is used as given.
///
/// Requires the `wav-export` feature.
#[cfg(feature = "wav-export")]
pub fn write_wav(samples: &[i16], sample_rate: u32, path: &Path) -> Result<()> {
    let bytes = encode_wav(samples, sample_rate)?;
    std::fs::write(path, bytes).map_err(|source| SynthError::Io {
        path: path.to_path_buf(),
        source,
    })
}

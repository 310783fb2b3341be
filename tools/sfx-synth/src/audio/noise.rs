//! Decaying Gaussian noise texture
//!
//! Adds the percussive "air" on top of the swept oscillators. The random
//! source is passed in by the caller, so a seeded generator reproduces the
//! exact same texture.

use rand::Rng;
use rand_distr::{Distribution, Normal};

use super::envelope::DecayEnvelope;
use super::time::TimeAxis;
use crate::error::{require_positive, Result, Stage, SynthError};

/// Gaussian noise with its own exponential decay envelope
///
/// `N[i] = X_i · exp(-decay·t_i)` with `X_i ~ Normal(0, sigma)`.
#[derive(Debug, Clone, Copy)]
pub struct NoiseTexture {
    normal: Normal<f64>,
    envelope: DecayEnvelope,
}

impl NoiseTexture {
    /// Create a noise texture
    ///
    /// # Arguments
    /// * `sigma` - Standard deviation of the noise (0 gives silence)
    /// * `decay` - Exponential decay rate of the noise envelope in 1/s
    pub fn new(sigma: f64, decay: f64) -> Result<Self> {
        if !sigma.is_finite() {
            return Err(SynthError::invalid(Stage::Noise, "sigma", sigma, "must be finite"));
        }
        let normal = Normal::new(0.0, sigma).map_err(|_| {
            SynthError::invalid(Stage::Noise, "sigma", sigma, "must be non-negative")
        })?;
        let envelope = DecayEnvelope::new(require_positive(Stage::Noise, "decay", decay)?)?;

        Ok(Self { normal, envelope })
    }

    /// Standard deviation of the raw noise
    pub fn sigma(&self) -> f64 {
        self.normal.std_dev()
    }

    /// Decay rate of the noise envelope
    pub fn decay(&self) -> f64 {
        self.envelope.rate()
    }

    /// Render one noise sample per axis timestamp, drawing from `rng`
    pub fn render<R: Rng + ?Sized>(&self, axis: &TimeAxis, rng: &mut R) -> Vec<f64> {
        axis.times()
            .map(|t| self.normal.sample(&mut *rng) * self.envelope.value_at(t))
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::SeedableRng;
    use rand_pcg::Pcg64;

    const TEST_SAMPLE_RATE: u32 = 44100;

    #[test]
    fn test_noise_length() {
        let axis = TimeAxis::new(TEST_SAMPLE_RATE, 0.25).unwrap();
        let mut rng = Pcg64::seed_from_u64(1);
        let noise = NoiseTexture::new(0.1, 25.0).unwrap().render(&axis, &mut rng);
        assert_eq!(noise.len(), axis.len());
        assert!(noise.iter().all(|s| s.is_finite()));
    }

    #[test]
    fn test_noise_reproducibility() {
        let axis = TimeAxis::new(TEST_SAMPLE_RATE, 0.05).unwrap();
        let texture = NoiseTexture::new(0.1, 25.0).unwrap();

        let a = texture.render(&axis, &mut Pcg64::seed_from_u64(42));
        let b = texture.render(&axis, &mut Pcg64::seed_from_u64(42));
        let c = texture.render(&axis, &mut Pcg64::seed_from_u64(43));
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn test_noise_statistics() {
        // With a tiny decay the envelope stays ~1, so the output follows Normal(0, sigma)
        let axis = TimeAxis::new(TEST_SAMPLE_RATE, 1.0).unwrap();
        let noise = NoiseTexture::new(0.5, 1e-6)
            .unwrap()
            .render(&axis, &mut Pcg64::seed_from_u64(7));

        let n = noise.len() as f64;
        let mean = noise.iter().sum::<f64>() / n;
        let var = noise.iter().map(|s| (s - mean).powi(2)).sum::<f64>() / n;
        assert!(mean.abs() < 0.02, "mean {}", mean);
        assert!((var.sqrt() - 0.5).abs() < 0.02, "std dev {}", var.sqrt());
    }

    #[test]
    fn test_noise_decays() {
        let axis = TimeAxis::new(TEST_SAMPLE_RATE, 0.25).unwrap();
        let noise = NoiseTexture::new(0.1, 25.0)
            .unwrap()
            .render(&axis, &mut Pcg64::seed_from_u64(3));

        let quarter = noise.len() / 4;
        let energy = |s: &[f64]| s.iter().map(|x| x * x).sum::<f64>();
        assert!(energy(&noise[..quarter]) > energy(&noise[noise.len() - quarter..]));
    }

    #[test]
    fn test_zero_sigma_is_silent() {
        let axis = TimeAxis::new(TEST_SAMPLE_RATE, 0.01).unwrap();
        let noise = NoiseTexture::new(0.0, 25.0)
            .unwrap()
            .render(&axis, &mut Pcg64::seed_from_u64(0));
        assert!(noise.iter().all(|&s| s == 0.0));
    }

    #[test]
    fn test_rejection_reasons() {
        let reason_of = |err: SynthError| match err {
            SynthError::InvalidParameter {
                stage,
                name,
                reason,
                ..
            } => (stage, name, reason),
            other => panic!("unexpected error: {}", other),
        };

        let (stage, name, reason) = reason_of(NoiseTexture::new(-0.1, 25.0).unwrap_err());
        assert_eq!((stage, name.as_str()), (Stage::Noise, "sigma"));
        assert_eq!(reason, "must be non-negative");

        let (stage, name, reason) = reason_of(NoiseTexture::new(f64::INFINITY, 25.0).unwrap_err());
        assert_eq!((stage, name.as_str()), (Stage::Noise, "sigma"));
        assert_eq!(reason, "must be finite");

        let (stage, name, reason) = reason_of(NoiseTexture::new(0.1, 0.0).unwrap_err());
        assert_eq!((stage, name.as_str()), (Stage::Noise, "decay"));
        assert_eq!(reason, "must be greater than zero");
    }

    #[test]
    fn test_rejects_bad_parameters() {
        assert!(NoiseTexture::new(-0.1, 25.0).is_err());
        assert!(NoiseTexture::new(f64::NAN, 25.0).is_err());
        assert!(NoiseTexture::new(0.1, 0.0).is_err());
        assert!(NoiseTexture::new(0.1, -25.0).is_err());
    }
}

//! Gaussian sample sources
//!
//! Real AWGN with a configurable power, and unit-power circularly symmetric
//! complex Gaussian draws used for fading coefficients and channel matrices.
//! The caller owns the random source.

use num_complex::Complex64;
use rand::Rng;
use rand_distr::{Distribution, StandardNormal};
use std::f64::consts::FRAC_1_SQRT_2;

/// AWGN generator with configurable power
#[derive(Debug, Clone, Copy)]
pub struct NoiseGenerator {
    /// Standard deviation (sqrt of noise power)
    std_dev: f64,
}

impl NoiseGenerator {
    pub fn new(noise_power: f64) -> Self {
        Self {
            std_dev: noise_power.sqrt(),
        }
    }

    /// Noise whose power sits `snr_linear` below a unit-power signal
    pub fn for_snr(snr_linear: f64) -> Self {
        Self::new(1.0 / snr_linear)
    }

    /// Generate next Gaussian noise sample
    pub fn next_sample<R: Rng + ?Sized>(&self, rng: &mut R) -> f64 {
        let z: f64 = StandardNormal.sample(rng);
        z * self.std_dev
    }

    /// Add noise in place to every sample
    pub fn add_to<R: Rng + ?Sized>(&self, rng: &mut R, samples: &mut [f64]) {
        for x in samples.iter_mut() {
            *x += self.next_sample(rng);
        }
    }
}

/// Draw `(g1 + j·g2) / √2` with g1, g2 ~ N(0, 1), so E[|h|²] = 1
pub fn complex_gaussian<R: Rng + ?Sized>(rng: &mut R) -> Complex64 {
    let re: f64 = StandardNormal.sample(rng);
    let im: f64 = StandardNormal.sample(rng);
    Complex64::new(re, im) * FRAC_1_SQRT_2
}

//! Rayleigh flat-fading envelope
//!
//! Each sample is an independent complex Gaussian coefficient
//! h = (g1 + j·g2)/√2, so |h| is Rayleigh distributed with σ² = 1/2
//! and E[|h|²] = 1. There is no Doppler correlation between samples.

use rand::Rng;
use tracing::debug;

use crate::noise::complex_gaussian;
use crate::params::SimulationParameters;
use crate::plot::Plot;

/// Magnitudes |h_k| of `num_samples` independent fading coefficients
pub fn rayleigh_envelope<R: Rng + ?Sized>(num_samples: usize, rng: &mut R) -> Vec<f64> {
    (0..num_samples).map(|_| complex_gaussian(rng).norm()).collect()
}

/// Envelope plot. The SNR in `params` is not used.
pub fn simulate_rayleigh<R: Rng + ?Sized>(params: &SimulationParameters, rng: &mut R) -> Plot {
    debug!(samples = params.sample_count, "simulating Rayleigh fading envelope");

    Plot::line("Rayleigh Fading Envelope", rayleigh_envelope(params.sample_count, rng))
        .x_label("Sample Index")
        .y_label("Amplitude")
        .grid(true)
        .legend("Rayleigh Envelope")
}

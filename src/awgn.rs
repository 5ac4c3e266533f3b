//! AWGN channel: unit constant signal plus real Gaussian noise

use rand::Rng;
use tracing::debug;

use crate::noise::NoiseGenerator;
use crate::params::{db_to_power_ratio, SimulationParameters};
use crate::plot::Plot;

/// Received samples `1 + n_k` with noise power `1 / snr_linear`
pub fn received_signal<R: Rng + ?Sized>(snr_db: f64, num_samples: usize, rng: &mut R) -> Vec<f64> {
    let noise = NoiseGenerator::for_snr(db_to_power_ratio(snr_db));
    let mut samples = vec![1.0; num_samples];
    noise.add_to(rng, &mut samples);
    samples
}

pub fn simulate_awgn<R: Rng + ?Sized>(params: &SimulationParameters, rng: &mut R) -> Plot {
    debug!(snr_db = params.snr_db, samples = params.sample_count, "simulating AWGN channel");

    let samples = received_signal(params.snr_db, params.sample_count, rng);

    Plot::line(format!("AWGN Channel Output (SNR = {} dB)", params.snr_db), samples)
        .x_label("Sample Index")
        .y_label("Amplitude")
        .grid(true)
        .legend("Received Signal")
}

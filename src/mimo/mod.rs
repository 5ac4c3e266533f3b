//! 2x2 MIMO capacity estimation
//!
//! Draws a Rayleigh channel matrix, decomposes it into spatial
//! eigen-channels and reports the equal-power Shannon capacity of each.

mod capacity;
mod matrix;

pub use capacity::{capacity, stream_capacity, CapacityResult, TX_STREAMS};
pub use matrix::{ChannelMatrix, Svd};

use rand::Rng;
use tracing::debug;

use crate::error::SimResult;
use crate::params::{db_to_power_ratio, SimulationParameters};
use crate::plot::Plot;

/// Capacity of one random 2x2 channel realization
pub fn estimate_capacity<R: Rng + ?Sized>(snr_db: f64, rng: &mut R) -> SimResult<CapacityResult> {
    let channel = ChannelMatrix::rayleigh(rng);
    let svd = channel.svd()?;
    Ok(capacity(&svd, db_to_power_ratio(snr_db)))
}

pub fn simulate_mimo_2x2<R: Rng + ?Sized>(
    params: &SimulationParameters,
    rng: &mut R,
) -> SimResult<(Plot, CapacityResult)> {
    let result = estimate_capacity(params.snr_db, rng)?;
    debug!(
        snr_db = params.snr_db,
        stream_1 = result.per_stream.0,
        stream_2 = result.per_stream.1,
        total = result.total,
        "estimated 2x2 MIMO capacity"
    );

    let plot = Plot::bar(
        format!("2x2 MIMO Channel Capacity ≈ {:.2} bits/s/Hz", result.total),
        vec!["Stream 1".to_string(), "Stream 2".to_string()],
        vec![result.per_stream.0, result.per_stream.1],
    )
    .y_label("Capacity (bits/s/Hz)")
    .grid(true);

    Ok((plot, result))
}

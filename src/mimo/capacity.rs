//! Shannon capacity of the spatial eigen-channels
//!
//! Transmit power is split equally over the streams (no water-filling), so
//! stream i sees an effective SNR of (snr / N_tx)·sᵢ².

use rustler::NifStruct;
use serde::{Deserialize, Serialize};

use super::matrix::Svd;

/// Transmit antennas sharing the power budget
pub const TX_STREAMS: usize = 2;

#[derive(NifStruct, Serialize, Deserialize, Debug, Clone, Copy, PartialEq)]
#[module = "Wicsada.Channels.Types.CapacityResult"]
pub struct CapacityResult {
    /// bits/s/Hz for stream 1 and stream 2
    pub per_stream: (f64, f64),
    pub total: f64,
}

/// log2(1 + (snr/N_tx)·gain²)
#[inline]
pub fn stream_capacity(snr_linear: f64, gain: f64) -> f64 {
    (1.0 + snr_linear / TX_STREAMS as f64 * gain * gain).log2()
}

pub fn capacity(svd: &Svd, snr_linear: f64) -> CapacityResult {
    let [s1, s2] = svd.singular_values;
    let c1 = stream_capacity(snr_linear, s1);
    let c2 = stream_capacity(snr_linear, s2);

    CapacityResult {
        per_stream: (c1, c2),
        total: c1 + c2,
    }
}

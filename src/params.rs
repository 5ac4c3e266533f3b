//! Simulation parameters shared by all channel models

use rustler::NifStruct;
use serde::{Deserialize, Serialize};

use crate::error::{SimError, SimResult};

/// Samples generated per trace
pub const DEFAULT_SAMPLE_COUNT: usize = 1000;

/// Largest trace a single NIF call may allocate
pub const MAX_SAMPLE_COUNT: usize = 1 << 20;

/// SNR slider domain offered to the user (dB)
pub const SNR_MIN_DB: i64 = 0;
pub const SNR_MAX_DB: i64 = 30;
pub const SNR_DEFAULT_DB: i64 = 10;

/// Convert a dB value to a linear power ratio
#[inline]
pub fn db_to_power_ratio(db: f64) -> f64 {
    10.0_f64.powf(db / 10.0)
}

/// Parameters for one simulation run, decoded from the host
#[derive(NifStruct, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[module = "Wicsada.Channels.Types.SimulationParameters"]
#[serde(default)]
pub struct SimulationParameters {
    pub snr_db: f64,
    pub sample_count: usize,
}

impl SimulationParameters {
    pub fn with_snr_db(snr_db: f64) -> Self {
        Self {
            snr_db,
            ..Self::default()
        }
    }

    /// Sample count must lie in `1..=MAX_SAMPLE_COUNT`. SNR is not range checked.
    pub fn validate(&self) -> SimResult<()> {
        if self.sample_count == 0 || self.sample_count > MAX_SAMPLE_COUNT {
            return Err(SimError::InvalidParameters(format!(
                "sample_count must be between 1 and {}, got {}",
                MAX_SAMPLE_COUNT, self.sample_count
            )));
        }
        Ok(())
    }

    /// SNR as a linear power ratio. Positive for every finite dB value.
    pub fn snr_linear(&self) -> f64 {
        db_to_power_ratio(self.snr_db)
    }
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            snr_db: SNR_DEFAULT_DB as f64,
            sample_count: DEFAULT_SAMPLE_COUNT,
        }
    }
}

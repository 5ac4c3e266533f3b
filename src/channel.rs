//! Channel selection and dispatch
//!
//! One interaction runs exactly one simulator, chosen by `ChannelKind`.

use std::fmt;
use std::str::FromStr;

use rand::Rng;
use rustler::{NifStruct, NifUnitEnum};
use serde::{Deserialize, Serialize};

use crate::awgn::simulate_awgn;
use crate::error::{SimError, SimResult};
use crate::fading::simulate_rayleigh;
use crate::mimo::{simulate_mimo_2x2, CapacityResult};
use crate::params::SimulationParameters;
use crate::plot::Plot;

#[derive(NifUnitEnum, Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum ChannelKind {
    Awgn,
    RayleighFading,
    Mimo2x2,
}

impl ChannelKind {
    pub const ALL: [ChannelKind; 3] = [
        ChannelKind::Awgn,
        ChannelKind::RayleighFading,
        ChannelKind::Mimo2x2,
    ];

    /// Label shown in the channel selector
    pub fn label(self) -> &'static str {
        match self {
            ChannelKind::Awgn => "AWGN",
            ChannelKind::RayleighFading => "Rayleigh Fading",
            ChannelKind::Mimo2x2 => "MIMO (2x2)",
        }
    }

    /// Section heading displayed above the plot
    pub fn subheader(self) -> &'static str {
        match self {
            ChannelKind::Awgn => "AWGN Channel Simulation",
            ChannelKind::RayleighFading => "Rayleigh Fading Channel Simulation",
            ChannelKind::Mimo2x2 => "2x2 MIMO Channel Capacity Estimation",
        }
    }

    pub fn uses_snr(self) -> bool {
        !matches!(self, ChannelKind::RayleighFading)
    }
}

impl fmt::Display for ChannelKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ChannelKind {
    type Err = SimError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        ChannelKind::ALL
            .into_iter()
            .find(|kind| kind.label() == s)
            .ok_or_else(|| SimError::UnknownChannel(s.to_string()))
    }
}

/// Everything the host displays for one interaction
#[derive(NifStruct, Serialize, Deserialize, Debug, Clone, PartialEq)]
#[module = "Wicsada.Channels.Types.Simulation"]
pub struct Simulation {
    pub channel: ChannelKind,
    pub subheader: String,
    pub plot: Plot,
    /// Only set for MIMO runs
    pub capacity: Option<CapacityResult>,
}

pub fn simulate<R: Rng + ?Sized>(
    kind: ChannelKind,
    params: &SimulationParameters,
    rng: &mut R,
) -> SimResult<Simulation> {
    params.validate()?;

    let (plot, capacity) = match kind {
        ChannelKind::Awgn => (simulate_awgn(params, rng), None),
        ChannelKind::RayleighFading => (simulate_rayleigh(params, rng), None),
        ChannelKind::Mimo2x2 => {
            let (plot, result) = simulate_mimo_2x2(params, rng)?;
            (plot, Some(result))
        }
    };

    Ok(Simulation {
        channel: kind,
        subheader: kind.subheader().to_string(),
        plot,
        capacity,
    })
}

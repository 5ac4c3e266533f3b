//! NIF interface for Elixir
//!
//! Each call builds its own RNG: seeded when the caller passes an integer
//! seed, from OS entropy when it passes `nil`. Nothing is kept between calls.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use rustler::{Atom, NifResult};

use crate::channel::{self, ChannelKind, Simulation};
use crate::mimo::{self, CapacityResult};
use crate::page::PageLayout;
use crate::params::SimulationParameters;
use crate::plot::Plot;
use crate::{awgn, fading};

rustler::atoms! {
    ok,
}

fn channel_rng(seed: Option<u64>) -> ChaCha8Rng {
    match seed {
        Some(seed) => ChaCha8Rng::seed_from_u64(seed),
        None => ChaCha8Rng::from_entropy(),
    }
}

/// AWGN trace at `snr_db`
#[rustler::nif]
fn simulate_awgn(snr_db: f64, seed: Option<u64>) -> NifResult<(Atom, Plot)> {
    let params = SimulationParameters::with_snr_db(snr_db);
    Ok((ok(), awgn::simulate_awgn(&params, &mut channel_rng(seed))))
}

/// Rayleigh envelope, default sample count
#[rustler::nif]
fn simulate_rayleigh(seed: Option<u64>) -> NifResult<(Atom, Plot)> {
    let params = SimulationParameters::default();
    Ok((ok(), fading::simulate_rayleigh(&params, &mut channel_rng(seed))))
}

/// Capacity bar plot together with the numbers behind it
#[rustler::nif]
fn simulate_mimo_2x2(snr_db: f64, seed: Option<u64>) -> NifResult<(Atom, (Plot, CapacityResult))> {
    let params = SimulationParameters::with_snr_db(snr_db);
    let result = mimo::simulate_mimo_2x2(&params, &mut channel_rng(seed))?;
    Ok((ok(), result))
}

/// Runs the simulator selected in the UI
#[rustler::nif]
fn simulate(
    kind: ChannelKind,
    params: SimulationParameters,
    seed: Option<u64>,
) -> NifResult<(Atom, Simulation)> {
    let simulation = channel::simulate(kind, &params, &mut channel_rng(seed))?;
    Ok((ok(), simulation))
}

/// Maps a selector label ("AWGN", "Rayleigh Fading", "MIMO (2x2)") to its atom
#[rustler::nif]
fn channel_kind(label: &str) -> NifResult<(Atom, ChannelKind)> {
    Ok((ok(), label.parse::<ChannelKind>()?))
}

#[rustler::nif]
fn page_layout() -> PageLayout {
    PageLayout::default()
}

#[rustler::nif]
fn plot_to_json(plot: Plot) -> NifResult<(Atom, String)> {
    Ok((ok(), plot.to_json()?))
}

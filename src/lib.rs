//! Wireless channel simulator NIF for WiCSADA
//!
//! Three stateless channel models for teaching: AWGN, Rayleigh flat fading,
//! and 2x2 MIMO capacity via singular value decomposition. Each returns a
//! backend-neutral plot description; the Elixir host owns the page and
//! draws it.

pub mod awgn;
pub mod channel;
pub mod error;
pub mod fading;
pub mod mimo;
pub mod nif;
pub mod noise;
pub mod page;
pub mod params;
pub mod plot;

use rustler::{Env, Term};
use tracing_subscriber::EnvFilter;

pub use channel::{simulate, ChannelKind, Simulation};
pub use error::{SimError, SimResult};
pub use mimo::{CapacityResult, ChannelMatrix, Svd};
pub use params::SimulationParameters;
pub use plot::{Plot, PlotKind};

/// Installs a stderr subscriber filtered by `RUST_LOG`. Returns false when
/// a global subscriber already exists; that one stays in place.
fn init_logging() -> bool {
    match tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            tracing::debug!(%err, "keeping existing tracing subscriber");
            false
        }
    }
}

fn on_load(_env: Env, _info: Term) -> bool {
    init_logging();
    tracing::debug!("wicsada_channels loaded");
    true
}

rustler::init!("Elixir.Wicsada.Channels.Nif", load = on_load);

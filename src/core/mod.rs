//! Core types: cell states, errors, RNG, configuration.
//!
//! Everything else in the crate is built on these. None of them know
//! about grids or rules.

pub mod faction;
pub mod error;
pub mod rng;
pub mod config;

pub use faction::Faction;
pub use error::{GridError, Result, SessionError};
pub use rng::{SimRng, SimRngState};
pub use config::SimulationConfig;

//! Simulation configuration.
//!
//! Front ends build a `SimulationConfig` and hand it to
//! [`Session::new`](crate::session::Session::new). The core never reads the
//! tick cadence itself; it is carried here so the driver has one place to
//! look it up.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use super::error::SessionError;
use super::faction::Faction;

/// Configuration for one simulation session.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct SimulationConfig {
    /// Number of columns (x extent).
    pub columns: i32,

    /// Number of rows (y extent).
    pub rows: i32,

    /// Interval between generations in milliseconds.
    pub tick_interval_ms: u64,

    /// Cap on the player's accumulated births.
    pub max_births: u32,

    /// Faction placed by [`Session::place`](crate::session::Session::place).
    pub player_faction: Faction,

    /// Seed for the tie-break generator.
    pub seed: u64,
}

impl Default for SimulationConfig {
    fn default() -> Self {
        Self {
            columns: 80,
            rows: 38,
            tick_interval_ms: 1000,
            max_births: 5,
            player_faction: Faction::Green,
            seed: 0,
        }
    }
}

impl SimulationConfig {
    /// Default configuration with the given board size.
    #[must_use]
    pub fn new(columns: i32, rows: i32) -> Self {
        Self {
            columns,
            rows,
            ..Self::default()
        }
    }

    /// Set the board size.
    #[must_use]
    pub fn with_size(mut self, columns: i32, rows: i32) -> Self {
        self.columns = columns;
        self.rows = rows;
        self
    }

    /// Set the tick interval.
    #[must_use]
    pub fn with_tick_interval_ms(mut self, ms: u64) -> Self {
        self.tick_interval_ms = ms;
        self
    }

    /// Set the birth allowance cap.
    #[must_use]
    pub fn with_max_births(mut self, max: u32) -> Self {
        self.max_births = max;
        self
    }

    /// Set the faction the player places.
    #[must_use]
    pub fn with_player_faction(mut self, faction: Faction) -> Self {
        self.player_faction = faction;
        self
    }

    /// Set the RNG seed.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    /// Interval between generations.
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        Duration::from_millis(self.tick_interval_ms)
    }

    /// Check the configuration before a session is built from it.
    pub fn validate(&self) -> Result<(), SessionError> {
        if self.columns < 0 || self.rows < 0 {
            return Err(SessionError::invalid_config(format!(
                "board size {}x{} is negative",
                self.columns, self.rows
            )));
        }
        if !self.player_faction.is_alive() {
            return Err(SessionError::invalid_config("player faction cannot be Dead"));
        }
        Ok(())
    }
}

//! Session driver.

use std::time::Duration;

use tracing::{debug, info};

use crate::core::{Faction, GridError, SessionError, SimRng, SimRngState, SimulationConfig};
use crate::grid::{Grid, GridSnapshot};
use crate::rules::{RuleEngine, TickStats};

/// One running simulation: a grid, its rule engine, its RNG, and the
/// player's birth allowance.
#[derive(Clone, Debug)]
pub struct Session {
    config: SimulationConfig,
    grid: Grid,
    engine: RuleEngine,
    rng: SimRng,
    paused: bool,
    available_births: u32,
}

impl Session {
    /// Build a session with an all-dead board.
    pub fn new(config: SimulationConfig) -> Result<Self, SessionError> {
        config.validate()?;
        let grid = Grid::new(config.columns, config.rows)?;
        let rng = SimRng::new(config.seed);
        Ok(Self {
            config,
            grid,
            engine: RuleEngine::new(),
            rng,
            paused: false,
            available_births: 0,
        })
    }

    #[must_use]
    pub fn config(&self) -> &SimulationConfig {
        &self.config
    }

    #[must_use]
    pub fn grid(&self) -> &Grid {
        &self.grid
    }

    /// Generations advanced since the last reset.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.grid.generation()
    }

    #[must_use]
    pub fn available_births(&self) -> u32 {
        self.available_births
    }

    #[must_use]
    pub fn is_paused(&self) -> bool {
        self.paused
    }

    /// How often the driver should call [`Session::advance`].
    #[must_use]
    pub fn tick_interval(&self) -> Duration {
        self.config.tick_interval()
    }

    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        self.grid.snapshot()
    }

    /// Checkpoint of the tie-break stream.
    #[must_use]
    pub fn rng_state(&self) -> SimRngState {
        self.rng.state()
    }

    /// Paint cells directly, bypassing the birth allowance. Used for
    /// starting patterns.
    pub fn seed<I>(&mut self, state: Faction, coordinates: I) -> Result<(), SessionError>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        self.grid.set_cells(state, coordinates)?;
        Ok(())
    }

    /// Clear the board, the generation counter, and the birth allowance.
    pub fn reset(&mut self) {
        self.grid.clear();
        self.available_births = 0;
        info!("session reset");
    }

    /// Flip the pause flag and return the new value.
    pub fn toggle_pause(&mut self) -> bool {
        self.paused = !self.paused;
        info!(paused = self.paused, "pause toggled");
        self.paused
    }

    /// Timer callback. Does nothing while paused; otherwise grants one
    /// birth (up to the cap) and advances one generation.
    pub fn advance(&mut self) -> Option<TickStats> {
        if self.paused {
            return None;
        }
        if self.available_births < self.config.max_births {
            self.available_births += 1;
        }
        Some(self.engine.tick(&mut self.grid, &mut self.rng))
    }

    /// Advance unconditionally, ignoring pause and the birth allowance.
    pub fn step(&mut self) -> TickStats {
        self.engine.tick(&mut self.grid, &mut self.rng)
    }

    /// Player placement: spend one birth to put the player's faction on a
    /// dead cell.
    pub fn place(&mut self, x: i32, y: i32) -> Result<(), SessionError> {
        let result = self.try_place(x, y);
        if let Err(err) = &result {
            debug!(x, y, error = %err, "placement rejected");
        }
        result
    }

    fn try_place(&mut self, x: i32, y: i32) -> Result<(), SessionError> {
        if self.available_births == 0 {
            return Err(SessionError::NoBirthsAvailable);
        }
        if self.grid.get(x, y)? != Faction::Dead {
            return Err(SessionError::CellOccupied { x, y });
        }
        self.grid.set(x, y, self.config.player_faction)?;
        self.available_births -= 1;
        Ok(())
    }

    /// Current state of a cell.
    pub fn get(&self, x: i32, y: i32) -> Result<Faction, GridError> {
        self.grid.get(x, y)
    }
}

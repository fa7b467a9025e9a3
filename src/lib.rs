//! # p2life
//!
//! A two-faction variant of Conway's Game of Life on a bounded grid.
//!
//! Live cells belong to Red or Green. Births and survival depend on the
//! counts of both factions among a cell's eight neighbours.
//!
//! ## Design Principles
//!
//! 1. **Simultaneous Update**: A tick computes every next state from the
//!    previous generation before any cell changes. The grid is double
//!    buffered, so scan order never affects the result.
//!
//! 2. **Injected Randomness**: The only random decision (a dead cell with
//!    three neighbours of each faction) draws from a caller-supplied
//!    generator. Seed it and runs replay exactly.
//!
//! 3. **Atomic Mutation**: Bulk cell writes validate every coordinate
//!    first; a bad coordinate changes nothing.
//!
//! ## Example
//!
//! ```
//! use p2life::{Faction, Grid, RuleEngine, SimRng};
//!
//! let mut grid = Grid::new(5, 5).unwrap();
//! grid.set_cells(Faction::Red, [(1, 2), (2, 2), (3, 2)]).unwrap();
//!
//! let engine = RuleEngine::new();
//! let mut rng = SimRng::new(42);
//! engine.tick(&mut grid, &mut rng);
//!
//! assert_eq!(grid.get(2, 1), Ok(Faction::Red));
//! assert_eq!(grid.get(1, 2), Ok(Faction::Dead));
//! ```
//!
//! ## Modules
//!
//! - `core`: Cell states, errors, RNG, configuration
//! - `grid`: Bounded cell storage and snapshots
//! - `rules`: Neighbour counting, the rule table, and `RuleEngine::tick`
//! - `session`: Driver with pause and a player birth allowance
//! - `input`: Edge-triggered click detection for polling front ends

pub mod core;
pub mod grid;
pub mod rules;
pub mod session;
pub mod input;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{Faction, GridError, SessionError, SimRng, SimRngState, SimulationConfig};

pub use crate::grid::{CellView, Grid, GridSnapshot, ParseSnapshotError, Population};

pub use crate::rules::{Decision, NeighbourCounts, P2LifeRule, RuleEngine, TickStats, TransitionRule};

pub use crate::session::Session;

pub use crate::input::ClickTracker;

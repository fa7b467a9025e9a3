//! Generation stepping.
//!
//! A tick runs in two phases:
//!
//! 1. **prepare**: every cell's next state is computed from the grid's
//!    current buffer and written into the scratch buffer. Nothing in this
//!    phase reads the scratch buffer, so the scan order cannot leak into
//!    the result.
//! 2. **commit**: the buffers are swapped.
//!
//! The rule table itself is a pure function of `(state, counts)`. The only
//! randomness is the fair coin used when a rule returns
//! [`Decision::CoinFlip`], drawn from the caller's generator.

use rand::Rng;
use tracing::{debug, trace};

use crate::core::{Faction, Result};
use crate::grid::Grid;

use super::neighbours::{count_neighbours, NeighbourCounts};

/// What a rule wants a cell to become.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Decision {
    /// Deterministic outcome.
    Become(Faction),
    /// Fair choice between two outcomes; the first wins on `true`.
    CoinFlip(Faction, Faction),
}

/// Transition rule trait.
///
/// Implementations must be pure: the same `(current, counts)` always
/// yields the same decision.
pub trait TransitionRule {
    fn decide(&self, current: Faction, counts: NeighbourCounts) -> Decision;
}

/// The two-faction P2Life rule table.
///
/// - **Birth** (dead cell): exactly 3 neighbours of one faction and not 3 of
///   the other gives that faction; 3 of each is a coin flip.
/// - **Survival** (live cell, own = same faction, opp = other faction):
///   survives when `2 <= own - opp <= 3`, or when `own - opp == 1` and
///   `own >= 2`. Otherwise it dies.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct P2LifeRule;

impl P2LifeRule {
    /// Survival test for a live cell of `faction`.
    #[must_use]
    pub fn survives(faction: Faction, counts: NeighbourCounts) -> bool {
        let Some(opponent) = faction.opponent() else {
            return false;
        };
        let own = i16::from(counts.of(faction));
        let opp = i16::from(counts.of(opponent));
        let margin = own - opp;

        (2..=3).contains(&margin) || (margin == 1 && own >= 2)
    }

    /// Birth test for a dead cell.
    #[must_use]
    pub fn birth(counts: NeighbourCounts) -> Decision {
        match (counts.red, counts.green) {
            (3, 3) => Decision::CoinFlip(Faction::Red, Faction::Green),
            (3, _) => Decision::Become(Faction::Red),
            (_, 3) => Decision::Become(Faction::Green),
            _ => Decision::Become(Faction::Dead),
        }
    }
}

impl TransitionRule for P2LifeRule {
    fn decide(&self, current: Faction, counts: NeighbourCounts) -> Decision {
        match current {
            Faction::Dead => Self::birth(counts),
            live => {
                if Self::survives(live, counts) {
                    Decision::Become(live)
                } else {
                    Decision::Become(Faction::Dead)
                }
            }
        }
    }
}

/// Counters for one committed generation.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickStats {
    /// Generation number after the commit.
    pub generation: u64,
    /// Dead cells that came alive.
    pub births: usize,
    /// Live cells that died.
    pub deaths: usize,
    /// Births decided by coin flip.
    pub contested: usize,
}

/// Advances a [`Grid`] one generation at a time.
#[derive(Clone, Debug, Default)]
pub struct RuleEngine<T: TransitionRule = P2LifeRule> {
    rule: T,
}

impl RuleEngine<P2LifeRule> {
    /// Engine running the P2Life rule table.
    #[must_use]
    pub fn new() -> Self {
        Self { rule: P2LifeRule }
    }
}

impl<T: TransitionRule> RuleEngine<T> {
    /// Engine running a custom rule.
    #[must_use]
    pub fn with_rule(rule: T) -> Self {
        Self { rule }
    }

    #[must_use]
    pub fn rule(&self) -> &T {
        &self.rule
    }

    /// Advance `grid` exactly one generation.
    ///
    /// Coin flips are drawn from `rng` in row-major order of the contested
    /// cells, so a seeded generator replays identically.
    pub fn tick<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> TickStats {
        let mut stats = self.prepare(grid, rng);
        Self::commit(grid);
        stats.generation = grid.generation();

        debug!(
            generation = stats.generation,
            births = stats.births,
            deaths = stats.deaths,
            contested = stats.contested,
            population = grid.population().total(),
            "generation committed"
        );
        stats
    }

    /// Advance `generations` times, returning the stats of each tick.
    pub fn run<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R, generations: usize) -> Vec<TickStats> {
        (0..generations).map(|_| self.tick(grid, rng)).collect()
    }

    /// Next state of one cell, evaluated against the grid's current states.
    ///
    /// Does not modify the grid.
    pub fn evaluate_cell<R: Rng + ?Sized>(&self, grid: &Grid, x: i32, y: i32, rng: &mut R) -> Result<Faction> {
        let current = grid.get(x, y)?;
        let (columns, rows) = grid.dimensions();
        let counts = count_neighbours(grid.states(), columns, rows, x as usize, y as usize);
        Ok(Self::resolve(self.rule.decide(current, counts), rng))
    }

    /// Phase 1: read `current`, write `next`.
    fn prepare<R: Rng + ?Sized>(&self, grid: &mut Grid, rng: &mut R) -> TickStats {
        let (columns, rows) = grid.dimensions();
        let (current, next) = grid.buffers_mut();
        let mut stats = TickStats::default();

        for y in 0..rows {
            for x in 0..columns {
                let idx = y * columns + x;
                let state = current[idx];
                let counts = count_neighbours(current, columns, rows, x, y);

                let decision = self.rule.decide(state, counts);
                let outcome = Self::resolve(decision, rng);

                if let Decision::CoinFlip(..) = decision {
                    stats.contested += 1;
                    trace!(x, y, outcome = %outcome, "contested birth");
                }
                match (state.is_alive(), outcome.is_alive()) {
                    (false, true) => stats.births += 1,
                    (true, false) => stats.deaths += 1,
                    _ => {}
                }

                next[idx] = outcome;
            }
        }

        stats
    }

    /// Phase 2: promote `next` to `current`.
    fn commit(grid: &mut Grid) {
        grid.commit();
    }

    fn resolve<R: Rng + ?Sized>(decision: Decision, rng: &mut R) -> Faction {
        match decision {
            Decision::Become(state) => state,
            Decision::CoinFlip(heads, tails) => {
                if rng.gen_bool(0.5) {
                    heads
                } else {
                    tails
                }
            }
        }
    }
}

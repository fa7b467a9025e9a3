//! Rule evaluation and generation stepping.
//!
//! - `neighbours`: bounded Moore-neighbourhood counts per faction
//! - `engine`: the P2Life rule table and the two-phase `RuleEngine::tick`

pub mod neighbours;
pub mod engine;

pub use neighbours::{count_neighbours, neighbour_slots, neighbours_of, NeighbourCounts, MOORE_OFFSETS};
pub use engine::{Decision, P2LifeRule, RuleEngine, TickStats, TransitionRule};

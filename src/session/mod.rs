//! Session driver for interactive front ends.
//!
//! Wraps a grid, a rule engine, and a seeded RNG with the bookkeeping a
//! game front end needs:
//! - Generation counter
//! - Pause toggle
//! - A birth allowance that refills by one per generation up to a cap,
//!   spent by placing the player's faction on dead cells
//!
//! The session never sleeps or schedules; the front end calls
//! [`Session::advance`] every [`Session::tick_interval`].

mod driver;

pub use driver::Session;

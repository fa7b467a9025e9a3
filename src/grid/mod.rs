//! Grid storage and read-only views.
//!
//! The grid knows nothing about rules: it stores states, validates
//! coordinates, and hands out snapshots.

pub mod cells;
pub mod snapshot;

pub use cells::Grid;
pub use snapshot::{CellView, GridSnapshot, ParseSnapshotError, Population};

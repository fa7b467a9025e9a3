//! Error types.
//!
//! Every failure is local and caller-correctable: nothing here terminates
//! the process, and a failed call leaves the grid unchanged.

use thiserror::Error;

/// Errors raised by [`Grid`](crate::grid::Grid) construction and access.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum GridError {
    /// Negative column or row count, or a board too large to allocate.
    #[error("invalid grid dimensions {columns}x{rows}")]
    InvalidDimensions { columns: i32, rows: i32 },

    /// Stored cells do not fill a `columns x rows` board.
    #[error("{cells} cells cannot fill a {columns}x{rows} grid")]
    CellCountMismatch {
        columns: usize,
        rows: usize,
        cells: usize,
    },

    /// Coordinate outside `[0, columns) x [0, rows)`.
    #[error("cell ({x}, {y}) is outside the {columns}x{rows} grid")]
    OutOfBounds {
        x: i32,
        y: i32,
        columns: usize,
        rows: usize,
    },
}

/// Errors raised by a driving [`Session`](crate::session::Session).
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum SessionError {
    #[error(transparent)]
    Grid(#[from] GridError),

    /// The player has no births left to spend.
    #[error("no births available")]
    NoBirthsAvailable,

    /// Player placement targeted a live cell.
    #[error("cell ({x}, {y}) is already occupied")]
    CellOccupied { x: i32, y: i32 },

    /// Rejected configuration value.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),
}

impl SessionError {
    /// Creates a configuration error.
    #[must_use]
    pub fn invalid_config<S: Into<String>>(msg: S) -> Self {
        Self::InvalidConfig(msg.into())
    }
}

/// Result alias defaulting to [`GridError`].
pub type Result<T, E = GridError> = std::result::Result<T, E>;

//! Read-only grid views for rendering and text dumps.
//!
//! ## Text format
//!
//! One character per cell (`R`, `G`, `-`), one row per line. The first line
//! is the highest `y`, so the board prints bottom-to-top:
//!
//! ```
//! use p2life::core::Faction;
//! use p2life::grid::GridSnapshot;
//!
//! let snap = GridSnapshot::from_ascii("G--\nR--\n").unwrap();
//! assert_eq!(snap.get(0, 0), Some(Faction::Red));
//! assert_eq!(snap.get(0, 1), Some(Faction::Green));
//! assert_eq!(snap.to_ascii(), "G--\nR--\n");
//! ```

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::core::{Faction, GridError};

/// One cell as seen from outside the grid.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CellView {
    pub x: usize,
    pub y: usize,
    pub state: Faction,
}

/// Live cell counts per faction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Population {
    pub red: usize,
    pub green: usize,
}

impl Population {
    /// Count the live cells in `states`.
    #[must_use]
    pub fn tally(states: &[Faction]) -> Self {
        states.iter().fold(Self::default(), |mut pop, state| {
            match state {
                Faction::Red => pop.red += 1,
                Faction::Green => pop.green += 1,
                Faction::Dead => {}
            }
            pop
        })
    }

    #[must_use]
    pub fn total(&self) -> usize {
        self.red + self.green
    }
}

/// Rejected text dump.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ParseSnapshotError {
    #[error("line {line} has {found} cells, expected {expected}")]
    RaggedRow {
        line: usize,
        expected: usize,
        found: usize,
    },

    #[error("unknown cell glyph {glyph:?} at line {line}, column {column}")]
    UnknownGlyph {
        glyph: char,
        line: usize,
        column: usize,
    },
}

/// Owned copy of a grid's current states.
///
/// Deserialization rejects payloads whose cell list does not fill the
/// stated board.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "RawSnapshot")]
pub struct GridSnapshot {
    columns: usize,
    rows: usize,
    generation: u64,
    cells: Vec<Faction>,
}

/// Unchecked wire form of [`GridSnapshot`].
#[derive(Deserialize)]
struct RawSnapshot {
    columns: usize,
    rows: usize,
    generation: u64,
    cells: Vec<Faction>,
}

impl TryFrom<RawSnapshot> for GridSnapshot {
    type Error = GridError;

    fn try_from(raw: RawSnapshot) -> Result<Self, Self::Error> {
        if raw.columns.checked_mul(raw.rows) != Some(raw.cells.len()) {
            return Err(GridError::CellCountMismatch {
                columns: raw.columns,
                rows: raw.rows,
                cells: raw.cells.len(),
            });
        }
        Ok(Self::new(raw.columns, raw.rows, raw.generation, raw.cells))
    }
}

impl GridSnapshot {
    pub(crate) fn new(columns: usize, rows: usize, generation: u64, cells: Vec<Faction>) -> Self {
        debug_assert_eq!(cells.len(), columns * rows);
        Self {
            columns,
            rows,
            generation,
            cells,
        }
    }

    /// `(columns, rows)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    /// Generation the snapshot was taken at.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// State at `(x, y)`, or `None` off the board.
    #[must_use]
    pub fn get(&self, x: usize, y: usize) -> Option<Faction> {
        if x < self.columns && y < self.rows {
            Some(self.cells[y * self.columns + x])
        } else {
            None
        }
    }

    /// States in row-major order.
    #[must_use]
    pub fn states(&self) -> &[Faction] {
        &self.cells
    }

    /// Iterate over `(x, y, state)` in row-major order.
    pub fn iter(&self) -> impl Iterator<Item = CellView> + '_ {
        let columns = self.columns;
        self.cells.iter().enumerate().map(move |(idx, &state)| CellView {
            x: idx % columns,
            y: idx / columns,
            state,
        })
    }

    /// Coordinates of every cell in the given state.
    #[must_use]
    pub fn positions_of(&self, state: Faction) -> Vec<(usize, usize)> {
        self.iter()
            .filter(|cell| cell.state == state)
            .map(|cell| (cell.x, cell.y))
            .collect()
    }

    #[must_use]
    pub fn population(&self) -> Population {
        Population::tally(&self.cells)
    }

    /// Numeric codes (see [`Faction::code`]) in row-major order.
    #[must_use]
    pub fn to_codes(&self) -> Vec<u8> {
        self.cells.iter().map(|state| state.code()).collect()
    }

    /// Render as text, highest row first.
    #[must_use]
    pub fn to_ascii(&self) -> String {
        let mut out = String::with_capacity((self.columns + 1) * self.rows);
        for y in (0..self.rows).rev() {
            let row = &self.cells[y * self.columns..(y + 1) * self.columns];
            out.extend(row.iter().map(|state| state.glyph()));
            out.push('\n');
        }
        out
    }

    /// Parse the text format produced by [`GridSnapshot::to_ascii`].
    ///
    /// Blank lines are skipped, so a board with zero columns cannot be
    /// expressed in this format. The generation is set to 0.
    pub fn from_ascii(text: &str) -> Result<Self, ParseSnapshotError> {
        let lines: Vec<&str> = text
            .lines()
            .map(str::trim_end)
            .filter(|line| !line.is_empty())
            .collect();

        let rows = lines.len();
        let columns = lines.first().map_or(0, |line| line.chars().count());
        let mut cells = vec![Faction::Dead; columns * rows];

        for (line_no, line) in lines.iter().enumerate() {
            let found = line.chars().count();
            if found != columns {
                return Err(ParseSnapshotError::RaggedRow {
                    line: line_no + 1,
                    expected: columns,
                    found,
                });
            }
            let y = rows - 1 - line_no;
            for (x, glyph) in line.chars().enumerate() {
                let state = Faction::from_glyph(glyph).ok_or(ParseSnapshotError::UnknownGlyph {
                    glyph,
                    line: line_no + 1,
                    column: x + 1,
                })?;
                cells[y * columns + x] = state;
            }
        }

        Ok(Self::new(columns, rows, 0, cells))
    }
}

impl std::fmt::Display for GridSnapshot {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.to_ascii())
    }
}

//! Moore-neighbourhood counting on a bounded board.

use crate::core::{Faction, Result};
use crate::grid::Grid;

/// The eight `(dx, dy)` offsets around a cell.
pub const MOORE_OFFSETS: [(i32, i32); 8] = [
    (-1, -1),
    (0, -1),
    (1, -1),
    (-1, 0),
    (1, 0),
    (-1, 1),
    (0, 1),
    (1, 1),
];

/// Live neighbours of one cell, split by faction.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub struct NeighbourCounts {
    pub red: u8,
    pub green: u8,
}

impl NeighbourCounts {
    #[must_use]
    pub const fn new(red: u8, green: u8) -> Self {
        Self { red, green }
    }

    /// Count for one faction. `Dead` always counts zero.
    #[must_use]
    pub const fn of(self, faction: Faction) -> u8 {
        match faction {
            Faction::Red => self.red,
            Faction::Green => self.green,
            Faction::Dead => 0,
        }
    }

    #[must_use]
    pub const fn total(self) -> u8 {
        self.red + self.green
    }
}

/// Count neighbours of `(x, y)` in a row-major `columns x rows` slice.
///
/// Offsets that fall off the board are skipped; edge and corner cells
/// simply see fewer neighbours.
pub fn count_neighbours(
    cells: &[Faction],
    columns: usize,
    rows: usize,
    x: usize,
    y: usize,
) -> NeighbourCounts {
    let mut counts = NeighbourCounts::default();

    for (dx, dy) in MOORE_OFFSETS {
        let (Some(nx), Some(ny)) = (x.checked_add_signed(dx as isize), y.checked_add_signed(dy as isize))
        else {
            continue;
        };
        if nx >= columns || ny >= rows {
            continue;
        }

        match cells[ny * columns + nx] {
            Faction::Red => counts.red += 1,
            Faction::Green => counts.green += 1,
            Faction::Dead => {}
        }
    }

    counts
}

/// Bounds-checked neighbour count against a grid's current states.
pub fn neighbours_of(grid: &Grid, x: i32, y: i32) -> Result<NeighbourCounts> {
    grid.get(x, y)?;
    let (columns, rows) = grid.dimensions();
    Ok(count_neighbours(grid.states(), columns, rows, x as usize, y as usize))
}

/// Number of on-board neighbour positions of `(x, y)`, regardless of state.
#[must_use]
pub fn neighbour_slots(columns: usize, rows: usize, x: usize, y: usize) -> usize {
    MOORE_OFFSETS
        .iter()
        .filter(|&&(dx, dy)| {
            match (x.checked_add_signed(dx as isize), y.checked_add_signed(dy as isize)) {
                (Some(nx), Some(ny)) => nx < columns && ny < rows,
                _ => false,
            }
        })
        .count()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::GridError;

    #[test]
    fn test_offsets_exclude_centre() {
        assert!(!MOORE_OFFSETS.contains(&(0, 0)));
        assert_eq!(MOORE_OFFSETS.len(), 8);
    }

    #[test]
    fn test_count_neighbours() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cells(Faction::Red, [(1, 1), (2, 1), (3, 3)]).unwrap();
        grid.set_cells(Faction::Green, [(2, 3), (4, 4)]).unwrap();

        assert_eq!(neighbours_of(&grid, 2, 2), Ok(NeighbourCounts::new(3, 1)));
        assert_eq!(neighbours_of(&grid, 3, 4), Ok(NeighbourCounts::new(1, 2)));
        // Own state is not counted
        assert_eq!(neighbours_of(&grid, 1, 1), Ok(NeighbourCounts::new(1, 0)));
        assert_eq!(neighbours_of(&grid, 0, 4), Ok(NeighbourCounts::new(0, 0)));
    }

    #[test]
    fn test_corner_sees_three() {
        let mut grid = Grid::new(3, 3).unwrap();
        let all: Vec<_> = (0..3).flat_map(|x| (0..3).map(move |y| (x, y))).collect();
        grid.set_cells(Faction::Green, all).unwrap();

        assert_eq!(neighbours_of(&grid, 0, 0).unwrap().green, 3);
        assert_eq!(neighbours_of(&grid, 2, 2).unwrap().green, 3);
        assert_eq!(neighbours_of(&grid, 1, 0).unwrap().green, 5);
        assert_eq!(neighbours_of(&grid, 1, 1).unwrap().green, 8);
    }

    #[test]
    fn test_neighbour_slots() {
        assert_eq!(neighbour_slots(3, 3, 0, 0), 3);
        assert_eq!(neighbour_slots(3, 3, 1, 0), 5);
        assert_eq!(neighbour_slots(3, 3, 1, 1), 8);
        assert_eq!(neighbour_slots(1, 1, 0, 0), 0);
    }

    #[test]
    fn test_neighbours_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(neighbours_of(&grid, 2, 0), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_counts_accessors() {
        let counts = NeighbourCounts::new(2, 3);
        assert_eq!(counts.of(Faction::Red), 2);
        assert_eq!(counts.of(Faction::Green), 3);
        assert_eq!(counts.of(Faction::Dead), 0);
        assert_eq!(counts.total(), 5);
    }
}

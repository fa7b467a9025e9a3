//! Bounded, double-buffered cell storage.
//!
//! `current` holds each cell's authoritative state; `next` is the scratch
//! buffer the rule engine writes during the prepare phase. Outside a tick
//! the two buffers are always equal.

use crate::core::{Faction, GridError, Result};

use super::snapshot::{CellView, GridSnapshot, Population};

/// A fixed-size `columns x rows` board of cells.
///
/// Coordinates are `(x, y)` with `0 <= x < columns` and `0 <= y < rows`.
/// Storage is row-major. The grid does not wrap.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Grid {
    columns: usize,
    rows: usize,
    current: Vec<Faction>,
    next: Vec<Faction>,
    generation: u64,
}

impl Grid {
    /// Create a grid with every cell dead.
    ///
    /// Zero-sized grids are valid; negative sizes are not. Sizes whose
    /// storage cannot be allocated are rejected as invalid too.
    pub fn new(columns: i32, rows: i32) -> Result<Self> {
        let invalid = GridError::InvalidDimensions { columns, rows };
        let (Ok(width), Ok(height)) = (usize::try_from(columns), usize::try_from(rows)) else {
            return Err(invalid);
        };
        let size = width.checked_mul(height).ok_or_else(|| invalid.clone())?;
        let current = dead_cells(size).ok_or_else(|| invalid.clone())?;
        let next = dead_cells(size).ok_or(invalid)?;
        Ok(Self {
            columns: width,
            rows: height,
            current,
            next,
            generation: 0,
        })
    }

    /// Rebuild a grid from a snapshot. The generation counter is restored too.
    pub fn from_snapshot(snapshot: &GridSnapshot) -> Result<Self> {
        let (columns, rows) = snapshot.dimensions();
        let current = snapshot.states().to_vec();
        if columns.checked_mul(rows) != Some(current.len()) {
            return Err(GridError::CellCountMismatch {
                columns,
                rows,
                cells: current.len(),
            });
        }
        Ok(Self {
            columns,
            rows,
            next: current.clone(),
            current,
            generation: snapshot.generation(),
        })
    }

    /// `(columns, rows)`.
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.columns, self.rows)
    }

    #[must_use]
    pub fn columns(&self) -> usize {
        self.columns
    }

    #[must_use]
    pub fn rows(&self) -> usize {
        self.rows
    }

    /// Total number of cells.
    #[must_use]
    pub fn len(&self) -> usize {
        self.current.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.current.is_empty()
    }

    /// Number of generations committed since construction or the last clear.
    #[must_use]
    pub fn generation(&self) -> u64 {
        self.generation
    }

    /// Check if a coordinate lies on the board.
    #[inline]
    #[must_use]
    pub fn in_bounds(&self, x: i32, y: i32) -> bool {
        x >= 0 && y >= 0 && (x as usize) < self.columns && (y as usize) < self.rows
    }

    #[inline]
    pub(crate) fn index_of(&self, x: usize, y: usize) -> usize {
        y * self.columns + x
    }

    fn checked_index(&self, x: i32, y: i32) -> Result<usize> {
        if !self.in_bounds(x, y) {
            return Err(GridError::OutOfBounds {
                x,
                y,
                columns: self.columns,
                rows: self.rows,
            });
        }
        Ok(self.index_of(x as usize, y as usize))
    }

    /// Current state of a cell.
    pub fn get(&self, x: i32, y: i32) -> Result<Faction> {
        self.checked_index(x, y).map(|idx| self.current[idx])
    }

    /// Overwrite the state of every listed cell.
    ///
    /// All coordinates are validated first; if any is out of bounds the
    /// grid is left untouched. Duplicates are allowed.
    pub fn set_cells<I>(&mut self, state: Faction, coordinates: I) -> Result<()>
    where
        I: IntoIterator<Item = (i32, i32)>,
    {
        let indices = coordinates
            .into_iter()
            .map(|(x, y)| self.checked_index(x, y))
            .collect::<Result<Vec<_>>>()?;

        for idx in indices {
            self.current[idx] = state;
            self.next[idx] = state;
        }
        Ok(())
    }

    /// Overwrite a single cell.
    pub fn set(&mut self, x: i32, y: i32, state: Faction) -> Result<()> {
        self.set_cells(state, [(x, y)])
    }

    /// Kill every cell and reset the generation counter.
    pub fn clear(&mut self) {
        self.current.fill(Faction::Dead);
        self.next.fill(Faction::Dead);
        self.generation = 0;
    }

    /// Borrowed iteration over `(x, y, state)` in row-major order.
    pub fn cells(&self) -> impl Iterator<Item = CellView> + '_ {
        let columns = self.columns;
        self.current.iter().enumerate().map(move |(idx, &state)| CellView {
            x: idx % columns,
            y: idx / columns,
            state,
        })
    }

    /// Owned, read-only copy of the current states.
    #[must_use]
    pub fn snapshot(&self) -> GridSnapshot {
        GridSnapshot::new(self.columns, self.rows, self.generation, self.current.clone())
    }

    /// Current states, row-major.
    #[must_use]
    pub fn states(&self) -> &[Faction] {
        &self.current
    }

    /// Split borrow for the prepare phase: read `current`, write `next`.
    pub(crate) fn buffers_mut(&mut self) -> (&[Faction], &mut [Faction]) {
        (&self.current, &mut self.next)
    }

    /// Promote `next` to `current` and re-establish `next == current`.
    pub(crate) fn commit(&mut self) {
        std::mem::swap(&mut self.current, &mut self.next);
        self.next.copy_from_slice(&self.current);
        self.generation += 1;
    }

    /// Live cell counts per faction.
    #[must_use]
    pub fn population(&self) -> Population {
        Population::tally(&self.current)
    }

    #[cfg(test)]
    pub(crate) fn buffers_agree(&self) -> bool {
        self.current == self.next
    }
}

/// `size` dead cells, or `None` if the allocation fails.
fn dead_cells(size: usize) -> Option<Vec<Faction>> {
    let mut cells = Vec::new();
    cells.try_reserve_exact(size).ok()?;
    cells.resize(size, Faction::Dead);
    Some(cells)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_grid_is_dead() {
        let grid = Grid::new(4, 3).unwrap();
        assert_eq!(grid.dimensions(), (4, 3));
        assert_eq!(grid.len(), 12);
        assert_eq!(grid.generation(), 0);
        assert!(grid.states().iter().all(|&c| c == Faction::Dead));
        assert!(grid.buffers_agree());
    }

    #[test]
    fn test_zero_sized_grid() {
        let grid = Grid::new(0, 0).unwrap();
        assert!(grid.is_empty());
        assert_eq!(grid.dimensions(), (0, 0));

        let strip = Grid::new(0, 7).unwrap();
        assert!(strip.is_empty());
        assert!(!strip.in_bounds(0, 0));
    }

    #[test]
    fn test_negative_dimensions() {
        assert_eq!(
            Grid::new(-1, 5),
            Err(GridError::InvalidDimensions { columns: -1, rows: 5 })
        );
        assert!(Grid::new(5, -1).is_err());
    }

    #[test]
    fn test_unallocatable_dimensions() {
        assert_eq!(
            Grid::new(i32::MAX, i32::MAX),
            Err(GridError::InvalidDimensions {
                columns: i32::MAX,
                rows: i32::MAX
            })
        );
    }

    #[test]
    fn test_population() {
        let mut grid = Grid::new(4, 4).unwrap();
        grid.set_cells(Faction::Red, [(0, 0), (1, 1)]).unwrap();
        grid.set(3, 3, Faction::Green).unwrap();
        assert_eq!(grid.population(), Population { red: 2, green: 1 });
        assert_eq!(grid.population(), grid.snapshot().population());
    }

    #[test]
    fn test_index_of() {
        let grid = Grid::new(4, 4).unwrap();
        assert_eq!(grid.index_of(0, 0), 0);
        assert_eq!(grid.index_of(3, 3), 15);
        assert_eq!(grid.index_of(1, 0), 1);
        assert_eq!(grid.index_of(0, 1), 4);
    }

    #[test]
    fn test_in_bounds() {
        let grid = Grid::new(4, 2).unwrap();
        assert!(grid.in_bounds(0, 0));
        assert!(grid.in_bounds(3, 1));

        assert!(!grid.in_bounds(-1, 0));
        assert!(!grid.in_bounds(4, 0));
        assert!(!grid.in_bounds(0, -1));
        assert!(!grid.in_bounds(0, 2));
    }

    #[test]
    fn test_set_and_get() {
        let mut grid = Grid::new(5, 5).unwrap();
        grid.set_cells(Faction::Red, [(1, 2), (2, 2)]).unwrap();
        grid.set(4, 4, Faction::Green).unwrap();

        assert_eq!(grid.get(1, 2), Ok(Faction::Red));
        assert_eq!(grid.get(2, 2), Ok(Faction::Red));
        assert_eq!(grid.get(4, 4), Ok(Faction::Green));
        assert_eq!(grid.get(0, 0), Ok(Faction::Dead));
        assert!(grid.buffers_agree());
    }

    #[test]
    fn test_set_cells_is_atomic() {
        let mut grid = Grid::new(3, 3).unwrap();
        let before = grid.clone();

        let err = grid
            .set_cells(Faction::Red, vec![(0, 0), (1, 1), (3, 0)])
            .unwrap_err();

        assert_eq!(
            err,
            GridError::OutOfBounds {
                x: 3,
                y: 0,
                columns: 3,
                rows: 3
            }
        );
        assert_eq!(grid, before);
    }

    #[test]
    fn test_get_out_of_bounds() {
        let grid = Grid::new(2, 2).unwrap();
        assert!(matches!(grid.get(2, 0), Err(GridError::OutOfBounds { .. })));
        assert!(matches!(grid.get(0, -1), Err(GridError::OutOfBounds { .. })));
    }

    #[test]
    fn test_cells_iteration_order() {
        let mut grid = Grid::new(3, 2).unwrap();
        grid.set(2, 1, Faction::Green).unwrap();

        let cells: Vec<_> = grid.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!((cells[0].x, cells[0].y), (0, 0));
        assert_eq!((cells[3].x, cells[3].y), (0, 1));
        assert_eq!(cells[5], CellView { x: 2, y: 1, state: Faction::Green });
    }

    #[test]
    fn test_commit_swaps_and_syncs() {
        let mut grid = Grid::new(2, 1).unwrap();
        {
            let (current, next) = grid.buffers_mut();
            assert_eq!(current, &[Faction::Dead, Faction::Dead]);
            next[1] = Faction::Red;
        }
        grid.commit();

        assert_eq!(grid.get(1, 0), Ok(Faction::Red));
        assert_eq!(grid.generation(), 1);
        assert!(grid.buffers_agree());
    }

    #[test]
    fn test_clear() {
        let mut grid = Grid::new(3, 3).unwrap();
        grid.set_cells(Faction::Green, [(0, 0), (2, 2)]).unwrap();
        grid.commit();

        grid.clear();
        assert!(grid.cells().all(|c| c.state == Faction::Dead));
        assert_eq!(grid.generation(), 0);
        assert!(grid.buffers_agree());
    }

    #[test]
    fn test_snapshot_roundtrip() {
        let mut grid = Grid::new(4, 3).unwrap();
        grid.set_cells(Faction::Red, [(0, 0), (3, 2)]).unwrap();
        grid.commit();

        let restored = Grid::from_snapshot(&grid.snapshot()).unwrap();
        assert_eq!(restored, grid);
    }
}

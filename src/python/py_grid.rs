//! Grid and session bindings for Python.

use numpy::PyArray2;
use pyo3::prelude::*;

use crate::core::SimulationConfig;
use crate::grid::Grid;
use crate::rules::RuleEngine;
use crate::session::Session;

use super::py_core::{faction_from_code, grid_err, session_err, snapshot_numpy, PyRng};

/// Python wrapper for Grid.
#[pyclass(name = "Grid")]
#[derive(Clone, Debug)]
pub struct PyGrid {
    grid: Grid,
    engine: RuleEngine,
}

#[pymethods]
impl PyGrid {
    #[new]
    fn new(columns: i32, rows: i32) -> PyResult<Self> {
        let grid = Grid::new(columns, rows).map_err(grid_err)?;
        Ok(Self {
            grid,
            engine: RuleEngine::new(),
        })
    }

    /// (columns, rows)
    fn dimensions(&self) -> (usize, usize) {
        self.grid.dimensions()
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.grid.generation()
    }

    /// Set every listed (x, y) to `state` (0 dead, 1 red, 2 green).
    /// Nothing changes if any coordinate is out of bounds.
    fn set_cells(&mut self, state: u8, coordinates: Vec<(i32, i32)>) -> PyResult<()> {
        let faction = faction_from_code(state)?;
        self.grid.set_cells(faction, coordinates).map_err(grid_err)
    }

    fn get(&self, x: i32, y: i32) -> PyResult<u8> {
        self.grid.get(x, y).map(|f| f.code()).map_err(grid_err)
    }

    fn clear(&mut self) {
        self.grid.clear();
    }

    /// Advance one generation, drawing tie-breaks from `rng`.
    fn tick(&mut self, mut rng: PyRefMut<'_, PyRng>) -> u64 {
        self.engine.tick(&mut self.grid, &mut rng.0).generation
    }

    fn states_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        snapshot_numpy(py, &self.grid.snapshot())
    }

    fn to_ascii(&self) -> String {
        self.grid.snapshot().to_ascii()
    }

    fn __repr__(&self) -> String {
        let (columns, rows) = self.grid.dimensions();
        format!("Grid({}x{}, generation={})", columns, rows, self.grid.generation())
    }
}

/// Python wrapper for Session.
#[pyclass(name = "Session")]
pub struct PySession(Session);

#[pymethods]
impl PySession {
    #[new]
    #[pyo3(signature = (
        columns = 80,
        rows = 38,
        tick_interval_ms = 1000,
        max_births = 5,
        player_state = 2,
        seed = 0
    ))]
    fn new(
        columns: i32,
        rows: i32,
        tick_interval_ms: u64,
        max_births: u32,
        player_state: u8,
        seed: u64,
    ) -> PyResult<Self> {
        let config = SimulationConfig::new(columns, rows)
            .with_tick_interval_ms(tick_interval_ms)
            .with_max_births(max_births)
            .with_player_faction(faction_from_code(player_state)?)
            .with_seed(seed);
        Session::new(config).map(Self).map_err(session_err)
    }

    #[getter]
    fn generation(&self) -> u64 {
        self.0.generation()
    }

    #[getter]
    fn available_births(&self) -> u32 {
        self.0.available_births()
    }

    #[getter]
    fn paused(&self) -> bool {
        self.0.is_paused()
    }

    #[getter]
    fn tick_interval_ms(&self) -> u64 {
        self.0.config().tick_interval_ms
    }

    fn dimensions(&self) -> (usize, usize) {
        self.0.grid().dimensions()
    }

    fn seed(&mut self, state: u8, coordinates: Vec<(i32, i32)>) -> PyResult<()> {
        let faction = faction_from_code(state)?;
        self.0.seed(faction, coordinates).map_err(session_err)
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    fn toggle_pause(&mut self) -> bool {
        self.0.toggle_pause()
    }

    /// Timer callback. Returns False while paused.
    fn advance(&mut self) -> bool {
        self.0.advance().is_some()
    }

    fn place(&mut self, x: i32, y: i32) -> PyResult<()> {
        self.0.place(x, y).map_err(session_err)
    }

    fn get(&self, x: i32, y: i32) -> PyResult<u8> {
        self.0.get(x, y).map(|f| f.code()).map_err(grid_err)
    }

    fn states_numpy<'py>(&self, py: Python<'py>) -> PyResult<Bound<'py, PyArray2<u8>>> {
        snapshot_numpy(py, &self.0.snapshot())
    }

    fn to_ascii(&self) -> String {
        self.0.snapshot().to_ascii()
    }

    fn __repr__(&self) -> String {
        let (columns, rows) = self.0.grid().dimensions();
        format!(
            "Session({}x{}, generation={}, births={})",
            columns,
            rows,
            self.0.generation(),
            self.0.available_births()
        )
    }
}

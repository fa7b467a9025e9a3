//! Core type bindings for Python.

use numpy::{PyArray1, PyArray2, PyArrayMethods};
use pyo3::prelude::*;

use crate::core::{Faction, GridError, SessionError, SimRng};
use crate::grid::GridSnapshot;
use crate::input::ClickTracker;

/// Convert a Python integer code into a faction.
pub(crate) fn faction_from_code(code: u8) -> PyResult<Faction> {
    Faction::from_code(code).ok_or_else(|| {
        PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("unknown cell state {}", code))
    })
}

pub(crate) fn grid_err(err: GridError) -> PyErr {
    match err {
        GridError::OutOfBounds { .. } => PyErr::new::<pyo3::exceptions::PyIndexError, _>(err.to_string()),
        GridError::InvalidDimensions { .. } | GridError::CellCountMismatch { .. } => {
            PyErr::new::<pyo3::exceptions::PyValueError, _>(err.to_string())
        }
    }
}

pub(crate) fn session_err(err: SessionError) -> PyErr {
    match err {
        SessionError::Grid(inner) => grid_err(inner),
        other => PyErr::new::<pyo3::exceptions::PyValueError, _>(other.to_string()),
    }
}

/// `rows x columns` array of cell codes, row 0 first.
pub(crate) fn snapshot_numpy<'py>(py: Python<'py>, snapshot: &GridSnapshot) -> PyResult<Bound<'py, PyArray2<u8>>> {
    let (columns, rows) = snapshot.dimensions();
    PyArray1::from_vec_bound(py, snapshot.to_codes())
        .reshape([rows, columns])
        .map_err(|e| PyErr::new::<pyo3::exceptions::PyValueError, _>(format!("{}", e)))
}

/// Python wrapper for SimRng.
#[pyclass(name = "Rng")]
#[derive(Clone, Debug)]
pub struct PyRng(pub SimRng);

#[pymethods]
impl PyRng {
    #[new]
    #[pyo3(signature = (seed = 0))]
    fn new(seed: u64) -> Self {
        Self(SimRng::new(seed))
    }

    /// Independent deterministic branch.
    fn fork(&mut self) -> Self {
        Self(self.0.fork())
    }

    #[getter]
    fn seed(&self) -> u64 {
        self.0.seed()
    }

    fn __repr__(&self) -> String {
        format!("Rng(seed={})", self.0.seed())
    }
}

/// Python wrapper for ClickTracker.
#[pyclass(name = "ClickTracker")]
#[derive(Clone, Debug, Default)]
pub struct PyClickTracker(pub ClickTracker);

#[pymethods]
impl PyClickTracker {
    #[new]
    fn new() -> Self {
        Self::default()
    }

    /// Feed one poll of (primary, secondary). Returns True on a completed click.
    fn update(&mut self, primary: bool, secondary: bool) -> bool {
        self.0.update(primary, secondary)
    }

    #[getter]
    fn pending(&self) -> bool {
        self.0.is_pending()
    }

    fn reset(&mut self) {
        self.0.reset();
    }

    fn __repr__(&self) -> String {
        format!(
            "ClickTracker(pending={}, cancelled={})",
            self.0.is_pending(),
            self.0.is_cancelled()
        )
    }
}

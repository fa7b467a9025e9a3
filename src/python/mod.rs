//! Python bindings for the p2life simulation kernel.
//!
//! # Quick Start
//!
//! ```python
//! import p2life
//!
//! grid = p2life.Grid(5, 5)
//! grid.set_cells(p2life.RED, [(1, 2), (2, 2), (3, 2)])
//! grid.tick(p2life.Rng(seed=42))
//! print(grid.to_ascii())
//!
//! # Game-style driver with a birth allowance
//! session = p2life.Session(columns=80, rows=38, seed=1)
//! session.advance()
//! session.place(10, 10)
//! ```

use pyo3::prelude::*;

mod py_core;
mod py_grid;

pub use py_core::*;
pub use py_grid::*;

use crate::core::Faction;

/// p2life: two-faction Game of Life.
#[pymodule]
fn p2life(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add("DEAD", Faction::Dead.code())?;
    m.add("RED", Faction::Red.code())?;
    m.add("GREEN", Faction::Green.code())?;

    m.add_class::<PyRng>()?;
    m.add_class::<PyClickTracker>()?;
    m.add_class::<PyGrid>()?;
    m.add_class::<PySession>()?;

    Ok(())
}

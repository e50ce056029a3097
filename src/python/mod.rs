//! Python bindings for the Mastermind engine.
//!
//! Lets a Python desktop UI act as the presentation layer while scoring and
//! round state stay in Rust.
//!
//! # Quick Start
//!
//! ```python
//! import mastermind_core as mm
//!
//! game = mm.Mastermind(max_guesses=12)
//! score = game.submit([mm.Color("red"), "green", "blue", mm.Color("Y")])
//! print(score.correct_colors, score.correct_placement, game.status)
//!
//! if game.status_message:
//!     print(game.status_message)
//!     game.new_round()
//! ```

use pyo3::exceptions::{PyRuntimeError, PyValueError};
use pyo3::prelude::*;

use crate::core::GameError;

mod py_core;
mod py_game;

pub use py_core::*;
pub use py_game::*;

impl From<GameError> for PyErr {
    fn from(err: GameError) -> Self {
        match err {
            GameError::InvalidState { .. } => PyRuntimeError::new_err(err.to_string()),
            GameError::InvalidGuess(_) | GameError::InvalidConfig(_) => {
                PyValueError::new_err(err.to_string())
            }
        }
    }
}

/// The palette in display order.
#[pyfunction]
fn palette() -> Vec<PyColor> {
    PyColor::all()
}

/// mastermind_core: scoring and round state for Mastermind.
#[pymodule]
fn mastermind_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyColor>()?;
    m.add_class::<PyScore>()?;
    m.add_class::<PyMastermind>()?;
    m.add_function(wrap_pyfunction!(palette, m)?)?;

    Ok(())
}

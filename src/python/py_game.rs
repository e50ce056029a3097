//! Game session bindings for Python.

use pyo3::prelude::*;

use crate::core::GameConfig;
use crate::session::Mastermind;

use super::py_core::{py_colors, resolve_colors, ColorArg, PyColor, PyScore};

/// Python wrapper for a Mastermind session.
#[pyclass(name = "Mastermind")]
pub struct PyMastermind {
    game: Mastermind,
}

#[pymethods]
impl PyMastermind {
    /// Start a session.
    ///
    /// # Arguments
    /// - max_guesses: Attempts allowed per round (default: 12)
    /// - seed: RNG seed for reproducible secrets; None draws from OS entropy
    #[new]
    #[pyo3(signature = (max_guesses = 12, seed = None))]
    fn new(max_guesses: u32, seed: Option<u64>) -> PyResult<Self> {
        let mut config = GameConfig::new().with_max_guesses(max_guesses);
        config.seed = seed;
        Ok(Self {
            game: Mastermind::new(config)?,
        })
    }

    /// Score a complete guess of four `Color` objects or color names.
    fn submit(&mut self, guess: Vec<ColorArg>) -> PyResult<PyScore> {
        let colors = resolve_colors(&guess)?;
        Ok(PyScore(self.game.submit(colors)?))
    }

    /// Place a color in the first empty draft slot.
    ///
    /// Returns the slot index, or None if the draft is full.
    fn place(&mut self, color: ColorArg) -> PyResult<Option<usize>> {
        Ok(self.game.draft_mut().place(color.resolve()?))
    }

    /// Empty a draft slot.
    fn clear(&mut self, slot: usize) -> bool {
        self.game.draft_mut().clear(slot)
    }

    /// Draft slots, None for empty.
    #[getter]
    fn draft(&self) -> Vec<Option<PyColor>> {
        self.game
            .draft()
            .slots()
            .iter()
            .map(|slot| slot.map(PyColor))
            .collect()
    }

    /// Submit the draft row.
    fn submit_draft(&mut self) -> PyResult<PyScore> {
        Ok(PyScore(self.game.submit_draft()?))
    }

    /// Discard the current round and start a new one.
    fn new_round(&mut self) {
        self.game.new_round();
    }

    /// "ongoing", "won" or "lost".
    #[getter]
    fn status(&self) -> String {
        self.game.status().to_string()
    }

    #[getter]
    fn status_message(&self) -> Option<&'static str> {
        self.game.status_message()
    }

    #[getter]
    fn guess_count(&self) -> u32 {
        self.game.round().guess_count()
    }

    #[getter]
    fn remaining_guesses(&self) -> u32 {
        self.game.remaining_guesses()
    }

    #[getter]
    fn max_guesses(&self) -> u32 {
        self.game.round().max_guesses()
    }

    /// Submitted guesses with their scores, oldest first.
    #[getter]
    fn history(&self) -> Vec<(Vec<PyColor>, PyScore)> {
        self.game
            .round()
            .history()
            .iter()
            .map(|record| (py_colors(&record.guess), PyScore(record.score)))
            .collect()
    }

    /// The secret, once the round has ended.
    #[getter]
    fn revealed_secret(&self) -> Option<Vec<PyColor>> {
        self.game.round().revealed_secret().map(py_colors)
    }

    fn __repr__(&self) -> String {
        format!(
            "Mastermind(guesses={}/{}, status={})",
            self.game.round().guess_count(),
            self.game.round().max_guesses(),
            self.game.status()
        )
    }
}

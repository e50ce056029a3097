//! Core type bindings for Python.

use pyo3::prelude::*;

use crate::core::{Color, GameError, Sequence};
use crate::rules::Score;

/// Python wrapper for Color.
#[pyclass(name = "Color")]
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PyColor(pub Color);

#[pymethods]
impl PyColor {
    /// Create a color from a name ("red") or symbol ("R").
    #[new]
    fn new(name: &str) -> PyResult<Self> {
        Ok(Self(name.parse()?))
    }

    /// The whole palette in display order.
    #[staticmethod]
    pub fn all() -> Vec<PyColor> {
        Color::ALL.iter().copied().map(PyColor).collect()
    }

    #[getter]
    fn name(&self) -> &'static str {
        self.0.name()
    }

    /// One-letter key.
    #[getter]
    fn symbol(&self) -> char {
        self.0.symbol()
    }

    #[getter]
    fn rgb(&self) -> (u8, u8, u8) {
        self.0.rgb()
    }

    /// Position in the palette (0-based).
    #[getter]
    fn index(&self) -> usize {
        self.0.index()
    }

    fn __repr__(&self) -> String {
        format!("Color.{}", self.0.name())
    }

    fn __str__(&self) -> &'static str {
        self.0.name()
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }

    fn __hash__(&self) -> u64 {
        self.0.index() as u64
    }
}

/// A color argument from Python: a `Color` object or a color name/symbol.
#[derive(FromPyObject, Clone, Debug)]
pub enum ColorArg {
    Color(PyColor),
    Name(String),
}

impl ColorArg {
    pub fn resolve(&self) -> Result<Color, GameError> {
        match self {
            ColorArg::Color(color) => Ok(color.0),
            ColorArg::Name(name) => name.parse(),
        }
    }
}

/// Python wrapper for Score.
#[pyclass(name = "Score")]
#[derive(Clone, Debug)]
pub struct PyScore(pub Score);

#[pymethods]
impl PyScore {
    #[getter]
    fn correct_colors(&self) -> u8 {
        self.0.correct_colors
    }

    #[getter]
    fn correct_placement(&self) -> u8 {
        self.0.correct_placement
    }

    /// True when every peg is in place.
    fn is_win(&self) -> bool {
        self.0.is_win()
    }

    fn __repr__(&self) -> String {
        format!(
            "Score(correct_colors={}, correct_placement={})",
            self.0.correct_colors, self.0.correct_placement
        )
    }

    fn __eq__(&self, other: &Self) -> bool {
        self.0 == other.0
    }
}

/// Resolve Python color arguments into engine colors.
pub(crate) fn resolve_colors(args: &[ColorArg]) -> Result<Vec<Color>, GameError> {
    args.iter().map(ColorArg::resolve).collect()
}

/// Wrap a sequence's pegs for Python.
pub(crate) fn py_colors(sequence: &Sequence) -> Vec<PyColor> {
    sequence.iter().map(PyColor).collect()
}

//! Core engine types: colors, sequences, RNG, configuration, errors.
//!
//! Everything here is plain data. Game rules live in `rules`.

pub mod color;
pub mod config;
pub mod error;
pub mod rng;
pub mod sequence;

pub use color::{Color, PALETTE_SIZE};
pub use config::{GameConfig, DEFAULT_MAX_GUESSES};
pub use error::{GameError, GuessDefect, Result};
pub use rng::GameRng;
pub use sequence::{IntoGuess, Sequence, CODE_LENGTH};

//! # mastermind-core
//!
//! Scoring and round state for the Mastermind code-breaking game.
//!
//! A secret of four colored pegs is drawn from a six-color palette. The
//! player has twelve attempts; each guess is answered with how many colors
//! are right regardless of position and how many pegs sit in the right place.
//!
//! ## Design Principles
//!
//! 1. **Presentation-Free**: no windowing, painting or input handling. A UI
//!    collaborator builds guesses, calls in, and renders what comes back.
//!
//! 2. **Injected Randomness**: secrets come from a caller-owned `GameRng`,
//!    so a seed pins every round for tests.
//!
//! 3. **Validated at the Boundary**: malformed guesses and guesses against a
//!    finished round are rejected with a `GameError` and never touch state.
//!
//! ## Modules
//!
//! - `core`: Colors, sequences, RNG, configuration, errors
//! - `generator`: Secret generation
//! - `rules`: Scoring and the round state machine
//! - `session`: Draft row and multi-round play session
//! - `python`: PyO3 bindings (feature `python`)

pub mod core;
pub mod generator;
pub mod rules;
pub mod session;

#[cfg(feature = "python")]
pub mod python;

// Re-export commonly used types
pub use crate::core::{
    Color, GameConfig, GameError, GameRng, GuessDefect, IntoGuess, Result, Sequence, CODE_LENGTH,
    DEFAULT_MAX_GUESSES, PALETTE_SIZE,
};

pub use crate::generator::{generate, SequenceGenerator};

pub use crate::rules::{evaluate_guess, score, GuessRecord, RoundState, RoundStatus, Score};

pub use crate::session::{GuessDraft, Mastermind};

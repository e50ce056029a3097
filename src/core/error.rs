//! Error types for the engine.
//!
//! Every failure here is a caller-usage error caught at the engine boundary.
//! There is no I/O and nothing to retry.

use thiserror::Error;

use crate::rules::RoundStatus;

/// Why a guess was rejected.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GuessDefect {
    #[error("guess has {actual} pegs, expected {expected}")]
    WrongLength { expected: usize, actual: usize },

    #[error("slot {slot} is empty")]
    UnsetSlot { slot: usize },

    #[error("unknown color {0:?}")]
    UnknownColor(String),
}

/// Engine error.
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// The guess is malformed. Round state was not touched.
    #[error("invalid guess: {0}")]
    InvalidGuess(#[from] GuessDefect),

    /// A guess was submitted to a round that already ended.
    #[error("round is {status}, no further guesses accepted")]
    InvalidState { status: RoundStatus },

    #[error("invalid config: {0}")]
    InvalidConfig(String),
}

/// Convenience alias used throughout the crate.
pub type Result<T> = std::result::Result<T, GameError>;

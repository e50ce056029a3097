//! Game rules: scoring and the round state machine.
//!
//! `score` is a pure function of secret and guess. `RoundState` wraps it
//! with the attempt limit and win/loss transitions.

pub mod round;
pub mod score;

pub use round::{evaluate_guess, GuessRecord, RoundState, RoundStatus};
pub use score::{correct_colors, correct_placement, score, Score};

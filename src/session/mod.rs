//! Session layer for UI collaborators.
//!
//! - `GuessDraft`: the row of pegs being assembled before submission
//! - `Mastermind`: owns the secret source and current round, and starts new
//!   rounds on request

mod draft;
mod game;

pub use draft::GuessDraft;
pub use game::Mastermind;

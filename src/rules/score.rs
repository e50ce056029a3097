//! Guess scoring.
//!
//! Two counts per guess:
//! - **correct_placement**: positions where guess and secret agree
//! - **correct_colors**: color matches ignoring position, where each color
//!   contributes the smaller of its counts in secret and guess
//!
//! The second rule is what makes repeated colors score sensibly: guessing
//! four reds against a secret holding one red earns exactly one color.

use serde::{Deserialize, Serialize};

use crate::core::{Sequence, CODE_LENGTH};

/// Feedback for one guess.
///
/// Always satisfies `correct_placement <= correct_colors <= CODE_LENGTH`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Score {
    pub correct_colors: u8,
    pub correct_placement: u8,
}

impl Score {
    /// Did this guess crack the code?
    #[must_use]
    pub fn is_win(&self) -> bool {
        self.correct_placement as usize == CODE_LENGTH
    }

    /// Right color, wrong position.
    #[must_use]
    pub fn misplaced(&self) -> u8 {
        self.correct_colors - self.correct_placement
    }
}

impl std::fmt::Display for Score {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "Correct Colors: {}, Correct Placement: {}",
            self.correct_colors, self.correct_placement
        )
    }
}

/// Count positions where `guess` matches `secret`.
#[must_use]
pub fn correct_placement(secret: &Sequence, guess: &Sequence) -> u8 {
    secret
        .iter()
        .zip(guess.iter())
        .filter(|(s, g)| s == g)
        .count() as u8
}

/// Count color matches ignoring position.
#[must_use]
pub fn correct_colors(secret: &Sequence, guess: &Sequence) -> u8 {
    secret
        .color_counts()
        .iter()
        .zip(guess.color_counts().iter())
        .map(|(&s, &g)| s.min(g))
        .sum()
}

/// Score `guess` against `secret`.
///
/// ```
/// use mastermind_core::core::Sequence;
/// use mastermind_core::rules::score;
///
/// let secret: Sequence = "RGBY".parse().unwrap();
/// let s = score(&secret, &"RRRR".parse().unwrap());
/// assert_eq!((s.correct_colors, s.correct_placement), (1, 1));
/// ```
#[must_use]
pub fn score(secret: &Sequence, guess: &Sequence) -> Score {
    let result = Score {
        correct_colors: correct_colors(secret, guess),
        correct_placement: correct_placement(secret, guess),
    };
    debug_assert!(result.correct_placement <= result.correct_colors);
    debug_assert!(result.correct_colors as usize <= CODE_LENGTH);
    result
}

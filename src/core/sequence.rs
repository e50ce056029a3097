//! Fixed-length color sequences.
//!
//! A `Sequence` is either the round's secret or a submitted guess. Both are
//! four pegs, order-significant, repeats allowed. Once built, a sequence is
//! never mutated.
//!
//! Construction from loose input (slices, optional slots, strings) performs
//! all guess validation, so anything holding a `Sequence` is well formed.

use serde::{Deserialize, Serialize};
use std::ops::Index;
use std::str::FromStr;

use super::color::{Color, PALETTE_SIZE};
use super::error::{GameError, GuessDefect};

/// Number of pegs in a secret or guess.
pub const CODE_LENGTH: usize = 4;

/// An ordered row of `CODE_LENGTH` colors.
///
/// ```
/// use mastermind_core::core::{Color, Sequence};
///
/// let seq: Sequence = "RGBY".parse().unwrap();
/// assert_eq!(seq[0], Color::Red);
/// assert_eq!(seq.to_string(), "RGBY");
///
/// let short: Result<Sequence, _> = Sequence::try_from(&[Color::Red][..]);
/// assert!(short.is_err());
/// ```
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Sequence([Color; CODE_LENGTH]);

impl Sequence {
    #[must_use]
    pub const fn new(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }

    #[must_use]
    pub fn colors(&self) -> &[Color; CODE_LENGTH] {
        &self.0
    }

    pub fn iter(&self) -> impl Iterator<Item = Color> + '_ {
        self.0.iter().copied()
    }

    /// Occurrences of each palette color, indexed by `Color::index`.
    #[must_use]
    pub fn color_counts(&self) -> [u8; PALETTE_SIZE] {
        let mut counts = [0u8; PALETTE_SIZE];
        for color in self.0 {
            counts[color.index()] += 1;
        }
        counts
    }
}

impl From<[Color; CODE_LENGTH]> for Sequence {
    fn from(colors: [Color; CODE_LENGTH]) -> Self {
        Self(colors)
    }
}

impl Index<usize> for Sequence {
    type Output = Color;

    fn index(&self, index: usize) -> &Color {
        &self.0[index]
    }
}

impl TryFrom<&[Color]> for Sequence {
    type Error = GameError;

    fn try_from(colors: &[Color]) -> Result<Self, Self::Error> {
        let arr: [Color; CODE_LENGTH] = colors.try_into().map_err(|_| GuessDefect::WrongLength {
            expected: CODE_LENGTH,
            actual: colors.len(),
        })?;
        Ok(Self(arr))
    }
}

impl TryFrom<Vec<Color>> for Sequence {
    type Error = GameError;

    fn try_from(colors: Vec<Color>) -> Result<Self, Self::Error> {
        Self::try_from(colors.as_slice())
    }
}

impl TryFrom<&[Option<Color>]> for Sequence {
    type Error = GameError;

    /// Build from a row of slots; every slot must be filled.
    fn try_from(slots: &[Option<Color>]) -> Result<Self, Self::Error> {
        if slots.len() != CODE_LENGTH {
            return Err(GuessDefect::WrongLength {
                expected: CODE_LENGTH,
                actual: slots.len(),
            }
            .into());
        }

        let mut colors = [Color::Red; CODE_LENGTH];
        for (slot, (dst, src)) in colors.iter_mut().zip(slots).enumerate() {
            *dst = src.ok_or(GuessDefect::UnsetSlot { slot })?;
        }
        Ok(Self(colors))
    }
}

impl FromStr for Sequence {
    type Err = GameError;

    /// Parse either a compact symbol string (`"RGBY"`) or whitespace/comma
    /// separated color names (`"red, green, blue, yellow"`).
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let tokens: Vec<&str> = s
            .split(|c: char| c == ',' || c.is_whitespace())
            .filter(|t| !t.is_empty())
            .collect();

        let colors = if tokens.len() == 1 && tokens[0].chars().count() > 1 {
            let word = tokens[0];
            if word.parse::<Color>().is_ok() {
                // A single full name is a one-peg guess, not a symbol string.
                vec![word.parse::<Color>()?]
            } else {
                word.chars()
                    .map(|ch| ch.to_string().parse::<Color>())
                    .collect::<Result<Vec<_>, _>>()?
            }
        } else {
            tokens
                .iter()
                .map(|t| t.parse::<Color>())
                .collect::<Result<Vec<_>, _>>()?
        };

        Self::try_from(colors)
    }
}

/// Anything a caller may hand the engine as a guess.
///
/// Conversion performs the guess validation; the engine only ever scores a
/// well-formed `Sequence`.
pub trait IntoGuess {
    fn into_guess(self) -> Result<Sequence, GameError>;
}

impl IntoGuess for Sequence {
    fn into_guess(self) -> Result<Sequence, GameError> {
        Ok(self)
    }
}

impl IntoGuess for &Sequence {
    fn into_guess(self) -> Result<Sequence, GameError> {
        Ok(*self)
    }
}

impl IntoGuess for [Color; CODE_LENGTH] {
    fn into_guess(self) -> Result<Sequence, GameError> {
        Ok(Sequence(self))
    }
}

impl IntoGuess for &[Color] {
    fn into_guess(self) -> Result<Sequence, GameError> {
        Sequence::try_from(self)
    }
}

impl IntoGuess for Vec<Color> {
    fn into_guess(self) -> Result<Sequence, GameError> {
        Sequence::try_from(self)
    }
}

impl IntoGuess for &[Option<Color>] {
    fn into_guess(self) -> Result<Sequence, GameError> {
        Sequence::try_from(self)
    }
}

impl IntoGuess for &str {
    fn into_guess(self) -> Result<Sequence, GameError> {
        self.parse()
    }
}

impl std::fmt::Display for Sequence {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        for color in self.0 {
            write!(f, "{}", color.symbol())?;
        }
        Ok(())
    }
}

//! The six-color peg palette.
//!
//! Colors carry identity only. `rgb()` is provided for UI collaborators that
//! need something to paint; the engine never looks at it.

use serde::{Deserialize, Serialize};
use std::str::FromStr;

use super::error::{GameError, GuessDefect};

/// Number of colors in the palette.
pub const PALETTE_SIZE: usize = 6;

/// A peg color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub enum Color {
    Red,
    Green,
    Blue,
    Yellow,
    Orange,
    Magenta,
}

impl Color {
    /// The palette in display order.
    pub const ALL: [Color; PALETTE_SIZE] = [
        Color::Red,
        Color::Green,
        Color::Blue,
        Color::Yellow,
        Color::Orange,
        Color::Magenta,
    ];

    /// Position of this color in `Color::ALL`.
    #[must_use]
    pub const fn index(self) -> usize {
        self as usize
    }

    /// Look up a color by palette position.
    #[must_use]
    pub fn from_index(index: usize) -> Option<Self> {
        Self::ALL.get(index).copied()
    }

    /// One-letter key for compact display.
    ///
    /// Magenta is keyed `P` (purple) so every symbol is unique.
    #[must_use]
    pub const fn symbol(self) -> char {
        match self {
            Color::Red => 'R',
            Color::Green => 'G',
            Color::Blue => 'B',
            Color::Yellow => 'Y',
            Color::Orange => 'O',
            Color::Magenta => 'P',
        }
    }

    /// Full color name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Color::Red => "Red",
            Color::Green => "Green",
            Color::Blue => "Blue",
            Color::Yellow => "Yellow",
            Color::Orange => "Orange",
            Color::Magenta => "Magenta",
        }
    }

    /// RGB triple used when painting this peg.
    #[must_use]
    pub const fn rgb(self) -> (u8, u8, u8) {
        match self {
            Color::Red => (255, 0, 0),
            Color::Green => (0, 255, 0),
            Color::Blue => (0, 0, 255),
            Color::Yellow => (255, 255, 0),
            Color::Orange => (255, 165, 0),
            Color::Magenta => (255, 0, 255),
        }
    }
}

impl std::fmt::Display for Color {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Color {
    type Err = GameError;

    /// Parse a full name (any case) or a one-letter symbol.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let trimmed = s.trim();
        Color::ALL
            .iter()
            .copied()
            .find(|c| {
                c.name().eq_ignore_ascii_case(trimmed)
                    || (trimmed.len() == 1
                        && trimmed
                            .chars()
                            .next()
                            .is_some_and(|ch| ch.eq_ignore_ascii_case(&c.symbol())))
            })
            .ok_or_else(|| GameError::InvalidGuess(GuessDefect::UnknownColor(s.to_string())))
    }
}

//! Game configuration.
//!
//! Code length and palette are fixed by the game; the attempt limit and the
//! RNG seed are configurable.

use serde::{Deserialize, Serialize};

use super::error::{GameError, Result};

/// Attempts allowed per round unless configured otherwise.
pub const DEFAULT_MAX_GUESSES: u32 = 12;

/// Complete game configuration.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    /// Guesses allowed before the round is lost.
    pub max_guesses: u32,

    /// Seed for secret generation. `None` seeds from OS entropy.
    pub seed: Option<u64>,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            max_guesses: DEFAULT_MAX_GUESSES,
            seed: None,
        }
    }
}

impl GameConfig {
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn with_max_guesses(mut self, max_guesses: u32) -> Self {
        self.max_guesses = max_guesses;
        self
    }

    /// Fix the seed for deterministic secrets.
    #[must_use]
    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn validate(&self) -> Result<()> {
        if self.max_guesses == 0 {
            return Err(GameError::InvalidConfig(
                "max_guesses must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

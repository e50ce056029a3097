//! Secret generator implementation.

use crate::core::{Color, GameRng, Sequence, CODE_LENGTH};

/// Draw a secret from `rng`.
///
/// ```
/// use mastermind_core::core::GameRng;
/// use mastermind_core::generator::generate;
///
/// let a = generate(&mut GameRng::new(3));
/// let b = generate(&mut GameRng::new(3));
/// assert_eq!(a, b);
/// ```
pub fn generate(rng: &mut GameRng) -> Sequence {
    let mut colors = [Color::Red; CODE_LENGTH];
    for slot in &mut colors {
        // `Color::ALL` is never empty, so the fallback is unreachable.
        *slot = rng.choose(&Color::ALL).copied().unwrap_or(Color::Red);
    }
    Sequence::new(colors)
}

/// Owns the per-process random source and hands out one secret per round.
///
/// Each round draws from a fork of the process stream, so consecutive rounds
/// differ while a fixed seed still replays the same sequence of secrets.
#[derive(Clone, Debug)]
pub struct SequenceGenerator {
    rng: GameRng,
}

impl SequenceGenerator {
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self { rng }
    }

    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    #[must_use]
    pub fn from_entropy() -> Self {
        Self::new(GameRng::from_entropy())
    }

    /// Produce a fresh secret.
    pub fn generate(&mut self) -> Sequence {
        let mut round_rng = self.rng.fork();
        generate(&mut round_rng)
    }
}

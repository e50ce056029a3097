//! Round state machine.
//!
//! A round starts `Ongoing` with a fixed secret and an empty history. Each
//! accepted guess appends one `GuessRecord`. The round becomes `Won` on a
//! guess with every peg placed, or `Lost` once the attempt limit is reached
//! without one. Both end states are terminal.
//!
//! Rejected calls (malformed guess, terminal round) leave the state exactly
//! as it was.
//!
//! History is an `im::Vector`, so `evaluate` can return a new round from a
//! borrowed one without copying past guesses.

use im::Vector;
use serde::{Deserialize, Serialize};
use tracing::{debug, info, warn};

use super::score::{score, Score};
use crate::core::{GameError, IntoGuess, Result, Sequence, DEFAULT_MAX_GUESSES};

/// Where a round stands.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum RoundStatus {
    #[default]
    Ongoing,
    Won,
    Lost,
}

impl RoundStatus {
    #[must_use]
    pub fn is_terminal(self) -> bool {
        !matches!(self, RoundStatus::Ongoing)
    }
}

impl std::fmt::Display for RoundStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(match self {
            RoundStatus::Ongoing => "ongoing",
            RoundStatus::Won => "won",
            RoundStatus::Lost => "lost",
        })
    }
}

/// One submitted guess and its feedback.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct GuessRecord {
    pub guess: Sequence,
    pub score: Score,
}

/// State of a single round.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct RoundState {
    secret: Sequence,
    max_guesses: u32,
    history: Vector<GuessRecord>,
    status: RoundStatus,
}

impl RoundState {
    /// Start a round against `secret`.
    ///
    /// # Panics
    /// If `max_guesses` is zero. `GameConfig::validate` rejects that earlier.
    #[must_use]
    pub fn new(secret: Sequence, max_guesses: u32) -> Self {
        assert!(max_guesses > 0, "Must allow at least 1 guess");

        Self {
            secret,
            max_guesses,
            history: Vector::new(),
            status: RoundStatus::Ongoing,
        }
    }

    /// Start a round with the standard twelve attempts.
    #[must_use]
    pub fn with_default_limit(secret: Sequence) -> Self {
        Self::new(secret, DEFAULT_MAX_GUESSES)
    }

    /// The secret code. UI collaborators should only show it once
    /// `status().is_terminal()`; see `revealed_secret`.
    #[must_use]
    pub fn secret(&self) -> &Sequence {
        &self.secret
    }

    /// The secret, but only after the round has ended.
    #[must_use]
    pub fn revealed_secret(&self) -> Option<&Sequence> {
        self.status.is_terminal().then_some(&self.secret)
    }

    #[must_use]
    pub fn max_guesses(&self) -> u32 {
        self.max_guesses
    }

    /// Accepted guesses so far.
    #[must_use]
    pub fn guess_count(&self) -> u32 {
        self.history.len() as u32
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.max_guesses - self.guess_count()
    }

    #[must_use]
    pub fn history(&self) -> &Vector<GuessRecord> {
        &self.history
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.status
    }

    /// Score a guess and return the successor round. `self` is untouched.
    pub fn evaluate(&self, guess: impl IntoGuess) -> Result<(Score, RoundState)> {
        let mut next = self.clone();
        let score = next.submit(guess)?;
        Ok((score, next))
    }

    /// Score a guess and advance this round in place.
    pub fn submit(&mut self, guess: impl IntoGuess) -> Result<Score> {
        if self.status.is_terminal() {
            warn!(status = %self.status, "guess submitted to finished round");
            return Err(GameError::InvalidState { status: self.status });
        }

        let guess = guess.into_guess().inspect_err(|err| {
            warn!(error = %err, "guess rejected");
        })?;

        let score = score(&self.secret, &guess);
        self.history.push_back(GuessRecord { guess, score });

        let guess_number = self.guess_count();
        debug!(
            guess_number,
            correct_colors = score.correct_colors,
            correct_placement = score.correct_placement,
            "guess scored"
        );

        if score.is_win() {
            self.status = RoundStatus::Won;
            info!(guesses = guess_number, "round won");
        } else if guess_number >= self.max_guesses {
            self.status = RoundStatus::Lost;
            info!(guesses = guess_number, "round lost");
        }

        Ok(score)
    }
}

/// Score `guess` against `state`, returning the feedback and the next state.
///
/// On error `state` is unchanged (it is only borrowed).
pub fn evaluate_guess(state: &RoundState, guess: impl IntoGuess) -> Result<(Score, RoundState)> {
    state.evaluate(guess)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::{Color, GuessDefect};

    fn secret() -> Sequence {
        "RGBY".parse().unwrap()
    }

    #[test]
    fn test_new_round() {
        let round = RoundState::with_default_limit(secret());
        assert_eq!(round.status(), RoundStatus::Ongoing);
        assert_eq!(round.guess_count(), 0);
        assert_eq!(round.remaining_guesses(), 12);
        assert!(round.history().is_empty());
        assert_eq!(round.revealed_secret(), None);
    }

    #[test]
    #[should_panic(expected = "Must allow at least 1 guess")]
    fn test_zero_limit_panics() {
        let _ = RoundState::new(secret(), 0);
    }

    #[test]
    fn test_winning_guess() {
        let mut round = RoundState::with_default_limit(secret());
        let score = round.submit("RGBY").unwrap();

        assert!(score.is_win());
        assert_eq!(round.status(), RoundStatus::Won);
        assert_eq!(round.guess_count(), 1);
        assert_eq!(round.revealed_secret(), Some(&secret()));
    }

    #[test]
    fn test_evaluate_leaves_input_untouched() {
        let round = RoundState::with_default_limit(secret());
        let (score, next) = evaluate_guess(&round, "GRYB").unwrap();

        assert_eq!(score, Score { correct_colors: 4, correct_placement: 0 });
        assert_eq!(round.guess_count(), 0);
        assert_eq!(next.guess_count(), 1);
        assert_eq!(next.status(), RoundStatus::Ongoing);
    }

    #[test]
    fn test_short_guess_rejected_state_unchanged() {
        let mut round = RoundState::with_default_limit(secret());
        round.submit("OOOO").unwrap();
        let before = round.clone();

        let err = round.submit(&[Color::Red, Color::Green, Color::Blue][..]).unwrap_err();

        assert_eq!(
            err,
            GameError::InvalidGuess(GuessDefect::WrongLength { expected: 4, actual: 3 })
        );
        assert_eq!(round, before);
    }

    #[test]
    fn test_unset_slot_rejected() {
        let round = RoundState::with_default_limit(secret());
        let slots: &[Option<Color>] = &[Some(Color::Red), Some(Color::Red), None, Some(Color::Red)];

        let err = round.evaluate(slots).unwrap_err();
        assert_eq!(err, GameError::InvalidGuess(GuessDefect::UnsetSlot { slot: 2 }));
    }

    #[test]
    fn test_loss_after_limit() {
        let mut round = RoundState::new(secret(), 3);

        round.submit("OOOO").unwrap();
        round.submit("OOOO").unwrap();
        assert_eq!(round.status(), RoundStatus::Ongoing);

        round.submit("OOOO").unwrap();
        assert_eq!(round.status(), RoundStatus::Lost);
        assert_eq!(round.remaining_guesses(), 0);
    }

    #[test]
    fn test_win_on_last_guess_is_win() {
        let mut round = RoundState::new(secret(), 2);
        round.submit("OOOO").unwrap();
        round.submit("RGBY").unwrap();
        assert_eq!(round.status(), RoundStatus::Won);
    }

    #[test]
    fn test_terminal_round_rejects() {
        let mut round = RoundState::new(secret(), 1);
        round.submit("PPPP").unwrap();
        let before = round.clone();

        let err = round.submit("RGBY").unwrap_err();
        assert_eq!(err, GameError::InvalidState { status: RoundStatus::Lost });
        assert_eq!(round, before);
    }

    #[test]
    fn test_status_display() {
        assert_eq!(RoundStatus::Ongoing.to_string(), "ongoing");
        assert!(!RoundStatus::Ongoing.is_terminal());
        assert!(RoundStatus::Won.is_terminal());
        assert!(RoundStatus::Lost.is_terminal());
    }

    #[test]
    fn test_serialize_history() {
        let mut round = RoundState::with_default_limit(secret());
        round.submit("RRRR").unwrap();

        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["status"], "Ongoing");
        assert_eq!(json["history"][0]["score"]["correct_colors"], 1);
    }

    #[test]
    fn test_serialized_history_records_round_trip() {
        let mut round = RoundState::new(secret(), 5);
        round.submit("GRYB").unwrap();

        let json = serde_json::to_value(&round).unwrap();
        assert_eq!(json["max_guesses"], 5);

        let records: Vec<GuessRecord> = serde_json::from_value(json["history"].clone()).unwrap();
        assert_eq!(records, round.history().iter().copied().collect::<Vec<_>>());
    }
}

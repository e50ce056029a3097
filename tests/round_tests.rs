//! Round lifecycle tests: win, loss, rejection, history bookkeeping.

mod common;

use mastermind_core::core::{Color, GameError, GuessDefect};
use mastermind_core::rules::{evaluate_guess, RoundState, RoundStatus, Score};
use proptest::prelude::*;

use common::{init_logging, seq};

fn rgby_round() -> RoundState {
    init_logging();
    RoundState::with_default_limit(seq("RGBY"))
}

// =============================================================================
// Terminal Transitions
// =============================================================================

#[test]
fn test_exact_guess_wins() {
    let round = rgby_round();
    let (score, next) = evaluate_guess(&round, "RGBY").unwrap();

    assert_eq!(score, Score { correct_colors: 4, correct_placement: 4 });
    assert_eq!(next.status(), RoundStatus::Won);
}

#[test]
fn test_permutation_keeps_going() {
    let round = rgby_round();
    let (score, next) = evaluate_guess(&round, "GRYB").unwrap();

    assert_eq!(score, Score { correct_colors: 4, correct_placement: 0 });
    assert_eq!(next.status(), RoundStatus::Ongoing);
}

#[test]
fn test_twelve_misses_lose_exactly_on_twelfth() {
    let mut round = rgby_round();
    let misses = ["OOOO", "PPPP", "RRRR", "GRYB", "OPOP", "YBGR"];

    for n in 1..=12u32 {
        let guess = misses[(n as usize - 1) % misses.len()];
        round.submit(guess).unwrap();

        assert_eq!(round.guess_count(), n);
        if n < 12 {
            assert_eq!(round.status(), RoundStatus::Ongoing, "lost early at guess {n}");
        }
    }

    assert_eq!(round.status(), RoundStatus::Lost);
    assert_eq!(round.remaining_guesses(), 0);
    assert_eq!(
        round.submit("RGBY").unwrap_err(),
        GameError::InvalidState { status: RoundStatus::Lost }
    );
    assert_eq!(round.guess_count(), 12);
}

#[test]
fn test_no_guess_after_win() {
    let mut round = rgby_round();
    round.submit("RGBY").unwrap();

    let err = round.submit("OOOO").unwrap_err();
    assert_eq!(err, GameError::InvalidState { status: RoundStatus::Won });
    assert_eq!(round.history().len(), 1);
}

// =============================================================================
// Rejected Guesses
// =============================================================================

#[test]
fn test_three_peg_guess_rejected() {
    let round = rgby_round();
    let guess: &[Color] = &[Color::Red, Color::Green, Color::Blue];

    let err = evaluate_guess(&round, guess).unwrap_err();

    assert_eq!(
        err,
        GameError::InvalidGuess(GuessDefect::WrongLength { expected: 4, actual: 3 })
    );
    assert_eq!(round.guess_count(), 0);
    assert_eq!(round.status(), RoundStatus::Ongoing);
}

#[test]
fn test_unknown_color_rejected() {
    let mut round = rgby_round();
    let err = round.submit("red green white blue").unwrap_err();

    assert_eq!(
        err,
        GameError::InvalidGuess(GuessDefect::UnknownColor("white".to_string()))
    );
    assert!(round.history().is_empty());
}

#[test]
fn test_rejection_does_not_consume_attempt() {
    let mut round = RoundState::new(seq("RGBY"), 1);
    assert!(round.submit(vec![Color::Red]).is_err());
    assert_eq!(round.status(), RoundStatus::Ongoing);

    round.submit("RGBY").unwrap();
    assert_eq!(round.status(), RoundStatus::Won);
}

// =============================================================================
// History
// =============================================================================

#[test]
fn test_history_records_in_order() {
    let mut round = rgby_round();
    round.submit("RRRR").unwrap();
    round.submit("GRYB").unwrap();

    let history = round.history();
    assert_eq!(history.len(), 2);
    assert_eq!(history[0].guess, seq("RRRR"));
    assert_eq!(history[0].score, Score { correct_colors: 1, correct_placement: 1 });
    assert_eq!(history[1].guess, seq("GRYB"));
    assert_eq!(history[1].score, Score { correct_colors: 4, correct_placement: 0 });
}

#[test]
fn test_evaluate_snapshots_share_prefix() {
    let round = rgby_round();
    let (_, one) = evaluate_guess(&round, "OOOO").unwrap();
    let (_, two_a) = evaluate_guess(&one, "RRRR").unwrap();
    let (_, two_b) = evaluate_guess(&one, "RGBY").unwrap();

    assert_eq!(one.guess_count(), 1);
    assert_eq!(two_a.status(), RoundStatus::Ongoing);
    assert_eq!(two_b.status(), RoundStatus::Won);
    assert_eq!(two_a.history()[0], two_b.history()[0]);
}

// =============================================================================
// Properties
// =============================================================================

fn any_code() -> impl Strategy<Value = String> {
    prop::collection::vec(prop::sample::select(vec!['R', 'G', 'B', 'Y', 'O', 'P']), 4)
        .prop_map(|chars| chars.into_iter().collect())
}

proptest! {
    #[test]
    fn prop_round_invariants(
        secret in any_code(),
        guesses in prop::collection::vec(any_code(), 0..20),
        max_guesses in 1u32..15,
    ) {
        let mut round = RoundState::new(seq(&secret), max_guesses);
        let mut won = false;

        for guess in &guesses {
            let before = round.guess_count();
            match round.submit(guess.as_str()) {
                Ok(score) => {
                    prop_assert_eq!(round.guess_count(), before + 1);
                    won |= score.is_win();
                }
                Err(err) => {
                    prop_assert!(
                        matches!(err, GameError::InvalidState { .. }),
                        "unexpected error: {err}"
                    );
                    prop_assert!(round.status().is_terminal());
                    prop_assert_eq!(round.guess_count(), before);
                }
            }

            prop_assert!(round.guess_count() <= max_guesses);
            prop_assert_eq!(round.history().len() as u32, round.guess_count());
        }

        prop_assert_eq!(round.status() == RoundStatus::Won, won);
        let lost = round.status() == RoundStatus::Lost;
        prop_assert_eq!(lost, !won && round.guess_count() == max_guesses);
    }
}

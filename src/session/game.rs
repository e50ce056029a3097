//! A play session: config, secret source, current round and draft row.

use tracing::info;

use crate::core::{GameConfig, GameRng, IntoGuess, Result};
use crate::generator::SequenceGenerator;
use crate::rules::{RoundState, RoundStatus, Score};

use super::draft::GuessDraft;

const WON_MESSAGE: &str = "Congratulation you guessed the sequence";
const LOST_MESSAGE: &str = "Unfortunately you failed to guess the sequence";

/// One player's game.
///
/// The UI collaborator drives this: it places pegs on the draft (or builds a
/// guess itself), submits, renders the returned score, and calls `new_round`
/// once the round is over.
#[derive(Clone, Debug)]
pub struct Mastermind {
    config: GameConfig,
    generator: SequenceGenerator,
    round: RoundState,
    draft: GuessDraft,
    rounds_played: u32,
}

impl Mastermind {
    /// Validate `config` and start the first round.
    pub fn new(config: GameConfig) -> Result<Self> {
        config.validate()?;

        let rng = match config.seed {
            Some(seed) => GameRng::new(seed),
            None => GameRng::from_entropy(),
        };
        let mut generator = SequenceGenerator::new(rng);
        let round = Self::start_round(&mut generator, &config);

        Ok(Self {
            config,
            generator,
            round,
            draft: GuessDraft::new(),
            rounds_played: 0,
        })
    }

    fn start_round(generator: &mut SequenceGenerator, config: &GameConfig) -> RoundState {
        let round = RoundState::new(generator.generate(), config.max_guesses);
        info!(max_guesses = config.max_guesses, "round started");
        round
    }

    #[must_use]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[must_use]
    pub fn round(&self) -> &RoundState {
        &self.round
    }

    #[must_use]
    pub fn status(&self) -> RoundStatus {
        self.round.status()
    }

    #[must_use]
    pub fn remaining_guesses(&self) -> u32 {
        self.round.remaining_guesses()
    }

    /// Rounds finished or abandoned via `new_round`.
    #[must_use]
    pub fn rounds_played(&self) -> u32 {
        self.rounds_played
    }

    #[must_use]
    pub fn draft(&self) -> &GuessDraft {
        &self.draft
    }

    pub fn draft_mut(&mut self) -> &mut GuessDraft {
        &mut self.draft
    }

    /// Submit a guess to the current round.
    pub fn submit(&mut self, guess: impl IntoGuess) -> Result<Score> {
        self.round.submit(guess)
    }

    /// Submit the draft row.
    ///
    /// The draft is only cleared when the guess is accepted.
    pub fn submit_draft(&mut self) -> Result<Score> {
        let guess = self.draft.to_sequence()?;
        let score = self.round.submit(guess)?;
        self.draft.reset();
        Ok(score)
    }

    /// Throw away the current round and start another with a fresh secret.
    pub fn new_round(&mut self) {
        self.round = Self::start_round(&mut self.generator, &self.config);
        self.draft.reset();
        self.rounds_played += 1;
    }

    /// End-of-round text, or `None` while the round is running.
    #[must_use]
    pub fn status_message(&self) -> Option<&'static str> {
        match self.round.status() {
            RoundStatus::Ongoing => None,
            RoundStatus::Won => Some(WON_MESSAGE),
            RoundStatus::Lost => Some(LOST_MESSAGE),
        }
    }
}

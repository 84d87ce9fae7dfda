//! Game controller
//!
//! `GameLoop` is what a front end talks to: it starts rounds, forwards
//! guesses, fires sound cues, keeps the win/loss tally and records best
//! times.

use tracing::{info, warn};

use crate::difficulty::{Difficulty, RoundParams};
use crate::rng::GameRng;
use crate::score::ScoreStore;
use crate::session::{GameSession, Outcome};
use crate::sound::{CuePlayer, SoundCue};
use crate::GameError;

/// Wins and losses since the program started
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub wins: u32,
    pub losses: u32,
}

/// What happened to the best time after the last win
#[derive(Debug, Clone, PartialEq, Default)]
pub enum BestTimeUpdate {
    #[default]
    Unchanged,
    NewBest(f64),
    /// New best kept in memory but the record could not be written
    Failed(String),
}

/// Main game controller
pub struct GameLoop {
    rng: GameRng,
    scores: ScoreStore,
    session: Option<GameSession>,
    tally: Tally,
    sound_on: bool,
    player: Box<dyn CuePlayer>,
    last_record: BestTimeUpdate,
}

impl GameLoop {
    pub fn new(rng: GameRng, scores: ScoreStore, player: Box<dyn CuePlayer>) -> Self {
        Self {
            rng,
            scores,
            session: None,
            tally: Tally::default(),
            sound_on: true,
            player,
            last_record: BestTimeUpdate::Unchanged,
        }
    }

    pub fn with_sound(mut self, on: bool) -> Self {
        self.sound_on = on;
        self
    }

    /// Start a round at a preset difficulty, replacing any current round
    pub fn start(&mut self, difficulty: Difficulty) -> &GameSession {
        info!(%difficulty, "starting round");
        self.start_custom(difficulty.params())
    }

    /// Start a round with explicit parameters
    pub fn start_custom(&mut self, params: RoundParams) -> &GameSession {
        let session = GameSession::start(params, &mut self.rng);
        self.install(session)
    }

    /// Start a round with a known secret
    pub fn start_with_secret(
        &mut self,
        params: RoundParams,
        secret: i64,
    ) -> Result<&GameSession, GameError> {
        let session = GameSession::start_with_secret(params, secret)?;
        Ok(self.install(session))
    }

    fn install(&mut self, session: GameSession) -> &GameSession {
        self.last_record = BestTimeUpdate::Unchanged;
        self.session.insert(session)
    }

    /// Submit raw guess text to the current round
    pub fn submit(&mut self, input: &str) -> Result<Outcome, GameError> {
        let outcome = self
            .session
            .as_mut()
            .ok_or(GameError::NoRound)?
            .submit(input)?;

        if self.sound_on {
            self.player.play(SoundCue::for_outcome(&outcome));
        }

        match outcome {
            Outcome::Correct(elapsed) => {
                self.tally.wins += 1;
                self.last_record = self.record(elapsed);
            }
            Outcome::Exhausted => self.tally.losses += 1,
            Outcome::TooLow | Outcome::TooHigh => {}
        }

        Ok(outcome)
    }

    fn record(&mut self, elapsed: f64) -> BestTimeUpdate {
        match self.scores.record_if_best(elapsed) {
            Ok(true) => BestTimeUpdate::NewBest(elapsed),
            Ok(false) => BestTimeUpdate::Unchanged,
            Err(e) => {
                warn!(error = %e, path = %self.scores.path().display(), "could not save best time");
                BestTimeUpdate::Failed(e.to_string())
            }
        }
    }

    /// Leave the current round without counting it
    pub fn abandon(&mut self) -> Option<GameSession> {
        let session = self.session.take();
        if let Some(ref s) = session
            && !s.is_over()
        {
            info!(guesses = s.guesses().len(), "round abandoned");
        }
        session
    }

    pub fn session(&self) -> Option<&GameSession> {
        self.session.as_ref()
    }

    pub fn tally(&self) -> Tally {
        self.tally
    }

    pub fn scores(&self) -> &ScoreStore {
        &self.scores
    }

    pub fn best_time(&self) -> Option<f64> {
        self.scores.best_time()
    }

    pub fn last_record(&self) -> &BestTimeUpdate {
        &self.last_record
    }

    pub fn sound_on(&self) -> bool {
        self.sound_on
    }

    pub fn toggle_sound(&mut self) -> bool {
        self.sound_on = !self.sound_on;
        self.sound_on
    }

    pub fn rng_mut(&mut self) -> &mut GameRng {
        &mut self.rng
    }
}

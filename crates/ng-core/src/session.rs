//! One round of play
//!
//! A `GameSession` owns the secret number, the attempt budget and the start
//! time of a round, and turns guesses into [`Outcome`]s. Only a round in
//! [`RoundState::InProgress`] accepts guesses; `Won` and `Lost` are terminal.

use std::cmp::Ordering;
use std::time::{Duration, Instant};

use tracing::{debug, info};

use crate::difficulty::RoundParams;
use crate::rng::GameRng;
use crate::GameError;

/// Result of evaluating one guess
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Outcome {
    TooLow,
    TooHigh,
    /// Seconds from round start to the winning guess, rounded to 0.01
    Correct(f64),
    /// Wrong guess that used up the last attempt
    Exhausted,
}

impl Outcome {
    /// Whether this outcome ends the round
    pub fn ends_round(&self) -> bool {
        matches!(self, Outcome::Correct(_) | Outcome::Exhausted)
    }

    /// Short feedback line
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::TooLow => "Too low!",
            Outcome::TooHigh => "Too high!",
            Outcome::Correct(_) => "You guessed it!",
            Outcome::Exhausted => "You ran out of attempts!",
        }
    }
}

/// Lifecycle of a round once started
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum RoundState {
    InProgress,
    Won { elapsed_secs: f64 },
    Lost,
}

/// State of a single round
#[derive(Debug, Clone)]
pub struct GameSession {
    params: RoundParams,
    secret: i64,
    attempts_remaining: u32,
    started_at: Instant,
    state: RoundState,
    guesses: Vec<i64>,
}

impl GameSession {
    /// Start a round with a secret drawn uniformly from the inclusive range
    pub fn start(params: RoundParams, rng: &mut GameRng) -> Self {
        let secret = rng.range_inclusive(params.lower(), params.upper());
        Self::begin(params, secret, Instant::now())
    }

    /// Start a round with a fixed secret
    pub fn start_with_secret(params: RoundParams, secret: i64) -> Result<Self, GameError> {
        Self::start_with_secret_at(params, secret, Instant::now())
    }

    /// Start a round with a fixed secret and start time
    pub fn start_with_secret_at(
        params: RoundParams,
        secret: i64,
        started_at: Instant,
    ) -> Result<Self, GameError> {
        if !params.contains(secret) {
            return Err(GameError::SecretOutOfRange {
                secret,
                lower: params.lower(),
                upper: params.upper(),
            });
        }
        Ok(Self::begin(params, secret, started_at))
    }

    fn begin(params: RoundParams, secret: i64, started_at: Instant) -> Self {
        info!(
            lower = params.lower(),
            upper = params.upper(),
            attempts = params.attempts(),
            "round started"
        );
        Self {
            params,
            secret,
            attempts_remaining: params.attempts(),
            started_at,
            state: RoundState::InProgress,
            guesses: Vec::new(),
        }
    }

    /// Evaluate a guess against the secret
    pub fn evaluate(&mut self, guess: i64) -> Result<Outcome, GameError> {
        self.evaluate_at(guess, Instant::now())
    }

    /// Evaluate a guess with an explicit clock reading
    ///
    /// Correctness is checked before the attempt budget, so a correct guess
    /// on the last attempt wins.
    pub fn evaluate_at(&mut self, guess: i64, now: Instant) -> Result<Outcome, GameError> {
        if self.state != RoundState::InProgress {
            return Err(GameError::RoundOver);
        }

        self.guesses.push(guess);
        let outcome = match guess.cmp(&self.secret) {
            Ordering::Equal => {
                let elapsed_secs = round_secs(now.saturating_duration_since(self.started_at));
                self.state = RoundState::Won { elapsed_secs };
                info!(elapsed_secs, guesses = self.guesses.len(), "round won");
                Outcome::Correct(elapsed_secs)
            }
            Ordering::Less => self.miss(Outcome::TooLow),
            Ordering::Greater => self.miss(Outcome::TooHigh),
        };

        debug!(guess, ?outcome, remaining = self.attempts_remaining, "guess evaluated");
        Ok(outcome)
    }

    /// Parse and evaluate raw user input
    ///
    /// Input that is not an integer is rejected before anything changes.
    pub fn submit(&mut self, input: &str) -> Result<Outcome, GameError> {
        if self.state != RoundState::InProgress {
            return Err(GameError::RoundOver);
        }
        let guess = parse_guess(input)?;
        self.evaluate(guess)
    }

    fn miss(&mut self, outcome: Outcome) -> Outcome {
        self.attempts_remaining = self.attempts_remaining.saturating_sub(1);
        if self.attempts_remaining == 0 {
            self.state = RoundState::Lost;
            info!(secret = self.secret, "round lost");
            Outcome::Exhausted
        } else {
            outcome
        }
    }

    pub fn params(&self) -> RoundParams {
        self.params
    }

    pub fn lower(&self) -> i64 {
        self.params.lower()
    }

    pub fn upper(&self) -> i64 {
        self.params.upper()
    }

    pub fn attempts_total(&self) -> u32 {
        self.params.attempts()
    }

    pub fn attempts_remaining(&self) -> u32 {
        self.attempts_remaining
    }

    /// Remaining attempts as a fraction of the budget, in `[0, 1]`
    pub fn attempts_fraction(&self) -> f64 {
        f64::from(self.attempts_remaining) / f64::from(self.params.attempts())
    }

    pub fn state(&self) -> RoundState {
        self.state
    }

    pub fn is_over(&self) -> bool {
        self.state != RoundState::InProgress
    }

    /// Valid guesses so far, oldest first
    pub fn guesses(&self) -> &[i64] {
        &self.guesses
    }

    /// The secret number, for the end-of-round reveal
    pub fn secret(&self) -> i64 {
        self.secret
    }

    pub fn started_at(&self) -> Instant {
        self.started_at
    }

    /// "between L and U"
    pub fn range_text(&self) -> String {
        format!("between {} and {}", self.lower(), self.upper())
    }
}

/// Parse a guess from user input
pub fn parse_guess(input: &str) -> Result<i64, GameError> {
    let trimmed = input.trim();
    trimmed
        .parse::<i64>()
        .map_err(|_| GameError::InvalidGuess(trimmed.to_string()))
}

fn round_secs(elapsed: Duration) -> f64 {
    (elapsed.as_secs_f64() * 100.0).round() / 100.0
}

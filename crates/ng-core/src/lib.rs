//! ng-core: Core game logic for numguess
//!
//! A number-guessing game: pick a difficulty, find the secret number before
//! the attempts run out, beat your best time.
//!
//! This crate holds the rules, best-time persistence, options and sound
//! cues. It does no terminal I/O; front ends drive it through [`GameLoop`].

pub mod options;
pub mod score;
pub mod sound;

mod difficulty;
mod error;
mod gameloop;
mod rng;
mod session;

pub use difficulty::{Difficulty, RoundParams};
pub use error::GameError;
pub use gameloop::{BestTimeUpdate, GameLoop, Tally};
pub use options::{GameOptions, OptionsError, ThemeMode};
pub use rng::GameRng;
pub use score::{ScoreError, ScoreStore};
pub use session::{GameSession, Outcome, RoundState, parse_guess};

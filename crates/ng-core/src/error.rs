//! Errors raised by the round rules

use thiserror::Error;

/// Errors from starting a round or submitting a guess
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GameError {
    #[error("Invalid range: lower bound {lower} must be below upper bound {upper}")]
    InvalidRange { lower: i64, upper: i64 },

    #[error("A round needs at least one attempt")]
    NoAttempts,

    #[error("Secret {secret} is outside {lower}..={upper}")]
    SecretOutOfRange { secret: i64, lower: i64, upper: i64 },

    #[error("Please enter a valid number.")]
    InvalidGuess(String),

    #[error("The round is already over")]
    RoundOver,

    #[error("No round in progress")]
    NoRound,
}

//! Difficulty presets and round parameters

use strum::{Display, EnumIter, IntoEnumIterator};

use crate::GameError;
use crate::rng::GameRng;

/// Validated bounds and attempt budget for one round
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RoundParams {
    lower: i64,
    upper: i64,
    attempts: u32,
}

impl RoundParams {
    /// Build parameters, rejecting empty ranges and zero-attempt budgets
    pub fn new(lower: i64, upper: i64, attempts: u32) -> Result<Self, GameError> {
        if lower >= upper {
            return Err(GameError::InvalidRange { lower, upper });
        }
        if attempts == 0 {
            return Err(GameError::NoAttempts);
        }
        Ok(Self {
            lower,
            upper,
            attempts,
        })
    }

    pub fn lower(&self) -> i64 {
        self.lower
    }

    pub fn upper(&self) -> i64 {
        self.upper
    }

    pub fn attempts(&self) -> u32 {
        self.attempts
    }

    /// Whether `n` lies inside the inclusive range
    pub fn contains(&self, n: i64) -> bool {
        (self.lower..=self.upper).contains(&n)
    }
}

/// Menu difficulty
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Display, EnumIter)]
pub enum Difficulty {
    Easy,
    Medium,
    Hard,
}

impl Difficulty {
    /// Range and attempt budget for this preset
    pub const fn params(self) -> RoundParams {
        match self {
            Difficulty::Easy => RoundParams {
                lower: 1,
                upper: 50,
                attempts: 10,
            },
            Difficulty::Medium => RoundParams {
                lower: 1,
                upper: 100,
                attempts: 7,
            },
            Difficulty::Hard => RoundParams {
                lower: 1,
                upper: 200,
                attempts: 5,
            },
        }
    }

    /// Menu label, e.g. "Easy (1-50, 10 tries)"
    pub fn label(self) -> String {
        let p = self.params();
        format!("{} ({}-{}, {} tries)", self, p.lower, p.upper, p.attempts)
    }

    /// Position in menu order
    pub fn index(self) -> usize {
        Self::iter().position(|d| d == self).unwrap_or(0)
    }

    pub fn from_index(index: usize) -> Option<Self> {
        Self::iter().nth(index)
    }

    /// Parse from a case-insensitive prefix ("e", "med", "HARD")
    pub fn parse(s: &str) -> Option<Self> {
        let s = s.trim().to_lowercase();
        if s.is_empty() {
            return None;
        }
        Self::iter().find(|d| d.to_string().to_lowercase().starts_with(&s))
    }

    /// Random preset
    pub fn random(rng: &mut GameRng) -> Self {
        let all: Vec<Difficulty> = Self::iter().collect();
        rng.choose(&all).copied().unwrap_or(Difficulty::Easy)
    }
}

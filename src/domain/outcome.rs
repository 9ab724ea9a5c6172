use serde::{Deserialize, Serialize};

use crate::errors::{ArenaResult, invalid_input};

/// Verdict reported by whoever judged the battle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Winner {
    A,
    B,
    Tie,
}

/// Result of one comparison, relative to the ordered pair (A, B).
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "f64", into = "f64")]
pub struct BattleOutcome {
    score_a: f64,
}

impl TryFrom<f64> for BattleOutcome {
    type Error = crate::errors::ArenaError;

    fn try_from(score_a: f64) -> ArenaResult<Self> {
        Self::new(score_a)
    }
}

impl From<BattleOutcome> for f64 {
    fn from(outcome: BattleOutcome) -> f64 {
        outcome.score_a
    }
}

impl BattleOutcome {
    /// Fractional scores are allowed; anything outside [0, 1] is rejected.
    pub fn new(score_a: f64) -> ArenaResult<Self> {
        validate_score(score_a)?;
        Ok(Self { score_a })
    }

    pub fn win_a() -> Self {
        Self { score_a: 1.0 }
    }

    pub fn win_b() -> Self {
        Self { score_a: 0.0 }
    }

    pub fn draw() -> Self {
        Self { score_a: 0.5 }
    }

    pub fn from_winner(winner: Winner) -> Self {
        match winner {
            Winner::A => Self::win_a(),
            Winner::B => Self::win_b(),
            Winner::Tie => Self::draw(),
        }
    }

    pub fn score_a(&self) -> f64 {
        self.score_a
    }

    pub fn score_b(&self) -> f64 {
        1.0 - self.score_a
    }
}

pub(crate) fn validate_score(score_a: f64) -> ArenaResult<()> {
    if (0.0..=1.0).contains(&score_a) {
        Ok(())
    } else {
        Err(invalid_input(format!(
            "score_a must be within [0, 1], got {}",
            score_a
        )))
    }
}

use serde::{Deserialize, Serialize};

use crate::errors::{ArenaResult, invalid_input};
use crate::rating::RatingUpdateResult;

const PROBABILITY_EPSILON: f64 = 1e-15;

/// A prediction paired with what actually happened.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct CalibrationSample {
    /// Predicted P(A wins)
    pub expected: f64,
    /// Observed score of A
    pub actual: f64,
}

impl CalibrationSample {
    pub fn new(expected: f64, actual: f64) -> ArenaResult<Self> {
        check_unit_interval(expected, "expected")?;
        check_unit_interval(actual, "actual")?;
        Ok(Self { expected, actual })
    }

    pub fn from_update(update: &RatingUpdateResult, score_a: f64) -> ArenaResult<Self> {
        Self::new(update.expected_score_a, score_a)
    }
}

/// Mean squared error between predictions and outcomes.
pub fn brier_score(samples: &[CalibrationSample]) -> ArenaResult<f64> {
    require_samples(samples)?;
    let total: f64 = samples
        .iter()
        .map(|s| (s.expected - s.actual).powi(2))
        .sum();
    Ok(total / samples.len() as f64)
}

/// Mean cross-entropy; fractional outcomes are treated as soft labels.
pub fn log_loss(samples: &[CalibrationSample]) -> ArenaResult<f64> {
    require_samples(samples)?;
    let total: f64 = samples.iter().map(sample_log_loss).sum();
    Ok(total / samples.len() as f64)
}

fn sample_log_loss(sample: &CalibrationSample) -> f64 {
    let p = sample.expected.clamp(PROBABILITY_EPSILON, 1.0 - PROBABILITY_EPSILON);
    -(sample.actual * p.ln() + (1.0 - sample.actual) * (1.0 - p).ln())
}

pub(crate) fn require_samples(samples: &[CalibrationSample]) -> ArenaResult<()> {
    if samples.is_empty() {
        Err(invalid_input("calibration needs at least one sample"))
    } else {
        Ok(())
    }
}

fn check_unit_interval(value: f64, name: &str) -> ArenaResult<()> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(invalid_input(format!("{} must be within [0, 1], got {}", name, value)))
    }
}

use log::debug;

use super::types::RatingUpdateResult;
use super::uncertainty::{decay_sd, k_for_sd};
use crate::config::EloSettings;
use crate::domain::outcome::validate_score;
use crate::domain::validate_sd;
use crate::errors::{ArenaResult, ensure_finite, invalid_input};

/// Rating difference that multiplies the odds by ten.
pub const ELO_SCALE: f64 = 400.0;

// 10^300 is still representable as f64
const MAX_EXPONENT: f64 = 300.0;

/// P(A beats B) under the logistic Elo model.
///
/// Both ratings must be finite; a NaN or infinite rating yields NaN.
/// Use [`checked_expected_score`] when the ratings are not known to be valid.
pub fn expected_score(rating_a: f64, rating_b: f64) -> f64 {
    let exponent = ((rating_b - rating_a) / ELO_SCALE).clamp(-MAX_EXPONENT, MAX_EXPONENT);
    1.0 / (1.0 + 10f64.powf(exponent))
}

/// [`expected_score`] that rejects non-finite ratings.
pub fn checked_expected_score(rating_a: f64, rating_b: f64) -> ArenaResult<f64> {
    validate_rating(rating_a, "rating_a")?;
    validate_rating(rating_b, "rating_b")?;
    ensure_finite(expected_score(rating_a, rating_b), "expected score")
}

/// Classic zero-sum update: whatever A gains, B loses.
pub fn update_ratings(
    rating_a: f64,
    rating_b: f64,
    score_a: f64,
    k_factor: f64,
) -> ArenaResult<(f64, f64)> {
    validate_score(score_a)?;
    if !k_factor.is_finite() || k_factor < 0.0 {
        return Err(invalid_input(format!(
            "k_factor must be finite and >= 0, got {}",
            k_factor
        )));
    }

    let expected = checked_expected_score(rating_a, rating_b)?;
    let delta = k_factor * (score_a - expected);

    let new_rating_a = ensure_finite(rating_a + delta, "new rating A")?;
    let new_rating_b = ensure_finite(rating_b - delta, "new rating B")?;

    Ok((new_rating_a, new_rating_b))
}

/// Uncertainty-aware update.
///
/// Each side moves with its own K derived from its own sd, so the two
/// deltas differ whenever the sds differ: this update is not zero-sum.
/// Both sds then decay toward `sd_floor`.
pub fn update_after_battle(
    rating_a: f64,
    rating_b: f64,
    sd_a: f64,
    sd_b: f64,
    score_a: f64,
    settings: &EloSettings,
) -> ArenaResult<RatingUpdateResult> {
    settings.validate()?;
    validate_score(score_a)?;
    validate_sd(sd_a, "A")?;
    validate_sd(sd_b, "B")?;

    let expected_a = checked_expected_score(rating_a, rating_b)?;
    let surprise = score_a - expected_a;

    let k_a = k_for_sd(sd_a, settings);
    let k_b = k_for_sd(sd_b, settings);

    let new_rating_a = ensure_finite(rating_a + k_a * surprise, "new rating A")?;
    let new_rating_b = ensure_finite(rating_b - k_b * surprise, "new rating B")?;
    let new_sd_a = ensure_finite(decay_sd(sd_a, settings), "new sd A")?;
    let new_sd_b = ensure_finite(decay_sd(sd_b, settings), "new sd B")?;

    debug!(
        "Battle update: A {:.1} -> {:.1} (k={:.1}), B {:.1} -> {:.1} (k={:.1}), expected {:.3}",
        rating_a, new_rating_a, k_a, rating_b, new_rating_b, k_b, expected_a
    );

    Ok(RatingUpdateResult {
        new_rating_a,
        new_rating_b,
        rating_change_a: rounded_change(rating_a, new_rating_a),
        rating_change_b: rounded_change(rating_b, new_rating_b),
        new_sd_a,
        new_sd_b,
        expected_score_a: expected_a,
    })
}

fn validate_rating(rating: f64, name: &str) -> ArenaResult<()> {
    if rating.is_finite() {
        Ok(())
    } else {
        Err(invalid_input(format!("{} is not finite: {}", name, rating)))
    }
}

fn rounded_change(old: f64, new: f64) -> i64 {
    (new - old).round() as i64
}

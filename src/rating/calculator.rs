use super::elo;
use super::types::{RatedBattle, RatingUpdateResult};
use crate::config::EloSettings;
use crate::domain::{BattleOutcome, RosterEntry};
use crate::errors::{ArenaResult, invalid_input};

/// Elo arithmetic bound to one set of settings.
///
/// Holds nothing but its configuration; every method is a pure function
/// of its arguments, so one calculator can be shared across threads.
#[derive(Debug, Clone, Default)]
pub struct EloCalculator {
    settings: EloSettings,
}

impl EloCalculator {
    pub fn new(settings: EloSettings) -> ArenaResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &EloSettings {
        &self.settings
    }

    pub fn expected_score(&self, rating_a: f64, rating_b: f64) -> f64 {
        elo::expected_score(rating_a, rating_b)
    }

    pub fn checked_expected_score(&self, rating_a: f64, rating_b: f64) -> ArenaResult<f64> {
        elo::checked_expected_score(rating_a, rating_b)
    }

    /// Zero-sum update with the configured K-factor.
    pub fn update_ratings(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
    ) -> ArenaResult<(f64, f64)> {
        elo::update_ratings(rating_a, rating_b, score_a, self.settings.k_factor)
    }

    /// Zero-sum update with a K-factor chosen for this call only.
    pub fn update_ratings_with_k(
        &self,
        rating_a: f64,
        rating_b: f64,
        score_a: f64,
        k_factor: f64,
    ) -> ArenaResult<(f64, f64)> {
        elo::update_ratings(rating_a, rating_b, score_a, k_factor)
    }

    pub fn update_after_battle(
        &self,
        rating_a: f64,
        rating_b: f64,
        sd_a: f64,
        sd_b: f64,
        score_a: f64,
    ) -> ArenaResult<RatingUpdateResult> {
        elo::update_after_battle(rating_a, rating_b, sd_a, sd_b, score_a, &self.settings)
    }

    /// Rates a finished battle between two roster entries.
    pub fn rate_battle(
        &self,
        a: &RosterEntry,
        b: &RosterEntry,
        outcome: BattleOutcome,
    ) -> ArenaResult<RatedBattle> {
        if a.id == b.id {
            return Err(invalid_input(format!("{} cannot battle itself", a.id)));
        }

        let update = self.update_after_battle(a.rating, b.rating, a.sd, b.sd, outcome.score_a())?;
        let (entry_a, entry_b) = update.apply_to(a, b);

        Ok(RatedBattle {
            entry_a,
            entry_b,
            update,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Winner;

    #[test]
    fn test_new_rejects_invalid_settings() {
        let settings = EloSettings {
            sd_floor: 0.0,
            ..EloSettings::default()
        };
        assert!(EloCalculator::new(settings).is_err());
    }

    #[test]
    fn test_per_call_k_overrides_instance_k() {
        let calculator = EloCalculator::default();
        let (a, _) = calculator.update_ratings_with_k(1000.0, 1000.0, 1.0, 10.0).unwrap();
        assert_eq!(a, 1005.0);

        let (a, _) = calculator.update_ratings(1000.0, 1000.0, 1.0).unwrap();
        assert_eq!(a, 1016.0);
    }

    #[test]
    fn test_rate_battle_updates_both_entries() {
        let calculator = EloCalculator::default();
        let settings = calculator.settings().clone();
        let a = RosterEntry::new("gpt-4o-mini", &settings);
        let b = RosterEntry::new("gpt-3.5-turbo", &settings);

        let rated = calculator
            .rate_battle(&a, &b, BattleOutcome::from_winner(Winner::A))
            .unwrap();

        assert!(rated.entry_a.rating > a.rating);
        assert!(rated.entry_b.rating < b.rating);
        assert!(rated.entry_a.sd < a.sd);
        assert_eq!(rated.entry_a.comparison_count, 1);
        assert_eq!(rated.entry_b.comparison_count, 1);
        assert_eq!(rated.update.expected_score_a, 0.5);
    }

    #[test]
    fn test_checked_expected_score_surfaces_nan() {
        let calculator = EloCalculator::default();
        assert!(calculator.checked_expected_score(f64::NAN, 1000.0).is_err());
        assert_eq!(calculator.checked_expected_score(1500.0, 1500.0), Ok(0.5));
    }

    #[test]
    fn test_rate_battle_rejects_self_match() {
        let calculator = EloCalculator::default();
        let a = RosterEntry::new("same", calculator.settings());
        assert!(calculator.rate_battle(&a, &a, BattleOutcome::draw()).is_err());
    }
}

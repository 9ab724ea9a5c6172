use log::trace;
use serde::{Deserialize, Serialize};

use crate::config::MatchmakingSettings;
use crate::domain::{RosterEntry, validate_entry};
use crate::errors::{ArenaResult, ensure_finite, invalid_input};
use crate::rating::expected_score;

/// A scored, unordered pair; `entry_a` always has the smaller identifier.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchCandidate {
    pub entry_a: RosterEntry,
    pub entry_b: RosterEntry,
    /// 1.0 for an even 50/50 matchup, approaching 0.0 as it becomes lopsided
    pub competitiveness_score: f64,
    /// Mean sd of the pair relative to `max_sd`, capped at 1.0
    pub uncertainty_score: f64,
    pub total_score: f64,
}

impl MatchCandidate {
    pub fn involves(&self, id: &str) -> bool {
        self.entry_a.id == id || self.entry_b.id == id
    }

    pub fn ids(&self) -> (&str, &str) {
        (&self.entry_a.id, &self.entry_b.id)
    }
}

/// Scores how valuable comparing `a` with `b` would be right now.
///
/// Symmetric: the pair is put in canonical order before any arithmetic,
/// so `score_match(a, b)` and `score_match(b, a)` are identical.
pub fn score_match(
    a: &RosterEntry,
    b: &RosterEntry,
    settings: &MatchmakingSettings,
) -> ArenaResult<MatchCandidate> {
    settings.validate()?;
    validate_entry(a)?;
    validate_entry(b)?;
    if a.id == b.id {
        return Err(invalid_input(format!("{} cannot be matched with itself", a.id)));
    }

    let candidate = score_validated(a, b, settings);
    ensure_finite(candidate.total_score, "match score")?;
    Ok(candidate)
}

/// `score_match` without validation; callers must have validated the roster and settings.
pub(crate) fn score_validated(
    a: &RosterEntry,
    b: &RosterEntry,
    settings: &MatchmakingSettings,
) -> MatchCandidate {
    let (first, second) = canonical_order(a, b);

    let competitiveness_score = competitiveness(expected_score(first.rating, second.rating));
    let uncertainty_score = uncertainty(first.sd, second.sd, settings.max_sd);

    let (competitiveness_weight, uncertainty_weight) = settings.normalized_weights();
    let total_score =
        competitiveness_weight * competitiveness_score + uncertainty_weight * uncertainty_score;

    trace!(
        "Scored {} vs {}: competitiveness {:.4}, uncertainty {:.4}, total {:.4}",
        first.id, second.id, competitiveness_score, uncertainty_score, total_score
    );

    MatchCandidate {
        entry_a: first.clone(),
        entry_b: second.clone(),
        competitiveness_score,
        uncertainty_score,
        total_score,
    }
}

/// `4p(1-p)`: the Bernoulli variance of the outcome, rescaled to 1.0 at p = 0.5.
pub fn competitiveness(expected: f64) -> f64 {
    (4.0 * expected * (1.0 - expected)).clamp(0.0, 1.0)
}

pub fn uncertainty(sd_a: f64, sd_b: f64, max_sd: f64) -> f64 {
    ((sd_a + sd_b) / (2.0 * max_sd)).clamp(0.0, 1.0)
}

fn canonical_order<'a>(
    a: &'a RosterEntry,
    b: &'a RosterEntry,
) -> (&'a RosterEntry, &'a RosterEntry) {
    if a.id <= b.id { (a, b) } else { (b, a) }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ArenaError;

    fn entry(id: &str, rating: f64, sd: f64) -> RosterEntry {
        RosterEntry {
            id: id.to_string(),
            rating,
            sd,
            comparison_count: 0,
            display_label: None,
        }
    }

    #[test]
    fn test_competitiveness_bounds() {
        assert_eq!(competitiveness(0.5), 1.0);
        assert!(competitiveness(0.999) < 0.01);
        assert_eq!(competitiveness(1.0), 0.0);
        assert!(competitiveness(0.6) > competitiveness(0.7));
    }

    #[test]
    fn test_uncertainty_increases_with_sd() {
        assert!(uncertainty(100.0, 300.0, 350.0) > uncertainty(100.0, 100.0, 350.0));
        assert_eq!(uncertainty(350.0, 350.0, 350.0), 1.0);
        assert_eq!(uncertainty(900.0, 900.0, 350.0), 1.0);
    }

    #[test]
    fn test_score_is_symmetric_and_canonical() {
        let settings = MatchmakingSettings::default();
        let x = entry("zeta", 1300.0, 120.0);
        let y = entry("alpha", 1180.0, 260.0);

        let forward = score_match(&x, &y, &settings).unwrap();
        let backward = score_match(&y, &x, &settings).unwrap();

        assert_eq!(forward, backward);
        assert_eq!(forward.ids(), ("alpha", "zeta"));
    }

    #[test]
    fn test_even_matchup_is_fully_competitive() {
        let settings = MatchmakingSettings::default();
        let candidate = score_match(
            &entry("a", 1100.0, 100.0),
            &entry("b", 1100.0, 100.0),
            &settings,
        )
        .unwrap();

        assert_eq!(candidate.competitiveness_score, 1.0);
        assert!(candidate.involves("a") && candidate.involves("b"));
        assert!(!candidate.involves("c"));
    }

    #[test]
    fn test_weights_shift_total() {
        let even_but_certain = (entry("a", 1200.0, 60.0), entry("b", 1200.0, 60.0));
        let uneven_but_unknown = (entry("c", 1000.0, 340.0), entry("d", 1300.0, 340.0));

        let competitive_only = MatchmakingSettings {
            competitiveness_weight: 1.0,
            uncertainty_weight: 0.0,
            ..MatchmakingSettings::default()
        };
        let uncertainty_only = MatchmakingSettings {
            competitiveness_weight: 0.0,
            uncertainty_weight: 1.0,
            ..MatchmakingSettings::default()
        };

        let score = |pair: &(RosterEntry, RosterEntry), settings: &MatchmakingSettings| {
            score_match(&pair.0, &pair.1, settings).unwrap().total_score
        };

        assert!(
            score(&even_but_certain, &competitive_only)
                > score(&uneven_but_unknown, &competitive_only)
        );
        assert!(
            score(&even_but_certain, &uncertainty_only)
                < score(&uneven_but_unknown, &uncertainty_only)
        );
    }

    #[test]
    fn test_invalid_weights_rejected() {
        let a = entry("a", 1000.0, 100.0);
        let b = entry("b", 1100.0, 200.0);
        let negative = MatchmakingSettings {
            competitiveness_weight: -1.0,
            uncertainty_weight: 1.5,
            ..MatchmakingSettings::default()
        };
        let zero = MatchmakingSettings {
            competitiveness_weight: 0.0,
            uncertainty_weight: 0.0,
            ..MatchmakingSettings::default()
        };

        assert!(matches!(score_match(&a, &b, &negative), Err(ArenaError::InvalidInput(_))));
        assert!(matches!(score_match(&a, &b, &zero), Err(ArenaError::InvalidInput(_))));
    }

    #[test]
    fn test_self_match_rejected() {
        let settings = MatchmakingSettings::default();
        let a = entry("a", 1000.0, 100.0);
        assert!(score_match(&a, &a, &settings).is_err());
    }
}

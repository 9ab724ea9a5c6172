use serde::{Deserialize, Serialize};

use crate::domain::RosterEntry;

/// Output of one uncertainty-aware rating update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatingUpdateResult {
    pub new_rating_a: f64,
    pub new_rating_b: f64,
    /// Rounded for reporting only; the ratings keep full precision.
    pub rating_change_a: i64,
    pub rating_change_b: i64,
    pub new_sd_a: f64,
    pub new_sd_b: f64,
    /// Pre-update P(A wins)
    pub expected_score_a: f64,
}

impl RatingUpdateResult {
    /// Copies of `a` and `b` carrying the new ratings and one more comparison.
    pub fn apply_to(&self, a: &RosterEntry, b: &RosterEntry) -> (RosterEntry, RosterEntry) {
        let updated_a = RosterEntry {
            rating: self.new_rating_a,
            sd: self.new_sd_a,
            comparison_count: a.comparison_count.saturating_add(1),
            ..a.clone()
        };
        let updated_b = RosterEntry {
            rating: self.new_rating_b,
            sd: self.new_sd_b,
            comparison_count: b.comparison_count.saturating_add(1),
            ..b.clone()
        };
        (updated_a, updated_b)
    }
}

/// Both updated entries of a rated battle, plus the raw update.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RatedBattle {
    pub entry_a: RosterEntry,
    pub entry_b: RosterEntry,
    pub update: RatingUpdateResult,
}

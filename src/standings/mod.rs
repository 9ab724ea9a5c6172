use serde::{Deserialize, Serialize};

use crate::config::StandingsSettings;
use crate::domain::{ConfidenceLevel, ModelId, RosterEntry, validate_roster};
use crate::errors::ArenaResult;

/// One row of the leaderboard.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Standing {
    /// 1-based
    pub rank: usize,
    pub id: ModelId,
    pub display_label: Option<String>,
    pub rating: f64,
    pub sd: f64,
    pub lower_bound: f64,
    pub upper_bound: f64,
    pub comparison_count: u32,
    pub confidence_level: ConfidenceLevel,
}

/// Roster ordered by rating, best first; equal ratings fall back to identifier order.
pub fn leaderboard(
    roster: &[RosterEntry],
    settings: &StandingsSettings,
) -> ArenaResult<Vec<Standing>> {
    settings.validate()?;
    validate_roster(roster)?;

    let mut ordered: Vec<&RosterEntry> = roster.iter().collect();
    ordered.sort_by(|a, b| b.rating.total_cmp(&a.rating).then_with(|| a.id.cmp(&b.id)));

    Ok(ordered
        .into_iter()
        .enumerate()
        .map(|(idx, entry)| build_standing(idx + 1, entry, settings))
        .collect())
}

fn build_standing(rank: usize, entry: &RosterEntry, settings: &StandingsSettings) -> Standing {
    let margin = settings.interval_z * entry.sd;

    Standing {
        rank,
        id: entry.id.clone(),
        display_label: entry.display_label.clone(),
        rating: entry.rating,
        sd: entry.sd,
        lower_bound: entry.rating - margin,
        upper_bound: entry.rating + margin,
        comparison_count: entry.comparison_count,
        confidence_level: entry.confidence_level(),
    }
}

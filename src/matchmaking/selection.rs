use std::cmp::Ordering;
use std::collections::HashSet;

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use super::scorer::{MatchCandidate, score_validated};
use crate::config::MatchmakingSettings;
use crate::domain::{RosterEntry, validate_roster};
use crate::errors::{ArenaError, ArenaResult, ensure_finite, invalid_input};

/// Matches chosen for the next round, with the count that was asked for.
///
/// A short selection is not an error by itself; callers compare
/// `len()` with `requested` or escalate with `into_complete()`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Selection {
    pub matches: Vec<MatchCandidate>,
    pub requested: usize,
}

impl Selection {
    pub fn len(&self) -> usize {
        self.matches.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty()
    }

    pub fn is_complete(&self) -> bool {
        self.matches.len() >= self.requested
    }

    pub fn shortfall(&self) -> usize {
        self.requested.saturating_sub(self.matches.len())
    }

    pub fn iter(&self) -> std::slice::Iter<'_, MatchCandidate> {
        self.matches.iter()
    }

    /// The matches, or `InsufficientRoster` when fewer than requested were found.
    pub fn into_complete(self) -> ArenaResult<Vec<MatchCandidate>> {
        if self.is_complete() {
            Ok(self.matches)
        } else {
            Err(ArenaError::InsufficientRoster {
                requested: self.requested,
                available: self.matches.len(),
            })
        }
    }
}

impl IntoIterator for Selection {
    type Item = MatchCandidate;
    type IntoIter = std::vec::IntoIter<MatchCandidate>;

    fn into_iter(self) -> Self::IntoIter {
        self.matches.into_iter()
    }
}

/// Highest-scoring pair of the roster. O(n²) in roster size.
pub fn select_pair_for_battle(
    roster: &[RosterEntry],
    settings: &MatchmakingSettings,
) -> ArenaResult<(RosterEntry, RosterEntry)> {
    let best = score_all_pairs(roster, settings)?
        .into_iter()
        .min_by(compare_candidates)
        .ok_or_else(|| invalid_input("roster has no pairs"))?;

    debug!(
        "Selected {} vs {} (score {:.4})",
        best.entry_a.id, best.entry_b.id, best.total_score
    );

    Ok((best.entry_a, best.entry_b))
}

/// Greedy selection of up to `num_matches` pairs by descending score.
///
/// With `avoid_repeats`, an entry already used by a selected pair makes
/// every later pair containing it ineligible. This is a heuristic, not a
/// maximum-weight matching. Without it, the top pairs are returned as is.
/// O(n² log n) in roster size.
pub fn select_matches(
    roster: &[RosterEntry],
    num_matches: usize,
    avoid_repeats: bool,
    settings: &MatchmakingSettings,
) -> ArenaResult<Selection> {
    let ranked = rank_candidates(roster, settings)?;

    let matches = if avoid_repeats {
        take_non_overlapping(ranked, num_matches)
    } else {
        ranked.into_iter().take(num_matches).collect()
    };

    let selection = Selection {
        matches,
        requested: num_matches,
    };

    if selection.is_complete() {
        debug!("Selected {} matches from {} entries", selection.len(), roster.len());
    } else {
        warn!(
            "Roster of {} entries supports only {} of {} requested matches",
            roster.len(),
            selection.len(),
            num_matches
        );
    }

    Ok(selection)
}

/// Every unordered pair, best first.
pub fn rank_candidates(
    roster: &[RosterEntry],
    settings: &MatchmakingSettings,
) -> ArenaResult<Vec<MatchCandidate>> {
    let mut candidates = score_all_pairs(roster, settings)?;
    candidates.sort_by(compare_candidates);
    Ok(candidates)
}

fn score_all_pairs(
    roster: &[RosterEntry],
    settings: &MatchmakingSettings,
) -> ArenaResult<Vec<MatchCandidate>> {
    settings.validate()?;
    if roster.len() < 2 {
        return Err(invalid_input(format!(
            "roster needs at least 2 entries, got {}",
            roster.len()
        )));
    }
    validate_roster(roster)?;

    let mut candidates = Vec::with_capacity(roster.len() * (roster.len() - 1) / 2);
    for (i, a) in roster.iter().enumerate() {
        for b in &roster[i + 1..] {
            let candidate = score_validated(a, b, settings);
            ensure_finite(candidate.total_score, "match score")?;
            candidates.push(candidate);
        }
    }

    Ok(candidates)
}

fn take_non_overlapping(ranked: Vec<MatchCandidate>, num_matches: usize) -> Vec<MatchCandidate> {
    let mut used: HashSet<String> = HashSet::new();
    let mut selected = Vec::with_capacity(num_matches);

    for candidate in ranked {
        if selected.len() == num_matches {
            break;
        }
        if used.contains(&candidate.entry_a.id) || used.contains(&candidate.entry_b.id) {
            continue;
        }
        used.insert(candidate.entry_a.id.clone());
        used.insert(candidate.entry_b.id.clone());
        selected.push(candidate);
    }

    selected
}

/// Best score first; ties by identifiers so the order never depends on roster order.
fn compare_candidates(a: &MatchCandidate, b: &MatchCandidate) -> Ordering {
    b.total_score
        .total_cmp(&a.total_score)
        .then_with(|| a.entry_a.id.cmp(&b.entry_a.id))
        .then_with(|| a.entry_b.id.cmp(&b.entry_b.id))
}

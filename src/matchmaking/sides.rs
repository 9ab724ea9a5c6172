use rand::Rng;

use super::scorer::MatchCandidate;
use crate::domain::RosterEntry;

/// Presentation order for the external judge.
///
/// Candidates are always canonical, so without this the entry with the
/// smaller identifier would always be shown first.
pub fn assign_sides(
    candidate: &MatchCandidate,
    rng: &mut impl Rng,
) -> (RosterEntry, RosterEntry) {
    if rng.random_bool(0.5) {
        (candidate.entry_b.clone(), candidate.entry_a.clone())
    } else {
        (candidate.entry_a.clone(), candidate.entry_b.clone())
    }
}

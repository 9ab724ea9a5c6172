use super::scorer::{self, MatchCandidate};
use super::selection::{self, Selection};
use crate::config::MatchmakingSettings;
use crate::domain::RosterEntry;
use crate::errors::ArenaResult;

/// Picks the next comparisons from a roster snapshot.
///
/// Holds only its settings; the roster is borrowed per call and never modified.
#[derive(Debug, Clone, Default)]
pub struct MatchmakingService {
    settings: MatchmakingSettings,
}

impl MatchmakingService {
    pub fn new(settings: MatchmakingSettings) -> ArenaResult<Self> {
        settings.validate()?;
        Ok(Self { settings })
    }

    pub fn settings(&self) -> &MatchmakingSettings {
        &self.settings
    }

    pub fn score_match(&self, a: &RosterEntry, b: &RosterEntry) -> ArenaResult<MatchCandidate> {
        scorer::score_match(a, b, &self.settings)
    }

    pub fn select_pair_for_battle(
        &self,
        roster: &[RosterEntry],
    ) -> ArenaResult<(RosterEntry, RosterEntry)> {
        selection::select_pair_for_battle(roster, &self.settings)
    }

    pub fn select_matches(
        &self,
        roster: &[RosterEntry],
        num_matches: usize,
        avoid_repeats: bool,
    ) -> ArenaResult<Selection> {
        selection::select_matches(roster, num_matches, avoid_repeats, &self.settings)
    }
}

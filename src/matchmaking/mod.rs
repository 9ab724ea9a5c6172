//! Choosing which pairs to compare next.
//!
//! Every pair of the roster is scored by how close its expected outcome is
//! to 50/50 and by how uncertain its two ratings are; selection then takes
//! the best pair, or greedily the best non-overlapping pairs.

pub mod scorer;
pub mod selection;
mod service;
mod sides;

pub use scorer::{MatchCandidate, score_match};
pub use selection::{Selection, rank_candidates, select_matches, select_pair_for_battle};
pub use service::MatchmakingService;
pub use sides::assign_sides;

mod calculator;
pub mod elo;
pub mod types;
pub mod uncertainty;

pub use calculator::EloCalculator;
pub use elo::{checked_expected_score, expected_score, update_after_battle, update_ratings};
pub use types::{RatedBattle, RatingUpdateResult};

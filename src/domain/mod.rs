pub mod models;
pub mod outcome;
mod roster;

pub use models::{ConfidenceLevel, ModelId, RatingValue, RosterEntry};
pub use outcome::{BattleOutcome, Winner};
pub use roster::{validate_entry, validate_roster, validate_sd};

//! Rating and matchmaking engine for pairwise model battles.
//!
//! A caller keeps the roster, asks [`MatchmakingService`] which pairs to
//! compare next, runs those comparisons elsewhere, and feeds each outcome
//! back through [`EloCalculator`] before persisting the updated entries.
//! Nothing here keeps state between calls or performs I/O beyond optional
//! configuration loading.
//!
//! ```rust
//! use arena_ranking::{BattleOutcome, EloCalculator, MatchmakingService, RosterEntry};
//!
//! let elo = EloCalculator::default();
//! let roster = vec![
//!     RosterEntry::new("gpt-4o", elo.settings()),
//!     RosterEntry::new("claude-3.5-sonnet", elo.settings()),
//!     RosterEntry::new("gemini-pro", elo.settings()),
//! ];
//!
//! let service = MatchmakingService::default();
//! let (a, b) = service.select_pair_for_battle(&roster)?;
//! let rated = elo.rate_battle(&a, &b, BattleOutcome::win_a())?;
//! assert!(rated.entry_a.rating > a.rating);
//! # Ok::<(), arena_ranking::ArenaError>(())
//! ```

pub mod calibration;
pub mod config;
pub mod domain;
pub mod errors;
pub mod matchmaking;
pub mod rating;
pub mod standings;

pub use config::{ArenaConfig, EloSettings, MatchmakingSettings, StandingsSettings};
pub use domain::{BattleOutcome, ConfidenceLevel, ModelId, RosterEntry, Winner};
pub use errors::{ArenaError, ArenaResult};
pub use matchmaking::{MatchCandidate, MatchmakingService, Selection};
pub use rating::{EloCalculator, RatedBattle, RatingUpdateResult};
pub use standings::{Standing, leaderboard};

pub mod settings;

pub use settings::{ArenaConfig, EloSettings, MatchmakingSettings, StandingsSettings};

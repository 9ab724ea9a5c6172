use std::path::Path;

use log::info;
use serde::{Deserialize, Serialize};

use crate::errors::{self, ArenaResult, invalid_input};

/// Environment variable naming a JSON configuration file.
pub const CONFIG_ENV_VAR: &str = "ARENA_CONFIG";

/// Parameters of the Elo rating updates.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct EloSettings {
    /// Rating assigned to a freshly registered entry.
    pub initial_rating: f64,
    /// Uncertainty assigned to a freshly registered entry.
    pub initial_sd: f64,
    /// K-factor of the zero-sum update, and the K an entry gets at `reference_sd`.
    pub k_factor: f64,
    /// Uncertainty at which the per-entry K equals `k_factor`.
    pub reference_sd: f64,
    pub min_k: f64,
    pub max_k: f64,
    /// Uncertainty never drops below this value.
    pub sd_floor: f64,
    /// Multiplier applied to sd after every comparison.
    pub sd_decay: f64,
}

impl Default for EloSettings {
    fn default() -> Self {
        Self {
            initial_rating: 1000.0,
            initial_sd: 350.0,
            k_factor: 32.0,
            reference_sd: 200.0,
            min_k: 16.0,
            max_k: 64.0,
            sd_floor: 50.0,
            sd_decay: 0.95,
        }
    }
}

impl EloSettings {
    pub fn validate(&self) -> ArenaResult<()> {
        require_finite("elo.initial_rating", self.initial_rating)?;
        require_positive("elo.initial_sd", self.initial_sd)?;
        require_non_negative("elo.k_factor", self.k_factor)?;
        require_positive("elo.reference_sd", self.reference_sd)?;
        require_non_negative("elo.min_k", self.min_k)?;
        require_non_negative("elo.max_k", self.max_k)?;
        if self.min_k > self.max_k {
            return Err(invalid_input(format!(
                "elo.min_k ({}) exceeds elo.max_k ({})",
                self.min_k, self.max_k
            )));
        }
        require_positive("elo.sd_floor", self.sd_floor)?;
        require_finite("elo.sd_decay", self.sd_decay)?;
        if self.sd_decay <= 0.0 || self.sd_decay > 1.0 {
            return Err(invalid_input(format!(
                "elo.sd_decay must be in (0, 1], got {}",
                self.sd_decay
            )));
        }
        Ok(())
    }
}

/// Weights and normalisation of the matchup desirability score.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct MatchmakingSettings {
    pub competitiveness_weight: f64,
    pub uncertainty_weight: f64,
    /// Per-entry sd treated as "completely unknown" when normalising.
    pub max_sd: f64,
}

impl Default for MatchmakingSettings {
    fn default() -> Self {
        Self {
            competitiveness_weight: 0.6,
            uncertainty_weight: 0.4,
            max_sd: 350.0,
        }
    }
}

impl MatchmakingSettings {
    pub fn validate(&self) -> ArenaResult<()> {
        require_non_negative("matchmaking.competitiveness_weight", self.competitiveness_weight)?;
        require_non_negative("matchmaking.uncertainty_weight", self.uncertainty_weight)?;
        if self.competitiveness_weight + self.uncertainty_weight <= 0.0 {
            return Err(invalid_input("matchmaking weights must not both be zero"));
        }
        require_positive("matchmaking.max_sd", self.max_sd)
    }

    /// Weights rescaled to sum to one.
    pub fn normalized_weights(&self) -> (f64, f64) {
        let total = self.competitiveness_weight + self.uncertainty_weight;
        (
            self.competitiveness_weight / total,
            self.uncertainty_weight / total,
        )
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct StandingsSettings {
    /// Number of sds on each side of the rating in a leaderboard interval.
    pub interval_z: f64,
}

impl Default for StandingsSettings {
    fn default() -> Self {
        Self { interval_z: 1.96 }
    }
}

impl StandingsSettings {
    pub fn validate(&self) -> ArenaResult<()> {
        require_non_negative("standings.interval_z", self.interval_z)
    }
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ArenaConfig {
    pub elo: EloSettings,
    pub matchmaking: MatchmakingSettings,
    pub standings: StandingsSettings,
}

impl ArenaConfig {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn validate(&self) -> ArenaResult<()> {
        self.elo.validate()?;
        self.matchmaking.validate()?;
        self.standings.validate()
    }

    /// Parses a JSON document; missing fields keep their defaults.
    pub fn from_json_str(json: &str) -> anyhow::Result<Self> {
        let config: ArenaConfig =
            errors::with_parse_context(serde_json::from_str(json), "arena configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn load(path: impl AsRef<Path>) -> anyhow::Result<Self> {
        let path = path.as_ref();
        let display = path.display().to_string();
        let contents = errors::with_config_context(std::fs::read_to_string(path), &display)?;
        let config = Self::from_json_str(&contents)?;
        info!("Loaded arena configuration from {}", display);
        Ok(config)
    }

    /// Loads the file named by `ARENA_CONFIG`, or defaults when it is unset.
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_optional_path(std::env::var(CONFIG_ENV_VAR).ok())
    }

    fn from_optional_path(path: Option<String>) -> anyhow::Result<Self> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }
}

fn require_finite(name: &str, value: f64) -> ArenaResult<()> {
    if value.is_finite() {
        Ok(())
    } else {
        Err(invalid_input(format!("{} must be finite, got {}", name, value)))
    }
}

fn require_non_negative(name: &str, value: f64) -> ArenaResult<()> {
    require_finite(name, value)?;
    if value < 0.0 {
        return Err(invalid_input(format!("{} must be >= 0, got {}", name, value)));
    }
    Ok(())
}

fn require_positive(name: &str, value: f64) -> ArenaResult<()> {
    require_finite(name, value)?;
    if value <= 0.0 {
        return Err(invalid_input(format!("{} must be > 0, got {}", name, value)));
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::errors::ArenaError;

    #[test]
    fn test_defaults_are_valid() {
        assert!(ArenaConfig::default().validate().is_ok());
    }

    #[test]
    fn test_partial_json_keeps_defaults() {
        let config = ArenaConfig::from_json_str(r#"{"elo": {"k_factor": 24.0}}"#).unwrap();
        assert_eq!(config.elo.k_factor, 24.0);
        assert_eq!(config.elo.sd_floor, 50.0);
        assert_eq!(config.matchmaking, MatchmakingSettings::default());
    }

    #[test]
    fn test_invalid_json_fails_validation() {
        let result = ArenaConfig::from_json_str(r#"{"elo": {"sd_decay": 1.5}}"#);
        assert!(result.is_err());
    }

    #[test]
    fn test_malformed_json_has_parse_context() {
        let err = ArenaConfig::from_json_str("{not json").unwrap_err();
        assert_eq!(err.to_string(), "Failed to parse arena configuration");
    }

    #[test]
    fn test_min_k_above_max_k_rejected() {
        let settings = EloSettings {
            min_k: 80.0,
            ..EloSettings::default()
        };
        assert!(matches!(settings.validate(), Err(ArenaError::InvalidInput(_))));
    }

    #[test]
    fn test_zero_weights_rejected() {
        let settings = MatchmakingSettings {
            competitiveness_weight: 0.0,
            uncertainty_weight: 0.0,
            ..MatchmakingSettings::default()
        };
        assert!(settings.validate().is_err());
    }

    #[test]
    fn test_normalized_weights_sum_to_one() {
        let settings = MatchmakingSettings {
            competitiveness_weight: 3.0,
            uncertainty_weight: 1.0,
            ..MatchmakingSettings::default()
        };
        let (wc, wu) = settings.normalized_weights();
        assert!((wc - 0.75).abs() < 1e-12);
        assert!((wu - 0.25).abs() < 1e-12);
    }

    #[test]
    fn test_load_reads_json_file() {
        let path = std::env::temp_dir().join("arena_ranking_test_config.json");
        std::fs::write(
            &path,
            r#"{"elo": {"sd_floor": 40.0}, "matchmaking": {"uncertainty_weight": 1.0}}"#,
        )
        .unwrap();

        let config = ArenaConfig::load(&path).unwrap();

        assert_eq!(config.elo.sd_floor, 40.0);
        assert_eq!(config.elo.k_factor, 32.0);
        assert_eq!(config.matchmaking.uncertainty_weight, 1.0);
        assert_eq!(config.standings, StandingsSettings::default());

        // Cleanup
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_unset_env_path_falls_back_to_defaults() {
        let config = ArenaConfig::from_optional_path(None).unwrap();
        assert_eq!(config, ArenaConfig::default());
    }

    #[test]
    fn test_env_path_is_loaded() {
        let path = std::env::temp_dir().join("arena_ranking_test_env_config.json");
        std::fs::write(&path, r#"{"standings": {"interval_z": 1.0}}"#).unwrap();

        let config = ArenaConfig::from_optional_path(Some(path.display().to_string())).unwrap();

        assert_eq!(config.standings.interval_z, 1.0);
        std::fs::remove_file(&path).unwrap();
    }

    #[test]
    fn test_env_path_to_missing_file_is_an_error() {
        let result = ArenaConfig::from_optional_path(Some("/nonexistent/arena.json".to_string()));
        assert!(result.is_err());
    }

    #[test]
    fn test_load_missing_file_has_context() {
        let err = ArenaConfig::load("/nonexistent/arena.json").unwrap_err();
        assert!(err.to_string().starts_with("Failed to read configuration from"));
    }
}

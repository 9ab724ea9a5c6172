use anyhow::Context as _;
use thiserror::Error;

/// Errors surfaced by rating and matchmaking operations.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ArenaError {
    /// Caller contract violation (out-of-range score, short roster, bad sd...)
    #[error("invalid input: {0}")]
    InvalidInput(String),

    /// Fewer non-overlapping matches were available than requested
    #[error("insufficient roster: requested {requested} matches, only {available} available")]
    InsufficientRoster { requested: usize, available: usize },

    /// A rating or probability became NaN or infinite
    #[error("numeric instability: {0}")]
    NumericInstability(String),
}

pub type ArenaResult<T> = Result<T, ArenaError>;

pub fn invalid_input(message: impl Into<String>) -> ArenaError {
    ArenaError::InvalidInput(message.into())
}

/// Fails with `NumericInstability` when `value` is NaN or infinite
pub fn ensure_finite(value: f64, what: &str) -> ArenaResult<f64> {
    if value.is_finite() {
        Ok(value)
    } else {
        Err(ArenaError::NumericInstability(format!(
            "{} is not finite: {}",
            what, value
        )))
    }
}

/// Add context to configuration file errors
pub fn config_context(path: &str) -> String {
    format!("Failed to read configuration from: {}", path)
}

/// Add context to parse errors
pub fn parse_context(data_type: &str) -> String {
    format!("Failed to parse {}", data_type)
}

/// Wrap result with configuration file context
pub fn with_config_context<T, E>(result: Result<T, E>, path: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(config_context(path))
}

/// Wrap result with parse context
pub fn with_parse_context<T, E>(result: Result<T, E>, data_type: &str) -> anyhow::Result<T>
where
    E: std::error::Error + Send + Sync + 'static,
{
    result.context(parse_context(data_type))
}

use std::collections::HashSet;

use super::models::RosterEntry;
use crate::errors::{ArenaResult, invalid_input};

/// Checks the roster invariants every selection relies on.
pub fn validate_roster(roster: &[RosterEntry]) -> ArenaResult<()> {
    let mut seen = HashSet::with_capacity(roster.len());

    for entry in roster {
        validate_entry(entry)?;
        if !seen.insert(entry.id.as_str()) {
            return Err(invalid_input(format!("duplicate roster id: {}", entry.id)));
        }
    }

    Ok(())
}

pub fn validate_entry(entry: &RosterEntry) -> ArenaResult<()> {
    if !entry.rating.is_finite() {
        return Err(invalid_input(format!(
            "rating of {} is not finite: {}",
            entry.id, entry.rating
        )));
    }
    validate_sd(entry.sd, &entry.id)
}

pub fn validate_sd(sd: f64, owner: &str) -> ArenaResult<()> {
    if sd.is_finite() && sd >= 0.0 {
        Ok(())
    } else {
        Err(invalid_input(format!("sd of {} must be finite and >= 0, got {}", owner, sd)))
    }
}

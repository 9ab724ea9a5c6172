use crate::config::EloSettings;

/// sd used in computations; anything below the floor (zero included) counts as the floor.
pub fn effective_sd(sd: f64, settings: &EloSettings) -> f64 {
    sd.max(settings.sd_floor)
}

/// Per-entry K-factor, proportional to the entry's own uncertainty.
pub fn k_for_sd(sd: f64, settings: &EloSettings) -> f64 {
    let scaled = settings.k_factor * effective_sd(sd, settings) / settings.reference_sd;
    scaled.max(settings.min_k).min(settings.max_k)
}

/// Uncertainty after one more comparison.
pub fn decay_sd(sd: f64, settings: &EloSettings) -> f64 {
    (effective_sd(sd, settings) * settings.sd_decay).max(settings.sd_floor)
}

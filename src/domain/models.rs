use serde::{Deserialize, Serialize};

use crate::config::EloSettings;

pub type ModelId = String;
pub type RatingValue = f64;

/// One competing entity in the roster.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RosterEntry {
    pub id: ModelId,
    pub rating: RatingValue,
    /// Standard deviation of the belief about `rating`
    pub sd: f64,
    pub comparison_count: u32,
    /// Not used in any computation
    pub display_label: Option<String>,
}

impl RosterEntry {
    /// Fresh entry at the configured starting rating and uncertainty.
    pub fn new(id: impl Into<ModelId>, settings: &EloSettings) -> Self {
        Self {
            id: id.into(),
            rating: settings.initial_rating,
            sd: settings.initial_sd,
            comparison_count: 0,
            display_label: None,
        }
    }

    pub fn with_label(mut self, label: impl Into<String>) -> Self {
        self.display_label = Some(label.into());
        self
    }

    /// Label when present, identifier otherwise.
    pub fn label(&self) -> &str {
        self.display_label.as_deref().unwrap_or(&self.id)
    }

    pub fn confidence_level(&self) -> ConfidenceLevel {
        ConfidenceLevel::from_comparisons(self.comparison_count)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ConfidenceLevel {
    Unranked,    // < 5 comparisons
    Provisional, // 5-19 comparisons
    Emerging,    // 20-49 comparisons
    Established, // 50+ comparisons
}

impl ConfidenceLevel {
    pub fn from_comparisons(comparisons: u32) -> Self {
        match comparisons {
            0..=4 => ConfidenceLevel::Unranked,
            5..=19 => ConfidenceLevel::Provisional,
            20..=49 => ConfidenceLevel::Emerging,
            _ => ConfidenceLevel::Established,
        }
    }

    pub fn as_str(&self) -> &str {
        match self {
            ConfidenceLevel::Unranked => "unranked",
            ConfidenceLevel::Provisional => "provisional",
            ConfidenceLevel::Emerging => "emerging",
            ConfidenceLevel::Established => "established",
        }
    }
}

//! Core data models used throughout Galaxy Browser.
//!
//! These types represent the star records that flow from the frozen dataset
//! through the assembler, the search index and the statistics view.

use serde::{Deserialize, Serialize};

/// Extended metadata attached to a completed run.
///
/// Every scalar field is optional in the published dataset; `mods` is an
/// empty list when the run was vanilla or the list was not exported.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct DetailRecord {
    #[serde(default)]
    pub seed: Option<String>,
    /// Total play time as `HH:MM:SS`, hours unbounded.
    #[serde(default)]
    pub time_played: Option<String>,
    #[serde(default)]
    pub comment: Option<String>,
    #[serde(default)]
    pub factorio_version: Option<String>,
    #[serde(default)]
    pub mods: Vec<String>,
    #[serde(default)]
    pub player_count: Option<String>,
    #[serde(default)]
    pub uploaded: Option<String>,
}

/// One assembled dataset record.
///
/// String fields are never missing: gaps in the source sequences become
/// empty strings. `details` is either absent or a complete record.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Star {
    pub name: String,
    /// RGB color packed as `0xRRGGBB`.
    pub color: u32,
    /// ISO-8601 completion timestamp, or empty when the dataset has a gap.
    pub date: String,
    pub user: String,
    pub details: Option<DetailRecord>,
}

impl Star {
    pub fn has_name(&self) -> bool {
        !self.name.is_empty()
    }

    pub fn seed(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.seed.as_deref())
    }

    pub fn comment(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.comment.as_deref())
    }

    pub fn time_played(&self) -> Option<&str> {
        self.details.as_ref().and_then(|d| d.time_played.as_deref())
    }
}

//! Loading the frozen star dataset.
//!
//! The dataset is a JSON document holding parallel sequences addressed by a
//! shared index. It is read once at startup and never modified afterwards.
//!
//! ```json
//! {
//!   "stars": {
//!     "colors": [16746496, 65280],
//!     "names": ["Alpha Centauri", null],
//!     "creation_update": ["2024-11-16T09:00:00Z", "2024-11-30T20:00:00Z"],
//!     "users": ["alice"],
//!     "details": [{ "seed": "12345", "time_played": "25:30:00", "mods": [] }, null]
//!   }
//! }
//! ```
//!
//! Only `colors` is mandatory. The other sequences may be shorter than
//! `colors`, contain `null` gaps, or be missing entirely.

use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::models::DetailRecord;

/// Largest value a packed `0xRRGGBB` color may take.
pub const MAX_COLOR: u32 = 0x00FF_FFFF;

/// Top-level dataset document.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Dataset {
    pub stars: StarColumns,
}

/// Parallel per-star sequences, aligned by index with `colors`.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StarColumns {
    pub colors: Vec<u32>,
    #[serde(default)]
    pub names: Vec<Option<String>>,
    #[serde(default)]
    pub creation_update: Vec<Option<String>>,
    #[serde(default)]
    pub users: Vec<Option<String>>,
    #[serde(default)]
    pub details: Vec<Option<DetailRecord>>,
}

impl Dataset {
    /// Number of stars, which is always the length of `colors`.
    pub fn len(&self) -> usize {
        self.stars.colors.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stars.colors.is_empty()
    }
}

/// Read and validate a dataset file.
pub fn load_dataset(path: &Path) -> Result<Dataset> {
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("Failed to read dataset file: {}", path.display()))?;

    let dataset = parse_dataset(&content)
        .with_context(|| format!("Invalid dataset file: {}", path.display()))?;

    tracing::info!(
        path = %path.display(),
        stars = dataset.len(),
        "dataset loaded"
    );

    Ok(dataset)
}

/// Parse a dataset from its JSON text.
///
/// Fails on malformed JSON, a `null` color, or a color outside `0..=0xFFFFFF`.
/// Sequences whose length differs from `colors` are accepted and reported at
/// `warn` level.
pub fn parse_dataset(json: &str) -> Result<Dataset> {
    let dataset: Dataset = serde_json::from_str(json).context("Failed to parse dataset JSON")?;

    if let Some((index, color)) = dataset
        .stars
        .colors
        .iter()
        .enumerate()
        .find(|(_, c)| **c > MAX_COLOR)
    {
        bail!(
            "stars.colors[{}] = {} is not a valid color (must be <= 0xFFFFFF)",
            index,
            color
        );
    }

    let expected = dataset.len();
    let columns = &dataset.stars;
    for (field, len) in [
        ("names", columns.names.len()),
        ("creation_update", columns.creation_update.len()),
        ("users", columns.users.len()),
        ("details", columns.details.len()),
    ] {
        if len != expected {
            tracing::warn!(
                field,
                len,
                expected,
                "sequence length differs from stars.colors"
            );
        }
    }

    Ok(dataset)
}

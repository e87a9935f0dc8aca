//! Export the assembled catalog as JSON.
//!
//! Produces one document holding every star view plus both aggregations,
//! suitable for a static front-end that wants precomputed data.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;

use crate::catalog::Catalog;
use crate::stats::Stats;
use crate::view::StarView;

#[derive(Serialize)]
struct ExportData<'a> {
    generated_at: String,
    total: usize,
    stars: Vec<StarView>,
    stats: &'a Stats,
}

/// Export stars and statistics as JSON.
///
/// If `output` is `Some`, writes to that file path. Otherwise writes
/// to stdout for piping.
pub fn run_export(catalog: &Catalog, output: Option<&Path>) -> Result<()> {
    let (total, stars) = catalog.search("", false, 0, None);

    let data = ExportData {
        generated_at: catalog.now().to_rfc3339(),
        total,
        stars,
        stats: catalog.stats(),
    };
    let json = serde_json::to_string_pretty(&data)?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent() {
                std::fs::create_dir_all(parent)
                    .with_context(|| format!("Failed to create {}", parent.display()))?;
            }
            std::fs::write(path, &json)
                .with_context(|| format!("Failed to write {}", path.display()))?;
            eprintln!("Exported {} stars to {}", total, path.display());
        }
        None => {
            println!("{}", json);
        }
    }

    Ok(())
}

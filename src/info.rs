use anyhow::Result;
use std::path::Path;

use crate::catalog::Catalog;

pub fn run_info(catalog: &Catalog, dataset_path: &Path) -> Result<()> {
    let index = catalog.index();
    let named = index.stars().filter(|s| s.has_name()).count();
    let detailed = index.stars().filter(|s| s.details.is_some()).count();
    let daily = &catalog.stats().daily;

    println!("{:<14} {}", "Dataset:", dataset_path.display());
    println!("{:<14} {}", "Stars:", index.len());
    println!("{:<14} {}", "Named:", named);
    println!("{:<14} {}", "With details:", detailed);
    match (daily.first(), daily.last()) {
        (Some(first), Some(last)) => {
            println!("{:<14} {}", "First day:", first.date);
            println!("{:<14} {}", "Last day:", last.date);
        }
        _ => println!("{:<14} none", "Completions:"),
    }

    Ok(())
}

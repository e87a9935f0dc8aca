//! Star retrieval by dataset index.
//!
//! Used by both the `galaxy get` CLI command and `GET /stars/{index}`.
//! Unlike search cards, the full comment text is shown.

use anyhow::{bail, Result};

use crate::catalog::Catalog;
use crate::view::StarView;

/// Look up one star, failing when `index` is out of range.
pub fn get_star(catalog: &Catalog, index: usize) -> Result<StarView> {
    match catalog.view(index) {
        Some(view) => Ok(view),
        None => bail!(
            "star index {} out of range (dataset has {} stars)",
            index,
            catalog.index().len()
        ),
    }
}

/// CLI entry point: calls [`get_star`] and prints to stdout.
pub fn run_get(catalog: &Catalog, index: usize, json: bool) -> Result<()> {
    let star = get_star(catalog, index)?;

    if json {
        println!("{}", serde_json::to_string_pretty(&star)?);
        return Ok(());
    }

    println!("--- Star ---");
    println!("index:        {}", star.index);
    println!("name:         {}", star.display_name());
    println!("color:        {}", star.color);
    println!("date:         {}", star.date);
    println!(
        "finished:     {}",
        star.elapsed.as_deref().unwrap_or("unknown")
    );
    if !star.user.is_empty() {
        println!("user:         {}", star.user);
    }
    if let Some(ref url) = star.gallery_url {
        println!("gallery:      {}", url);
    }

    let Some(details) = star.details else {
        println!();
        println!("(no details)");
        return Ok(());
    };

    println!();
    println!("--- Details ---");
    let record = &details.record;
    let rows = [
        ("seed", record.seed.as_deref()),
        ("time_played", record.time_played.as_deref()),
        ("played", details.played.as_deref()),
        ("version", record.factorio_version.as_deref()),
        ("players", record.player_count.as_deref()),
        ("uploaded", record.uploaded.as_deref()),
    ];
    for (label, value) in rows {
        if let Some(value) = value {
            println!("{:<14}{}", format!("{}:", label), value);
        }
    }

    if !record.mods.is_empty() {
        println!();
        println!("--- Mods ({}) ---", record.mods.len());
        for m in &record.mods {
            println!("{}", m);
        }
    }

    if let Some(ref comment) = record.comment {
        println!();
        println!("--- Comment ---");
        println!("{}", comment);
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::parse_dataset;
    use chrono::Utc;
    use url::Url;

    #[test]
    fn test_get_star_bounds() {
        let dataset = parse_dataset(r#"{"stars": {"colors": [1, 2], "names": ["a", "b"]}}"#).unwrap();
        let catalog = Catalog::from_dataset(
            &dataset,
            Url::parse("https://factorio.com/galaxy").unwrap(),
            Utc::now(),
        );

        assert_eq!(get_star(&catalog, 1).unwrap().name, "b");
        let err = get_star(&catalog, 2).unwrap_err();
        assert!(err.to_string().contains("out of range"));
    }
}

//! The `galaxy search` command: filter the catalog and print star cards.

use anyhow::Result;

use crate::catalog::Catalog;
use crate::config::BrowseConfig;
use crate::view::{preview, StarView};

/// Options for one `galaxy search` invocation.
#[derive(Debug, Clone, Default)]
pub struct SearchOptions {
    pub query: String,
    /// `None` falls back to `browse.hide_empty`.
    pub hide_empty: Option<bool>,
    /// `None` falls back to `browse.limit`.
    pub limit: Option<usize>,
    pub json: bool,
}

pub fn run_search(catalog: &Catalog, browse: &BrowseConfig, opts: &SearchOptions) -> Result<()> {
    let hide_empty = opts.hide_empty.unwrap_or(browse.hide_empty);
    let limit = opts.limit.unwrap_or(browse.limit);

    let (matched, views) = catalog.search(&opts.query, hide_empty, 0, Some(limit));

    tracing::debug!(
        query = %opts.query,
        hide_empty,
        matched,
        "search complete"
    );

    if opts.json {
        println!("{}", serde_json::to_string_pretty(&views)?);
        return Ok(());
    }

    if views.is_empty() {
        println!("No results.");
    }

    for view in &views {
        print_card(view, browse.comment_preview);
    }

    if views.len() < matched {
        println!(
            "Showing {} of {} stars ({} listed, raise --limit for more)",
            matched,
            catalog.index().len(),
            views.len()
        );
    } else {
        println!("Showing {} of {} stars", matched, catalog.index().len());
    }

    Ok(())
}

fn print_card(view: &StarView, comment_preview: usize) {
    println!("[{}] {}  {}", view.index, view.display_name(), view.color);
    println!(
        "    Finished: {}",
        view.elapsed.as_deref().unwrap_or("unknown")
    );
    if !view.user.is_empty() {
        println!("    By: {}", view.user);
    }

    if let Some(ref details) = view.details {
        if let Some(ref played) = details.played {
            println!("    Played: {}", played);
        }

        let mut facts = Vec::new();
        if let Some(ref seed) = details.record.seed {
            facts.push(format!("Seed: {}", seed));
        }
        if let Some(ref version) = details.record.factorio_version {
            facts.push(format!("Version: {}", version));
        }
        if let Some(ref players) = details.record.player_count {
            facts.push(format!("Players: {}", players));
        }
        if !details.record.mods.is_empty() {
            facts.push(format!("Mods: {}", details.record.mods.len()));
        }
        if !facts.is_empty() {
            println!("    {}", facts.join(" · "));
        }

        if let Some(ref comment) = details.record.comment {
            if !comment.is_empty() {
                println!("    Comment: \"{}\"", preview(comment, comment_preview));
            }
        }
    }

    if let Some(ref url) = view.gallery_url {
        println!("    Link: {}", url);
    }
    println!();
}

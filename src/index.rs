//! Search index and filter engine.
//!
//! Each star gets one precomputed, lowercase haystack so that repeated
//! filtering is a plain substring scan.
//!
//! # Haystack layout
//!
//! Fields joined with single spaces, in order:
//!
//! 1. name
//! 2. user
//! 3. seed (or empty)
//! 4. comment (or empty)
//! 5. formatted play time (or empty)
//! 6. formatted elapsed time since completion
//!
//! Formatting failures on malformed values leave that slot empty.
//!
//! # Filtering
//!
//! | Query | Hide empty | Result |
//! |-------|------------|--------|
//! | empty | no  | every star, original order |
//! | empty | yes | stars with a non-empty name |
//! | text  | no  | stars whose haystack contains the lowercased query |
//! | text  | yes | both conditions |
//!
//! Matching is case-insensitive substring containment. No tokenizing, no
//! fuzzy matching, no pattern syntax.

use chrono::{DateTime, Utc};

use crate::format::{format_elapsed, format_played};
use crate::models::Star;

/// A star paired with its lowercase search haystack.
#[derive(Debug, Clone)]
pub struct SearchEntry {
    pub haystack: String,
    pub star: Star,
}

/// The searchable star collection for one session.
///
/// Built once from the assembled stars and read-only afterwards.
#[derive(Debug, Clone, Default)]
pub struct SearchIndex {
    entries: Vec<SearchEntry>,
}

/// Build the haystack for every star, with elapsed time relative to `now`.
pub fn build_index(stars: Vec<Star>, now: DateTime<Utc>) -> SearchIndex {
    let entries: Vec<SearchEntry> = stars
        .into_iter()
        .map(|star| SearchEntry {
            haystack: haystack(&star, now),
            star,
        })
        .collect();

    tracing::debug!(entries = entries.len(), "search index built");
    SearchIndex { entries }
}

fn haystack(star: &Star, now: DateTime<Utc>) -> String {
    let played = format_played(star.time_played()).unwrap_or_else(|e| {
        tracing::debug!(name = %star.name, error = %e, "unreadable play time");
        None
    });
    let elapsed = format_elapsed(&star.date, now).unwrap_or_else(|e| {
        tracing::debug!(name = %star.name, error = %e, "unreadable completion date");
        String::new()
    });

    [
        star.name.as_str(),
        star.user.as_str(),
        star.seed().unwrap_or(""),
        star.comment().unwrap_or(""),
        played.as_deref().unwrap_or(""),
        elapsed.as_str(),
    ]
    .join(" ")
    .to_lowercase()
}

/// Filter stars by query and the hide-empty-names flag, preserving order.
pub fn filter<'a>(entries: &'a [SearchEntry], query: &str, hide_empty: bool) -> Vec<&'a Star> {
    filter_positions(entries, query, hide_empty)
        .into_iter()
        .filter_map(|i| entries.get(i).map(|e| &e.star))
        .collect()
}

/// Positions into `entries` of the stars [`filter`] selects.
///
/// An empty query without hide-empty selects everything without scanning.
pub fn filter_positions(entries: &[SearchEntry], query: &str, hide_empty: bool) -> Vec<usize> {
    if query.is_empty() && !hide_empty {
        return (0..entries.len()).collect();
    }

    let needle = query.to_lowercase();
    entries
        .iter()
        .enumerate()
        .filter(|(_, e)| accepts(e, &needle, hide_empty))
        .map(|(i, _)| i)
        .collect()
}

fn accepts(entry: &SearchEntry, needle: &str, hide_empty: bool) -> bool {
    if hide_empty && !entry.star.has_name() {
        return false;
    }
    needle.is_empty() || entry.haystack.contains(needle)
}

impl SearchIndex {
    pub fn entries(&self) -> &[SearchEntry] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn star(&self, position: usize) -> Option<&Star> {
        self.entries.get(position).map(|e| &e.star)
    }

    pub fn stars(&self) -> impl Iterator<Item = &Star> + '_ {
        self.entries.iter().map(|e| &e.star)
    }

    pub fn filter(&self, query: &str, hide_empty: bool) -> Vec<&Star> {
        filter(&self.entries, query, hide_empty)
    }

    pub fn filter_positions(&self, query: &str, hide_empty: bool) -> Vec<usize> {
        filter_positions(&self.entries, query, hide_empty)
    }
}

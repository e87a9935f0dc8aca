//! Display-ready star records.
//!
//! [`StarView`] is the shape shared by `galaxy search --json`, `galaxy get`,
//! `galaxy export` and the HTTP API.

use chrono::{DateTime, Utc};
use serde::Serialize;
use url::Url;

use crate::format::{color_hex, format_elapsed, format_played, gallery_url};
use crate::models::{DetailRecord, Star};

/// A star with its derived display fields.
#[derive(Debug, Clone, Serialize)]
pub struct StarView {
    /// Position in the dataset; stable for the session.
    pub index: usize,
    pub name: String,
    /// `#rrggbb`
    pub color: String,
    pub date: String,
    /// Relative completion time, `None` when `date` is unreadable.
    pub elapsed: Option<String>,
    pub user: String,
    pub gallery_url: Option<String>,
    pub details: Option<DetailView>,
}

#[derive(Debug, Clone, Serialize)]
pub struct DetailView {
    #[serde(flatten)]
    pub record: DetailRecord,
    /// Formatted play time, `None` when missing or unreadable.
    pub played: Option<String>,
}

impl StarView {
    pub fn new(index: usize, star: &Star, gallery: &Url, now: DateTime<Utc>) -> Self {
        Self {
            index,
            name: star.name.clone(),
            color: color_hex(star.color),
            date: star.date.clone(),
            elapsed: format_elapsed(&star.date, now).ok(),
            user: star.user.clone(),
            gallery_url: gallery_url(gallery, &star.name),
            details: star.details.as_ref().map(|record| DetailView {
                record: record.clone(),
                played: format_played(record.time_played.as_deref())
                    .ok()
                    .flatten(),
            }),
        }
    }

    /// Name for display; unnamed stars show as `<Empty>`.
    pub fn display_name(&self) -> &str {
        if self.name.is_empty() {
            "<Empty>"
        } else {
            &self.name
        }
    }
}

/// Shorten `text` to at most `max_chars` characters, marking the cut with `…`.
pub fn preview(text: &str, max_chars: usize) -> String {
    let flat = text.replace(['\r', '\n'], " ");
    if flat.chars().count() <= max_chars {
        return flat;
    }
    let cut: String = flat.chars().take(max_chars.saturating_sub(1)).collect();
    format!("{}…", cut.trim_end())
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    fn gallery() -> Url {
        Url::parse("https://factorio.com/galaxy").unwrap()
    }

    fn now() -> DateTime<Utc> {
        Utc.with_ymd_and_hms(2024, 12, 1, 12, 0, 0).unwrap()
    }

    #[test]
    fn test_view_of_detailed_star() {
        let star = Star {
            name: "Alpha Centauri".to_string(),
            color: 0xFF8800,
            date: "2024-11-16T09:00:00Z".to_string(),
            user: "alice".to_string(),
            details: Some(DetailRecord {
                time_played: Some("25:30:00".to_string()),
                mods: vec!["space-age".to_string()],
                ..Default::default()
            }),
        };

        let view = StarView::new(0, &star, &gallery(), now());
        assert_eq!(view.color, "#ff8800");
        assert_eq!(view.elapsed.as_deref(), Some("2 weeks and 1 day ago"));
        assert_eq!(
            view.gallery_url.as_deref(),
            Some("https://factorio.com/galaxy/Alpha%20Centauri")
        );
        let details = view.details.unwrap();
        assert_eq!(details.played.as_deref(), Some("1d 1h 30m"));
        assert_eq!(details.record.mods.len(), 1);
    }

    #[test]
    fn test_view_of_bare_star() {
        let star = Star {
            name: String::new(),
            color: 1,
            date: String::new(),
            user: String::new(),
            details: None,
        };
        let view = StarView::new(7, &star, &gallery(), now());
        assert_eq!(view.index, 7);
        assert_eq!(view.display_name(), "<Empty>");
        assert_eq!(view.color, "#000001");
        assert!(view.elapsed.is_none());
        assert!(view.gallery_url.is_none());
        assert!(view.details.is_none());
    }

    #[test]
    fn test_view_serializes_flat_details() {
        let star = Star {
            name: "x".to_string(),
            color: 0,
            date: String::new(),
            user: String::new(),
            details: Some(DetailRecord {
                seed: Some("42".to_string()),
                time_played: Some("bad".to_string()),
                ..Default::default()
            }),
        };
        let json = serde_json::to_value(StarView::new(0, &star, &gallery(), now())).unwrap();
        assert_eq!(json["details"]["seed"], "42");
        assert_eq!(json["details"]["time_played"], "bad");
        assert!(json["details"]["played"].is_null());
    }

    #[test]
    fn test_preview_truncates_on_chars() {
        assert_eq!(preview("short", 10), "short");
        assert_eq!(preview("line one\nline two", 100), "line one line two");
        assert_eq!(preview("abcdefghij", 5), "abcd…");
        assert_eq!(preview("ünïcödé text", 4), "ünï…");
    }
}

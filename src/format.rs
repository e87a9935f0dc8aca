//! Human-readable formatting for star fields.
//!
//! - [`format_elapsed`] turns a completion timestamp into `"today"`,
//!   `"3 days ago"`, `"2 weeks and 1 day ago"`, ...
//! - [`PlayTime`] / [`format_played`] turn `HH:MM:SS` play time into
//!   `"1d 1h 30m"`.
//! - [`color_hex`] and [`gallery_url`] produce the display color and the
//!   external gallery link for a star.

use chrono::{DateTime, NaiveDate, NaiveDateTime, NaiveTime, Utc};
use std::fmt;
use thiserror::Error;
use url::Url;

const MILLIS_PER_DAY: i64 = 86_400_000;

/// Formatting failures for malformed dataset values.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum FormatError {
    /// Play time was not three colon-separated unsigned integers.
    #[error("invalid duration '{0}': expected HH:MM:SS")]
    InvalidDuration(String),
    /// Completion date was not a recognized ISO-8601 form.
    #[error("invalid timestamp '{0}'")]
    InvalidTimestamp(String),
}

// ============ Elapsed time ============

/// Parse an ISO-8601 timestamp.
///
/// Accepts RFC 3339 (`2024-11-02T10:00:00Z`, `+02:00` offsets, fractional
/// seconds), a naive date-time read as UTC, or a bare `YYYY-MM-DD` date at
/// midnight UTC.
pub fn parse_timestamp(value: &str) -> Result<DateTime<Utc>, FormatError> {
    let trimmed = value.trim();

    if let Ok(dt) = DateTime::parse_from_rfc3339(trimmed) {
        return Ok(dt.with_timezone(&Utc));
    }
    for pattern in ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"] {
        if let Ok(naive) = NaiveDateTime::parse_from_str(trimmed, pattern) {
            return Ok(naive.and_utc());
        }
    }
    if let Ok(date) = NaiveDate::parse_from_str(trimmed, "%Y-%m-%d") {
        return Ok(date.and_time(NaiveTime::MIN).and_utc());
    }

    Err(FormatError::InvalidTimestamp(value.to_string()))
}

/// Whole days elapsed between `then` and `now`, floored.
///
/// Negative when `then` lies in the future.
pub fn elapsed_days(then: DateTime<Utc>, now: DateTime<Utc>) -> i64 {
    (now - then).num_milliseconds().div_euclid(MILLIS_PER_DAY)
}

/// Format an ISO-8601 completion date relative to `now`.
///
/// Dates in the future are reported as `"today"`.
pub fn format_elapsed(date: &str, now: DateTime<Utc>) -> Result<String, FormatError> {
    let then = parse_timestamp(date)?;
    Ok(format_days(elapsed_days(then, now)))
}

/// Format a whole-day count as relative text.
pub fn format_days(days: i64) -> String {
    match days {
        i64::MIN..=0 => "today".to_string(),
        1 => "yesterday".to_string(),
        2..=6 => format!("{} days ago", days),
        _ => {
            let weeks = days / 7;
            let rem = days % 7;
            if rem == 0 {
                format!("{} {} ago", weeks, plural(weeks, "week", "weeks"))
            } else {
                format!(
                    "{} {} and {} {} ago",
                    weeks,
                    plural(weeks, "week", "weeks"),
                    rem,
                    plural(rem, "day", "days")
                )
            }
        }
    }
}

fn plural(n: i64, one: &'static str, many: &'static str) -> &'static str {
    if n == 1 {
        one
    } else {
        many
    }
}

// ============ Play time ============

/// Play time parsed from `HH:MM:SS`, with hours allowed past 24.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayTime {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl PlayTime {
    pub fn parse(value: &str) -> Result<Self, FormatError> {
        let invalid = || FormatError::InvalidDuration(value.to_string());

        let parts: Vec<&str> = value.split(':').collect();
        let [hours, minutes, seconds] = parts[..] else {
            return Err(invalid());
        };

        let number = |part: &str| part.trim().parse::<u32>().map_err(|_| invalid());
        Ok(Self {
            hours: number(hours)?,
            minutes: number(minutes)?,
            seconds: number(seconds)?,
        })
    }
}

/// Renders non-zero components as `"<d>d <h>h <m>m <s>s"`.
///
/// A zero duration renders as the empty string.
impl fmt::Display for PlayTime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let components = [
            (self.hours / 24, 'd'),
            (self.hours % 24, 'h'),
            (self.minutes, 'm'),
            (self.seconds, 's'),
        ];

        let mut first = true;
        for (value, unit) in components {
            if value == 0 {
                continue;
            }
            if !first {
                f.write_str(" ")?;
            }
            write!(f, "{}{}", value, unit)?;
            first = false;
        }
        Ok(())
    }
}

/// Format an optional `HH:MM:SS` play time. `None` stays `None`.
pub fn format_played(time_played: Option<&str>) -> Result<Option<String>, FormatError> {
    time_played
        .map(|t| PlayTime::parse(t).map(|p| p.to_string()))
        .transpose()
}

// ============ Color and links ============

/// `0xRRGGBB` as a CSS-style `#rrggbb` string.
pub fn color_hex(color: u32) -> String {
    format!("#{:06x}", color)
}

/// Gallery page for a named star, with the name encoded as one path segment.
///
/// Unnamed stars have no gallery page.
pub fn gallery_url(base: &Url, name: &str) -> Option<String> {
    if name.is_empty() {
        return None;
    }
    let mut url = base.clone();
    url.path_segments_mut().ok()?.pop_if_empty().push(name);
    Some(url.to_string())
}

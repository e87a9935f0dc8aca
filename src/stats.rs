//! Dataset statistics: play-time distribution and daily completions.
//!
//! Both aggregations run once over the full, unfiltered star collection.
//! Used by `galaxy stats`, `galaxy export` and `GET /stats`.

use anyhow::Result;
use serde::Serialize;
use std::collections::BTreeMap;

use crate::catalog::Catalog;
use crate::format::PlayTime;
use crate::models::Star;

/// Number of one-hour histogram buckets (`0h` through `49h`).
pub const PLAY_TIME_BUCKETS: usize = 50;

/// Width of the longest bar in the text histogram.
const BAR_WIDTH: usize = 40;

/// Stars whose play time falls in `[hour, hour + 1)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HourBucket {
    pub hour: u32,
    pub label: String,
    pub count: usize,
}

/// Completions recorded on one calendar day.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DailyCount {
    /// `YYYY-MM-DD`
    pub date: String,
    pub count: usize,
}

/// Both aggregations together.
#[derive(Debug, Clone, Serialize)]
pub struct Stats {
    pub play_time: Vec<HourBucket>,
    pub daily: Vec<DailyCount>,
}

impl Stats {
    pub fn compute<'a, I>(stars: I) -> Self
    where
        I: IntoIterator<Item = &'a Star> + Clone,
    {
        Self {
            play_time: play_time_histogram(stars.clone()),
            daily: daily_completions(stars),
        }
    }

    /// Stars counted in the histogram.
    pub fn histogram_total(&self) -> usize {
        self.play_time.iter().map(|b| b.count).sum()
    }

    /// Stars with a completion date.
    pub fn completions_total(&self) -> usize {
        self.daily.iter().map(|d| d.count).sum()
    }
}

/// Count stars by whole hours played, for hours `0..50`.
///
/// Stars without a play time, with an unreadable one, or with 50 hours or
/// more are left out.
pub fn play_time_histogram<'a>(stars: impl IntoIterator<Item = &'a Star>) -> Vec<HourBucket> {
    let mut counts = [0usize; PLAY_TIME_BUCKETS];

    for star in stars {
        let Some(raw) = star.time_played() else {
            continue;
        };
        match PlayTime::parse(raw) {
            Ok(played) => {
                if let Some(slot) = counts.get_mut(played.hours as usize) {
                    *slot += 1;
                }
            }
            Err(e) => tracing::debug!(name = %star.name, error = %e, "skipping play time"),
        }
    }

    counts
        .iter()
        .enumerate()
        .map(|(hour, &count)| HourBucket {
            hour: hour as u32,
            label: format!("{}h", hour),
            count,
        })
        .collect()
}

/// Count completions per day, sorted by date ascending.
///
/// The day is the part of `creation_update` before any `T`. Stars with an
/// empty date are left out.
pub fn daily_completions<'a>(stars: impl IntoIterator<Item = &'a Star>) -> Vec<DailyCount> {
    let mut days: BTreeMap<&str, usize> = BTreeMap::new();

    for star in stars {
        if star.date.is_empty() {
            continue;
        }
        let day = star.date.split('T').next().unwrap_or_default();
        *days.entry(day).or_insert(0) += 1;
    }

    days.into_iter()
        .map(|(date, count)| DailyCount {
            date: date.to_string(),
            count,
        })
        .collect()
}

/// Run the stats command: print both aggregations.
pub fn run_stats(catalog: &Catalog, json: bool) -> Result<()> {
    let stats = catalog.stats();

    if json {
        println!("{}", serde_json::to_string_pretty(stats)?);
        return Ok(());
    }

    println!("Galaxy Browser — Statistics");
    println!("===========================");
    println!();
    println!("  Stars:        {}", catalog.index().len());
    println!("  With time:    {} (under {}h)", stats.histogram_total(), PLAY_TIME_BUCKETS);
    println!("  Completions:  {} over {} days", stats.completions_total(), stats.daily.len());

    println!();
    println!("  Completion time distribution:");
    let max = stats.play_time.iter().map(|b| b.count).max().unwrap_or(0);
    for bucket in &stats.play_time {
        println!(
            "  {:>4} {:>6} {}",
            bucket.label,
            bucket.count,
            bar(bucket.count, max)
        );
    }

    if !stats.daily.is_empty() {
        println!();
        println!("  Daily completions:");
        println!("  {:<12} {:>6}", "DATE", "COUNT");
        println!("  {}", "-".repeat(19));
        for day in &stats.daily {
            println!("  {:<12} {:>6}", day.date, day.count);
        }
    }

    println!();
    Ok(())
}

fn bar(count: usize, max: usize) -> String {
    if max == 0 || count == 0 {
        return String::new();
    }
    let width = (count * BAR_WIDTH).div_ceil(max);
    "█".repeat(width)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::DetailRecord;

    fn star(date: &str, time_played: Option<&str>) -> Star {
        Star {
            name: "s".to_string(),
            color: 0,
            date: date.to_string(),
            user: String::new(),
            details: Some(DetailRecord {
                time_played: time_played.map(str::to_string),
                ..Default::default()
            }),
        }
    }

    #[test]
    fn test_histogram_buckets_by_hour() {
        let stars = vec![
            star("", Some("00:45:00")),
            star("", Some("03:15:00")),
            star("", Some("03:59:59")),
            star("", Some("49:00:00")),
        ];
        let hist = play_time_histogram(&stars);
        assert_eq!(hist.len(), PLAY_TIME_BUCKETS);
        assert_eq!(hist[0].count, 1);
        assert_eq!(hist[3].count, 2);
        assert_eq!(hist[49].count, 1);
        assert_eq!(hist[49].label, "49h");
        assert_eq!(hist[0].label, "0h");
    }

    #[test]
    fn test_histogram_excludes_missing_long_and_invalid() {
        let mut stars = vec![
            star("", None),
            star("", Some("50:00:00")),
            star("", Some("120:00:00")),
            star("", Some("not a time")),
            star("", Some("10:00:00")),
        ];
        stars.push(Star {
            details: None,
            ..star("", None)
        });

        let hist = play_time_histogram(&stars);
        let total: usize = hist.iter().map(|b| b.count).sum();
        assert_eq!(total, 1);
        assert_eq!(hist[10].count, 1);
    }

    #[test]
    fn test_daily_completions_sorted_and_unique() {
        let stars = vec![
            star("2024-11-30T20:00:00Z", None),
            star("2024-11-16T09:00:00Z", None),
            star("2024-11-30T11:00:00Z", None),
            star("", None),
            star("2024-11-24", None),
        ];
        let daily = daily_completions(&stars);
        let dates: Vec<&str> = daily.iter().map(|d| d.date.as_str()).collect();
        assert_eq!(dates, vec!["2024-11-16", "2024-11-24", "2024-11-30"]);
        assert_eq!(daily[2].count, 2);
        for pair in daily.windows(2) {
            assert!(pair[0].date < pair[1].date);
        }
    }

    #[test]
    fn test_stats_totals() {
        let stars = vec![
            star("2024-11-30T20:00:00Z", Some("01:00:00")),
            star("2024-11-29T20:00:00Z", Some("70:00:00")),
            star("", Some("02:00:00")),
        ];
        let stats = Stats::compute(&stars);
        assert_eq!(stats.histogram_total(), 2);
        assert_eq!(stats.completions_total(), 2);
    }

    #[test]
    fn test_bar_scaling() {
        assert_eq!(bar(0, 10), "");
        assert_eq!(bar(5, 0), "");
        assert_eq!(bar(10, 10).chars().count(), BAR_WIDTH);
        assert_eq!(bar(1, 1000).chars().count(), 1);
    }
}

//! The loaded, indexed star collection for one session.
//!
//! A [`Catalog`] is built once per process: dataset → assembled stars →
//! statistics + search index. Every command and the HTTP server read from it
//! and nothing mutates it afterwards.

use anyhow::Result;
use chrono::{DateTime, Utc};
use url::Url;

use crate::config::Config;
use crate::dataset::{self, Dataset};
use crate::index::{build_index, SearchIndex};
use crate::records::assemble;
use crate::stats::Stats;
use crate::view::StarView;

#[derive(Debug, Clone)]
pub struct Catalog {
    index: SearchIndex,
    stats: Stats,
    gallery: Url,
    now: DateTime<Utc>,
}

impl Catalog {
    /// Load the configured dataset and index it relative to `now`.
    pub fn open(config: &Config, now: DateTime<Utc>) -> Result<Self> {
        let dataset = dataset::load_dataset(&config.dataset.path)?;
        Ok(Self::from_dataset(&dataset, config.gallery.url()?, now))
    }

    pub fn from_dataset(dataset: &Dataset, gallery: Url, now: DateTime<Utc>) -> Self {
        let stars = assemble(dataset);
        // Aggregations see the same stars as search: entries past the end
        // of `colors` are never counted.
        let stats = Stats::compute(&stars);
        let index = build_index(stars, now);

        tracing::info!(
            stars = index.len(),
            days = stats.daily.len(),
            "catalog ready"
        );

        Self {
            index,
            stats,
            gallery,
            now,
        }
    }

    pub fn index(&self) -> &SearchIndex {
        &self.index
    }

    pub fn stats(&self) -> &Stats {
        &self.stats
    }

    /// The reference time used for elapsed-time text.
    pub fn now(&self) -> DateTime<Utc> {
        self.now
    }

    /// Display view of the star at `position`, if any.
    pub fn view(&self, position: usize) -> Option<StarView> {
        self.index
            .star(position)
            .map(|star| StarView::new(position, star, &self.gallery, self.now))
    }

    /// Views of matching stars in dataset order, plus the total match count.
    ///
    /// `offset` and `limit` window the matches; the count is taken before
    /// windowing.
    pub fn search(
        &self,
        query: &str,
        hide_empty: bool,
        offset: usize,
        limit: Option<usize>,
    ) -> (usize, Vec<StarView>) {
        let positions = self.index.filter_positions(query, hide_empty);
        let matched = positions.len();
        let views = positions
            .into_iter()
            .skip(offset)
            .take(limit.unwrap_or(usize::MAX))
            .filter_map(|p| self.view(p))
            .collect();
        (matched, views)
    }
}

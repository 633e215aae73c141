//! Per-product popularity counts.
//!
//! Cumulative shop-click counts keyed by product name, persisted under
//! `trendingCounts`. Feeds the popularity sort, the top-3 leaderboard, and
//! the per-category aggregate handed to the bar chart.

use crate::catalog::{Category, CATALOG};
use crate::constants::LEADERBOARD_SIZE;
use crate::storage::{self, keys, StorageBackend};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TrendingCounts {
    counts: HashMap<String, u64>,
}

impl TrendingCounts {
    pub fn load(store: &dyn StorageBackend) -> Self {
        storage::load_or_default(store, keys::TRENDING_COUNTS)
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::TRENDING_COUNTS, self)
    }

    /// Record one click on a product.
    pub fn record_click(&mut self, name: &str) {
        *self.counts.entry(name.to_string()).or_insert(0) += 1;
    }

    pub fn count(&self, name: &str) -> u64 {
        self.counts.get(name).copied().unwrap_or(0)
    }

    /// Top clicked products, most-clicked first. Products with zero clicks
    /// never appear.
    pub fn leaderboard(&self) -> Vec<(&str, u64)> {
        let mut entries: Vec<(&str, u64)> = self
            .counts
            .iter()
            .filter(|(_, &count)| count > 0)
            .map(|(name, &count)| (name.as_str(), count))
            .collect();
        // Secondary name order keeps the board deterministic across loads
        entries.sort_by(|a, b| b.1.cmp(&a.1).then(a.0.cmp(b.0)));
        entries.truncate(LEADERBOARD_SIZE);
        entries
    }

    /// Click totals aggregated per category, in category display order.
    /// This is the label/value feed for the chart widget.
    pub fn category_totals(&self) -> Vec<(&'static str, u64)> {
        Category::ALL
            .iter()
            .map(|&category| {
                let total = CATALOG
                    .iter()
                    .filter(|p| p.category == category)
                    .map(|p| self.count(p.name))
                    .sum();
                (category.name(), total)
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_record_click_accumulates() {
        let mut trending = TrendingCounts::default();
        trending.record_click("Lens Cleaning Kit");
        trending.record_click("Lens Cleaning Kit");
        assert_eq!(trending.count("Lens Cleaning Kit"), 2);
        assert_eq!(trending.count("VR Gun Stock (AMVR)"), 0);
    }

    #[test]
    fn test_leaderboard_caps_at_three() {
        let mut trending = TrendingCounts::default();
        for (i, product) in CATALOG.iter().take(5).enumerate() {
            for _ in 0..=i {
                trending.record_click(product.name);
            }
        }

        let board = trending.leaderboard();
        assert_eq!(board.len(), LEADERBOARD_SIZE);
        assert_eq!(board[0].1, 5);
        assert!(board[0].1 >= board[1].1 && board[1].1 >= board[2].1);
    }

    #[test]
    fn test_leaderboard_excludes_unclicked() {
        let mut trending = TrendingCounts::default();
        trending.record_click("Shadow Shot VR Bow");
        let board = trending.leaderboard();
        assert_eq!(board, vec![("Shadow Shot VR Bow", 1)]);
    }

    #[test]
    fn test_category_totals_cover_all_categories() {
        let mut trending = TrendingCounts::default();
        trending.record_click("Logitech Chorus Off-Ear Audio");
        trending.record_click("KIWI Design On-Ear Audio Strap");
        trending.record_click("Lens Cleaning Kit");

        let totals = trending.category_totals();
        assert_eq!(totals.len(), Category::ALL.len());

        let audio = totals.iter().find(|(label, _)| *label == "Audio").unwrap();
        assert_eq!(audio.1, 2);
        let hygiene = totals
            .iter()
            .find(|(label, _)| *label == "Covers & Hygiene")
            .unwrap();
        assert_eq!(hygiene.1, 1);
    }

    #[test]
    fn test_counts_persist() {
        let mut store = MemoryStore::new();
        let mut trending = TrendingCounts::default();
        trending.record_click("VIVE Ultimate Tracker");
        trending.save(&mut store).unwrap();

        let loaded = TrendingCounts::load(&store);
        assert_eq!(loaded.count("VIVE Ultimate Tracker"), 1);
    }
}

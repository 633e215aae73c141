//! Interaction counters.
//!
//! Append-only named counters persisted under `userStats` as a flat
//! name -> count map. Counters only ever increment; achievement thresholds
//! are evaluated against them.

use crate::storage::{self, keys, StorageBackend};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;

/// Every tracked interaction metric, with its stable storage key.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Metric {
    ShopClicks,
    FavoritesAdded,
    ComparesAdded,
    QuizzesCompleted,
    MemoryGamesCompleted,
}

impl Metric {
    pub const ALL: [Metric; 5] = [
        Metric::ShopClicks,
        Metric::FavoritesAdded,
        Metric::ComparesAdded,
        Metric::QuizzesCompleted,
        Metric::MemoryGamesCompleted,
    ];

    /// Key under which this counter is stored inside the `userStats` map.
    pub fn key(&self) -> &'static str {
        match self {
            Metric::ShopClicks => "shopClicks",
            Metric::FavoritesAdded => "favoritesAdded",
            Metric::ComparesAdded => "comparesAdded",
            Metric::QuizzesCompleted => "quizzesCompleted",
            Metric::MemoryGamesCompleted => "memoryGamesCompleted",
        }
    }

    /// Display name for the stats panel.
    pub fn label(&self) -> &'static str {
        match self {
            Metric::ShopClicks => "Shop clicks",
            Metric::FavoritesAdded => "Favorites added",
            Metric::ComparesAdded => "Products compared",
            Metric::QuizzesCompleted => "Quizzes completed",
            Metric::MemoryGamesCompleted => "Memory games won",
        }
    }
}

/// Counter map, persisted across sessions.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StatTracker {
    counters: HashMap<String, u64>,
}

impl StatTracker {
    pub fn load(store: &dyn StorageBackend) -> Self {
        storage::load_or_default(store, keys::USER_STATS)
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::USER_STATS, self)
    }

    /// Increment a counter by one.
    pub fn record(&mut self, metric: Metric) {
        *self.counters.entry(metric.key().to_string()).or_insert(0) += 1;
    }

    pub fn get(&self, metric: Metric) -> u64 {
        self.counters.get(metric.key()).copied().unwrap_or(0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_record_k_times_yields_k() {
        let mut stats = StatTracker::default();
        for _ in 0..7 {
            stats.record(Metric::ShopClicks);
        }
        assert_eq!(stats.get(Metric::ShopClicks), 7);
        assert_eq!(stats.get(Metric::FavoritesAdded), 0);
    }

    #[test]
    fn test_counters_persist() {
        let mut store = MemoryStore::new();
        let mut stats = StatTracker::default();
        stats.record(Metric::QuizzesCompleted);
        stats.record(Metric::QuizzesCompleted);
        stats.save(&mut store).unwrap();

        let loaded = StatTracker::load(&store);
        assert_eq!(loaded.get(Metric::QuizzesCompleted), 2);
    }

    #[test]
    fn test_metric_keys_are_unique() {
        use std::collections::HashSet;
        let mut keys = HashSet::new();
        for metric in Metric::ALL {
            assert!(keys.insert(metric.key()), "Duplicate metric key: {:?}", metric);
        }
    }

    #[test]
    fn test_malformed_stats_blob_reads_as_empty() {
        let mut store = MemoryStore::new();
        store.write(keys::USER_STATS, "[1,2,3]").unwrap();

        let stats = StatTracker::load(&store);
        for metric in Metric::ALL {
            assert_eq!(stats.get(metric), 0);
        }
    }
}

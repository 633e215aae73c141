//! Achievement system types.

use crate::stats::{Metric, StatTracker};
use crate::storage::{self, keys, StorageBackend};
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::io;

/// Unique identifier for each achievement.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum AchievementId {
    // Browsing
    WindowShopper,  // 1 shop click
    CuriousBrowser, // 10 shop clicks
    TrendSetter,    // 50 shop clicks

    // Favorites
    Collector, // 5 favorites added
    SuperFan,  // 15 favorites added

    // Comparison
    SideBySide, // 3 products compared

    // Quiz
    KnowThyself,   // 1 quiz completed
    SecondOpinion, // 3 quizzes completed

    // Memory game
    SharpEyes,    // 1 memory game won
    MemoryMaster, // 5 memory games won
}

/// Static definition of an achievement: a threshold over one counter.
#[derive(Debug, Clone)]
pub struct AchievementDef {
    pub id: AchievementId,
    pub metric: Metric,
    pub threshold: u64,
    pub name: &'static str,
    pub description: &'static str,
    pub icon: &'static str,
}

/// The persisted unlock set. Stored as an id -> bool map to match the
/// original `achievementsUnlocked` blob; entries are only ever inserted as
/// `true`, never removed or flipped back.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Achievements {
    unlocked: HashMap<AchievementId, bool>,
}

impl Achievements {
    pub fn load(store: &dyn StorageBackend) -> Self {
        storage::load_or_default(store, keys::ACHIEVEMENTS_UNLOCKED)
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::ACHIEVEMENTS_UNLOCKED, self)
    }

    pub fn is_unlocked(&self, id: AchievementId) -> bool {
        self.unlocked.get(&id).copied().unwrap_or(false)
    }

    /// Mark an achievement unlocked. Returns true if newly unlocked.
    pub fn unlock(&mut self, id: AchievementId) -> bool {
        if self.is_unlocked(id) {
            return false;
        }
        self.unlocked.insert(id, true);
        true
    }

    pub fn unlocked_count(&self) -> usize {
        self.unlocked.values().filter(|&&v| v).count()
    }

    /// Scan all definitions against the counters and unlock every definition
    /// whose counter has reached its threshold. Returns the ids newly
    /// unlocked by this call, in definition order. The caller is responsible
    /// for persisting the set and granting the once-per-batch bonus when the
    /// returned list is non-empty.
    pub fn evaluate(&mut self, stats: &StatTracker) -> Vec<AchievementId> {
        let mut newly_unlocked = Vec::new();
        for def in super::data::ALL_ACHIEVEMENTS {
            if !self.is_unlocked(def.id) && stats.get(def.metric) >= def.threshold {
                self.unlock(def.id);
                newly_unlocked.push(def.id);
            }
        }
        newly_unlocked
    }
}

//! Favorites and comparison lists.
//!
//! Both are ordered sets of unique product names. Favorites are unbounded;
//! the comparison list holds at most three entries and evicts the oldest
//! (index 0) when a fourth is added.

use crate::constants::COMPARE_MAX;
use crate::storage::{self, keys, StorageBackend};
use serde::{Deserialize, Serialize};
use std::io;

/// Outcome of a favorites toggle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FavoriteToggle {
    Added,
    Removed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Favorites {
    names: Vec<String>,
}

impl Favorites {
    pub fn load(store: &dyn StorageBackend) -> Self {
        storage::load_or_default(store, keys::FAVORITES)
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::FAVORITES, self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Remove the product if present, otherwise append it.
    pub fn toggle(&mut self, name: &str) -> FavoriteToggle {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            FavoriteToggle::Removed
        } else {
            self.names.push(name.to_string());
            FavoriteToggle::Added
        }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

/// Outcome of a comparison toggle.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CompareToggle {
    /// Added; carries the name evicted to make room, if the list was full.
    Added { evicted: Option<String> },
    Removed,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(transparent)]
pub struct CompareList {
    names: Vec<String>,
}

impl CompareList {
    pub fn load(store: &dyn StorageBackend) -> Self {
        let mut list: Self = storage::load_or_default(store, keys::COMPARE_LIST);
        // An oversized persisted blob is clipped to capacity, oldest first
        while list.names.len() > COMPARE_MAX {
            list.names.remove(0);
        }
        list
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::COMPARE_LIST, self)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.iter().any(|n| n == name)
    }

    /// Remove the product if present; otherwise append it, evicting the
    /// oldest entry (FIFO, not LRU) when the list is already full.
    pub fn toggle(&mut self, name: &str) -> CompareToggle {
        if let Some(pos) = self.names.iter().position(|n| n == name) {
            self.names.remove(pos);
            return CompareToggle::Removed;
        }

        let evicted = if self.names.len() >= COMPARE_MAX {
            Some(self.names.remove(0))
        } else {
            None
        };
        self.names.push(name.to_string());
        CompareToggle::Added { evicted }
    }

    pub fn names(&self) -> &[String] {
        &self.names
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }
}

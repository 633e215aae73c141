//! Key-value persistence layer.
//!
//! Every persisted concern (points, stats, favorites, ...) lives under its own
//! string key as an independent JSON blob. A malformed or missing blob is
//! treated as absent and falls back to the type's default — parse failures are
//! never surfaced to the caller.

use directories::ProjectDirs;
use serde::de::DeserializeOwned;
use serde::Serialize;
use std::collections::HashMap;
use std::fs;
use std::io;
use std::path::PathBuf;

/// Persisted key names. These match the original storefront's storage schema.
pub mod keys {
    pub const THEME: &str = "theme";
    pub const FONT_SCALE: &str = "fontScale";
    pub const ACCENT_COLOR: &str = "accentColor";
    pub const USER_POINTS: &str = "userPoints";
    pub const USER_STATS: &str = "userStats";
    pub const ACHIEVEMENTS_UNLOCKED: &str = "achievementsUnlocked";
    pub const TRENDING_COUNTS: &str = "trendingCounts";
    pub const FAVORITES: &str = "favorites";
    pub const COMPARE_LIST: &str = "compareList";
}

/// Backend for string-keyed blob storage.
///
/// Reads are infallible from the caller's perspective: anything that cannot
/// be read simply reports `None`. Writes surface IO errors so the caller can
/// decide whether to ignore them.
pub trait StorageBackend {
    fn read(&self, key: &str) -> Option<String>;
    fn write(&mut self, key: &str, value: &str) -> io::Result<()>;
}

/// Disk-backed store: one `<key>.json` file per key under the platform
/// config directory.
pub struct DiskStore {
    root: PathBuf,
}

impl DiskStore {
    /// Create a store rooted at the platform config directory for the app.
    pub fn new() -> io::Result<Self> {
        let project_dirs = ProjectDirs::from("", "", "vrshop").ok_or_else(|| {
            io::Error::new(io::ErrorKind::NotFound, "Could not determine config directory")
        })?;

        let root = project_dirs.config_dir().to_path_buf();
        fs::create_dir_all(&root)?;

        Ok(Self { root })
    }

    /// Create a store rooted at an explicit directory.
    pub fn at(root: PathBuf) -> io::Result<Self> {
        fs::create_dir_all(&root)?;
        Ok(Self { root })
    }

    fn path_for(&self, key: &str) -> PathBuf {
        self.root.join(format!("{}.json", key))
    }
}

impl StorageBackend for DiskStore {
    fn read(&self, key: &str) -> Option<String> {
        fs::read_to_string(self.path_for(key)).ok()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        fs::write(self.path_for(key), value)
    }
}

/// In-memory store for tests and headless embedding.
#[derive(Debug, Default, Clone)]
pub struct MemoryStore {
    blobs: HashMap<String, String>,
}

impl MemoryStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl StorageBackend for MemoryStore {
    fn read(&self, key: &str) -> Option<String> {
        self.blobs.get(key).cloned()
    }

    fn write(&mut self, key: &str, value: &str) -> io::Result<()> {
        self.blobs.insert(key.to_string(), value.to_string());
        Ok(())
    }
}

/// Load a value from the store, falling back to default on any failure
/// (missing key, malformed JSON, wrong shape).
pub fn load_or_default<T>(store: &dyn StorageBackend, key: &str) -> T
where
    T: DeserializeOwned + Default,
{
    match store.read(key) {
        Some(blob) => serde_json::from_str(&blob).unwrap_or_default(),
        None => T::default(),
    }
}

/// Serialize a value and write it under the given key. Serialization of the
/// crate's own types cannot fail; IO errors propagate.
pub fn persist<T>(store: &mut dyn StorageBackend, key: &str, value: &T) -> io::Result<()>
where
    T: Serialize,
{
    let blob = serde_json::to_string(value)
        .map_err(|e| io::Error::new(io::ErrorKind::InvalidData, e))?;
    store.write(key, &blob)
}

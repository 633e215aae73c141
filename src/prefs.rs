//! Persisted display preferences.
//!
//! Theme, list density, and accent color each live under their own storage
//! key (`theme`, `fontScale`, `accentColor`) and load/save independently, so
//! a corrupt blob for one never resets the others.

use crate::storage::{self, keys, StorageBackend};
use ratatui::style::Color;
use serde::{Deserialize, Serialize};
use std::io;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum Theme {
    #[default]
    Dark,
    Light,
}

impl Theme {
    pub fn name(&self) -> &'static str {
        match self {
            Theme::Dark => "Dark",
            Theme::Light => "Light",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            Theme::Dark => Theme::Light,
            Theme::Light => Theme::Dark,
        }
    }

    /// Primary text color against the theme background.
    pub fn text(&self) -> Color {
        match self {
            Theme::Dark => Color::White,
            Theme::Light => Color::Black,
        }
    }

    /// Full-frame background fill.
    pub fn background(&self) -> Color {
        match self {
            Theme::Dark => Color::Reset,
            Theme::Light => Color::White,
        }
    }
}

/// Terminal analog of the original page's font-scale setting: how densely
/// the catalog list is drawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum ListDensity {
    Compact,
    #[default]
    Normal,
    Roomy,
}

impl ListDensity {
    pub const ALL: [ListDensity; 3] =
        [ListDensity::Compact, ListDensity::Normal, ListDensity::Roomy];

    pub fn name(&self) -> &'static str {
        match self {
            ListDensity::Compact => "Compact",
            ListDensity::Normal => "Normal",
            ListDensity::Roomy => "Roomy",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            ListDensity::Compact => ListDensity::Normal,
            ListDensity::Normal => ListDensity::Roomy,
            ListDensity::Roomy => ListDensity::Compact,
        }
    }

    /// Rows each catalog entry occupies.
    pub fn rows_per_entry(&self) -> u16 {
        match self {
            ListDensity::Compact => 1,
            ListDensity::Normal => 2,
            ListDensity::Roomy => 3,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum AccentColor {
    #[default]
    Cyan,
    Magenta,
    Green,
    Yellow,
}

impl AccentColor {
    pub fn name(&self) -> &'static str {
        match self {
            AccentColor::Cyan => "Cyan",
            AccentColor::Magenta => "Magenta",
            AccentColor::Green => "Green",
            AccentColor::Yellow => "Yellow",
        }
    }

    pub fn next(&self) -> Self {
        match self {
            AccentColor::Cyan => AccentColor::Magenta,
            AccentColor::Magenta => AccentColor::Green,
            AccentColor::Green => AccentColor::Yellow,
            AccentColor::Yellow => AccentColor::Cyan,
        }
    }

    pub fn color(&self) -> Color {
        match self {
            AccentColor::Cyan => Color::Cyan,
            AccentColor::Magenta => Color::Magenta,
            AccentColor::Green => Color::Green,
            AccentColor::Yellow => Color::Yellow,
        }
    }
}

/// The loaded preference set.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Preferences {
    pub theme: Theme,
    pub density: ListDensity,
    pub accent: AccentColor,
}

impl Preferences {
    pub fn load(store: &dyn StorageBackend) -> Self {
        Self {
            theme: storage::load_or_default(store, keys::THEME),
            density: storage::load_or_default(store, keys::FONT_SCALE),
            accent: storage::load_or_default(store, keys::ACCENT_COLOR),
        }
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::THEME, &self.theme)?;
        storage::persist(store, keys::FONT_SCALE, &self.density)?;
        storage::persist(store, keys::ACCENT_COLOR, &self.accent)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::storage::MemoryStore;

    #[test]
    fn test_defaults_when_store_empty() {
        let store = MemoryStore::new();
        let prefs = Preferences::load(&store);
        assert_eq!(prefs.theme, Theme::Dark);
        assert_eq!(prefs.density, ListDensity::Normal);
        assert_eq!(prefs.accent, AccentColor::Cyan);
    }

    #[test]
    fn test_save_and_load_round_trip() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            theme: Theme::Light,
            density: ListDensity::Roomy,
            accent: AccentColor::Green,
        };
        prefs.save(&mut store).unwrap();

        assert_eq!(Preferences::load(&store), prefs);
    }

    #[test]
    fn test_corrupt_key_only_resets_itself() {
        let mut store = MemoryStore::new();
        let prefs = Preferences {
            theme: Theme::Light,
            density: ListDensity::Compact,
            accent: AccentColor::Yellow,
        };
        prefs.save(&mut store).unwrap();

        // Corrupt just the theme blob
        store.write(keys::THEME, "???").unwrap();

        let loaded = Preferences::load(&store);
        assert_eq!(loaded.theme, Theme::Dark, "Corrupt theme falls back");
        assert_eq!(loaded.density, ListDensity::Compact);
        assert_eq!(loaded.accent, AccentColor::Yellow);
    }

    #[test]
    fn test_cycles_cover_all_variants() {
        let mut density = ListDensity::Compact;
        for _ in 0..ListDensity::ALL.len() {
            density = density.next();
        }
        assert_eq!(density, ListDensity::Compact);

        assert_eq!(Theme::Dark.next().next(), Theme::Dark);
        assert_eq!(
            AccentColor::Cyan.next().next().next().next(),
            AccentColor::Cyan
        );
    }
}

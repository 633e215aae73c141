//! Static achievement definitions.

use super::types::{AchievementDef, AchievementId};
use crate::stats::Metric;

/// All achievement definitions in display order.
pub const ALL_ACHIEVEMENTS: &[AchievementDef] = &[
    // ═══════════════════════════════════════════════════════════════
    // BROWSING
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::WindowShopper,
        metric: Metric::ShopClicks,
        threshold: 1,
        name: "Window Shopper",
        description: "Check out your first product",
        icon: "🛒",
    },
    AchievementDef {
        id: AchievementId::CuriousBrowser,
        metric: Metric::ShopClicks,
        threshold: 10,
        name: "Curious Browser",
        description: "Check out 10 products",
        icon: "🔍",
    },
    AchievementDef {
        id: AchievementId::TrendSetter,
        metric: Metric::ShopClicks,
        threshold: 50,
        name: "Trend Setter",
        description: "Check out 50 products",
        icon: "📈",
    },
    // ═══════════════════════════════════════════════════════════════
    // FAVORITES & COMPARISON
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::Collector,
        metric: Metric::FavoritesAdded,
        threshold: 5,
        name: "Collector",
        description: "Favorite 5 products",
        icon: "❤️",
    },
    AchievementDef {
        id: AchievementId::SuperFan,
        metric: Metric::FavoritesAdded,
        threshold: 15,
        name: "Super Fan",
        description: "Favorite 15 products",
        icon: "💖",
    },
    AchievementDef {
        id: AchievementId::SideBySide,
        metric: Metric::ComparesAdded,
        threshold: 3,
        name: "Side by Side",
        description: "Add 3 products to the comparison",
        icon: "⚖️",
    },
    // ═══════════════════════════════════════════════════════════════
    // QUIZ
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::KnowThyself,
        metric: Metric::QuizzesCompleted,
        threshold: 1,
        name: "Know Thyself",
        description: "Complete the gear finder quiz",
        icon: "🎯",
    },
    AchievementDef {
        id: AchievementId::SecondOpinion,
        metric: Metric::QuizzesCompleted,
        threshold: 3,
        name: "Second Opinion",
        description: "Complete the quiz 3 times",
        icon: "🔁",
    },
    // ═══════════════════════════════════════════════════════════════
    // MEMORY GAME
    // ═══════════════════════════════════════════════════════════════
    AchievementDef {
        id: AchievementId::SharpEyes,
        metric: Metric::MemoryGamesCompleted,
        threshold: 1,
        name: "Sharp Eyes",
        description: "Win a memory match game",
        icon: "🧠",
    },
    AchievementDef {
        id: AchievementId::MemoryMaster,
        metric: Metric::MemoryGamesCompleted,
        threshold: 5,
        name: "Memory Master",
        description: "Win 5 memory match games",
        icon: "🏅",
    },
];

/// Get the definition for a specific achievement.
pub fn achievement_def(id: AchievementId) -> Option<&'static AchievementDef> {
    ALL_ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_all_achievements_have_unique_ids() {
        use std::collections::HashSet;
        let mut ids = HashSet::new();
        for achievement in ALL_ACHIEVEMENTS {
            assert!(
                ids.insert(achievement.id),
                "Duplicate achievement ID: {:?}",
                achievement.id
            );
        }
    }

    #[test]
    fn test_achievement_def_lookup() {
        let def = achievement_def(AchievementId::WindowShopper).unwrap();
        assert_eq!(def.name, "Window Shopper");
        assert_eq!(def.threshold, 1);
    }

    #[test]
    fn test_thresholds_increase_within_metric() {
        for metric in Metric::ALL {
            let mut last = 0;
            for def in ALL_ACHIEVEMENTS.iter().filter(|d| d.metric == metric) {
                assert!(
                    def.threshold > last,
                    "Thresholds for {:?} should strictly increase",
                    metric
                );
                last = def.threshold;
            }
        }
    }
}

//! Achievement system module.
//!
//! Static threshold definitions over the interaction counters, plus the
//! monotone unlock set persisted under `achievementsUnlocked`.

pub mod data;
pub mod types;

pub use data::{achievement_def, ALL_ACHIEVEMENTS};
pub use types::{AchievementId, Achievements};

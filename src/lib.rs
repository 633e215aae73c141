//! vrshop - Terminal VR Accessory Storefront
//!
//! This module exposes the kiosk logic for testing and external use.

// Allow dead code in library - some functions are only used by the binary
#![allow(dead_code)]

pub mod achievements;
pub mod app;
pub mod catalog;
pub mod constants;
pub mod lists;
pub mod memory;
pub mod points;
pub mod prefs;
pub mod quiz;
pub mod stats;
pub mod storage;
pub mod trending;

// UI module is not exposed as it's tightly coupled to the terminal
mod ui;

pub use achievements::{AchievementId, Achievements};
pub use app::{Kiosk, KioskEvent};
pub use stats::Metric;

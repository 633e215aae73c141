//! Points ledger and tier badge.
//!
//! A single monotone score persisted under `userPoints`. Rewarded actions
//! (favoriting, memory matches, quiz completion, achievement batches) add to
//! it; nothing subtracts. The displayed tier badge is derived from fixed
//! thresholds.

use crate::constants::{TIER_ENTRY_POINTS, TIER_MID_POINTS, TIER_TOP_POINTS};
use crate::storage::{self, keys, StorageBackend};
use std::io;

/// Display tier derived from the current score.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TierBadge {
    /// >= 20 points
    Browser,
    /// >= 50 points
    Enthusiast,
    /// >= 100 points
    VrLegend,
}

impl TierBadge {
    pub fn name(&self) -> &'static str {
        match self {
            TierBadge::Browser => "Browser",
            TierBadge::Enthusiast => "Enthusiast",
            TierBadge::VrLegend => "VR Legend",
        }
    }

    pub fn icon(&self) -> &'static str {
        match self {
            TierBadge::Browser => "🥉",
            TierBadge::Enthusiast => "🥈",
            TierBadge::VrLegend => "🏆",
        }
    }
}

/// The persisted score.
#[derive(Debug, Clone, Copy, Default)]
pub struct PointsLedger {
    total: u64,
}

impl PointsLedger {
    pub fn load(store: &dyn StorageBackend) -> Self {
        Self {
            total: storage::load_or_default(store, keys::USER_POINTS),
        }
    }

    pub fn save(&self, store: &mut dyn StorageBackend) -> io::Result<()> {
        storage::persist(store, keys::USER_POINTS, &self.total)
    }

    /// Add points. Returns the new total.
    pub fn add(&mut self, n: u64) -> u64 {
        self.total += n;
        self.total
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    /// Current tier badge, if any threshold has been reached.
    pub fn tier(&self) -> Option<TierBadge> {
        if self.total >= TIER_TOP_POINTS {
            Some(TierBadge::VrLegend)
        } else if self.total >= TIER_MID_POINTS {
            Some(TierBadge::Enthusiast)
        } else if self.total >= TIER_ENTRY_POINTS {
            Some(TierBadge::Browser)
        } else {
            None
        }
    }
}

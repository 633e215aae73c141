//! Kiosk application state.
//!
//! One explicit state object owns every component plus the injected storage
//! backend; the UI layer renders from it and feeds input into it. Every
//! mutation is written through to storage immediately. Write failures are
//! swallowed — the kiosk degrades to session-only state rather than failing.
//!
//! Reward and celebration notifications are queued as [`KioskEvent`]s and
//! drained by the render loop.

use crate::achievements::{AchievementId, Achievements};
use crate::catalog::{CatalogView, SortMode};
use crate::constants::{
    ACHIEVEMENT_BONUS_POINTS, FAVORITE_POINTS, MATCH_POINTS, QUIZ_POINTS,
};
use crate::lists::{CompareList, CompareToggle, FavoriteToggle, Favorites};
use crate::memory::{FlipOutcome, MemoryGame};
use crate::points::PointsLedger;
use crate::prefs::Preferences;
use crate::quiz::{Quiz, QuizAdvance};
use crate::stats::{Metric, StatTracker};
use crate::storage::StorageBackend;
use crate::trending::TrendingCounts;
use chrono::{DateTime, Local};
use rand::Rng;
use std::time::Instant;

/// Notification produced by a state mutation, drained by the UI.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum KioskEvent {
    PointsAwarded { amount: u64, reason: &'static str },
    AchievementsUnlocked(Vec<AchievementId>),
    CompareEvicted(String),
}

pub struct Kiosk {
    store: Box<dyn StorageBackend>,
    pub prefs: Preferences,
    pub stats: StatTracker,
    pub points: PointsLedger,
    pub achievements: Achievements,
    pub trending: TrendingCounts,
    pub favorites: Favorites,
    pub compare: CompareList,
    pub view: CatalogView,
    pub quiz: Quiz,
    pub memory: Option<MemoryGame>,
    pub last_saved: Option<DateTime<Local>>,
    events: Vec<KioskEvent>,
}

impl Kiosk {
    /// Load all persisted state from the given backend.
    pub fn new(store: Box<dyn StorageBackend>) -> Self {
        let prefs = Preferences::load(store.as_ref());
        let stats = StatTracker::load(store.as_ref());
        let points = PointsLedger::load(store.as_ref());
        let achievements = Achievements::load(store.as_ref());
        let trending = TrendingCounts::load(store.as_ref());
        let favorites = Favorites::load(store.as_ref());
        let compare = CompareList::load(store.as_ref());

        Self {
            store,
            prefs,
            stats,
            points,
            achievements,
            trending,
            favorites,
            compare,
            view: CatalogView::new(),
            quiz: Quiz::new(),
            memory: None,
            last_saved: None,
            events: Vec::new(),
        }
    }

    /// Take all queued notifications.
    pub fn drain_events(&mut self) -> Vec<KioskEvent> {
        std::mem::take(&mut self.events)
    }

    fn touch(&mut self) {
        self.last_saved = Some(Local::now());
    }

    // ── Preferences ────────────────────────────────────────────────

    pub fn cycle_theme(&mut self) {
        self.prefs.theme = self.prefs.theme.next();
        self.save_prefs();
    }

    pub fn cycle_density(&mut self) {
        self.prefs.density = self.prefs.density.next();
        self.save_prefs();
    }

    pub fn cycle_accent(&mut self) {
        self.prefs.accent = self.prefs.accent.next();
        self.save_prefs();
    }

    fn save_prefs(&mut self) {
        if self.prefs.save(&mut *self.store).is_ok() {
            self.touch();
        }
    }

    // ── Points & achievements ──────────────────────────────────────

    fn add_points(&mut self, amount: u64, reason: &'static str) {
        self.points.add(amount);
        if self.points.save(&mut *self.store).is_ok() {
            self.touch();
        }
        self.events.push(KioskEvent::PointsAwarded { amount, reason });
    }

    /// Check all achievement thresholds. A non-empty unlock batch persists
    /// the set, queues a celebration, and grants the fixed bonus once for
    /// the whole batch, however many definitions unlocked together.
    fn evaluate_achievements(&mut self) {
        let newly = self.achievements.evaluate(&self.stats);
        if newly.is_empty() {
            return;
        }
        if self.achievements.save(&mut *self.store).is_ok() {
            self.touch();
        }
        self.events.push(KioskEvent::AchievementsUnlocked(newly));
        self.add_points(ACHIEVEMENT_BONUS_POINTS, "Achievement unlocked");
    }

    fn record_stat(&mut self, metric: Metric) {
        self.stats.record(metric);
        if self.stats.save(&mut *self.store).is_ok() {
            self.touch();
        }
    }

    // ── Catalog ────────────────────────────────────────────────────

    /// "Shop" click on a product: bumps its trending count and the click
    /// counter, then re-checks achievements.
    pub fn record_shop_click(&mut self, name: &str) {
        self.trending.record_click(name);
        if self.trending.save(&mut *self.store).is_ok() {
            self.touch();
        }
        self.record_stat(Metric::ShopClicks);
        self.evaluate_achievements();
    }

    pub fn set_sort(&mut self, mode: SortMode) {
        self.view.set_sort(mode, &self.trending);
    }

    pub fn cycle_sort(&mut self) {
        self.view.cycle_sort(&self.trending);
    }

    /// Re-apply the current sort so fresh trending counts take effect.
    pub fn refresh_sort(&mut self) {
        self.view.set_sort(self.view.sort, &self.trending);
    }

    // ── Favorites & comparison ─────────────────────────────────────

    pub fn toggle_favorite(&mut self, name: &str) {
        let outcome = self.favorites.toggle(name);
        if self.favorites.save(&mut *self.store).is_ok() {
            self.touch();
        }
        if outcome == FavoriteToggle::Added {
            self.record_stat(Metric::FavoritesAdded);
            self.add_points(FAVORITE_POINTS, "Favorite added");
            self.evaluate_achievements();
        }
    }

    pub fn toggle_compare(&mut self, name: &str) {
        let outcome = self.compare.toggle(name);
        if self.compare.save(&mut *self.store).is_ok() {
            self.touch();
        }
        if let CompareToggle::Added { evicted } = outcome {
            if let Some(old) = evicted {
                self.events.push(KioskEvent::CompareEvicted(old));
            }
            self.record_stat(Metric::ComparesAdded);
            self.evaluate_achievements();
        }
    }

    // ── Quiz ───────────────────────────────────────────────────────

    /// Answer the current quiz question. Completion pays out and counts
    /// exactly once per completed run; restarts of an unfinished quiz never
    /// reach this branch.
    pub fn quiz_answer(&mut self, choice: usize) {
        if self.quiz.answer(choice) == QuizAdvance::Completed {
            self.record_stat(Metric::QuizzesCompleted);
            self.add_points(QUIZ_POINTS, "Quiz completed");
            self.evaluate_achievements();
        }
    }

    pub fn quiz_restart(&mut self) {
        self.quiz.restart();
    }

    // ── Memory game ────────────────────────────────────────────────

    /// Start a fresh game, or reshuffle the existing one.
    pub fn memory_start<R: Rng>(&mut self, rng: &mut R) {
        match &mut self.memory {
            Some(game) => game.restart(rng),
            None => self.memory = Some(MemoryGame::new(rng)),
        }
    }

    /// Flip the card under the board cursor.
    pub fn memory_flip(&mut self, now: Instant) {
        let Some(game) = &mut self.memory else {
            return;
        };
        let index = game.board.cursor_index();
        match game.flip(index, now) {
            FlipOutcome::Matched { completed } => {
                self.add_points(MATCH_POINTS, "Pair matched");
                if completed {
                    self.record_stat(Metric::MemoryGamesCompleted);
                    self.evaluate_achievements();
                }
            }
            FlipOutcome::Revealed | FlipOutcome::Mismatched | FlipOutcome::Ignored => {}
        }
    }

    /// Resolve any due mismatch flip-back. Returns true if the board changed.
    pub fn memory_tick(&mut self, now: Instant) -> bool {
        match &mut self.memory {
            Some(game) => game.tick(now),
            None => false,
        }
    }
}

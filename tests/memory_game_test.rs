//! Integration test: memory game wiring through the kiosk state object.

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use std::time::{Duration, Instant};
use vrshop::app::Kiosk;
use vrshop::constants::{MATCH_POINTS, MEMORY_PAIRS, MISMATCH_FLIP_DELAY_MS};
use vrshop::memory::{GRID_SIDE, SYMBOLS};
use vrshop::storage::MemoryStore;
use vrshop::AchievementId;
use vrshop::Metric;

fn kiosk_with_game(seed: u64) -> Kiosk {
    let mut kiosk = Kiosk::new(Box::new(MemoryStore::new()));
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    kiosk.memory_start(&mut rng);
    kiosk
}

/// Point the board cursor at a flat card index and flip it.
fn flip_at(kiosk: &mut Kiosk, index: usize, now: Instant) {
    let game = kiosk.memory.as_mut().unwrap();
    game.board.cursor = (index / GRID_SIDE, index % GRID_SIDE);
    kiosk.memory_flip(now);
}

fn pair_indices(kiosk: &Kiosk, symbol: char) -> (usize, usize) {
    let positions: Vec<usize> = kiosk
        .memory
        .as_ref()
        .unwrap()
        .board
        .cards
        .iter()
        .enumerate()
        .filter(|(_, c)| c.symbol == symbol)
        .map(|(i, _)| i)
        .collect();
    assert_eq!(positions.len(), 2, "Each symbol appears exactly twice");
    (positions[0], positions[1])
}

#[test]
fn test_match_pays_points_through_the_kiosk() {
    let mut kiosk = kiosk_with_game(42);
    let now = Instant::now();
    let (a, b) = pair_indices(&kiosk, SYMBOLS[0]);

    flip_at(&mut kiosk, a, now);
    flip_at(&mut kiosk, b, now);

    assert_eq!(kiosk.points.total(), MATCH_POINTS);
    assert_eq!(kiosk.memory.as_ref().unwrap().board.matched_pairs, 1);
}

#[test]
fn test_completed_game_counts_once_and_unlocks_sharp_eyes() {
    let mut kiosk = kiosk_with_game(7);
    let now = Instant::now();

    for &symbol in SYMBOLS.iter() {
        let (a, b) = pair_indices(&kiosk, symbol);
        flip_at(&mut kiosk, a, now);
        flip_at(&mut kiosk, b, now);
    }

    assert!(kiosk.memory.as_ref().unwrap().board.is_complete());
    assert_eq!(kiosk.stats.get(Metric::MemoryGamesCompleted), 1);
    assert!(kiosk.achievements.is_unlocked(AchievementId::SharpEyes));

    // A finished board ignores further flips and never counts again
    flip_at(&mut kiosk, 0, now);
    assert_eq!(kiosk.stats.get(Metric::MemoryGamesCompleted), 1);
}

#[test]
fn test_mismatch_flip_back_resolves_via_kiosk_tick() {
    let mut kiosk = kiosk_with_game(42);
    let now = Instant::now();
    let (a, _) = pair_indices(&kiosk, SYMBOLS[0]);
    let (b, _) = pair_indices(&kiosk, SYMBOLS[1]);

    flip_at(&mut kiosk, a, now);
    flip_at(&mut kiosk, b, now);
    assert!(kiosk.memory.as_ref().unwrap().is_locked());
    assert_eq!(kiosk.points.total(), 0, "A mismatch never pays");

    assert!(!kiosk.memory_tick(now));
    let due = now + Duration::from_millis(MISMATCH_FLIP_DELAY_MS);
    assert!(kiosk.memory_tick(due));

    let board = &kiosk.memory.as_ref().unwrap().board;
    assert!(!board.cards[a].face_up && !board.cards[b].face_up);
}

#[test]
fn test_restart_during_delay_leaves_new_board_untouched() {
    let mut kiosk = kiosk_with_game(42);
    let now = Instant::now();
    let (a, _) = pair_indices(&kiosk, SYMBOLS[0]);
    let (b, _) = pair_indices(&kiosk, SYMBOLS[1]);
    flip_at(&mut kiosk, a, now);
    flip_at(&mut kiosk, b, now);

    let mut rng = ChaCha8Rng::seed_from_u64(99);
    kiosk.memory_start(&mut rng);
    flip_at(&mut kiosk, 3, now);

    let due = now + Duration::from_millis(MISMATCH_FLIP_DELAY_MS);
    assert!(
        !kiosk.memory_tick(due),
        "A deadline from the previous game is discarded"
    );
    let board = &kiosk.memory.as_ref().unwrap().board;
    assert!(board.cards[3].face_up);
    assert_eq!(
        board.cards.iter().filter(|c| c.face_up).count(),
        1,
        "Only the freshly revealed card is face up"
    );
}

#[test]
fn test_five_completed_games_unlock_memory_master() {
    let now = Instant::now();
    let mut kiosk = kiosk_with_game(1);

    for round in 0..5u64 {
        if round > 0 {
            let mut rng = ChaCha8Rng::seed_from_u64(round);
            kiosk.memory_start(&mut rng);
        }
        for &symbol in SYMBOLS.iter() {
            let (a, b) = pair_indices(&kiosk, symbol);
            flip_at(&mut kiosk, a, now);
            flip_at(&mut kiosk, b, now);
        }
        assert!(kiosk.memory.as_ref().unwrap().board.is_complete());
    }

    assert_eq!(kiosk.stats.get(Metric::MemoryGamesCompleted), 5);
    assert!(kiosk.achievements.is_unlocked(AchievementId::MemoryMaster));
    // 8 pairs per game, 5 games, plus the two unlock bonuses
    assert!(kiosk.points.total() >= 5 * MEMORY_PAIRS as u64 * MATCH_POINTS);
}

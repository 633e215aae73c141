//! Memory match mini-game.
//!
//! 16 cards (8 symbols, each twice) shuffled per game. At most one card is
//! pending a match at a time; a mismatch shows both cards for a fixed delay
//! during which the board is locked, then flips them back down.
//!
//! The flip-back is a scheduled task carrying the session id of the board it
//! was created for. Restarting mid-delay leaves the task queued, but `tick`
//! discards it when the session no longer matches, so a stale deadline can
//! never flip cards on a new board.

use crate::constants::{MEMORY_PAIRS, MISMATCH_FLIP_DELAY_MS};
use rand::seq::SliceRandom;
use rand::Rng;
use std::time::{Duration, Instant};

/// The 8 card symbols. Each appears exactly twice on a board.
pub const SYMBOLS: [char; MEMORY_PAIRS] = ['🎮', '🎧', '🔋', '🕶', '🎯', '🧤', '🪑', '📦'];

/// Board dimensions (4x4).
pub const GRID_SIDE: usize = 4;

/// A single card on the board.
#[derive(Debug, Clone, Copy)]
pub struct MemoryCard {
    pub symbol: char,
    pub face_up: bool,
    pub matched: bool,
}

/// Outcome of a flip attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FlipOutcome {
    /// Locked board, already face-up card, or finished game.
    Ignored,
    /// First card of a pair turned face up.
    Revealed,
    /// Second card matched the pending one.
    Matched { completed: bool },
    /// Second card did not match; a flip-back is now scheduled.
    Mismatched,
}

/// Scheduled flip-back for a mismatched pair.
#[derive(Debug, Clone, Copy)]
struct FlipBack {
    first: usize,
    second: usize,
    due: Instant,
    session: u32,
}

/// One shuffled board.
#[derive(Debug, Clone)]
pub struct MemoryBoard {
    pub cards: Vec<MemoryCard>,
    pub cursor: (usize, usize),
    pub matched_pairs: usize,
    pub moves: u32,
    session: u32,
    pending: Option<usize>,
}

impl MemoryBoard {
    fn new<R: Rng>(rng: &mut R, session: u32) -> Self {
        let mut symbols: Vec<char> = SYMBOLS.iter().chain(SYMBOLS.iter()).copied().collect();
        symbols.shuffle(rng);

        let cards = symbols
            .into_iter()
            .map(|symbol| MemoryCard {
                symbol,
                face_up: false,
                matched: false,
            })
            .collect();

        Self {
            cards,
            cursor: (0, 0),
            matched_pairs: 0,
            moves: 0,
            session,
            pending: None,
        }
    }

    pub fn is_complete(&self) -> bool {
        self.matched_pairs == MEMORY_PAIRS
    }

    /// Move the cursor, clamping to the 4x4 grid.
    pub fn move_cursor(&mut self, d_row: i32, d_col: i32) {
        let max = GRID_SIDE as i32 - 1;
        let row = (self.cursor.0 as i32 + d_row).clamp(0, max) as usize;
        let col = (self.cursor.1 as i32 + d_col).clamp(0, max) as usize;
        self.cursor = (row, col);
    }

    pub fn cursor_index(&self) -> usize {
        self.cursor.0 * GRID_SIDE + self.cursor.1
    }
}

/// The game session: the current board plus the (possibly stale) scheduled
/// flip-back task.
#[derive(Debug, Clone)]
pub struct MemoryGame {
    pub board: MemoryBoard,
    flip_back: Option<FlipBack>,
}

impl MemoryGame {
    pub fn new<R: Rng>(rng: &mut R) -> Self {
        Self {
            board: MemoryBoard::new(rng, 0),
            flip_back: None,
        }
    }

    /// Reshuffle into a fresh board. Any scheduled flip-back stays queued but
    /// belongs to the old session and will be discarded by `tick`.
    pub fn restart<R: Rng>(&mut self, rng: &mut R) {
        let session = self.board.session.wrapping_add(1);
        self.board = MemoryBoard::new(rng, session);
    }

    /// Whether the board is locked waiting on a mismatch flip-back.
    pub fn is_locked(&self) -> bool {
        matches!(self.flip_back, Some(fb) if fb.session == self.board.session)
    }

    /// Flip the card at `index`. `now` anchors the mismatch deadline.
    pub fn flip(&mut self, index: usize, now: Instant) -> FlipOutcome {
        if self.is_locked() || self.board.is_complete() || index >= self.board.cards.len() {
            return FlipOutcome::Ignored;
        }
        if self.board.cards[index].face_up {
            return FlipOutcome::Ignored;
        }

        self.board.cards[index].face_up = true;

        let Some(first) = self.board.pending else {
            self.board.pending = Some(index);
            return FlipOutcome::Revealed;
        };

        self.board.pending = None;
        self.board.moves += 1;

        if self.board.cards[first].symbol == self.board.cards[index].symbol {
            self.board.cards[first].matched = true;
            self.board.cards[index].matched = true;
            self.board.matched_pairs += 1;
            FlipOutcome::Matched {
                completed: self.board.is_complete(),
            }
        } else {
            self.flip_back = Some(FlipBack {
                first,
                second: index,
                due: now + Duration::from_millis(MISMATCH_FLIP_DELAY_MS),
                session: self.board.session,
            });
            FlipOutcome::Mismatched
        }
    }

    /// Resolve a due flip-back. Returns true if the board changed. A deadline
    /// from an older session is dropped without touching the current board.
    pub fn tick(&mut self, now: Instant) -> bool {
        let Some(fb) = self.flip_back else {
            return false;
        };
        if now < fb.due {
            return false;
        }
        self.flip_back = None;
        if fb.session != self.board.session {
            return false;
        }
        self.board.cards[fb.first].face_up = false;
        self.board.cards[fb.second].face_up = false;
        true
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn game_from_seed(seed: u64) -> MemoryGame {
        let mut rng = StdRng::seed_from_u64(seed);
        MemoryGame::new(&mut rng)
    }

    /// Indices of both cards carrying `symbol`.
    fn pair_indices(game: &MemoryGame, symbol: char) -> (usize, usize) {
        let positions: Vec<usize> = game
            .board
            .cards
            .iter()
            .enumerate()
            .filter(|(_, c)| c.symbol == symbol)
            .map(|(i, _)| i)
            .collect();
        assert_eq!(positions.len(), 2);
        (positions[0], positions[1])
    }

    #[test]
    fn test_board_has_eight_symbols_each_twice() {
        use std::collections::HashMap;
        let game = game_from_seed(42);
        assert_eq!(game.board.cards.len(), MEMORY_PAIRS * 2);

        let mut counts: HashMap<char, usize> = HashMap::new();
        for card in &game.board.cards {
            *counts.entry(card.symbol).or_insert(0) += 1;
        }
        assert_eq!(counts.len(), MEMORY_PAIRS);
        assert!(counts.values().all(|&c| c == 2));
    }

    #[test]
    fn test_matching_pair_stays_up() {
        let mut game = game_from_seed(42);
        let now = Instant::now();
        let (a, b) = pair_indices(&game, SYMBOLS[0]);

        assert_eq!(game.flip(a, now), FlipOutcome::Revealed);
        assert_eq!(game.flip(b, now), FlipOutcome::Matched { completed: false });
        assert!(game.board.cards[a].matched && game.board.cards[b].matched);
        assert_eq!(game.board.matched_pairs, 1);
        assert!(!game.is_locked());
    }

    #[test]
    fn test_mismatch_locks_then_flips_back() {
        let mut game = game_from_seed(42);
        let now = Instant::now();
        let (a, _) = pair_indices(&game, SYMBOLS[0]);
        let (b, _) = pair_indices(&game, SYMBOLS[1]);

        game.flip(a, now);
        assert_eq!(game.flip(b, now), FlipOutcome::Mismatched);
        assert!(game.is_locked());

        // Further flips are no-ops while locked
        let (c, _) = pair_indices(&game, SYMBOLS[2]);
        assert_eq!(game.flip(c, now), FlipOutcome::Ignored);

        // Before the deadline nothing happens
        assert!(!game.tick(now));
        assert!(game.board.cards[a].face_up);

        // At the deadline both cards flip back down
        let due = now + Duration::from_millis(MISMATCH_FLIP_DELAY_MS);
        assert!(game.tick(due));
        assert!(!game.board.cards[a].face_up);
        assert!(!game.board.cards[b].face_up);
        assert!(!game.is_locked());
    }

    #[test]
    fn test_flipping_face_up_card_is_noop() {
        let mut game = game_from_seed(42);
        let now = Instant::now();
        game.flip(0, now);
        assert_eq!(game.flip(0, now), FlipOutcome::Ignored);
        assert_eq!(game.board.moves, 0);
    }

    #[test]
    fn test_full_game_completes_at_eight_pairs() {
        let mut game = game_from_seed(7);
        let now = Instant::now();

        for (i, &symbol) in SYMBOLS.iter().enumerate() {
            let (a, b) = pair_indices(&game, symbol);
            assert_eq!(game.flip(a, now), FlipOutcome::Revealed);
            let expected_completed = i == SYMBOLS.len() - 1;
            assert_eq!(
                game.flip(b, now),
                FlipOutcome::Matched {
                    completed: expected_completed
                }
            );
        }
        assert!(game.board.is_complete());

        // A finished board ignores further flips
        assert_eq!(game.flip(0, now), FlipOutcome::Ignored);
    }

    #[test]
    fn test_stale_flip_back_never_touches_new_board() {
        let mut game = game_from_seed(42);
        let now = Instant::now();
        let (a, _) = pair_indices(&game, SYMBOLS[0]);
        let (b, _) = pair_indices(&game, SYMBOLS[1]);
        game.flip(a, now);
        game.flip(b, now);
        assert!(game.is_locked());

        // Restart during the delay window
        let mut rng = StdRng::seed_from_u64(99);
        game.restart(&mut rng);
        assert!(!game.is_locked(), "New session is not locked by stale task");

        // Reveal a card on the new board, then let the stale deadline expire
        game.flip(a, now);
        let face_up_before: Vec<bool> = game.board.cards.iter().map(|c| c.face_up).collect();

        let due = now + Duration::from_millis(MISMATCH_FLIP_DELAY_MS);
        assert!(!game.tick(due), "Stale flip-back is discarded");
        let face_up_after: Vec<bool> = game.board.cards.iter().map(|c| c.face_up).collect();
        assert_eq!(face_up_before, face_up_after);
    }

    #[test]
    fn test_restart_resets_transient_state() {
        let mut game = game_from_seed(42);
        let now = Instant::now();
        let (a, b) = pair_indices(&game, SYMBOLS[0]);
        game.flip(a, now);
        game.flip(b, now);
        assert_eq!(game.board.matched_pairs, 1);

        let mut rng = StdRng::seed_from_u64(5);
        game.restart(&mut rng);
        assert_eq!(game.board.matched_pairs, 0);
        assert_eq!(game.board.moves, 0);
        assert!(game.board.cards.iter().all(|c| !c.face_up && !c.matched));
    }

    #[test]
    fn test_cursor_clamps_to_grid() {
        let mut game = game_from_seed(42);
        game.board.move_cursor(-1, -1);
        assert_eq!(game.board.cursor, (0, 0));
        game.board.move_cursor(10, 10);
        assert_eq!(game.board.cursor, (3, 3));
        assert_eq!(game.board.cursor_index(), 15);
    }
}

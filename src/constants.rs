// UI timing constants
pub const POLL_INTERVAL_MS: u64 = 50;

// Point rewards
pub const FAVORITE_POINTS: u64 = 5;
pub const MATCH_POINTS: u64 = 5;
pub const QUIZ_POINTS: u64 = 10;
pub const ACHIEVEMENT_BONUS_POINTS: u64 = 5;

// Tier badge thresholds
pub const TIER_ENTRY_POINTS: u64 = 20;
pub const TIER_MID_POINTS: u64 = 50;
pub const TIER_TOP_POINTS: u64 = 100;

// Comparison list capacity (oldest entry evicted beyond this)
pub const COMPARE_MAX: usize = 3;

// Memory game constants
pub const MEMORY_PAIRS: usize = 8;
pub const MISMATCH_FLIP_DELAY_MS: u64 = 800;

// Quiz result display cap
pub const QUIZ_RESULT_LIMIT: usize = 4;

// Trending leaderboard size
pub const LEADERBOARD_SIZE: usize = 3;

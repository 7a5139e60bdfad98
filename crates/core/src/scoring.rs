//! Scoring and difficulty rules
//!
//! - A line clear is worth `lines × difficulty`.
//! - Gravity waits `20000 + 1000 × (50 − difficulty)` time units per row.
//! - Every tenth spawned piece raises the difficulty by one, up to 50.

use crate::types::{
    GRAVITY_BASE_UNITS, GRAVITY_STEP_UNITS, MAX_DIFFICULTY, MAX_START_DIFFICULTY, MIN_DIFFICULTY,
    SPAWNS_PER_DIFFICULTY_STEP,
};

/// Points for clearing `lines` rows in one pass
pub fn line_clear_score(lines: u32, difficulty: u32) -> u32 {
    lines.saturating_mul(difficulty)
}

/// Time units between gravity steps
pub fn gravity_interval(difficulty: u32) -> u32 {
    let d = difficulty.clamp(MIN_DIFFICULTY, MAX_DIFFICULTY);
    GRAVITY_BASE_UNITS + GRAVITY_STEP_UNITS * (MAX_DIFFICULTY - d)
}

/// Difficulty after the `spawned`-th successful spawn
pub fn difficulty_after_spawn(difficulty: u32, spawned: u32) -> u32 {
    if spawned > 0 && spawned % SPAWNS_PER_DIFFICULTY_STEP == 0 && difficulty < MAX_DIFFICULTY {
        difficulty + 1
    } else {
        difficulty
    }
}

/// Clamp a pregame selection into the selectable range
pub fn clamp_start_difficulty(difficulty: u32) -> u32 {
    difficulty.clamp(MIN_DIFFICULTY, MAX_START_DIFFICULTY)
}

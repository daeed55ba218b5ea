//! Difficulty adaptation from game outcomes.
//!
//! The engine only reports `(score, time_taken)`; deciding what the
//! next game looks like is host policy. A strong, quick win moves the
//! player up a level; a weak or slow game moves them down. Everything
//! else stays put.

use crate::core::Difficulty;

/// Minimum score to advance a level.
pub const ADVANCE_SCORE: u32 = 75;

/// Per-level time budget (seconds) that a game must beat to advance.
pub const ADVANCE_SECS_PER_LEVEL: u64 = 45;

/// Scores below this retreat a level.
pub const RETREAT_SCORE: u32 = 40;

/// Per-level time ceiling (seconds) above which a game retreats.
pub const RETREAT_SECS_PER_LEVEL: u64 = 90;

/// Pick the difficulty for the next game.
///
/// Advance (capped at [`Difficulty::HARD`]) when `score >= 75` and the
/// game finished inside `difficulty * 45` seconds; retreat (floored at
/// [`Difficulty::EASY`]) when `score < 40` or the game ran past
/// `difficulty * 90` seconds; otherwise unchanged.
///
/// ```
/// use memory_match::core::Difficulty;
/// use memory_match::session::next_difficulty;
///
/// assert_eq!(next_difficulty(Difficulty::MEDIUM, 80, 40), Difficulty::HARD);
/// assert_eq!(next_difficulty(Difficulty::MEDIUM, 30, 40), Difficulty::EASY);
/// assert_eq!(next_difficulty(Difficulty::MEDIUM, 60, 40), Difficulty::MEDIUM);
/// ```
#[must_use]
pub fn next_difficulty(current: Difficulty, score: u32, time_taken: u64) -> Difficulty {
    let level = u64::from(current.raw());

    if score >= ADVANCE_SCORE && time_taken < level * ADVANCE_SECS_PER_LEVEL {
        current.step_up()
    } else if score < RETREAT_SCORE || time_taken > level * RETREAT_SECS_PER_LEVEL {
        current.step_down()
    } else {
        current
    }
}

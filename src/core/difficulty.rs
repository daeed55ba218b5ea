//! Difficulty levels and the pair-count policy.
//!
//! Difficulty is an integer the host hands to the engine. Levels 1-3
//! are meaningful; anything else falls back to the level-1 board size
//! rather than rejecting the game.

use serde::{Deserialize, Serialize};

/// Game difficulty level.
///
/// Levels 1, 2, and 3 map to 6, 8, and 10 pairs. Out-of-range values
/// are tolerated and play like level 1.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Difficulty(pub u8);

impl Difficulty {
    /// Easiest supported level (6 pairs).
    pub const EASY: Difficulty = Difficulty(1);
    /// Middle level (8 pairs).
    pub const MEDIUM: Difficulty = Difficulty(2);
    /// Hardest supported level (10 pairs).
    pub const HARD: Difficulty = Difficulty(3);

    /// Create a difficulty from a raw level.
    #[must_use]
    pub const fn new(level: u8) -> Self {
        Self(level)
    }

    /// Get the raw level value.
    #[must_use]
    pub const fn raw(self) -> u8 {
        self.0
    }

    /// Number of distinct symbol pairs on a board at this level.
    ///
    /// Unknown levels get the level-1 board.
    #[must_use]
    pub const fn pair_count(self) -> usize {
        match self.0 {
            2 => 8,
            3 => 10,
            _ => 6,
        }
    }

    /// One level harder, capped at [`Difficulty::HARD`].
    #[must_use]
    pub fn step_up(self) -> Self {
        Self(self.0.saturating_add(1).min(Self::HARD.0))
    }

    /// One level easier, floored at [`Difficulty::EASY`].
    #[must_use]
    pub fn step_down(self) -> Self {
        Self(self.0.saturating_sub(1).max(Self::EASY.0))
    }
}

impl Default for Difficulty {
    fn default() -> Self {
        Self::EASY
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Difficulty({})", self.0)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pair_counts() {
        assert_eq!(Difficulty::EASY.pair_count(), 6);
        assert_eq!(Difficulty::MEDIUM.pair_count(), 8);
        assert_eq!(Difficulty::HARD.pair_count(), 10);
    }

    #[test]
    fn test_pair_count_fallback() {
        assert_eq!(Difficulty::new(0).pair_count(), 6);
        assert_eq!(Difficulty::new(4).pair_count(), 6);
        assert_eq!(Difficulty::new(255).pair_count(), 6);
    }

    #[test]
    fn test_step_up_caps() {
        assert_eq!(Difficulty::EASY.step_up(), Difficulty::MEDIUM);
        assert_eq!(Difficulty::MEDIUM.step_up(), Difficulty::HARD);
        assert_eq!(Difficulty::HARD.step_up(), Difficulty::HARD);
    }

    #[test]
    fn test_step_down_floors() {
        assert_eq!(Difficulty::HARD.step_down(), Difficulty::MEDIUM);
        assert_eq!(Difficulty::MEDIUM.step_down(), Difficulty::EASY);
        assert_eq!(Difficulty::EASY.step_down(), Difficulty::EASY);
    }

    #[test]
    fn test_default_is_easy() {
        assert_eq!(Difficulty::default(), Difficulty::EASY);
    }

    #[test]
    fn test_display() {
        assert_eq!(format!("{}", Difficulty::MEDIUM), "Difficulty(2)");
    }

    #[test]
    fn test_serialization() {
        let d = Difficulty::HARD;
        let json = serde_json::to_string(&d).unwrap();
        let deserialized: Difficulty = serde_json::from_str(&json).unwrap();
        assert_eq!(d, deserialized);
    }
}

//! Patient stages and the game catalogue.
//!
//! The host application assigns each patient a care stage, which picks
//! the starting difficulty and which games are offered. The non-memory
//! games are catalogue entries the host renders with its own widgets;
//! only the memory games are backed by this crate's engine.

use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

/// Care stage of the playing patient.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PatientStage {
    Early,
    Moderate,
    Advanced,
}

impl PatientStage {
    /// Parse a stage label as stored by the host ("early", "moderate",
    /// "advanced"). Unknown labels get `None`; callers fall back to
    /// the easiest difficulty.
    #[must_use]
    pub fn from_label(label: &str) -> Option<Self> {
        match label {
            "early" => Some(Self::Early),
            "moderate" => Some(Self::Moderate),
            "advanced" => Some(Self::Advanced),
            _ => None,
        }
    }

    /// Starting difficulty for this stage.
    #[must_use]
    pub fn initial_difficulty(self) -> Difficulty {
        match self {
            Self::Early => Difficulty::EASY,
            Self::Moderate => Difficulty::MEDIUM,
            Self::Advanced => Difficulty::HARD,
        }
    }
}

impl std::fmt::Display for PatientStage {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let label = match self {
            Self::Early => "early",
            Self::Moderate => "moderate",
            Self::Advanced => "advanced",
        };
        write!(f, "{label}")
    }
}

/// A game the host can offer.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum GameKind {
    /// The full memory-match game.
    MemoryMatch,
    /// Memory match with a reduced palette for advanced-stage patients.
    SimpleMemoryMatch,
    /// Number-logic puzzle (host-rendered).
    Sudoku,
    /// Picture-assembly puzzle (host-rendered).
    Jigsaw,
}

impl GameKind {
    /// Stable identifier the host keys difficulty records by.
    #[must_use]
    pub fn id(self) -> &'static str {
        match self {
            Self::MemoryMatch => "memory",
            Self::SimpleMemoryMatch => "memory_simple",
            Self::Sudoku => "sudoku",
            Self::Jigsaw => "jigsaw",
        }
    }

    /// Display title.
    #[must_use]
    pub fn title(self) -> &'static str {
        match self {
            Self::MemoryMatch => "Memory Match",
            Self::SimpleMemoryMatch => "Simple Memory Match",
            Self::Sudoku => "Sudoku",
            Self::Jigsaw => "Simple Jigsaw",
        }
    }
}

impl std::fmt::Display for GameKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.id())
    }
}

/// The games offered at a given stage.
///
/// Early and moderate stages get the full memory game plus sudoku;
/// advanced patients get the simplified memory game plus a jigsaw.
#[must_use]
pub fn games_for_stage(stage: PatientStage) -> Vec<GameKind> {
    match stage {
        PatientStage::Early | PatientStage::Moderate => {
            vec![GameKind::MemoryMatch, GameKind::Sudoku]
        }
        PatientStage::Advanced => vec![GameKind::SimpleMemoryMatch, GameKind::Jigsaw],
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_initial_difficulty_per_stage() {
        assert_eq!(PatientStage::Early.initial_difficulty(), Difficulty::EASY);
        assert_eq!(PatientStage::Moderate.initial_difficulty(), Difficulty::MEDIUM);
        assert_eq!(PatientStage::Advanced.initial_difficulty(), Difficulty::HARD);
    }

    #[test]
    fn test_from_label() {
        assert_eq!(PatientStage::from_label("early"), Some(PatientStage::Early));
        assert_eq!(
            PatientStage::from_label("moderate"),
            Some(PatientStage::Moderate)
        );
        assert_eq!(
            PatientStage::from_label("advanced"),
            Some(PatientStage::Advanced)
        );
        assert_eq!(PatientStage::from_label("unknown"), None);
        assert_eq!(PatientStage::from_label(""), None);
    }

    #[test]
    fn test_games_per_stage() {
        assert_eq!(
            games_for_stage(PatientStage::Early),
            vec![GameKind::MemoryMatch, GameKind::Sudoku]
        );
        assert_eq!(
            games_for_stage(PatientStage::Moderate),
            vec![GameKind::MemoryMatch, GameKind::Sudoku]
        );
        assert_eq!(
            games_for_stage(PatientStage::Advanced),
            vec![GameKind::SimpleMemoryMatch, GameKind::Jigsaw]
        );
    }

    #[test]
    fn test_game_ids_are_stable() {
        assert_eq!(GameKind::MemoryMatch.id(), "memory");
        assert_eq!(GameKind::SimpleMemoryMatch.id(), "memory_simple");
        assert_eq!(GameKind::Sudoku.id(), "sudoku");
        assert_eq!(GameKind::Jigsaw.id(), "jigsaw");
    }

    #[test]
    fn test_stage_serde_labels() {
        let json = serde_json::to_string(&PatientStage::Moderate).unwrap();
        assert_eq!(json, "\"moderate\"");
        let back: PatientStage = serde_json::from_str(&json).unwrap();
        assert_eq!(back, PatientStage::Moderate);
    }
}

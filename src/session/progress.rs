//! Per-patient session state: difficulty levels and outcome history.

use im::Vector;
use log::debug;
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

use crate::core::Difficulty;

use super::policy::next_difficulty;
use super::stage::{games_for_stage, GameKind, PatientStage};

/// One completed game, as reported by the engine.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct OutcomeRecord {
    /// Which game was played.
    pub game: GameKind,
    /// The difficulty it was played at.
    pub difficulty: Difficulty,
    /// Final score.
    pub score: u32,
    /// Elapsed whole seconds.
    pub time_taken: u64,
}

/// Host-side session for one patient.
///
/// Tracks the current difficulty per offered game and the history of
/// completed games. The engine never sees any of this; it only reports
/// outcomes that land in [`record_outcome`](GameSession::record_outcome).
#[derive(Clone, Debug)]
pub struct GameSession {
    patient_id: String,
    stage: PatientStage,
    levels: FxHashMap<GameKind, Difficulty>,
    history: Vector<OutcomeRecord>,
}

impl GameSession {
    /// Start a session, seeding every offered game at the stage's
    /// initial difficulty.
    #[must_use]
    pub fn new(patient_id: impl Into<String>, stage: PatientStage) -> Self {
        let initial = stage.initial_difficulty();
        let levels = games_for_stage(stage)
            .into_iter()
            .map(|game| (game, initial))
            .collect();

        Self {
            patient_id: patient_id.into(),
            stage,
            levels,
            history: Vector::new(),
        }
    }

    /// The patient this session belongs to.
    #[must_use]
    pub fn patient_id(&self) -> &str {
        &self.patient_id
    }

    /// The patient's care stage.
    #[must_use]
    pub fn stage(&self) -> PatientStage {
        self.stage
    }

    /// The games offered in this session.
    #[must_use]
    pub fn games(&self) -> Vec<GameKind> {
        games_for_stage(self.stage)
    }

    /// Current difficulty for a game. Games never recorded at default
    /// to the easiest level.
    #[must_use]
    pub fn difficulty_for(&self, game: GameKind) -> Difficulty {
        self.levels.get(&game).copied().unwrap_or(Difficulty::EASY)
    }

    /// Record a completed game and adapt its difficulty.
    ///
    /// Returns the difficulty the next game of this kind should use.
    pub fn record_outcome(&mut self, game: GameKind, score: u32, time_taken: u64) -> Difficulty {
        let current = self.difficulty_for(game);
        let next = next_difficulty(current, score, time_taken);

        if next != current {
            debug!(
                "patient {}: {game} difficulty {current} -> {next} (score {score}, {time_taken}s)",
                self.patient_id
            );
        }

        self.levels.insert(game, next);
        self.history.push_back(OutcomeRecord {
            game,
            difficulty: current,
            score,
            time_taken,
        });
        next
    }

    /// Completed games in play order.
    #[must_use]
    pub fn history(&self) -> &Vector<OutcomeRecord> {
        &self.history
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_session_seeds_stage_difficulty() {
        let session = GameSession::new("p-1", PatientStage::Moderate);

        assert_eq!(session.patient_id(), "p-1");
        assert_eq!(
            session.difficulty_for(GameKind::MemoryMatch),
            Difficulty::MEDIUM
        );
        assert_eq!(session.difficulty_for(GameKind::Sudoku), Difficulty::MEDIUM);
        assert!(session.history().is_empty());
    }

    #[test]
    fn test_unoffered_game_defaults_easy() {
        let session = GameSession::new("p-1", PatientStage::Early);
        assert_eq!(session.difficulty_for(GameKind::Jigsaw), Difficulty::EASY);
    }

    #[test]
    fn test_record_outcome_advances() {
        let mut session = GameSession::new("p-1", PatientStage::Moderate);

        let next = session.record_outcome(GameKind::MemoryMatch, 80, 40);

        assert_eq!(next, Difficulty::HARD);
        assert_eq!(
            session.difficulty_for(GameKind::MemoryMatch),
            Difficulty::HARD
        );
        // Other games are untouched.
        assert_eq!(session.difficulty_for(GameKind::Sudoku), Difficulty::MEDIUM);
    }

    #[test]
    fn test_record_outcome_retreats() {
        let mut session = GameSession::new("p-1", PatientStage::Moderate);

        let next = session.record_outcome(GameKind::MemoryMatch, 30, 40);

        assert_eq!(next, Difficulty::EASY);
    }

    #[test]
    fn test_history_keeps_played_difficulty() {
        let mut session = GameSession::new("p-1", PatientStage::Moderate);

        session.record_outcome(GameKind::MemoryMatch, 80, 40);
        session.record_outcome(GameKind::MemoryMatch, 85, 50);

        let records: Vec<_> = session.history().iter().copied().collect();
        assert_eq!(records.len(), 2);
        // First game played at MEDIUM, second at the adapted HARD.
        assert_eq!(records[0].difficulty, Difficulty::MEDIUM);
        assert_eq!(records[1].difficulty, Difficulty::HARD);
        assert_eq!(records[1].score, 85);
    }

    #[test]
    fn test_session_spans_multiple_adjustments() {
        let mut session = GameSession::new("p-1", PatientStage::Early);

        // Climb to HARD, then a bad game drops back one.
        session.record_outcome(GameKind::MemoryMatch, 90, 10);
        session.record_outcome(GameKind::MemoryMatch, 90, 10);
        assert_eq!(
            session.difficulty_for(GameKind::MemoryMatch),
            Difficulty::HARD
        );

        session.record_outcome(GameKind::MemoryMatch, 20, 10);
        assert_eq!(
            session.difficulty_for(GameKind::MemoryMatch),
            Difficulty::MEDIUM
        );
    }
}

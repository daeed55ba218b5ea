//! Host-side policy: difficulty adaptation and patient sessions.
//!
//! The engine reports outcomes; everything here decides what the next
//! game looks like. This is the only adaptive logic in the system, so
//! it lives beside the engine even though the engine never calls it.

pub mod policy;
pub mod progress;
pub mod stage;

pub use policy::{
    next_difficulty, ADVANCE_SCORE, ADVANCE_SECS_PER_LEVEL, RETREAT_SCORE, RETREAT_SECS_PER_LEVEL,
};
pub use progress::{GameSession, OutcomeRecord};
pub use stage::{games_for_stage, GameKind, PatientStage};

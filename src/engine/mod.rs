//! The game engine: click intake, match resolution, win detection.
//!
//! [`MatchGame`] owns the board, the pending selection, the move
//! counter, and the mismatch-reversion timer. Hosts construct it with
//! [`MatchGameBuilder`], forward click positions, and receive the final
//! `(score, time_taken)` through the completion callback.

pub mod game;
pub mod timer;

pub use game::{
    compute_score, ClickOutcome, CompletionHandler, FlipRecord, GameOutcome, GamePhase, MatchGame,
    MatchGameBuilder,
};
pub use timer::{ReversionTimer, MISMATCH_DISPLAY_DELAY};

//! # memory-match
//!
//! A memory-matching game engine with adaptive difficulty, built for
//! cognitive-training hosts.
//!
//! ## Design Principles
//!
//! 1. **Host-Agnostic**: The engine owns the board and its invariants.
//!    Rendering, persistence, and patient data are the host's problem;
//!    the contract is "clicks in, card state and one completion
//!    notification out".
//!
//! 2. **Deterministic Seams**: Randomness and time are injected
//!    (`ShuffleSource`, `TimeSource`), so every board layout and every
//!    timer firing is exactly reproducible in tests.
//!
//! 3. **Degrade, Never Crash**: Bad input is a no-op, failed board
//!    construction is an explicit unready state. Nothing in this crate
//!    is fatal to the host application.
//!
//! ## Architecture
//!
//! - **Owned Timer**: The mismatch display delay is a handle owned by
//!   the engine instance, cancelled on replay and difficulty change. A
//!   stale timer can never mutate a replaced board.
//!
//! - **Incremental Win Check**: A matched-pair counter against the
//!   total replaces a full board rescan per click, with identical
//!   observable behavior.
//!
//! ## Modules
//!
//! - `core`: Difficulty policy, deterministic RNG, time sources
//! - `board`: Symbols, cards, shuffled board construction
//! - `engine`: The game state machine and completion reporting
//! - `session`: Host-side difficulty adaptation and patient sessions
//!
//! ## Example
//!
//! ```
//! use memory_match::{ClickOutcome, Difficulty, MatchGameBuilder};
//!
//! let mut game = MatchGameBuilder::new()
//!     .difficulty(Difficulty::EASY)
//!     .seed(42)
//!     .build();
//!
//! assert_eq!(game.cards().len(), 12);
//! assert_eq!(game.click(0), ClickOutcome::Revealed);
//! ```

pub mod board;
pub mod core;
pub mod engine;
pub mod session;

// Re-export commonly used types
pub use crate::core::{
    Difficulty, GameRng, ManualClock, MonotonicClock, ShuffleSource, TimeSource,
};

pub use crate::board::{Board, Card, CardId, Symbol, SYMBOL_PALETTE};

pub use crate::engine::{
    compute_score, ClickOutcome, CompletionHandler, FlipRecord, GameOutcome, GamePhase, MatchGame,
    MatchGameBuilder, ReversionTimer, MISMATCH_DISPLAY_DELAY,
};

pub use crate::session::{
    games_for_stage, next_difficulty, GameKind, GameSession, OutcomeRecord, PatientStage,
};

//! Core engine types: difficulty policy, RNG, and time.
//!
//! These are the deterministic seams the rest of the crate builds on.
//! Randomness and time are injected so every game transition is exactly
//! reproducible in tests.

pub mod clock;
pub mod difficulty;
pub mod rng;

pub use clock::{ManualClock, MonotonicClock, TimeSource};
pub use difficulty::Difficulty;
pub use rng::{GameRng, ShuffleSource};

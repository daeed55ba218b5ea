//! The mismatch-reversion timer.
//!
//! When a guess fails, both cards stay face-up for a fixed display
//! delay before turning back over. The delay is an explicit handle
//! owned by the engine instance, never an ambient global timer, so
//! replay and teardown can cancel it deterministically - a stale
//! callback must never mutate a board it no longer corresponds to.

use std::time::Duration;

/// How long a failed guess stays visible before both cards revert.
pub const MISMATCH_DISPLAY_DELAY: Duration = Duration::from_secs(1);

/// A pending reversion of two mismatched cards.
///
/// Created when a guess fails; dropped when it fires or when the board
/// it refers to is replaced.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ReversionTimer {
    first: usize,
    second: usize,
    fire_at: Duration,
}

impl ReversionTimer {
    pub(crate) fn new(first: usize, second: usize, fire_at: Duration) -> Self {
        Self {
            first,
            second,
            fire_at,
        }
    }

    /// Has the display delay elapsed at `now`?
    #[must_use]
    pub fn is_due(&self, now: Duration) -> bool {
        now >= self.fire_at
    }

    /// The two card indices awaiting reversion.
    #[must_use]
    pub fn indices(&self) -> (usize, usize) {
        (self.first, self.second)
    }

    /// When the reversion becomes due.
    #[must_use]
    pub fn fire_at(&self) -> Duration {
        self.fire_at
    }
}

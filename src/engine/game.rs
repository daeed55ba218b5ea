//! The match game state machine.
//!
//! ## Lifecycle
//!
//! ```text
//! Unready <- construction failure
//! Ready   <- construction, replay, difficulty change
//! Won     <- last pair matched (terminal until replay)
//! ```
//!
//! All mutation happens in response to discrete events: a click, a
//! tick, a replay. Each runs to completion before the next is handled.
//! The only deferred work is the mismatch reversion, which is processed
//! at the start of every event so a click arriving after the display
//! delay sees the cards already turned back over.

use im::Vector;
use log::{debug, info, warn};
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;
use std::time::Duration;

use crate::board::{Board, Card, CardId, Symbol, SYMBOL_PALETTE};
use crate::core::{Difficulty, GameRng, MonotonicClock, ShuffleSource, TimeSource};

use super::timer::{ReversionTimer, MISMATCH_DISPLAY_DELAY};

/// Host notification invoked once when the board completes.
///
/// Arguments are the final score and the elapsed whole seconds.
pub type CompletionHandler = Box<dyn FnMut(u32, u64)>;

/// Where the game is in its lifecycle.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum GamePhase {
    /// Board construction failed; clicks are ignored.
    Unready,
    /// Cards on the table, game in progress.
    Ready,
    /// Every card matched. Terminal until replay.
    Won,
}

/// What a click did to the game.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ClickOutcome {
    /// Precondition failed; nothing changed.
    Ignored,
    /// First card of a guess turned face-up.
    Revealed,
    /// Second card completed a pair.
    Matched,
    /// Second card did not match; reversion scheduled.
    Mismatched,
    /// The pair completed the board.
    Won,
}

/// Final result of a completed game.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameOutcome {
    /// `max(0, 100 - moves - time_taken / 5)`.
    pub score: u32,
    /// Elapsed whole seconds from board creation to the last match.
    pub time_taken: u64,
    /// Accepted card reveals over the whole game.
    pub moves: u32,
    /// The difficulty the board was played at.
    pub difficulty: Difficulty,
}

/// One accepted card reveal, for host display and analytics.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct FlipRecord {
    /// The card that was revealed.
    pub card: CardId,
    /// The move counter after this reveal (1-based).
    pub move_number: u32,
}

/// Compute the final score from the session counters.
///
/// ```
/// use memory_match::engine::compute_score;
///
/// assert_eq!(compute_score(10, 30), 84);
/// assert_eq!(compute_score(200, 0), 0); // clamped, never negative
/// ```
#[must_use]
pub fn compute_score(moves: u32, time_taken: u64) -> u32 {
    let penalty = i64::from(moves) + (time_taken / 5) as i64;
    (100 - penalty).max(0) as u32
}

/// Elapsed whole seconds, rounded to nearest.
fn round_secs(elapsed: Duration) -> u64 {
    (elapsed.as_millis() as u64 + 500) / 1000
}

/// Builder for [`MatchGame`].
///
/// ```
/// use memory_match::core::Difficulty;
/// use memory_match::engine::MatchGameBuilder;
///
/// let game = MatchGameBuilder::new()
///     .difficulty(Difficulty::MEDIUM)
///     .context_id("patient-17")
///     .seed(42)
///     .build();
///
/// assert_eq!(game.cards().len(), 16);
/// ```
pub struct MatchGameBuilder {
    context_id: Option<String>,
    difficulty: Difficulty,
    palette: Vec<Symbol>,
    rng: Option<Box<dyn ShuffleSource>>,
    clock: Option<Box<dyn TimeSource>>,
    on_complete: Option<CompletionHandler>,
}

impl Default for MatchGameBuilder {
    fn default() -> Self {
        Self {
            context_id: None,
            difficulty: Difficulty::default(),
            palette: SYMBOL_PALETTE.to_vec(),
            rng: None,
            clock: None,
            on_complete: None,
        }
    }
}

impl MatchGameBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Opaque identifier for the playing context (e.g. a patient ID).
    /// The engine only echoes it in logs.
    pub fn context_id(mut self, id: impl Into<String>) -> Self {
        self.context_id = Some(id.into());
        self
    }

    /// Difficulty to build the first board at.
    pub fn difficulty(mut self, difficulty: Difficulty) -> Self {
        self.difficulty = difficulty;
        self
    }

    /// Replace the stock symbol palette.
    pub fn palette(mut self, palette: impl Into<Vec<Symbol>>) -> Self {
        self.palette = palette.into();
        self
    }

    /// Seed the default RNG for a reproducible board.
    pub fn seed(mut self, seed: u64) -> Self {
        self.rng = Some(Box::new(GameRng::new(seed)));
        self
    }

    /// Inject a custom shuffle source (tests script exact layouts).
    pub fn rng(mut self, rng: impl ShuffleSource + 'static) -> Self {
        self.rng = Some(Box::new(rng));
        self
    }

    /// Inject a custom time source (tests control the clock).
    pub fn clock(mut self, clock: impl TimeSource + 'static) -> Self {
        self.clock = Some(Box::new(clock));
        self
    }

    /// Completion callback, invoked once with `(score, time_taken)`.
    pub fn on_complete(mut self, handler: impl FnMut(u32, u64) + 'static) -> Self {
        self.on_complete = Some(Box::new(handler));
        self
    }

    /// Build the engine and its first board.
    #[must_use]
    pub fn build(self) -> MatchGame {
        let mut game = MatchGame {
            context_id: self.context_id,
            difficulty: self.difficulty,
            palette: self.palette,
            board: Board::empty(),
            pending: SmallVec::new(),
            reversion: None,
            moves: 0,
            matched_pairs: 0,
            total_pairs: 0,
            phase: GamePhase::Unready,
            started_at: Duration::ZERO,
            outcome: None,
            history: Vector::new(),
            rng: self.rng.unwrap_or_else(|| Box::new(GameRng::from_entropy())),
            clock: self
                .clock
                .unwrap_or_else(|| Box::new(MonotonicClock::new())),
            on_complete: self.on_complete,
        };
        game.initialize();
        game
    }
}

/// The memory-match game engine.
///
/// Owns one board exclusively; rendering layers read the card sequence
/// through [`cards`](MatchGame::cards) and feed click positions back in
/// through [`click`](MatchGame::click). No I/O happens in here.
pub struct MatchGame {
    context_id: Option<String>,
    difficulty: Difficulty,
    palette: Vec<Symbol>,
    board: Board,
    /// Flipped-but-unconfirmed card indices; never more than two.
    pending: SmallVec<[usize; 2]>,
    reversion: Option<ReversionTimer>,
    moves: u32,
    /// Confirmed pairs so far; win check is this against `total_pairs`
    /// rather than a full board rescan.
    matched_pairs: usize,
    total_pairs: usize,
    phase: GamePhase,
    started_at: Duration,
    outcome: Option<GameOutcome>,
    history: Vector<FlipRecord>,
    rng: Box<dyn ShuffleSource>,
    clock: Box<dyn TimeSource>,
    on_complete: Option<CompletionHandler>,
}

impl MatchGame {
    /// Handle a click on the card at `index`.
    ///
    /// Any due reversion is processed first, then the click is accepted
    /// or silently ignored per the game rules. Accepting a click
    /// increments the move counter, reveals the card, and resolves the
    /// guess when it is the second card up.
    pub fn click(&mut self, index: usize) -> ClickOutcome {
        self.fire_due_reversion();

        if !self.accepts(index) {
            debug!("click on card {index} ignored");
            return ClickOutcome::Ignored;
        }

        self.moves += 1;
        if let Some(card) = self.board.card_mut(index) {
            card.face_up = true;
            self.history.push_back(FlipRecord {
                card: card.id,
                move_number: self.moves,
            });
        }
        self.pending.push(index);

        if self.pending.len() < 2 {
            return ClickOutcome::Revealed;
        }
        self.resolve_guess()
    }

    /// Process the reversion timer if its delay has elapsed.
    ///
    /// Hosts call this from their frame or timer loop; clicks also
    /// process it on entry. Returns true when a reversion fired.
    pub fn tick(&mut self) -> bool {
        self.fire_due_reversion()
    }

    /// Discard the board and start over at the current difficulty.
    ///
    /// Cancels any pending reversion so a stale timer can never touch
    /// the new board.
    pub fn replay(&mut self) {
        debug!("replay requested at {}", self.difficulty);
        self.initialize();
    }

    /// Switch difficulty, rebuilding the board from scratch.
    pub fn set_difficulty(&mut self, difficulty: Difficulty) {
        debug!("difficulty change: {} -> {}", self.difficulty, difficulty);
        self.difficulty = difficulty;
        self.initialize();
    }

    // === Read surface for rendering ===

    /// The ordered card sequence.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        self.board.cards()
    }

    /// Accepted card reveals so far.
    #[must_use]
    pub fn moves(&self) -> u32 {
        self.moves
    }

    /// Has every card been matched?
    #[must_use]
    pub fn won(&self) -> bool {
        self.phase == GamePhase::Won
    }

    /// Current lifecycle phase.
    #[must_use]
    pub fn phase(&self) -> GamePhase {
        self.phase
    }

    /// False when board construction failed and clicks are ignored.
    #[must_use]
    pub fn is_ready(&self) -> bool {
        self.phase != GamePhase::Unready
    }

    /// The difficulty the current board was built at.
    #[must_use]
    pub fn difficulty(&self) -> Difficulty {
        self.difficulty
    }

    /// The opaque playing-context identifier, if the host set one.
    #[must_use]
    pub fn context_id(&self) -> Option<&str> {
        self.context_id.as_deref()
    }

    /// Indices currently awaiting match resolution.
    #[must_use]
    pub fn pending(&self) -> &[usize] {
        &self.pending
    }

    /// The pending reversion, if a failed guess is on display.
    #[must_use]
    pub fn pending_reversion(&self) -> Option<ReversionTimer> {
        self.reversion
    }

    /// Final result, present once the game is won.
    #[must_use]
    pub fn outcome(&self) -> Option<GameOutcome> {
        self.outcome
    }

    /// Accepted reveals in order, for host display and analytics.
    #[must_use]
    pub fn history(&self) -> &Vector<FlipRecord> {
        &self.history
    }

    /// Time elapsed since the current board was created.
    #[must_use]
    pub fn elapsed(&self) -> Duration {
        self.clock.now().saturating_sub(self.started_at)
    }

    // === Internals ===

    fn initialize(&mut self) {
        // Cancel before the old board goes away.
        self.reversion = None;
        self.board = Board::build(self.difficulty.pair_count(), &self.palette, self.rng.as_mut());
        self.pending.clear();
        self.moves = 0;
        self.matched_pairs = 0;
        self.total_pairs = self.board.len() / 2;
        self.outcome = None;
        self.history = Vector::new();
        self.started_at = self.clock.now();

        if self.board.is_empty() {
            warn!(
                "board construction yielded no cards (context {:?}); engine unready",
                self.context_id
            );
            self.phase = GamePhase::Unready;
        } else {
            self.phase = GamePhase::Ready;
            debug!(
                "board ready: {} cards at {} (context {:?})",
                self.board.len(),
                self.difficulty,
                self.context_id
            );
        }
    }

    fn accepts(&self, index: usize) -> bool {
        if self.phase != GamePhase::Ready || self.pending.len() >= 2 {
            return false;
        }
        match self.board.card(index) {
            Some(card) => !card.face_up && !card.matched,
            None => false,
        }
    }

    fn resolve_guess(&mut self) -> ClickOutcome {
        let (i, j) = (self.pending[0], self.pending[1]);
        let (first, second) = match (self.board.card(i), self.board.card(j)) {
            (Some(a), Some(b)) => (a.symbol, b.symbol),
            _ => {
                warn!("pending selection ({i}, {j}) no longer on the board; clearing");
                self.pending.clear();
                return ClickOutcome::Ignored;
            }
        };

        if first == second {
            for index in [i, j] {
                if let Some(card) = self.board.card_mut(index) {
                    card.matched = true;
                    card.face_up = true;
                }
            }
            self.pending.clear();
            self.matched_pairs += 1;
            debug!("match on {first} ({}/{})", self.matched_pairs, self.total_pairs);

            if self.matched_pairs == self.total_pairs && !self.board.is_empty() {
                self.complete();
                return ClickOutcome::Won;
            }
            ClickOutcome::Matched
        } else {
            // Both stay face-up for the display delay; the pending pair
            // keeps further clicks out until the timer fires.
            let fire_at = self.clock.now() + MISMATCH_DISPLAY_DELAY;
            self.reversion = Some(ReversionTimer::new(i, j, fire_at));
            debug!("mismatch {first} vs {second}, reverting at {fire_at:?}");
            ClickOutcome::Mismatched
        }
    }

    fn fire_due_reversion(&mut self) -> bool {
        let Some(timer) = self.reversion else {
            return false;
        };
        if !timer.is_due(self.clock.now()) {
            return false;
        }
        self.reversion = None;

        let (i, j) = timer.indices();
        for index in [i, j] {
            match self.board.card_mut(index) {
                // A card matched while on display stays face-up.
                Some(card) if !card.matched => card.face_up = false,
                Some(_) => {}
                None => warn!("reversion referenced missing card {index}"),
            }
        }
        self.pending.clear();
        true
    }

    fn complete(&mut self) {
        self.phase = GamePhase::Won;

        let time_taken = round_secs(self.elapsed());
        let score = compute_score(self.moves, time_taken);
        let outcome = GameOutcome {
            score,
            time_taken,
            moves: self.moves,
            difficulty: self.difficulty,
        };
        self.outcome = Some(outcome);
        info!(
            "game won: score {score}, {time_taken}s, {} moves (context {:?})",
            self.moves, self.context_id
        );

        if let Some(handler) = self.on_complete.as_mut() {
            handler(score, time_taken);
        }
    }
}

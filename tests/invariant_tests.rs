//! Property tests for the board and engine invariants.

use proptest::prelude::*;
use std::collections::HashMap;
use std::time::Duration;

use memory_match::{
    Board, ClickOutcome, Difficulty, GameRng, ManualClock, MatchGameBuilder, SYMBOL_PALETTE,
};

proptest! {
    /// Every value on a freshly built board appears on exactly two
    /// cards, for any seed and any difficulty (including fallbacks).
    #[test]
    fn board_pairing_invariant(seed in any::<u64>(), level in 0u8..6) {
        let difficulty = Difficulty::new(level);
        let mut rng = GameRng::new(seed);
        let board = Board::build(difficulty.pair_count(), &SYMBOL_PALETTE, &mut rng);

        prop_assert_eq!(board.len(), difficulty.pair_count() * 2);

        let mut counts = HashMap::new();
        for card in board.cards() {
            *counts.entry(card.symbol).or_insert(0u32) += 1;
        }
        prop_assert_eq!(counts.len(), difficulty.pair_count());
        prop_assert!(counts.values().all(|&n| n == 2));
    }

    /// A shuffle permutes; it never invents or drops symbols.
    #[test]
    fn board_is_permutation_of_palette_prefix(seed in any::<u64>()) {
        let mut rng = GameRng::new(seed);
        let board = Board::build(6, &SYMBOL_PALETTE, &mut rng);

        let mut seen: Vec<_> = board.cards().iter().map(|c| c.symbol).collect();
        let mut expected: Vec<_> = SYMBOL_PALETTE[..6]
            .iter()
            .chain(&SYMBOL_PALETTE[..6])
            .copied()
            .collect();
        seen.sort_by_key(|s| s.glyph());
        expected.sort_by_key(|s| s.glyph());
        prop_assert_eq!(seen, expected);
    }

    /// Arbitrary click/tick storms never break the engine invariants:
    /// the pending list stays at <= 2, moves counts exactly the
    /// accepted clicks, matched cards never unmatch, and a won game
    /// has every card matched.
    #[test]
    fn click_storm_preserves_invariants(
        seed in any::<u64>(),
        clicks in prop::collection::vec((0usize..24, 0u64..1500), 1..200),
    ) {
        let clock = ManualClock::new();
        let mut game = MatchGameBuilder::new()
            .difficulty(Difficulty::EASY)
            .seed(seed)
            .clock(clock.clone())
            .build();

        let mut accepted = 0u32;
        let mut matched_before: Vec<bool> = game.cards().iter().map(|c| c.matched).collect();

        for (index, advance_ms) in clicks {
            clock.advance(Duration::from_millis(advance_ms));
            let outcome = game.click(index);
            if outcome != ClickOutcome::Ignored {
                accepted += 1;
            }

            prop_assert!(game.pending().len() <= 2);
            prop_assert_eq!(game.moves(), accepted);

            let matched_now: Vec<bool> = game.cards().iter().map(|c| c.matched).collect();
            for (before, now) in matched_before.iter().zip(&matched_now) {
                prop_assert!(!before || *now, "matched card reverted");
            }
            matched_before = matched_now;

            if game.won() {
                prop_assert!(game.cards().iter().all(|c| c.matched));
                prop_assert!(game.outcome().is_some());
            } else {
                prop_assert!(game.outcome().is_none());
            }
        }
    }
}

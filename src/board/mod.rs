//! Board construction: symbols, cards, and the shuffle.
//!
//! A board is an ordered sequence of face-down cards, two per symbol.
//! Construction takes the first `pair_count` symbols from an ordered
//! palette, duplicates them, and applies a Fisher-Yates shuffle driven
//! by an injected [`ShuffleSource`].
//!
//! Construction never fails: bad inputs (an empty palette) produce an
//! empty board the engine treats as unready, not a panic.

use log::warn;
use serde::{Deserialize, Serialize};

use crate::core::ShuffleSource;

/// A card face symbol.
///
/// Symbols are single Unicode scalars (the stock palette is fruit
/// emoji). The engine only ever compares them for equality.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Symbol(pub char);

impl Symbol {
    /// Create a symbol.
    #[must_use]
    pub const fn new(glyph: char) -> Self {
        Self(glyph)
    }

    /// Get the underlying glyph.
    #[must_use]
    pub const fn glyph(self) -> char {
        self.0
    }
}

impl std::fmt::Display for Symbol {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// The stock symbol palette, in priority order.
///
/// Boards take the first `pair_count` entries, so lower difficulties
/// always draw from the front of this list. Hosts can substitute a
/// different palette (e.g. simpler shapes for the simplified game
/// variant) through the engine builder.
pub const SYMBOL_PALETTE: [Symbol; 12] = [
    Symbol::new('🍎'),
    Symbol::new('🍌'),
    Symbol::new('🍇'),
    Symbol::new('🍉'),
    Symbol::new('🍓'),
    Symbol::new('🍒'),
    Symbol::new('🍑'),
    Symbol::new('🍍'),
    Symbol::new('🥝'),
    Symbol::new('🥭'),
    Symbol::new('🥥'),
    Symbol::new('🍅'),
];

/// Stable positional identifier for a card within one board.
///
/// Assigned 0..N-1 at construction and never reused while that board
/// lives. For a freshly built board the ID equals the card's index.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct CardId(pub u32);

impl CardId {
    /// Create a new card ID.
    #[must_use]
    pub const fn new(id: u32) -> Self {
        Self(id)
    }

    /// Get the raw ID value.
    #[must_use]
    pub const fn raw(self) -> u32 {
        self.0
    }
}

impl std::fmt::Display for CardId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "Card({})", self.0)
    }
}

/// A card on the board.
///
/// `face_up` is true while the card shows its symbol, either briefly
/// during a guess or permanently once matched. `matched` never reverts
/// to false for the lifetime of the board.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Card {
    /// Positional identifier within the board.
    pub id: CardId,

    /// The symbol this card shows when face-up.
    pub symbol: Symbol,

    /// Is the card currently showing its symbol?
    pub face_up: bool,

    /// Has this card's pair been confirmed?
    pub matched: bool,
}

impl Card {
    fn face_down(id: CardId, symbol: Symbol) -> Self {
        Self {
            id,
            symbol,
            face_up: false,
            matched: false,
        }
    }
}

/// An ordered sequence of cards, two per symbol.
///
/// Boards are built whole and replaced whole; nothing ever changes
/// their length in place.
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Board {
    cards: Vec<Card>,
}

impl Board {
    /// Build a shuffled board of `pair_count` pairs from `palette`.
    ///
    /// Takes the first `pair_count` symbols, duplicates them, and
    /// shuffles with Fisher-Yates through `rng`. An empty palette
    /// yields an empty board; a palette shorter than `pair_count`
    /// yields as many pairs as it has symbols.
    #[must_use]
    pub fn build(pair_count: usize, palette: &[Symbol], rng: &mut dyn ShuffleSource) -> Self {
        let selected = &palette[..pair_count.min(palette.len())];
        if selected.is_empty() {
            warn!("board build requested {pair_count} pairs from an empty palette");
            return Self::empty();
        }
        if selected.len() < pair_count {
            warn!(
                "palette has {} symbols, short of the {} pairs requested",
                selected.len(),
                pair_count
            );
        }

        let mut symbols: Vec<Symbol> = Vec::with_capacity(selected.len() * 2);
        symbols.extend_from_slice(selected);
        symbols.extend_from_slice(selected);
        fisher_yates(&mut symbols, rng);

        let cards = symbols
            .into_iter()
            .enumerate()
            .map(|(index, symbol)| Card::face_down(CardId::new(index as u32), symbol))
            .collect();

        Self { cards }
    }

    /// An empty board (the unready state).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    /// True when the board holds no cards.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// The ordered card sequence, for rendering.
    #[must_use]
    pub fn cards(&self) -> &[Card] {
        &self.cards
    }

    /// Get a card by index.
    #[must_use]
    pub fn card(&self, index: usize) -> Option<&Card> {
        self.cards.get(index)
    }

    pub(crate) fn card_mut(&mut self, index: usize) -> Option<&mut Card> {
        self.cards.get_mut(index)
    }
}

/// In-place Fisher-Yates: for i from the last index down to 1, swap
/// element i with a uniformly random element at index <= i.
fn fisher_yates<T>(items: &mut [T], rng: &mut dyn ShuffleSource) {
    for i in (1..items.len()).rev() {
        let j = rng.pick(i + 1);
        items.swap(i, j);
    }
}

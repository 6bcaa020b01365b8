//! Card registry.
//!
//! The `CardRegistry` owns every card instance of a session. Everything else
//! (decks, hands, map cells, effect sources) refers to cards by `CardId`, so
//! an effect never extends its source's lifetime and always re-resolves it.

use rustc_hash::FxHashMap;

use super::card::{Card, CardId};

/// Registry of card instances.
///
/// ## Example
///
/// ```
/// use hex_legends::cards::{Card, CardRegistry, UnitStats};
///
/// let mut registry = CardRegistry::new();
/// let id = registry.insert(Card::new_unit(1, "Knight", UnitStats::new(2, 4)));
///
/// assert_eq!(registry.get(id).unwrap().name, "Knight");
/// assert_eq!(registry.get(id).unwrap().id, id);
/// ```
#[derive(Clone, Debug, Default)]
pub struct CardRegistry {
    cards: FxHashMap<CardId, Card>,
    next_id: u32,
}

impl CardRegistry {
    /// Create a new empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Store a card under a fresh id and return the id.
    pub fn insert(&mut self, mut card: Card) -> CardId {
        let id = CardId::new(self.next_id);
        self.next_id += 1;
        card.id = id;
        self.cards.insert(id, card);
        id
    }

    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.cards.get(&id)
    }

    pub fn get_mut(&mut self, id: CardId) -> Option<&mut Card> {
        self.cards.get_mut(&id)
    }

    #[must_use]
    pub fn contains(&self, id: CardId) -> bool {
        self.cards.contains_key(&id)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Iterate over all cards (unordered).
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.values()
    }
}

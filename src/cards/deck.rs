//! The deck: the ordered cards of the current game.
//!
//! Uses an `im` persistent vector so the engine can hand out snapshots in
//! O(1) while it keeps mutating its own copy.
//!
//! A well-formed deck satisfies two invariants between operations:
//! - every symbol appears on exactly two cards
//! - at most two cards are pending (face-up and unmatched)

use im::Vector;
use rustc_hash::FxHashMap;
use smallvec::SmallVec;
use tracing::warn;

use super::card::{Card, CardId, Symbol};
use crate::core::{GameError, GameRng, Result};
use crate::themes::Theme;

/// Pending cards in deck order. Never more than two in a valid deck.
pub type Pending = SmallVec<[CardId; 2]>;

/// Ordered sequence of cards with stable IDs.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Deck {
    cards: Vector<Card>,
    /// card id -> position in `cards`
    positions: FxHashMap<CardId, usize>,
}

impl Deck {
    /// An empty deck (no game dealt).
    #[must_use]
    pub fn empty() -> Self {
        Self::default()
    }

    /// Deal a fresh deck from a theme.
    ///
    /// Picks `pair_count` distinct symbols uniformly without replacement,
    /// duplicates them, numbers the cards sequentially, then shuffles.
    pub fn deal(theme: &Theme, rng: &mut GameRng) -> Result<Self> {
        theme.validate()?;

        let chosen = rng.choose_multiple(&theme.symbols, theme.pair_count);

        let mut cards: Vec<Card> = chosen
            .iter()
            .chain(chosen.iter())
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol.clone()))
            .collect();

        rng.shuffle(&mut cards);

        Ok(Self::from_cards(cards))
    }

    /// Build a deck in exactly the given order, without shuffling.
    ///
    /// Card `i` gets `CardId(i)`. Every symbol must appear exactly twice.
    pub fn from_symbols<S>(symbols: impl IntoIterator<Item = S>) -> Result<Self>
    where
        S: Into<Symbol>,
    {
        let cards: Vec<Card> = symbols
            .into_iter()
            .enumerate()
            .map(|(i, symbol)| Card::new(CardId::new(i as u32), symbol.into()))
            .collect();

        if cards.is_empty() {
            return Err(GameError::config("deck has no cards"));
        }

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for card in &cards {
            *counts.entry(card.symbol()).or_default() += 1;
        }
        if let Some((symbol, count)) = counts.iter().find(|(_, &count)| count != 2) {
            warn!(%symbol, count, "deck layout rejected");
            return Err(GameError::config(format!(
                "symbol {} appears {} times, expected 2",
                symbol, count
            )));
        }

        Ok(Self::from_cards(cards))
    }

    fn from_cards(cards: Vec<Card>) -> Self {
        let positions = cards
            .iter()
            .enumerate()
            .map(|(pos, card)| (card.id(), pos))
            .collect();

        Self {
            cards: cards.into_iter().collect(),
            positions,
        }
    }

    /// Number of cards.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cards.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cards.is_empty()
    }

    /// Number of pairs dealt.
    #[must_use]
    pub fn pair_count(&self) -> usize {
        self.cards.len() / 2
    }

    /// Iterate over cards in deck order.
    pub fn iter(&self) -> impl Iterator<Item = &Card> {
        self.cards.iter()
    }

    /// The underlying persistent vector.
    #[must_use]
    pub fn cards(&self) -> &Vector<Card> {
        &self.cards
    }

    /// Get a card by ID.
    #[must_use]
    pub fn get(&self, id: CardId) -> Option<&Card> {
        self.positions.get(&id).map(|&pos| &self.cards[pos])
    }

    /// Position of a card in deck order.
    #[must_use]
    pub fn position(&self, id: CardId) -> Option<usize> {
        self.positions.get(&id).copied()
    }

    /// Face-up, unmatched cards in deck order.
    #[must_use]
    pub fn pending(&self) -> Pending {
        self.cards
            .iter()
            .filter(|c| c.is_pending())
            .map(Card::id)
            .collect()
    }

    /// Number of found pairs.
    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.cards.iter().filter(|c| c.is_matched()).count() / 2
    }

    /// All cards matched. An empty deck is never complete.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        !self.cards.is_empty() && self.cards.iter().all(Card::is_matched)
    }

    /// Verify the deck invariants, describing the first violation found.
    pub fn check_invariants(&self) -> std::result::Result<(), String> {
        if self.cards.len() % 2 != 0 {
            return Err(format!("deck has an odd number of cards ({})", self.cards.len()));
        }

        let mut counts: FxHashMap<&Symbol, usize> = FxHashMap::default();
        for card in &self.cards {
            *counts.entry(card.symbol()).or_default() += 1;
        }
        if let Some((symbol, count)) = counts.iter().find(|(_, &count)| count != 2) {
            return Err(format!("symbol {} appears {} times", symbol, count));
        }

        let pending = self.pending();
        if pending.len() > 2 {
            return Err(format!("{} cards pending", pending.len()));
        }

        if let Some(card) = self.cards.iter().find(|c| c.is_matched() && !c.is_face_up()) {
            return Err(format!("{} is matched but face-down", card.id()));
        }

        if self.positions.len() != self.cards.len() {
            return Err("card ids are not unique".to_string());
        }

        Ok(())
    }

    pub(crate) fn card_mut(&mut self, id: CardId) -> Option<&mut Card> {
        let pos = *self.positions.get(&id)?;
        self.cards.get_mut(pos)
    }
}

//! Render view of a game for the presentation layer.
//!
//! A snapshot is plain serializable data. Face-down cards carry no
//! symbol, so a renderer (or anything it forwards the snapshot to) cannot
//! peek at hidden cards.

use serde::{Deserialize, Serialize};

use super::outcome::Phase;
use crate::cards::{Card, CardId, Deck, Symbol};
use crate::themes::Theme;

/// One card as the player sees it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CardView {
    pub id: CardId,
    /// `None` while the card is face-down.
    pub symbol: Option<Symbol>,
    pub face_up: bool,
    pub matched: bool,
}

impl From<&Card> for CardView {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id(),
            symbol: card.is_face_up().then(|| card.symbol().clone()),
            face_up: card.is_face_up(),
            matched: card.is_matched(),
        }
    }
}

/// The whole table, in deck order.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct GameSnapshot {
    /// Theme name, or `None` for an exact deal.
    pub theme: Option<String>,
    /// Theme icon reference, passed through untouched.
    pub icon: Option<String>,
    pub cards: Vec<CardView>,
    pub phase: Phase,
    pub matched_pairs: usize,
    pub pair_count: usize,
}

impl GameSnapshot {
    /// Capture the visible state of a deck.
    #[must_use]
    pub fn capture(deck: &Deck, theme: Option<&Theme>) -> Self {
        Self {
            theme: theme.map(|t| t.name.clone()),
            icon: theme.map(|t| t.icon.clone()),
            cards: deck.iter().map(CardView::from).collect(),
            phase: Phase::of(deck),
            matched_pairs: deck.matched_pairs(),
            pair_count: deck.pair_count(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::engine::GameEngine;
    use crate::themes::ThemeCatalog;

    #[test]
    fn test_hidden_cards_have_no_symbol() {
        let mut engine = GameEngine::seeded(3);
        engine.deal_exact(["A", "B", "A", "B"]).unwrap();
        engine.select(CardId::new(1)).unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.cards.len(), 4);
        assert_eq!(snapshot.cards[1].symbol, Some(Symbol::from("B")));
        assert!(snapshot.cards[1].face_up);
        for index in [0, 2, 3] {
            assert_eq!(snapshot.cards[index].symbol, None);
        }
        assert_eq!(snapshot.phase, Phase::AwaitingSecond(CardId::new(1)));
        assert_eq!(snapshot.theme, None);
    }

    #[test]
    fn test_snapshot_carries_theme() {
        let catalog = ThemeCatalog::builtin();
        let mut engine = GameEngine::seeded(3);
        engine.new_game_named(&catalog, "Fruits").unwrap();

        let snapshot = engine.snapshot();
        assert_eq!(snapshot.theme.as_deref(), Some("Fruits"));
        assert_eq!(snapshot.icon.as_deref(), Some("applelogo"));
        assert_eq!(snapshot.pair_count, 6);
        assert_eq!(snapshot.matched_pairs, 0);
        assert_eq!(snapshot.phase, Phase::AwaitingFirst);
    }

    #[test]
    fn test_snapshot_serialization() {
        let mut engine = GameEngine::seeded(3);
        engine.deal_exact(["A", "A"]).unwrap();
        engine.select(CardId::new(0)).unwrap();
        engine.select(CardId::new(1)).unwrap();

        let snapshot = engine.snapshot();
        let json = serde_json::to_string(&snapshot).unwrap();
        let deserialized: GameSnapshot = serde_json::from_str(&json).unwrap();

        assert_eq!(snapshot, deserialized);
        assert_eq!(deserialized.phase, Phase::Complete);
        assert_eq!(deserialized.matched_pairs, 1);
    }
}

//! The game engine: owns the live deck and enforces turn discipline.
//!
//! ## Turn Discipline
//!
//! - With no pending card, `select` flips the chosen card face-up.
//! - With one pending card, `select` flips the second card and resolves
//!   the pair immediately: equal symbols become matched, unequal symbols
//!   stay face-up as a mismatch.
//! - While a mismatch is showing, `select` is blocked until
//!   `acknowledge_mismatch` turns both cards back down.
//!
//! Every rejected call returns an error without touching the deck.
//!
//! ## Usage
//!
//! ```
//! use memorize::engine::GameEngine;
//! use memorize::cards::CardId;
//!
//! let mut engine = GameEngine::seeded(42);
//! engine.deal_exact(["A", "A", "B", "B"]).unwrap();
//!
//! engine.select(CardId::new(0)).unwrap();
//! let outcome = engine.select(CardId::new(1)).unwrap();
//!
//! assert!(outcome.is_match());
//! assert_eq!(engine.matched_pairs(), 1);
//! ```

use tracing::{debug, info};

use super::outcome::{Phase, SelectOutcome};
use super::snapshot::GameSnapshot;
use crate::cards::{CardId, Deck, Pending, Symbol};
use crate::core::{GameError, GameRng, InvalidReason, Result};
use crate::themes::{Theme, ThemeCatalog};

/// Owns the current deck and the random source used to deal it.
///
/// All mutation goes through `new_game` (and its variants), `select` and
/// `acknowledge_mismatch`. The deck is replaced wholesale on every deal.
#[derive(Clone, Debug)]
pub struct GameEngine {
    rng: GameRng,
    deck: Deck,
    theme: Option<Theme>,
}

impl GameEngine {
    /// Create an engine that deals from the given random source.
    #[must_use]
    pub fn new(rng: GameRng) -> Self {
        Self {
            rng,
            deck: Deck::empty(),
            theme: None,
        }
    }

    /// Create an engine with a deterministic seed.
    #[must_use]
    pub fn seeded(seed: u64) -> Self {
        Self::new(GameRng::new(seed))
    }

    // === Dealing ===

    /// Deal a new game from a theme, discarding the current one.
    ///
    /// A malformed theme is rejected with a configuration error and the
    /// current game is kept.
    pub fn new_game(&mut self, theme: &Theme) -> Result<&Deck> {
        let rng_state = self.rng.state();
        let deck = Deck::deal(theme, &mut self.rng)?;

        info!(
            theme = %theme.name,
            pairs = theme.pair_count,
            seed = rng_state.seed,
            word_pos = %rng_state.word_pos,
            "new game dealt"
        );

        self.theme = Some(theme.clone());
        self.deck = deck;
        Ok(&self.deck)
    }

    /// Deal a new game from the catalog theme with the given name.
    pub fn new_game_named(&mut self, catalog: &ThemeCatalog, name: &str) -> Result<&Deck> {
        let theme = catalog
            .get(name)
            .ok_or_else(|| GameError::config(format!("no theme named '{}'", name)))?;
        self.new_game(theme)
    }

    /// Deal a new game from the first theme in the catalog.
    pub fn start_default(&mut self, catalog: &ThemeCatalog) -> Result<&Deck> {
        self.new_game(catalog.first())
    }

    /// Deal a game with cards in exactly this order.
    ///
    /// Card `i` gets `CardId(i)`. Every symbol must appear exactly twice.
    /// The engine's theme is cleared since the layout did not come from one.
    pub fn deal_exact<S>(&mut self, symbols: impl IntoIterator<Item = S>) -> Result<&Deck>
    where
        S: Into<Symbol>,
    {
        let deck = Deck::from_symbols(symbols)?;
        debug!(cards = deck.len(), "exact deck dealt");

        self.theme = None;
        self.deck = deck;
        Ok(&self.deck)
    }

    // === Play ===

    /// Select a card.
    ///
    /// Checks, in order: the game is not complete, no mismatch is awaiting
    /// acknowledgement, the card exists and is face-down.
    pub fn select(&mut self, id: CardId) -> Result<SelectOutcome> {
        if self.deck.is_complete() {
            return Err(GameError::GameComplete);
        }

        let pending = self.deck.pending();
        if let [first, second] = pending.as_slice() {
            return Err(GameError::SelectionBlocked {
                first: *first,
                second: *second,
            });
        }

        let card = self
            .deck
            .get(id)
            .ok_or_else(|| GameError::invalid(id, InvalidReason::UnknownCard))?;
        if card.is_matched() {
            return Err(GameError::invalid(id, InvalidReason::AlreadyMatched));
        }
        if card.is_face_up() {
            return Err(GameError::invalid(id, InvalidReason::AlreadyFaceUp));
        }

        let Some(&first) = pending.first() else {
            self.set_face_up(id, true);
            debug!(card = %id, "card flipped");
            return Ok(SelectOutcome::Flipped { card: id });
        };

        self.set_face_up(id, true);
        Ok(self.resolve_pair(first, id))
    }

    /// Turn a showing mismatch back face-down.
    ///
    /// Returns the two cards that were turned down, in deck order.
    pub fn acknowledge_mismatch(&mut self) -> Result<(CardId, CardId)> {
        let pending = self.deck.pending();
        let [first, second] = pending.as_slice() else {
            return Err(GameError::NoMismatchPending);
        };
        let (first, second) = (*first, *second);

        self.set_face_up(first, false);
        self.set_face_up(second, false);

        debug!(first = %first, second = %second, "mismatch acknowledged");
        Ok((first, second))
    }

    fn resolve_pair(&mut self, first: CardId, second: CardId) -> SelectOutcome {
        let same = match (self.deck.get(first), self.deck.get(second)) {
            (Some(a), Some(b)) => a.symbol() == b.symbol(),
            _ => false,
        };

        if !same {
            debug!(first = %first, second = %second, "mismatch");
            return SelectOutcome::Mismatched { first, second };
        }

        for id in [first, second] {
            if let Some(card) = self.deck.card_mut(id) {
                card.set_matched();
            }
        }

        if self.deck.is_complete() {
            info!(pairs = self.deck.pair_count(), "game complete");
            SelectOutcome::Completed { first, second }
        } else {
            debug!(
                first = %first,
                second = %second,
                matched = self.deck.matched_pairs(),
                "pair matched"
            );
            SelectOutcome::Matched { first, second }
        }
    }

    fn set_face_up(&mut self, id: CardId, face_up: bool) {
        if let Some(card) = self.deck.card_mut(id) {
            card.set_face_up(face_up);
        }
    }

    // === Queries ===

    /// The current deck.
    #[must_use]
    pub fn deck(&self) -> &Deck {
        &self.deck
    }

    /// The theme the current deck was dealt from, if any.
    #[must_use]
    pub fn theme(&self) -> Option<&Theme> {
        self.theme.as_ref()
    }

    #[must_use]
    pub fn phase(&self) -> Phase {
        Phase::of(&self.deck)
    }

    /// Face-up, unmatched cards in deck order.
    #[must_use]
    pub fn pending(&self) -> Pending {
        self.deck.pending()
    }

    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.deck.is_complete()
    }

    #[must_use]
    pub fn matched_pairs(&self) -> usize {
        self.deck.matched_pairs()
    }

    /// The random source, e.g. to record its state.
    #[must_use]
    pub fn rng(&self) -> &GameRng {
        &self.rng
    }

    /// Render view of the current game.
    #[must_use]
    pub fn snapshot(&self) -> GameSnapshot {
        GameSnapshot::capture(&self.deck, self.theme.as_ref())
    }
}

impl Default for GameEngine {
    fn default() -> Self {
        Self::new(GameRng::from_entropy())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::init_logging;

    fn engine_with(symbols: &[&str]) -> GameEngine {
        init_logging();
        let mut engine = GameEngine::seeded(1);
        engine.deal_exact(symbols.iter().copied()).unwrap();
        engine
    }

    fn id(raw: u32) -> CardId {
        CardId::new(raw)
    }

    #[test]
    fn test_idle_engine() {
        let mut engine = GameEngine::seeded(1);

        assert_eq!(engine.phase(), Phase::Idle);
        assert!(!engine.is_complete());
        assert_eq!(
            engine.select(id(0)),
            Err(GameError::invalid(id(0), InvalidReason::UnknownCard))
        );
        assert_eq!(engine.acknowledge_mismatch(), Err(GameError::NoMismatchPending));
    }

    #[test]
    fn test_first_flip() {
        let mut engine = engine_with(&["A", "B", "A", "B"]);

        let outcome = engine.select(id(2)).unwrap();
        assert_eq!(outcome, SelectOutcome::Flipped { card: id(2) });
        assert_eq!(engine.phase(), Phase::AwaitingSecond(id(2)));
        assert!(engine.deck().get(id(2)).unwrap().is_face_up());
    }

    #[test]
    fn test_match_resolves_immediately() {
        let mut engine = engine_with(&["A", "B", "A", "B"]);

        engine.select(id(0)).unwrap();
        let outcome = engine.select(id(2)).unwrap();

        assert_eq!(outcome, SelectOutcome::Matched { first: id(0), second: id(2) });
        for raw in [0, 2] {
            let card = engine.deck().get(id(raw)).unwrap();
            assert!(card.is_face_up());
            assert!(card.is_matched());
        }
        assert_eq!(engine.phase(), Phase::AwaitingFirst);
        assert!(engine.pending().is_empty());
    }

    #[test]
    fn test_mismatch_blocks_until_acknowledged() {
        let mut engine = engine_with(&["A", "B", "A", "B"]);

        engine.select(id(0)).unwrap();
        let outcome = engine.select(id(1)).unwrap();
        assert_eq!(outcome, SelectOutcome::Mismatched { first: id(0), second: id(1) });
        assert_eq!(engine.phase(), Phase::Mismatch(id(0), id(1)));

        let before = engine.deck().clone();
        assert_eq!(
            engine.select(id(2)),
            Err(GameError::SelectionBlocked { first: id(0), second: id(1) })
        );
        assert_eq!(engine.deck(), &before);

        assert_eq!(engine.acknowledge_mismatch(), Ok((id(0), id(1))));
        assert_eq!(engine.phase(), Phase::AwaitingFirst);
        assert!(engine.deck().iter().all(|c| !c.is_face_up()));
    }

    #[test]
    fn test_reselect_pending_card_is_rejected() {
        let mut engine = engine_with(&["A", "B", "A", "B"]);

        engine.select(id(1)).unwrap();
        let before = engine.deck().clone();

        assert_eq!(
            engine.select(id(1)),
            Err(GameError::invalid(id(1), InvalidReason::AlreadyFaceUp))
        );
        assert_eq!(engine.deck(), &before);
        assert_eq!(engine.phase(), Phase::AwaitingSecond(id(1)));
    }

    #[test]
    fn test_select_matched_card_is_rejected() {
        let mut engine = engine_with(&["A", "A", "B", "B"]);

        engine.select(id(0)).unwrap();
        engine.select(id(1)).unwrap();

        assert_eq!(
            engine.select(id(0)),
            Err(GameError::invalid(id(0), InvalidReason::AlreadyMatched))
        );
    }

    #[test]
    fn test_unknown_card_is_rejected() {
        let mut engine = engine_with(&["A", "A"]);
        assert_eq!(
            engine.select(id(7)),
            Err(GameError::invalid(id(7), InvalidReason::UnknownCard))
        );
    }

    #[test]
    fn test_acknowledge_without_mismatch() {
        let mut engine = engine_with(&["A", "B", "A", "B"]);
        assert_eq!(engine.acknowledge_mismatch(), Err(GameError::NoMismatchPending));

        engine.select(id(0)).unwrap();
        let before = engine.deck().clone();
        assert_eq!(engine.acknowledge_mismatch(), Err(GameError::NoMismatchPending));
        assert_eq!(engine.deck(), &before);
    }

    #[test]
    fn test_game_completes() {
        let mut engine = engine_with(&["A", "A", "B", "B"]);

        engine.select(id(0)).unwrap();
        engine.select(id(1)).unwrap();
        engine.select(id(2)).unwrap();
        let outcome = engine.select(id(3)).unwrap();

        assert_eq!(outcome, SelectOutcome::Completed { first: id(2), second: id(3) });
        assert!(engine.is_complete());
        assert_eq!(engine.phase(), Phase::Complete);
        assert_eq!(engine.matched_pairs(), 2);

        for raw in 0..5 {
            assert_eq!(engine.select(id(raw)), Err(GameError::GameComplete));
        }
        assert_eq!(engine.acknowledge_mismatch(), Err(GameError::NoMismatchPending));
    }

    #[test]
    fn test_new_game_replaces_deck_and_selection() {
        init_logging();
        let catalog = ThemeCatalog::builtin();
        let mut engine = GameEngine::seeded(5);

        engine.start_default(&catalog).unwrap();
        assert_eq!(engine.theme().unwrap().name, "Animals");
        assert_eq!(engine.deck().len(), 8);

        engine.select(id(0)).unwrap();
        assert_eq!(engine.pending().len(), 1);

        engine.new_game_named(&catalog, "Faces").unwrap();
        assert_eq!(engine.theme().unwrap().name, "Faces");
        assert_eq!(engine.deck().len(), 16);
        assert!(engine.pending().is_empty());
        assert_eq!(engine.phase(), Phase::AwaitingFirst);
    }

    #[test]
    fn test_unknown_theme_name() {
        let catalog = ThemeCatalog::builtin();
        let mut engine = GameEngine::seeded(5);

        let result = engine.new_game_named(&catalog, "Vehicles");
        assert!(matches!(result, Err(GameError::Configuration { .. })));
        assert_eq!(engine.phase(), Phase::Idle);
    }

    #[test]
    fn test_malformed_theme_keeps_current_game() {
        let mut engine = engine_with(&["A", "B", "A", "B"]);
        engine.select(id(0)).unwrap();
        let before = engine.deck().clone();

        let bad = Theme::new("Short", ["X"], 3, "x");
        assert!(matches!(engine.new_game(&bad), Err(GameError::Configuration { .. })));
        assert_eq!(engine.deck(), &before);
    }

    #[test]
    fn test_same_seed_same_deal() {
        let theme = Theme::new("Letters", ["A", "B", "C", "D", "E", "F", "G"], 5, "x");

        let mut engine1 = GameEngine::seeded(77);
        let mut engine2 = GameEngine::seeded(77);

        let deck1 = engine1.new_game(&theme).unwrap().clone();
        let deck2 = engine2.new_game(&theme).unwrap().clone();
        assert_eq!(deck1, deck2);

        // The stream advances, so the next deal differs in layout but not in shape
        let deck3 = engine1.new_game(&theme).unwrap();
        assert_eq!(deck3.len(), 10);
        assert!(deck3.check_invariants().is_ok());
    }
}

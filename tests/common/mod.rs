//! Helpers shared by integration tests.

#![allow(dead_code)]

use memorize::{CardId, Deck, GameEngine};
use once_cell::sync::OnceCell;
use tracing_subscriber::{fmt, EnvFilter};

static INITIALIZED: OnceCell<()> = OnceCell::new();

/// Install a tracing subscriber once. Level from `TEST_LOG`, then `RUST_LOG`, else `warn`.
pub fn init_logging() {
    INITIALIZED.get_or_init(|| {
        let filter = std::env::var("TEST_LOG")
            .or_else(|_| std::env::var("RUST_LOG"))
            .map(EnvFilter::new)
            .unwrap_or_else(|_| EnvFilter::new("warn"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .try_init()
            .ok();
    });
}

/// Engine holding an exact, unshuffled deal.
pub fn engine_with(symbols: &[&str]) -> GameEngine {
    init_logging();
    let mut engine = GameEngine::seeded(0);
    engine
        .deal_exact(symbols.iter().copied())
        .expect("test layout should be valid");
    engine
}

pub fn id(raw: u32) -> CardId {
    CardId::new(raw)
}

/// Find the ID of the other card showing `card`'s symbol.
pub fn partner_of(deck: &Deck, card: CardId) -> CardId {
    let symbol = deck.get(card).expect("card exists").symbol();
    deck.iter()
        .find(|c| c.id() != card && c.symbol() == symbol)
        .map(|c| c.id())
        .expect("every card has a partner")
}

//! # memorize
//!
//! Game session engine for a memory-matching card game.
//!
//! ## Design Principles
//!
//! 1. **Explicit State**: One engine object owns the deck. All mutation
//!    goes through `new_game`, `select` and `acknowledge_mismatch`.
//!
//! 2. **Two-Card Discipline**: At most two unmatched cards are face-up.
//!    Matches resolve instantly; mismatches must be acknowledged.
//!
//! 3. **Reproducible Deals**: Randomness comes from an injectable,
//!    seedable `GameRng`.
//!
//! ## Modules
//!
//! - `core`: RNG and the error taxonomy
//! - `themes`: Theme definitions and the validated catalog
//! - `cards`: Card identities, symbols, and the deck
//! - `engine`: The game engine, outcomes, phases, and render snapshots

pub mod core;
pub mod themes;
pub mod cards;
pub mod engine;

#[cfg(test)]
pub(crate) mod test_support;

// Re-export commonly used types
pub use crate::core::{GameError, GameRng, GameRngState, InvalidReason, Result};

pub use crate::themes::{Theme, ThemeCatalog, ThemeCatalogBuilder};

pub use crate::cards::{Card, CardId, Deck, Pending, Symbol};

pub use crate::engine::{CardView, GameEngine, GameSnapshot, Phase, SelectOutcome};

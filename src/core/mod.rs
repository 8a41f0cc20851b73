//! Core engine types: randomness and the error taxonomy.
//!
//! Everything here is independent of themes and decks; higher modules
//! build on these.

pub mod error;
pub mod rng;

pub use error::{GameError, InvalidReason, Result};
pub use rng::{GameRng, GameRngState};

//! Card system: identities, symbols, and the dealt deck.
//!
//! ## Key Types
//!
//! - `CardId`: Stable identity of a card within one deck
//! - `Symbol`: Opaque token shown on a face-up card
//! - `Card`: One card and its face state
//! - `Deck`: Ordered cards of the current game

pub mod card;
pub mod deck;

pub use card::{Card, CardId, Symbol};
pub use deck::{Deck, Pending};

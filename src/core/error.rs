//! Error taxonomy for catalog loading and game play.
//!
//! Only `Configuration` is fatal: it signals malformed theme data and
//! should abort startup. Every other variant is a rejected player input;
//! the engine's state is left exactly as it was, and the caller decides
//! whether to surface or ignore it.

use thiserror::Error;

use crate::cards::CardId;

/// Why a card cannot be selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum InvalidReason {
    /// No card with this ID exists in the current deck.
    UnknownCard,
    /// The card already belongs to a found pair.
    AlreadyMatched,
    /// The card is already face-up and pending.
    AlreadyFaceUp,
}

impl std::fmt::Display for InvalidReason {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            InvalidReason::UnknownCard => write!(f, "no such card in the current deck"),
            InvalidReason::AlreadyMatched => write!(f, "card is already matched"),
            InvalidReason::AlreadyFaceUp => write!(f, "card is already face-up"),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum GameError {
    /// Malformed theme data.
    #[error("configuration error: {message}")]
    Configuration { message: String },

    #[error("invalid selection of {card}: {reason}")]
    InvalidSelection { card: CardId, reason: InvalidReason },

    /// Two mismatched cards are face-up and must be acknowledged first.
    #[error("selection blocked: mismatch between {first} and {second} awaits acknowledgement")]
    SelectionBlocked { first: CardId, second: CardId },

    #[error("game complete: every pair has been found")]
    GameComplete,

    #[error("no mismatch pending")]
    NoMismatchPending,
}

impl GameError {
    /// Build a configuration error from any message.
    pub fn config(message: impl Into<String>) -> Self {
        GameError::Configuration {
            message: message.into(),
        }
    }

    /// Shorthand for an invalid selection.
    #[must_use]
    pub fn invalid(card: CardId, reason: InvalidReason) -> Self {
        GameError::InvalidSelection { card, reason }
    }

    /// Whether the engine remains usable after this error.
    #[must_use]
    pub fn is_recoverable(&self) -> bool {
        !matches!(self, GameError::Configuration { .. })
    }
}

impl From<serde_json::Error> for GameError {
    fn from(err: serde_json::Error) -> Self {
        GameError::config(format!("malformed theme catalog: {err}"))
    }
}

pub type Result<T> = std::result::Result<T, GameError>;

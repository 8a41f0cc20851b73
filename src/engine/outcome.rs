//! Results of engine operations and the derived turn phase.

use serde::{Deserialize, Serialize};

use crate::cards::{CardId, Deck};

/// What a successful `select` did.
///
/// In two-card outcomes `first` is the card that was already face-up and
/// `second` is the card just selected.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum SelectOutcome {
    /// First card of a turn flipped face-up.
    Flipped { card: CardId },
    /// Second card matched the first; both are now matched.
    Matched { first: CardId, second: CardId },
    /// Second card did not match; both stay face-up until acknowledged.
    Mismatched { first: CardId, second: CardId },
    /// Second card matched the first and that was the last pair.
    Completed { first: CardId, second: CardId },
}

impl SelectOutcome {
    /// Did this selection find a pair?
    #[must_use]
    pub fn is_match(&self) -> bool {
        matches!(self, SelectOutcome::Matched { .. } | SelectOutcome::Completed { .. })
    }

    /// The card the player just selected.
    #[must_use]
    pub fn selected(&self) -> CardId {
        match *self {
            SelectOutcome::Flipped { card } => card,
            SelectOutcome::Matched { second, .. }
            | SelectOutcome::Mismatched { second, .. }
            | SelectOutcome::Completed { second, .. } => second,
        }
    }
}

/// Where the current game stands. Derived from the deck, never stored.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub enum Phase {
    /// No game has been dealt.
    Idle,
    /// No pending cards; any face-down card may be selected.
    AwaitingFirst,
    /// One card is pending.
    AwaitingSecond(CardId),
    /// Two mismatched cards are face-up, in deck order.
    Mismatch(CardId, CardId),
    /// Every card is matched.
    Complete,
}

impl Phase {
    /// Derive the phase of a deck.
    #[must_use]
    pub fn of(deck: &Deck) -> Self {
        if deck.is_empty() {
            return Phase::Idle;
        }
        if deck.is_complete() {
            return Phase::Complete;
        }

        match deck.pending().as_slice() {
            [] => Phase::AwaitingFirst,
            [card] => Phase::AwaitingSecond(*card),
            [first, second, ..] => Phase::Mismatch(*first, *second),
        }
    }

    /// Number of pending cards in this phase.
    #[must_use]
    pub fn pending_count(&self) -> usize {
        match self {
            Phase::Idle | Phase::AwaitingFirst | Phase::Complete => 0,
            Phase::AwaitingSecond(_) => 1,
            Phase::Mismatch(..) => 2,
        }
    }
}

//! Theme definitions - the symbol sets a game can be dealt from.

use rustc_hash::FxHashSet;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::Symbol;
use crate::core::{GameError, Result};

/// A named set of candidate symbols plus a target pair count.
///
/// `Theme::new` does not validate. Catalogs validate every theme when
/// they are built, and the engine validates again before dealing.
///
/// ## Example
///
/// ```
/// use memorize::themes::Theme;
///
/// let theme = Theme::new("Letters", ["A", "B", "C"], 2, "textformat");
///
/// assert_eq!(theme.pair_count, 2);
/// assert!(theme.validate().is_ok());
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Theme {
    /// Unique human-readable name.
    pub name: String,

    /// Candidate symbols; `pair_count` of them are dealt per game.
    pub symbols: Vec<Symbol>,

    /// Number of matching pairs to deal.
    pub pair_count: usize,

    /// Display icon reference. Opaque to the engine.
    pub icon: String,
}

impl Theme {
    /// Create a new theme.
    pub fn new<S>(
        name: impl Into<String>,
        symbols: impl IntoIterator<Item = S>,
        pair_count: usize,
        icon: impl Into<String>,
    ) -> Self
    where
        S: Into<Symbol>,
    {
        Self {
            name: name.into(),
            symbols: symbols.into_iter().map(Into::into).collect(),
            pair_count,
            icon: icon.into(),
        }
    }

    /// Number of cards a game with this theme has.
    #[must_use]
    pub fn card_count(&self) -> usize {
        self.pair_count * 2
    }

    /// Check that this theme can produce a well-formed deck.
    ///
    /// A valid theme has a non-empty name, a positive pair count, no
    /// repeated symbols, and at least `pair_count` symbols.
    pub fn validate(&self) -> Result<()> {
        let problem = if self.name.trim().is_empty() {
            Some("theme name is empty".to_string())
        } else if self.pair_count == 0 {
            Some(format!("theme '{}' has a pair count of zero", self.name))
        } else if self.symbols.len() < self.pair_count {
            Some(format!(
                "theme '{}' needs {} symbols but has {}",
                self.name,
                self.pair_count,
                self.symbols.len()
            ))
        } else {
            let mut seen = FxHashSet::default();
            self.symbols
                .iter()
                .find(|s| !seen.insert(*s))
                .map(|dup| format!("theme '{}' repeats symbol {}", self.name, dup))
        };

        match problem {
            Some(message) => {
                warn!(theme = %self.name, %message, "theme rejected");
                Err(GameError::config(message))
            }
            None => Ok(()),
        }
    }
}

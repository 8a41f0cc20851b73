//! Theme catalog - the ordered, validated list of playable themes.
//!
//! A `ThemeCatalog` is built once at startup and never changes. Building
//! it is fail-fast: one malformed theme rejects the whole catalog with a
//! configuration error, nothing is silently truncated.

use rustc_hash::FxHashMap;
use tracing::{debug, warn};

use super::theme::Theme;
use crate::core::{GameError, Result};

/// Ordered catalog of valid themes.
///
/// ## Example
///
/// ```
/// use memorize::themes::{Theme, ThemeCatalog};
///
/// let catalog = ThemeCatalog::builder()
///     .with_theme(Theme::new("Letters", ["A", "B", "C"], 2, "textformat"))
///     .with_theme(Theme::new("Digits", ["1", "2", "3", "4"], 4, "number"))
///     .build()
///     .unwrap();
///
/// let names: Vec<_> = catalog.list_themes().iter().map(|t| t.name.as_str()).collect();
/// assert_eq!(names, ["Letters", "Digits"]);
/// assert_eq!(catalog.get("Digits").unwrap().pair_count, 4);
/// ```
#[derive(Clone, Debug)]
pub struct ThemeCatalog {
    themes: Vec<Theme>,
    by_name: FxHashMap<String, usize>,
}

impl ThemeCatalog {
    /// Start building a catalog.
    #[must_use]
    pub fn builder() -> ThemeCatalogBuilder {
        ThemeCatalogBuilder::default()
    }

    /// Validate and index a list of themes, keeping their order.
    pub fn new(themes: Vec<Theme>) -> Result<Self> {
        if themes.is_empty() {
            warn!("theme catalog rejected: no themes");
            return Err(GameError::config("theme catalog is empty"));
        }

        let mut by_name = FxHashMap::default();
        for (index, theme) in themes.iter().enumerate() {
            theme.validate()?;
            if by_name.insert(theme.name.clone(), index).is_some() {
                warn!(theme = %theme.name, "theme catalog rejected: duplicate name");
                return Err(GameError::config(format!(
                    "theme name '{}' appears more than once",
                    theme.name
                )));
            }
        }

        debug!(themes = themes.len(), "theme catalog loaded");
        Ok(Self { themes, by_name })
    }

    /// Load a catalog from a JSON array of themes.
    ///
    /// Each entry has the fields `name`, `symbols`, `pair_count` and `icon`.
    pub fn from_json(json: &str) -> Result<Self> {
        let themes: Vec<Theme> = serde_json::from_str(json)?;
        Self::new(themes)
    }

    /// The themes the game ships with.
    #[must_use]
    pub fn builtin() -> Self {
        let themes = vec![
            Theme::new(
                "Animals",
                ["🐌", "🐇", "🐷", "🦎", "🦙", "🦁", "🦃", "🦅", "🐵", "🦋", "🦓"],
                4,
                "hare.fill",
            ),
            Theme::new(
                "Fruits",
                ["🍎", "🍊", "🍋", "🍌", "🍉", "🍇", "🍓", "🍒", "🍑", "🍐"],
                6,
                "applelogo",
            ),
            Theme::new(
                "Faces",
                ["😍", "😁", "😂", "🙃", "😆", "😄", "😜", "😎", "🤓", "🤖"],
                8,
                "smiley.fill",
            ),
        ];

        let by_name = themes
            .iter()
            .enumerate()
            .map(|(index, theme)| (theme.name.clone(), index))
            .collect();

        Self { themes, by_name }
    }

    /// All themes in declaration order.
    #[must_use]
    pub fn list_themes(&self) -> &[Theme] {
        &self.themes
    }

    /// Look up a theme by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Theme> {
        self.by_name.get(name).map(|&index| &self.themes[index])
    }

    /// The first declared theme; the one a fresh session starts with.
    #[must_use]
    pub fn first(&self) -> &Theme {
        // Construction rejects empty catalogs.
        &self.themes[0]
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.themes.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.themes.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &Theme> {
        self.themes.iter()
    }
}

impl Default for ThemeCatalog {
    fn default() -> Self {
        Self::builtin()
    }
}

/// Builder for a `ThemeCatalog`. Validation happens in `build`.
#[derive(Clone, Debug, Default)]
pub struct ThemeCatalogBuilder {
    themes: Vec<Theme>,
}

impl ThemeCatalogBuilder {
    /// Append a theme.
    #[must_use]
    pub fn with_theme(mut self, theme: Theme) -> Self {
        self.themes.push(theme);
        self
    }

    /// Validate all themes and build the catalog.
    pub fn build(self) -> Result<ThemeCatalog> {
        ThemeCatalog::new(self.themes)
    }
}

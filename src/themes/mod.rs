//! Theme catalog: named symbol sets a game is dealt from.
//!
//! ## Key Types
//!
//! - `Theme`: Name, symbol pool, pair count, and display icon
//! - `ThemeCatalog`: Validated, ordered list of themes
//! - `ThemeCatalogBuilder`: Builder that validates on `build`

pub mod catalog;
pub mod theme;

pub use catalog::{ThemeCatalog, ThemeCatalogBuilder};
pub use theme::Theme;

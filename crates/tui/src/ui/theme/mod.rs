//! Theme styling for the navbar.
//!
//! Color palettes (Dracula, Nord), an ANSI 256-color fallback, semantic theme
//! roles, the named style hooks the navbar exposes for customization, and
//! helper builders for Ratatui widgets.

pub mod catalog;
pub mod loader;
pub mod palettes;
pub mod roles;
pub mod style_hooks;
pub mod theme_helpers;

pub use catalog::ThemeDefinition;
pub use loader::{LoadedTheme, load};
pub use palettes::PaletteTheme;
pub use roles::{Theme, ThemeRoles};
pub use style_hooks::{ListPosition, SidebarWidth, StyleHooks};

use std::fmt::Debug;

use ratatui::style::{Color, Modifier, Style};

/// Semantic colors a palette provides. Widgets never name palette colors
/// directly; they go through these roles or through [`super::StyleHooks`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ThemeRoles {
    /// Screen background behind every panel.
    pub background: Color,
    /// Panel fill, also the navbar's resting background.
    pub surface: Color,
    /// Slightly raised fill, used for hovered entries.
    pub surface_muted: Color,
    pub border: Color,
    pub text: Color,
    pub text_secondary: Color,
    pub text_muted: Color,
    /// Selected marker and key hints.
    pub accent_primary: Color,
    pub accent_secondary: Color,
    /// Border color of the focused panel.
    pub focus: Color,
}

/// A palette plus the style builders shared by every component.
pub trait Theme: Send + Sync + Debug {
    fn roles(&self) -> &ThemeRoles;

    fn text_primary_style(&self) -> Style {
        Style::new().fg(self.roles().text)
    }

    fn text_secondary_style(&self) -> Style {
        Style::new().fg(self.roles().text_secondary)
    }

    fn text_muted_style(&self) -> Style {
        Style::new().fg(self.roles().text_muted)
    }

    fn border_style(&self, focused: bool) -> Style {
        let roles = self.roles();
        Style::new().fg(if focused { roles.focus } else { roles.border })
    }

    /// Bold accent, used for headings and key names in hints.
    fn accent_emphasis_style(&self) -> Style {
        Style::new().fg(self.roles().accent_primary).add_modifier(Modifier::BOLD)
    }
}

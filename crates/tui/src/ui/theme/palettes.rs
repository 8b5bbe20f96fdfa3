//! Built-in palettes mapped onto [`ThemeRoles`].
//!
//! Each palette only differs in its role table, so a single [`PaletteTheme`]
//! type carries all of them.

use ratatui::style::Color;

use super::roles::{Theme, ThemeRoles};

const fn rgb(hex: u32) -> Color {
    Color::Rgb((hex >> 16) as u8, (hex >> 8) as u8, hex as u8)
}

/// A theme backed by a fixed role table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PaletteTheme {
    roles: ThemeRoles,
}

impl PaletteTheme {
    pub const fn new(roles: ThemeRoles) -> Self {
        Self { roles }
    }

    /// Dracula (draculatheme.com): pink for the selected marker, cyan for focus.
    pub const fn dracula() -> Self {
        let background = rgb(0x282A36);
        let current_line = rgb(0x44475A);
        let comment = rgb(0x6272A4);
        let cyan = rgb(0x8BE9FD);
        Self::new(ThemeRoles {
            background,
            surface: background,
            surface_muted: current_line,
            border: current_line,
            text: rgb(0xF8F8F2),
            text_secondary: comment,
            text_muted: comment,
            accent_primary: rgb(0xFF79C6),
            accent_secondary: cyan,
            focus: cyan,
        })
    }

    /// Nord: polar-night surfaces with frost accents.
    pub const fn nord() -> Self {
        let frost = rgb(0x88C0D0);
        Self::new(ThemeRoles {
            background: rgb(0x2E3440),
            surface: rgb(0x3B4252),
            surface_muted: rgb(0x434C5E),
            border: rgb(0x3B4252),
            text: rgb(0xD8DEE9),
            text_secondary: rgb(0xE5E9F0),
            text_muted: rgb(0x616E88),
            accent_primary: frost,
            accent_secondary: rgb(0x81A1C1),
            focus: frost,
        })
    }

    /// Indexed-color approximation of Dracula for terminals without truecolor.
    pub const fn ansi256() -> Self {
        Self::new(ThemeRoles {
            background: Color::Indexed(236),
            surface: Color::Indexed(236),
            surface_muted: Color::Indexed(239),
            border: Color::Indexed(239),
            text: Color::Indexed(255),
            text_secondary: Color::Indexed(250),
            text_muted: Color::Indexed(247),
            accent_primary: Color::Indexed(212),
            accent_secondary: Color::Indexed(117),
            focus: Color::Indexed(117),
        })
    }
}

impl Default for PaletteTheme {
    fn default() -> Self {
        Self::dracula()
    }
}

impl Theme for PaletteTheme {
    fn roles(&self) -> &ThemeRoles {
        &self.roles
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn hex_colors_are_split_into_channels() {
        assert_eq!(rgb(0x282A36), Color::Rgb(0x28, 0x2A, 0x36));
        assert_eq!(PaletteTheme::dracula().roles().accent_primary, Color::Rgb(0xFF, 0x79, 0xC6));
    }

    #[test]
    fn ansi_palette_uses_indexed_colors_only() {
        let roles = *PaletteTheme::ansi256().roles();
        for color in [roles.background, roles.text, roles.accent_primary, roles.border, roles.focus] {
            assert!(matches!(color, Color::Indexed(_)), "{color:?}");
        }
    }
}

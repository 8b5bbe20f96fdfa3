//! Registry of the built-in themes, addressable by id or alias.

use super::{PaletteTheme, Theme};

/// A selectable theme.
#[derive(Debug, Clone)]
pub struct ThemeDefinition {
    /// Canonical id, as stored in the settings file.
    pub id: &'static str,
    /// Name shown to the user.
    pub label: &'static str,
    /// Extra names accepted from `--theme`, `TUI_THEME`, or the settings file.
    pub aliases: &'static [&'static str],
    /// Safe on terminals limited to 256 colors.
    pub is_ansi_fallback: bool,
    palette: PaletteTheme,
}

impl ThemeDefinition {
    pub fn build(&self) -> Box<dyn Theme> {
        Box::new(self.palette.clone())
    }

    fn answers_to(&self, name: &str) -> bool {
        self.id.eq_ignore_ascii_case(name) || self.aliases.iter().any(|alias| alias.eq_ignore_ascii_case(name))
    }
}

static THEMES: [ThemeDefinition; 3] = [
    ThemeDefinition {
        id: "dracula",
        label: "Dracula",
        aliases: &[],
        is_ansi_fallback: false,
        palette: PaletteTheme::dracula(),
    },
    ThemeDefinition {
        id: "nord",
        label: "Nord",
        aliases: &["polar"],
        is_ansi_fallback: false,
        palette: PaletteTheme::nord(),
    },
    ThemeDefinition {
        id: "ansi256",
        label: "ANSI 256",
        aliases: &["256", "8bit"],
        is_ansi_fallback: true,
        palette: PaletteTheme::ansi256(),
    },
];

/// Finds a theme by id or alias, ignoring ASCII case.
pub fn resolve(name: &str) -> Option<&'static ThemeDefinition> {
    let name = name.trim();
    THEMES.iter().find(|definition| definition.answers_to(name))
}

/// Theme used on truecolor terminals when nothing else is requested.
pub fn default_truecolor() -> &'static ThemeDefinition {
    &THEMES[0]
}

/// Theme forced on terminals without truecolor support.
pub fn default_ansi() -> &'static ThemeDefinition {
    THEMES.iter().find(|definition| definition.is_ansi_fallback).unwrap_or(&THEMES[0])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ids_and_aliases_resolve_case_insensitively() {
        assert_eq!(resolve("NORD").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve(" polar ").map(|definition| definition.id), Some("nord"));
        assert_eq!(resolve("8BIT").map(|definition| definition.id), Some("ansi256"));
        assert!(resolve("solarized").is_none());
    }

    #[test]
    fn defaults_cover_both_terminal_classes() {
        assert_eq!(default_truecolor().id, "dracula");
        assert_eq!(default_ansi().id, "ansi256");
        assert_eq!(THEMES.iter().filter(|definition| definition.is_ansi_fallback).count(), 1);
    }
}

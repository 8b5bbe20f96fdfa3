//! Picks the theme to run with.
//!
//! Terminals without truecolor always get the ANSI palette. Otherwise the first
//! of `TUI_THEME`, the caller's preference, and the default that resolves wins.

use std::env;

use tracing::debug;

use super::{Theme, ThemeDefinition, catalog};

/// The chosen definition and the theme built from it.
pub struct LoadedTheme {
    pub definition: &'static ThemeDefinition,
    pub theme: Box<dyn Theme>,
}

impl From<&'static ThemeDefinition> for LoadedTheme {
    fn from(definition: &'static ThemeDefinition) -> Self {
        Self {
            definition,
            theme: definition.build(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum ColorSupport {
    Truecolor,
    Indexed,
}

impl ColorSupport {
    /// Reads the color capability from `lookup`, which maps env var names to values.
    ///
    /// `TUI_COLOR_MODE` decides outright; `TUI_FORCE_TRUECOLOR`, `COLORTERM`,
    /// and `TERM` can only upgrade to truecolor.
    fn detect(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let read = |name: &str| lookup(name).map(|value| value.trim().to_ascii_lowercase()).unwrap_or_default();

        match read("TUI_COLOR_MODE").as_str() {
            "truecolor" | "24bit" => return Self::Truecolor,
            "ansi256" | "256" | "8bit" => return Self::Indexed,
            _ => {}
        }

        let forced = matches!(read("TUI_FORCE_TRUECOLOR").as_str(), "1" | "true" | "yes" | "on");
        let colorterm = read("COLORTERM");
        if forced || colorterm.contains("truecolor") || colorterm.contains("24bit") || read("TERM").contains("truecolor") {
            Self::Truecolor
        } else {
            Self::Indexed
        }
    }
}

/// Loads the theme for this process from the environment and `preferred`.
pub fn load(preferred: Option<&str>) -> LoadedTheme {
    select(preferred, |name| env::var(name).ok())
}

fn select(preferred: Option<&str>, lookup: impl Fn(&str) -> Option<String>) -> LoadedTheme {
    if ColorSupport::detect(&lookup) == ColorSupport::Indexed {
        debug!("terminal lacks truecolor; using the ANSI palette");
        return catalog::default_ansi().into();
    }

    let from_env = lookup("TUI_THEME");
    from_env
        .as_deref()
        .into_iter()
        .chain(preferred)
        .find_map(catalog::resolve)
        .unwrap_or_else(catalog::default_truecolor)
        .into()
}

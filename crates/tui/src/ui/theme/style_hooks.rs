//! Named style hooks for the side navbar.
//!
//! Each hook is a single named style parameter an embedding application may
//! override without touching the widget: colors, spacing, list anchoring, and
//! sizing. Defaults are derived from the active [`Theme`]. Overrides arrive as
//! `name -> value` string pairs (usually from the settings file) and are parsed
//! leniently: an unknown hook or an unparsable value is skipped with a warning
//! and the previous value stays in effect.

use std::fmt;
use std::str::FromStr;

use ratatui::style::Color;
use thiserror::Error;
use tracing::warn;

use super::roles::{Theme, ThemeRoles};

pub const BG_COLOR: &str = "bg-color";
pub const BG_COLOR_HOVER: &str = "bg-color-hover";
pub const BG_COLOR_ICON_HOVER: &str = "bg-color-icon-hover";
pub const COLOR: &str = "color";
pub const PADDING_TOP: &str = "padding-top";
pub const POSITION: &str = "position";
pub const PRIMARY_COLOR: &str = "primary-color";
pub const SIDEBAR_MIN_HEIGHT: &str = "sidebar-min-height";
pub const SIDEBAR_WIDTH: &str = "sidebar-width";

/// Every hook name, in documentation order.
pub const HOOK_NAMES: [&str; 9] = [
    BG_COLOR,
    BG_COLOR_HOVER,
    BG_COLOR_ICON_HOVER,
    COLOR,
    PADDING_TOP,
    POSITION,
    PRIMARY_COLOR,
    SIDEBAR_MIN_HEIGHT,
    SIDEBAR_WIDTH,
];

/// Rejected style override.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StyleHookError {
    #[error("unknown style hook '{0}'")]
    UnknownHook(String),
    #[error("invalid value '{value}' for style hook '{hook}'")]
    InvalidValue { hook: String, value: String },
}

/// Vertical anchor of the item list inside the navbar.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum ListPosition {
    #[default]
    Start,
    Center,
    End,
}

impl FromStr for ListPosition {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        match value.trim().to_ascii_lowercase().as_str() {
            "start" | "top" | "static" => Ok(Self::Start),
            "center" | "middle" => Ok(Self::Center),
            "end" | "bottom" => Ok(Self::End),
            _ => Err(()),
        }
    }
}

/// Width of the navbar relative to the slot it is rendered into.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SidebarWidth {
    /// Percentage of the slot width (clamped to 100).
    Percent(u16),
    /// Absolute width in terminal cells (clamped to the slot).
    Cells(u16),
}

impl Default for SidebarWidth {
    fn default() -> Self {
        Self::Percent(100)
    }
}

impl SidebarWidth {
    /// Resolves the width against the available slot width.
    pub fn resolve(self, available: u16) -> u16 {
        match self {
            Self::Percent(percent) => {
                let percent = u32::from(percent.min(100));
                (u32::from(available) * percent / 100) as u16
            }
            Self::Cells(cells) => cells.min(available),
        }
    }
}

impl FromStr for SidebarWidth {
    type Err = ();

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        if let Some(percent) = value.strip_suffix('%') {
            return percent.trim().parse().map(Self::Percent).map_err(|_| ());
        }
        value.parse().map(Self::Cells).map_err(|_| ())
    }
}

impl fmt::Display for SidebarWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Percent(percent) => write!(f, "{percent}%"),
            Self::Cells(cells) => write!(f, "{cells}"),
        }
    }
}

/// Resolved style hooks used by the navbar when rendering.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StyleHooks {
    /// Background of every entry.
    pub bg_color: Color,
    /// Background of the entry under the mouse or keyboard focus.
    pub bg_color_hover: Color,
    /// Color of the leading glyph of a hovered entry.
    pub bg_color_icon_hover: Color,
    /// Label color.
    pub color: Color,
    /// Blank rows above the first entry.
    pub padding_top: u16,
    pub position: ListPosition,
    /// Color of the selected marker.
    pub primary_color: Color,
    /// Minimum navbar height in rows; `None` inherits the slot height.
    pub sidebar_min_height: Option<u16>,
    pub sidebar_width: SidebarWidth,
}

impl StyleHooks {
    /// Default hooks derived from the theme roles.
    pub fn from_theme<T: Theme + ?Sized>(theme: &T) -> Self {
        let ThemeRoles {
            surface,
            surface_muted,
            text,
            accent_primary,
            accent_secondary,
            ..
        } = *theme.roles();
        Self {
            bg_color: surface,
            bg_color_hover: surface_muted,
            bg_color_icon_hover: accent_secondary,
            color: text,
            padding_top: 1,
            position: ListPosition::Start,
            primary_color: accent_primary,
            sidebar_min_height: None,
            sidebar_width: SidebarWidth::default(),
        }
    }

    /// Applies a single override. A leading `--` on the hook name is accepted.
    pub fn set(&mut self, hook: &str, value: &str) -> Result<(), StyleHookError> {
        let name = hook.trim().trim_start_matches("--");
        let invalid = || StyleHookError::InvalidValue {
            hook: name.to_string(),
            value: value.to_string(),
        };
        match name {
            BG_COLOR => self.bg_color = parse_color(value).ok_or_else(invalid)?,
            BG_COLOR_HOVER => self.bg_color_hover = parse_color(value).ok_or_else(invalid)?,
            BG_COLOR_ICON_HOVER => self.bg_color_icon_hover = parse_color(value).ok_or_else(invalid)?,
            COLOR => self.color = parse_color(value).ok_or_else(invalid)?,
            PRIMARY_COLOR => self.primary_color = parse_color(value).ok_or_else(invalid)?,
            PADDING_TOP => self.padding_top = value.trim().parse().map_err(|_| invalid())?,
            POSITION => self.position = value.parse().map_err(|_| invalid())?,
            SIDEBAR_WIDTH => self.sidebar_width = value.parse().map_err(|_| invalid())?,
            SIDEBAR_MIN_HEIGHT => {
                let trimmed = value.trim();
                self.sidebar_min_height = if trimmed.eq_ignore_ascii_case("inherit") {
                    None
                } else {
                    Some(trimmed.parse().map_err(|_| invalid())?)
                };
            }
            _ => return Err(StyleHookError::UnknownHook(name.to_string())),
        }
        Ok(())
    }

    /// Applies every override, skipping (and logging) the ones that are rejected.
    /// Returns the rejected overrides.
    pub fn apply_overrides<'a, I>(&mut self, overrides: I) -> Vec<StyleHookError>
    where
        I: IntoIterator<Item = (&'a str, &'a str)>,
    {
        let mut rejected = Vec::new();
        for (hook, value) in overrides {
            if let Err(error) = self.set(hook, value) {
                warn!(%error, "ignoring style override");
                rejected.push(error);
            }
        }
        rejected
    }
}

fn parse_color(value: &str) -> Option<Color> {
    Color::from_str(value.trim()).ok()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::PaletteTheme;

    #[test]
    fn defaults_come_from_theme_roles() {
        let theme = PaletteTheme::dracula();
        let hooks = StyleHooks::from_theme(&theme);
        assert_eq!(hooks.bg_color, theme.roles().surface);
        assert_eq!(hooks.primary_color, theme.roles().accent_primary);
        assert_eq!(hooks.sidebar_width, SidebarWidth::Percent(100));
        assert_eq!(hooks.sidebar_min_height, None);
        assert_eq!(hooks.position, ListPosition::Start);
    }

    #[test]
    fn overrides_accept_css_style_names() {
        let mut hooks = StyleHooks::from_theme(&PaletteTheme::dracula());
        let rejected = hooks.apply_overrides([
            ("--bg-color", "#101820"),
            ("primary-color", "yellow"),
            ("padding-top", "3"),
            ("position", "center"),
            ("sidebar-width", "40%"),
            ("sidebar-min-height", "12"),
        ]);
        assert!(rejected.is_empty());
        assert_eq!(hooks.bg_color, Color::Rgb(0x10, 0x18, 0x20));
        assert_eq!(hooks.primary_color, Color::Yellow);
        assert_eq!(hooks.padding_top, 3);
        assert_eq!(hooks.position, ListPosition::Center);
        assert_eq!(hooks.sidebar_width, SidebarWidth::Percent(40));
        assert_eq!(hooks.sidebar_min_height, Some(12));
    }

    #[test]
    fn rejected_overrides_keep_previous_values() {
        let mut hooks = StyleHooks::from_theme(&PaletteTheme::dracula());
        let before = hooks.clone();
        let rejected = hooks.apply_overrides([("color", "not-a-color"), ("font-size", "12px"), ("padding-top", "-1")]);
        assert_eq!(rejected.len(), 3);
        assert_eq!(rejected[1], StyleHookError::UnknownHook("font-size".into()));
        assert_eq!(hooks, before);
    }

    #[test]
    fn min_height_inherit_clears_override() {
        let mut hooks = StyleHooks::from_theme(&PaletteTheme::dracula());
        hooks.set(SIDEBAR_MIN_HEIGHT, "8").expect("numeric min height");
        hooks.set(SIDEBAR_MIN_HEIGHT, "inherit").expect("inherit keyword");
        assert_eq!(hooks.sidebar_min_height, None);
    }

    #[test]
    fn sidebar_width_resolves_against_slot() {
        assert_eq!(SidebarWidth::Percent(100).resolve(30), 30);
        assert_eq!(SidebarWidth::Percent(50).resolve(30), 15);
        assert_eq!(SidebarWidth::Percent(250).resolve(30), 30);
        assert_eq!(SidebarWidth::Cells(20).resolve(30), 20);
        assert_eq!(SidebarWidth::Cells(80).resolve(30), 30);
        assert_eq!("24".parse::<SidebarWidth>(), Ok(SidebarWidth::Cells(24)));
        assert_eq!(SidebarWidth::Percent(75).to_string(), "75%");
    }

    #[test]
    fn hook_names_are_all_settable() {
        let mut hooks = StyleHooks::from_theme(&PaletteTheme::dracula());
        for name in HOOK_NAMES {
            let result = hooks.set(name, "");
            assert!(!matches!(result, Err(StyleHookError::UnknownHook(_))), "{name} should be known");
        }
    }
}

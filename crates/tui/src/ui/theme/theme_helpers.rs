use ratatui::{
    style::{Color, Modifier, Style},
    text::Span,
    widgets::{Block, BorderType, Borders},
};

use super::roles::{Theme, ThemeRoles};
use super::style_hooks::StyleHooks;

/// Build a standard Block with theme surfaces and borders.
pub fn block<'a, T: Theme + ?Sized>(theme: &'a T, title: Option<&'a str>, focused: bool) -> Block<'a> {
    let mut block = Block::default()
        .borders(Borders::ALL)
        .border_type(BorderType::Plain)
        .border_style(theme.border_style(focused))
        .style(panel_style(theme));
    if let Some(t) = title {
        block = block.title(Span::styled(t, theme.text_secondary_style().add_modifier(Modifier::BOLD)));
    }
    block
}

/// Style for panel-like containers (set background on widget using `.style`).
pub fn panel_style<T: Theme + ?Sized>(theme: &T) -> Style {
    let ThemeRoles { surface, text, .. } = *theme.roles();
    Style::default().bg(surface).fg(text)
}

/// Darken an RGB color by a multiplicative factor (0.0..=1.0).
/// If the color is not RGB, returns it unchanged.
pub fn darken_rgb(color: Color, factor: f32) -> Color {
    match color {
        Color::Rgb(r, g, b) => {
            let f = factor.clamp(0.0, 1.0);
            let scale = |channel: u8| (f32::from(channel) * f).round().clamp(0.0, 255.0) as u8;
            Color::Rgb(scale(r), scale(g), scale(b))
        }
        other => other,
    }
}

/// Style of the whole navbar surface.
pub fn navbar_style(hooks: &StyleHooks) -> Style {
    Style::default().bg(hooks.bg_color).fg(hooks.color)
}

/// Style of a single entry row.
///
/// Hover wins over the resting background; the selected entry keeps its label
/// color but is emphasized.
pub fn nav_entry_style(hooks: &StyleHooks, selected: bool, hovered: bool) -> Style {
    let background = if hovered { hooks.bg_color_hover } else { hooks.bg_color };
    let mut style = Style::default().bg(background).fg(hooks.color);
    if selected {
        style = style.add_modifier(Modifier::BOLD);
    }
    style
}

/// Style of the leading glyph of an entry (the selected marker or hover cue).
pub fn nav_marker_style(hooks: &StyleHooks, selected: bool, hovered: bool) -> Style {
    let background = if hovered { hooks.bg_color_hover } else { hooks.bg_color };
    let foreground = if selected {
        hooks.primary_color
    } else if hovered {
        hooks.bg_color_icon_hover
    } else {
        hooks.color
    };
    Style::default().bg(background).fg(foreground)
}

/// Builds styled hint spans, e.g. `[(" Enter", " Select")]`.
pub fn build_hint_spans<T: Theme + ?Sized>(theme: &T, hints: &[(&str, &str)]) -> Vec<Span<'static>> {
    let mut spans = Vec::with_capacity(hints.len() * 2);
    for (key, description) in hints {
        spans.push(Span::styled(key.to_string(), theme.accent_emphasis_style()));
        spans.push(Span::styled(description.to_string(), theme.text_muted_style()));
    }
    spans
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ui::theme::PaletteTheme;

    #[test]
    fn darken_only_touches_rgb() {
        assert_eq!(darken_rgb(Color::Rgb(200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(darken_rgb(Color::Indexed(12), 0.5), Color::Indexed(12));
    }

    #[test]
    fn hover_and_selection_styles_use_hooks() {
        let hooks = StyleHooks::from_theme(&PaletteTheme::dracula());
        let resting = nav_entry_style(&hooks, false, false);
        let hovered = nav_entry_style(&hooks, false, true);
        assert_eq!(resting.bg, Some(hooks.bg_color));
        assert_eq!(hovered.bg, Some(hooks.bg_color_hover));
        assert!(nav_entry_style(&hooks, true, false).add_modifier.contains(Modifier::BOLD));

        assert_eq!(nav_marker_style(&hooks, true, true).fg, Some(hooks.primary_color));
        assert_eq!(nav_marker_style(&hooks, false, true).fg, Some(hooks.bg_color_icon_hover));
    }
}

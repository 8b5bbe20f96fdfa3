use ratatui::{
    Frame,
    layout::Rect,
    style::Modifier,
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
};
use sidenav_types::{Effect, Msg};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Renders the content pane and records `selected` events bubbling up from
/// the navbar.
#[derive(Debug, Default)]
pub struct ContentComponent;

impl Component for ContentComponent {
    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        if let Msg::NavItemSelected(label) = msg {
            app.content.record_selection(label);
        }
        Vec::new()
    }

    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let theme = &*app.ctx.theme;
        let heading = app.content.last_selected.as_deref().unwrap_or("Nothing selected yet");
        let viewport = app.viewport.current();
        let mode = if app.side_navbar.mobile() { "mobile" } else { "desktop" };

        let lines = vec![
            Line::from(Span::styled(heading.to_string(), theme.accent_emphasis_style().add_modifier(Modifier::UNDERLINED))),
            Line::default(),
            Line::from(vec![
                Span::styled("selected events: ", theme.text_muted_style()),
                Span::styled(app.content.selection_count.to_string(), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("viewport: ", theme.text_muted_style()),
                Span::styled(format!("{}×{} px ({mode})", viewport.width, viewport.height), theme.text_primary_style()),
            ]),
            Line::from(vec![
                Span::styled("theme: ", theme.text_muted_style()),
                Span::styled(app.ctx.theme_definition.label, theme.text_primary_style()),
            ]),
        ];

        let block = th::block(theme, Some("Content"), false);
        frame.render_widget(Paragraph::new(lines).wrap(Wrap { trim: true }).block(block), rect);
    }
}

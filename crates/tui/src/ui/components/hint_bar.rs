//! Hint bar: the single-line strip of key bindings at the bottom of the screen.

use ratatui::{Frame, layout::Rect, text::Line, widgets::Paragraph};

use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::theme_helpers as th;

/// Renders the hint spans collected from the active components plus the
/// global quit binding.
#[derive(Debug, Default)]
pub struct HintBarComponent {
    pub spans: Vec<ratatui::text::Span<'static>>,
}

impl Component for HintBarComponent {
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App) {
        let mut spans = std::mem::take(&mut self.spans);
        spans.extend(th::build_hint_spans(&*app.ctx.theme, &[(" q", " Quit")]));
        let background = th::darken_rgb(app.ctx.theme.roles().background, 0.8);
        frame.render_widget(
            Paragraph::new(Line::from(spans)).style(th::panel_style(&*app.ctx.theme).bg(background)),
            rect,
        );
    }
}

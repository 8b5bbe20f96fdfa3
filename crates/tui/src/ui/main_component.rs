use crossterm::event::{KeyCode, KeyEvent, MouseEvent};
use ratatui::{
    Frame,
    layout::{Constraint, Layout, Rect},
};
use sidenav_types::{Effect, Msg};

use super::components::{Component, ContentComponent, HintBarComponent, SideNavbarComponent};
use crate::app::App;

/// Width of the slot the navbar is laid out in; `sidebar-width` resolves
/// against this.
pub const NAV_SLOT_WIDTH: u16 = 28;

/// Root view: navbar slot on the left, content pane on the right, hint bar
/// along the bottom.
#[derive(Debug, Default)]
pub struct MainView {
    pub nav_bar_view: SideNavbarComponent,
    pub content_view: ContentComponent,
    pub hint_bar_view: HintBarComponent,
    mounted: bool,
}

impl MainView {
    pub fn new() -> Self {
        Self::default()
    }

    /// Attaches the view tree. Idempotent.
    pub fn mount(&mut self, app: &mut App) -> Vec<Effect> {
        if self.mounted {
            return Vec::new();
        }
        self.mounted = true;
        let mut effects = self.nav_bar_view.on_mount(app);
        effects.extend(self.content_view.on_mount(app));
        app.rebuild_focus();
        effects
    }

    /// Detaches the view tree, releasing the navbar's viewport listener.
    pub fn unmount(&mut self, app: &mut App) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        self.mounted = false;
        let mut effects = self.nav_bar_view.on_unmount(app);
        effects.extend(self.content_view.on_unmount(app));
        effects
    }

    pub fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        match key.code {
            KeyCode::Char('q') | KeyCode::Esc => vec![Effect::Quit],
            _ => self.nav_bar_view.handle_key_events(app, key),
        }
    }

    pub fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        self.nav_bar_view.handle_mouse_events(app, mouse)
    }

    /// Delivers a message to every component.
    pub fn handle_message(&mut self, app: &mut App, msg: Msg) -> Vec<Effect> {
        app.update(&msg);
        let mut effects = self.nav_bar_view.handle_message(app, &msg);
        effects.extend(self.content_view.handle_message(app, &msg));
        effects
    }

    pub fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let [body, hints] = Layout::vertical([Constraint::Min(0), Constraint::Length(1)]).areas(area);

        if app.side_navbar.is_hidden() {
            // Still let the navbar clear its hit-testing layout.
            self.nav_bar_view.render(frame, Rect::default(), app);
            self.content_view.render(frame, body, app);
        } else {
            let [nav, content] = Layout::horizontal([Constraint::Length(NAV_SLOT_WIDTH), Constraint::Min(0)]).areas(body);
            self.nav_bar_view.render(frame, nav, app);
            self.content_view.render(frame, content, app);
        }

        self.hint_bar_view.spans = self.nav_bar_view.get_hint_spans(app);
        self.hint_bar_view.render(frame, hints, app);
    }
}

use crossterm::event::{KeyCode, KeyEvent, MouseButton, MouseEvent, MouseEventKind};
use rat_focus::FocusFlag;
use ratatui::{
    Frame,
    layout::Rect,
    text::{Line, Span},
    widgets::Paragraph,
};
use sidenav_types::{Effect, Msg};
use tracing::debug;

use super::SideNavbarState;
use crate::app::App;
use crate::ui::components::Component;
use crate::ui::theme::{ListPosition, StyleHooks, Theme, theme_helpers as th};
use crate::ui::utils::{find_target_index_by_mouse_position, truncate_to_width};

const SELECTED_MARKER: &str = "▌ ";
const HOVER_MARKER: &str = "› ";
const BLANK_MARKER: &str = "  ";

/// The side navigation bar.
///
/// Renders one row per item inside a themed block, marks the selected entries,
/// and turns clicks and `Enter` into `selected` events
/// ([`Effect::NavItemSelected`]). Draws nothing at all while the state reports
/// itself hidden.
#[derive(Debug, Default)]
pub struct SideNavbarComponent;

impl SideNavbarComponent {
    /// Renders `state` into `area`, recording the layout used for hit testing.
    pub fn draw<T: Theme + ?Sized>(
        frame: &mut Frame,
        area: Rect,
        state: &mut SideNavbarState,
        theme: &T,
        hooks: &StyleHooks,
    ) {
        let Some(entries) = state.markup() else {
            state.last_area = Rect::default();
            state.per_item_areas.clear();
            return;
        };

        let nav_area = navbar_area(area, entries.len(), hooks);
        let is_focused = state.container_focus.get();
        let block = th::block(theme, None, is_focused).style(th::navbar_style(hooks));
        let inner = block.inner(nav_area);
        frame.render_widget(block, nav_area);

        let rows = entry_rows(inner, entries.len(), hooks);
        for (index, (entry, row)) in entries.iter().zip(rows.iter()).enumerate() {
            let hovered = state.hovered_index == Some(index);
            let marker = if entry.selected {
                SELECTED_MARKER
            } else if hovered {
                HOVER_MARKER
            } else {
                BLANK_MARKER
            };
            let entry_style = th::nav_entry_style(hooks, entry.selected, hovered);
            let label = truncate_to_width(&entry.label, usize::from(row.width.saturating_sub(2)));
            let line = Line::from(vec![
                Span::styled(marker, th::nav_marker_style(hooks, entry.selected, hovered)),
                Span::styled(label, entry_style),
            ]);
            frame.render_widget(Paragraph::new(line).style(entry_style), *row);
        }

        state.last_area = nav_area;
        state.per_item_areas = rows;
    }

    fn focus_entry(app: &mut App, flag: Option<FocusFlag>) {
        let state = &mut app.side_navbar;
        state.hovered_index = state.focused_index();
        if let Some(flag) = flag {
            app.focus.focus(&flag);
        }
    }
}

impl Component for SideNavbarComponent {
    fn on_mount(&mut self, app: &mut App) -> Vec<Effect> {
        app.side_navbar.attach(&app.viewport);
        Vec::new()
    }

    fn on_unmount(&mut self, app: &mut App) -> Vec<Effect> {
        app.side_navbar.detach();
        Vec::new()
    }

    fn handle_message(&mut self, app: &mut App, msg: &Msg) -> Vec<Effect> {
        if matches!(msg, Msg::Resize(..) | Msg::Tick) && app.side_navbar.sync_viewport() {
            debug!(mobile = app.side_navbar.mobile(), "side navbar mobile mode changed");
            app.side_navbar.hovered_index = None;
        }
        Vec::new()
    }

    fn handle_key_events(&mut self, app: &mut App, key: KeyEvent) -> Vec<Effect> {
        if app.side_navbar.is_hidden() {
            return Vec::new();
        }
        let mut effects = Vec::new();
        match key.code {
            KeyCode::Down => {
                let flag = app.side_navbar.cycle_focus(true);
                Self::focus_entry(app, flag);
            }
            KeyCode::Up => {
                let flag = app.side_navbar.cycle_focus(false);
                Self::focus_entry(app, flag);
            }
            KeyCode::Home => {
                let flag = app.side_navbar.focus_index(0);
                Self::focus_entry(app, flag);
            }
            KeyCode::End => {
                let last = app.side_navbar.nav_items().len().saturating_sub(1);
                let flag = app.side_navbar.focus_index(last);
                Self::focus_entry(app, flag);
            }
            KeyCode::Enter => {
                if let Some(label) = app.side_navbar.focused_label().map(str::to_string) {
                    effects.push(app.side_navbar.select(label));
                }
            }
            _ => {}
        }
        effects
    }

    fn handle_mouse_events(&mut self, app: &mut App, mouse: MouseEvent) -> Vec<Effect> {
        if app.side_navbar.is_hidden() {
            return Vec::new();
        }
        let SideNavbarState {
            last_area, per_item_areas, ..
        } = &app.side_navbar;
        let target = find_target_index_by_mouse_position(last_area, per_item_areas, mouse.column, mouse.row);

        let mut effects = Vec::new();
        match mouse.kind {
            MouseEventKind::Down(MouseButton::Left) => {
                if let Some(index) = target {
                    if let Some(label) = app.side_navbar.nav_items().get(index).cloned() {
                        effects.push(app.side_navbar.select(label));
                    }
                    let flag = app.side_navbar.focus_index(index);
                    Self::focus_entry(app, flag);
                }
            }
            MouseEventKind::Moved => app.side_navbar.hovered_index = target,
            _ => {}
        }
        effects
    }

    fn render(&mut self, frame: &mut Frame, area: Rect, app: &mut App) {
        let App { ctx, side_navbar, .. } = app;
        Self::draw(frame, area, side_navbar, &*ctx.theme, &ctx.style_hooks);
    }

    fn get_hint_spans(&self, app: &App) -> Vec<Span<'static>> {
        if app.side_navbar.is_hidden() {
            return Vec::new();
        }
        th::build_hint_spans(&*app.ctx.theme, &[(" ↑/↓", " Navigate"), (" Enter", " Select")])
    }
}

/// Area the navbar occupies inside its slot, sized by the width and
/// min-height hooks.
fn navbar_area(slot: Rect, entry_count: usize, hooks: &StyleHooks) -> Rect {
    let width = hooks.sidebar_width.resolve(slot.width);
    let height = match hooks.sidebar_min_height {
        None => slot.height,
        Some(min_height) => {
            let needed = u16::try_from(entry_count).unwrap_or(u16::MAX).saturating_add(hooks.padding_top).saturating_add(2);
            min_height.max(needed).min(slot.height)
        }
    };
    Rect { width, height, ..slot }
}

/// One-row areas for as many entries as fit, anchored per the position hook.
fn entry_rows(inner: Rect, entry_count: usize, hooks: &StyleHooks) -> Vec<Rect> {
    let padding = hooks.padding_top.min(inner.height);
    let available = inner.height - padding;
    let visible = u16::try_from(entry_count).unwrap_or(u16::MAX).min(available);
    let offset = match hooks.position {
        ListPosition::Start => 0,
        ListPosition::Center => (available - visible) / 2,
        ListPosition::End => available - visible,
    };
    let top = inner.y + padding + offset;
    (0..visible).map(|i| Rect::new(inner.x, top + i, inner.width, 1)).collect()
}

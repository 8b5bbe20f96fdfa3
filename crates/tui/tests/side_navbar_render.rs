use std::sync::Arc;

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::{Terminal, backend::TestBackend, buffer::Buffer};
use sidenav_tui::ui::components::side_navbar::{SideNavbarComponent, SideNavbarState};
use sidenav_tui::ui::main_component::MainView;
use sidenav_tui::ui::theme::{PaletteTheme, StyleHooks};
use sidenav_tui::ui::viewport::ViewportSignal;
use sidenav_tui::{App, NavbarOptions};
use sidenav_types::{Effect, Msg, Viewport};
use sidenav_util::NavbarSettings;

const WIDTH: u16 = 30;
const HEIGHT: u16 = 12;

fn render_navbar(state: &mut SideNavbarState) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(WIDTH, HEIGHT)).expect("test terminal");
    let theme = PaletteTheme::dracula();
    let hooks = StyleHooks::from_theme(&theme);
    terminal
        .draw(|frame| {
            let area = frame.area();
            SideNavbarComponent::draw(frame, area, state, &theme, &hooks);
        })
        .expect("draw navbar");
    terminal.backend().buffer().clone()
}

fn row_text(buffer: &Buffer, y: u16) -> String {
    (0..buffer.area.width).map(|x| buffer[(x, y)].symbol()).collect()
}

fn rows_containing<'a>(buffer: &Buffer, labels: &[&'a str]) -> Vec<(&'a str, u16)> {
    let mut found = Vec::new();
    for y in 0..buffer.area.height {
        let text = row_text(buffer, y);
        for label in labels {
            if text.contains(label) {
                found.push((*label, y));
            }
        }
    }
    found
}

#[test]
fn default_navbar_lists_four_entries_with_components_selected() {
    let mut state = SideNavbarState::default();
    let buffer = render_navbar(&mut state);

    let labels = ["Home", "Components", "Documentation", "Get started"];
    let found = rows_containing(&buffer, &labels);
    let order: Vec<&str> = found.iter().map(|(label, _)| *label).collect();
    assert_eq!(order, labels);

    for (label, y) in found {
        let text = row_text(&buffer, y);
        assert_eq!(text.contains('▌'), label == "Components", "row for {label}: {text:?}");
    }
    assert_eq!(state.per_item_areas.len(), 4);
}

#[test]
fn hidden_navbar_draws_nothing() {
    let signal = ViewportSignal::new(Viewport::new(500, 800));
    let mut state = SideNavbarState::default();
    state.attach(&signal);

    let buffer = render_navbar(&mut state);
    assert!(buffer.content().iter().all(|cell| cell.symbol() == " "));
    assert!(state.per_item_areas.is_empty());
}

#[test]
fn mobile_viewport_still_renders_when_not_hiding() {
    let signal = ViewportSignal::new(Viewport::new(500, 800));
    let mut state = SideNavbarState::default().with_hide_on_mobile(false);
    state.attach(&signal);

    let buffer = render_navbar(&mut state);
    assert_eq!(rows_containing(&buffer, &["Home", "Components", "Documentation", "Get started"]).len(), 4);
}

#[test]
fn selecting_home_moves_the_marker() {
    let mut state = SideNavbarState::default();
    assert_eq!(state.select("Home"), Effect::NavItemSelected("Home".into()));

    let buffer = render_navbar(&mut state);
    for (label, y) in rows_containing(&buffer, &["Home", "Components"]) {
        assert_eq!(row_text(&buffer, y).contains('▌'), label == "Home");
    }
}

#[test]
fn rendering_is_idempotent() {
    let mut state = SideNavbarState::default();
    let first = render_navbar(&mut state);
    let second = render_navbar(&mut state);
    assert_eq!(first, second);
}

fn test_app(width_px: u32) -> App {
    App::new(&NavbarOptions::default(), Arc::new(NavbarSettings::ephemeral()), Viewport::new(width_px, 800))
}

fn draw_main(main_view: &mut MainView, app: &mut App) -> Buffer {
    let mut terminal = Terminal::new(TestBackend::new(80, HEIGHT)).expect("test terminal");
    terminal.draw(|frame| main_view.render(frame, frame.area(), app)).expect("draw main view");
    terminal.backend().buffer().clone()
}

#[test]
fn clicking_an_entry_bubbles_a_selected_event_to_the_content_pane() {
    let mut app = test_app(1280);
    let mut main_view = MainView::new();
    main_view.mount(&mut app);
    draw_main(&mut main_view, &mut app);

    let home_row = app.side_navbar.per_item_areas[0];
    let click = MouseEvent {
        kind: MouseEventKind::Down(MouseButton::Left),
        column: home_row.x + 2,
        row: home_row.y,
        modifiers: KeyModifiers::NONE,
    };
    let effects = main_view.handle_mouse_events(&mut app, click);
    assert_eq!(effects, vec![Effect::NavItemSelected("Home".into())]);
    assert_eq!(app.side_navbar.selected_item(), "Home");

    main_view.handle_message(&mut app, Msg::NavItemSelected("Home".into()));
    assert_eq!(app.content.last_selected.as_deref(), Some("Home"));
    assert_eq!(app.content.selection_count, 1);
    assert_eq!(app.ctx.settings.selected_item().as_deref(), Some("Home"));
}

#[test]
fn keyboard_navigation_selects_the_focused_entry() {
    let mut app = test_app(1280);
    let mut main_view = MainView::new();
    main_view.mount(&mut app);

    let down = KeyEvent::new(KeyCode::Down, KeyModifiers::NONE);
    let enter = KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE);
    assert!(main_view.handle_key_events(&mut app, down).is_empty());
    let effects = main_view.handle_key_events(&mut app, enter);
    assert_eq!(effects, vec![Effect::NavItemSelected("Documentation".into())]);

    let quit = KeyEvent::new(KeyCode::Char('q'), KeyModifiers::NONE);
    assert_eq!(main_view.handle_key_events(&mut app, quit), vec![Effect::Quit]);
}

#[test]
fn resizing_below_the_breakpoint_collapses_the_navbar() {
    let mut app = test_app(1280);
    let mut main_view = MainView::new();
    main_view.mount(&mut app);
    assert_eq!(app.viewport.listener_count(), 1);

    app.viewport.publish(Viewport::new(927, 800));
    main_view.handle_message(&mut app, Msg::Resize(115, 50));
    assert!(app.side_navbar.mobile());

    let buffer = draw_main(&mut main_view, &mut app);
    assert!(rows_containing(&buffer, &["Get started"]).is_empty());
    assert!(app.side_navbar.per_item_areas.is_empty());

    app.viewport.publish(Viewport::new(928, 800));
    main_view.handle_message(&mut app, Msg::Resize(116, 50));
    assert!(!app.side_navbar.mobile());

    main_view.unmount(&mut app);
    assert_eq!(app.viewport.listener_count(), 0);
}

fn press(main_view: &mut MainView, app: &mut App, code: KeyCode) -> Vec<Effect> {
    main_view.handle_key_events(app, KeyEvent::new(code, KeyModifiers::NONE))
}

fn mouse(kind: MouseEventKind, column: u16, row: u16) -> MouseEvent {
    MouseEvent {
        kind,
        column,
        row,
        modifiers: KeyModifiers::NONE,
    }
}

#[test]
fn enter_after_launch_selects_the_configured_entry() {
    let options = NavbarOptions {
        selected_item: Some("Home".into()),
        ..NavbarOptions::default()
    };
    let mut app = App::new(&options, Arc::new(NavbarSettings::ephemeral()), Viewport::new(1280, 800));
    let mut main_view = MainView::new();
    main_view.mount(&mut app);

    assert_eq!(app.side_navbar.focused_label(), Some("Home"));
    assert_eq!(press(&mut main_view, &mut app, KeyCode::Enter), vec![Effect::NavItemSelected("Home".into())]);
}

#[test]
fn hidden_navbar_ignores_keys_and_mouse() {
    let mut app = test_app(500);
    let mut main_view = MainView::new();
    main_view.mount(&mut app);
    draw_main(&mut main_view, &mut app);
    assert!(app.side_navbar.is_hidden());

    for code in [KeyCode::Down, KeyCode::Up, KeyCode::Home, KeyCode::End, KeyCode::Enter] {
        assert!(press(&mut main_view, &mut app, code).is_empty(), "{code:?}");
    }
    assert_eq!(app.side_navbar.focused_label(), Some("Components"));

    let click = mouse(MouseEventKind::Down(MouseButton::Left), 3, 2);
    assert!(main_view.handle_mouse_events(&mut app, click).is_empty());
    main_view.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, 3, 2));
    assert_eq!(app.side_navbar.hovered_index, None);
    assert_eq!(app.side_navbar.selected_item(), "Components");
}

#[test]
fn pointer_motion_tracks_the_hovered_entry() {
    let mut app = test_app(1280);
    let mut main_view = MainView::new();
    main_view.mount(&mut app);
    draw_main(&mut main_view, &mut app);

    let documentation = app.side_navbar.per_item_areas[2];
    let effects = main_view.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, documentation.x + 3, documentation.y));
    assert!(effects.is_empty());
    assert_eq!(app.side_navbar.hovered_index, Some(2));

    let buffer = draw_main(&mut main_view, &mut app);
    assert!(row_text(&buffer, documentation.y).contains('›'));

    main_view.handle_mouse_events(&mut app, mouse(MouseEventKind::Moved, 60, documentation.y));
    assert_eq!(app.side_navbar.hovered_index, None);
    assert_eq!(app.side_navbar.selected_item(), "Components");
}

#[test]
fn home_and_end_jump_to_the_ends_of_the_list() {
    let mut app = test_app(1280);
    let mut main_view = MainView::new();
    main_view.mount(&mut app);

    assert!(press(&mut main_view, &mut app, KeyCode::End).is_empty());
    assert_eq!(app.side_navbar.focused_label(), Some("Get started"));
    assert_eq!(app.side_navbar.hovered_index, Some(3));

    assert!(press(&mut main_view, &mut app, KeyCode::Home).is_empty());
    assert_eq!(app.side_navbar.focused_label(), Some("Home"));
    assert_eq!(press(&mut main_view, &mut app, KeyCode::Enter), vec![Effect::NavItemSelected("Home".into())]);
}

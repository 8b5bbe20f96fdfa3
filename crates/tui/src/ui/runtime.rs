//! Runtime: event loop and input routing for the TUI.
//!
//! Responsibilities
//! - Own the terminal lifecycle (enter/leave alternate screen, raw mode, mouse capture).
//! - Mount the view tree before the first frame and unmount it on exit, so the
//!   navbar's viewport listener is released with the view.
//! - Publish terminal resizes on the app's `ViewportSignal`.
//! - Route keys and mouse events to components and execute returned `Effect`s.
//! - Render after every handled event.
//!
//! Input comes from a dedicated OS thread that blocks on `crossterm::event`
//! and forwards events over a Tokio channel.

use std::sync::Arc;
use std::time::{Duration, Instant};

use anyhow::{Context, Result};
use crossterm::{
    event::{self, DisableMouseCapture, EnableMouseCapture, Event, KeyCode, KeyEventKind, KeyModifiers, MouseEventKind},
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use ratatui::{Terminal, prelude::*};
use sidenav_types::{Effect, Msg};
use sidenav_util::NavbarSettings;
use tokio::{
    signal,
    sync::mpsc,
    time::{self, MissedTickBehavior},
};
use tracing::{info, warn};

use crate::app::{App, NavbarOptions};
use crate::ui::main_component::MainView;
use crate::ui::viewport::measure_viewport;

const IDLE_TICK: Duration = Duration::from_millis(5000);
const INPUT_POLL: Duration = Duration::from_millis(16);

/// Spawn a dedicated input thread that blocks on terminal input and forwards
/// `crossterm` events over a Tokio channel.
fn spawn_input_thread() -> Result<mpsc::Receiver<Event>> {
    let (sender, receiver) = mpsc::channel(500);
    std::thread::Builder::new()
        .name("sidenav-input".to_string())
        .spawn(move || {
            let mut last_mouse_move = Instant::now();
            loop {
                match event::poll(INPUT_POLL) {
                    Ok(false) => continue,
                    Ok(true) => {}
                    Err(error) => {
                        warn!("Failed to poll events: {}", error);
                        break;
                    }
                }
                match event::read() {
                    Ok(event) => {
                        // Throttle mouse moves to one per poll interval.
                        let is_mouse_move = event.as_mouse_event().is_some_and(|mouse| mouse.kind == MouseEventKind::Moved);
                        if is_mouse_move {
                            if last_mouse_move.elapsed() < INPUT_POLL {
                                continue;
                            }
                            last_mouse_move = Instant::now();
                        }
                        if sender.blocking_send(event).is_err() {
                            break;
                        }
                    }
                    Err(error) => {
                        warn!("Failed to read event: {}", error);
                        break;
                    }
                }
            }
        })
        .context("failed to spawn input thread")?;
    Ok(receiver)
}

/// Put the terminal into raw mode and enter the alternate screen.
fn setup_terminal() -> Result<Terminal<CrosstermBackend<std::io::Stdout>>> {
    enable_raw_mode()?;
    let mut stdout = std::io::stdout();
    execute!(stdout, EnterAlternateScreen, EnableMouseCapture)?;
    let backend = CrosstermBackend::new(stdout);
    let terminal = Terminal::new(backend)?;
    Ok(terminal)
}

/// Restore terminal settings and leave the alternate screen.
fn cleanup_terminal(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>) -> Result<()> {
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen, DisableMouseCapture)?;
    terminal.show_cursor()?;
    Ok(())
}

fn render(terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>, app: &mut App, main_view: &mut MainView) -> Result<()> {
    app.rebuild_focus();
    terminal.draw(|frame| main_view.render(frame, frame.area(), app))?;
    Ok(())
}

/// Handle raw crossterm input events and update `App`/components.
fn handle_input_event(app: &mut App, main_view: &mut MainView, input_event: Event) -> Vec<Effect> {
    match input_event {
        Event::Key(key_event) if key_event.kind == KeyEventKind::Press => main_view.handle_key_events(app, key_event),
        Event::Mouse(mouse_event) => main_view.handle_mouse_events(app, mouse_event),
        Event::Resize(width, height) => publish_resize(app, main_view, width, height),
        _ => Vec::new(),
    }
}

fn publish_resize(app: &mut App, main_view: &mut MainView, width: u16, height: u16) -> Vec<Effect> {
    app.viewport.publish(measure_viewport(width, height));
    main_view.handle_message(app, Msg::Resize(width, height))
}

/// Runs effects until none are left. Returns `true` when the app should quit.
fn process_effects(app: &mut App, main_view: &mut MainView, mut effects: Vec<Effect>) -> bool {
    while !effects.is_empty() {
        let mut follow_up = Vec::new();
        for effect in effects {
            match effect {
                Effect::NavItemSelected(label) => {
                    info!(label = %label, "selected");
                    follow_up.extend(main_view.handle_message(app, Msg::NavItemSelected(label)));
                }
                Effect::Quit => return true,
            }
        }
        effects = follow_up;
    }
    false
}

/// Entry point for the TUI runtime: sets up the terminal, mounts the view,
/// runs the event loop, and restores the terminal on exit.
pub async fn run_app(options: NavbarOptions, settings: Arc<NavbarSettings>) -> Result<()> {
    let (columns, rows) = crossterm::terminal::size().context("failed to read terminal size")?;
    let mut app = App::new(&options, settings, measure_viewport(columns, rows));
    let mut main_view = MainView::new();

    let mut input_receiver = spawn_input_thread()?;
    let mut terminal = setup_terminal()?;

    let outcome = event_loop(&mut terminal, &mut app, &mut main_view, &mut input_receiver, (columns, rows)).await;

    main_view.unmount(&mut app);
    cleanup_terminal(&mut terminal)?;
    outcome
}

async fn event_loop(
    terminal: &mut Terminal<CrosstermBackend<std::io::Stdout>>,
    app: &mut App,
    main_view: &mut MainView,
    input_receiver: &mut mpsc::Receiver<Event>,
    initial_size: (u16, u16),
) -> Result<()> {
    let effects = main_view.mount(app);
    if process_effects(app, main_view, effects) {
        return Ok(());
    }

    let mut ticker = time::interval(IDLE_TICK);
    ticker.set_missed_tick_behavior(MissedTickBehavior::Delay);

    // Track the last known terminal size to synthesize resizes when some
    // terminals fail to emit them.
    let mut last_size = initial_size;

    render(terminal, app, main_view)?;

    loop {
        let effects = tokio::select! {
            maybe_event = input_receiver.recv() => {
                let Some(event) = maybe_event else {
                    // Input channel closed; shut down cleanly.
                    break;
                };
                if let Event::Key(key_event) = event
                    && key_event.code == KeyCode::Char('c')
                    && key_event.modifiers.contains(KeyModifiers::CONTROL)
                {
                    break;
                }
                if let Event::Resize(width, height) = event {
                    last_size = (width, height);
                }
                handle_input_event(app, main_view, event)
            }
            _ = ticker.tick() => main_view.handle_message(app, Msg::Tick),
            _ = signal::ctrl_c() => break,
        };

        if process_effects(app, main_view, effects) {
            break;
        }

        if let Ok(size) = crossterm::terminal::size()
            && size != last_size
        {
            last_size = size;
            let effects = publish_resize(app, main_view, size.0, size.1);
            if process_effects(app, main_view, effects) {
                break;
            }
        }

        render(terminal, app, main_view)?;
    }
    Ok(())
}

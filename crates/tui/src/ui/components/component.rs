//! Component system for the sidenav TUI.
//!
//! Components are self-contained UI elements that handle their own events and
//! rendering while integrating with the application through a consistent
//! interface.

use crossterm::event::{KeyEvent, MouseEvent};
use ratatui::Frame;
use ratatui::layout::Rect;
use ratatui::text::Span;
use sidenav_types::{Effect, Msg};

use crate::app::App;

/// A trait representing a UI component with its own behavior.
///
/// Components handle localized events, update state, and render themselves
/// into a provided `Rect`, reporting side effects back to the runtime as
/// `Effect`s rather than acting on them directly.
///
/// # Component Lifecycle
///
/// 1. **Mount**: `on_mount()` runs once when the component joins the view tree
/// 2. **Event Handling**: `handle_key_events()`, `handle_mouse_events()`, `handle_message()`
/// 3. **Rendering**: `render()` draws the component into the provided frame area
/// 4. **Unmount**: `on_unmount()` releases anything acquired in `on_mount()`
pub trait Component {
    /// Called once when the component is attached to the view tree.
    fn on_mount(&mut self, _app: &mut App) -> Vec<Effect> {
        Vec::new()
    }

    /// Called when the component is removed from the view tree.
    fn on_unmount(&mut self, _app: &mut App) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle an application-level message the component cares about.
    fn handle_message(&mut self, _app: &mut App, _msg: &Msg) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle key events when this component has focus.
    fn handle_key_events(&mut self, _app: &mut App, _key: KeyEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Handle mouse events routed to this component.
    fn handle_mouse_events(&mut self, _app: &mut App, _mouse: MouseEvent) -> Vec<Effect> {
        Vec::new()
    }

    /// Render the component into the given area.
    ///
    /// Implementations should be side-effect free except for frame drawing and
    /// recording layout used for hit testing.
    fn render(&mut self, frame: &mut Frame, rect: Rect, app: &mut App);

    /// Key hints shown in the footer while this component is active.
    fn get_hint_spans(&self, _app: &App) -> Vec<Span<'static>> {
        Vec::new()
    }
}

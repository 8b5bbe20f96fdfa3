//! Collapsible side navigation bar.
//!
//! A vertical list of selectable labels that:
//! - marks every entry whose label equals the selected item
//! - hides itself entirely on mobile-sized viewports when `hide_on_mobile` is set
//! - follows viewport changes while attached to a [`ViewportSignal`](crate::ui::viewport::ViewportSignal)
//! - emits a `selected` event ([`Effect::NavItemSelected`](sidenav_types::Effect)) on click or `Enter`
//!
//! # Usage
//!
//! ```ignore
//! use sidenav_tui::ui::components::side_navbar::SideNavbarState;
//! use sidenav_tui::ui::viewport::ViewportSignal;
//!
//! let signal = ViewportSignal::new(Viewport::new(1280, 800));
//! let mut state = SideNavbarState::default();
//! state.attach(&signal);
//! let effect = state.select("Home");
//! ```

mod side_navbar_component;
mod state;

pub use side_navbar_component::SideNavbarComponent;
pub use state::{DEFAULT_NAV_ITEMS, DEFAULT_SELECTED_ITEM, NavEntry, SideNavbarState};

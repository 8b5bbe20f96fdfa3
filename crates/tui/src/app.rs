//! Application state for the sidenav TUI.
//!
//! `App` is the central state container: the shared context (theme, style
//! hooks, settings), the navbar and content pane states, the process-wide
//! viewport signal, and the focus tree.

use std::sync::Arc;

use rat_focus::{Focus, FocusBuilder};
use sidenav_types::{Msg, Viewport};
use sidenav_util::NavbarSettings;
use tracing::{debug, warn};

use crate::ui::components::content::ContentState;
use crate::ui::components::side_navbar::{DEFAULT_NAV_ITEMS, SideNavbarState};
use crate::ui::theme::{self, StyleHooks, Theme, ThemeDefinition};
use crate::ui::viewport::ViewportSignal;

/// Navbar options supplied by the caller (typically CLI flags).
///
/// Unset fields fall back to the settings file, then to built-in defaults.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NavbarOptions {
    pub hide_on_mobile: Option<bool>,
    pub nav_items: Option<Vec<String>>,
    pub selected_item: Option<String>,
    pub theme: Option<String>,
}

impl NavbarOptions {
    /// Builds navbar state from these options layered over `settings`.
    pub fn resolve_state(&self, settings: &NavbarSettings) -> SideNavbarState {
        let nav_items = self
            .nav_items
            .clone()
            .or_else(|| settings.nav_items())
            .unwrap_or_else(|| DEFAULT_NAV_ITEMS.iter().map(|label| label.to_string()).collect());
        let mut state = SideNavbarState::new(nav_items);
        if let Some(hide_on_mobile) = self.hide_on_mobile.or_else(|| settings.hide_on_mobile()) {
            state.set_hide_on_mobile(hide_on_mobile);
        }
        if let Some(selected) = self.selected_item.clone().or_else(|| settings.selected_item()) {
            state.set_selected_item(selected);
        }
        state
    }

    /// Theme name to load: the explicit option first, then the saved preference.
    pub fn theme_name(&self, settings: &NavbarSettings) -> Option<String> {
        self.theme.clone().or_else(|| settings.preferred_theme())
    }
}

/// Cross-cutting shared context owned by the App.
#[derive(Debug)]
pub struct SharedCtx {
    pub theme: Box<dyn Theme>,
    /// Catalog entry the theme was built from
    pub theme_definition: &'static ThemeDefinition,
    /// Resolved style hooks (theme defaults plus settings overrides)
    pub style_hooks: StyleHooks,
    pub settings: Arc<NavbarSettings>,
}

impl SharedCtx {
    pub fn new(theme_name: Option<&str>, settings: Arc<NavbarSettings>) -> Self {
        let loaded = theme::load(theme_name);
        let mut style_hooks = StyleHooks::from_theme(&*loaded.theme);
        let overrides = settings.style_overrides();
        let rejected = style_hooks.apply_overrides(overrides.iter().map(|(hook, value)| (hook.as_str(), value.as_str())));
        if !rejected.is_empty() {
            warn!(count = rejected.len(), "some style overrides were ignored");
        }
        debug!(theme = loaded.definition.id, "theme loaded");
        Self {
            theme: loaded.theme,
            theme_definition: loaded.definition,
            style_hooks,
            settings,
        }
    }
}

/// The main application state.
#[derive(Debug)]
pub struct App {
    pub ctx: SharedCtx,
    pub side_navbar: SideNavbarState,
    pub content: ContentState,
    pub viewport: ViewportSignal,
    pub focus: Focus,
}

impl App {
    pub fn new(options: &NavbarOptions, settings: Arc<NavbarSettings>, viewport: Viewport) -> Self {
        let theme_name = options.theme_name(&settings);
        let side_navbar = options.resolve_state(&settings);
        let ctx = SharedCtx::new(theme_name.as_deref(), settings);
        let focus = FocusBuilder::build_for(&side_navbar);
        Self {
            ctx,
            side_navbar,
            content: ContentState::default(),
            viewport: ViewportSignal::new(viewport),
            focus,
        }
    }

    /// Rebuilds the focus tree so structural changes are reflected.
    pub fn rebuild_focus(&mut self) {
        let old_focus = std::mem::take(&mut self.focus);
        self.focus = FocusBuilder::rebuild_for(&self.side_navbar, Some(old_focus));
    }

    /// App-level reaction to runtime messages.
    pub fn update(&mut self, msg: &Msg) {
        if let Msg::NavItemSelected(label) = msg
            && let Err(error) = self.ctx.settings.set_selected_item(Some(label.clone()))
        {
            warn!(%error, "failed to remember navbar selection");
        }
    }
}

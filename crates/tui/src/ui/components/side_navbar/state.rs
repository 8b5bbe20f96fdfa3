use rat_focus::{FocusBuilder, FocusFlag, HasFocus};
use ratatui::layout::Rect;
use serde::Serialize;
use sidenav_types::{Effect, MOBILE_BREAKPOINT_PX, Viewport};
use tracing::{debug, info};

use crate::ui::viewport::{ViewportSignal, ViewportSubscription};

/// Labels shown when no items are configured.
pub const DEFAULT_NAV_ITEMS: [&str; 4] = ["Home", "Components", "Documentation", "Get started"];

/// Label selected when no selection is configured.
pub const DEFAULT_SELECTED_ITEM: &str = "Components";

/// One rendered entry of the navbar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct NavEntry {
    pub label: String,
    /// Whether the entry carries the selected marker.
    pub selected: bool,
}

/// State for the side navigation bar.
///
/// Holds the four public options (`hide_on_mobile`, `mobile`, `nav_items`,
/// `selected_item`) plus interaction state: rat-focus flags for each entry,
/// the hovered entry, the last rendered layout for hit testing, and the
/// viewport subscription held while the navbar is attached.
///
/// None of the setters validate their input. A `selected_item` that is not one
/// of the `nav_items` simply marks no entry.
#[derive(Debug)]
pub struct SideNavbarState {
    hide_on_mobile: bool,
    mobile: bool,
    nav_items: Vec<String>,
    selected_item: String,
    /// Focus flag for the container in the focus tree.
    pub container_focus: FocusFlag,
    /// Focus flags for each entry; kept in sync with `nav_items` length.
    pub item_focus_flags: Vec<FocusFlag>,
    /// Entry currently under the mouse pointer.
    pub hovered_index: Option<usize>,
    /// Last rendered area of the navbar; empty while hidden.
    pub last_area: Rect,
    /// Last rendered row of each visible entry, in entry order.
    pub per_item_areas: Vec<Rect>,
    viewport: Option<ViewportSubscription>,
}

impl Default for SideNavbarState {
    fn default() -> Self {
        Self::new(DEFAULT_NAV_ITEMS.iter().map(|label| label.to_string()).collect())
    }
}

impl SideNavbarState {
    /// Creates a navbar with the given items and default options.
    pub fn new(nav_items: Vec<String>) -> Self {
        let mut state = Self {
            hide_on_mobile: true,
            mobile: false,
            nav_items,
            selected_item: DEFAULT_SELECTED_ITEM.to_string(),
            container_focus: FocusFlag::new().with_name("nav.side"),
            item_focus_flags: Vec::new(),
            hovered_index: None,
            last_area: Rect::default(),
            per_item_areas: Vec::new(),
            viewport: None,
        };
        state.rebuild_item_focus_flags();
        state
    }

    pub fn with_hide_on_mobile(mut self, hide_on_mobile: bool) -> Self {
        self.hide_on_mobile = hide_on_mobile;
        self
    }

    pub fn with_selected_item(mut self, label: impl Into<String>) -> Self {
        self.set_selected_item(label);
        self
    }

    pub fn hide_on_mobile(&self) -> bool {
        self.hide_on_mobile
    }

    pub fn mobile(&self) -> bool {
        self.mobile
    }

    pub fn nav_items(&self) -> &[String] {
        &self.nav_items
    }

    pub fn selected_item(&self) -> &str {
        &self.selected_item
    }

    pub fn set_hide_on_mobile(&mut self, hide_on_mobile: bool) {
        self.hide_on_mobile = hide_on_mobile;
    }

    /// Overrides the computed mobile flag. The next resize recomputes it.
    pub fn set_mobile(&mut self, mobile: bool) {
        self.mobile = mobile;
    }

    /// Replaces the item list. Duplicates are kept as-is.
    pub fn set_nav_items(&mut self, nav_items: Vec<String>) {
        self.nav_items = nav_items;
        self.hovered_index = None;
        self.per_item_areas.clear();
        self.rebuild_item_focus_flags();
    }

    /// Sets the selection without emitting a `selected` event. Keyboard focus
    /// follows to the first matching entry, if any.
    pub fn set_selected_item(&mut self, label: impl Into<String>) {
        self.selected_item = label.into();
        self.focus_selected();
    }

    /// `true` when nothing should be rendered.
    pub fn is_hidden(&self) -> bool {
        self.mobile && self.hide_on_mobile
    }

    /// Attaches the navbar to a viewport signal.
    ///
    /// Reads the current viewport to initialize `mobile`, then listens for
    /// further changes. Attaching again replaces the previous subscription, so
    /// an instance never holds more than one listener.
    pub fn attach(&mut self, signal: &ViewportSignal) {
        self.on_resize(signal.current());
        self.viewport = Some(signal.subscribe());
        debug!(mobile = self.mobile, "side navbar attached");
    }

    /// Releases the viewport subscription. Returns `false` when not attached.
    pub fn detach(&mut self) -> bool {
        let was_attached = self.viewport.take().is_some();
        if was_attached {
            debug!("side navbar detached");
        }
        was_attached
    }

    pub fn is_attached(&self) -> bool {
        self.viewport.is_some()
    }

    /// Applies the latest published viewport, if any. Returns `true` when the
    /// mobile flag changed.
    pub fn sync_viewport(&mut self) -> bool {
        let Some(viewport) = self.viewport.as_mut().and_then(ViewportSubscription::take_change) else {
            return false;
        };
        let before = self.mobile;
        self.on_resize(viewport);
        before != self.mobile
    }

    /// Recomputes `mobile` from a viewport width.
    pub fn on_resize(&mut self, viewport: Viewport) {
        if viewport.width < MOBILE_BREAKPOINT_PX {
            self.mobile = true;
        }
        if viewport.width >= MOBILE_BREAKPOINT_PX {
            self.mobile = false;
        }
    }

    /// Selects `label` and returns the `selected` event carrying it.
    ///
    /// The label is not checked against the item list.
    pub fn select(&mut self, label: impl Into<String>) -> Effect {
        let label = label.into();
        info!(label = %label, "nav item selected");
        self.selected_item = label.clone();
        Effect::NavItemSelected(label)
    }

    /// Derives the rendered entries from the current state.
    ///
    /// Returns `None` when the navbar is hidden; otherwise one entry per item in
    /// order, each marked when its label equals the selected item.
    pub fn markup(&self) -> Option<Vec<NavEntry>> {
        if self.is_hidden() {
            return None;
        }
        Some(
            self.nav_items
                .iter()
                .map(|label| NavEntry {
                    label: label.clone(),
                    selected: *label == self.selected_item,
                })
                .collect(),
        )
    }

    /// Index of the entry holding keyboard focus.
    pub fn focused_index(&self) -> Option<usize> {
        self.item_focus_flags.iter().position(FocusFlag::get)
    }

    /// Moves keyboard focus to `index`.
    pub fn focus_index(&mut self, index: usize) -> Option<FocusFlag> {
        if index >= self.item_focus_flags.len() {
            return None;
        }
        for (i, flag) in self.item_focus_flags.iter().enumerate() {
            flag.set(i == index);
        }
        self.item_focus_flags.get(index).cloned()
    }

    /// Moves focus one entry forward or backward, wrapping at either end.
    ///
    /// Without a focused entry, forward starts at the first entry and backward
    /// at the last.
    pub fn cycle_focus(&mut self, forward: bool) -> Option<FocusFlag> {
        let len = self.item_focus_flags.len();
        if len == 0 {
            return None;
        }
        let next = match self.focused_index() {
            Some(index) if forward => (index + 1) % len,
            Some(index) => (index + len - 1) % len,
            None if forward => 0,
            None => len - 1,
        };
        self.focus_index(next)
    }

    /// Label of the focused entry.
    pub fn focused_label(&self) -> Option<&str> {
        self.focused_index().and_then(|index| self.nav_items.get(index)).map(String::as_str)
    }

    /// Keeps one focus flag per item and moves focus to the first selected entry.
    fn rebuild_item_focus_flags(&mut self) {
        self.item_focus_flags = (0..self.nav_items.len())
            .map(|i| FocusFlag::new().with_name(&format!("nav.side.item.{i}")))
            .collect();
        self.focus_selected();
    }

    fn focus_selected(&mut self) {
        if let Some(index) = self.nav_items.iter().position(|label| *label == self.selected_item) {
            self.focus_index(index);
        }
    }
}

impl HasFocus for SideNavbarState {
    /// Builds a focus subtree consisting of each entry as a leaf under the
    /// container focus flag.
    fn build(&self, builder: &mut FocusBuilder) {
        let tag = builder.start(self);
        for flag in &self.item_focus_flags {
            builder.leaf_widget(flag);
        }
        builder.end(tag);
    }

    fn focus(&self) -> FocusFlag {
        self.container_focus.clone()
    }

    fn area(&self) -> Rect {
        self.last_area
    }
}

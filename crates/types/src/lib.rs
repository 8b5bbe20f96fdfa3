//! Shared type definitions for the sidenav workspace.
//!
//! The TUI crate, the settings store, and the CLI all speak in terms of the
//! messages, effects, and viewport measurements defined here.

use serde::{Deserialize, Serialize};

/// Viewport width (in pixels) below which the navbar is considered to be on a
/// mobile-sized display.
pub const MOBILE_BREAKPOINT_PX: u32 = 928;

/// Pixel width assumed for a single terminal cell when the terminal does not
/// report its pixel dimensions.
pub const DEFAULT_CELL_WIDTH_PX: u32 = 8;

/// Pixel height assumed for a single terminal cell when the terminal does not
/// report its pixel dimensions.
pub const DEFAULT_CELL_HEIGHT_PX: u32 = 16;

/// Current dimensions of the display the navbar lives in, in pixels.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Viewport {
    pub width: u32,
    pub height: u32,
}

impl Viewport {
    pub fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Estimates a pixel viewport from a terminal size given in cells.
    pub fn from_cells(columns: u16, rows: u16) -> Self {
        Self {
            width: u32::from(columns) * DEFAULT_CELL_WIDTH_PX,
            height: u32::from(rows) * DEFAULT_CELL_HEIGHT_PX,
        }
    }

    /// Returns `true` when the width is strictly below [`MOBILE_BREAKPOINT_PX`].
    ///
    /// A width exactly at the breakpoint is not mobile.
    pub fn is_mobile(&self) -> bool {
        self.width < MOBILE_BREAKPOINT_PX
    }
}

/// Messages routed from the runtime into components.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Msg {
    /// Periodic UI tick
    Tick,
    /// Terminal resized (columns, rows)
    Resize(u16, u16),
    /// A navbar entry was selected somewhere in the view tree
    NavItemSelected(String),
}

/// Side effects reported by components back to the runtime.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// The `selected` event: carries the label of the chosen entry
    NavItemSelected(String),
    /// Leave the application
    Quit,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakpoint_is_exclusive() {
        assert!(Viewport::new(927, 600).is_mobile());
        assert!(!Viewport::new(928, 600).is_mobile());
        assert!(!Viewport::new(1920, 1080).is_mobile());
    }

    #[test]
    fn cells_are_converted_with_default_metrics() {
        let viewport = Viewport::from_cells(116, 40);
        assert_eq!(viewport.width, 928);
        assert_eq!(viewport.height, 640);
        assert!(!viewport.is_mobile());
        assert!(Viewport::from_cells(115, 40).is_mobile());
    }

    #[test]
    fn viewport_serializes_as_plain_object() {
        let json = serde_json::to_value(Viewport::new(500, 300)).expect("serialize viewport");
        assert_eq!(json, serde_json::json!({ "width": 500, "height": 300 }));
    }
}

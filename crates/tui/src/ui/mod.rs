//! UI layer: components, root view, runtime, theming, and the viewport signal.

pub mod components;
pub mod main_component;
pub mod runtime;
pub mod theme;
pub mod utils;
pub mod viewport;

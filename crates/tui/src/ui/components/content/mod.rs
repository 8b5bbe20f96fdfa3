//! Content pane: the host area next to the navbar. It listens for the
//! navbar's `selected` events and shows what was picked.

mod content_component;
mod state;

pub use content_component::ContentComponent;
pub use state::ContentState;

//! UI components: the side navbar, the content pane, and the hint bar.

pub mod component;
pub mod content;
pub mod hint_bar;
pub mod side_navbar;

pub use component::*;
pub use content::ContentComponent;
pub use hint_bar::HintBarComponent;
pub use side_navbar::SideNavbarComponent;

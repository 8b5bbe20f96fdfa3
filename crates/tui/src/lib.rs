//! # Sidenav TUI
//!
//! A collapsible side navigation bar for terminal user interfaces, built on
//! Ratatui and Crossterm, plus the runtime that hosts it full-screen.
//!
//! ## Architecture
//!
//! - [`ui::components::side_navbar`]: the navbar state and component
//! - [`ui::viewport`]: the process-wide viewport signal the navbar listens to
//! - [`ui::theme`]: palettes, roles, and the navbar's named style hooks
//! - [`ui::runtime`]: terminal lifecycle and the event loop

pub mod app;
pub mod ui;

use std::sync::Arc;

use anyhow::Result;
use sidenav_util::NavbarSettings;

pub use app::{App, NavbarOptions};

/// Runs the interactive TUI until the user quits.
///
/// # Errors
///
/// Returns an error for terminal setup failures (raw mode, alternate screen)
/// or drawing failures.
pub async fn run(options: NavbarOptions, settings: Arc<NavbarSettings>) -> Result<()> {
    ui::runtime::run_app(options, settings).await
}

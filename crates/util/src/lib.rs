//! Utility crate for sidenav: the persisted navbar settings store shared by the
//! CLI and the TUI.

pub mod settings;

pub use settings::{
    NavbarSettings, SETTINGS_FILE_NAME, SETTINGS_PATH_ENV, SettingsError, SettingsPayload, resolve_settings_path,
};

//! Navbar settings persistence.
//!
//! A tiny JSON-backed store holding the navbar configuration: whether to hide
//! on mobile-sized viewports, the item list, the last selection, the preferred
//! theme, and any style hook overrides. The file lives in the standard
//! configuration directory (`~/.config/sidenav/navbar.json` on most platforms)
//! unless `SIDENAV_CONFIG_PATH` points elsewhere. Reads and writes go through
//! an internal `Mutex`.

use std::env;
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::{Mutex, MutexGuard, PoisonError};

use dirs_next::{config_dir, home_dir};
use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use thiserror::Error;
use tracing::{debug, warn};

/// Environment variable allowing callers to override the settings file path.
pub const SETTINGS_PATH_ENV: &str = "SIDENAV_CONFIG_PATH";

/// Default filename for the JSON payload.
pub const SETTINGS_FILE_NAME: &str = "navbar.json";

/// Error surfaced when reading or writing settings fails.
#[derive(Debug, Error)]
pub enum SettingsError {
    /// I/O failure (for example, permissions or missing directory).
    #[error("settings I/O error: {0}")]
    Io(#[from] std::io::Error),
    /// Serialization or deserialization failure.
    #[error("settings serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

/// Persisted navbar values. Every field is optional so that a partial file
/// only overrides what it names.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SettingsPayload {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hide_on_mobile: Option<bool>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub nav_items: Option<Vec<String>>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub selected_item: Option<String>,
    /// Canonical identifier of the theme to load.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub preferred_theme: Option<String>,
    /// Style hook overrides keyed by hook name (e.g. `bg-color`), in file order.
    #[serde(default, skip_serializing_if = "IndexMap::is_empty")]
    pub style: IndexMap<String, String>,
}

/// Thread-safe settings store backed by a JSON file.
#[derive(Debug, Default)]
pub struct NavbarSettings {
    path: PathBuf,
    payload: Mutex<SettingsPayload>,
    persist_to_disk: bool,
}

impl NavbarSettings {
    /// Opens the store at the default location (or `SIDENAV_CONFIG_PATH`).
    pub fn new() -> Result<Self, SettingsError> {
        Self::at_path(default_settings_path())
    }

    /// Opens the store rooted at `path`. A missing file yields empty settings.
    ///
    /// A file that exists but does not parse also yields empty settings, and the
    /// store stays in memory so the file is never overwritten.
    pub fn at_path(path: impl Into<PathBuf>) -> Result<Self, SettingsError> {
        let path = path.into();
        let (payload, persist_to_disk) = match load_payload(&path)? {
            Some(payload) => (payload, true),
            None => (SettingsPayload::default(), false),
        };
        debug!(path = %path.display(), persist_to_disk, "loaded navbar settings");
        Ok(Self {
            path,
            payload: Mutex::new(payload),
            persist_to_disk,
        })
    }

    /// Opens the store at `path` (or the default location), falling back to an
    /// in-memory store when the file cannot be read.
    pub fn open_or_ephemeral(path: Option<&str>) -> Self {
        let resolved = path.map(resolve_settings_path).unwrap_or_else(default_settings_path);
        match Self::at_path(&resolved) {
            Ok(settings) => settings,
            Err(error) => {
                warn!(path = %resolved.display(), error = %error, "Failed to open navbar settings; using in-memory defaults");
                Self::ephemeral()
            }
        }
    }

    /// Build an in-memory store used as a fallback when the config directory cannot be accessed.
    pub fn ephemeral() -> Self {
        Self {
            path: PathBuf::new(),
            payload: Mutex::new(SettingsPayload::default()),
            persist_to_disk: false,
        }
    }

    /// Path to the underlying JSON file.
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Copy of everything currently stored.
    pub fn snapshot(&self) -> SettingsPayload {
        self.lock().clone()
    }

    pub fn hide_on_mobile(&self) -> Option<bool> {
        self.lock().hide_on_mobile
    }

    pub fn nav_items(&self) -> Option<Vec<String>> {
        self.lock().nav_items.clone()
    }

    pub fn selected_item(&self) -> Option<String> {
        self.lock().selected_item.clone()
    }

    pub fn preferred_theme(&self) -> Option<String> {
        self.lock().preferred_theme.clone()
    }

    pub fn style_overrides(&self) -> IndexMap<String, String> {
        self.lock().style.clone()
    }

    /// Remember the most recent selection.
    pub fn set_selected_item(&self, label: Option<String>) -> Result<(), SettingsError> {
        let mut payload = self.lock();
        payload.selected_item = label;
        self.save_locked(&payload)
    }

    /// Persist a new preferred theme identifier.
    pub fn set_preferred_theme(&self, theme_id: Option<String>) -> Result<(), SettingsError> {
        let mut payload = self.lock();
        payload.preferred_theme = theme_id;
        self.save_locked(&payload)
    }

    fn lock(&self) -> MutexGuard<'_, SettingsPayload> {
        self.payload.lock().unwrap_or_else(PoisonError::into_inner)
    }

    fn save_locked(&self, payload: &SettingsPayload) -> Result<(), SettingsError> {
        if !self.persist_to_disk {
            return Ok(());
        }
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        let data = serde_json::to_string_pretty(payload)?;
        fs::write(&self.path, data)?;
        Ok(())
    }
}

/// Resolves a user-supplied settings path, expanding a leading `~` to the
/// home directory.
pub fn resolve_settings_path(raw: &str) -> PathBuf {
    let raw = raw.trim();
    let under_home = match raw {
        "~" => Some(""),
        _ => raw.strip_prefix("~/").or_else(|| raw.strip_prefix("~\\")),
    };
    match (under_home, home_dir()) {
        (Some(""), Some(home)) => home,
        (Some(rest), Some(home)) => home.join(rest),
        _ => PathBuf::from(raw),
    }
}

fn default_settings_path() -> PathBuf {
    if let Ok(path) = env::var(SETTINGS_PATH_ENV) {
        let trimmed = path.trim();
        if !trimmed.is_empty() {
            return resolve_settings_path(trimmed);
        }
    }

    config_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("sidenav")
        .join(SETTINGS_FILE_NAME)
}

/// Reads the payload at `path`. `Ok(None)` means the file exists but is not
/// valid settings JSON.
fn load_payload(path: &Path) -> Result<Option<SettingsPayload>, SettingsError> {
    match fs::read_to_string(path) {
        Ok(data) => match serde_json::from_str(&data) {
            Ok(payload) => Ok(Some(payload)),
            Err(error) => {
                warn!(
                    path = %path.display(),
                    error = %error,
                    "Failed to parse navbar settings file; using defaults and leaving the file untouched"
                );
                Ok(None)
            }
        },
        Err(error) if error.kind() == std::io::ErrorKind::NotFound => Ok(Some(SettingsPayload::default())),
        Err(error) => Err(SettingsError::Io(error)),
    }
}

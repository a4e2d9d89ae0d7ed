//! Ambient settings for the panel session (`flagdeck.toml`).
//!
//! Settings are layered: built-in defaults, then an optional TOML file
//! (explicit `--config` path, `./flagdeck.toml`, or the user config dir),
//! then CLI overrides applied by the binary. A missing file is normal; a
//! file that fails to parse is reported and ignored rather than aborting
//! the session.

use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use flagdeck_core::prelude::*;

const CONFIG_FILENAME: &str = "flagdeck.toml";

/// All ambient settings for a panel session.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(default)]
pub struct Settings {
    pub server: ServerSettings,
    pub ui: UiSettings,
}

/// Debug server connection settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ServerSettings {
    /// Base URL of the debug server (stats + notification endpoints).
    pub base_url: String,
    /// Per-request timeout in milliseconds.
    pub timeout_ms: u64,
}

impl Default for ServerSettings {
    fn default() -> Self {
        Self {
            base_url: "http://localhost:8080/".to_string(),
            timeout_ms: 10_000,
        }
    }
}

/// Terminal UI settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiSettings {
    /// Event poll timeout in milliseconds (drives the tick rate).
    pub tick_rate_ms: u64,
}

impl Default for UiSettings {
    fn default() -> Self {
        Self { tick_rate_ms: 50 }
    }
}

impl Settings {
    /// Request timeout as a [`Duration`].
    pub fn timeout(&self) -> Duration {
        Duration::from_millis(self.server.timeout_ms)
    }

    /// Parse settings from TOML text.
    pub fn from_toml(text: &str) -> Result<Self> {
        toml::from_str(text).map_err(|e| Error::config(format!("invalid {CONFIG_FILENAME}: {e}")))
    }
}

/// Load settings, tolerating a missing or broken config file.
///
/// `explicit` wins when given; otherwise `./flagdeck.toml` is tried, then
/// the user config dir. Parse failures are logged and replaced with
/// defaults so a typo in the file never takes the panel down.
pub fn load_settings(explicit: Option<&Path>) -> Settings {
    let Some(path) = resolve_config_path(explicit) else {
        debug!("No {CONFIG_FILENAME} found, using default settings");
        return Settings::default();
    };

    match std::fs::read_to_string(&path) {
        Ok(text) => match Settings::from_toml(&text) {
            Ok(settings) => {
                info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                warn!("Ignoring {}: {}", path.display(), e);
                Settings::default()
            }
        },
        Err(e) => {
            warn!("Could not read {}: {}", path.display(), e);
            Settings::default()
        }
    }
}

fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }

    let local = PathBuf::from(CONFIG_FILENAME);
    if local.exists() {
        return Some(local);
    }

    let user = dirs::config_dir()?.join("flagdeck").join("config.toml");
    user.exists().then_some(user)
}

//! Game settings and preferences
//!
//! Read once at startup from a JSON file. Gameplay constants (sizes, speeds,
//! difficulty intervals) are fixed and deliberately not exposed here.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::consts::TARGET_FPS;

/// Environment variable naming an explicit settings file
pub const SETTINGS_ENV: &str = "DODGE_SETTINGS";
/// Settings file looked up in the working directory when the env var is unset
pub const DEFAULT_SETTINGS_FILE: &str = "dodge_settings.json";

/// Game settings/preferences
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Master seed for obstacle generation; random per launch when unset
    pub seed: Option<u64>,
    /// Show FPS counter
    pub show_fps: bool,
    /// Wait for vertical sync when presenting
    pub vsync: bool,
    /// Frame rate cap (0 means the default)
    pub target_fps: u32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            seed: None,
            show_fps: false,
            vsync: true,
            target_fps: TARGET_FPS,
        }
    }
}

impl Settings {
    /// Frame rate cap with the 0 fallback applied
    pub fn effective_fps(&self) -> u32 {
        if self.target_fps == 0 {
            TARGET_FPS
        } else {
            self.target_fps
        }
    }

    /// Parse settings from JSON; missing fields take their defaults
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Load settings from `$DODGE_SETTINGS`, else `./dodge_settings.json`.
    ///
    /// A missing file yields defaults. An unreadable or malformed file is
    /// logged and also yields defaults.
    pub fn load() -> Self {
        let path = std::env::var_os(SETTINGS_ENV)
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_SETTINGS_FILE));
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Self {
        let json = match std::fs::read_to_string(path) {
            Ok(json) => json,
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                log::info!("No settings file at {}, using defaults", path.display());
                return Self::default();
            }
            Err(e) => {
                log::warn!("Could not read settings {}: {}", path.display(), e);
                return Self::default();
            }
        };

        match Self::from_json(&json) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("Invalid settings {}: {}", path.display(), e);
                Self::default()
            }
        }
    }
}

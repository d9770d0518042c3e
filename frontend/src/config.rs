//! Persistent configuration: window scale, FPS overlay default and key
//! bindings. Stored as TOML in `<config_dir>/lumen/config.toml`; a
//! missing or invalid file falls back to the defaults.

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Integer window scale factor.
    pub scale: u32,
    /// Show the FPS readout in the window title at startup.
    pub show_fps: bool,
    /// Key bindings, by SDL scancode name.
    pub keys: KeyConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct KeyConfig {
    pub up: String,
    pub down: String,
    pub left: String,
    pub right: String,
    pub a: String,
    pub b: String,
    pub select: String,
    pub start: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            scale: 3,
            show_fps: false,
            keys: KeyConfig::default(),
        }
    }
}

impl Default for KeyConfig {
    fn default() -> Self {
        Self {
            up: "Up".to_string(),
            down: "Down".to_string(),
            left: "Left".to_string(),
            right: "Right".to_string(),
            a: "Z".to_string(),
            b: "X".to_string(),
            select: "Left Shift".to_string(),
            start: "Return".to_string(),
        }
    }
}

impl Config {
    /// Path to the config file.
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join("lumen").join("config.toml"))
    }

    /// Load config from disk, or return defaults if not found / invalid.
    pub fn load() -> Self {
        let Some(path) = Self::config_path() else {
            return Self::default();
        };
        match std::fs::read_to_string(&path) {
            Ok(text) => match toml::from_str(&text) {
                Ok(config) => config,
                Err(e) => {
                    log::warn!("ignoring invalid config {}: {e}", path.display());
                    Self::default()
                }
            },
            Err(_) => Self::default(),
        }
    }
}

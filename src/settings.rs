//! Game settings and preferences
//!
//! Persisted in LocalStorage on the web, read from a JSON file on native.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::consts::TARGET_FPS;
use crate::tuning::Tuning;

/// Failure loading a settings file
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse settings: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Game settings/preferences
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Frame rate cap; one simulation tick per frame
    pub target_fps: u32,
    /// Show FPS counter in the HUD
    pub show_fps: bool,
    /// Let the autopilot play (demo mode)
    pub autopilot: bool,
    /// How long a native headless run lasts before exiting (seconds)
    pub demo_seconds: u32,
    /// Gameplay balance
    pub tuning: Tuning,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            target_fps: TARGET_FPS,
            show_fps: false,
            autopilot: false,
            demo_seconds: 60,
            tuning: Tuning::default(),
        }
    }
}

impl Settings {
    /// Native settings file, looked up in the working directory
    pub const FILE_NAME: &'static str = "arena_shooter.json";

    /// LocalStorage key (used only in wasm32)
    #[allow(dead_code)]
    const STORAGE_KEY: &'static str = "arena_shooter_settings";

    /// Parse settings from JSON; missing fields fall back to defaults
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let mut settings: Settings = serde_json::from_str(json)?;
        settings.target_fps = settings.target_fps.max(1);
        Ok(settings)
    }

    /// Seconds per frame at the configured rate
    pub fn frame_dt(&self) -> f32 {
        1.0 / self.target_fps.max(1) as f32
    }

    /// Load settings from LocalStorage (WASM only)
    #[cfg(target_arch = "wasm32")]
    pub fn load() -> Self {
        let storage = web_sys::window()
            .and_then(|w| w.local_storage().ok())
            .flatten();

        if let Some(storage) = storage {
            if let Ok(Some(json)) = storage.get_item(Self::STORAGE_KEY) {
                match Self::from_json(&json) {
                    Ok(settings) => {
                        log::info!("Loaded settings from LocalStorage");
                        return settings;
                    }
                    Err(e) => log::warn!("Ignoring stored settings: {}", e),
                }
            }
        }

        log::info!("Using default settings");
        Self::default()
    }

    /// Load settings from [`Self::FILE_NAME`], falling back to defaults
    #[cfg(not(target_arch = "wasm32"))]
    pub fn load() -> Self {
        let path = std::path::Path::new(Self::FILE_NAME);
        if !path.exists() {
            log::info!("No {} found, using default settings", Self::FILE_NAME);
            return Self::default();
        }
        match Self::load_from(path) {
            Ok(settings) => {
                log::info!("Loaded settings from {}", path.display());
                settings
            }
            Err(e) => {
                log::warn!("{}; using default settings", e);
                Self::default()
            }
        }
    }

    #[cfg(not(target_arch = "wasm32"))]
    pub fn load_from(path: &std::path::Path) -> Result<Self, ConfigError> {
        let json = std::fs::read_to_string(path)?;
        Self::from_json(&json)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_nested_tuning_override() {
        let settings =
            Settings::from_json(r#"{ "show_fps": true, "tuning": { "max_batch": 9 } }"#).unwrap();
        assert!(settings.show_fps);
        assert_eq!(settings.tuning.max_batch, 9);
        assert_eq!(settings.target_fps, TARGET_FPS);
    }

    #[test]
    fn test_zero_fps_is_clamped() {
        let settings = Settings::from_json(r#"{ "target_fps": 0 }"#).unwrap();
        assert_eq!(settings.target_fps, 1);
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json("{ not json").unwrap_err();
        assert!(matches!(err, ConfigError::Parse(_)));
    }

    #[cfg(not(target_arch = "wasm32"))]
    #[test]
    fn test_missing_file_is_io_error() {
        let err = Settings::load_from(std::path::Path::new("does/not/exist.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io(_)));
    }
}

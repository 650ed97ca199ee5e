//! Calculator preferences, read from `config.json` in the app's config dir.
//!
//! Only window and input preferences live here; calculator state is never
//! written to disk.

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};
use slowcore::storage::{self, StorageError};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct CalcConfig {
    pub window_width: f32,
    pub window_height: f32,
    /// Point size of the display digits.
    pub display_font_size: f32,
    /// Route keyboard input to the keypad.
    pub keyboard_input: bool,
    /// Show the pending operation under the keypad.
    pub show_status_bar: bool,
}

impl Default for CalcConfig {
    fn default() -> Self {
        Self {
            window_width: 260.0,
            window_height: 350.0,
            display_font_size: 28.0,
            keyboard_input: true,
            show_status_bar: true,
        }
    }
}

impl CalcConfig {
    pub fn config_path() -> PathBuf {
        storage::config_dir("slowcalc").join("config.json")
    }

    /// Load from the default location. Never fails: a missing file is
    /// silent, a broken one is logged, and both give the defaults.
    pub fn load() -> Self {
        Self::load_from(&Self::config_path())
    }

    pub fn load_from(path: &Path) -> Self {
        match storage::load_json::<CalcConfig>(path) {
            Ok(config) => {
                tracing::debug!(path = %path.display(), "loaded config");
                config.sanitized()
            }
            Err(StorageError::NotFound(_)) => Self::default(),
            Err(e) => {
                tracing::warn!(path = %path.display(), error = %e, "ignoring unreadable config");
                Self::default()
            }
        }
    }

    pub fn save_to(&self, path: &Path) -> storage::Result<()> {
        storage::save_json(path, self)
    }

    /// Clamp sizes into a range the keypad can be drawn in.
    pub fn sanitized(mut self) -> Self {
        let defaults = Self::default();
        let clamp = |value: f32, min: f32, max: f32, fallback: f32| {
            if value.is_finite() { value.clamp(min, max) } else { fallback }
        };
        self.window_width = clamp(self.window_width, 200.0, 800.0, defaults.window_width);
        self.window_height = clamp(self.window_height, 260.0, 1000.0, defaults.window_height);
        self.display_font_size = clamp(self.display_font_size, 12.0, 64.0, defaults.display_font_size);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_json_uses_defaults() {
        let config: CalcConfig = serde_json::from_str(r#"{ "keyboard_input": false }"#).unwrap();
        assert!(!config.keyboard_input);
        assert_eq!(config.window_width, 260.0);
        assert!(config.show_status_bar);
    }

    #[test]
    fn test_sanitized_clamps() {
        let config = CalcConfig {
            window_width: 50.0,
            window_height: 5000.0,
            display_font_size: f32::NAN,
            ..Default::default()
        }
        .sanitized();
        assert_eq!(config.window_width, 200.0);
        assert_eq!(config.window_height, 1000.0);
        assert_eq!(config.display_font_size, 28.0);
    }

    #[test]
    fn test_load_from_missing_path() {
        let path = std::env::temp_dir().join("slowcalc-test-missing").join("config.json");
        assert_eq!(CalcConfig::load_from(&path), CalcConfig::default());
    }
}

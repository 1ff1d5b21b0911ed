//! Geometry settings
//!
//! Stored as JSON. Every field has a default, so a partial file (or `{}`)
//! is valid.

use std::fmt;
use std::path::Path;

use serde::{Deserialize, Serialize};

/// Which way world-space `y` grows
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "lowercase")]
pub enum YAxis {
    /// Screen convention: `y` grows downward, so "bottom" has the larger `y`
    #[default]
    Down,
    /// Math convention: `y` grows upward, so "bottom" has the smaller `y`
    Up,
}

impl YAxis {
    pub fn as_str(&self) -> &'static str {
        match self {
            YAxis::Down => "down",
            YAxis::Up => "up",
        }
    }

    /// Sign applied to a height when stepping from a top edge to a bottom edge
    #[inline]
    pub fn downward(&self) -> f64 {
        match self {
            YAxis::Down => 1.0,
            YAxis::Up => -1.0,
        }
    }
}

impl fmt::Display for YAxis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("settings I/O failed: {0}")]
    Io(#[from] std::io::Error),

    #[error("settings JSON is invalid: {0}")]
    Parse(#[from] serde_json::Error),
}

/// Conventions shared by entities created from the same settings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Orientation of the world `y` axis
    pub y_axis: YAxis,
    /// Slack used when deciding whether a degenerate scan touches an entity
    pub contact_epsilon: f64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            y_axis: YAxis::Down,
            contact_epsilon: 1e-9,
        }
    }
}

impl Settings {
    pub fn from_json(json: &str) -> Result<Self, SettingsError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, SettingsError> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Read settings from a JSON file
    pub fn load(path: impl AsRef<Path>) -> Result<Self, SettingsError> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let settings = Self::from_json(&json)?;
        log::info!(
            "Loaded settings from {} (y axis {}, contact epsilon {})",
            path.display(),
            settings.y_axis,
            settings.contact_epsilon
        );
        Ok(settings)
    }

    /// Like [`Settings::load`], but any failure yields the defaults
    pub fn load_or_default(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        match Self::load(path) {
            Ok(settings) => settings,
            Err(e) => {
                log::warn!("Using default settings ({}: {})", path.display(), e);
                Self::default()
            }
        }
    }

    pub fn save(&self, path: impl AsRef<Path>) -> Result<(), SettingsError> {
        let path = path.as_ref();
        std::fs::write(path, self.to_json()?)?;
        log::info!("Settings saved to {}", path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn temp_path(name: &str) -> std::path::PathBuf {
        std::env::temp_dir().join(format!("flatworld-{}-{}.json", name, std::process::id()))
    }

    #[test]
    fn test_defaults() {
        let s = Settings::default();
        assert_eq!(s.y_axis, YAxis::Down);
        assert_eq!(s.contact_epsilon, 1e-9);
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let s = Settings::from_json(r#"{"y_axis":"up"}"#).unwrap();
        assert_eq!(s.y_axis, YAxis::Up);
        assert_eq!(s.contact_epsilon, 1e-9);

        let s = Settings::from_json("{}").unwrap();
        assert_eq!(s, Settings::default());
    }

    #[test]
    fn test_bad_json_is_parse_error() {
        let err = Settings::from_json(r#"{"y_axis":"sideways"}"#).unwrap_err();
        assert!(matches!(err, SettingsError::Parse(_)));
    }

    #[test]
    fn test_y_axis_names() {
        assert_eq!(YAxis::Down.to_string(), "down");
        assert_eq!(YAxis::Up.to_string(), "up");
        // display names match the JSON names
        for axis in [YAxis::Down, YAxis::Up] {
            let json = serde_json::to_string(&axis).unwrap();
            assert_eq!(json, format!("\"{axis}\""));
        }
        assert_eq!(YAxis::Down.downward(), 1.0);
        assert_eq!(YAxis::Up.downward(), -1.0);
    }

    #[test]
    fn test_save_then_load() {
        let path = temp_path("save");
        let s = Settings {
            y_axis: YAxis::Up,
            contact_epsilon: 0.25,
        };
        s.save(&path).unwrap();
        let loaded = Settings::load(&path).unwrap();
        std::fs::remove_file(&path).ok();
        assert_eq!(loaded, s);
    }

    #[test]
    fn test_load_missing_file() {
        let path = temp_path("missing");
        assert!(matches!(Settings::load(&path), Err(SettingsError::Io(_))));
        assert_eq!(Settings::load_or_default(&path), Settings::default());
    }
}

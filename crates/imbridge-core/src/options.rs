//! Configuration options for the bridge and its host window.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{BridgeError, Result};

/// Top-level options.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Options {
    /// Host window settings.
    pub window: WindowOptions,

    /// Input translation settings.
    pub input: InputOptions,
}

impl Options {
    /// Parses options from JSON. Missing fields take their defaults.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let options: Self = serde_json::from_str(json)?;
        options.validate()?;
        Ok(options)
    }

    /// Reads options from a JSON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let json = std::fs::read_to_string(path)?;
        let options = Self::from_json_str(&json)?;
        log::info!("loaded options from {}", path.display());
        Ok(options)
    }

    /// Serializes options to pretty-printed JSON.
    pub fn to_json_string(&self) -> Result<String> {
        Ok(serde_json::to_string_pretty(self)?)
    }

    /// Checks value ranges.
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.input.gamepad_dead_zone) {
            return Err(BridgeError::InvalidOption {
                field: "input.gamepad_dead_zone",
                reason: format!("{} is outside [0, 1)", self.input.gamepad_dead_zone),
            });
        }
        if self.input.min_delta_time.is_nan() || self.input.min_delta_time <= 0.0 {
            return Err(BridgeError::InvalidOption {
                field: "input.min_delta_time",
                reason: format!("{} must be positive", self.input.min_delta_time),
            });
        }
        if self.window.width == 0 || self.window.height == 0 {
            return Err(BridgeError::InvalidOption {
                field: "window.width/height",
                reason: format!("{}x{} is empty", self.window.width, self.window.height),
            });
        }
        Ok(())
    }
}

/// Host window settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowOptions {
    pub title: String,

    /// Logical width.
    pub width: u32,

    /// Logical height.
    pub height: u32,

    pub resizable: bool,

    /// Frame rate cap (0 = unlimited).
    pub target_fps: u32,

    /// Linear RGBA the host clears to at frame start.
    pub clear_color: [f64; 4],
}

impl Default for WindowOptions {
    fn default() -> Self {
        Self {
            title: "imbridge".to_string(),
            width: 800,
            height: 450,
            resizable: true,
            target_fps: 60,
            clear_color: [0.96, 0.96, 0.96, 1.0],
        }
    }
}

/// How keyboard input reaches the translator.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum InputMode {
    /// Keys are polled from the frame input state each frame.
    #[default]
    Polled,
    /// Keys and characters are forwarded from host callbacks as they arrive.
    Callbacks,
}

/// Input translation settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct InputOptions {
    pub mode: InputMode,

    /// Stick deflection below which gamepad stick keys stay up.
    pub gamepad_dead_zone: f32,

    /// Lower bound for the frame delta passed to the GUI, in seconds.
    pub min_delta_time: f32,
}

impl Default for InputOptions {
    fn default() -> Self {
        Self {
            mode: InputMode::Polled,
            gamepad_dead_zone: 0.20,
            min_delta_time: 0.001,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let options = Options::default();
        assert_eq!(options.window.width, 800);
        assert_eq!(options.window.height, 450);
        assert_eq!(options.window.target_fps, 60);
        assert_eq!(options.input.mode, InputMode::Polled);
        assert!(options.validate().is_ok());
    }

    #[test]
    fn test_partial_json_uses_defaults() {
        let options =
            Options::from_json_str(r#"{ "window": { "title": "demo" }, "input": { "mode": "Callbacks" } }"#)
                .unwrap();
        assert_eq!(options.window.title, "demo");
        assert_eq!(options.window.width, 800);
        assert_eq!(options.input.mode, InputMode::Callbacks);
        assert!((options.input.gamepad_dead_zone - 0.20).abs() < f32::EPSILON);
    }

    #[test]
    fn test_json_round_trip() {
        let mut options = Options::default();
        options.window.resizable = false;
        options.input.min_delta_time = 0.005;
        let json = options.to_json_string().unwrap();
        assert_eq!(Options::from_json_str(&json).unwrap(), options);
    }

    #[test]
    fn test_rejects_bad_dead_zone() {
        let err = Options::from_json_str(r#"{ "input": { "gamepad_dead_zone": 1.5 } }"#).unwrap_err();
        assert!(matches!(
            err,
            BridgeError::InvalidOption {
                field: "input.gamepad_dead_zone",
                ..
            }
        ));
    }

    #[test]
    fn test_rejects_malformed_json() {
        let err = Options::from_json_str("{ window: ").unwrap_err();
        assert!(matches!(err, BridgeError::Json(_)));
    }

    #[test]
    fn test_load_missing_file() {
        let err = Options::load("/nonexistent/imbridge/options.json").unwrap_err();
        assert!(matches!(err, BridgeError::Io(_)));
    }
}

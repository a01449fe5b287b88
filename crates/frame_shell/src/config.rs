//! Configuration system
//!
//! TOML-backed configuration with defaults for every field, so a missing or
//! partial file still yields a runnable setup.

use serde::{Deserialize, Serialize};
use std::path::Path;
use thiserror::Error;

/// Configuration errors
#[derive(Error, Debug)]
pub enum ConfigError {
    /// IO error
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Parse error
    #[error("parse error: {0}")]
    Parse(String),
}

/// Top-level engine configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
    /// Window configuration
    pub window: WindowConfig,

    /// Fade transition configuration
    pub fade: FadeConfig,
}

impl EngineConfig {
    /// Load configuration from a TOML file
    pub fn load_from_file(path: impl AsRef<Path>) -> Result<Self, ConfigError> {
        let contents = std::fs::read_to_string(path)?;
        Self::from_toml_str(&contents)
    }

    /// Parse configuration from a TOML string
    pub fn from_toml_str(contents: &str) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::Parse(e.to_string()))
    }
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Window title
    pub title: String,

    /// Client-area width in pixels
    pub width: u32,

    /// Client-area height in pixels
    pub height: u32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            title: "Fade Demo".to_string(),
            width: 800,
            height: 600,
        }
    }
}

/// Fade transition configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct FadeConfig {
    /// Length of each fade phase, in ticks
    pub duration_ticks: u32,
}

impl Default for FadeConfig {
    fn default() -> Self {
        Self {
            duration_ticks: crate::render::fade::DEFAULT_FADE_TICKS,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = EngineConfig::default();
        assert_eq!(config.window.width, 800);
        assert_eq!(config.window.height, 600);
        assert_eq!(config.fade.duration_ticks, 30);
        assert!(!config.window.title.is_empty());
    }

    #[test]
    fn test_partial_toml_keeps_defaults() {
        let config = EngineConfig::from_toml_str(
            r#"
            [window]
            title = "Custom"
            "#,
        )
        .unwrap();
        assert_eq!(config.window.title, "Custom");
        assert_eq!(config.window.width, 800);
        assert_eq!(config.fade.duration_ticks, 30);
    }

    #[test]
    fn test_full_toml() {
        let config = EngineConfig::from_toml_str(
            r#"
            [window]
            title = "T"
            width = 1024
            height = 768

            [fade]
            duration_ticks = 60
            "#,
        )
        .unwrap();
        assert_eq!(config.window.width, 1024);
        assert_eq!(config.window.height, 768);
        assert_eq!(config.fade.duration_ticks, 60);
    }

    #[test]
    fn test_malformed_toml_is_a_parse_error() {
        let result = EngineConfig::from_toml_str("[window\ntitle = ");
        assert!(matches!(result, Err(ConfigError::Parse(_))));
    }
}

//! Config - Application Configuration
//!
//! Host-window configuration loaded once at startup from the platform
//! config directory. Nothing is written back; component state is never
//! persisted.

use crate::error::Result;
use crate::helpers::get_or_create_config_dir;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use tracing::{info, warn};

/// Main application configuration
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct AppConfig {
    /// Host window configuration
    #[serde(default)]
    pub window: WindowConfig,
}

/// Host window sizing
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowConfig {
    /// Initial window width in pixels
    pub width: f32,
    /// Initial window height in pixels
    pub height: f32,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 1024.0,
            height: 768.0,
        }
    }
}

fn get_config_path() -> Result<PathBuf> {
    let config_dir = get_or_create_config_dir()?;
    Ok(config_dir.join("typed-ui-demo.toml"))
}

impl AppConfig {
    /// Parse a config from TOML text; empty input yields the defaults
    pub fn parse(value: &str) -> Result<Self> {
        if value.trim().is_empty() {
            return Ok(Self::default());
        }
        Ok(toml::from_str(value)?)
    }

    /// Load the config file, if present
    pub fn try_load() -> Result<Self> {
        let path = get_config_path()?;
        if !path.exists() {
            return Ok(Self::default());
        }

        info!(path = ?path, "Loading config file");
        let value = std::fs::read_to_string(&path)?;
        Self::parse(&value)
    }

    /// Load the config, falling back to defaults on any error
    ///
    /// Startup never aborts on config problems.
    pub fn load() -> Self {
        match Self::try_load() {
            Ok(config) => config,
            Err(e) => {
                warn!(error = %e, "Failed to load config, using defaults");
                Self::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::Error;

    #[test]
    fn test_parse_empty_yields_defaults() {
        let config = AppConfig::parse("").expect("Parse failed");
        assert_eq!(config.window.width, 1024.0);
        assert_eq!(config.window.height, 768.0);
    }

    #[test]
    fn test_parse_window_size() {
        let config = AppConfig::parse("[window]\nwidth = 800.0\nheight = 600.0\n")
            .expect("Parse failed");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 600.0);
    }

    #[test]
    fn test_parse_partial_window_fills_defaults() {
        let config = AppConfig::parse("[window]\nwidth = 800.0\n").expect("Parse failed");
        assert_eq!(config.window.width, 800.0);
        assert_eq!(config.window.height, 768.0);
    }

    #[test]
    fn test_parse_malformed_is_toml_error() {
        let result = AppConfig::parse("[window]\nwidth = \"wide\"\n");
        assert!(matches!(result, Err(Error::TomlDe { .. })));
    }
}

//! Configuration file support for inkpad.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/inkpad/config.toml`. Settings
//! include drawing defaults, export location, and the initial window size.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{DrawingConfig, ExportConfig, UiConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};

use crate::export::{FileSaveConfig, expand_tilde};
use crate::input::state::BRUSH_SIZE_RANGE;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_tool = "brush"
/// default_color = "black"
/// brush_size = 5
///
/// [export]
/// save_directory = "~/Pictures/Inkpad"
/// filename_template = "painting_%Y-%m-%d_%H%M%S"
///
/// [ui]
/// viewport_width = 600
/// ```
#[derive(Debug, Serialize, Deserialize, Default, Clone)]
pub struct Config {
    /// Drawing tool defaults (tool, color, brush size)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Export location and naming
    #[serde(default)]
    pub export: ExportConfig,

    /// UI display preferences
    #[serde(default)]
    pub ui: UiConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// Invalid values are clamped to the nearest valid value and a warning
    /// is logged; an unknown tool name falls back to "brush" so the widget
    /// never starts in an undefined tool mode.
    fn validate_and_clamp(&mut self) {
        // Brush size: 1 - 64
        if !BRUSH_SIZE_RANGE.contains(&self.drawing.brush_size) {
            log::warn!(
                "Invalid brush_size {}, clamping to {}-{} range",
                self.drawing.brush_size,
                BRUSH_SIZE_RANGE.start(),
                BRUSH_SIZE_RANGE.end()
            );
            self.drawing.brush_size = self
                .drawing
                .brush_size
                .clamp(*BRUSH_SIZE_RANGE.start(), *BRUSH_SIZE_RANGE.end());
        }

        // Validate tool name
        if self.drawing.default_tool.parse::<crate::input::Tool>().is_err() {
            log::warn!(
                "Invalid default_tool '{}', falling back to 'brush'",
                self.drawing.default_tool
            );
            self.drawing.default_tool = "brush".to_string();
        }

        // Viewport width: 100 - 4096
        if !(100..=4096).contains(&self.ui.viewport_width) {
            log::warn!(
                "Invalid viewport_width {}, clamping to 100-4096 range",
                self.ui.viewport_width
            );
            self.ui.viewport_width = self.ui.viewport_width.clamp(100, 4096);
        }
    }

    /// Resolves the export section into a ready-to-use save configuration.
    pub fn file_save_config(&self) -> FileSaveConfig {
        let defaults = FileSaveConfig::default();
        FileSaveConfig {
            save_directory: self
                .export
                .save_directory
                .as_deref()
                .map(expand_tilde)
                .unwrap_or(defaults.save_directory),
            filename_template: self.export.filename_template.clone(),
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/inkpad/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("inkpad");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/inkpad/config.toml`. If the file doesn't exist, returns a
    /// Config with default values. All loaded values are validated and
    /// clamped to acceptable ranges.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory path cannot be determined
    /// - The file exists but cannot be read
    /// - The file exists but contains invalid TOML syntax
    pub fn load() -> Result<Self> {
        let config_path = Self::get_config_path()?;

        if !config_path.exists() {
            info!("Config file not found, using defaults");
            debug!("Expected config at: {}", config_path.display());
            return Ok(Self::default());
        }

        Self::load_from(&config_path)
    }

    /// Loads configuration from an explicit path (the `--config` override).
    ///
    /// Unlike [`Config::load`], a missing file here is an error: the user
    /// asked for that specific file.
    pub fn load_from(config_path: &Path) -> Result<Self> {
        let config_str = fs::read_to_string(config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::BLACK;
    use std::io::Write;
    use tempfile::NamedTempFile;

    #[test]
    fn default_config_is_valid() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_tool, "brush");
        assert_eq!(config.drawing.default_color.to_color(), BLACK);
        assert_eq!(config.drawing.brush_size, 5);
        assert_eq!(config.ui.viewport_width, 600);
    }

    #[test]
    fn load_from_parses_partial_file() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[drawing]\ndefault_tool = \"eraser\"\nbrush_size = 12\n"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_tool, "eraser");
        assert_eq!(config.drawing.brush_size, 12);
        // Untouched sections keep defaults.
        assert_eq!(config.ui.viewport_width, 600);
    }

    #[test]
    fn load_from_clamps_out_of_range_values() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(
            file,
            "[drawing]\ndefault_tool = \"airbrush\"\nbrush_size = 900\n\n[ui]\nviewport_width = 10\n"
        )
        .unwrap();

        let config = Config::load_from(file.path()).unwrap();
        assert_eq!(config.drawing.default_tool, "brush");
        assert_eq!(config.drawing.brush_size, 64);
        assert_eq!(config.ui.viewport_width, 100);
    }

    #[test]
    fn load_from_rejects_invalid_toml() {
        let mut file = NamedTempFile::new().unwrap();
        writeln!(file, "not toml at all [").unwrap();
        assert!(Config::load_from(file.path()).is_err());
    }

    #[test]
    fn file_save_config_expands_configured_directory() {
        let mut config = Config::default();
        config.export.save_directory = Some("/tmp/inkpad-test".to_string());
        let save = config.file_save_config();
        assert_eq!(save.save_directory, PathBuf::from("/tmp/inkpad-test"));
        assert_eq!(save.filename_template, "painting_%Y-%m-%d_%H%M%S");
    }
}

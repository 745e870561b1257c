//! Configuration file support for snapmark.
//!
//! This module handles loading and validating user settings from the
//! configuration file located at `~/.config/snapmark/config.toml`. Settings
//! include drawing defaults, the stamp image and its size mapping, and arrow
//! appearance.
//!
//! If no config file exists, sensible defaults are used automatically.

pub mod enums;
pub mod types;

// Re-export commonly used types at module level
pub use enums::ColorSpec;
pub use types::{ArrowConfig, DrawingConfig, StampConfig};

use anyhow::{Context, Result};
use log::{debug, info};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::PathBuf;

/// Main configuration structure containing all user settings.
///
/// This is the root configuration type that gets deserialized from the TOML
/// file. All fields have sensible defaults and will use those if not
/// specified in the config file.
///
/// # Example TOML
/// ```toml
/// [drawing]
/// default_color = "red"
/// default_thickness = 3.0
///
/// [stamp]
/// file_location = "/home/user/Pictures/approved.png"
/// step_multiplier = 10
/// thickness_offset = 60
///
/// [arrow]
/// length = 20.0
/// angle_degrees = 30.0
/// ```
#[derive(Debug, Serialize, Deserialize, Default)]
pub struct Config {
    /// Drawing tool defaults (color, thickness)
    #[serde(default)]
    pub drawing: DrawingConfig,

    /// Stamp tool settings (image path, size mapping)
    #[serde(default)]
    pub stamp: StampConfig,

    /// Arrow appearance settings
    #[serde(default)]
    pub arrow: ArrowConfig,
}

impl Config {
    /// Validates and clamps all configuration values to acceptable ranges.
    ///
    /// This method ensures that user-provided config values won't cause
    /// rendering issues. Invalid values are clamped to the nearest valid
    /// value and a warning is logged.
    ///
    /// Validated ranges:
    /// - `default_thickness`: 1.0 - 20.0
    /// - `stamp.step_multiplier`: 1 - 50
    /// - `stamp.thickness_offset`: 0 - 200
    /// - `arrow.length`: 5.0 - 50.0
    /// - `arrow.angle_degrees`: 15.0 - 60.0
    fn validate_and_clamp(&mut self) {
        // Thickness: 1.0 - 20.0
        if !(1.0..=20.0).contains(&self.drawing.default_thickness) {
            log::warn!(
                "Invalid default_thickness {:.1}, clamping to 1.0-20.0 range",
                self.drawing.default_thickness
            );
            self.drawing.default_thickness = self.drawing.default_thickness.clamp(1.0, 20.0);
        }

        // Step multiplier: 1 - 50
        if !(1..=50).contains(&self.stamp.step_multiplier) {
            log::warn!(
                "Invalid stamp step_multiplier {}, clamping to 1-50 range",
                self.stamp.step_multiplier
            );
            self.stamp.step_multiplier = self.stamp.step_multiplier.clamp(1, 50);
        }

        // Thickness offset: 0 - 200
        if !(0..=200).contains(&self.stamp.thickness_offset) {
            log::warn!(
                "Invalid stamp thickness_offset {}, clamping to 0-200 range",
                self.stamp.thickness_offset
            );
            self.stamp.thickness_offset = self.stamp.thickness_offset.clamp(0, 200);
        }

        // Arrow length: 5.0 - 50.0
        if !(5.0..=50.0).contains(&self.arrow.length) {
            log::warn!(
                "Invalid arrow length {:.1}, clamping to 5.0-50.0 range",
                self.arrow.length
            );
            self.arrow.length = self.arrow.length.clamp(5.0, 50.0);
        }

        // Arrow angle: 15.0 - 60.0 degrees
        if !(15.0..=60.0).contains(&self.arrow.angle_degrees) {
            log::warn!(
                "Invalid arrow angle {:.1}°, clamping to 15.0-60.0° range",
                self.arrow.angle_degrees
            );
            self.arrow.angle_degrees = self.arrow.angle_degrees.clamp(15.0, 60.0);
        }
    }

    /// Returns the path to the configuration file.
    ///
    /// The config file is located at `~/.config/snapmark/config.toml`.
    ///
    /// # Errors
    /// Returns an error if the config directory cannot be determined
    /// (e.g., HOME not set).
    pub fn get_config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .context("Could not find config directory")?
            .join("snapmark");

        Ok(config_dir.join("config.toml"))
    }

    /// Loads configuration from file, or returns defaults if not found.
    ///
    /// Attempts to read and parse the config file at
    /// `~/.config/snapmark/config.toml`. If the file doesn't exist, returns
    /// a Config with default values. All loaded values are validated and
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

        let config_str = fs::read_to_string(&config_path)
            .with_context(|| format!("Failed to read config from {}", config_path.display()))?;

        let mut config: Config = toml::from_str(&config_str)
            .with_context(|| format!("Failed to parse config from {}", config_path.display()))?;

        // Validate and clamp values to acceptable ranges
        config.validate_and_clamp();

        info!("Loaded config from {}", config_path.display());
        debug!("Config: {:?}", config);

        Ok(config)
    }

    /// Saves the current configuration to file.
    ///
    /// Serializes the config to TOML format and writes it to
    /// `~/.config/snapmark/config.toml`. Creates the parent directory if it
    /// doesn't exist.
    ///
    /// # Errors
    /// Returns an error if:
    /// - The config directory cannot be created
    /// - The config cannot be serialized to TOML
    /// - The file cannot be written
    pub fn save(&self) -> Result<()> {
        let config_path = Self::get_config_path()?;

        // Create directory if it doesn't exist
        if let Some(parent) = config_path.parent() {
            fs::create_dir_all(parent).context("Failed to create config directory")?;
        }

        let config_str = toml::to_string_pretty(self).context("Failed to serialize config")?;

        fs::write(&config_path, config_str)
            .with_context(|| format!("Failed to write config to {}", config_path.display()))?;

        info!("Saved config to {}", config_path.display());
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_pass_validation_unchanged() {
        let mut config = Config::default();
        config.validate_and_clamp();
        assert_eq!(config.drawing.default_thickness, 3.0);
        assert_eq!(config.stamp.step_multiplier, 10);
        assert_eq!(config.stamp.thickness_offset, 60);
        assert_eq!(config.arrow.length, 20.0);
    }

    #[test]
    fn out_of_range_values_are_clamped() {
        let mut config = Config::default();
        config.drawing.default_thickness = 500.0;
        config.stamp.step_multiplier = 0;
        config.stamp.thickness_offset = -10;
        config.arrow.angle_degrees = 89.0;

        config.validate_and_clamp();

        assert_eq!(config.drawing.default_thickness, 20.0);
        assert_eq!(config.stamp.step_multiplier, 1);
        assert_eq!(config.stamp.thickness_offset, 0);
        assert_eq!(config.arrow.angle_degrees, 60.0);
    }

    #[test]
    fn partial_toml_fills_in_defaults() {
        let config: Config = toml::from_str(
            r#"
            [stamp]
            file_location = "/tmp/stamp.png"
            "#,
        )
        .unwrap();

        assert_eq!(
            config.stamp.file_location.as_deref(),
            Some(std::path::Path::new("/tmp/stamp.png"))
        );
        assert_eq!(config.stamp.step_multiplier, 10);
        assert_eq!(config.drawing.default_thickness, 3.0);
        assert_eq!(config.arrow.angle_degrees, 30.0);
    }

    #[test]
    fn empty_toml_equals_defaults() {
        let config: Config = toml::from_str("").unwrap();
        assert!(config.stamp.file_location.is_none());
        assert_eq!(config.stamp.thickness_offset, 60);
    }
}

//! Configuration type definitions.

use std::path::PathBuf;

use schemars::JsonSchema;
use serde::{Deserialize, Serialize};

use super::enums::ColorSpec;

/// Drawing-related settings.
///
/// Controls the default appearance of drawing tools when a document opens.
/// The host UI can change these values at runtime through the tool options.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct DrawingConfig {
    /// Default tool color - either a named color (red, green, blue, yellow,
    /// orange, pink, white, black) or an RGB array like `[255, 0, 0]` for red
    #[serde(default = "default_color")]
    pub default_color: ColorSpec,

    /// Default stroke thickness in pixels (valid range: 1.0 - 20.0)
    #[serde(default = "default_thickness")]
    pub default_thickness: f64,
}

impl Default for DrawingConfig {
    fn default() -> Self {
        Self {
            default_color: default_color(),
            default_thickness: default_thickness(),
        }
    }
}

/// Stamp tool settings.
///
/// The stamp blits a user-supplied PNG; the slider value maps to its edge
/// length via `size * step_multiplier + thickness_offset`.
#[derive(Debug, Clone, Serialize, Deserialize, JsonSchema)]
pub struct StampConfig {
    /// Path to the PNG image blitted by the stamp tool.
    /// When unset, the stamp tool paints nothing and logs a warning.
    #[serde(default)]
    pub file_location: Option<PathBuf>,

    /// Pixels of growth per slider step (valid range: 1 - 50)
    #[serde(default = "default_step_multiplier")]
    pub step_multiplier: i32,

    /// Minimum stamp edge length in pixels (valid range: 0 - 200)
    #[serde(default = "default_thickness_offset")]
    pub thickness_offset: i32,
}

impl Default for StampConfig {
    fn default() -> Self {
        Self {
            file_location: None,
            step_multiplier: default_step_multiplier(),
            thickness_offset: default_thickness_offset(),
        }
    }
}

/// Arrow drawing settings.
///
/// Controls the appearance of arrowheads when using the arrow tool.
#[derive(Debug, Serialize, Deserialize, JsonSchema)]
pub struct ArrowConfig {
    /// Arrowhead length in pixels (valid range: 5.0 - 50.0)
    #[serde(default = "default_arrow_length")]
    pub length: f64,

    /// Arrowhead angle in degrees (valid range: 15.0 - 60.0)
    /// Smaller angles create narrower arrowheads, larger angles create wider ones
    #[serde(default = "default_arrow_angle")]
    pub angle_degrees: f64,
}

impl Default for ArrowConfig {
    fn default() -> Self {
        Self {
            length: default_arrow_length(),
            angle_degrees: default_arrow_angle(),
        }
    }
}

// =============================================================================
// Default value functions
// =============================================================================

fn default_color() -> ColorSpec {
    ColorSpec::Name("red".to_string())
}

fn default_thickness() -> f64 {
    3.0
}

fn default_step_multiplier() -> i32 {
    10
}

fn default_thickness_offset() -> i32 {
    60
}

fn default_arrow_length() -> f64 {
    20.0
}

fn default_arrow_angle() -> f64 {
    30.0
}

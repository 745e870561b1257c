//! RGBA color type backing tool painting and configuration.

/// An RGBA color with floating-point components.
///
/// All components are in the range 0.0 (minimum) to 1.0 (maximum), matching
/// Cairo's source color conventions.
///
/// # Examples
///
/// ```
/// use snapmark::draw::Color;
/// let semi_transparent_blue = Color { r: 0.0, g: 0.0, b: 1.0, a: 0.5 };
/// let orange = Color::from_rgb8(255, 128, 0);
/// ```
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Color {
    /// Red component (0.0 = no red, 1.0 = full red)
    pub r: f64,
    /// Green component (0.0 = no green, 1.0 = full green)
    pub g: f64,
    /// Blue component (0.0 = no blue, 1.0 = full blue)
    pub b: f64,
    /// Alpha/transparency (0.0 = fully transparent, 1.0 = fully opaque)
    pub a: f64,
}

impl Color {
    /// Creates a new color from RGBA components in the 0.0..=1.0 range.
    pub fn new(r: f64, g: f64, b: f64, a: f64) -> Self {
        Self { r, g, b, a }
    }

    /// Creates a fully opaque color from unit-range RGB components.
    pub const fn rgb(r: f64, g: f64, b: f64) -> Self {
        Self { r, g, b, a: 1.0 }
    }

    /// Creates a fully opaque color from 8-bit RGB components, as written
    /// in config files.
    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self {
            r: r as f64 / 255.0,
            g: g as f64 / 255.0,
            b: b as f64 / 255.0,
            a: 1.0,
        }
    }

    /// Installs this color as the context's source pattern.
    pub fn set_as_source(&self, ctx: &cairo::Context) {
        ctx.set_source_rgba(self.r, self.g, self.b, self.a);
    }
}

// ============================================================================
// Named palette, exposed to config files through `util::name_to_color`
// ============================================================================

/// Named color "red"
pub const RED: Color = Color::rgb(1.0, 0.0, 0.0);

/// Named color "green"
pub const GREEN: Color = Color::rgb(0.0, 1.0, 0.0);

/// Named color "blue"
pub const BLUE: Color = Color::rgb(0.0, 0.0, 1.0);

/// Named color "yellow"
pub const YELLOW: Color = Color::rgb(1.0, 1.0, 0.0);

/// Named color "orange"
pub const ORANGE: Color = Color::rgb(1.0, 0.5, 0.0);

/// Named color "pink"
pub const PINK: Color = Color::rgb(1.0, 0.0, 1.0);

/// Named color "white"
pub const WHITE: Color = Color::rgb(1.0, 1.0, 1.0);

/// Named color "black"
pub const BLACK: Color = Color::rgb(0.0, 0.0, 0.0);

//! Icon theming helpers.
//!
//! Tool icons ship in light and dark sets; which set to use depends on the
//! background they are drawn over. Hosts pass the surrounding background
//! color and get back the directory their icon loader should resolve file
//! names against.

use std::path::PathBuf;

use crate::draw::Color;

/// Perceived brightness of a color in the 0.0..=1.0 range.
///
/// Standard luma weights; alpha is ignored.
pub fn brightness(color: Color) -> f64 {
    color.r * 0.299 + color.g * 0.587 + color.b * 0.114
}

/// True when the color reads as dark, calling for the light icon set.
pub fn is_dark(color: Color) -> bool {
    brightness(color) < 0.5
}

/// Resolves the themed icon directory for the given background.
///
/// `in_editor` selects the editor icon scope (icons drawn over the document)
/// over the toolbar scope.
pub fn icon_dir(background: Color, in_editor: bool) -> PathBuf {
    let scope = if in_editor { "editor" } else { "toolbar" };
    let variant = if is_dark(background) { "white" } else { "black" };
    PathBuf::from("icons").join(scope).join(variant)
}

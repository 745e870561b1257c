//! Geometry primitives and helper functions.
//!
//! This module provides:
//! - [`Point`] and [`Rect`] value types used throughout the tool interface
//! - Arrowhead geometry calculations
//! - Color-name lookup for the configuration system

use crate::draw::{Color, color::*};

/// A position in document coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Point {
    pub x: i32,
    pub y: i32,
}

impl Point {
    /// Creates a new point.
    pub fn new(x: i32, y: i32) -> Self {
        Self { x, y }
    }
}

/// Axis-aligned rectangle used for bounding boxes and dirty region tracking.
///
/// Construction goes through [`Rect::new`] or the bound helpers, so a `Rect`
/// never holds a non-positive width or height.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Rect {
    pub x: i32,
    pub y: i32,
    pub width: i32,
    pub height: i32,
}

impl Rect {
    /// Creates a new rectangle. Returns `None` for non-positive dimensions.
    pub fn new(x: i32, y: i32, width: i32, height: i32) -> Option<Self> {
        if width <= 0 || height <= 0 {
            None
        } else {
            Some(Self {
                x,
                y,
                width,
                height,
            })
        }
    }

    /// Builds a rectangle from min/max bounds regardless of argument order.
    ///
    /// Degenerate extents (min == max on an axis) are widened to one pixel so
    /// that a point-sized mark still produces a usable invalidation rect.
    pub fn from_bounds(ax: i32, ay: i32, bx: i32, by: i32) -> Option<Self> {
        let (min_x, mut max_x) = (ax.min(bx), ax.max(bx));
        let (min_y, mut max_y) = (ay.min(by), ay.max(by));
        if min_x == max_x {
            max_x += 1;
        }
        if min_y == max_y {
            max_y += 1;
        }
        Self::new(min_x, min_y, max_x - min_x, max_y - min_y)
    }

    /// Builds a rectangle of the given dimensions centered on `center`.
    pub fn from_center(center: Point, width: i32, height: i32) -> Option<Self> {
        Self::new(center.x - width / 2, center.y - height / 2, width, height)
    }

    /// Returns true if rectangle has a positive area.
    pub fn is_valid(&self) -> bool {
        self.width > 0 && self.height > 0
    }
}

// ============================================================================
// Arrowhead Geometry
// ============================================================================

/// Calculates the two flank points of a V-shaped arrowhead.
///
/// The head sits at `tip` and opens towards `tail`. The head length is capped
/// at 30% of the line length so short drags do not produce oversized heads.
///
/// # Arguments
/// * `tip` - Point the arrow points at (head location)
/// * `tail` - Opposite end of the line
/// * `length` - Desired head length in pixels (capped at 30% of line length)
/// * `angle_degrees` - Angle between each head line and the main line
///
/// # Returns
/// Array `[(left_x, left_y), (right_x, right_y)]` of head line endpoints.
/// If the line is shorter than one pixel, both points collapse onto `tip`.
pub fn arrowhead_points(
    tip: Point,
    tail: Point,
    length: f64,
    angle_degrees: f64,
) -> [(f64, f64); 2] {
    let dx = (tip.x - tail.x) as f64;
    let dy = (tip.y - tail.y) as f64;
    let line_length = (dx * dx + dy * dy).sqrt();

    if line_length < 1.0 {
        // Line too short for a head
        return [(tip.x as f64, tip.y as f64), (tip.x as f64, tip.y as f64)];
    }

    // Unit direction from tail to tip
    let ux = dx / line_length;
    let uy = dy / line_length;

    let head_length = length.min(line_length * 0.3);

    let angle = angle_degrees.to_radians();
    let cos_a = angle.cos();
    let sin_a = angle.sin();

    let left_x = tip.x as f64 - head_length * (ux * cos_a - uy * sin_a);
    let left_y = tip.y as f64 - head_length * (uy * cos_a + ux * sin_a);

    let right_x = tip.x as f64 - head_length * (ux * cos_a + uy * sin_a);
    let right_y = tip.y as f64 - head_length * (uy * cos_a - ux * sin_a);

    [(left_x, left_y), (right_x, right_y)]
}

// ============================================================================
// Color Mapping
// ============================================================================

/// Maps color name strings to Color values.
///
/// Used by the configuration system to parse color names from the config file.
///
/// # Supported Names (case-insensitive)
/// - "red", "green", "blue", "yellow", "orange", "pink", "white", "black"
pub fn name_to_color(name: &str) -> Option<Color> {
    match name.to_lowercase().as_str() {
        "red" => Some(RED),
        "green" => Some(GREEN),
        "blue" => Some(BLUE),
        "yellow" => Some(YELLOW),
        "orange" => Some(ORANGE),
        "pink" => Some(PINK),
        "white" => Some(WHITE),
        "black" => Some(BLACK),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rect_rejects_non_positive_dimensions() {
        assert!(Rect::new(0, 0, 0, 10).is_none());
        assert!(Rect::new(0, 0, 10, -1).is_none());
        assert!(Rect::new(-5, -5, 1, 1).is_some());
    }

    #[test]
    fn from_bounds_is_order_independent() {
        let a = Rect::from_bounds(30, 40, 10, 20).unwrap();
        let b = Rect::from_bounds(10, 20, 30, 40).unwrap();
        assert_eq!(a, b);
        assert_eq!((a.x, a.y, a.width, a.height), (10, 20, 20, 20));
    }

    #[test]
    fn from_bounds_widens_degenerate_extents() {
        let rect = Rect::from_bounds(5, 5, 5, 5).unwrap();
        assert!(rect.is_valid());
        assert_eq!((rect.width, rect.height), (1, 1));
    }

    #[test]
    fn from_center_centers_odd_and_even_edges() {
        let rect = Rect::from_center(Point::new(10, 10), 60, 60).unwrap();
        assert_eq!((rect.x, rect.y), (-20, -20));
        assert_eq!((rect.width, rect.height), (60, 60));
    }

    #[test]
    fn arrowhead_caps_at_thirty_percent_of_line_length() {
        let [(lx, ly), _] =
            arrowhead_points(Point::new(10, 10), Point::new(0, 10), 100.0, 30.0);
        let distance = ((10.0 - lx).powi(2) + (10.0 - ly).powi(2)).sqrt();
        assert!((distance - 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn arrowhead_handles_degenerate_lines() {
        let [(lx, ly), (rx, ry)] =
            arrowhead_points(Point::new(5, 5), Point::new(5, 5), 15.0, 45.0);
        assert_eq!((lx, ly), (5.0, 5.0));
        assert_eq!((rx, ry), (5.0, 5.0));
    }

    #[test]
    fn name_to_color_matches_known_names() {
        assert_eq!(name_to_color("RED").unwrap(), RED);
        assert_eq!(name_to_color("white").unwrap(), WHITE);
        assert!(name_to_color("chartreuse").is_none());
    }
}

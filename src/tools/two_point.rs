//! Shared state for tools anchored by a drag gesture.

use crate::draw::Color;
use crate::draw::color::RED;
use crate::tools::CaptureContext;
use crate::util::{Point, Rect};

/// Start/end point pair owned by a two-point tool.
///
/// `first` is the anchor recorded by `draw_start`; `second` follows the
/// pointer during the drag.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PointPair {
    pub first: Point,
    pub second: Point,
}

/// State shared by every tool anchored by a start/end point pair and a
/// scalar size.
///
/// Concrete tools embed a `TwoPoint` and delegate their lifecycle hooks to
/// it. The state machine is one-way: a tool starts uncommitted, becomes
/// valid on [`TwoPoint::draw_start`], and stays valid until destroyed.
#[derive(Debug, Clone)]
pub struct TwoPoint {
    points: PointPair,
    size: i32,
    color: Color,
    valid: bool,
}

impl TwoPoint {
    /// Creates uncommitted two-point state with the given slider size.
    pub fn new(size: i32) -> Self {
        Self {
            points: PointPair::default(),
            size,
            color: RED,
            valid: false,
        }
    }

    /// Records the anchor point, captures the active color, and marks the
    /// tool valid. Both points start at the pointer so a click without a
    /// drag still yields well-defined geometry.
    pub fn draw_start(&mut self, context: &CaptureContext) {
        self.points.first = context.mouse_pos;
        self.points.second = context.mouse_pos;
        self.color = context.color;
        self.valid = true;
    }

    /// Drag update: moves the second point to the live pointer position.
    pub fn draw_move(&mut self, context: &CaptureContext) {
        self.points.second = context.mouse_pos;
    }

    pub fn is_valid(&self) -> bool {
        self.valid
    }

    pub fn points(&self) -> PointPair {
        self.points
    }

    pub fn size(&self) -> i32 {
        self.size
    }

    pub fn set_size(&mut self, size: i32) {
        self.size = size;
    }

    /// Color captured from the context at `draw_start`.
    pub fn color(&self) -> Color {
        self.color
    }

    /// Bounding rect padding both endpoints by `margin`.
    ///
    /// Suitable for stroke-style tools where paint extends half the stroke
    /// width beyond each endpoint. Min/max on both axes keeps the extents
    /// non-negative regardless of point ordering.
    pub fn stroke_bounds(&self, margin: i32) -> Option<Rect> {
        if !self.valid {
            return None;
        }
        let PointPair { first, second } = self.points;
        Rect::from_bounds(
            first.x.min(second.x) - margin,
            first.y.min(second.y) - margin,
            first.x.max(second.x) + margin,
            first.y.max(second.y) + margin,
        )
    }

    /// Bounding rect padding only the anchor point by `margin`, min/maxed
    /// with the raw drag point.
    ///
    /// Suitable for tools that paint a fixed-size mark centered on the
    /// anchor (the drag point contributes position but no paint of its own).
    pub fn anchor_bounds(&self, margin: i32) -> Option<Rect> {
        if !self.valid {
            return None;
        }
        let PointPair { first, second } = self.points;
        Rect::from_bounds(
            (first.x - margin).min(second.x),
            (first.y - margin).min(second.y),
            (first.x + margin).max(second.x),
            (first.y + margin).max(second.y),
        )
    }

    /// Cursor-following preview rect: a square of edge
    /// `tool_size + thickness_offset` centered on the live pointer.
    ///
    /// Independent of the committed points, so hosts can invalidate the
    /// preview region even before `draw_start`.
    pub fn preview_rect(context: &CaptureContext, thickness_offset: i32) -> Option<Rect> {
        let edge = (context.tool_size + thickness_offset).max(1);
        Rect::from_center(context.mouse_pos, edge, edge)
    }
}

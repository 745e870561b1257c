//! Dirty region tracking for incremental rendering.
//!
//! Collects axis-aligned rectangles that need repainting between frames,
//! sourced from tool bounding rects and preview rects.

use crate::tools::{CaptureContext, Tool};
use crate::util::Rect;

/// Tracks dirty rectangles accumulated between renders.
#[derive(Debug, Default)]
pub struct DirtyTracker {
    regions: Vec<Rect>,
    force_full: bool,
}

impl DirtyTracker {
    /// Creates a new, empty tracker.
    pub fn new() -> Self {
        Self::default()
    }

    /// Marks the entire surface as dirty. Clears any accumulated rectangles.
    pub fn mark_full(&mut self) {
        self.force_full = true;
        self.regions.clear();
    }

    /// Adds a dirty rectangle if the tracker is not already full.
    pub fn mark_rect(&mut self, rect: Rect) {
        if !rect.is_valid() || self.force_full {
            return;
        }
        self.regions.push(rect);
    }

    /// Adds a dirty rectangle when present.
    pub fn mark_optional_rect(&mut self, rect: Option<Rect>) {
        if let Some(rect) = rect {
            self.mark_rect(rect);
        }
    }

    /// Adds the bounding rect for the given tool.
    ///
    /// Invalid tools paint nothing, so a `None` bounding rect marks nothing.
    pub fn mark_tool(&mut self, tool: &dyn Tool) {
        self.mark_optional_rect(tool.bounding_rect());
    }

    /// Adds the cursor-following preview rect for the given tool.
    pub fn mark_preview(&mut self, tool: &dyn Tool, context: &CaptureContext) {
        self.mark_optional_rect(tool.mouse_preview_rect(context));
    }

    /// Drains the dirty regions gathered so far.
    ///
    /// When the full surface is marked, returns a single rectangle covering
    /// the entire surface; otherwise returns accumulated rectangles.
    pub fn take_regions(&mut self, width: i32, height: i32) -> Vec<Rect> {
        if self.force_full {
            self.force_full = false;
            self.regions.clear();
            if width > 0 && height > 0 {
                if let Some(full) = Rect::new(0, 0, width, height) {
                    return vec![full];
                }
            }
            Vec::new()
        } else {
            self.regions.drain(..).collect()
        }
    }
}

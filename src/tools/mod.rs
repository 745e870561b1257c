//! The annotation tool abstraction and the concrete tools built on it.
//!
//! A [`Tool`] is a user-selectable annotation operation with its own geometry
//! and paint logic. Tools are constructed when the user picks them from the
//! toolbox, mutated over the course of a click/drag interaction, and painted
//! in sequence by the compositing pipeline ([`crate::draw::pipeline`]).

pub mod arrow;
pub mod line;
pub mod stamp;
pub mod two_point;

// Re-export commonly used types at module level
pub use arrow::ArrowTool;
pub use line::LineTool;
pub use stamp::StampTool;
pub use two_point::{PointPair, TwoPoint};

use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use crate::config::Config;
use crate::draw::Color;
use crate::theme;
use crate::util::{Point, Rect};

/// Per-event context handed to every tool operation.
///
/// Describes the live pointer position, the configured slider size, and the
/// active color. Created per paint/preview event and read-only to tools.
#[derive(Debug, Clone, Copy)]
pub struct CaptureContext {
    /// Current pointer position in document coordinates
    pub mouse_pos: Point,
    /// Tool size slider value (0..N, tool-specific pixel mapping)
    pub tool_size: i32,
    /// Active drawing color
    pub color: Color,
}

/// Stable identifier distinguishing tool kinds for serialization and dispatch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ToolKind {
    /// Blits a configured image at the anchor point
    Stamp,
    /// Straight line between the drag endpoints
    Line,
    /// Line with a directional head at the anchor point
    Arrow,
}

impl ToolKind {
    /// Constructs a fresh uncommitted tool of this kind from the user
    /// configuration, as when the user selects it from the toolbox.
    pub fn create(&self, config: &Config) -> Box<dyn Tool> {
        let size = config.drawing.default_thickness.round() as i32;
        match self {
            ToolKind::Stamp => Box::new(StampTool::new(&config.stamp)),
            ToolKind::Line => Box::new(LineTool::new(size)),
            ToolKind::Arrow => Box::new(ArrowTool::new(size, &config.arrow)),
        }
    }
}

/// Capability interface implemented by every concrete annotation tool.
///
/// A tool starts *uncommitted*: it has no anchor and paints nothing. Calling
/// [`Tool::draw_start`] transitions it to *valid*, after which geometry
/// queries and [`Tool::process`] produce output. There is no back-transition;
/// a new interaction constructs a fresh tool.
///
/// Paint methods never panic or propagate errors: a tool that cannot acquire
/// a required resource logs a diagnostic and skips its paint, since one bad
/// tool must not abort rendering of the rest of the document.
pub trait Tool: std::fmt::Debug {
    /// Short human-readable tool name.
    fn name(&self) -> &'static str;

    /// One-line description shown in tooltips.
    fn description(&self) -> &'static str;

    /// Icon file name, resolved against the themed icon directory.
    fn icon_name(&self) -> &'static str;

    /// Stable kind identifier for dispatch and document serialization.
    fn kind(&self) -> ToolKind;

    /// Display string for the host's status line.
    ///
    /// Defaults to the tool name; tools that carry a sequence count append
    /// it after the name.
    fn info(&self) -> String {
        self.name().to_owned()
    }

    /// Sets the sequence count shown by [`Tool::info`].
    ///
    /// Hosts number repeated annotations with this; tools without a count
    /// ignore it.
    fn set_count(&mut self, _count: i32) {}

    /// Resolves the themed icon path for this tool.
    ///
    /// `background` selects the light or dark icon set so the glyph stays
    /// visible; `in_editor` selects the editor icon scope over the toolbar
    /// scope.
    fn icon(&self, background: Color, in_editor: bool) -> PathBuf {
        theme::icon_dir(background, in_editor).join(self.icon_name())
    }

    /// True once the tool has enough state to be rendered or bounded.
    fn is_valid(&self) -> bool;

    /// Minimal rectangle fully containing everything [`Tool::process`] paints,
    /// in document coordinates.
    ///
    /// Returns `None` while the tool is not valid: nothing to draw, nothing
    /// to bound. The host relies on this rect for canvas resizing, scrolling,
    /// and dirty-region invalidation, so it must stay consistent with the
    /// actual paint output.
    fn bounding_rect(&self) -> Option<Rect>;

    /// Invalidation rectangle for the cursor-following preview.
    ///
    /// Always centered on the live pointer position and sized from
    /// `context.tool_size` plus a fixed thickness offset, independent of
    /// whether the tool has been committed yet.
    fn mouse_preview_rect(&self, context: &CaptureContext) -> Option<Rect>;

    /// Begins the interaction: records the anchor point, captures the active
    /// color, and marks the tool valid.
    fn draw_start(&mut self, context: &CaptureContext);

    /// Drag update: moves the second point to the live pointer position.
    fn draw_move(&mut self, context: &CaptureContext);

    /// Hook for click-only (non-drag) interactions.
    fn pressed(&mut self, _context: &CaptureContext) {}

    /// Explicit size-sync hook driven by the UI slider.
    fn on_size_changed(&mut self, size: i32);

    /// Paints this tool's committed contribution onto the surface behind
    /// `ctx`.
    ///
    /// `base` is the unannotated screenshot, available to tools that sample
    /// source pixels. Graphics state mutated during the call is restored by
    /// the pipeline's [`crate::draw::StateGuard`], so tools compose
    /// order-independently on a shared surface.
    fn process(&self, ctx: &cairo::Context, base: &cairo::ImageSurface);

    /// Paints a live preview following the pointer, before the tool is
    /// committed.
    ///
    /// Persisted tool state may only change through [`Tool::on_size_changed`],
    /// so the preview always reflects the current slider value without
    /// disturbing the interaction in progress.
    fn paint_mouse_preview(&mut self, ctx: &cairo::Context, context: &CaptureContext);

    /// Deep-value clone with no shared mutable ownership with the source.
    fn boxed_clone(&self) -> Box<dyn Tool>;
}

impl Clone for Box<dyn Tool> {
    fn clone(&self) -> Self {
        self.boxed_clone()
    }
}

/// Ordered sequence of committed tools for one document.
///
/// Tools are painted in insertion order (first tool = bottom layer). Cloning
/// the chain deep-copies every tool, so a duplicated document mutates
/// independently of the original.
#[derive(Debug, Clone, Default)]
pub struct ToolChain {
    tools: Vec<Box<dyn Tool>>,
}

impl ToolChain {
    /// Creates a new empty chain.
    pub fn new() -> Self {
        Self::default()
    }

    /// Appends a tool on top of the existing sequence.
    pub fn add(&mut self, tool: Box<dyn Tool>) {
        self.tools.push(tool);
    }

    /// Attempts to append a tool, enforcing a maximum count when `max` > 0.
    ///
    /// Returns `true` if the tool was added, `false` if the limit would be
    /// exceeded.
    pub fn try_add(&mut self, tool: Box<dyn Tool>, max: usize) -> bool {
        if max == 0 || self.tools.len() < max {
            self.tools.push(tool);
            true
        } else {
            false
        }
    }

    /// Removes and returns the most recently added tool, if any.
    pub fn remove_last(&mut self) -> Option<Box<dyn Tool>> {
        self.tools.pop()
    }

    /// Removes all tools from the chain.
    pub fn clear(&mut self) {
        self.tools.clear();
    }

    /// The committed tools in paint order.
    pub fn tools(&self) -> &[Box<dyn Tool>] {
        &self.tools
    }

    pub fn len(&self) -> usize {
        self.tools.len()
    }

    pub fn is_empty(&self) -> bool {
        self.tools.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::StampConfig;
    use crate::draw::color::RED;

    fn context_at(x: i32, y: i32, size: i32) -> CaptureContext {
        CaptureContext {
            mouse_pos: Point::new(x, y),
            tool_size: size,
            color: RED,
        }
    }

    #[test]
    fn toolbox_creates_uncommitted_tools_of_each_kind() {
        let config = Config::default();
        for kind in [ToolKind::Stamp, ToolKind::Line, ToolKind::Arrow] {
            let tool = kind.create(&config);
            assert_eq!(tool.kind(), kind);
            assert!(!tool.is_valid());
            assert!(tool.bounding_rect().is_none());
        }
    }

    #[test]
    fn try_add_respects_limit() {
        let mut chain = ToolChain::new();
        assert!(chain.try_add(Box::new(LineTool::new(3)), 1));
        assert!(!chain.try_add(Box::new(LineTool::new(3)), 1));
        assert_eq!(chain.len(), 1);
    }

    #[test]
    fn remove_last_pops_in_reverse_insertion_order() {
        let mut chain = ToolChain::new();
        chain.add(Box::new(LineTool::new(3)));
        chain.add(Box::new(StampTool::new(&StampConfig::default())));

        assert_eq!(chain.remove_last().unwrap().kind(), ToolKind::Stamp);
        assert_eq!(chain.remove_last().unwrap().kind(), ToolKind::Line);
        assert!(chain.remove_last().is_none());
    }

    #[test]
    fn chain_clone_is_deep() {
        let mut chain = ToolChain::new();
        let mut line = LineTool::new(3);
        line.draw_start(&context_at(5, 5, 3));
        chain.add(Box::new(line));

        let mut copy = chain.clone();
        copy.tools[0].on_size_changed(17);

        let original_rect = chain.tools[0].bounding_rect().unwrap();
        let copied_rect = copy.tools[0].bounding_rect().unwrap();
        assert!(copied_rect.width > original_rect.width);
    }

    #[test]
    fn boxed_clone_preserves_identity_and_state() {
        let mut stamp = StampTool::new(&StampConfig::default());
        stamp.draw_start(&context_at(10, 10, 2));
        stamp.set_count(3);

        let copy = stamp.boxed_clone();
        assert_eq!(copy.name(), stamp.name());
        assert_eq!(copy.kind(), stamp.kind());
        assert_eq!(copy.is_valid(), stamp.is_valid());
        assert_eq!(copy.bounding_rect(), stamp.bounding_rect());
        assert_eq!(copy.info(), stamp.info());
    }

    #[test]
    fn info_defaults_to_the_tool_name() {
        let mut line = LineTool::new(3);
        line.set_count(5);
        assert_eq!(line.info(), "Line");
    }

    #[test]
    fn mutating_a_copy_leaves_the_original_alone() {
        let mut stamp = StampTool::new(&StampConfig::default());
        stamp.draw_start(&context_at(10, 10, 2));
        let before = stamp.bounding_rect();

        let mut copy = stamp.boxed_clone();
        copy.on_size_changed(40);

        assert_eq!(stamp.bounding_rect(), before);
        assert_ne!(copy.bounding_rect(), before);
    }
}

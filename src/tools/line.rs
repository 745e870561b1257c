//! Line tool: a straight stroke between the drag endpoints.

use crate::tools::two_point::TwoPoint;
use crate::tools::{CaptureContext, Tool, ToolKind};
use crate::util::{Point, Rect};

/// Extra pixels added to the slider value for the preview rect, so even a
/// zero-size preview stays visible under the cursor.
const PREVIEW_THICKNESS_OFFSET: i32 = 2;

/// Draws a straight line in the captured color between the anchor and the
/// drag endpoint.
#[derive(Debug, Clone)]
pub struct LineTool {
    base: TwoPoint,
}

impl LineTool {
    /// Creates an uncommitted line tool with the given slider size.
    pub fn new(size: i32) -> Self {
        Self {
            base: TwoPoint::new(size),
        }
    }

    /// Stroke width in pixels for the current slider value.
    fn thickness(&self) -> f64 {
        self.base.size().max(1) as f64
    }

    fn stroke_padding(&self) -> i32 {
        ((self.thickness() / 2.0).ceil() as i32).max(1)
    }

    fn stroke(&self, ctx: &cairo::Context, from: Point, to: Point) {
        self.base.color().set_as_source(ctx);
        ctx.set_line_width(self.thickness());
        ctx.set_line_cap(cairo::LineCap::Round);

        ctx.move_to(from.x as f64, from.y as f64);
        ctx.line_to(to.x as f64, to.y as f64);
        let _ = ctx.stroke();
    }
}

impl Tool for LineTool {
    fn name(&self) -> &'static str {
        "Line"
    }

    fn description(&self) -> &'static str {
        "Draws a straight line between two points"
    }

    fn icon_name(&self) -> &'static str {
        "line.svg"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Line
    }

    fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    fn bounding_rect(&self) -> Option<Rect> {
        self.base.stroke_bounds(self.stroke_padding())
    }

    fn mouse_preview_rect(&self, context: &CaptureContext) -> Option<Rect> {
        TwoPoint::preview_rect(context, PREVIEW_THICKNESS_OFFSET)
    }

    fn draw_start(&mut self, context: &CaptureContext) {
        self.base.draw_start(context);
    }

    fn draw_move(&mut self, context: &CaptureContext) {
        self.base.draw_move(context);
    }

    fn on_size_changed(&mut self, size: i32) {
        self.base.set_size(size);
    }

    fn process(&self, ctx: &cairo::Context, _base: &cairo::ImageSurface) {
        if !self.is_valid() {
            return;
        }
        let points = self.base.points();
        self.stroke(ctx, points.first, points.second);
    }

    fn paint_mouse_preview(&mut self, ctx: &cairo::Context, context: &CaptureContext) {
        self.on_size_changed(context.tool_size);

        // A one-pixel segment with a round cap reads as a dot under the
        // cursor, previewing the stroke width.
        context.color.set_as_source(ctx);
        ctx.set_line_width(self.thickness());
        ctx.set_line_cap(cairo::LineCap::Round);
        ctx.move_to(context.mouse_pos.x as f64, context.mouse_pos.y as f64);
        ctx.line_to(
            context.mouse_pos.x as f64 + 1.0,
            context.mouse_pos.y as f64 + 1.0,
        );
        let _ = ctx.stroke();
    }

    fn boxed_clone(&self) -> Box<dyn Tool> {
        Box::new(self.clone())
    }
}

//! Arrow tool: a line with a directional head at the anchor point.

use crate::config::ArrowConfig;
use crate::tools::two_point::TwoPoint;
use crate::tools::{CaptureContext, Tool, ToolKind};
use crate::util::{self, Point, Rect};

/// Extra pixels added to the slider value for the preview rect.
const PREVIEW_THICKNESS_OFFSET: i32 = 2;

/// Draws a line with a V-shaped head at the anchor, pointing back along the
/// drag direction.
///
/// Head length and opening angle come from [`ArrowConfig`]; the length is
/// capped at 30% of the line so short drags keep sensible proportions.
#[derive(Debug, Clone)]
pub struct ArrowTool {
    base: TwoPoint,
    head_length: f64,
    head_angle: f64,
}

impl ArrowTool {
    /// Creates an uncommitted arrow tool from the arrow configuration.
    pub fn new(size: i32, config: &ArrowConfig) -> Self {
        Self {
            base: TwoPoint::new(size),
            head_length: config.length,
            head_angle: config.angle_degrees,
        }
    }

    fn thickness(&self) -> f64 {
        self.base.size().max(1) as f64
    }

    fn stroke_padding(&self) -> i32 {
        ((self.thickness() / 2.0).ceil() as i32).max(1)
    }

    fn draw(&self, ctx: &cairo::Context, tip: Point, tail: Point) {
        self.base.color().set_as_source(ctx);
        ctx.set_line_width(self.thickness());
        ctx.set_line_cap(cairo::LineCap::Round);

        // Shaft
        ctx.move_to(tip.x as f64, tip.y as f64);
        ctx.line_to(tail.x as f64, tail.y as f64);
        let _ = ctx.stroke();

        // Head flanks
        let flanks = util::arrowhead_points(tip, tail, self.head_length, self.head_angle);
        for (fx, fy) in flanks {
            ctx.move_to(tip.x as f64, tip.y as f64);
            ctx.line_to(fx, fy);
            let _ = ctx.stroke();
        }
    }
}

impl Tool for ArrowTool {
    fn name(&self) -> &'static str {
        "Arrow"
    }

    fn description(&self) -> &'static str {
        "Draws an arrow pointing at the anchor point"
    }

    fn icon_name(&self) -> &'static str {
        "arrow.svg"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Arrow
    }

    fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    fn bounding_rect(&self) -> Option<Rect> {
        if !self.base.is_valid() {
            return None;
        }
        let points = self.base.points();
        let flanks = util::arrowhead_points(
            points.first,
            points.second,
            self.head_length,
            self.head_angle,
        );

        let mut min_x = points.first.x.min(points.second.x) as f64;
        let mut max_x = points.first.x.max(points.second.x) as f64;
        let mut min_y = points.first.y.min(points.second.y) as f64;
        let mut max_y = points.first.y.max(points.second.y) as f64;

        for (fx, fy) in flanks {
            min_x = min_x.min(fx);
            max_x = max_x.max(fx);
            min_y = min_y.min(fy);
            max_y = max_y.max(fy);
        }

        let padding = self.stroke_padding() as f64;
        Rect::from_bounds(
            (min_x - padding).floor() as i32,
            (min_y - padding).floor() as i32,
            (max_x + padding).ceil() as i32,
            (max_y + padding).ceil() as i32,
        )
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
        self.draw(ctx, points.first, points.second);
    }

    fn paint_mouse_preview(&mut self, ctx: &cairo::Context, context: &CaptureContext) {
        self.on_size_changed(context.tool_size);

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

#[cfg(test)]
mod tests {
    use super::*;
    use crate::draw::color::RED;

    fn context_at(x: i32, y: i32) -> CaptureContext {
        CaptureContext {
            mouse_pos: Point::new(x, y),
            tool_size: 3,
            color: RED,
        }
    }

    #[test]
    fn bounding_rect_includes_the_head_flanks() {
        let mut arrow = ArrowTool::new(3, &ArrowConfig::default());
        arrow.draw_start(&context_at(100, 100));
        arrow.draw_move(&context_at(50, 120));

        let rect = arrow.bounding_rect().unwrap();
        let x_max = rect.x + rect.width;
        let y_max = rect.y + rect.height;
        assert!(rect.x <= 50 && x_max >= 100);
        assert!(rect.y <= 100 && y_max >= 120);

        let flanks = util::arrowhead_points(
            Point::new(100, 100),
            Point::new(50, 120),
            20.0,
            30.0,
        );
        for (fx, fy) in flanks {
            assert!(fx >= rect.x as f64 && fx <= x_max as f64);
            assert!(fy >= rect.y as f64 && fy <= y_max as f64);
        }
    }

    #[test]
    fn uncommitted_arrow_is_unbounded() {
        let arrow = ArrowTool::new(3, &ArrowConfig::default());
        assert!(!arrow.is_valid());
        assert!(arrow.bounding_rect().is_none());
    }
}

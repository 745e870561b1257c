//! Stamp tool: blits a configured image at the clicked point.

use std::path::PathBuf;

use log::warn;

use crate::config::StampConfig;
use crate::draw::bitmap;
use crate::tools::two_point::TwoPoint;
use crate::tools::{CaptureContext, Tool, ToolKind};
use crate::util::{Point, Rect};

/// Blits a user-configured PNG centered on the anchor point, scaled by the
/// size slider.
///
/// The slider value maps to an edge length via `size * step_multiplier +
/// thickness_offset`, so the smallest stamp is never below the offset and
/// each slider step grows the image perceptibly. Both constants come from
/// [`StampConfig`].
#[derive(Debug, Clone)]
pub struct StampTool {
    base: TwoPoint,
    file_location: Option<PathBuf>,
    step_multiplier: i32,
    thickness_offset: i32,
    count: i32,
}

impl StampTool {
    /// Creates an uncommitted stamp tool from the stamp configuration.
    pub fn new(config: &StampConfig) -> Self {
        Self {
            base: TwoPoint::new(0),
            file_location: config.file_location.clone(),
            step_multiplier: config.step_multiplier,
            thickness_offset: config.thickness_offset,
            count: 0,
        }
    }

    /// Sequence number the host assigned to this stamp.
    pub fn count(&self) -> i32 {
        self.count
    }

    /// Edge length in pixels of the blitted image for the current size.
    pub fn effective_size(&self) -> i32 {
        self.base.size() * self.step_multiplier + self.thickness_offset
    }

    /// Loads the configured bitmap and blits it centered on `center` at the
    /// effective size.
    ///
    /// A missing configuration or failed load logs one warning and paints
    /// nothing; this runs inside interactive paint callbacks and must not
    /// fail the frame.
    fn blit_centered(&self, ctx: &cairo::Context, center: Point) {
        let Some(path) = self.file_location.as_deref() else {
            warn!("no stamp image configured, skipping stamp paint");
            return;
        };

        let pix = match bitmap::load_png(path) {
            Ok(pix) => pix,
            Err(err) => {
                warn!("failed to load the stamp image: {err}");
                return;
            }
        };

        let edge = self.effective_size().max(1) as f64;
        let offset = edge / 2.0;

        ctx.save().ok();
        ctx.translate(center.x as f64 - offset, center.y as f64 - offset);
        ctx.scale(edge / pix.width() as f64, edge / pix.height() as f64);
        if ctx.set_source_surface(&pix, 0.0, 0.0).is_ok() {
            let _ = ctx.paint();
        }
        ctx.restore().ok();
    }
}

impl Tool for StampTool {
    fn name(&self) -> &'static str {
        "Stamp"
    }

    fn description(&self) -> &'static str {
        "Adds a stamp image at the clicked point"
    }

    fn icon_name(&self) -> &'static str {
        "stamp.svg"
    }

    fn kind(&self) -> ToolKind {
        ToolKind::Stamp
    }

    fn info(&self) -> String {
        format!("{} - {}", self.name(), self.count)
    }

    fn set_count(&mut self, count: i32) {
        self.count = count;
    }

    fn is_valid(&self) -> bool {
        self.base.is_valid()
    }

    fn bounding_rect(&self) -> Option<Rect> {
        // The preview can render larger than the committed stamp, so the
        // bubble margin uses the full effective size rather than half of it.
        self.base.anchor_bounds(self.effective_size())
    }

    fn mouse_preview_rect(&self, context: &CaptureContext) -> Option<Rect> {
        TwoPoint::preview_rect(context, self.thickness_offset)
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
        self.blit_centered(ctx, self.base.points().first);
    }

    fn paint_mouse_preview(&mut self, ctx: &cairo::Context, context: &CaptureContext) {
        // Sync with the slider first so the preview reflects the current
        // value even before the tool is committed.
        self.on_size_changed(context.tool_size);
        self.blit_centered(ctx, context.mouse_pos);
    }

    fn boxed_clone(&self) -> Box<dyn Tool> {
        Box::new(self.clone())
    }
}

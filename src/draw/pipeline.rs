//! Compositing pipeline sequencing tools onto Cairo surfaces.
//!
//! Two paths share the same tool interface: [`compose`] renders the committed
//! tool sequence against an off-screen surface to produce the exported image,
//! and [`paint_preview`] paints the live cursor-following preview onto the
//! on-screen surface. Every tool call runs inside a [`StateGuard`] so sibling
//! tools never observe leaked pen/brush/font configuration.

use cairo::{Context, Format, ImageSurface};
use thiserror::Error;

use crate::tools::{CaptureContext, Tool};

/// Errors that can occur while preparing the compose surface.
///
/// Paint operations themselves never error out of the pipeline; Cairo put
/// into an error state simply stops producing pixels, mirroring how paint
/// callbacks must not fail mid-frame.
#[derive(Debug, Error)]
pub enum ComposeError {
    #[error("failed to prepare compose surface: {0}")]
    Backend(#[from] cairo::Error),
}

/// Scoped save/restore guard for a Cairo context.
///
/// Saves the graphics state on construction and restores it on drop, so the
/// state comes back even on early-return paths inside a tool's paint code.
pub struct StateGuard<'a> {
    ctx: &'a Context,
}

impl<'a> StateGuard<'a> {
    pub fn new(ctx: &'a Context) -> Self {
        ctx.save().ok();
        Self { ctx }
    }
}

impl Drop for StateGuard<'_> {
    fn drop(&mut self) {
        self.ctx.restore().ok();
    }
}

/// Renders every valid tool's committed contribution in sequence order
/// (first tool = bottom layer).
///
/// Each `process` call is wrapped in a [`StateGuard`], keeping the tools
/// order-independent with respect to graphics state.
pub fn render_tools(ctx: &Context, tools: &[Box<dyn Tool>], base: &ImageSurface) {
    for tool in tools {
        if !tool.is_valid() {
            continue;
        }
        let _guard = StateGuard::new(ctx);
        tool.process(ctx, base);
    }
}

/// Composes the base image and the committed tool sequence into a new
/// off-screen surface.
///
/// This is the export path: the returned surface holds the final annotated
/// image at the base image's dimensions.
pub fn compose(base: &ImageSurface, tools: &[Box<dyn Tool>]) -> Result<ImageSurface, ComposeError> {
    let output = ImageSurface::create(Format::ARgb32, base.width(), base.height())?;
    let ctx = Context::new(&output)?;

    {
        let _guard = StateGuard::new(&ctx);
        ctx.set_source_surface(base, 0.0, 0.0)?;
        let _ = ctx.paint();
    }

    render_tools(&ctx, tools, base);
    drop(ctx);

    Ok(output)
}

/// Paints a tool's live preview onto the interactive surface.
///
/// Wraps the call in a [`StateGuard`]; the tool may update its size via its
/// size-sync hook but otherwise leaves persisted state alone.
pub fn paint_preview(ctx: &Context, tool: &mut dyn Tool, context: &CaptureContext) {
    let _guard = StateGuard::new(ctx);
    tool.paint_mouse_preview(ctx, context);
}

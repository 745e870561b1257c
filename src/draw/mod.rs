//! Rendering primitives and the Cairo compositing pipeline.
//!
//! This module defines the drawing side of the annotation engine:
//! - [`Color`]: RGBA color representation with predefined color constants
//! - [`bitmap`]: PNG decoding for stamp images
//! - [`pipeline`]: the compositor that sequences tools onto a surface
//! - [`DirtyTracker`]: dirty region accumulation for incremental repaints

pub mod bitmap;
pub mod color;
pub mod dirty;
pub mod pipeline;

// Re-export commonly used types at module level
pub use color::Color;
pub use color::{BLACK, BLUE, GREEN, ORANGE, PINK, RED, WHITE, YELLOW};
pub use dirty::DirtyTracker;
pub use pipeline::{ComposeError, StateGuard, compose, paint_preview, render_tools};

//! Annotation tool engine for screenshot editors.
//!
//! Exposes the tool abstraction ([`tools::Tool`]), the concrete annotation
//! tools built on it, and the Cairo compositing pipeline that turns a base
//! screenshot plus a sequence of committed tools into a final image. Host
//! applications provide the windowing, input events, and export surface;
//! this crate provides everything between a pointer position and painted
//! pixels.

pub mod config;
pub mod draw;
pub mod theme;
pub mod tools;
pub mod util;

pub use config::Config;

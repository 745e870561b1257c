//! PNG bitmap loading for stamp images.
//!
//! The stamp tool references an external image by path; this module decodes
//! it into a Cairo surface. Failure is always recoverable for callers: a tool
//! that cannot load its bitmap skips painting instead of aborting the render
//! of the rest of the document.

use std::fs::File;
use std::path::{Path, PathBuf};

use cairo::ImageSurface;
use thiserror::Error;

/// Errors that can occur while loading a bitmap from disk.
#[derive(Debug, Error)]
pub enum BitmapError {
    #[error("failed to open bitmap {path}: {source}")]
    Open {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("failed to decode bitmap {path}: {source}")]
    Decode {
        path: PathBuf,
        source: cairo::IoError,
    },

    #[error("bitmap {path} decoded to an empty surface")]
    Empty { path: PathBuf },
}

/// Loads a PNG file into an ARGB image surface.
///
/// Returns an error for a missing file, unsupported or corrupt data, or an
/// image with no pixels. Callers treat any error as "no bitmap" and degrade
/// gracefully.
pub fn load_png(path: &Path) -> Result<ImageSurface, BitmapError> {
    let mut file = File::open(path).map_err(|source| BitmapError::Open {
        path: path.to_path_buf(),
        source,
    })?;

    let surface =
        ImageSurface::create_from_png(&mut file).map_err(|source| BitmapError::Decode {
            path: path.to_path_buf(),
            source,
        })?;

    if surface.width() <= 0 || surface.height() <= 0 {
        return Err(BitmapError::Empty {
            path: path.to_path_buf(),
        });
    }

    Ok(surface)
}

#[cfg(test)]
mod tests {
    use super::*;
    use cairo::{Context, Format};

    #[test]
    fn load_png_reports_missing_file() {
        let dir = tempfile::tempdir().unwrap();
        let missing = dir.path().join("nope.png");
        match load_png(&missing) {
            Err(BitmapError::Open { path, .. }) => assert_eq!(path, missing),
            other => panic!("expected open error, got {other:?}"),
        }
    }

    #[test]
    fn load_png_reports_corrupt_data() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("garbage.png");
        std::fs::write(&path, b"not a png at all").unwrap();
        assert!(matches!(load_png(&path), Err(BitmapError::Decode { .. })));
    }

    #[test]
    fn load_png_round_trips_a_real_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("dot.png");

        let mut pix = ImageSurface::create(Format::ARgb32, 8, 6).unwrap();
        {
            let ctx = Context::new(&pix).unwrap();
            ctx.set_source_rgba(0.0, 1.0, 0.0, 1.0);
            ctx.paint().unwrap();
        }
        let mut file = File::create(&path).unwrap();
        pix.write_to_png(&mut file).unwrap();

        let loaded = load_png(&path).unwrap();
        assert_eq!(loaded.width(), 8);
        assert_eq!(loaded.height(), 6);
    }
}

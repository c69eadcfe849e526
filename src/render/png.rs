//! Frame decoding and PNG output.
//!
//! Frames are decoded to straight-alpha RGBA; the composed canvas is written
//! back as PNG. Pixel data is never resized or re-encoded in between.

use std::fs;
use std::path::Path;

use image::RgbaImage;

use crate::error::{Result, SheetError};

/// Decode one frame file to RGBA.
///
/// Any decode failure is reported as an unsupported image naming the file.
pub fn read_frame(path: &Path) -> Result<RgbaImage> {
    let image = image::open(path).map_err(|e| SheetError::UnsupportedImage {
        path: path.to_path_buf(),
        message: e.to_string(),
    })?;
    Ok(image.to_rgba8())
}

/// Write a composed canvas to a PNG file, creating parent directories as
/// needed.
pub fn write_png(canvas: &RgbaImage, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent).map_err(|e| SheetError::Io {
            path: parent.to_path_buf(),
            message: format!("Failed to create output directory: {}", e),
        })?;
    }

    canvas.save(path).map_err(|e| SheetError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write PNG: {}", e),
    })?;

    Ok(())
}

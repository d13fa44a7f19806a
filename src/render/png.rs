//! PNG output for canvases.

use std::path::Path;

use image::{ImageBuffer, Rgba, RgbaImage};

use crate::error::{GenError, Result};

use super::Canvas;

/// Canvas dimensions as the encoder's `u32` sizes.
fn image_size(width: usize, height: usize) -> Result<(u32, u32)> {
    match (u32::try_from(width), u32::try_from(height)) {
        (Ok(w), Ok(h)) => Ok((w, h)),
        _ => Err(GenError::Build {
            message: format!("Canvas {}x{} is too large for PNG output", width, height),
            help: None,
        }),
    }
}

/// Convert a canvas to an RGBA image, keeping alpha as-is.
pub fn to_image(canvas: &Canvas) -> Result<RgbaImage> {
    let (width, height) = image_size(canvas.width(), canvas.height())?;
    let mut img: RgbaImage = ImageBuffer::new(width, height);

    for (y, row) in canvas.pixels().iter().enumerate() {
        for (x, colour) in row.iter().enumerate() {
            img.put_pixel(x as u32, y as u32, Rgba(colour.to_rgba()));
        }
    }

    Ok(img)
}

/// Write a canvas to a PNG file, overwriting any existing file.
pub fn write_png(canvas: &Canvas, path: &Path) -> Result<()> {
    to_image(canvas)?
        .save_with_format(path, image::ImageFormat::Png)
        .map_err(|e| GenError::Io {
            path: path.to_path_buf(),
            message: format!("Failed to write PNG: {}", e),
        })?;

    Ok(())
}

//! Canvas - a fixed-size pixel grid with clipped drawing primitives.
//!
//! Coordinates are signed so callers can draw shapes that run off the edge.
//! Anything outside the grid is dropped silently; no primitive can fail.

use crate::types::Colour;

/// A grid of colours, transparent until drawn on.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Canvas {
    /// Pixel grid (row-major: pixels[y][x]).
    pixels: Vec<Vec<Colour>>,

    /// Width in pixels.
    width: usize,

    /// Height in pixels.
    height: usize,
}

impl Canvas {
    /// Create a fully transparent canvas.
    pub fn new(width: usize, height: usize) -> Self {
        Self {
            pixels: vec![vec![Colour::TRANSPARENT; width]; height],
            width,
            height,
        }
    }

    /// Get the width in pixels.
    pub fn width(&self) -> usize {
        self.width
    }

    /// Get the height in pixels.
    pub fn height(&self) -> usize {
        self.height
    }

    /// Get the dimensions as (width, height).
    pub fn size(&self) -> (usize, usize) {
        (self.width, self.height)
    }

    /// Get a pixel at the given position.
    pub fn get(&self, x: usize, y: usize) -> Option<Colour> {
        self.pixels.get(y).and_then(|row| row.get(x)).copied()
    }

    /// Get a reference to the pixel grid.
    pub fn pixels(&self) -> &[Vec<Colour>] {
        &self.pixels
    }

    /// Set one pixel. Out-of-bounds writes are ignored.
    pub fn set_pixel(&mut self, x: i32, y: i32, colour: Colour) {
        if x < 0 || y < 0 {
            return;
        }
        let (x, y) = (x as usize, y as usize);
        if x < self.width && y < self.height {
            self.pixels[y][x] = colour;
        }
    }

    /// Fill the rectangle `[x, x + w) × [y, y + h)`.
    ///
    /// Zero or negative extents draw nothing; the rest is clipped.
    pub fn fill_rect(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        for py in y..y.saturating_add(h) {
            for px in x..x.saturating_add(w) {
                self.set_pixel(px, py, colour);
            }
        }
    }

    /// Draw a one-pixel border around the rectangle `[x, x + w) × [y, y + h)`.
    pub fn draw_outline(&mut self, x: i32, y: i32, w: i32, h: i32, colour: Colour) {
        let right = x.saturating_add(w).saturating_sub(1);
        let bottom = y.saturating_add(h).saturating_sub(1);
        for px in x..x.saturating_add(w) {
            self.set_pixel(px, y, colour);
            self.set_pixel(px, bottom, colour);
        }
        for py in y..y.saturating_add(h) {
            self.set_pixel(x, py, colour);
            self.set_pixel(right, py, colour);
        }
    }

    /// Copy out frame `index` of a horizontal strip with cells `frame_width` wide.
    ///
    /// Columns past the right edge come back transparent.
    pub fn frame(&self, index: usize, frame_width: usize) -> Canvas {
        let mut cell = Canvas::new(frame_width, self.height);
        let x0 = index * frame_width;
        for (y, row) in cell.pixels.iter_mut().enumerate() {
            for (x, pixel) in row.iter_mut().enumerate() {
                if let Some(c) = self.get(x0 + x, y) {
                    *pixel = c;
                }
            }
        }
        cell
    }

    /// Check whether every pixel is transparent.
    pub fn is_blank(&self) -> bool {
        self.pixels.iter().flatten().all(|c| c.is_transparent())
    }

    /// Convert to a flat RGBA buffer (for image output).
    pub fn to_rgba_buffer(&self) -> Vec<u8> {
        let mut buffer = Vec::with_capacity(self.width * self.height * 4);
        for row in &self.pixels {
            for colour in row {
                buffer.extend_from_slice(&colour.to_rgba());
            }
        }
        buffer
    }
}

//! Background scenery: cloud, bush and hill.

use crate::render::Canvas;
use crate::types::palette::{
    BUSH_LIGHT, BUSH_MAIN, CLOUD_SHADE, CLOUD_WHITE, HILL_DARK, HILL_GREEN,
};

/// Cloud, 48x24.
pub fn cloud() -> Canvas {
    let mut img = Canvas::new(48, 24);

    // Puffs
    img.fill_rect(8, 8, 32, 12, CLOUD_WHITE);
    img.fill_rect(4, 10, 8, 8, CLOUD_WHITE);
    img.fill_rect(36, 10, 8, 8, CLOUD_WHITE);
    img.fill_rect(12, 4, 12, 8, CLOUD_WHITE);
    img.fill_rect(24, 4, 12, 8, CLOUD_WHITE);
    img.fill_rect(16, 0, 16, 8, CLOUD_WHITE);

    img.fill_rect(10, 16, 28, 2, CLOUD_SHADE);

    img
}

/// Bush, 48x16.
pub fn bush() -> Canvas {
    let mut img = Canvas::new(48, 16);

    img.fill_rect(4, 8, 40, 8, BUSH_MAIN);
    img.fill_rect(8, 4, 16, 8, BUSH_MAIN);
    img.fill_rect(24, 4, 16, 8, BUSH_MAIN);
    img.fill_rect(12, 0, 8, 8, BUSH_MAIN);
    img.fill_rect(28, 0, 8, 8, BUSH_MAIN);

    img.fill_rect(14, 2, 4, 4, BUSH_LIGHT);
    img.fill_rect(30, 2, 4, 4, BUSH_LIGHT);

    img
}

/// Hill, 64x32: one scanline per row, each narrower than the one below.
///
/// Row `y` spans `(32 - y) * 2` pixels starting at `x = y`, so the top row
/// covers the full canvas width and the silhouette tapers to the bottom.
/// Rows are clipped to the canvas.
pub fn hill() -> Canvas {
    let mut img = Canvas::new(64, 32);

    for y in 0..32 {
        let width = (32 - y) * 2;
        let x_start = 32 - (32 - y);
        img.fill_rect(x_start, y, width, 1, HILL_GREEN);
    }

    img.fill_rect(24, 16, 8, 8, HILL_DARK);
    img.fill_rect(32, 20, 6, 6, HILL_DARK);

    img
}

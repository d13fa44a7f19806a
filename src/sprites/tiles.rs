//! Level tiles: ground, brick, question block, empty block and pipes.

use crate::render::Canvas;
use crate::types::palette::{
    BRICK_DARK, BRICK_LIGHT, BRICK_MAIN, GROUND_DARK, GROUND_MAIN, GROUND_TOP, HILL_GREEN,
    PIPE_DARK, PIPE_LIGHT, PIPE_MAIN, PIPE_RIM, QUESTION_DARK, QUESTION_LIGHT, QUESTION_YELLOW,
};

pub const TILE: i32 = 16;

/// Grass-topped ground tile, 16x16.
pub fn ground() -> Canvas {
    let mut img = Canvas::new(16, 16);

    img.fill_rect(0, 0, 16, 4, GROUND_TOP);
    for x in [2, 7, 12] {
        img.set_pixel(x, 0, HILL_GREEN);
    }

    img.fill_rect(0, 4, 16, 12, GROUND_MAIN);

    // Dirt speckles
    for y in (6..15).step_by(3) {
        for x in (2..15).step_by(4) {
            img.set_pixel(x, y, GROUND_DARK);
            img.set_pixel(x + 1, y + 1, GROUND_DARK);
        }
    }

    img
}

/// Brick tile, 16x16: two courses with offset joints.
pub fn brick() -> Canvas {
    let mut img = Canvas::new(16, 16);

    img.fill_rect(0, 0, 16, 16, BRICK_MAIN);

    // Upper course
    img.fill_rect(7, 0, 1, 7, BRICK_DARK);

    // Mortar
    img.fill_rect(0, 7, 16, 1, BRICK_DARK);
    img.fill_rect(0, 15, 16, 1, BRICK_DARK);

    // Lower course
    img.fill_rect(3, 8, 1, 7, BRICK_DARK);
    img.fill_rect(12, 8, 1, 7, BRICK_DARK);

    img.set_pixel(1, 1, BRICK_LIGHT);
    img.set_pixel(9, 1, BRICK_LIGHT);
    img.set_pixel(5, 9, BRICK_LIGHT);

    img
}

/// Question block strip, 4 frames of 16x16. The "?" bobs by one pixel
/// on odd frames.
pub fn question() -> Canvas {
    let mut img = Canvas::new(64, 16);

    for frame in 0..4 {
        let x = frame * TILE;

        img.fill_rect(x, 0, 16, 16, QUESTION_YELLOW);
        img.draw_outline(x, 0, 16, 16, QUESTION_DARK);

        img.fill_rect(x + 1, 1, 14, 1, QUESTION_LIGHT);
        img.fill_rect(x + 1, 1, 1, 14, QUESTION_LIGHT);

        let qx = x + 5;
        let qy = 3 + frame % 2;

        img.fill_rect(qx + 1, qy, 4, 2, QUESTION_DARK);
        img.fill_rect(qx + 4, qy + 2, 2, 2, QUESTION_DARK);
        img.fill_rect(qx + 2, qy + 4, 2, 2, QUESTION_DARK);
        // Dot
        img.fill_rect(qx + 2, qy + 7, 2, 2, QUESTION_DARK);
    }

    img
}

/// Used-up question block, 16x16.
pub fn empty_block() -> Canvas {
    let mut img = Canvas::new(16, 16);

    img.fill_rect(0, 0, 16, 16, GROUND_MAIN);
    img.draw_outline(0, 0, 16, 16, GROUND_DARK);
    img.fill_rect(2, 2, 12, 12, GROUND_DARK);
    img.draw_outline(2, 2, 12, 12, GROUND_MAIN);

    img
}

/// Pipe mouth, 32x16.
pub fn pipe_top() -> Canvas {
    let mut img = Canvas::new(32, 16);

    img.fill_rect(0, 0, 32, 16, PIPE_RIM);
    img.fill_rect(2, 0, 28, 14, PIPE_MAIN);
    img.fill_rect(4, 0, 24, 12, PIPE_DARK);

    img.fill_rect(2, 2, 2, 12, PIPE_LIGHT);

    img
}

/// Pipe shaft, 32x16, tiles vertically below `pipe_top`.
pub fn pipe_body() -> Canvas {
    let mut img = Canvas::new(32, 16);

    img.fill_rect(2, 0, 28, 16, PIPE_RIM);
    img.fill_rect(4, 0, 24, 16, PIPE_MAIN);

    img.fill_rect(4, 0, 2, 16, PIPE_LIGHT);
    img.fill_rect(26, 0, 2, 16, PIPE_DARK);

    img
}

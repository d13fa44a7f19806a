//! Player spritesheet: 6 frames of 16x24 (idle, walk x3, jump, duck).

use crate::render::Canvas;
use crate::types::palette::{BLUE, BROWN, SKIN};
use crate::types::{Colour, Outfit};

pub const FRAME_WIDTH: i32 = 16;
pub const FRAME_HEIGHT: i32 = 24;
pub const FRAMES: i32 = 6;

/// A still pose.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Pose {
    Stand,
    Jump,
    Duck,
}

/// Build the player strip with the default outfit.
pub fn spritesheet() -> Canvas {
    spritesheet_with(Outfit::RED)
}

/// Build the player strip in the given outfit.
pub fn spritesheet_with(outfit: Outfit) -> Canvas {
    let mut img = Canvas::new((FRAME_WIDTH * FRAMES) as usize, FRAME_HEIGHT as usize);

    draw_pose(&mut img, 0, Pose::Stand, outfit);
    for frame in 0..3 {
        draw_walk(&mut img, FRAME_WIDTH * (1 + frame), frame as usize, outfit);
    }
    draw_pose(&mut img, FRAME_WIDTH * 4, Pose::Jump, outfit);
    draw_pose(&mut img, FRAME_WIDTH * 5, Pose::Duck, outfit);

    img
}

/// Hat and face, with the top of the hat at row `top`.
fn draw_head(img: &mut Canvas, x: i32, top: i32, outfit: Outfit) {
    img.fill_rect(x + 4, top, 8, 3, outfit.hat);
    img.fill_rect(x + 3, top + 3, 10, 2, outfit.hat);
    img.fill_rect(x + 5, top + 5, 6, 4, SKIN);
    img.set_pixel(x + 6, top + 6, Colour::BLACK);
    img.set_pixel(x + 9, top + 6, Colour::BLACK);
}

/// Shirt and pants of a standing body.
fn draw_torso(img: &mut Canvas, x: i32, outfit: Outfit) {
    img.fill_rect(x + 4, 11, 8, 5, outfit.shirt);
    img.fill_rect(x + 4, 16, 8, 3, BLUE);
}

/// Draw a still pose into the cell starting at `x`.
pub fn draw_pose(img: &mut Canvas, x: i32, pose: Pose, outfit: Outfit) {
    match pose {
        Pose::Duck => {
            draw_head(img, x, 8, outfit);
            // Compressed body
            img.fill_rect(x + 4, 17, 8, 4, outfit.shirt);
            img.fill_rect(x + 3, 21, 4, 3, BROWN);
            img.fill_rect(x + 9, 21, 4, 3, BROWN);
        }
        Pose::Jump => {
            draw_head(img, x, 2, outfit);
            draw_torso(img, x, outfit);
            // Arms up
            img.fill_rect(x + 2, 9, 2, 4, outfit.shirt);
            img.fill_rect(x + 12, 9, 2, 4, outfit.shirt);
            // Legs spread
            img.fill_rect(x + 3, 19, 3, 5, BLUE);
            img.fill_rect(x + 10, 19, 3, 5, BLUE);
            img.fill_rect(x + 2, 21, 3, 3, BROWN);
            img.fill_rect(x + 11, 21, 3, 3, BROWN);
        }
        Pose::Stand => {
            draw_head(img, x, 2, outfit);
            draw_torso(img, x, outfit);
            img.fill_rect(x + 2, 12, 2, 4, outfit.shirt);
            img.fill_rect(x + 12, 12, 2, 4, outfit.shirt);
            img.fill_rect(x + 4, 19, 3, 5, BLUE);
            img.fill_rect(x + 9, 19, 3, 5, BLUE);
            img.fill_rect(x + 3, 21, 4, 3, BROWN);
            img.fill_rect(x + 9, 21, 4, 3, BROWN);
        }
    }
}

/// Draw walk-cycle frame `frame` (0 = left leg forward, 1 = neutral,
/// anything else = right leg forward) into the cell starting at `x`.
pub fn draw_walk(img: &mut Canvas, x: i32, frame: usize, outfit: Outfit) {
    draw_head(img, x, 2, outfit);
    draw_torso(img, x, outfit);

    match frame {
        0 => {
            img.fill_rect(x + 3, 19, 3, 5, BLUE);
            img.fill_rect(x + 10, 19, 3, 4, BLUE);
            img.fill_rect(x + 2, 21, 4, 3, BROWN);
            img.fill_rect(x + 10, 20, 4, 3, BROWN);

            img.fill_rect(x + 1, 11, 2, 4, outfit.shirt);
            img.fill_rect(x + 13, 13, 2, 4, outfit.shirt);
        }
        1 => {
            img.fill_rect(x + 4, 19, 3, 5, BLUE);
            img.fill_rect(x + 9, 19, 3, 5, BLUE);
            img.fill_rect(x + 3, 21, 4, 3, BROWN);
            img.fill_rect(x + 9, 21, 4, 3, BROWN);

            img.fill_rect(x + 2, 12, 2, 4, outfit.shirt);
            img.fill_rect(x + 12, 12, 2, 4, outfit.shirt);
        }
        _ => {
            img.fill_rect(x + 3, 19, 3, 4, BLUE);
            img.fill_rect(x + 10, 19, 3, 5, BLUE);
            img.fill_rect(x + 2, 20, 4, 3, BROWN);
            img.fill_rect(x + 10, 21, 4, 3, BROWN);

            img.fill_rect(x + 1, 13, 2, 4, outfit.shirt);
            img.fill_rect(x + 13, 11, 2, 4, outfit.shirt);
        }
    }
}

//! Enemy strips: goomba and koopa, each two walk frames plus a defeated frame.

use crate::render::Canvas;
use crate::types::palette::{
    KOOPA_GREEN, KOOPA_GREEN_DARK, KOOPA_GREEN_LIGHT, MUSHROOM_BODY, MUSHROOM_CAP,
    MUSHROOM_CAP_LIGHT, MUSHROOM_FEET, SHELL_YELLOW,
};
use crate::types::Colour;

pub const FRAME_WIDTH: i32 = 16;

/// Goomba strip, 48x16: walk, walk, squished.
pub fn goomba() -> Canvas {
    let mut img = Canvas::new(48, 16);

    for frame in 0..2 {
        let x = frame * FRAME_WIDTH;

        // Cap
        img.fill_rect(x + 2, 0, 12, 8, MUSHROOM_CAP);
        img.fill_rect(x + 4, 0, 8, 2, MUSHROOM_CAP_LIGHT);

        // Face with angry eyes
        img.fill_rect(x + 3, 8, 10, 4, MUSHROOM_BODY);
        img.fill_rect(x + 4, 9, 2, 2, Colour::BLACK);
        img.fill_rect(x + 10, 9, 2, 2, Colour::BLACK);
        img.set_pixel(x + 4, 9, Colour::WHITE);
        img.set_pixel(x + 10, 9, Colour::WHITE);

        // Feet step inward on the second frame
        let step = frame;
        img.fill_rect(x + 2 + step, 12, 4, 4, MUSHROOM_FEET);
        img.fill_rect(x + 10 - step, 12, 4, 4, MUSHROOM_FEET);
    }

    // Squished
    let x = 2 * FRAME_WIDTH;
    img.fill_rect(x + 2, 12, 12, 4, MUSHROOM_CAP);
    img.fill_rect(x + 4, 14, 8, 2, MUSHROOM_CAP_LIGHT);

    img
}

/// Koopa strip, 48x24: walk, walk, shell.
pub fn koopa() -> Canvas {
    let mut img = Canvas::new(48, 24);

    for frame in 0..2 {
        let x = frame * FRAME_WIDTH;

        // Head
        img.fill_rect(x + 4, 2, 8, 6, KOOPA_GREEN);
        img.fill_rect(x + 5, 2, 6, 4, KOOPA_GREEN_LIGHT);
        img.set_pixel(x + 5, 4, Colour::BLACK);
        img.set_pixel(x + 10, 4, Colour::BLACK);

        // Shell
        img.fill_rect(x + 2, 8, 12, 10, KOOPA_GREEN);
        img.fill_rect(x + 4, 10, 8, 6, SHELL_YELLOW);

        let step = frame;
        img.fill_rect(x + 1 + step, 18, 4, 6, KOOPA_GREEN_DARK);
        img.fill_rect(x + 11 - step, 18, 4, 6, KOOPA_GREEN_DARK);
    }

    // Shell only
    let x = 2 * FRAME_WIDTH;
    img.fill_rect(x + 2, 14, 12, 10, KOOPA_GREEN);
    img.fill_rect(x + 4, 16, 8, 6, SHELL_YELLOW);
    img.draw_outline(x + 2, 14, 12, 10, KOOPA_GREEN_DARK);

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizes() {
        assert_eq!(goomba().size(), (48, 16));
        assert_eq!(koopa().size(), (48, 24));
    }

    #[test]
    fn test_goomba_feet_alternate() {
        let img = goomba();
        assert_eq!(img.get(2, 12), Some(MUSHROOM_FEET));
        assert_eq!(img.get(13, 12), Some(MUSHROOM_FEET));
        assert_eq!(img.get(16 + 2, 12), Some(Colour::TRANSPARENT));
        assert_eq!(img.get(16 + 3, 12), Some(MUSHROOM_FEET));
        assert_eq!(img.get(16 + 12, 12), Some(MUSHROOM_FEET));
        assert_eq!(img.get(16 + 13, 12), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_goomba_eyes() {
        let img = goomba();
        assert_eq!(img.get(4, 9), Some(Colour::WHITE));
        assert_eq!(img.get(5, 9), Some(Colour::BLACK));
        assert_eq!(img.get(5, 10), Some(Colour::BLACK));
    }

    #[test]
    fn test_goomba_squished_is_flat() {
        let squished = goomba().frame(2, 16);
        for y in 0..12 {
            for x in 0..16 {
                assert_eq!(squished.get(x, y), Some(Colour::TRANSPARENT));
            }
        }
        assert_eq!(squished.get(2, 12), Some(MUSHROOM_CAP));
        assert_eq!(squished.get(4, 14), Some(MUSHROOM_CAP_LIGHT));
    }

    #[test]
    fn test_koopa_walk_frames_differ() {
        let img = koopa();
        assert_ne!(img.frame(0, 16), img.frame(1, 16));
        assert_eq!(img.get(1, 20), Some(KOOPA_GREEN_DARK));
        assert_eq!(img.get(16 + 1, 20), Some(Colour::TRANSPARENT));
    }

    #[test]
    fn test_koopa_shell_outline() {
        let shell = koopa().frame(2, 16);
        assert_eq!(shell.get(2, 14), Some(KOOPA_GREEN_DARK));
        assert_eq!(shell.get(13, 23), Some(KOOPA_GREEN_DARK));
        assert_eq!(shell.get(3, 15), Some(KOOPA_GREEN));
        assert_eq!(shell.get(4, 16), Some(SHELL_YELLOW));
        assert_eq!(shell.get(8, 5), Some(Colour::TRANSPARENT));
    }
}

//! Coin and power-ups.

use crate::render::Canvas;
use crate::types::palette::{
    COIN_DARK, COIN_GOLD, COIN_LIGHT, POWERUP_RED, POWERUP_SHADE, POWERUP_WHITE, STAR_FLASH,
};
use crate::types::Colour;

/// Coin cell width. The coin itself spins inside an 8-pixel region at x = 2.
pub const COIN_FRAME_WIDTH: i32 = 12;

/// Coin width per frame; narrowing fakes rotation.
pub const COIN_WIDTHS: [i32; 4] = [8, 6, 2, 6];

/// Spinning coin strip, 48x16.
pub fn coin() -> Canvas {
    let mut img = Canvas::new(48, 16);

    for (frame, &w) in COIN_WIDTHS.iter().enumerate() {
        let x = frame as i32 * COIN_FRAME_WIDTH;
        let offset = (8 - w) / 2;

        img.fill_rect(x + 2 + offset, 2, w, 12, COIN_GOLD);

        // Edge-on frames get no shading
        if w > 2 {
            img.fill_rect(x + 3 + offset, 3, (w - 2).max(1), 2, COIN_LIGHT);
            img.fill_rect(x + offset + w, 10, 2, 3, COIN_DARK);
        }
    }

    img
}

/// Mushroom power-up, 16x16.
pub fn mushroom() -> Canvas {
    let mut img = Canvas::new(16, 16);

    // Cap
    img.fill_rect(2, 0, 12, 8, POWERUP_RED);
    img.fill_rect(0, 4, 16, 4, POWERUP_RED);

    // Spots
    img.fill_rect(4, 2, 3, 3, POWERUP_WHITE);
    img.fill_rect(9, 2, 3, 3, POWERUP_WHITE);
    img.fill_rect(6, 5, 4, 2, POWERUP_WHITE);

    // Stem
    img.fill_rect(4, 8, 8, 8, POWERUP_WHITE);
    img.fill_rect(5, 10, 2, 4, POWERUP_SHADE);

    img.set_pixel(5, 11, Colour::BLACK);
    img.set_pixel(10, 11, Colour::BLACK);

    img
}

/// Flashing star strip, 4 frames of 16x16.
pub fn star() -> Canvas {
    let mut img = Canvas::new(64, 16);

    for (frame, &colour) in STAR_FLASH.iter().enumerate() {
        let x = frame as i32 * 16;

        // Centre
        img.fill_rect(x + 5, 4, 6, 8, colour);
        // Top point with glint
        img.fill_rect(x + 6, 0, 4, 4, colour);
        img.fill_rect(x + 7, 0, 2, 2, Colour::WHITE);
        // Side points
        img.fill_rect(x, 5, 5, 4, colour);
        img.fill_rect(x + 11, 5, 5, 4, colour);
        // Feet
        img.fill_rect(x + 3, 12, 4, 4, colour);
        img.fill_rect(x + 9, 12, 4, 4, colour);

        img.set_pixel(x + 6, 7, Colour::BLACK);
        img.set_pixel(x + 9, 7, Colour::BLACK);
    }

    img
}

#[cfg(test)]
mod tests {
    use super::*;

    /// Columns of row 8 covered by gold in one coin cell.
    fn gold_columns(cell: &Canvas) -> Vec<usize> {
        (0..cell.width())
            .filter(|&x| cell.get(x, 8) == Some(COIN_GOLD))
            .collect()
    }

    #[test]
    fn test_sizes() {
        assert_eq!(coin().size(), (48, 16));
        assert_eq!(mushroom().size(), (16, 16));
        assert_eq!(star().size(), (64, 16));
    }

    #[test]
    fn test_coin_widths_centred() {
        let img = coin();
        let expected: [Vec<usize>; 4] = [
            (2..10).collect(),
            (3..9).collect(),
            (5..7).collect(),
            (3..9).collect(),
        ];
        for (i, cols) in expected.iter().enumerate() {
            assert_eq!(&gold_columns(&img.frame(i, 12)), cols, "frame {i}");
        }
    }

    #[test]
    fn test_coin_edge_on_frame_unshaded() {
        let edge = coin().frame(2, 12);
        assert!(edge
            .pixels()
            .iter()
            .flatten()
            .all(|&c| c == COIN_GOLD || c == Colour::TRANSPARENT));
    }

    #[test]
    fn test_coin_shading() {
        let full = coin().frame(0, 12);
        assert_eq!(full.get(3, 3), Some(COIN_LIGHT));
        assert_eq!(full.get(8, 4), Some(COIN_LIGHT));
        assert_eq!(full.get(9, 4), Some(COIN_GOLD));
        assert_eq!(full.get(8, 10), Some(COIN_DARK));
        assert_eq!(full.get(9, 12), Some(COIN_DARK));
    }

    #[test]
    fn test_mushroom_face() {
        let img = mushroom();
        assert_eq!(img.get(0, 4), Some(POWERUP_RED));
        assert_eq!(img.get(0, 3), Some(Colour::TRANSPARENT));
        assert_eq!(img.get(5, 11), Some(Colour::BLACK));
        assert_eq!(img.get(6, 12), Some(POWERUP_SHADE));
        assert_eq!(img.get(10, 11), Some(Colour::BLACK));
    }

    #[test]
    fn test_star_flash_cycle() {
        let img = star();
        for (i, &colour) in STAR_FLASH.iter().enumerate() {
            let cell = img.frame(i, 16);
            assert_eq!(cell.get(5, 4), Some(colour));
            assert_eq!(cell.get(7, 0), Some(Colour::WHITE));
            assert_eq!(cell.get(6, 7), Some(Colour::BLACK));
        }
        assert_eq!(img.frame(1, 16), img.frame(3, 16));
    }
}

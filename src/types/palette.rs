//! The fixed sprite palette.
//!
//! Every builder draws with these constants. Colours that only one sprite
//! uses live here too, grouped under that sprite's heading, so the whole
//! palette can be audited in one place.

use super::Colour;

// Player
pub const RED: Colour = Colour::rgb(228, 52, 52);
pub const SKIN: Colour = Colour::rgb(252, 200, 148);
pub const BROWN: Colour = Colour::rgb(100, 68, 44);
pub const BLUE: Colour = Colour::rgb(52, 100, 228);

// Tiles
pub const BRICK_MAIN: Colour = Colour::rgb(200, 100, 52);
pub const BRICK_DARK: Colour = Colour::rgb(140, 68, 28);
pub const BRICK_LIGHT: Colour = Colour::rgb(228, 140, 84);
pub const GROUND_MAIN: Colour = Colour::rgb(148, 100, 68);
pub const GROUND_DARK: Colour = Colour::rgb(100, 68, 44);
/// Grass top.
pub const GROUND_TOP: Colour = Colour::rgb(52, 172, 52);
pub const QUESTION_YELLOW: Colour = Colour::rgb(252, 200, 68);
pub const QUESTION_DARK: Colour = Colour::rgb(200, 148, 28);
pub const QUESTION_LIGHT: Colour = Colour::rgb(255, 228, 148);

// Pipes
pub const PIPE_RIM: Colour = Colour::rgb(52, 172, 52);
pub const PIPE_MAIN: Colour = Colour::rgb(68, 200, 68);
pub const PIPE_DARK: Colour = Colour::rgb(28, 128, 28);
pub const PIPE_LIGHT: Colour = Colour::rgb(100, 228, 100);

// Goomba
pub const MUSHROOM_CAP: Colour = Colour::rgb(172, 68, 52);
pub const MUSHROOM_CAP_LIGHT: Colour = Colour::rgb(228, 100, 68);
pub const MUSHROOM_BODY: Colour = Colour::rgb(252, 220, 180);
pub const MUSHROOM_FEET: Colour = Colour::rgb(68, 44, 28);

// Koopa
pub const KOOPA_GREEN: Colour = Colour::rgb(52, 172, 52);
pub const KOOPA_GREEN_LIGHT: Colour = Colour::rgb(100, 200, 100);
pub const KOOPA_GREEN_DARK: Colour = Colour::rgb(28, 128, 28);
pub const SHELL_YELLOW: Colour = Colour::rgb(252, 228, 100);

// Collectibles
pub const COIN_GOLD: Colour = Colour::rgb(252, 200, 68);
pub const COIN_LIGHT: Colour = Colour::rgb(255, 228, 148);
pub const COIN_DARK: Colour = Colour::rgb(200, 148, 28);
pub const POWERUP_RED: Colour = Colour::rgb(228, 52, 52);
pub const POWERUP_WHITE: Colour = Colour::rgb(255, 255, 255);
pub const POWERUP_SHADE: Colour = Colour::rgb(240, 240, 240);

/// Star flash cycle, one colour per frame.
pub const STAR_FLASH: [Colour; 4] = [
    Colour::rgb(255, 255, 100),
    Colour::rgb(255, 200, 50),
    Colour::rgb(255, 255, 200),
    Colour::rgb(255, 200, 50),
];

// Background
pub const CLOUD_WHITE: Colour = Colour::rgb(255, 255, 255);
pub const CLOUD_SHADE: Colour = Colour::rgb(240, 240, 255);
pub const HILL_GREEN: Colour = Colour::rgb(52, 172, 52);
pub const HILL_DARK: Colour = Colour::rgb(28, 128, 28);
pub const BUSH_MAIN: Colour = Colour::rgb(68, 172, 68);
pub const BUSH_LIGHT: Colour = Colour::rgb(100, 200, 100);

/// Player colour override: hat and shirt.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Outfit {
    pub hat: Colour,
    pub shirt: Colour,
}

impl Outfit {
    /// The default all-red outfit.
    pub const RED: Self = Self {
        hat: RED,
        shirt: RED,
    };

    pub const fn new(hat: Colour, shirt: Colour) -> Self {
        Self { hat, shirt }
    }
}

impl Default for Outfit {
    fn default() -> Self {
        Self::RED
    }
}

//! Sprite builders.
//!
//! Each builder allocates its own canvas and draws a fixed recipe of
//! rectangles and pixels onto it. Animated sprites are drawn as horizontal
//! strips, frame `i` starting at `i * frame_width`.

pub mod background;
pub mod collectibles;
pub mod enemies;
pub mod player;
pub mod tiles;

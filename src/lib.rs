//! pxgen - procedural pixel-art asset generator
//!
//! Draws a fixed catalog of platformer sprites (player, tiles, enemies,
//! collectibles and scenery) and writes them as transparent PNGs, with
//! animated sprites laid out as horizontal strips.

pub mod catalog;
pub mod error;
pub mod output;
pub mod render;
pub mod sprites;
pub mod types;

pub use catalog::{default_output_dir, generate, AssetEntry, Report, CATALOG};
pub use error::{GenError, Result};
pub use render::{write_png, Canvas, Layout, SheetMeta};
pub use types::{Colour, Outfit};

//! Core value types for pxgen.
//!
//! - `Colour` - RGBA colour values
//! - `palette` - the fixed named colours every sprite draws with
//! - `Outfit` - player colour override

mod colour;
pub mod palette;

pub use colour::Colour;
pub use palette::Outfit;

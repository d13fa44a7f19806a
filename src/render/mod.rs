//! Rendering module for pxgen.
//!
//! Holds the canvas the sprite builders draw on and the writers that turn
//! finished canvases into files.

mod canvas;
mod png;
mod sheet;

pub use canvas::Canvas;
pub use png::{to_image, write_png};
pub use sheet::{manifest_json, write_manifest_json, Frame, Layout, SheetMeta};

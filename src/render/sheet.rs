//! Strip layout and the frame manifest.
//!
//! Animated sprites are horizontal strips of equal-width frames. The image
//! carries no frame metadata, so a JSON manifest is written next to the PNGs
//! describing where every frame sits.

use std::fs;
use std::path::Path;

use serde::Serialize;

use crate::error::{GenError, Result};

/// How an image is divided into frames.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Layout {
    /// One still image.
    Single,
    /// `frames` cells of equal width laid left to right.
    Strip { frames: u32 },
}

impl Layout {
    /// Number of frames in the image.
    pub fn frame_count(self) -> u32 {
        match self {
            Layout::Single => 1,
            Layout::Strip { frames } => frames.max(1),
        }
    }

    /// Frame cell width for an image `width` pixels wide.
    pub fn frame_width(self, width: u32) -> u32 {
        width / self.frame_count()
    }
}

/// A frame rectangle within an image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Frame {
    pub x: u32,
    pub y: u32,
    pub w: u32,
    pub h: u32,
}

/// Layout metadata for one generated image.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SheetMeta {
    pub image: String,
    pub width: u32,
    pub height: u32,
    pub frame_width: u32,
    pub frames: Vec<Frame>,
}

impl SheetMeta {
    /// Describe an image of the given size and layout.
    pub fn new(image: impl Into<String>, width: u32, height: u32, layout: Layout) -> Self {
        let frame_width = layout.frame_width(width);
        let frames = (0..layout.frame_count())
            .map(|i| Frame {
                x: i * frame_width,
                y: 0,
                w: frame_width,
                h: height,
            })
            .collect();

        Self {
            image: image.into(),
            width,
            height,
            frame_width,
            frames,
        }
    }
}

#[derive(Serialize)]
struct ManifestJson<'a> {
    app: &'static str,
    version: &'static str,
    assets: &'a [SheetMeta],
}

/// Render the manifest JSON for a set of images.
pub fn manifest_json(sheets: &[SheetMeta]) -> Result<String> {
    let output = ManifestJson {
        app: "pxgen",
        version: env!("CARGO_PKG_VERSION"),
        assets: sheets,
    };
    serde_json::to_string_pretty(&output).map_err(|e| GenError::Build {
        message: format!("Failed to serialize frame manifest: {}", e),
        help: None,
    })
}

/// Write the manifest JSON to `path`.
pub fn write_manifest_json(sheets: &[SheetMeta], path: &Path) -> Result<()> {
    let json = manifest_json(sheets)?;
    fs::write(path, json).map_err(|e| GenError::Io {
        path: path.to_path_buf(),
        message: format!("Failed to write frame manifest: {}", e),
    })?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_single_layout() {
        let meta = SheetMeta::new("tile_ground.png", 16, 16, Layout::Single);
        assert_eq!(meta.frame_width, 16);
        assert_eq!(meta.frames, vec![Frame { x: 0, y: 0, w: 16, h: 16 }]);
    }

    #[test]
    fn test_strip_frames_at_index_times_width() {
        let meta = SheetMeta::new("collectible_coin.png", 48, 16, Layout::Strip { frames: 4 });
        assert_eq!(meta.frame_width, 12);
        let xs: Vec<u32> = meta.frames.iter().map(|f| f.x).collect();
        assert_eq!(xs, vec![0, 12, 24, 36]);
        assert!(meta.frames.iter().all(|f| f.w == 12 && f.h == 16));
    }

    #[test]
    fn test_zero_frame_strip_is_single() {
        assert_eq!(Layout::Strip { frames: 0 }.frame_count(), 1);
    }

    #[test]
    fn test_manifest_json_shape() {
        let sheets = vec![SheetMeta::new("enemy_goomba.png", 48, 16, Layout::Strip { frames: 3 })];
        let json = manifest_json(&sheets).unwrap();
        let value: serde_json::Value = serde_json::from_str(&json).unwrap();

        assert_eq!(value["app"], "pxgen");
        let asset = &value["assets"][0];
        assert_eq!(asset["image"], "enemy_goomba.png");
        assert_eq!(asset["frame_width"], 16);
        assert_eq!(asset["frames"].as_array().unwrap().len(), 3);
        assert_eq!(asset["frames"][2]["x"], 32);
    }

    #[test]
    fn test_write_manifest_json() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("assets.json");
        let sheets = vec![SheetMeta::new("bg_hill.png", 64, 32, Layout::Single)];

        write_manifest_json(&sheets, &path).unwrap();

        let written = fs::read_to_string(&path).unwrap();
        assert_eq!(written, manifest_json(&sheets).unwrap());
    }
}

//! The asset catalog and the generation driver.
//!
//! `CATALOG` lists every sprite in output order. `generate` builds each one,
//! checks it against its declared size, writes it as PNG and finally writes
//! the frame manifest.

use std::fs;
use std::path::{Path, PathBuf};

use crate::error::{GenError, Result};
use crate::output::{display_path, plural, Printer};
use crate::render::{write_manifest_json, write_png, Canvas, Layout, SheetMeta};
use crate::sprites::{background, collectibles, enemies, player, tiles};

/// File name of the frame manifest written beside the images.
pub const MANIFEST_FILE: &str = "assets.json";

/// One generated image.
#[derive(Debug, Clone, Copy)]
pub struct AssetEntry {
    /// Output file name.
    pub file: &'static str,
    pub build: fn() -> Canvas,
    pub width: u32,
    pub height: u32,
    pub layout: Layout,
}

impl AssetEntry {
    const fn single(file: &'static str, build: fn() -> Canvas, width: u32, height: u32) -> Self {
        Self {
            file,
            build,
            width,
            height,
            layout: Layout::Single,
        }
    }

    const fn strip(
        file: &'static str,
        build: fn() -> Canvas,
        width: u32,
        height: u32,
        frames: u32,
    ) -> Self {
        Self {
            file,
            build,
            width,
            height,
            layout: Layout::Strip { frames },
        }
    }

    /// Human-readable summary, e.g. "player.png (96x24, 6 frames)".
    pub fn describe(&self) -> String {
        match self.layout {
            Layout::Single => format!("{} ({}x{})", self.file, self.width, self.height),
            Layout::Strip { frames } => format!(
                "{} ({}x{}, {})",
                self.file,
                self.width,
                self.height,
                plural(frames as usize, "frame", "frames")
            ),
        }
    }

    /// Frame layout metadata for the manifest.
    pub fn sheet_meta(&self) -> SheetMeta {
        SheetMeta::new(self.file, self.width, self.height, self.layout)
    }

    /// Run the builder and check the result has the declared size.
    pub fn render(&self) -> Result<Canvas> {
        let canvas = (self.build)();
        let actual = canvas.size();
        if actual != (self.width as usize, self.height as usize) {
            return Err(GenError::Build {
                message: format!(
                    "{} rendered at {}x{}, expected {}x{}",
                    self.file, actual.0, actual.1, self.width, self.height
                ),
                help: Some("Update the catalog entry or the builder's canvas size".to_string()),
            });
        }
        Ok(canvas)
    }
}

/// Every asset, in generation order.
pub static CATALOG: &[AssetEntry] = &[
    AssetEntry::strip("player.png", player::spritesheet, 96, 24, 6),
    AssetEntry::single("tile_ground.png", tiles::ground, 16, 16),
    AssetEntry::single("tile_brick.png", tiles::brick, 16, 16),
    AssetEntry::strip("tile_question.png", tiles::question, 64, 16, 4),
    AssetEntry::single("tile_empty.png", tiles::empty_block, 16, 16),
    AssetEntry::single("tile_pipe_top.png", tiles::pipe_top, 32, 16),
    AssetEntry::single("tile_pipe_body.png", tiles::pipe_body, 32, 16),
    AssetEntry::strip("enemy_goomba.png", enemies::goomba, 48, 16, 3),
    AssetEntry::strip("enemy_koopa.png", enemies::koopa, 48, 24, 3),
    AssetEntry::strip("collectible_coin.png", collectibles::coin, 48, 16, 4),
    AssetEntry::single("powerup_mushroom.png", collectibles::mushroom, 16, 16),
    AssetEntry::strip("powerup_star.png", collectibles::star, 64, 16, 4),
    AssetEntry::single("bg_cloud.png", background::cloud, 48, 24),
    AssetEntry::single("bg_bush.png", background::bush, 48, 16),
    AssetEntry::single("bg_hill.png", background::hill, 64, 32),
];

/// Look up a catalog entry by output file name.
pub fn find(file: &str) -> Option<&'static AssetEntry> {
    CATALOG.iter().find(|entry| entry.file == file)
}

/// The `assets/` directory at the crate root.
pub fn default_output_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("assets")
}

/// Files written by a generation run.
#[derive(Debug, Clone)]
pub struct Report {
    /// PNG paths, in catalog order.
    pub written: Vec<PathBuf>,
    pub manifest: PathBuf,
}

/// Generate every catalog asset into `out_dir`.
///
/// The directory is created if needed and existing files are overwritten.
/// The first failure aborts the run.
pub fn generate(out_dir: &Path, printer: &Printer) -> Result<Report> {
    fs::create_dir_all(out_dir).map_err(|e| GenError::Io {
        path: out_dir.to_path_buf(),
        message: format!("Failed to create output directory: {}", e),
    })?;

    printer.info("Generating", "platformer assets");

    let mut written = Vec::with_capacity(CATALOG.len());
    let mut sheets = Vec::with_capacity(CATALOG.len());

    for entry in CATALOG {
        let canvas = entry.render()?;
        let path = out_dir.join(entry.file);
        write_png(&canvas, &path)?;
        printer.status("Created", &entry.describe());

        written.push(path);
        sheets.push(entry.sheet_meta());
    }

    let manifest = out_dir.join(MANIFEST_FILE);
    write_manifest_json(&sheets, &manifest)?;
    printer.status("Created", &format!("{} {}", MANIFEST_FILE, printer.dim("(frame manifest)")));

    printer.success(
        "Finished",
        &format!(
            "{} in {}",
            plural(written.len(), "asset", "assets"),
            printer.cyan(&display_path(out_dir))
        ),
    );

    Ok(Report { written, manifest })
}

//! Shared fixtures for integration tests
//!
//! Builds a catalog directory on disk: bezel PNGs plus a `devices.json` that
//! refers to them by relative path.

#![allow(dead_code)]

use std::path::{Path, PathBuf};

use image::{Rgba, RgbaImage};
use tempfile::TempDir;

pub const BEZEL_COLOR: Rgba<u8> = Rgba([30, 30, 30, 255]);
pub const SHOT_COLOR: Rgba<u8> = Rgba([250, 200, 0, 255]);

/// A temporary directory holding a catalog file and its bezels
pub struct CatalogFixture {
    pub dir:          TempDir,
    pub catalog_path: PathBuf,
}

impl CatalogFixture {
    /// Writes `devices` as (model, width, height) records for manufacturer
    /// "Acme", each with a solid bezel of the device's size
    pub fn new(devices: &[(&str, u32, u32)]) -> Self {
        let dir = tempfile::tempdir().unwrap();
        std::fs::create_dir(dir.path().join("bezels")).unwrap();

        let records: Vec<serde_json::Value> = devices
            .iter()
            .map(|(model, width, height)| {
                let relative = format!("bezels/{}.png", model.to_lowercase());
                write_solid_png(&dir.path().join(&relative), *width, *height, BEZEL_COLOR);
                serde_json::json!({
                    "manufacturer": "Acme",
                    "model": model,
                    "width": width,
                    "height": height,
                    "blank_path": relative,
                })
            })
            .collect();

        let catalog_path = dir.path().join("devices.json");
        let document = serde_json::json!({ "devices": records });
        std::fs::write(&catalog_path, serde_json::to_string_pretty(&document).unwrap()).unwrap();

        Self { dir, catalog_path }
    }

    /// The catalog used by the end-to-end scenarios: A and B at 100x200, C at
    /// 50x50
    pub fn abc() -> Self {
        Self::new(&[("A", 100, 200), ("B", 100, 200), ("C", 50, 50)])
    }

    pub fn path(&self) -> &Path {
        self.dir.path()
    }

    /// Writes a solid screenshot into the fixture directory
    pub fn screenshot(&self, name: &str, width: u32, height: u32) -> PathBuf {
        let path = self.dir.path().join(name);
        write_solid_png(&path, width, height, SHOT_COLOR);
        path
    }

    pub fn output_path(&self) -> PathBuf {
        self.dir.path().join("output.png")
    }
}

pub fn write_solid_png(path: &Path, width: u32, height: u32, color: Rgba<u8>) {
    RgbaImage::from_pixel(width, height, color).save(path).unwrap();
}

//! Screenshot input handling
//!
//! A [`Screenshot`] is probed from its file header so device matching can run
//! before any pixel data is decoded. Decoding happens later, once a device has
//! been chosen.
//!
//! # Examples
//!
//! ```no_run
//! use device_mockup::mockup::Screenshot;
//!
//! #[tokio::main]
//! async fn main() {
//!     let shot = Screenshot::probe("shot.png").await.unwrap();
//!     println!("{}x{}", shot.width(), shot.height());
//!
//!     let pixels = shot.decode().await.unwrap();
//!     assert_eq!(pixels.width(), shot.width());
//! }
//! ```

use std::path::{Path, PathBuf};

use image::{DynamicImage, ImageReader};

use crate::error::{MockupError, MockupResult};

/// A screenshot file whose dimensions are known
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Screenshot {
    path:   PathBuf,
    width:  u32,
    height: u32,
}

impl Screenshot {
    /// Reads the image header at `path` without decoding pixels
    ///
    /// The format is guessed from the file contents, not the extension.
    pub async fn probe(path: impl Into<PathBuf>) -> MockupResult<Self> {
        let path = path.into();
        tokio::task::spawn_blocking(move || Self::probe_blocking(path)).await?
    }

    /// Blocking form of [`Screenshot::probe`]
    pub fn probe_blocking(path: impl Into<PathBuf>) -> MockupResult<Self> {
        let path = path.into();
        let (width, height) = open_reader(&path)?
            .into_dimensions()
            .map_err(|e| read_error(&path, e))?;

        tracing::debug!("Probed screenshot {} ({}x{})", path.display(), width, height);
        Ok(Self {
            path,
            width,
            height,
        })
    }

    /// Decodes the full image
    pub async fn decode(&self) -> MockupResult<DynamicImage> {
        let path = self.path.clone();
        tokio::task::spawn_blocking(move || {
            open_reader(&path)?
                .decode()
                .map_err(|e| read_error(&path, e))
        })
        .await?
    }

    /// Path the screenshot was read from
    pub fn path(&self) -> &Path {
        &self.path
    }

    /// Returns the dimensions of the image as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns the image width in pixels
    pub fn width(&self) -> u32 {
        self.width
    }

    /// Returns the image height in pixels
    pub fn height(&self) -> u32 {
        self.height
    }
}

/// Normalizes a typed or pasted path: trims whitespace and one pair of
/// matching surrounding quotes. Returns `None` for blank input.
///
/// # Examples
///
/// ```
/// use std::path::PathBuf;
///
/// use device_mockup::mockup::screenshot::normalize_input_path;
///
/// assert_eq!(normalize_input_path(" 'my shot.png' "), Some(PathBuf::from("my shot.png")));
/// assert_eq!(normalize_input_path("   "), None);
/// ```
pub fn normalize_input_path(raw: &str) -> Option<PathBuf> {
    let trimmed = raw.trim();
    let unquoted = ['"', '\'']
        .iter()
        .find_map(|q| {
            trimmed
                .strip_prefix(*q)
                .and_then(|rest| rest.strip_suffix(*q))
        })
        .unwrap_or(trimmed)
        .trim();

    if unquoted.is_empty() {
        None
    } else {
        Some(PathBuf::from(unquoted))
    }
}

fn open_reader(path: &Path) -> MockupResult<ImageReader<std::io::BufReader<std::fs::File>>> {
    ImageReader::open(path)
        .and_then(|reader| reader.with_guessed_format())
        .map_err(|e| read_error(path, e))
}

fn read_error(path: &Path, err: impl std::fmt::Display) -> MockupError {
    MockupError::ScreenshotRead {
        path:   path.to_path_buf(),
        reason: err.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use image::{Rgba, RgbaImage};

    use super::*;

    fn write_png(dir: &Path, name: &str, width: u32, height: u32) -> PathBuf {
        let path = dir.join(name);
        RgbaImage::from_pixel(width, height, Rgba([10, 20, 30, 255]))
            .save(&path)
            .unwrap();
        path
    }

    #[tokio::test]
    async fn test_probe_reads_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "shot.png", 30, 40);

        let shot = Screenshot::probe(&path).await.unwrap();

        assert_eq!(shot.dimensions(), (30, 40));
        assert_eq!(shot.path(), path.as_path());
    }

    #[tokio::test]
    async fn test_probe_ignores_misleading_extension() {
        let dir = tempfile::tempdir().unwrap();
        let png = write_png(dir.path(), "shot.png", 12, 8);
        let renamed = dir.path().join("shot.jpg");
        std::fs::rename(&png, &renamed).unwrap();

        let shot = Screenshot::probe(&renamed).await.unwrap();
        assert_eq!(shot.dimensions(), (12, 8));
    }

    #[tokio::test]
    async fn test_probe_missing_file() {
        let err = Screenshot::probe("/no/such/shot.png").await.unwrap_err();
        assert!(matches!(err, MockupError::ScreenshotRead { .. }));
    }

    #[tokio::test]
    async fn test_probe_non_image() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("notes.txt");
        std::fs::write(&path, "definitely not pixels").unwrap();

        let err = Screenshot::probe(&path).await.unwrap_err();
        assert!(err.is_retryable_input());
    }

    #[tokio::test]
    async fn test_decode_matches_probe() {
        let dir = tempfile::tempdir().unwrap();
        let path = write_png(dir.path(), "shot.png", 7, 9);

        let shot = Screenshot::probe(&path).await.unwrap();
        let image = shot.decode().await.unwrap();

        assert_eq!((image.width(), image.height()), shot.dimensions());
    }

    #[test]
    fn test_normalize_input_path() {
        assert_eq!(normalize_input_path("shot.png"), Some(PathBuf::from("shot.png")));
        assert_eq!(normalize_input_path("\"/tmp/a b.png\"\n"), Some(PathBuf::from("/tmp/a b.png")));
        assert_eq!(normalize_input_path("'x.png"), Some(PathBuf::from("'x.png")));
        assert_eq!(normalize_input_path("\"\""), None);
        assert_eq!(normalize_input_path(""), None);
    }
}

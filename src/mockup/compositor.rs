//! Mockup compositing
//!
//! Layers a screenshot over a device's bezel image on a canvas of exactly the
//! device's declared size:
//!
//! 1. The bezel is stretched to fill the whole canvas.
//! 2. The screenshot is drawn at its native size, centered. Offsets use floor
//!    division, so an odd size difference leaves the extra pixel on the
//!    right/bottom. A screenshot larger than the canvas gets negative offsets
//!    and is clipped equally on both sides (up to that same pixel).
//! 3. The canvas is PNG-encoded and written atomically.

use std::path::Path;

use image::{DynamicImage, RgbaImage, imageops};

use super::Screenshot;
use crate::{
    error::{MockupError, MockupResult},
    model::{Device, MockupReport, Offset},
    util::{encode::encode_png, output::write_atomic},
};

/// A composited canvas and the offset the screenshot was drawn at
#[derive(Debug, Clone)]
pub struct Mockup {
    /// RGBA canvas, exactly the device's size
    pub image:  RgbaImage,
    /// Screenshot placement on the canvas
    pub offset: Offset,
}

impl Mockup {
    /// Returns the canvas dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        self.image.dimensions()
    }
}

/// Offset that centers `content` on `canvas`, rounding toward negative
/// infinity
///
/// # Examples
///
/// ```
/// use device_mockup::{mockup::centering_offset, model::Offset};
///
/// assert_eq!(centering_offset((100, 200), (100, 200)), Offset::new(0, 0));
/// assert_eq!(centering_offset((100, 200), (50, 51)), Offset::new(25, 74));
/// assert_eq!(centering_offset((50, 50), (61, 50)), Offset::new(-6, 0));
/// ```
pub fn centering_offset(canvas: (u32, u32), content: (u32, u32)) -> Offset {
    let axis = |outer: u32, inner: u32| (i64::from(outer) - i64::from(inner)).div_euclid(2);
    Offset::new(axis(canvas.0, content.0), axis(canvas.1, content.1))
}

/// Composites `screenshot` over `bezel` on a canvas sized for `device`
///
/// The bezel is stretched (Lanczos3) when its size differs from the device's.
/// The screenshot is alpha-blended on top and clipped to the canvas.
pub fn compose(screenshot: &DynamicImage, bezel: &DynamicImage, device: &Device) -> Mockup {
    let (width, height) = device.dimensions();

    let mut canvas = if bezel.width() == width && bezel.height() == height {
        bezel.to_rgba8()
    } else {
        tracing::debug!(
            "Stretching bezel from {}x{} to {}x{}",
            bezel.width(),
            bezel.height(),
            width,
            height
        );
        imageops::resize(&bezel.to_rgba8(), width, height, imageops::FilterType::Lanczos3)
    };

    let offset = centering_offset(device.dimensions(), (screenshot.width(), screenshot.height()));
    imageops::overlay(&mut canvas, &screenshot.to_rgba8(), offset.left, offset.top);

    Mockup {
        image: canvas,
        offset,
    }
}

/// Loads the bezel image declared by `device`
pub async fn load_bezel(device: &Device) -> MockupResult<DynamicImage> {
    let path = device.bezel_path.clone();
    tokio::task::spawn_blocking(move || {
        image::ImageReader::open(&path)
            .and_then(|reader| reader.with_guessed_format())
            .map_err(|e| e.to_string())
            .and_then(|reader| reader.decode().map_err(|e| e.to_string()))
            .map_err(|reason| MockupError::BezelLoad {
                path: path.clone(),
                reason,
            })
    })
    .await?
}

/// Builds the mockup for `screenshot` on `device` and writes it to `output`
///
/// Steps run strictly in sequence: decode screenshot, load bezel, composite,
/// encode, write. Any failure is returned and leaves `output` as it was.
pub async fn create_mockup(
    screenshot: &Screenshot,
    device: &Device,
    output: &Path,
) -> MockupResult<MockupReport> {
    let shot = screenshot.decode().await?;
    let bezel = load_bezel(device).await?;

    let (width, height) = device.dimensions();
    let output_path = output.to_path_buf();
    let device = device.clone();
    let (bytes_written, offset) = tokio::task::spawn_blocking(move || {
        let mockup = compose(&shot, &bezel, &device);
        let png = encode_png(&mockup.image)?;
        let written = write_atomic(&output_path, &png)?;
        Ok::<_, MockupError>((written, mockup.offset))
    })
    .await??;

    tracing::info!(
        "Mockup written to {} ({}x{}, {} bytes)",
        output.display(),
        width,
        height,
        bytes_written
    );

    Ok(MockupReport {
        path: output.to_path_buf(),
        bytes_written,
        width,
        height,
        offset,
    })
}

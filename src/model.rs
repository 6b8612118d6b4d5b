//! Data models shared across device-mockup
//!
//! - [`Device`]: a catalog record pairing screen dimensions with a bezel image
//! - [`Offset`]: where a screenshot lands on a device canvas
//! - [`MockupReport`]: summary of a written mockup

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

/// A physical device the tool can frame screenshots for
///
/// Devices are immutable once loaded. Two devices may share dimensions; the
/// `(manufacturer, model)` pair is what the user sees.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Device {
    /// Manufacturer name (e.g., "Apple")
    pub manufacturer: String,
    /// Model name (e.g., "iPhone 15")
    pub model:        String,
    /// Canvas width in pixels
    pub width:        u32,
    /// Canvas height in pixels
    pub height:       u32,
    /// Path to the bezel (blank device frame) image
    #[serde(rename = "blank_path", alias = "bezel_path")]
    pub bezel_path:   PathBuf,
}

impl Device {
    /// Creates a new Device record
    pub fn new(
        manufacturer: impl Into<String>,
        model: impl Into<String>,
        width: u32,
        height: u32,
        bezel_path: impl Into<PathBuf>,
    ) -> Self {
        Self {
            manufacturer: manufacturer.into(),
            model: model.into(),
            width,
            height,
            bezel_path: bezel_path.into(),
        }
    }

    /// Label shown in selection lists: `"{manufacturer} {model}"`
    ///
    /// # Examples
    ///
    /// ```
    /// use device_mockup::model::Device;
    ///
    /// let device = Device::new("Google", "Pixel 8", 1080, 2400, "pixel8.png");
    /// assert_eq!(device.label(), "Google Pixel 8");
    /// ```
    pub fn label(&self) -> String {
        format!("{} {}", self.manufacturer, self.model)
    }

    /// Returns the canvas dimensions as (width, height)
    pub fn dimensions(&self) -> (u32, u32) {
        (self.width, self.height)
    }

    /// Returns true if the device canvas exactly matches the given size
    pub fn matches_dimensions(&self, width: u32, height: u32) -> bool {
        self.width == width && self.height == height
    }

    /// Resolves a relative bezel path against `base`, leaving absolute paths
    /// untouched
    pub(crate) fn resolve_bezel_path(&mut self, base: &Path) {
        if self.bezel_path.is_relative() {
            self.bezel_path = base.join(&self.bezel_path);
        }
    }
}

impl std::fmt::Display for Device {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} {} ({}x{})", self.manufacturer, self.model, self.width, self.height)
    }
}

/// Signed pixel offset of a screenshot's top-left corner on the canvas
///
/// Negative values mean the screenshot is larger than the canvas along that
/// axis and is clipped on both sides.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Offset {
    /// Horizontal offset from the canvas's left edge
    pub left: i64,
    /// Vertical offset from the canvas's top edge
    pub top:  i64,
}

impl Offset {
    /// Creates a new Offset
    pub fn new(left: i64, top: i64) -> Self {
        Self { left, top }
    }
}

/// Summary of a mockup that was encoded and persisted
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MockupReport {
    /// Where the PNG was written
    pub path:          PathBuf,
    /// Size of the written PNG in bytes
    pub bytes_written: u64,
    /// Canvas width (equals the device width)
    pub width:         u32,
    /// Canvas height (equals the device height)
    pub height:        u32,
    /// Offset the screenshot was drawn at
    pub offset:        Offset,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_device_deserializes_blank_path() {
        let json = r#"{
            "manufacturer": "Apple",
            "model": "iPhone 13",
            "width": 1170,
            "height": 2532,
            "blank_path": "bezels/iphone13.png"
        }"#;
        let device: Device = serde_json::from_str(json).unwrap();

        assert_eq!(device.manufacturer, "Apple");
        assert_eq!(device.dimensions(), (1170, 2532));
        assert_eq!(device.bezel_path, PathBuf::from("bezels/iphone13.png"));
    }

    #[test]
    fn test_device_accepts_bezel_path_alias() {
        let json = r#"{"manufacturer":"Google","model":"Pixel 8","width":1080,"height":2400,"bezel_path":"p8.png"}"#;
        let device: Device = serde_json::from_str(json).unwrap();
        assert_eq!(device.bezel_path, PathBuf::from("p8.png"));
    }

    #[test]
    fn test_device_rejects_negative_dimensions() {
        let json = r#"{"manufacturer":"X","model":"Y","width":-1,"height":10,"blank_path":"a.png"}"#;
        assert!(serde_json::from_str::<Device>(json).is_err());
    }

    #[test]
    fn test_device_serializes_as_blank_path() {
        let device = Device::new("Apple", "iPad", 10, 20, "ipad.png");
        let json = serde_json::to_value(&device).unwrap();
        assert_eq!(json["blank_path"], "ipad.png");
        assert!(json.get("bezel_path").is_none());
    }

    #[test]
    fn test_label_and_display() {
        let device = Device::new("Samsung", "Galaxy S24", 1080, 2340, "s24.png");
        assert_eq!(device.label(), "Samsung Galaxy S24");
        assert_eq!(device.to_string(), "Samsung Galaxy S24 (1080x2340)");
    }

    #[test]
    fn test_matches_dimensions_requires_both() {
        let device = Device::new("A", "B", 100, 200, "b.png");
        assert!(device.matches_dimensions(100, 200));
        assert!(!device.matches_dimensions(200, 100));
        assert!(!device.matches_dimensions(100, 201));
    }

    #[test]
    fn test_resolve_bezel_path() {
        let mut relative = Device::new("A", "B", 1, 1, "frames/b.png");
        relative.resolve_bezel_path(Path::new("/catalogs"));
        assert_eq!(relative.bezel_path, PathBuf::from("/catalogs/frames/b.png"));

        let mut absolute = Device::new("A", "B", 1, 1, "/abs/b.png");
        absolute.resolve_bezel_path(Path::new("/catalogs"));
        assert_eq!(absolute.bezel_path, PathBuf::from("/abs/b.png"));
    }
}

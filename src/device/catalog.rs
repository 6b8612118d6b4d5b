//! Device catalog loading
//!
//! The catalog is read once at startup from a JSON document of the form
//!
//! ```json
//! { "devices": [ { "manufacturer": "Apple", "model": "iPhone 13",
//!                  "width": 1170, "height": 2532,
//!                  "blank_path": "bezels/iphone13.png" } ] }
//! ```
//!
//! and is passed explicitly to the matcher and resolver afterwards. Relative
//! bezel paths are resolved against the catalog file's directory so the tool
//! can run from anywhere.

use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::{
    error::{MockupError, MockupResult},
    model::Device,
};

/// On-disk layout of the catalog document
#[derive(Debug, Deserialize)]
struct CatalogFile {
    devices: Vec<Device>,
}

/// Validated, read-only list of known devices
///
/// A catalog always holds at least one device, so a full-catalog selection
/// can always produce a result.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Catalog {
    devices: Vec<Device>,
}

impl Catalog {
    /// Builds a catalog from device records, validating each one
    ///
    /// # Examples
    ///
    /// ```
    /// use device_mockup::{device::Catalog, model::Device};
    ///
    /// let catalog = Catalog::new(vec![Device::new("Apple", "iPhone 13", 1170, 2532, "a.png")])
    ///     .unwrap();
    /// assert_eq!(catalog.len(), 1);
    ///
    /// assert!(Catalog::new(vec![]).is_err());
    /// ```
    pub fn new(devices: Vec<Device>) -> MockupResult<Self> {
        if devices.is_empty() {
            return Err(MockupError::InvalidCatalog {
                reason: "the device list is empty".to_string(),
            });
        }

        for (index, device) in devices.iter().enumerate() {
            validate_device(index, device)?;
        }

        Ok(Self { devices })
    }

    /// Loads and validates the catalog file at `path`
    ///
    /// Any failure (missing file, bad JSON, invalid record) is reported as
    /// [`MockupError::CatalogLoad`] carrying the path.
    pub fn load(path: impl AsRef<Path>) -> MockupResult<Self> {
        let path = path.as_ref();
        let contents = std::fs::read_to_string(path).map_err(|e| MockupError::CatalogLoad {
            path:   path.to_path_buf(),
            reason: e.to_string(),
        })?;

        let base = path.parent().unwrap_or_else(|| Path::new(""));
        let catalog = Self::from_json(&contents, base).map_err(|e| match e {
            MockupError::CatalogLoad { reason, .. } | MockupError::InvalidCatalog { reason } => {
                MockupError::CatalogLoad {
                    path: path.to_path_buf(),
                    reason,
                }
            }
            other => other,
        })?;

        tracing::info!("Loaded {} devices from {}", catalog.len(), path.display());
        Ok(catalog)
    }

    /// Parses a catalog document, resolving relative bezel paths against
    /// `base_dir`
    pub fn from_json(json: &str, base_dir: &Path) -> MockupResult<Self> {
        let file: CatalogFile =
            serde_json::from_str(json).map_err(|e| MockupError::CatalogLoad {
                path:   PathBuf::new(),
                reason: e.to_string(),
            })?;

        let mut catalog = Self::new(file.devices)?;
        for device in &mut catalog.devices {
            device.resolve_bezel_path(base_dir);
        }

        Ok(catalog)
    }

    /// Returns the devices in catalog order
    pub fn devices(&self) -> &[Device] {
        &self.devices
    }

    /// Returns the number of devices (always at least one)
    pub fn len(&self) -> usize {
        self.devices.len()
    }

    /// Returns true if the catalog holds no devices (never for a constructed
    /// catalog)
    pub fn is_empty(&self) -> bool {
        self.devices.is_empty()
    }

    /// Selection labels for every device, in catalog order
    pub fn labels(&self) -> Vec<String> {
        self.devices.iter().map(Device::label).collect()
    }

    /// Iterates devices in catalog order
    pub fn iter(&self) -> std::slice::Iter<'_, Device> {
        self.devices.iter()
    }
}

impl<'a> IntoIterator for &'a Catalog {
    type Item = &'a Device;
    type IntoIter = std::slice::Iter<'a, Device>;

    fn into_iter(self) -> Self::IntoIter {
        self.devices.iter()
    }
}

fn validate_device(index: usize, device: &Device) -> MockupResult<()> {
    let invalid = |reason: &str| MockupError::InvalidCatalog {
        reason: format!("device #{} ({}): {}", index + 1, device.label(), reason),
    };

    if device.width == 0 || device.height == 0 {
        return Err(invalid("width and height must be greater than zero"));
    }
    if device.bezel_path.as_os_str().is_empty() {
        return Err(invalid("bezel image path is empty"));
    }

    Ok(())
}

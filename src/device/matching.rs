//! Exact dimension matching
//!
//! A device matches a screenshot when both its width and height equal the
//! screenshot's pixel dimensions. Matching is pure and preserves catalog
//! order; there is no fuzzy or aspect-ratio fallback.

use crate::{device::Catalog, model::Device};

/// Returns every device in `devices` whose canvas is exactly
/// `width` x `height`, in input order
///
/// An empty slice yields an empty result.
///
/// # Examples
///
/// ```
/// use device_mockup::{device::match_devices, model::Device};
///
/// let devices = vec![
///     Device::new("Apple", "iPhone 13", 1170, 2532, "a.png"),
///     Device::new("Apple", "iPhone 14", 1170, 2532, "b.png"),
///     Device::new("Google", "Pixel 8", 1080, 2400, "c.png"),
/// ];
///
/// let matches = match_devices(&devices, 1170, 2532);
/// assert_eq!(matches.len(), 2);
/// assert!(match_devices(&devices, 1, 1).is_empty());
/// ```
pub fn match_devices(devices: &[Device], width: u32, height: u32) -> Vec<&Device> {
    let matches: Vec<&Device> = devices
        .iter()
        .filter(|device| device.matches_dimensions(width, height))
        .collect();

    tracing::debug!(
        "{} of {} devices match {}x{}",
        matches.len(),
        devices.len(),
        width,
        height
    );

    matches
}

/// Catalog-level form of [`match_devices`]
pub fn find_matches(catalog: &Catalog, width: u32, height: u32) -> Vec<&Device> {
    match_devices(catalog.devices(), width, height)
}

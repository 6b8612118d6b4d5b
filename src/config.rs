//! Run configuration
//!
//! Values come from command-line flags (with environment fallbacks) in the
//! binary; nothing is persisted between runs.

use std::path::{Path, PathBuf};

/// Catalog file read when no `--catalog` is given
pub const DEFAULT_CATALOG_PATH: &str = "devices.json";

/// Mockup destination when no `--output` is given; overwritten on every run
pub const DEFAULT_OUTPUT_PATH: &str = "output.png";

/// Resolved settings for one mockup session
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SessionConfig {
    /// Device catalog file
    pub catalog_path:    PathBuf,
    /// Where the mockup PNG is written
    pub output_path:     PathBuf,
    /// Screenshot to use instead of prompting for one
    pub screenshot_path: Option<PathBuf>,
}

impl SessionConfig {
    /// Creates a configuration with default paths and an interactive
    /// screenshot prompt
    ///
    /// # Examples
    ///
    /// ```
    /// use device_mockup::config::SessionConfig;
    ///
    /// let config = SessionConfig::new().with_output("mockups/home.png");
    /// assert_eq!(config.output_path.to_str(), Some("mockups/home.png"));
    /// assert!(config.screenshot_path.is_none());
    /// ```
    pub fn new() -> Self {
        Self {
            catalog_path:    PathBuf::from(DEFAULT_CATALOG_PATH),
            output_path:     PathBuf::from(DEFAULT_OUTPUT_PATH),
            screenshot_path: None,
        }
    }

    /// Sets the catalog file
    pub fn with_catalog(mut self, path: impl Into<PathBuf>) -> Self {
        self.catalog_path = path.into();
        self
    }

    /// Sets the output file
    pub fn with_output(mut self, path: impl Into<PathBuf>) -> Self {
        self.output_path = path.into();
        self
    }

    /// Uses `path` as the screenshot instead of prompting
    pub fn with_screenshot(mut self, path: impl Into<PathBuf>) -> Self {
        self.screenshot_path = Some(path.into());
        self
    }

    /// Catalog path as a `Path`
    pub fn catalog_path(&self) -> &Path {
        &self.catalog_path
    }

    /// Output path as a `Path`
    pub fn output_path(&self) -> &Path {
        &self.output_path
    }
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults() {
        let config = SessionConfig::default();
        assert_eq!(config.catalog_path(), Path::new("devices.json"));
        assert_eq!(config.output_path(), Path::new("output.png"));
        assert_eq!(config.screenshot_path, None);
    }

    #[test]
    fn test_builder_methods() {
        let config = SessionConfig::new()
            .with_catalog("/etc/mockup/devices.json")
            .with_output("out.png")
            .with_screenshot("shot.png");

        assert_eq!(config.catalog_path(), Path::new("/etc/mockup/devices.json"));
        assert_eq!(config.output_path(), Path::new("out.png"));
        assert_eq!(config.screenshot_path, Some(PathBuf::from("shot.png")));
    }
}

//! Atomic file output
//!
//! Encoded mockups are written to a temporary file in the destination
//! directory, flushed to disk, and then renamed over the target. Readers of
//! the target path see either the previous file or the complete new one,
//! never a partial write. On failure the temporary file is removed.

use std::{
    io::Write,
    path::{Path, PathBuf},
};

use tempfile::NamedTempFile;

use crate::error::{MockupError, MockupResult};

/// Directory a temporary file for `path` should live in
///
/// The temp file must share a filesystem with the target for the final
/// rename to be atomic.
fn staging_dir(path: &Path) -> PathBuf {
    match path.parent() {
        Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
        _ => PathBuf::from("."),
    }
}

/// Writes `data` to `path` atomically, returning the number of bytes written
///
/// An existing file at `path` is replaced.
///
/// # Examples
///
/// ```
/// use device_mockup::util::output::write_atomic;
///
/// let dir = tempfile::tempdir().unwrap();
/// let path = dir.path().join("output.png");
///
/// let size = write_atomic(&path, b"png bytes").unwrap();
/// assert_eq!(size, 9);
/// assert_eq!(std::fs::read(&path).unwrap(), b"png bytes");
/// ```
pub fn write_atomic(path: &Path, data: &[u8]) -> MockupResult<u64> {
    let write_failed = |reason: String| MockupError::WriteFailed {
        path: path.to_path_buf(),
        reason,
    };

    let mut staged =
        NamedTempFile::new_in(staging_dir(path)).map_err(|e| write_failed(e.to_string()))?;

    staged
        .write_all(data)
        .and_then(|_| staged.flush())
        .and_then(|_| staged.as_file().sync_all())
        .map_err(|e| write_failed(e.to_string()))?;

    staged
        .persist(path)
        .map_err(|e| write_failed(e.error.to_string()))?;

    tracing::debug!("Wrote {} bytes to {}", data.len(), path.display());
    Ok(data.len() as u64)
}

//! Error types for mockup generation
//!
//! Every failure in the catalog → selection → compositing flow is expressed
//! as a [`MockupError`] value and propagated to the caller, which decides
//! whether to re-prompt, report, or exit. Each variant carries enough context
//! to be shown to the user and provides a remediation hint.

use std::path::PathBuf;

/// Result type alias for mockup operations
pub type MockupResult<T> = Result<T, MockupError>;

/// Error type for catalog loading, device selection and compositing
#[derive(Debug, thiserror::Error)]
pub enum MockupError {
    /// Device catalog file is missing, unreadable or malformed
    #[error("Failed to load device catalog '{}': {reason}", path.display())]
    CatalogLoad {
        /// Path of the catalog file
        path:   PathBuf,
        /// Reason the catalog could not be loaded
        reason: String,
    },

    /// Catalog content violates a catalog invariant
    #[error("Invalid device catalog: {reason}")]
    InvalidCatalog {
        /// What is wrong with the catalog
        reason: String,
    },

    /// Screenshot path is invalid or the file cannot be decoded
    #[error("Failed to read screenshot '{}': {reason}", path.display())]
    ScreenshotRead {
        /// Path supplied for the screenshot
        path:   PathBuf,
        /// Reason the screenshot could not be read
        reason: String,
    },

    /// Bezel image for the chosen device cannot be loaded
    #[error("Failed to load bezel image '{}': {reason}", path.display())]
    BezelLoad {
        /// Bezel path declared by the device
        path:   PathBuf,
        /// Reason the bezel could not be loaded
        reason: String,
    },

    /// Image encoding failed
    #[error("Failed to encode image as {format}: {reason}")]
    EncodingFailed {
        /// Image format that failed
        format: String,
        /// Reason for encoding failure
        reason: String,
    },

    /// Encoded mockup could not be written to its destination
    #[error("Failed to write mockup to '{}': {reason}", path.display())]
    WriteFailed {
        /// Destination path
        path:   PathBuf,
        /// Reason for the write failure
        reason: String,
    },

    /// A prompter answered with a choice that was not offered
    #[error("Selection {index} is out of range for {choices} choices")]
    InvalidSelection {
        /// Index returned by the prompter
        index:   usize,
        /// Number of choices that were offered
        choices: usize,
    },

    /// A scripted answer did not fit the prompt it was given to
    #[error("Scripted answer {answer} does not fit a {prompt} prompt")]
    UnexpectedAnswer {
        /// Kind of prompt that was shown
        prompt: &'static str,
        /// Debug rendering of the answer that was replayed
        answer: String,
    },

    /// Interactive input ended before a prompt was answered
    #[error("Input closed before the prompt was answered")]
    InputClosed,

    /// A blocking codec task panicked or was cancelled
    #[error("Background task failed: {reason}")]
    TaskFailed {
        /// Join error description
        reason: String,
    },

    /// I/O error occurred
    #[error("I/O error: {0}")]
    IoError(#[from] std::io::Error),
}

impl MockupError {
    /// Returns an actionable remediation hint for this error
    ///
    /// # Examples
    ///
    /// ```
    /// use device_mockup::error::MockupError;
    ///
    /// let error = MockupError::InputClosed;
    /// assert!(error.remediation_hint().contains("interactive terminal"));
    /// ```
    pub fn remediation_hint(&self) -> &str {
        match self {
            MockupError::CatalogLoad { .. } => {
                "Check that the catalog file exists and is valid JSON of the form {\"devices\": \
                 [...]}. Use --catalog to point at a different file."
            }
            MockupError::InvalidCatalog { .. } => {
                "Every device needs a non-zero width and height and a bezel image path. The \
                 catalog must list at least one device."
            }
            MockupError::ScreenshotRead { .. } => {
                "Check the path and make sure the file is a PNG, JPEG or WebP image. Relative \
                 paths are resolved from the current directory."
            }
            MockupError::BezelLoad { .. } => {
                "The bezel image declared for this device is missing or unreadable. Relative \
                 bezel paths are resolved from the catalog file's directory."
            }
            MockupError::EncodingFailed { .. } => {
                "PNG encoding of the mockup failed. Check available memory and the device \
                 dimensions in the catalog."
            }
            MockupError::WriteFailed { .. } => {
                "Check that the output directory exists and is writable, and that there is enough \
                 disk space. Use --output to write somewhere else."
            }
            MockupError::InvalidSelection { .. } => {
                "Pick one of the numbered choices that were listed."
            }
            MockupError::UnexpectedAnswer { .. } => {
                "The answer script is out of step with the prompts. Check the order and kind of \
                 the scripted answers."
            }
            MockupError::InputClosed => {
                "Run the tool from an interactive terminal, or pass --screenshot and answer the \
                 remaining prompts on stdin."
            }
            MockupError::TaskFailed { .. } => {
                "An internal image task stopped unexpectedly. Retry the run; if it persists the \
                 input image may be corrupt."
            }
            MockupError::IoError(_) => {
                "An I/O error occurred. Check file permissions, disk space, and system resources."
            }
        }
    }

    /// Returns true when the error concerns the screenshot input and the user
    /// can be asked for another path
    pub fn is_retryable_input(&self) -> bool {
        matches!(self, MockupError::ScreenshotRead { .. })
    }
}

impl From<tokio::task::JoinError> for MockupError {
    fn from(err: tokio::task::JoinError) -> Self {
        MockupError::TaskFailed {
            reason: err.to_string(),
        }
    }
}

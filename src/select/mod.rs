//! Device selection through user interaction
//!
//! This module provides:
//!
//! - [`Prompter`]: the interaction capabilities the resolver needs (free-text
//!   input, yes/no confirmation, single choice from labeled options)
//! - [`resolver`]: the state machine turning match results into one device
//! - [`TerminalPrompter`]: line-based prompts over any async reader/writer
//! - [`ScriptedPrompter`]: canned answers with a prompt log, for tests

use async_trait::async_trait;

use crate::error::MockupResult;

pub mod resolver;
pub mod scripted;
pub mod terminal;

pub use resolver::{NONE_OF_THESE, resolve};
pub use scripted::{Answer, PromptKind, PromptRecord, ScriptedPrompter};
pub use terminal::TerminalPrompter;

/// Interaction capabilities used by the session and the selection resolver
///
/// Implementations render the prompt however they like; callers only depend
/// on the answer. Every method fails with
/// [`MockupError::InputClosed`](crate::error::MockupError::InputClosed) when
/// no more answers can be obtained.
///
/// # Examples
///
/// ```
/// use async_trait::async_trait;
/// use device_mockup::{error::MockupResult, select::Prompter};
///
/// struct AlwaysFirst;
///
/// #[async_trait]
/// impl Prompter for AlwaysFirst {
///     async fn input(&mut self, _message: &str) -> MockupResult<String> {
///         Ok("shot.png".to_string())
///     }
///
///     async fn confirm(&mut self, _message: &str) -> MockupResult<bool> {
///         Ok(true)
///     }
///
///     async fn select(&mut self, _message: &str, _choices: &[String]) -> MockupResult<usize> {
///         Ok(0)
///     }
/// }
/// ```
#[async_trait]
pub trait Prompter: Send {
    /// Asks for a line of free text
    async fn input(&mut self, message: &str) -> MockupResult<String>;

    /// Asks a yes/no question
    async fn confirm(&mut self, message: &str) -> MockupResult<bool>;

    /// Asks the user to pick exactly one of `choices`, returning its index
    async fn select(&mut self, message: &str, choices: &[String]) -> MockupResult<usize>;

    /// Shows an informational line that needs no answer
    async fn notice(&mut self, _message: &str) -> MockupResult<()> {
        Ok(())
    }
}

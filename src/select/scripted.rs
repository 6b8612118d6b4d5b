//! Scripted prompter for tests
//!
//! [`ScriptedPrompter`] replays a fixed list of [`Answer`]s and records every
//! prompt it was shown, so tests can assert both the outcome of a selection
//! flow and which questions were asked along the way.
//!
//! # Examples
//!
//! ```
//! use device_mockup::select::{Answer, Prompter, ScriptedPrompter};
//!
//! #[tokio::main]
//! async fn main() {
//!     let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(true)]);
//!
//!     assert!(prompter.confirm("Use this device?").await.unwrap());
//!     assert_eq!(prompter.log().len(), 1);
//!
//!     // Script exhausted: behaves like closed input
//!     assert!(prompter.confirm("Again?").await.is_err());
//! }
//! ```

use std::collections::VecDeque;

use async_trait::async_trait;

use super::Prompter;
use crate::error::{MockupError, MockupResult};

/// A canned answer to the next prompt
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Answer {
    /// Reply to [`Prompter::input`]
    Text(String),
    /// Reply to [`Prompter::confirm`]
    Confirm(bool),
    /// Reply to [`Prompter::select`] by position
    Index(usize),
    /// Reply to [`Prompter::select`] by choice label
    Label(String),
}

/// Which capability a recorded prompt used
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptKind {
    Input,
    Confirm,
    Select,
    Notice,
}

/// One prompt shown to the scripted prompter
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PromptRecord {
    /// Capability used
    pub kind:    PromptKind,
    /// Prompt text
    pub message: String,
    /// Offered labels (empty unless `kind` is `Select`)
    pub choices: Vec<String>,
}

/// Prompter that replays scripted answers
///
/// Answers are consumed in order. A prompt whose kind does not fit the next
/// answer yields an error naming the mismatch; running out of answers yields
/// [`MockupError::InputClosed`]. Notices consume no answer.
#[derive(Debug, Default)]
pub struct ScriptedPrompter {
    answers: VecDeque<Answer>,
    log:     Vec<PromptRecord>,
}

impl ScriptedPrompter {
    /// Creates a prompter that will give `answers` in order
    pub fn new(answers: Vec<Answer>) -> Self {
        Self {
            answers: answers.into(),
            log:     Vec::new(),
        }
    }

    /// Every prompt shown so far, oldest first
    pub fn log(&self) -> &[PromptRecord] {
        &self.log
    }

    /// Records of `kind` only
    pub fn prompts_of(&self, kind: PromptKind) -> Vec<&PromptRecord> {
        self.log.iter().filter(|r| r.kind == kind).collect()
    }

    /// Returns true once every scripted answer has been consumed
    pub fn is_exhausted(&self) -> bool {
        self.answers.is_empty()
    }

    fn record(&mut self, kind: PromptKind, message: &str, choices: &[String]) {
        self.log.push(PromptRecord {
            kind,
            message: message.to_string(),
            choices: choices.to_vec(),
        });
    }

    fn next_answer(&mut self) -> MockupResult<Answer> {
        self.answers.pop_front().ok_or(MockupError::InputClosed)
    }
}

fn mismatch(prompt: &'static str, got: &Answer) -> MockupError {
    MockupError::UnexpectedAnswer {
        prompt,
        answer: format!("{got:?}"),
    }
}

#[async_trait]
impl Prompter for ScriptedPrompter {
    async fn input(&mut self, message: &str) -> MockupResult<String> {
        self.record(PromptKind::Input, message, &[]);
        match self.next_answer()? {
            Answer::Text(text) => Ok(text),
            other => Err(mismatch("text", &other)),
        }
    }

    async fn confirm(&mut self, message: &str) -> MockupResult<bool> {
        self.record(PromptKind::Confirm, message, &[]);
        match self.next_answer()? {
            Answer::Confirm(yes) => Ok(yes),
            other => Err(mismatch("confirm", &other)),
        }
    }

    async fn select(&mut self, message: &str, choices: &[String]) -> MockupResult<usize> {
        self.record(PromptKind::Select, message, choices);
        match self.next_answer()? {
            Answer::Index(index) => Ok(index),
            Answer::Label(label) => choices
                .iter()
                .position(|c| *c == label)
                .ok_or_else(|| mismatch("select", &Answer::Label(label))),
            other => Err(mismatch("select", &other)),
        }
    }

    async fn notice(&mut self, message: &str) -> MockupResult<()> {
        self.record(PromptKind::Notice, message, &[]);
        Ok(())
    }
}

//! Line-based terminal prompter
//!
//! Renders prompts as plain text lines and reads answers line by line. Works
//! over any async reader/writer pair, so the binary uses stdin/stdout while
//! tests drive it with in-memory buffers.

use async_trait::async_trait;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader, Stdin, Stdout};

use super::Prompter;
use crate::error::{MockupError, MockupResult};

/// Prompter reading answers from `R` and writing prompts to `W`
#[derive(Debug)]
pub struct TerminalPrompter<R, W> {
    reader: R,
    writer: W,
}

impl TerminalPrompter<BufReader<Stdin>, Stdout> {
    /// Creates a prompter bound to the process's stdin and stdout
    pub fn stdio() -> Self {
        Self::new(BufReader::new(tokio::io::stdin()), tokio::io::stdout())
    }
}

impl<R, W> TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    /// Creates a prompter over the given reader and writer
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }

    /// Consumes the prompter, returning the reader and writer
    pub fn into_parts(self) -> (R, W) {
        (self.reader, self.writer)
    }

    async fn write(&mut self, text: &str) -> MockupResult<()> {
        self.writer.write_all(text.as_bytes()).await?;
        self.writer.flush().await?;
        Ok(())
    }

    /// Reads one trimmed line; end of input is [`MockupError::InputClosed`]
    async fn read_line(&mut self) -> MockupResult<String> {
        let mut line = String::new();
        if self.reader.read_line(&mut line).await? == 0 {
            return Err(MockupError::InputClosed);
        }
        Ok(line.trim().to_string())
    }
}

/// Interprets a confirmation answer; empty means the default (yes)
fn parse_confirm(answer: &str) -> Option<bool> {
    match answer.to_ascii_lowercase().as_str() {
        "" | "y" | "yes" => Some(true),
        "n" | "no" => Some(false),
        _ => None,
    }
}

/// Interprets a 1-based choice number
fn parse_choice(answer: &str, len: usize) -> Option<usize> {
    answer
        .parse::<usize>()
        .ok()
        .filter(|n| (1..=len).contains(n))
        .map(|n| n - 1)
}

#[async_trait]
impl<R, W> Prompter for TerminalPrompter<R, W>
where
    R: AsyncBufRead + Unpin + Send,
    W: AsyncWrite + Unpin + Send,
{
    async fn input(&mut self, message: &str) -> MockupResult<String> {
        self.write(&format!("? {message} ")).await?;
        self.read_line().await
    }

    async fn confirm(&mut self, message: &str) -> MockupResult<bool> {
        loop {
            self.write(&format!("? {message} (Y/n) ")).await?;
            let answer = self.read_line().await?;
            match parse_confirm(&answer) {
                Some(yes) => return Ok(yes),
                None => self.write("  Please answer y or n.\n").await?,
            }
        }
    }

    async fn select(&mut self, message: &str, choices: &[String]) -> MockupResult<usize> {
        if choices.is_empty() {
            return Err(MockupError::InvalidSelection {
                index:   0,
                choices: 0,
            });
        }

        let mut listing = format!("? {message}\n");
        for (i, choice) in choices.iter().enumerate() {
            listing.push_str(&format!("  {}) {}\n", i + 1, choice));
        }
        self.write(&listing).await?;

        loop {
            self.write(&format!("  Answer [1-{}]: ", choices.len())).await?;
            let answer = self.read_line().await?;
            match parse_choice(&answer, choices.len()) {
                Some(index) => return Ok(index),
                None => {
                    self.write(&format!(
                        "  Please enter a number between 1 and {}.\n",
                        choices.len()
                    ))
                    .await?
                }
            }
        }
    }

    async fn notice(&mut self, message: &str) -> MockupResult<()> {
        self.write(&format!("! {message}\n")).await
    }
}

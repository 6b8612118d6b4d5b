//! Progress signaling around the compositing step
//!
//! Purely cosmetic: progress never affects control flow. The binary uses
//! [`SpinnerProgress`]; tests and `--quiet` runs use [`SilentProgress`].

use std::time::Duration;

use indicatif::{ProgressBar, ProgressStyle};

/// Start/succeed/fail signaling for a single long-running step
pub trait Progress: Send {
    /// The step has started
    fn start(&mut self, message: &str);

    /// The step finished successfully
    fn succeed(&mut self, message: &str);

    /// The step failed
    fn fail(&mut self, message: &str);
}

/// Terminal spinner backed by `indicatif`
#[derive(Debug, Default)]
pub struct SpinnerProgress {
    bar: Option<ProgressBar>,
}

impl SpinnerProgress {
    /// Creates an idle spinner; nothing is drawn until [`Progress::start`]
    pub fn new() -> Self {
        Self { bar: None }
    }

    fn finish(&mut self, symbol: &str, message: &str) {
        if let Some(bar) = self.bar.take() {
            bar.finish_and_clear();
        }
        eprintln!("{symbol} {message}");
    }
}

impl Progress for SpinnerProgress {
    fn start(&mut self, message: &str) {
        let style = ProgressStyle::with_template("{spinner:.cyan} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner());

        let bar = ProgressBar::new_spinner();
        bar.set_style(style);
        bar.set_message(message.to_string());
        bar.enable_steady_tick(Duration::from_millis(80));
        self.bar = Some(bar);
    }

    fn succeed(&mut self, message: &str) {
        self.finish("✔", message);
    }

    fn fail(&mut self, message: &str) {
        self.finish("✖", message);
    }
}

/// Progress that draws nothing and records each signal
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct SilentProgress {
    events: Vec<ProgressEvent>,
}

/// A progress signal recorded by [`SilentProgress`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ProgressEvent {
    Started(String),
    Succeeded(String),
    Failed(String),
}

impl SilentProgress {
    /// Creates a progress sink with no recorded events
    pub fn new() -> Self {
        Self::default()
    }

    /// Signals received so far, oldest first
    pub fn events(&self) -> &[ProgressEvent] {
        &self.events
    }
}

impl Progress for SilentProgress {
    fn start(&mut self, message: &str) {
        tracing::debug!("progress start: {}", message);
        self.events.push(ProgressEvent::Started(message.to_string()));
    }

    fn succeed(&mut self, message: &str) {
        tracing::debug!("progress succeed: {}", message);
        self.events.push(ProgressEvent::Succeeded(message.to_string()));
    }

    fn fail(&mut self, message: &str) {
        tracing::debug!("progress fail: {}", message);
        self.events.push(ProgressEvent::Failed(message.to_string()));
    }
}

//! One interactive mockup run
//!
//! Drives the whole flow for a single screenshot: obtain a readable
//! screenshot, match it against the catalog, resolve a device, then composite
//! and write the mockup with progress signaling. Every step completes before
//! the next begins.

use crate::{
    config::SessionConfig,
    device::{Catalog, find_matches},
    error::MockupResult,
    mockup::{Screenshot, create_mockup, screenshot::normalize_input_path},
    model::{Device, MockupReport},
    progress::Progress,
    select::{Prompter, resolve},
};

/// Prompt used to ask for the screenshot path
pub const SCREENSHOT_PROMPT: &str = "Enter the path to the screenshot:";

const PROGRESS_START: &str = "Creating mockup...";
const PROGRESS_SUCCESS: &str = "Mockup created successfully!";
const PROGRESS_FAILURE: &str = "Failed to create mockup!";

/// How a session ended
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SessionOutcome {
    /// A mockup was written
    Created {
        /// Device the screenshot was framed in
        device: Device,
        /// Details of the written file
        report: MockupReport,
    },
    /// The user left the screenshot prompt blank
    Cancelled,
}

/// Runs one session against `catalog`
///
/// An unreadable screenshot typed at the prompt is reported through
/// [`Prompter::notice`] and the path is asked for again; a blank answer ends
/// the session with [`SessionOutcome::Cancelled`]. A screenshot supplied in
/// `config` is not retried. Compositing failures mark `progress` failed and
/// are returned to the caller.
pub async fn run_session<P, G>(
    catalog: &Catalog,
    config: &SessionConfig,
    prompter: &mut P,
    progress: &mut G,
) -> MockupResult<SessionOutcome>
where
    P: Prompter + ?Sized,
    G: Progress + ?Sized,
{
    let Some(screenshot) = acquire_screenshot(config, prompter).await? else {
        tracing::info!("No screenshot given, exiting");
        return Ok(SessionOutcome::Cancelled);
    };

    let (width, height) = screenshot.dimensions();
    let matches = find_matches(catalog, width, height);
    let device = resolve(&matches, catalog, prompter).await?;

    progress.start(PROGRESS_START);
    match create_mockup(&screenshot, device, config.output_path()).await {
        Ok(report) => {
            progress.succeed(PROGRESS_SUCCESS);
            Ok(SessionOutcome::Created {
                device: device.clone(),
                report,
            })
        }
        Err(err) => {
            progress.fail(PROGRESS_FAILURE);
            Err(err)
        }
    }
}

async fn acquire_screenshot<P>(
    config: &SessionConfig,
    prompter: &mut P,
) -> MockupResult<Option<Screenshot>>
where
    P: Prompter + ?Sized,
{
    if let Some(path) = &config.screenshot_path {
        return Screenshot::probe(path.clone()).await.map(Some);
    }

    loop {
        let answer = prompter.input(SCREENSHOT_PROMPT).await?;
        let Some(path) = normalize_input_path(&answer) else {
            return Ok(None);
        };

        match Screenshot::probe(path).await {
            Ok(screenshot) => return Ok(Some(screenshot)),
            Err(err) if err.is_retryable_input() => {
                tracing::warn!("{}", err);
                prompter
                    .notice(&format!(
                        "{err}. Enter another path, or leave it blank to exit."
                    ))
                    .await?;
            }
            Err(err) => return Err(err),
        }
    }
}

#[cfg(test)]
mod tests {
    use std::path::Path;

    use image::{Rgba, RgbaImage};

    use super::*;
    use crate::{
        error::MockupError,
        progress::{ProgressEvent, SilentProgress},
        select::{Answer, PromptKind, ScriptedPrompter},
    };

    fn write_png(path: &Path, width: u32, height: u32) {
        RgbaImage::from_pixel(width, height, Rgba([0, 128, 255, 255]))
            .save(path)
            .unwrap();
    }

    fn fixture(dir: &Path) -> Catalog {
        write_png(&dir.join("c.png"), 50, 50);
        Catalog::new(vec![
            Device::new("Acme", "A", 100, 200, dir.join("a.png")),
            Device::new("Acme", "C", 50, 50, dir.join("c.png")),
        ])
        .unwrap()
    }

    #[tokio::test]
    async fn test_blank_path_cancels() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = fixture(dir.path());
        let config = SessionConfig::new().with_output(dir.path().join("out.png"));
        let mut prompter = ScriptedPrompter::new(vec![Answer::Text("  ".to_string())]);
        let mut progress = SilentProgress::new();

        let outcome = run_session(&catalog, &config, &mut prompter, &mut progress)
            .await
            .unwrap();

        assert_eq!(outcome, SessionOutcome::Cancelled);
        assert!(progress.events().is_empty());
    }

    #[tokio::test]
    async fn test_unreadable_path_is_asked_again() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = fixture(dir.path());
        let shot = dir.path().join("shot.png");
        write_png(&shot, 50, 50);
        let config = SessionConfig::new().with_output(dir.path().join("out.png"));
        let mut prompter = ScriptedPrompter::new(vec![
            Answer::Text(dir.path().join("nope.png").display().to_string()),
            Answer::Text(shot.display().to_string()),
            Answer::Confirm(true),
        ]);
        let mut progress = SilentProgress::new();

        let outcome = run_session(&catalog, &config, &mut prompter, &mut progress)
            .await
            .unwrap();

        assert!(matches!(outcome, SessionOutcome::Created { .. }));
        assert_eq!(prompter.prompts_of(PromptKind::Input).len(), 2);
        assert_eq!(prompter.prompts_of(PromptKind::Notice).len(), 1);
    }

    #[tokio::test]
    async fn test_configured_screenshot_is_not_retried() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = fixture(dir.path());
        let config = SessionConfig::new()
            .with_output(dir.path().join("out.png"))
            .with_screenshot(dir.path().join("missing.png"));
        let mut prompter = ScriptedPrompter::default();
        let mut progress = SilentProgress::new();

        let err = run_session(&catalog, &config, &mut prompter, &mut progress)
            .await
            .unwrap_err();

        assert!(matches!(err, MockupError::ScreenshotRead { .. }));
        assert!(prompter.log().is_empty());
    }

    #[tokio::test]
    async fn test_bezel_failure_marks_progress_failed() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = fixture(dir.path());
        let shot = dir.path().join("shot.png");
        write_png(&shot, 100, 200);
        let output = dir.path().join("out.png");
        let config = SessionConfig::new()
            .with_output(&output)
            .with_screenshot(&shot);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(true)]);
        let mut progress = SilentProgress::new();

        let err = run_session(&catalog, &config, &mut prompter, &mut progress)
            .await
            .unwrap_err();

        assert!(matches!(err, MockupError::BezelLoad { .. }));
        assert_eq!(
            progress.events(),
            &[
                ProgressEvent::Started(PROGRESS_START.to_string()),
                ProgressEvent::Failed(PROGRESS_FAILURE.to_string()),
            ]
        );
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_write_failure_marks_progress_failed() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = fixture(dir.path());
        let shot = dir.path().join("shot.png");
        write_png(&shot, 50, 50);
        let output = dir.path().join("missing").join("out.png");
        let config = SessionConfig::new()
            .with_output(&output)
            .with_screenshot(&shot);
        let mut prompter = ScriptedPrompter::new(vec![Answer::Confirm(true)]);
        let mut progress = SilentProgress::new();

        let err = run_session(&catalog, &config, &mut prompter, &mut progress)
            .await
            .unwrap_err();

        match err {
            MockupError::WriteFailed { path, .. } => assert_eq!(path, output),
            other => panic!("unexpected error: {other:?}"),
        }
        assert_eq!(
            progress.events().last(),
            Some(&ProgressEvent::Failed(PROGRESS_FAILURE.to_string()))
        );
        assert!(!output.exists());
    }
}

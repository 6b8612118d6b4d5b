//! device-mockup: command-line entry point
//!
//! Loads the device catalog, then runs one interactive session on
//! stdin/stdout. Logs go to stderr.

use std::{path::PathBuf, process::ExitCode};

use anyhow::Result;
use clap::Parser;
use device_mockup::{
    config::{DEFAULT_CATALOG_PATH, DEFAULT_OUTPUT_PATH, SessionConfig},
    device::Catalog,
    error::MockupError,
    progress::{Progress, SilentProgress, SpinnerProgress},
    select::TerminalPrompter,
    session::{SessionOutcome, run_session},
};
use tracing::info;
use tracing_subscriber::{EnvFilter, fmt};

#[derive(Parser, Debug)]
#[command(name = "device-mockup")]
#[command(about = "Frame a screenshot in a matching device bezel")]
#[command(version)]
struct Cli {
    /// Device catalog (JSON)
    #[arg(long, env = "DEVICE_MOCKUP_CATALOG", default_value = DEFAULT_CATALOG_PATH)]
    catalog: PathBuf,

    /// Where to write the mockup PNG (overwritten if it exists)
    #[arg(short, long, env = "DEVICE_MOCKUP_OUTPUT", default_value = DEFAULT_OUTPUT_PATH)]
    output: PathBuf,

    /// Screenshot to frame; prompted for when omitted
    #[arg(short, long)]
    screenshot: Option<PathBuf>,

    /// Hide the progress spinner
    #[arg(short, long)]
    quiet: bool,
}

impl Cli {
    fn session_config(&self) -> SessionConfig {
        let config = SessionConfig::new()
            .with_catalog(&self.catalog)
            .with_output(&self.output);
        match &self.screenshot {
            Some(path) => config.with_screenshot(path),
            None => config,
        }
    }
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> Result<ExitCode> {
    // Respects RUST_LOG; default keeps the prompts uncluttered
    fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("device_mockup=warn")),
        )
        .with_writer(std::io::stderr)
        .with_target(false)
        .init();

    let cli = Cli::parse();
    let config = cli.session_config();

    let catalog = match Catalog::load(config.catalog_path()) {
        Ok(catalog) => catalog,
        Err(err) => return Ok(report_failure(&err)),
    };

    let mut prompter = TerminalPrompter::stdio();
    let mut progress: Box<dyn Progress> = if cli.quiet {
        Box::new(SilentProgress::new())
    } else {
        Box::new(SpinnerProgress::new())
    };

    match run_session(&catalog, &config, &mut prompter, progress.as_mut()).await {
        Ok(SessionOutcome::Created { device, report }) => {
            info!("Framed screenshot in {}", device);
            println!("Mockup saved to {}", report.path.display());
            Ok(ExitCode::SUCCESS)
        }
        Ok(SessionOutcome::Cancelled) => Ok(ExitCode::SUCCESS),
        Err(err) => Ok(report_failure(&err)),
    }
}

fn report_failure(err: &MockupError) -> ExitCode {
    eprintln!("Error: {err}");
    eprintln!("Hint: {}", err.remediation_hint());
    ExitCode::FAILURE
}

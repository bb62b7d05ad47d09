use std::io::{self, BufWriter};
use std::process::ExitCode;
use std::time::Duration;

use anyhow::{Context, Result};
use clap::Parser;

use devfolio::cli::Cli;
use devfolio::config::Config;
use devfolio::content::Portfolio;
use devfolio::headless::{self, HeadlessOptions};
use devfolio::logging::{init_tracing, LogSink};
use devfolio::motion::{Clock, ManualClock, SystemClock};
use devfolio::sections::Page;
use devfolio::shutdown::ShutdownHandle;
use devfolio::ui::runtime;

fn main() -> ExitCode {
    match run() {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("Error: {err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();

    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    if let Some(frame_ms) = cli.frame_ms {
        config.animation.frame_ms = frame_ms;
    }
    if let Some(level) = &cli.log_level {
        config.logging.level = level.clone();
    }
    config.validate()?;

    let sink = if cli.headless {
        LogSink::Stderr
    } else {
        LogSink::File(
            config
                .logging
                .file
                .clone()
                .unwrap_or_else(Config::default_log_path),
        )
    };
    init_tracing(&config.logging.level, sink)?;

    let content_path = cli.content.as_deref().or(config.content.as_deref());
    let content = Portfolio::load_or_builtin(content_path)?;
    let threshold = config.reveal_threshold()?;
    tracing::debug!(?content_path, headless = cli.headless, "starting");

    if cli.headless {
        let clock = ManualClock::new();
        let mut page = Page::compose(&content, &config.animation, threshold, clock.now())
            .context("failed to compose page")?;
        let options = HeadlessOptions {
            frame: config.animation.frame(),
            until: Duration::from_millis(cli.until_ms),
        };
        let stdout = io::stdout();
        let mut out = BufWriter::new(stdout.lock());
        headless::run(&mut page, &clock, &options, &mut out)?;
        return Ok(());
    }

    let shutdown = ShutdownHandle::new();
    shutdown
        .install_signal_handlers()
        .context("failed to install signal handlers")?;
    let clock = SystemClock::new();
    let page = Page::compose(&content, &config.animation, threshold, clock.now())
        .context("failed to compose page")?;
    runtime::run(
        page,
        &clock,
        config.animation.frame(),
        config.animation.pulse_period(),
        shutdown,
    )
    .context("terminal session failed")?;
    Ok(())
}

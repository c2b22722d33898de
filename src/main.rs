//! replay-plot binary entry point

use std::fs::{self, OpenOptions};
use std::io::{self, Write};
use std::process::ExitCode;
use std::sync::Mutex;

use anyhow::{Context, Result};
use clap::{CommandFactory, Parser};
use tracing_subscriber::EnvFilter;

use replay_plot::cli::{Cli, LogTarget};
use replay_plot::plot::{
    initialize_plot, run_display, run_headless, update_frame, FuncAnimation, PlaybackSummary,
    PlotContext,
};
use replay_plot::theme::Theme;
use replay_plot::{Config, MatchRecord};

fn main() -> ExitCode {
    let cli = Cli::parse();

    if let Some(shell) = cli.completions {
        let mut cmd = Cli::command();
        clap_complete::generate(shell, &mut cmd, "replay-plot", &mut io::stdout());
        return ExitCode::SUCCESS;
    }

    if let Err(e) = init_logging(&cli) {
        eprintln!("{}", Theme::default().error_text(&format!("Error: {:#}", e)));
        return ExitCode::FAILURE;
    }

    let config = match load_config(&cli) {
        Ok(config) => config,
        Err(e) => {
            eprintln!("{}", Theme::default().error_text(&format!("Error: {:#}", e)));
            return ExitCode::FAILURE;
        }
    };
    let theme = config.plot.theme.theme();

    match run(&cli, &config, &theme) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            tracing::error!(error = %format!("{:#}", e), "replay-plot failed");
            eprintln!("{}", theme.error_text(&format!("Error: {:#}", e)));
            ExitCode::FAILURE
        }
    }
}

/// Set up the tracing subscriber.
///
/// Headless runs log to stderr. The interactive display owns the terminal,
/// so it logs to `--log-file` or the default file in the cache directory.
/// `RUST_LOG` overrides the default `info` level.
fn init_logging(cli: &Cli) -> Result<()> {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    match cli.log_target() {
        Some(LogTarget::File(path)) => {
            if let Some(dir) = path.parent().filter(|d| !d.as_os_str().is_empty()) {
                fs::create_dir_all(dir)
                    .with_context(|| format!("Failed to create log directory {}", dir.display()))?;
            }
            let file = OpenOptions::new()
                .create(true)
                .append(true)
                .open(&path)
                .with_context(|| format!("Failed to open log file {}", path.display()))?;
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_ansi(false)
                .with_writer(Mutex::new(file))
                .init();
        }
        Some(LogTarget::Stderr) => {
            tracing_subscriber::fmt()
                .with_env_filter(filter)
                .with_writer(io::stderr)
                .init();
        }
        None => {}
    }
    Ok(())
}

fn load_config(cli: &Cli) -> Result<Config> {
    let mut config = match &cli.config {
        Some(path) => Config::load_from(path)?,
        None => Config::load()?,
    };
    cli.apply_to(&mut config);
    Ok(config)
}

fn run(cli: &Cli, config: &Config, theme: &Theme) -> Result<()> {
    if cli.print_config {
        println!("{}", theme.primary_text(&config.to_toml()?));
        return Ok(());
    }

    let settings = config.animation_settings()?;
    let Some(path) = cli.file.as_deref() else {
        anyhow::bail!("No replay file given");
    };

    // Load before any plotting so a bad file never leaves a half-drawn screen
    let record = MatchRecord::load(path)?;
    let mut ctx = PlotContext::new(record, config.plot.player);
    initialize_plot(&mut ctx)?;

    let mut animation = FuncAnimation::new(settings, update_frame);
    let summary = if cli.headless {
        let mut out = io::stdout().lock();
        run_headless(&mut ctx, &mut animation, cli.cycles(), &mut out)?
    } else {
        run_display(&mut ctx, &mut animation, theme)?
    };

    log_summary(&summary);
    io::stdout().flush()?;
    Ok(())
}

fn log_summary(summary: &PlaybackSummary) {
    tracing::debug!(ticks = summary.ticks, cycles = summary.cycles, "playback ended");
}

//! Command-line interface definition
//!
//! Lives in the library so that `xtask` can generate the man page from it.

use std::path::PathBuf;

use clap::Parser;
use clap_complete::Shell;

use crate::config::Config;
use crate::replay::Player;
use crate::theme::ThemeName;

/// Version string shown by `--version`.
#[cfg(not(feature = "release"))]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    "-",
    env!("VERGEN_GIT_SHA"),
    " (built ",
    env!("REPLAY_PLOT_BUILD_DATE"),
    ")"
);

/// Version string shown by `--version`.
#[cfg(feature = "release")]
pub const LONG_VERSION: &str = concat!(
    env!("CARGO_PKG_VERSION"),
    " (built ",
    env!("REPLAY_PLOT_BUILD_DATE"),
    ")"
);

/// Where tracing output goes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum LogTarget {
    Stderr,
    File(PathBuf),
}

/// Animate a player's position from a captured match replay.
#[derive(Debug, Parser)]
#[command(name = "replay-plot", version, long_version = LONG_VERSION)]
#[command(about = "Animate a player's position from a captured match replay")]
pub struct Cli {
    /// Replay file (JSON array of per-frame objects)
    #[arg(required_unless_present_any = ["print_config", "completions"])]
    pub file: Option<PathBuf>,

    /// Player whose position is plotted
    #[arg(short, long, value_enum)]
    pub player: Option<Player>,

    /// First sampled frame (inclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub start: Option<i64>,

    /// Stop before this frame (exclusive)
    #[arg(long, allow_negative_numbers = true)]
    pub end: Option<i64>,

    /// Distance between sampled frames
    #[arg(long, allow_negative_numbers = true)]
    pub step: Option<i64>,

    /// Milliseconds between animation ticks
    #[arg(short, long, value_name = "MS")]
    pub interval: Option<u64>,

    /// Stop after one pass instead of looping
    #[arg(long)]
    pub no_repeat: bool,

    /// Redraw on every loop iteration, not only after changes
    #[arg(long)]
    pub no_blit: bool,

    /// Color theme
    #[arg(long, value_enum)]
    pub theme: Option<ThemeName>,

    /// Run without a terminal UI, printing one line per tick
    #[arg(long)]
    pub headless: bool,

    /// Passes over the frame sequence in headless mode [default: 1]
    #[arg(long, requires = "headless")]
    pub cycles: Option<u64>,

    /// Config file to use instead of the default location
    #[arg(short, long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// Write logs to this file [default: stderr when headless, otherwise
    /// replay-plot.log in the user cache directory]
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// Print the effective configuration as TOML and exit
    #[arg(long)]
    pub print_config: bool,

    /// Print shell completions and exit
    #[arg(long, value_enum, value_name = "SHELL")]
    pub completions: Option<Shell>,
}

impl Cli {
    /// Headless passes over the frame sequence.
    pub fn cycles(&self) -> u64 {
        self.cycles.unwrap_or(1)
    }

    /// Log destination: `--log-file`, else stderr when headless, else the
    /// default log file. `None` for `--print-config` or when no cache
    /// directory exists.
    pub fn log_target(&self) -> Option<LogTarget> {
        if self.print_config {
            return None;
        }
        if let Some(path) = &self.log_file {
            return Some(LogTarget::File(path.clone()));
        }
        if self.headless {
            return Some(LogTarget::Stderr);
        }
        Config::log_path().ok().map(LogTarget::File)
    }

    /// Apply command-line overrides on top of file/default configuration.
    pub fn apply_to(&self, config: &mut Config) {
        let animation = &mut config.animation;
        if let Some(start) = self.start {
            animation.start = start;
        }
        if let Some(end) = self.end {
            animation.end = end;
        }
        if let Some(step) = self.step {
            animation.step = step;
        }
        if let Some(interval) = self.interval {
            animation.interval_ms = interval;
        }
        if self.no_repeat {
            animation.repeat = false;
        }
        if self.no_blit {
            animation.blit = false;
        }
        if let Some(player) = self.player {
            config.plot.player = player;
        }
        if let Some(theme) = self.theme {
            config.plot.theme = theme;
        }
    }
}

//! Configuration file handling
//!
//! Settings live in `<config dir>/replay-plot/config.toml`. Every key is
//! optional and falls back to the built-in default:
//!
//! ```toml
//! [animation]
//! start = 0
//! end = 3000
//! step = 1000
//! interval_ms = 60
//! blit = true
//! repeat = true
//!
//! [plot]
//! player = "p1"
//! theme = "classic"
//! ```

use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::plot::{AnimationSettings, FrameSequence};
use crate::replay::Player;
use crate::theme::ThemeName;

/// Errors that can occur while loading or applying configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("Failed to read config file {}: {source}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse config file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: toml::de::Error,
    },

    #[error("Frame step must not be zero")]
    ZeroStep,

    #[error("Could not determine the user config directory")]
    NoConfigDir,

    #[error("Could not determine the user cache directory")]
    NoCacheDir,
}

/// Top-level configuration.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub animation: AnimationConfig,
    pub plot: PlotConfig,
}

/// Animation driver settings.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct AnimationConfig {
    /// First frame index (inclusive)
    pub start: i64,
    /// Last frame index (exclusive)
    pub end: i64,
    /// Distance between sampled frames
    pub step: i64,
    /// Milliseconds between ticks
    pub interval_ms: u64,
    /// Only redraw when the marker or UI changed
    pub blit: bool,
    /// Loop the frame sequence
    pub repeat: bool,
}

impl Default for AnimationConfig {
    fn default() -> Self {
        Self {
            start: 0,
            end: 3000,
            step: 1000,
            interval_ms: 60,
            blit: true,
            repeat: true,
        }
    }
}

/// What to plot and how it looks.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlotConfig {
    pub player: Player,
    pub theme: ThemeName,
}

impl Config {
    /// Path of the default config file.
    pub fn config_path() -> Result<PathBuf, ConfigError> {
        dirs::config_dir()
            .map(|dir| dir.join("replay-plot").join("config.toml"))
            .ok_or(ConfigError::NoConfigDir)
    }

    /// Default log file for the interactive display.
    pub fn log_path() -> Result<PathBuf, ConfigError> {
        dirs::cache_dir()
            .map(|dir| dir.join("replay-plot").join("replay-plot.log"))
            .ok_or(ConfigError::NoCacheDir)
    }

    /// Load the default config file.
    ///
    /// A missing file (or no config directory at all) yields the defaults.
    pub fn load() -> Result<Self, ConfigError> {
        let path = match Self::config_path() {
            Ok(path) => path,
            Err(ConfigError::NoConfigDir) => return Ok(Self::default()),
            Err(e) => return Err(e),
        };
        if !path.exists() {
            tracing::debug!(path = %path.display(), "no config file, using defaults");
            return Ok(Self::default());
        }
        Self::load_from(&path)
    }

    /// Load an explicit config file. Missing files are an error here.
    pub fn load_from(path: &Path) -> Result<Self, ConfigError> {
        let content = fs::read_to_string(path).map_err(|source| ConfigError::Read {
            path: path.to_path_buf(),
            source,
        })?;
        toml::from_str(&content).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Render as pretty TOML.
    pub fn to_toml(&self) -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(self)
    }

    /// Frame sequence described by the `[animation]` section.
    pub fn frame_sequence(&self) -> Result<FrameSequence, ConfigError> {
        let a = &self.animation;
        FrameSequence::new(a.start, a.end, a.step)
    }

    /// Driver settings described by the `[animation]` section.
    pub fn animation_settings(&self) -> Result<AnimationSettings, ConfigError> {
        Ok(AnimationSettings {
            frames: self.frame_sequence()?,
            interval: Duration::from_millis(self.animation.interval_ms),
            blit: self.animation.blit,
            repeat: self.animation.repeat,
        })
    }
}

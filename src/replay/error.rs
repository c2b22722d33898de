//! Replay loading and frame lookup errors.

use std::path::PathBuf;

/// Errors that can occur while loading a replay or indexing into it.
#[derive(Debug, thiserror::Error)]
pub enum ReplayError {
    #[error("Failed to read replay file {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to parse replay file {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        #[source]
        source: serde_json::Error,
    },

    #[error("Failed to read replay data: {0}")]
    Read(#[source] std::io::Error),

    #[error("Replay data is not a JSON array of frame objects: {0}")]
    InvalidJson(#[from] serde_json::Error),

    #[error("Frame index {index} is out of range for a replay with {len} frames")]
    FrameOutOfRange { index: i64, len: usize },
}

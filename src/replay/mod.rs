//! Match replay loading
//!
//! A replay is a JSON array with one object per captured frame, as written
//! by the recorder at the end of every round:
//!
//! ```json
//! [
//!   {"round_frame_count": 1, "round": 1, "p1_x": 0.5, "p1_z": -1.0, ...},
//!   {"round_frame_count": 2, "round": 1, "p1_x": 0.6, "p1_z": -1.0, ...}
//! ]
//! ```

mod error;
mod frame;

use std::fs;
use std::io::{BufReader, Read};
use std::path::Path;

use humansize::{format_size, BINARY};

pub use error::ReplayError;
pub use frame::{FrameState, Player};

/// Axis-aligned extent of the plotted coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Bounds {
    pub x: [f64; 2],
    pub z: [f64; 2],
}

impl Bounds {
    /// Fraction of the data extent added on each side.
    pub const MARGIN: f64 = 0.05;

    /// Pad a raw extent so points on the edge stay visible.
    ///
    /// A zero-width extent (a single distinct value) is widened by 1.0 per side.
    pub fn padded(x: [f64; 2], z: [f64; 2]) -> Self {
        Self {
            x: pad(x),
            z: pad(z),
        }
    }

    pub fn contains(&self, x: f64, z: f64) -> bool {
        x >= self.x[0] && x <= self.x[1] && z >= self.z[0] && z <= self.z[1]
    }
}

fn pad(range: [f64; 2]) -> [f64; 2] {
    let extent = range[1] - range[0];
    let margin = if extent > 0.0 {
        extent * Bounds::MARGIN
    } else {
        1.0
    };
    [range[0] - margin, range[1] + margin]
}

/// Decoded replay: every captured frame in order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct MatchRecord {
    frames: Vec<FrameState>,
}

impl MatchRecord {
    pub fn from_frames(frames: Vec<FrameState>) -> Self {
        Self { frames }
    }

    /// Load a replay from a JSON file.
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ReplayError> {
        let path = path.as_ref();
        let file = fs::File::open(path).map_err(|source| ReplayError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let size = file.metadata().map(|m| m.len()).unwrap_or(0);

        let frames: Vec<FrameState> = serde_json::from_reader(BufReader::new(file))
            .map_err(|source| {
                if source.is_io() {
                    ReplayError::Io {
                        path: path.to_path_buf(),
                        source: source.into(),
                    }
                } else {
                    ReplayError::Parse {
                        path: path.to_path_buf(),
                        source,
                    }
                }
            })?;

        tracing::debug!(
            path = %path.display(),
            frames = frames.len(),
            size = %format_size(size, BINARY),
            "loaded replay"
        );

        Ok(Self { frames })
    }

    /// Parse a replay from any reader.
    ///
    /// A failing reader is reported as `ReplayError::Read`, not as bad JSON.
    pub fn parse_reader<R: Read>(reader: R) -> Result<Self, ReplayError> {
        let frames = serde_json::from_reader(reader).map_err(|e| {
            if e.is_io() {
                ReplayError::Read(e.into())
            } else {
                ReplayError::InvalidJson(e)
            }
        })?;
        Ok(Self { frames })
    }

    /// Parse a replay from a string.
    pub fn parse_str(content: &str) -> Result<Self, ReplayError> {
        let frames = serde_json::from_str(content)?;
        Ok(Self { frames })
    }

    pub fn len(&self) -> usize {
        self.frames.len()
    }

    pub fn is_empty(&self) -> bool {
        self.frames.is_empty()
    }

    pub fn frames(&self) -> &[FrameState] {
        &self.frames
    }

    pub fn get(&self, index: usize) -> Option<&FrameState> {
        self.frames.get(index)
    }

    /// Frame at a signed tick value.
    ///
    /// Negative or past-the-end indices fail with `FrameOutOfRange`; they are
    /// never clamped.
    pub fn frame(&self, index: i64) -> Result<&FrameState, ReplayError> {
        usize::try_from(index)
            .ok()
            .and_then(|i| self.frames.get(i))
            .ok_or(ReplayError::FrameOutOfRange {
                index,
                len: self.frames.len(),
            })
    }

    /// Extent of `player`'s finite coordinates across the whole replay.
    ///
    /// Returns `None` when no frame has a finite (x, z) pair.
    pub fn bounds(&self, player: Player) -> Option<Bounds> {
        let mut points = self
            .frames
            .iter()
            .map(|f| f.position(player))
            .filter(|(x, z)| x.is_finite() && z.is_finite());

        let (x0, z0) = points.next()?;
        let (x, z) = points.fold(([x0, x0], [z0, z0]), |(x, z), (px, pz)| {
            ([x[0].min(px), x[1].max(px)], [z[0].min(pz), z[1].max(pz)])
        });

        Some(Bounds::padded(x, z))
    }
}

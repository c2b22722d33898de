//! Application context shared by the plot initializer and the frame update
//! function.
//!
//! The context owns the loaded replay (read-only), the tracked player, the
//! axis bounds and the single marker. It is built once at start-up and then
//! passed by reference to whoever needs it; nothing here is global.

use crate::replay::{Bounds, MatchRecord, Player, ReplayError};

/// The one point drawn on the plot.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    /// Replay frame the position was taken from
    pub frame: usize,
    pub x: f64,
    pub z: f64,
}

impl Marker {
    /// Whether the marker has a drawable position.
    ///
    /// Frames where the recorder failed to read a coordinate carry NaN.
    pub fn is_visible(&self) -> bool {
        self.x.is_finite() && self.z.is_finite()
    }
}

/// Everything the animation needs, owned in one place.
#[derive(Debug)]
pub struct PlotContext {
    record: MatchRecord,
    player: Player,
    bounds: Bounds,
    marker: Option<Marker>,
}

impl PlotContext {
    /// Fallback axes when the replay has no finite coordinates at all.
    pub const DEFAULT_BOUNDS: Bounds = Bounds {
        x: [-1.0, 1.0],
        z: [-1.0, 1.0],
    };

    pub fn new(record: MatchRecord, player: Player) -> Self {
        let bounds = record.bounds(player).unwrap_or(Self::DEFAULT_BOUNDS);
        Self {
            record,
            player,
            bounds,
            marker: None,
        }
    }

    pub fn record(&self) -> &MatchRecord {
        &self.record
    }

    pub fn player(&self) -> Player {
        self.player
    }

    pub fn bounds(&self) -> Bounds {
        self.bounds
    }

    /// Current marker, `None` until the plot has been initialized.
    pub fn marker(&self) -> Option<&Marker> {
        self.marker.as_ref()
    }

    /// Capture timestamp of the frame under the marker, if recorded.
    pub fn marker_capture_time(&self) -> Option<f64> {
        let marker = self.marker.as_ref()?;
        self.record.get(marker.frame)?.last_update
    }

    /// Move the marker to `index`, failing loudly when the frame does not exist.
    fn place_marker(&mut self, index: i64) -> Result<Marker, ReplayError> {
        let frame = self.record.frame(index)?;
        let (x, z) = frame.position(self.player);
        // frame() already rejected negative indices
        let marker = Marker {
            frame: index as usize,
            x,
            z,
        };
        self.marker = Some(marker);
        Ok(marker)
    }
}

/// Place the marker on frame 0.
///
/// Must run before the animation starts: the driver only ever moves the
/// marker created here. Fails with `FrameOutOfRange` on an empty replay.
pub fn initialize_plot(ctx: &mut PlotContext) -> Result<Marker, ReplayError> {
    let marker = ctx.place_marker(0)?;
    tracing::debug!(
        player = %ctx.player,
        x = marker.x,
        z = marker.z,
        "plot initialized"
    );
    Ok(marker)
}

/// Frame update function handed to the animation driver.
///
/// Moves the marker to the tracked player's (x, z) at frame `tick` and
/// returns it so the caller knows what to redraw. No interpolation or
/// clamping: a tick outside the replay is an error.
pub fn update_frame(ctx: &mut PlotContext, tick: i64) -> Result<Marker, ReplayError> {
    let marker = ctx.place_marker(tick)?;
    tracing::info!(tick, x = marker.x, z = marker.z, "update");
    Ok(marker)
}

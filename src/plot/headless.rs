//! Headless runner: drives the animation without a terminal.
//!
//! Ticks are delivered back to back (the interval is ignored) and each
//! resulting marker is written as one line:
//!
//! ```text
//! frame 1000: x=1.250 z=-0.500
//! ```

use std::io::Write;

use anyhow::Result;

use crate::plot::animation::FuncAnimation;
use crate::plot::context::{Marker, PlotContext};
use crate::plot::native::PlaybackSummary;
use crate::replay::ReplayError;

/// Run `cycles` full passes over the frame sequence, writing each marker to `out`.
///
/// Stops early when the animation finishes (repeat disabled). The first
/// update error aborts the run.
pub fn run_headless<F, W>(
    ctx: &mut PlotContext,
    animation: &mut FuncAnimation<F>,
    cycles: u64,
    out: &mut W,
) -> Result<PlaybackSummary>
where
    F: FnMut(&mut PlotContext, i64) -> Result<Marker, ReplayError>,
    W: Write,
{
    let per_cycle = animation.settings().frames.len() as u64;
    let limit = per_cycle.saturating_mul(cycles);

    while animation.ticks() < limit {
        let Some(result) = animation.step(ctx) else {
            break;
        };
        let marker = result?;
        writeln!(out, "{}", format_marker(&marker))?;
    }
    out.flush()?;

    Ok(PlaybackSummary::from_animation(animation))
}

/// One output line for a marker.
pub fn format_marker(marker: &Marker) -> String {
    format!("frame {}: x={:.3} z={:.3}", marker.frame, marker.x, marker.z)
}

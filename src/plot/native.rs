//! Interactive display loop.
//!
//! Owns the terminal for the lifetime of the display, pumps crossterm
//! events and fires animation ticks from the same thread. The poll timeout
//! is the time left until the next tick, so no background timer is needed.

use std::io;
use std::time::{Duration, Instant};

use anyhow::Result;
use crossterm::{
    cursor::{Hide, Show},
    event, execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use ratatui::{backend::CrosstermBackend, Terminal};

use crate::plot::animation::FuncAnimation;
use crate::plot::context::{Marker, PlotContext};
use crate::plot::input::handle_event;
use crate::plot::render::{self, StatusInfo};
use crate::plot::state::{InputResult, ViewState};
use crate::replay::ReplayError;
use crate::theme::Theme;

/// How long to block on input while nothing is scheduled.
const IDLE_POLL: Duration = Duration::from_millis(250);

/// Outcome of a finished display or headless run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlaybackSummary {
    /// Ticks delivered to the update function
    pub ticks: u64,
    /// Full passes over the frame sequence
    pub cycles: u64,
}

impl PlaybackSummary {
    pub fn from_animation<F>(animation: &FuncAnimation<F>) -> Self {
        let per_cycle = animation.settings().frames.len() as u64;
        Self {
            ticks: animation.ticks(),
            cycles: animation.ticks().checked_div(per_cycle).unwrap_or(0),
        }
    }
}

/// Puts the terminal into raw/alternate-screen mode and restores it on drop.
struct TerminalGuard;

impl TerminalGuard {
    fn enter() -> Result<Self> {
        enable_raw_mode()?;
        // From here on Drop undoes whatever succeeded
        let guard = Self;
        execute!(io::stdout(), EnterAlternateScreen, Hide)?;
        Ok(guard)
    }
}

impl Drop for TerminalGuard {
    fn drop(&mut self) {
        let _ = execute!(io::stdout(), Show, LeaveAlternateScreen);
        let _ = disable_raw_mode();
    }
}

/// Deadline of the tick after one that fired at `now`.
///
/// Keeps a steady cadence while on schedule. Once behind (after a pause or
/// a slow draw) the schedule restarts from `now`; missed ticks are dropped.
pub(crate) fn next_deadline(scheduled: Instant, period: Duration, now: Instant) -> Instant {
    let next = scheduled + period;
    if next <= now {
        now + period
    } else {
        next
    }
}

/// Snapshot of what the status bar should show.
pub(crate) fn status_info<F>(
    ctx: &PlotContext,
    animation: &FuncAnimation<F>,
    view: &ViewState,
) -> StatusInfo {
    StatusInfo {
        marker: ctx.marker().copied(),
        position: animation.position(),
        ticks_per_cycle: animation.settings().frames.len(),
        cycle: animation.cycle(),
        paused: view.paused,
        finished: view.finished,
        speed: view.speed,
        captured_at: ctx.marker_capture_time(),
    }
}

/// Run the animation in the terminal until the user closes it.
///
/// The plot must already be initialized. An update failure (a frame outside
/// the replay) ends the display and is returned after the terminal has been
/// restored.
#[cfg(not(tarpaulin_include))]
pub fn run_display<F>(
    ctx: &mut PlotContext,
    animation: &mut FuncAnimation<F>,
    theme: &Theme,
) -> Result<PlaybackSummary>
where
    F: FnMut(&mut PlotContext, i64) -> Result<Marker, ReplayError>,
{
    let _guard = TerminalGuard::enter()?;
    let mut terminal = Terminal::new(CrosstermBackend::new(io::stdout()))?;
    let mut view = ViewState::new();
    let mut next_tick = Instant::now();

    loop {
        if view.needs_render || !animation.blit() {
            let status = status_info(ctx, animation, &view);
            terminal.draw(|f| render::draw(f, ctx, &status, view.show_help, theme))?;
            view.needs_render = false;
        }

        let idle = view.paused || view.finished;
        let timeout = if idle {
            IDLE_POLL
        } else {
            next_tick.saturating_duration_since(Instant::now())
        };

        if event::poll(timeout)? && handle_event(event::read()?, &mut view) == InputResult::Quit {
            tracing::debug!(ticks = animation.ticks(), "display closed");
            return Ok(PlaybackSummary::from_animation(animation));
        }

        let now = Instant::now();
        if view.paused || view.finished || now < next_tick {
            continue;
        }

        match animation.step(ctx) {
            Some(Ok(_)) => view.needs_render = true,
            Some(Err(e)) => return Err(e.into()),
            None => {
                view.finished = true;
                view.needs_render = true;
            }
        }

        let period = view.scaled_interval(animation.interval());
        next_tick = next_deadline(next_tick, period, now);
    }
}

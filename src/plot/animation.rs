//! Animation driver.
//!
//! `FuncAnimation` walks a `FrameSequence`, calling an injected update
//! function once per tick. It knows nothing about terminals or clocks: the
//! display loop decides *when* to call [`FuncAnimation::step`], using
//! [`FuncAnimation::interval`] as the period.

use std::time::Duration;

use crate::config::ConfigError;
use crate::plot::context::{Marker, PlotContext};
use crate::replay::ReplayError;

/// Half-open arithmetic range of frame indices, `start..end` by `step`.
///
/// Produced lazily and restartable: every call to [`FrameSequence::iter`]
/// starts again from `start`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FrameSequence {
    start: i64,
    end: i64,
    step: i64,
}

impl FrameSequence {
    pub fn new(start: i64, end: i64, step: i64) -> Result<Self, ConfigError> {
        if step == 0 {
            return Err(ConfigError::ZeroStep);
        }
        Ok(Self { start, end, step })
    }

    pub fn start(&self) -> i64 {
        self.start
    }

    pub fn end(&self) -> i64 {
        self.end
    }

    pub fn step(&self) -> i64 {
        self.step
    }

    pub fn iter(&self) -> FrameIter {
        FrameIter {
            next: self.start,
            end: self.end,
            step: self.step,
        }
    }

    /// Number of ticks in one pass.
    pub fn len(&self) -> usize {
        let span = if self.step > 0 {
            self.end.saturating_sub(self.start)
        } else {
            self.start.saturating_sub(self.end)
        };
        if span <= 0 {
            return 0;
        }
        let step = self.step.unsigned_abs();
        span.unsigned_abs().div_ceil(step) as usize
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

impl Default for FrameSequence {
    /// Every 1000th frame below 3000: {0, 1000, 2000}.
    fn default() -> Self {
        Self {
            start: 0,
            end: 3000,
            step: 1000,
        }
    }
}

impl<'a> IntoIterator for &'a FrameSequence {
    type Item = i64;
    type IntoIter = FrameIter;

    fn into_iter(self) -> FrameIter {
        self.iter()
    }
}

/// Iterator over one pass of a [`FrameSequence`].
#[derive(Debug, Clone)]
pub struct FrameIter {
    next: i64,
    end: i64,
    step: i64,
}

impl Iterator for FrameIter {
    type Item = i64;

    fn next(&mut self) -> Option<i64> {
        let in_range = if self.step > 0 {
            self.next < self.end
        } else {
            self.next > self.end
        };
        if !in_range {
            return None;
        }
        let current = self.next;
        match current.checked_add(self.step) {
            Some(next) => self.next = next,
            // Overflow: this is the last value
            None => self.next = self.end,
        }
        Some(current)
    }
}

/// Driver configuration.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct AnimationSettings {
    pub frames: FrameSequence,
    /// Time between ticks
    pub interval: Duration,
    /// Redraw only when something changed
    pub blit: bool,
    /// Restart the sequence when it runs out
    pub repeat: bool,
}

impl Default for AnimationSettings {
    fn default() -> Self {
        Self {
            frames: FrameSequence::default(),
            interval: Duration::from_millis(60),
            blit: true,
            repeat: true,
        }
    }
}

/// Signature of the frame update function.
pub type UpdateFn = fn(&mut PlotContext, i64) -> Result<Marker, ReplayError>;

/// Calls an update function for each tick of a frame sequence.
pub struct FuncAnimation<F> {
    settings: AnimationSettings,
    update: F,
    cursor: FrameIter,
    /// Position of the last tick within its pass (0-based)
    position: Option<usize>,
    /// Completed-or-current pass number, starting at 1
    cycle: u64,
    ticks: u64,
    finished: bool,
}

impl<F> FuncAnimation<F> {
    pub fn settings(&self) -> &AnimationSettings {
        &self.settings
    }

    pub fn interval(&self) -> Duration {
        self.settings.interval
    }

    pub fn blit(&self) -> bool {
        self.settings.blit
    }

    /// Total number of ticks delivered so far.
    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    /// Current pass over the frame sequence, starting at 1.
    pub fn cycle(&self) -> u64 {
        self.cycle
    }

    /// Position of the most recent tick within its pass, 1-based.
    pub fn position(&self) -> Option<usize> {
        self.position.map(|p| p + 1)
    }

    pub fn is_finished(&self) -> bool {
        self.finished
    }
}

impl<F> FuncAnimation<F>
where
    F: FnMut(&mut PlotContext, i64) -> Result<Marker, ReplayError>,
{
    pub fn new(settings: AnimationSettings, update: F) -> Self {
        Self {
            cursor: settings.frames.iter(),
            finished: settings.frames.is_empty(),
            settings,
            update,
            position: None,
            cycle: 1,
            ticks: 0,
        }
    }

    /// Next tick value, restarting the sequence if `repeat` is set.
    fn next_tick(&mut self) -> Option<i64> {
        if self.finished {
            return None;
        }
        if let Some(tick) = self.cursor.next() {
            self.position = Some(self.position.map_or(0, |p| p + 1));
            return Some(tick);
        }
        if !self.settings.repeat {
            self.finished = true;
            return None;
        }

        self.cursor = self.settings.frames.iter();
        self.cycle += 1;
        self.position = Some(0);
        tracing::debug!(cycle = self.cycle, "restarting frame sequence");
        self.cursor.next()
    }

    /// Advance one tick, invoking the update function.
    ///
    /// Returns `None` once the sequence is exhausted and `repeat` is off.
    pub fn step(&mut self, ctx: &mut PlotContext) -> Option<Result<Marker, ReplayError>> {
        let tick = self.next_tick()?;
        self.ticks += 1;
        Some((self.update)(ctx, tick))
    }
}

//! Display state management
//!
//! Contains the `ViewState` struct that holds everything the display loop
//! tracks besides the plot itself, as well as shared types used across the
//! plot modules.

/// Result of processing an input event.
///
/// This enum is returned by input handlers to signal control flow
/// decisions to the display loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputResult {
    /// Keep animating
    Continue,
    /// Close the display
    Quit,
}

/// Central state for the interactive display.
#[derive(Debug)]
pub struct ViewState {
    // === Playback timing ===
    /// Whether ticking is paused
    pub paused: bool,
    /// Playback speed multiplier (1.0 = configured interval)
    pub speed: f64,
    /// Set once a non-repeating animation has run out of frames
    pub finished: bool,

    // === UI modes ===
    /// Whether help overlay is visible
    pub show_help: bool,

    // === Rendering flags ===
    /// True when screen needs to be redrawn
    pub needs_render: bool,
}

impl Default for ViewState {
    fn default() -> Self {
        Self::new()
    }
}

impl ViewState {
    /// Number of status lines below the plot
    pub const STATUS_LINES: u16 = 1;

    pub const MAX_SPEED: f64 = 16.0;
    pub const MIN_SPEED: f64 = 0.1;

    pub fn new() -> Self {
        Self {
            paused: false,
            speed: 1.0,
            finished: false,
            show_help: false,
            needs_render: true,
        }
    }

    /// Handle terminal resize event. Layout is recomputed from the frame
    /// area on the next draw.
    pub fn handle_resize(&mut self) {
        self.needs_render = true;
    }

    pub fn toggle_pause(&mut self) {
        self.paused = !self.paused;
        self.needs_render = true;
    }

    /// Increase playback speed (max 16x).
    pub fn speed_up(&mut self) {
        self.speed = (self.speed * 1.5).min(Self::MAX_SPEED);
        self.needs_render = true;
    }

    /// Decrease playback speed (min 0.1x).
    pub fn speed_down(&mut self) {
        self.speed = (self.speed / 1.5).max(Self::MIN_SPEED);
        self.needs_render = true;
    }

    pub fn toggle_help(&mut self) {
        self.show_help = !self.show_help;
        self.needs_render = true;
    }

    /// Tick period after applying the speed multiplier.
    pub fn scaled_interval(&self, interval: std::time::Duration) -> std::time::Duration {
        interval.div_f64(self.speed)
    }
}

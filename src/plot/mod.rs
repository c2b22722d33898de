//! Animated scatter plot of a player's position
//!
//! # Architecture
//!
//! The plot is organized into submodules:
//! - `context`: `PlotContext` (replay + marker), the plot initializer and the
//!   frame update function
//! - `animation`: `FrameSequence` and the `FuncAnimation` driver
//! - `state`: `ViewState` for the interactive display and shared types
//! - `input`: keyboard handling
//! - `render`: ratatui drawing (canvas, status bar, help overlay)
//! - `native`: the interactive display loop
//! - `headless`: the same driver without a terminal
//!
//! # Usage
//!
//! ```no_run
//! use replay_plot::plot::{
//!     initialize_plot, run_display, update_frame, AnimationSettings, FuncAnimation, PlotContext,
//! };
//! use replay_plot::replay::{MatchRecord, Player};
//! use replay_plot::theme::Theme;
//!
//! let record = MatchRecord::load("match.json").unwrap();
//! let mut ctx = PlotContext::new(record, Player::P1);
//! initialize_plot(&mut ctx).unwrap();
//!
//! let mut animation = FuncAnimation::new(AnimationSettings::default(), update_frame);
//! run_display(&mut ctx, &mut animation, &Theme::default()).unwrap();
//! ```

pub mod animation;
pub mod context;
pub mod headless;
pub(crate) mod input;
mod native;
pub mod render;
pub mod state;

pub use animation::{AnimationSettings, FrameSequence, FuncAnimation, UpdateFn};
pub use context::{initialize_plot, update_frame, Marker, PlotContext};
pub use headless::run_headless;
pub use native::{run_display, PlaybackSummary};
pub use state::{InputResult, ViewState};

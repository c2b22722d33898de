//! Replay Plot
//!
//! Animates one player's floor position (`x`, `z`) from a captured match
//! replay: a JSON array with one object per game frame. A single marker is
//! moved across a fixed plot as a `FuncAnimation` steps through a sequence
//! of sampled frame indices.
//!
//! Frames outside the replay are an error, never silently clamped.

pub mod cli;
pub mod config;
pub mod plot;
pub mod replay;
pub mod theme;

pub use config::Config;
pub use replay::{MatchRecord, ReplayError};

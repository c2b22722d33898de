//! Per-frame observation captured by the recorder.
//!
//! Every known field is optional: the recorder writes `null` whenever a
//! memory read failed for that frame. Unknown keys are kept as-is so that
//! newer recordings still load.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// Player whose position is tracked on the plot.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, clap::ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum Player {
    /// Player one (left side at round start)
    #[default]
    #[value(name = "p1", alias = "1")]
    P1,
    /// Player two
    #[value(name = "p2", alias = "2")]
    P2,
}

impl Player {
    /// Field name holding this player's horizontal coordinate.
    pub fn x_field(&self) -> &'static str {
        match self {
            Player::P1 => "p1_x",
            Player::P2 => "p2_x",
        }
    }

    /// Field name holding this player's depth coordinate.
    pub fn z_field(&self) -> &'static str {
        match self {
            Player::P1 => "p1_z",
            Player::P2 => "p2_z",
        }
    }

    pub fn label(&self) -> &'static str {
        match self {
            Player::P1 => "p1",
            Player::P2 => "p2",
        }
    }
}

impl std::fmt::Display for Player {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.label())
    }
}

/// A single frame of a match replay.
///
/// Numeric fields are kept as `f64` whatever their meaning, so a value the
/// recorder wrote never fails the load and coordinates come back exactly as
/// stored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct FrameState {
    #[serde(default)]
    pub round_frame_count: Option<f64>,
    #[serde(default)]
    pub round_frame_count_previous: Option<f64>,
    #[serde(default)]
    pub round: Option<f64>,

    #[serde(default)]
    pub p1_x: Option<f64>,
    #[serde(default)]
    pub p1_y: Option<f64>,
    #[serde(default)]
    pub p1_z: Option<f64>,
    #[serde(default)]
    pub p1_input_attack: Option<f64>,
    #[serde(default)]
    pub p1_input_direction: Option<f64>,
    #[serde(default)]
    pub p1_damage_received: Option<f64>,

    #[serde(default)]
    pub p2_x: Option<f64>,
    #[serde(default)]
    pub p2_y: Option<f64>,
    #[serde(default)]
    pub p2_z: Option<f64>,
    #[serde(default)]
    pub p2_input_attack: Option<f64>,
    #[serde(default)]
    pub p2_input_direction: Option<f64>,
    #[serde(default)]
    pub p2_damage_received: Option<f64>,

    /// Capture time in seconds since the Unix epoch
    #[serde(default)]
    pub last_update: Option<f64>,

    /// Fields this version does not know about
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl FrameState {
    /// Frame holding only player one's plotted coordinates.
    pub fn with_p1(x: f64, z: f64) -> Self {
        Self {
            p1_x: Some(x),
            p1_z: Some(z),
            ..Self::default()
        }
    }

    /// Look up a numeric field by its serialized name.
    ///
    /// Returns `None` when the field is absent, null, or not a number.
    pub fn field(&self, name: &str) -> Option<f64> {
        match name {
            "round_frame_count" => self.round_frame_count,
            "round_frame_count_previous" => self.round_frame_count_previous,
            "round" => self.round,
            "p1_x" => self.p1_x,
            "p1_y" => self.p1_y,
            "p1_z" => self.p1_z,
            "p1_input_attack" => self.p1_input_attack,
            "p1_input_direction" => self.p1_input_direction,
            "p1_damage_received" => self.p1_damage_received,
            "p2_x" => self.p2_x,
            "p2_y" => self.p2_y,
            "p2_z" => self.p2_z,
            "p2_input_attack" => self.p2_input_attack,
            "p2_input_direction" => self.p2_input_direction,
            "p2_damage_received" => self.p2_damage_received,
            "last_update" => self.last_update,
            other => self.extra.get(other).and_then(Value::as_f64),
        }
    }

    /// Plotted (x, z) position of `player`, NaN where the recorder had no value.
    pub fn position(&self, player: Player) -> (f64, f64) {
        (
            self.field(player.x_field()).unwrap_or(f64::NAN),
            self.field(player.z_field()).unwrap_or(f64::NAN),
        )
    }
}

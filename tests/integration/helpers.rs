//! Shared helpers for integration tests

use std::fs;
use std::path::PathBuf;

use serde_json::{json, Value};
use tempfile::TempDir;

/// One synthetic frame as the recorder writes it.
///
/// Player one walks along x and drifts on z, player two mirrors it.
pub fn frame_json(index: usize) -> Value {
    let t = index as f64;
    json!({
        "round_frame_count": index,
        "round_frame_count_previous": index.saturating_sub(1),
        "round": 1,
        "p1_x": t / 100.0,
        "p1_y": 0.0,
        "p1_z": t / 200.0,
        "p1_input_attack": 0,
        "p1_input_direction": 5,
        "p1_damage_received": 0,
        "p2_x": 0.0 - t / 100.0,
        "p2_y": 0.0,
        "p2_z": 0.0 - t / 200.0,
        "p2_input_attack": null,
        "p2_input_direction": null,
        "p2_damage_received": null,
        "last_update": 1_700_000_000.0 + t / 60.0
    })
}

/// Write a replay with `len` frames into a temp dir.
///
/// Returns the TempDir (keep it alive) and the replay path.
pub fn temp_replay(len: usize) -> (TempDir, PathBuf) {
    let frames: Vec<Value> = (0..len).map(frame_json).collect();
    temp_file("match.json", &Value::Array(frames).to_string())
}

/// Write arbitrary content into a temp dir.
pub fn temp_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let temp_dir = TempDir::new().expect("Failed to create temp dir");
    let path = temp_dir.path().join(name);
    fs::write(&path, content).expect("Failed to write temp file");
    (temp_dir, path)
}

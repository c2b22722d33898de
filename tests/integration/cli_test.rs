//! Integration tests for the replay-plot binary

use assert_cmd::Command;
use predicates::prelude::*;

use crate::helpers::{temp_file, temp_replay};

fn replay_plot() -> Command {
    let mut cmd = Command::cargo_bin("replay-plot").expect("binary should be built");
    cmd.env("NO_COLOR", "1").env_remove("RUST_LOG");
    cmd
}

// ============================================================================
// Help and metadata
// ============================================================================

#[test]
fn help_exits_0_and_shows_usage() {
    replay_plot()
        .arg("--help")
        .assert()
        .success()
        .stdout(predicate::str::contains("Usage:"))
        .stdout(predicate::str::contains("--headless"))
        .stdout(predicate::str::contains("FILE"));
}

#[test]
fn missing_file_argument_is_usage_error() {
    replay_plot()
        .assert()
        .failure()
        .code(2)
        .stderr(predicate::str::contains("FILE"));
}

#[test]
fn print_config_shows_defaults() {
    let (_temp_dir, config) = temp_file("config.toml", "");

    replay_plot()
        .args(["--print-config", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("[animation]"))
        .stdout(predicate::str::contains("step = 1000"))
        .stdout(predicate::str::contains("interval_ms = 60"));
}

#[test]
fn print_config_applies_flag_overrides() {
    let (_temp_dir, config) = temp_file("config.toml", "[animation]\nstep = 250\n");

    replay_plot()
        .args(["--print-config", "--player", "p2", "--config"])
        .arg(&config)
        .assert()
        .success()
        .stdout(predicate::str::contains("step = 250"))
        .stdout(predicate::str::contains("player = \"p2\""));
}

#[test]
fn completions_are_generated() {
    replay_plot()
        .args(["--completions", "bash"])
        .assert()
        .success()
        .stdout(predicate::str::contains("replay-plot"));
}

// ============================================================================
// Headless playback
// ============================================================================

#[test]
fn headless_prints_one_line_per_sampled_frame() {
    let (_temp_dir, path) = temp_replay(3000);

    replay_plot()
        .arg(&path)
        .arg("--headless")
        .assert()
        .success()
        .stdout("frame 0: x=0.000 z=0.000\nframe 1000: x=10.000 z=5.000\nframe 2000: x=20.000 z=10.000\n");
}

#[test]
fn headless_logs_update_per_tick() {
    let (_temp_dir, path) = temp_replay(3000);

    let output = replay_plot()
        .arg(&path)
        .args(["--headless", "--cycles", "2"])
        .output()
        .expect("Failed to execute replay-plot");

    assert!(output.status.success());
    let stderr = String::from_utf8_lossy(&output.stderr);
    assert_eq!(stderr.matches("update").count(), 6, "stderr: {stderr}");
    assert_eq!(String::from_utf8_lossy(&output.stdout).lines().count(), 6);
}

#[test]
fn headless_tracks_second_player() {
    let (_temp_dir, path) = temp_replay(3000);

    replay_plot()
        .arg(&path)
        .args(["--headless", "--player", "p2", "--step", "1500"])
        .assert()
        .success()
        .stdout("frame 0: x=0.000 z=0.000\nframe 1500: x=-15.000 z=-7.500\n");
}

#[test]
fn log_file_receives_updates() {
    let (temp_dir, path) = temp_replay(3000);
    let log = temp_dir.path().join("replay-plot.log");

    replay_plot()
        .arg(&path)
        .arg("--headless")
        .arg("--log-file")
        .arg(&log)
        .assert()
        .success()
        .stderr(predicate::str::is_empty());

    let content = std::fs::read_to_string(&log).unwrap();
    assert_eq!(content.matches("update").count(), 3);
}

// ============================================================================
// Failures
// ============================================================================

#[test]
fn nonexistent_replay_fails_before_plotting() {
    replay_plot()
        .args(["/nonexistent/path/match.json", "--headless"])
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::is_empty())
        .stderr(predicate::str::contains("Failed to read replay file"));
}

#[test]
fn invalid_json_fails() {
    let (_temp_dir, path) = temp_file("match.json", "not json");

    replay_plot()
        .arg(&path)
        .arg("--headless")
        .assert()
        .failure()
        .code(1)
        .stderr(predicate::str::contains("Failed to parse replay file"));
}

#[test]
fn short_replay_fails_with_out_of_range() {
    let (_temp_dir, path) = temp_replay(1500);

    replay_plot()
        .arg(&path)
        .arg("--headless")
        .assert()
        .failure()
        .code(1)
        .stdout(predicate::str::contains("frame 0:"))
        .stderr(predicate::str::contains(
            "Frame index 1000 is out of range for a replay with 1500 frames",
        ));
}

#[test]
fn zero_step_is_rejected() {
    let (_temp_dir, path) = temp_replay(10);

    replay_plot()
        .arg(&path)
        .args(["--headless", "--step", "0"])
        .assert()
        .failure()
        .stderr(predicate::str::contains("Frame step must not be zero"));
}

#[test]
fn cycles_without_headless_is_usage_error() {
    let (_temp_dir, path) = temp_replay(10);

    replay_plot()
        .arg(&path)
        .args(["--cycles", "2"])
        .assert()
        .failure()
        .code(2);
}

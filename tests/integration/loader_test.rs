//! Integration tests for loading replay files

use replay_plot::replay::{MatchRecord, Player, ReplayError};

use crate::helpers::{frame_json, temp_file, temp_replay};

#[test]
fn load_keeps_every_frame_in_order() {
    let (_temp_dir, path) = temp_replay(3000);

    let record = MatchRecord::load(&path).unwrap();

    assert_eq!(record.len(), 3000);
    for index in [0usize, 1, 1000, 2999] {
        let frame = record.get(index).unwrap();
        assert_eq!(frame.round_frame_count, Some(index as f64));
    }
}

#[test]
fn loaded_positions_match_written_values() {
    let (_temp_dir, path) = temp_replay(1001);
    let record = MatchRecord::load(&path).unwrap();

    for index in [0usize, 1, 333, 1000] {
        let written = frame_json(index);
        let frame = record.frame(index as i64).unwrap();

        assert_eq!(frame.p1_x, written["p1_x"].as_f64());
        assert_eq!(frame.p1_z, written["p1_z"].as_f64());
        assert_eq!(frame.p2_x, written["p2_x"].as_f64());
        assert_eq!(frame.p2_z, written["p2_z"].as_f64());
    }
    assert_eq!(record.frame(1000).unwrap().position(Player::P1), (10.0, 5.0));
    assert_eq!(record.frame(1000).unwrap().position(Player::P2), (-10.0, -5.0));
}

#[test]
fn coordinates_load_without_precision_loss() {
    let (_temp_dir, path) = temp_file("match.json", r#"[{"p1_x": 0.1, "p1_z": 16777217}]"#);
    let record = MatchRecord::load(&path).unwrap();

    assert_eq!(record.frame(0).unwrap().position(Player::P1), (0.1, 16777217.0));
}

#[test]
fn out_of_range_unused_fields_still_load() {
    let (_temp_dir, path) = temp_file(
        "match.json",
        r#"[{"p1_x": 1.0, "p1_z": 2.0, "round": 300, "p2_damage_received": -5,
             "p1_input_attack": 1.5}]"#,
    );
    let record = MatchRecord::load(&path).unwrap();

    let frame = record.get(0).unwrap();
    assert_eq!(frame.round, Some(300.0));
    assert_eq!(frame.p2_damage_received, Some(-5.0));
    assert_eq!(frame.p1_input_attack, Some(1.5));
}

#[test]
fn null_fields_load_as_missing() {
    let (_temp_dir, path) = temp_replay(2);
    let record = MatchRecord::load(&path).unwrap();

    let frame = record.get(1).unwrap();
    assert_eq!(frame.p2_input_attack, None);
    assert_eq!(frame.p1_input_direction, Some(5.0));
}

#[test]
fn unknown_fields_are_kept() {
    let (_temp_dir, path) = temp_file(
        "match.json",
        r#"[{"p1_x": 1.0, "p1_z": 2.0, "p1_health": 170}]"#,
    );
    let record = MatchRecord::load(&path).unwrap();

    assert_eq!(record.get(0).unwrap().field("p1_health"), Some(170.0));
}

#[test]
fn load_nonexistent_file_is_io_error() {
    let err = MatchRecord::load("/nonexistent/path/match.json").unwrap_err();

    assert!(matches!(err, ReplayError::Io { .. }));
    assert!(err.to_string().contains("/nonexistent/path/match.json"));
}

#[test]
fn load_malformed_json_is_parse_error() {
    let (_temp_dir, path) = temp_file("match.json", "[{\"p1_x\": 1.0,");

    let err = MatchRecord::load(&path).unwrap_err();
    assert!(matches!(err, ReplayError::Parse { .. }));
}

#[test]
fn bounds_cover_all_positions() {
    let (_temp_dir, path) = temp_replay(3000);
    let record = MatchRecord::load(&path).unwrap();

    let bounds = record.bounds(Player::P1).unwrap();
    for index in [0i64, 1000, 2000, 2999] {
        let (x, z) = record.frame(index).unwrap().position(Player::P1);
        assert!(bounds.contains(x, z), "frame {index} outside {bounds:?}");
    }
}

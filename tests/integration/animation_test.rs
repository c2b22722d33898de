//! Integration tests for the plot context and animation driver

use replay_plot::plot::{
    initialize_plot, run_headless, update_frame, AnimationSettings, FrameSequence, FuncAnimation,
    PlotContext,
};
use replay_plot::replay::{MatchRecord, Player, ReplayError};

use crate::helpers::temp_replay;

fn loaded_context(len: usize, player: Player) -> PlotContext {
    let (_temp_dir, path) = temp_replay(len);
    let record = MatchRecord::load(&path).expect("Should load replay");
    PlotContext::new(record, player)
}

#[test]
fn initialize_then_update_moves_the_same_marker() {
    let mut ctx = loaded_context(3000, Player::P1);

    let first = initialize_plot(&mut ctx).unwrap();
    assert_eq!(first.frame, 0);
    assert_eq!((first.x, first.z), (0.0, 0.0));

    let moved = update_frame(&mut ctx, 2000).unwrap();
    assert_eq!(moved.frame, 2000);
    assert_eq!((moved.x, moved.z), (20.0, 10.0));
    assert_eq!(ctx.marker(), Some(&moved));
}

#[test]
fn update_is_idempotent_for_same_tick() {
    let mut ctx = loaded_context(3000, Player::P2);
    initialize_plot(&mut ctx).unwrap();

    let a = update_frame(&mut ctx, 1000).unwrap();
    update_frame(&mut ctx, 2000).unwrap();
    let b = update_frame(&mut ctx, 1000).unwrap();

    assert_eq!(a, b);
}

#[test]
fn one_pass_visits_sampled_frames_in_order() {
    let mut ctx = loaded_context(3000, Player::P1);
    initialize_plot(&mut ctx).unwrap();
    let mut anim = FuncAnimation::new(AnimationSettings::default(), update_frame);

    let frames: Vec<usize> = std::iter::from_fn(|| anim.step(&mut ctx))
        .take(6)
        .map(|r| r.unwrap().frame)
        .collect();

    assert_eq!(frames, vec![0, 1000, 2000, 0, 1000, 2000]);
}

#[test]
fn short_replay_fails_loudly_at_first_missing_frame() {
    let mut ctx = loaded_context(1500, Player::P1);
    initialize_plot(&mut ctx).unwrap();
    let mut anim = FuncAnimation::new(AnimationSettings::default(), update_frame);

    assert!(anim.step(&mut ctx).unwrap().is_ok());
    let err = anim.step(&mut ctx).unwrap().unwrap_err();

    assert!(matches!(
        err,
        ReplayError::FrameOutOfRange {
            index: 1000,
            len: 1500
        }
    ));
    // Marker stays where the last good update left it
    assert_eq!(ctx.marker().unwrap().frame, 0);
}

#[test]
fn empty_replay_cannot_be_initialized() {
    let mut ctx = PlotContext::new(MatchRecord::default(), Player::P1);

    let err = initialize_plot(&mut ctx).unwrap_err();
    assert!(matches!(err, ReplayError::FrameOutOfRange { index: 0, len: 0 }));
}

#[test]
fn headless_run_over_custom_sequence() {
    let mut ctx = loaded_context(500, Player::P1);
    initialize_plot(&mut ctx).unwrap();
    let settings = AnimationSettings {
        frames: FrameSequence::new(0, 500, 100).unwrap(),
        repeat: false,
        ..AnimationSettings::default()
    };
    let mut anim = FuncAnimation::new(settings, update_frame);
    let mut out = Vec::new();

    let summary = run_headless(&mut ctx, &mut anim, 3, &mut out).unwrap();
    let output = String::from_utf8(out).unwrap();

    assert_eq!(summary.ticks, 5);
    assert_eq!(output.lines().count(), 5);
    assert!(output.starts_with("frame 0: x=0.000 z=0.000\n"));
    assert!(output.ends_with("frame 400: x=4.000 z=2.000\n"));
}

// Integration tests for the playback controller

use std::time::{Duration, Instant};

use sortty::constants::DEFAULT_INPUT;
use sortty::playback::{Direction, Playback};
use sortty::sorts::{self, Algorithm};
use sortty::trace::{Trace, TraceError};

const INTERVAL: Duration = Duration::from_millis(700);

fn insertion() -> Playback<Algorithm> {
    Playback::new(Algorithm::Insertion, &DEFAULT_INPUT, INTERVAL).expect("valid input")
}

#[test]
fn test_step_forward_reaches_end_then_clamps() {
    let mut playback = insertion();
    let len = playback.len();
    assert!(playback.is_at_start());

    for _ in 0..len - 1 {
        assert!(playback.step(Direction::Forward));
    }
    assert_eq!(playback.position(), len - 1);
    assert!(playback.is_at_end());
    assert_eq!(
        playback.current().map(|s| s.array.clone()),
        Some(vec![1, 2, 3, 4, 5, 6, 7, 8])
    );

    assert!(!playback.step(Direction::Forward));
    assert_eq!(playback.position(), len - 1);
}

#[test]
fn test_step_backward_clamps_at_start() {
    let mut playback = insertion();
    assert!(!playback.step(Direction::Backward));
    assert_eq!(playback.position(), 0);

    playback.step(Direction::Forward);
    playback.step(Direction::Forward);
    assert!(playback.step(Direction::Backward));
    assert_eq!(playback.position(), 1);
}

#[test]
fn test_step_by_stops_at_boundary() {
    let mut playback = insertion();
    assert_eq!(playback.step_by(Direction::Forward, 5), 5);
    assert_eq!(playback.position(), 5);
    assert_eq!(playback.step_by(Direction::Backward, 9), 5);
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_tick_advances_once_per_interval() {
    let mut playback = insertion();
    let start = Instant::now();

    assert!(playback.play(start));
    assert!(playback.is_playing());

    // Not a full interval yet
    assert!(!playback.tick(start + INTERVAL / 2));
    assert_eq!(playback.position(), 0);

    assert!(playback.tick(start + INTERVAL));
    assert_eq!(playback.position(), 1);

    // The interval restarts from the last automatic step
    assert!(!playback.tick(start + INTERVAL + INTERVAL / 2));
    assert!(playback.tick(start + INTERVAL * 2));
    assert_eq!(playback.position(), 2);
}

#[test]
fn test_tick_while_paused_does_nothing() {
    let mut playback = insertion();
    let start = Instant::now();
    assert!(!playback.tick(start + INTERVAL * 10));
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_play_while_playing_keeps_single_timer() {
    let mut playback = insertion();
    let start = Instant::now();

    playback.play(start);
    // A second play must not restart or double the timer
    assert!(playback.play(start + INTERVAL / 2));
    assert!(playback.tick(start + INTERVAL));
    assert_eq!(playback.position(), 1);

    // Even a late tick only moves one snapshot
    assert!(playback.tick(start + INTERVAL * 5));
    assert_eq!(playback.position(), 2);
}

#[test]
fn test_playback_stops_at_end() {
    let mut playback = insertion();
    let len = playback.len();
    let mut now = Instant::now();

    playback.play(now);
    for _ in 0..len - 1 {
        now += INTERVAL;
        assert!(playback.tick(now));
    }
    assert!(playback.is_at_end());
    assert!(!playback.is_playing());

    now += INTERVAL;
    assert!(!playback.tick(now));
    assert!(!playback.play(now), "play at the last snapshot is a no-op");
}

#[test]
fn test_manual_navigation_cancels_playback() {
    let start = Instant::now();

    let mut playback = insertion();
    playback.play(start);
    playback.step(Direction::Forward);
    assert!(!playback.is_playing());
    assert!(!playback.tick(start + INTERVAL));
    assert_eq!(playback.position(), 1);

    let mut playback = insertion();
    playback.play(start);
    playback.jump_to_end();
    assert!(!playback.is_playing());

    playback.play(start);
    playback.reset();
    assert!(!playback.is_playing());
    assert_eq!(playback.position(), 0);
}

#[test]
fn test_toggle() {
    let mut playback = insertion();
    let now = Instant::now();
    assert!(playback.toggle(now));
    assert!(!playback.toggle(now));
    assert!(!playback.is_playing());
}

#[test]
fn test_set_input_regenerates_and_resets() {
    let mut playback = insertion();
    let now = Instant::now();
    playback.step_by(Direction::Forward, 3);
    playback.play(now);

    playback.set_input(&[3, 1, 2]).expect("valid input");
    assert_eq!(playback.position(), 0);
    assert!(!playback.is_playing());
    assert_eq!(playback.trace().input(), &[3, 1, 2]);
    assert_eq!(playback.current().map(|s| s.array.clone()), Some(vec![3, 1, 2]));
}

#[test]
fn test_failed_set_input_keeps_state() {
    let mut playback =
        Playback::new(Algorithm::Counting, &[2, 0, 1], INTERVAL).expect("valid input");
    let now = Instant::now();
    playback.step_by(Direction::Forward, 2);
    playback.play(now);
    let before = playback.trace().clone();

    assert!(playback.set_input(&[2, -1]).is_err());
    assert!(playback.set_input(&[]).is_err());
    assert_eq!(playback.trace(), &before);
    assert_eq!(playback.position(), 2);
    assert!(playback.is_playing());
}

#[test]
fn test_set_source_switches_algorithm() {
    let mut playback = insertion();
    playback.step(Direction::Forward);

    playback
        .set_source(Algorithm::Heap, &DEFAULT_INPUT)
        .expect("valid input");
    assert_eq!(*playback.source(), Algorithm::Heap);
    assert_eq!(playback.trace().algorithm(), Algorithm::Heap);
    assert_eq!(playback.position(), 0);

    assert!(playback.set_source(Algorithm::Counting, &[-4]).is_err());
    assert_eq!(*playback.source(), Algorithm::Heap);
}

#[test]
fn test_generic_over_closure_sources() {
    let source = |input: &[i64]| -> Result<Trace, TraceError> {
        sorts::generate(Algorithm::Bubble, input)
    };
    let mut playback = Playback::new(source, &[2, 1], INTERVAL).expect("valid input");
    while playback.step(Direction::Forward) {}
    assert_eq!(playback.current().map(|s| s.array.clone()), Some(vec![1, 2]));
    assert_eq!(playback.interval(), INTERVAL);
}

//! Integration tests for the slide lock control.
//!
//! Drags are fed either as pre-recognized pan events or as raw pointer
//! input with explicit timestamps; animations are driven frame by frame.

use proptest::prelude::*;
use slidelock::{
    Phase, SlideLock, SlideLockConfig, SlideLockDelegate, Status, StatusUpdated, UNLOCK_MARGIN,
};
use slidelock_core::{
    CornerRadius, Event, GestureState, PointerId, PointerType, Point, RecordingCanvas, Rect,
    Widget,
};
use std::sync::{Arc, Mutex};
use std::time::{Duration, Instant};

const FRAME: f64 = 1.0 / 60.0;

/// Delegate that records every notification.
#[derive(Clone, Default)]
struct Recorder {
    seen: Arc<Mutex<Vec<(Status, bool)>>>,
}

impl Recorder {
    fn statuses(&self) -> Vec<Status> {
        self.seen.lock().unwrap().iter().map(|(s, _)| *s).collect()
    }
}

impl SlideLockDelegate for Recorder {
    fn status_updated(&mut self, status: Status, sender: &SlideLock) {
        self.seen.lock().unwrap().push((status, sender.is_unlocked()));
    }
}

fn control(track_width: f32, handle_width: f32) -> (SlideLock, Recorder) {
    let recorder = Recorder::default();
    let mut lock = SlideLock::new()
        .configuration(&SlideLockConfig::new().handle_width(handle_width))
        .delegate(recorder.clone());
    lock.layout(Rect::new(0.0, 0.0, track_width, 60.0));
    (lock, recorder)
}

fn release(lock: &mut SlideLock, dx: f32, vx: f32) {
    lock.event(&Event::pan(Point::ORIGIN, Point::ORIGIN, GestureState::Began));
    lock.event(&Event::pan(
        Point::new(dx, 0.0),
        Point::ORIGIN,
        GestureState::Changed,
    ));
    lock.event(&Event::pan(
        Point::new(dx, 0.0),
        Point::new(vx, 0.0),
        GestureState::Ended,
    ));
}

/// Tick until the control is idle, collecting completion messages.
fn settle(lock: &mut SlideLock) -> Vec<StatusUpdated> {
    let mut updates = Vec::new();
    for _ in 0..600 {
        if let Some(update) = lock.tick(FRAME) {
            updates.push(update);
        }
        if lock.phase() == Phase::Idle {
            break;
        }
    }
    updates
}

fn render(lock: &SlideLock) -> RecordingCanvas {
    let mut canvas = RecordingCanvas::new();
    lock.paint(&mut canvas);
    canvas
}

// =============================================================================
// Release Scenarios
// =============================================================================

#[test]
fn test_scenario_full_drag_unlocks() {
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 250.0, 0.0);
    assert!(lock.is_unlocked());
    assert_eq!(lock.phase(), Phase::AnimatingUnlock);

    let updates = settle(&mut lock);
    assert_eq!(
        updates,
        vec![StatusUpdated {
            status: Status::Unlocked
        }]
    );
    assert_eq!(recorder.statuses(), vec![Status::Unlocked]);
    assert_eq!(lock.handle_offset(), 0.0);
    assert_eq!(lock.status_text(), Some("UNLOCKED"));
}

#[test]
fn test_scenario_short_drag_resets() {
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 50.0, 0.0);
    assert!(!lock.is_unlocked());
    assert_eq!(lock.phase(), Phase::AnimatingReset);

    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Locked]);
    assert_eq!(lock.handle_offset(), -240.0);
    assert!(!lock.is_unlocked());
}

#[test]
fn test_scenario_backward_fling_resets() {
    // finalX = 100 - 100 * 0.2 = 80
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 100.0, -100.0);
    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Locked]);
    assert!(!lock.is_unlocked());
}

#[test]
fn test_scenario_negative_drag_clamps_and_resets() {
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, -50.0, 0.0);
    assert_eq!(lock.handle_offset(), -290.0);
    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Locked]);
    assert_eq!(lock.handle_offset(), -240.0);
}

#[test]
fn test_boundary_release_stays_locked() {
    // finalX + handleWidth == trackWidth - 60
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 300.0 - UNLOCK_MARGIN - 60.0, 0.0);
    assert!(!lock.is_unlocked());
    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Locked]);
}

#[test]
fn test_fling_unlocks_short_drag() {
    // 100 + 600 * 0.2 = 220
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 100.0, 600.0);
    assert!(lock.is_unlocked());
    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Unlocked]);
}

// =============================================================================
// Timing and Notification
// =============================================================================

#[test]
fn test_reset_holds_for_release_duration() {
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 50.0, 0.0);

    // Hold of 0.2s: still parked where the finger let go.
    for _ in 0..11 {
        assert_eq!(lock.tick(FRAME), None);
    }
    assert_eq!(lock.handle_offset(), -190.0);
    assert!(recorder.statuses().is_empty());

    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Locked]);
}

#[test]
fn test_no_notification_while_dragging() {
    let (mut lock, recorder) = control(300.0, 60.0);
    lock.event(&Event::pan(Point::ORIGIN, Point::ORIGIN, GestureState::Began));
    for dx in [10.0, 100.0, 250.0, 400.0] {
        lock.event(&Event::pan(
            Point::new(dx, 0.0),
            Point::ORIGIN,
            GestureState::Changed,
        ));
        assert_eq!(lock.tick(FRAME), None);
    }
    assert!(recorder.statuses().is_empty());
    assert!(!lock.is_unlocked());
}

#[test]
fn test_delegate_sees_settled_state() {
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 250.0, 0.0);
    settle(&mut lock);
    release(&mut lock, 10.0, 0.0);
    settle(&mut lock);

    let seen = recorder.seen.lock().unwrap().clone();
    assert_eq!(
        seen,
        vec![(Status::Unlocked, true), (Status::Locked, false)]
    );
}

#[test]
fn test_relock_restores_locked_visuals() {
    let (mut lock, _) = control(300.0, 60.0);
    let locked = render(&lock);

    release(&mut lock, 250.0, 0.0);
    settle(&mut lock);
    assert_ne!(render(&lock).commands(), locked.commands());

    release(&mut lock, 10.0, 0.0);
    settle(&mut lock);
    assert_eq!(render(&lock).commands(), locked.commands());
    assert_eq!(lock.status_text(), Some("UNLOCK"));
}

#[test]
fn test_cancelled_pan_releases_with_zero_velocity() {
    let (mut lock, recorder) = control(300.0, 60.0);
    lock.event(&Event::pan(Point::ORIGIN, Point::ORIGIN, GestureState::Began));
    lock.event(&Event::pan(
        Point::new(250.0, 0.0),
        Point::ORIGIN,
        GestureState::Changed,
    ));
    lock.event(&Event::pan(
        Point::new(250.0, 0.0),
        Point::new(-5000.0, 0.0),
        GestureState::Cancelled,
    ));
    assert!(lock.is_unlocked());
    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Unlocked]);
}

// =============================================================================
// Configuration
// =============================================================================

#[test]
fn test_apply_configuration_is_idempotent() {
    let config = SlideLockConfig::from_yaml(
        r##"
track_color: "#101010"
handle_color: "#404040"
corner_radius: 12
locked_text: "SLIDE"
"##,
    )
    .unwrap();

    let (mut once, _) = control(300.0, 60.0);
    once.apply_configuration(&config);
    let (mut twice, _) = control(300.0, 60.0);
    twice.apply_configuration(&config);
    twice.apply_configuration(&config);

    assert_eq!(render(&once).commands(), render(&twice).commands());
    assert_eq!(once.handle_offset(), twice.handle_offset());
}

#[test]
fn test_reapplying_style_after_unlock_shows_locked_text() {
    let (mut lock, recorder) = control(300.0, 60.0);
    release(&mut lock, 250.0, 0.0);
    settle(&mut lock);

    let config = lock.config().clone();
    lock.apply_configuration(&config);

    assert_eq!(lock.status_text(), Some("UNLOCK"));
    assert!(lock.is_unlocked());
    assert_eq!(lock.status(), Status::Unlocked);
    assert_eq!(lock.handle_offset(), 0.0);
    assert_eq!(recorder.statuses(), vec![Status::Unlocked]);
}

#[test]
fn test_children_clipped_to_rounded_track() {
    let (mut lock, _) = control(300.0, 60.0);
    lock.apply_configuration(&SlideLockConfig::new().corner_radius(12.0));

    let canvas = render(&lock);
    let clipped: Vec<_> = canvas
        .commands()
        .iter()
        .filter_map(|cmd| cmd.clip_radius())
        .collect();
    assert!(!clipped.is_empty());
    assert!(clipped.iter().all(|r| *r == CornerRadius::uniform(12.0)));
}

#[test]
fn test_configuration_before_layout_is_used_by_layout() {
    let config = SlideLockConfig::new().handle_width(100.0).locked_text("GO");
    let mut lock = SlideLock::new();
    lock.apply_configuration(&config);
    assert!(!lock.is_layout_initialized());

    lock.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
    assert_eq!(lock.handle_offset(), -200.0);
    assert_eq!(lock.status_text(), Some("GO"));
}

#[test]
fn test_configuration_mid_drag_keeps_drag() {
    let (mut lock, _) = control(300.0, 60.0);
    lock.event(&Event::pan(Point::ORIGIN, Point::ORIGIN, GestureState::Began));
    lock.event(&Event::pan(
        Point::new(70.0, 0.0),
        Point::ORIGIN,
        GestureState::Changed,
    ));
    lock.apply_configuration(&SlideLockConfig::new().locked_text("HOLD"));
    assert_eq!(lock.phase(), Phase::Dragging);
    assert_eq!(lock.handle_offset(), -170.0);
}

#[test]
fn test_toml_configuration_applies() {
    let config = SlideLockConfig::from_toml("unlocked_text = \"OPEN\"\n").unwrap();
    let (mut lock, _) = control(300.0, 60.0);
    lock.apply_configuration(&config);
    release(&mut lock, 250.0, 0.0);
    settle(&mut lock);
    assert_eq!(lock.status_text(), Some("OPEN"));
}

// =============================================================================
// Raw Pointer Input
// =============================================================================

fn pointer(kind: u8, x: f32) -> Event {
    let position = Point::new(x, 30.0);
    let pointer_id = PointerId(1);
    match kind {
        0 => Event::PointerDown {
            pointer_id,
            pointer_type: PointerType::Touch,
            position,
        },
        1 => Event::PointerMove {
            pointer_id,
            position,
        },
        _ => Event::PointerUp {
            pointer_id,
            position,
        },
    }
}

#[test]
fn test_pointer_drag_on_handle_unlocks() {
    let (mut lock, recorder) = control(300.0, 60.0);
    let t0 = Instant::now();
    let at = |ms: u64| t0 + Duration::from_millis(ms);

    // Grip is visible at x 0..60.
    lock.handle_event_at(&pointer(0, 30.0), at(0));
    lock.handle_event_at(&pointer(1, 60.0), at(50));
    assert_eq!(lock.phase(), Phase::Dragging);
    lock.handle_event_at(&pointer(1, 200.0), at(400));
    lock.handle_event_at(&pointer(1, 280.0), at(800));
    assert_eq!(lock.handle_offset(), 10.0);

    // Finger rested before lifting: no velocity, dx 250.
    lock.handle_event_at(&pointer(2, 280.0), at(1200));
    assert!(lock.is_unlocked());
    settle(&mut lock);
    assert_eq!(recorder.statuses(), vec![Status::Unlocked]);
}

#[test]
fn test_pointer_down_off_handle_is_ignored() {
    let (mut lock, _) = control(300.0, 60.0);
    let t0 = Instant::now();

    lock.handle_event_at(&pointer(0, 150.0), t0);
    lock.handle_event_at(&pointer(1, 290.0), t0 + Duration::from_millis(50));
    lock.handle_event_at(&pointer(2, 290.0), t0 + Duration::from_millis(100));
    assert_eq!(lock.phase(), Phase::Idle);
    assert_eq!(lock.handle_offset(), -240.0);
}

#[test]
fn test_pointer_jitter_below_threshold_does_not_drag() {
    let (mut lock, _) = control(300.0, 60.0);
    let t0 = Instant::now();
    lock.handle_event_at(&pointer(0, 30.0), t0);
    lock.handle_event_at(&pointer(1, 34.0), t0 + Duration::from_millis(16));
    lock.handle_event_at(&pointer(2, 34.0), t0 + Duration::from_millis(32));
    assert_eq!(lock.phase(), Phase::Idle);
}

// =============================================================================
// Properties
// =============================================================================

proptest! {
    #[test]
    fn prop_release_settles_at_a_rest_offset(
        track_width in 150.0f32..600.0,
        handle_ratio in 0.1f32..0.5,
        dx in -400.0f32..800.0,
        vx in -3000.0f32..3000.0,
    ) {
        let handle_width = (track_width * handle_ratio).round();
        let (mut lock, recorder) = control(track_width, handle_width);
        release(&mut lock, dx, vx);
        let unlocking = lock.is_unlocked();
        settle(&mut lock);

        let final_x = vx.mul_add(0.2, dx);
        let expect_unlock =
            final_x >= 0.0 && final_x + handle_width > track_width - UNLOCK_MARGIN;
        prop_assert_eq!(unlocking, expect_unlock);
        prop_assert_eq!(lock.is_unlocked(), expect_unlock);

        let expected = if expect_unlock { Status::Unlocked } else { Status::Locked };
        prop_assert_eq!(recorder.statuses(), vec![expected]);

        let offset = lock.handle_offset();
        let rest = if expect_unlock { 0.0 } else { handle_width - track_width };
        prop_assert_eq!(offset, rest);
        prop_assert!(offset >= handle_width - track_width && offset <= 0.0);
    }

    #[test]
    fn prop_negative_projection_never_unlocks(
        dx in -400.0f32..400.0,
        vx in -3000.0f32..0.0,
    ) {
        prop_assume!(vx.mul_add(0.2, dx) < 0.0);
        let (mut lock, recorder) = control(300.0, 60.0);
        release(&mut lock, dx, vx);
        settle(&mut lock);
        prop_assert!(!lock.is_unlocked());
        prop_assert_eq!(recorder.statuses(), vec![Status::Locked]);
    }
}

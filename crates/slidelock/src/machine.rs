//! Drag state machine.
//!
//! The machine owns the handle offset and the phase of the control. It is
//! driven by [`DragInput`]s from the pan recognizer and by frame ticks, and
//! knows nothing about views: the widget reads [`DragMachine::offset`] back
//! after every step.

use crate::status::Status;
use slidelock_core::{Easing, Tween};

/// Distance from the trailing edge the grip must pass to unlock.
pub const UNLOCK_MARGIN: f32 = 60.0;

/// Seconds of release velocity projected onto the final position.
pub const VELOCITY_PROJECTION: f32 = 0.2;

/// Duration of the unlock and reset slides, in seconds.
pub const SETTLE_DURATION: f64 = 0.2;

const RELEASE_HOLD_BASE: f64 = 0.2;
const RELEASE_HOLD_PER_VELOCITY: f64 = 0.0002;

/// Phase of the control.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Phase {
    /// At rest
    #[default]
    Idle,
    /// Following a pan
    Dragging,
    /// Sliding to the unlocked offset
    AnimatingUnlock,
    /// Holding, then sliding back to the locked offset
    AnimatingReset,
}

impl Phase {
    /// Whether a settle animation is in flight.
    #[must_use]
    pub const fn is_animating(self) -> bool {
        matches!(self, Self::AnimatingUnlock | Self::AnimatingReset)
    }
}

/// Pan input, in track coordinates.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum DragInput {
    /// Pan started with horizontal translation `dx`
    Began {
        /// Horizontal translation since the pan started
        dx: f32,
    },
    /// Pan moved
    Changed {
        /// Horizontal translation since the pan started
        dx: f32,
    },
    /// Finger lifted
    Ended {
        /// Horizontal translation since the pan started
        dx: f32,
        /// Horizontal velocity in points per second
        vx: f32,
    },
    /// Pan aborted by the system. Released in place with no velocity.
    Cancelled,
}

/// Track and grip widths the offsets derive from.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Geometry {
    /// Track width
    pub track_width: f32,
    /// Draggable grip width
    pub handle_width: f32,
}

impl Geometry {
    /// Create geometry from track and grip widths.
    #[must_use]
    pub const fn new(track_width: f32, handle_width: f32) -> Self {
        Self {
            track_width,
            handle_width,
        }
    }

    /// Width of the handle frame. The handle spans the whole track; only
    /// its trailing `handle_width` is visible while locked.
    #[must_use]
    pub const fn handle_frame_width(&self) -> f32 {
        self.track_width
    }

    /// Offset of the handle frame while locked.
    #[must_use]
    pub fn locked_offset(&self) -> f32 {
        self.handle_width - self.track_width
    }

    /// Offset of the handle frame once unlocked (flush with the trailing edge).
    #[must_use]
    pub fn unlocked_offset(&self) -> f32 {
        self.track_width - self.handle_frame_width()
    }

    /// Resting offset for `status`.
    #[must_use]
    pub fn rest_offset(&self, status: Status) -> f32 {
        match status {
            Status::Locked => self.locked_offset(),
            Status::Unlocked => self.unlocked_offset(),
        }
    }

    /// Decide where a release settles.
    ///
    /// The projected position `dx + vx * 0.2` is clamped at zero first, and
    /// a clamped release never unlocks. Otherwise the grip must end strictly
    /// past `track_width - UNLOCK_MARGIN`.
    #[must_use]
    pub fn evaluate_release(&self, dx: f32, vx: f32) -> Release {
        let final_x = vx.mul_add(VELOCITY_PROJECTION, dx);
        if final_x >= 0.0 && final_x + self.handle_width > self.track_width - UNLOCK_MARGIN {
            Release::Unlock
        } else {
            Release::Reset {
                hold: release_hold(vx),
            }
        }
    }
}

/// Seconds the handle stays put after a failed release before sliding back.
#[must_use]
pub fn release_hold(vx: f32) -> f64 {
    (f64::from(vx) * RELEASE_HOLD_PER_VELOCITY).abs() + RELEASE_HOLD_BASE
}

/// Outcome of a release.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Release {
    /// Slide to the unlocked offset
    Unlock,
    /// Hold for `hold` seconds, then slide back to the locked offset
    Reset {
        /// Hold before the slide, in seconds
        hold: f64,
    },
}

/// What a [`DragMachine::input`] step did.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Step {
    /// The handle moved with the finger
    Moved,
    /// Release accepted, sliding to unlocked
    UnlockStarted,
    /// Release rejected, sliding back after `hold` seconds
    ResetStarted {
        /// Hold before the slide, in seconds
        hold: f64,
    },
}

/// Phase and handle offset of a slide lock.
#[derive(Debug, Clone, PartialEq)]
pub struct DragMachine {
    geometry: Geometry,
    phase: Phase,
    offset: f32,
    last_dx: f32,
    tween: Option<Tween>,
}

impl DragMachine {
    /// Machine at rest in the locked position.
    #[must_use]
    pub fn new(geometry: Geometry) -> Self {
        Self {
            geometry,
            phase: Phase::Idle,
            offset: geometry.locked_offset(),
            last_dx: 0.0,
            tween: None,
        }
    }

    /// Current phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.phase
    }

    /// Current handle frame offset.
    #[must_use]
    pub const fn offset(&self) -> f32 {
        self.offset
    }

    /// Current geometry.
    #[must_use]
    pub const fn geometry(&self) -> Geometry {
        self.geometry
    }

    /// Replace the geometry. While idle the handle snaps to the resting
    /// offset of `settled` under the new geometry.
    pub fn set_geometry(&mut self, geometry: Geometry, settled: Status) {
        self.geometry = geometry;
        if self.phase == Phase::Idle {
            self.offset = geometry.rest_offset(settled);
        }
    }

    /// Feed one pan input. Returns `None` when the input was ignored.
    ///
    /// Input is ignored while a settle animation is in flight, and a pan
    /// that did not begin while idle is never followed.
    pub fn input(&mut self, input: DragInput) -> Option<Step> {
        if self.phase.is_animating() {
            tracing::trace!(?input, phase = ?self.phase, "ignoring pan while animating");
            return None;
        }

        match (self.phase, input) {
            (_, DragInput::Began { dx }) | (Phase::Dragging, DragInput::Changed { dx }) => {
                self.phase = Phase::Dragging;
                self.follow(dx);
                Some(Step::Moved)
            }
            (Phase::Dragging, DragInput::Ended { dx, vx }) => {
                self.follow(dx);
                Some(self.release(dx, vx))
            }
            (Phase::Dragging, DragInput::Cancelled) => Some(self.release(self.last_dx, 0.0)),
            _ => None,
        }
    }

    /// Advance the settle animation by `dt` seconds. Returns the status the
    /// control settled in when the animation completes on this step.
    pub fn tick(&mut self, dt: f64) -> Option<Status> {
        let tween = self.tween.as_mut()?;
        let completed = tween.update(dt);
        self.offset = tween.value() as f32;
        if !completed {
            return None;
        }

        let settled = match self.phase {
            Phase::AnimatingUnlock => Status::Unlocked,
            _ => Status::Locked,
        };
        self.offset = self.geometry.rest_offset(settled);
        self.tween = None;
        self.phase = Phase::Idle;
        tracing::debug!(%settled, offset = self.offset, "settle animation finished");
        Some(settled)
    }

    fn follow(&mut self, dx: f32) {
        self.last_dx = dx;
        self.offset = self.geometry.locked_offset() + dx;
        tracing::trace!(dx, offset = self.offset, "drag");
    }

    fn release(&mut self, dx: f32, vx: f32) -> Step {
        let release = self.geometry.evaluate_release(dx, vx);
        tracing::debug!(dx, vx, ?release, "pan released");

        let (phase, target, hold, step) = match release {
            Release::Unlock => (
                Phase::AnimatingUnlock,
                self.geometry.unlocked_offset(),
                0.0,
                Step::UnlockStarted,
            ),
            Release::Reset { hold } => (
                Phase::AnimatingReset,
                self.geometry.locked_offset(),
                hold,
                Step::ResetStarted { hold },
            ),
        };

        self.phase = phase;
        self.tween = Some(
            Tween::new(f64::from(self.offset), f64::from(target), SETTLE_DURATION)
                .with_easing(Easing::EaseOut)
                .with_delay(hold),
        );
        step
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const GEOMETRY: Geometry = Geometry::new(300.0, 60.0);

    fn drag(machine: &mut DragMachine, dx: f32, vx: f32) -> Option<Step> {
        machine.input(DragInput::Began { dx: 0.0 });
        machine.input(DragInput::Changed { dx });
        machine.input(DragInput::Ended { dx, vx })
    }

    fn settle(machine: &mut DragMachine) -> Option<Status> {
        for _ in 0..100 {
            if let Some(status) = machine.tick(1.0 / 60.0) {
                return Some(status);
            }
        }
        None
    }

    #[test]
    fn test_geometry_offsets() {
        assert_eq!(GEOMETRY.locked_offset(), -240.0);
        assert_eq!(GEOMETRY.unlocked_offset(), 0.0);
        assert_eq!(GEOMETRY.handle_frame_width(), 300.0);
    }

    #[test]
    fn test_evaluate_release_scenarios() {
        assert_eq!(GEOMETRY.evaluate_release(250.0, 0.0), Release::Unlock);
        assert!(matches!(
            GEOMETRY.evaluate_release(50.0, 0.0),
            Release::Reset { .. }
        ));
        // 100 - 100 * 0.2 = 80
        assert!(matches!(
            GEOMETRY.evaluate_release(100.0, -100.0),
            Release::Reset { .. }
        ));
        assert!(matches!(
            GEOMETRY.evaluate_release(-50.0, 0.0),
            Release::Reset { .. }
        ));
    }

    #[test]
    fn test_evaluate_release_boundary_stays_locked() {
        // 180 + 60 == 300 - 60
        assert!(matches!(
            GEOMETRY.evaluate_release(180.0, 0.0),
            Release::Reset { .. }
        ));
        assert_eq!(GEOMETRY.evaluate_release(180.5, 0.0), Release::Unlock);
    }

    #[test]
    fn test_velocity_projection_can_unlock() {
        // 100 + 500 * 0.2 = 200
        assert_eq!(GEOMETRY.evaluate_release(100.0, 500.0), Release::Unlock);
    }

    #[test]
    fn test_clamped_release_never_unlocks() {
        // Grip wider than the threshold region: a clamped release still resets.
        let wide = Geometry::new(300.0, 250.0);
        assert!(matches!(
            wide.evaluate_release(-10.0, 0.0),
            Release::Reset { .. }
        ));
        assert_eq!(wide.evaluate_release(0.0, 0.0), Release::Unlock);
    }

    #[test]
    fn test_release_hold() {
        assert!((release_hold(0.0) - 0.2).abs() < 1e-9);
        assert!((release_hold(-100.0) - 0.22).abs() < 1e-9);
        assert!((release_hold(1000.0) - 0.4).abs() < 1e-9);
    }

    #[test]
    fn test_new_machine_rests_locked() {
        let machine = DragMachine::new(GEOMETRY);
        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.offset(), -240.0);
    }

    #[test]
    fn test_drag_follows_without_clamping() {
        let mut machine = DragMachine::new(GEOMETRY);
        assert_eq!(machine.input(DragInput::Began { dx: 12.0 }), Some(Step::Moved));
        assert_eq!(machine.phase(), Phase::Dragging);
        assert_eq!(machine.offset(), -228.0);

        machine.input(DragInput::Changed { dx: 400.0 });
        assert_eq!(machine.offset(), 160.0);
        machine.input(DragInput::Changed { dx: -30.0 });
        assert_eq!(machine.offset(), -270.0);
    }

    #[test]
    fn test_unlock_flow() {
        let mut machine = DragMachine::new(GEOMETRY);
        assert_eq!(drag(&mut machine, 250.0, 0.0), Some(Step::UnlockStarted));
        assert_eq!(machine.phase(), Phase::AnimatingUnlock);
        assert_eq!(settle(&mut machine), Some(Status::Unlocked));
        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.offset(), 0.0);
    }

    #[test]
    fn test_reset_flow_holds_before_sliding() {
        let mut machine = DragMachine::new(GEOMETRY);
        let step = drag(&mut machine, 50.0, 0.0);
        assert!(matches!(step, Some(Step::ResetStarted { hold }) if (hold - 0.2).abs() < 1e-9));
        assert_eq!(machine.phase(), Phase::AnimatingReset);

        // Still holding at the release position.
        assert_eq!(machine.tick(0.1), None);
        assert_eq!(machine.offset(), -190.0);

        assert_eq!(settle(&mut machine), Some(Status::Locked));
        assert_eq!(machine.offset(), -240.0);
    }

    #[test]
    fn test_input_ignored_while_animating() {
        let mut machine = DragMachine::new(GEOMETRY);
        drag(&mut machine, 250.0, 0.0);
        assert_eq!(machine.input(DragInput::Began { dx: 5.0 }), None);
        assert_eq!(machine.input(DragInput::Cancelled), None);
        assert_eq!(machine.phase(), Phase::AnimatingUnlock);
    }

    #[test]
    fn test_changed_and_ended_without_began_ignored() {
        let mut machine = DragMachine::new(GEOMETRY);
        assert_eq!(machine.input(DragInput::Changed { dx: 10.0 }), None);
        assert_eq!(machine.input(DragInput::Ended { dx: 250.0, vx: 0.0 }), None);
        assert_eq!(machine.input(DragInput::Cancelled), None);
        assert_eq!(machine.phase(), Phase::Idle);
        assert_eq!(machine.offset(), -240.0);
    }

    #[test]
    fn test_cancel_releases_in_place() {
        let mut machine = DragMachine::new(GEOMETRY);
        machine.input(DragInput::Began { dx: 0.0 });
        machine.input(DragInput::Changed { dx: 250.0 });
        assert_eq!(machine.input(DragInput::Cancelled), Some(Step::UnlockStarted));

        let mut machine = DragMachine::new(GEOMETRY);
        machine.input(DragInput::Began { dx: 0.0 });
        machine.input(DragInput::Changed { dx: 30.0 });
        assert!(matches!(
            machine.input(DragInput::Cancelled),
            Some(Step::ResetStarted { .. })
        ));
    }

    #[test]
    fn test_tick_when_idle_is_noop() {
        let mut machine = DragMachine::new(GEOMETRY);
        assert_eq!(machine.tick(1.0), None);
        assert_eq!(machine.offset(), -240.0);
    }

    #[test]
    fn test_set_geometry_snaps_when_idle() {
        let mut machine = DragMachine::new(GEOMETRY);
        machine.set_geometry(Geometry::new(300.0, 80.0), Status::Locked);
        assert_eq!(machine.offset(), -220.0);
        machine.set_geometry(Geometry::new(300.0, 80.0), Status::Unlocked);
        assert_eq!(machine.offset(), 0.0);
    }

    #[test]
    fn test_set_geometry_while_dragging_keeps_offset() {
        let mut machine = DragMachine::new(GEOMETRY);
        machine.input(DragInput::Began { dx: 40.0 });
        machine.set_geometry(Geometry::new(300.0, 80.0), Status::Locked);
        assert_eq!(machine.offset(), -200.0);
    }
}

//! Easing curves and frame-driven tweens.
//!
//! Tweens are advanced by the host with [`Tween::update`], passing the frame
//! delta in seconds, so timing is fully deterministic under test.

/// Standard easing functions for animations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Easing {
    /// Linear interpolation (no easing)
    #[default]
    Linear,
    /// Ease out (slow end)
    EaseOut,
}

impl Easing {
    /// Apply easing function to a normalized time value (0.0 to 1.0).
    #[must_use]
    pub fn apply(self, t: f64) -> f64 {
        let t = t.clamp(0.0, 1.0);
        match self {
            Self::Linear => t,
            Self::EaseOut => (1.0 - t).mul_add(-(1.0 - t), 1.0),
        }
    }
}

/// A value eased from `from` to `to` over `duration` seconds, optionally
/// after an initial `delay` during which it holds at `from`.
#[derive(Debug, Clone, PartialEq)]
pub struct Tween {
    /// Start value
    pub from: f64,
    /// End value
    pub to: f64,
    /// Motion duration in seconds
    pub duration: f64,
    /// Hold before motion starts, in seconds
    pub delay: f64,
    /// Time elapsed since the tween was created
    pub elapsed: f64,
    /// Easing function
    pub easing: Easing,
}

impl Tween {
    /// Create a tween with linear easing and no delay.
    #[must_use]
    pub const fn new(from: f64, to: f64, duration: f64) -> Self {
        Self {
            from,
            to,
            duration,
            delay: 0.0,
            elapsed: 0.0,
            easing: Easing::Linear,
        }
    }

    /// Set easing function.
    #[must_use]
    pub const fn with_easing(mut self, easing: Easing) -> Self {
        self.easing = easing;
        self
    }

    /// Hold at the start value for `delay` seconds first.
    #[must_use]
    pub fn with_delay(mut self, delay: f64) -> Self {
        self.delay = delay.max(0.0);
        self
    }

    /// Total time from creation to completion.
    #[must_use]
    pub fn total_duration(&self) -> f64 {
        self.delay + self.duration
    }

    /// Motion progress from 0.0 to 1.0 (0.0 while delayed).
    #[must_use]
    pub fn progress(&self) -> f64 {
        let moving = self.elapsed - self.delay;
        if moving <= 0.0 {
            0.0
        } else if self.duration > 0.0 {
            (moving / self.duration).clamp(0.0, 1.0)
        } else {
            1.0
        }
    }

    /// Current value.
    #[must_use]
    pub fn value(&self) -> f64 {
        if self.is_complete() {
            return self.to;
        }
        let eased = self.easing.apply(self.progress());
        (self.to - self.from).mul_add(eased, self.from)
    }

    /// Whether the tween has reached its end.
    #[must_use]
    pub fn is_complete(&self) -> bool {
        self.elapsed >= self.total_duration()
    }

    /// Advance by `dt` seconds. Returns `true` on the step that completes it.
    pub fn update(&mut self, dt: f64) -> bool {
        if self.is_complete() {
            return false;
        }
        self.elapsed = (self.elapsed + dt.max(0.0)).min(self.total_duration());
        self.is_complete()
    }
}

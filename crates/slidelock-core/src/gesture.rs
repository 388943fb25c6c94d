//! Single-finger pan recognition from pointer, mouse and touch events.
//!
//! [`PanRecognizer`] follows one contact at a time and reports
//! [`Event::GesturePan`] with the translation since the contact went down and
//! a velocity estimated over a short sliding window. Additional contacts that
//! arrive while one is tracked are ignored.

use crate::event::{Event, GestureState, MouseButton, PointerId, TouchId};
use crate::geometry::Point;
use std::time::{Duration, Instant};

/// Pan recognition thresholds.
#[derive(Debug, Clone, PartialEq)]
pub(crate) struct GestureConfig {
    /// Minimum distance (in pixels) before a pan begins.
    pub(crate) pan_threshold: f32,
    /// Window used for velocity estimation.
    pub(crate) velocity_window: Duration,
}

impl Default for GestureConfig {
    fn default() -> Self {
        Self {
            pan_threshold: 10.0,
            velocity_window: Duration::from_millis(100),
        }
    }
}

/// Which input stream a tracked contact came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Contact {
    Mouse,
    Touch(TouchId),
    Pointer(PointerId),
}

#[derive(Debug, Clone)]
struct Tracked {
    contact: Contact,
    start: Point,
    current: Point,
    began: bool,
    samples: Vec<(Point, Instant)>,
}

impl Tracked {
    fn new(contact: Contact, position: Point, now: Instant) -> Self {
        Self {
            contact,
            start: position,
            current: position,
            began: false,
            samples: vec![(position, now)],
        }
    }

    fn translation(&self) -> Point {
        self.current - self.start
    }

    fn record(&mut self, position: Point, now: Instant, window: Duration) {
        self.current = position;
        self.samples
            .retain(|(_, at)| now.saturating_duration_since(*at) <= window);
        self.samples.push((position, now));
    }

    fn velocity(&self) -> Point {
        let (Some((first_pos, first_at)), Some((last_pos, last_at))) =
            (self.samples.first(), self.samples.last())
        else {
            return Point::ORIGIN;
        };

        let dt = last_at.saturating_duration_since(*first_at).as_secs_f32();
        if dt < 0.001 {
            return Point::ORIGIN;
        }

        Point::new(
            (last_pos.x - first_pos.x) / dt,
            (last_pos.y - first_pos.y) / dt,
        )
    }
}

/// Single-finger pan gesture recognizer.
#[derive(Debug, Default)]
pub struct PanRecognizer {
    config: GestureConfig,
    active: Option<Tracked>,
}

impl PanRecognizer {
    /// Create a recognizer with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Whether a contact is currently being followed.
    #[must_use]
    pub const fn is_tracking(&self) -> bool {
        self.active.is_some()
    }

    /// Whether the followed contact has moved far enough to be a pan.
    #[must_use]
    pub fn is_panning(&self) -> bool {
        self.active.as_ref().is_some_and(|t| t.began)
    }

    /// Process an event using the current time.
    pub fn process(&mut self, event: &Event) -> Option<Event> {
        self.process_at(event, Instant::now())
    }

    /// Process an event observed at `now`.
    pub fn process_at(&mut self, event: &Event, now: Instant) -> Option<Event> {
        match event {
            Event::MouseDown {
                position,
                button: MouseButton::Left,
            } => self.on_down(Contact::Mouse, *position, now),
            Event::MouseMove { position } => self.on_move(Contact::Mouse, *position, now),
            Event::MouseUp {
                position,
                button: MouseButton::Left,
            } => self.on_up(Contact::Mouse, *position, now),
            Event::TouchStart { id, position } => self.on_down(Contact::Touch(*id), *position, now),
            Event::TouchMove { id, position } => self.on_move(Contact::Touch(*id), *position, now),
            Event::TouchEnd { id, position } => self.on_up(Contact::Touch(*id), *position, now),
            Event::TouchCancel { id } => self.on_cancel(Contact::Touch(*id)),
            Event::PointerDown {
                pointer_id,
                position,
                ..
            } => self.on_down(Contact::Pointer(*pointer_id), *position, now),
            Event::PointerMove {
                pointer_id,
                position,
            } => self.on_move(Contact::Pointer(*pointer_id), *position, now),
            Event::PointerUp {
                pointer_id,
                position,
            } => self.on_up(Contact::Pointer(*pointer_id), *position, now),
            Event::PointerCancel { pointer_id } => self.on_cancel(Contact::Pointer(*pointer_id)),
            _ => None,
        }
    }

    fn on_down(&mut self, contact: Contact, position: Point, now: Instant) -> Option<Event> {
        if self.active.is_none() {
            self.active = Some(Tracked::new(contact, position, now));
        }
        None
    }

    fn on_move(&mut self, contact: Contact, position: Point, now: Instant) -> Option<Event> {
        let window = self.config.velocity_window;
        let threshold = self.config.pan_threshold;
        let tracked = self.active.as_mut().filter(|t| t.contact == contact)?;
        tracked.record(position, now, window);

        let state = if tracked.began {
            GestureState::Changed
        } else if tracked.start.distance(&tracked.current) >= threshold {
            tracked.began = true;
            tracing::trace!(x = tracked.start.x, y = tracked.start.y, "pan began");
            GestureState::Began
        } else {
            return None;
        };

        Some(Event::pan(tracked.translation(), tracked.velocity(), state))
    }

    fn on_up(&mut self, contact: Contact, position: Point, now: Instant) -> Option<Event> {
        let window = self.config.velocity_window;
        if self.active.as_ref()?.contact != contact {
            return None;
        }
        let mut tracked = self.active.take()?;
        tracked.record(position, now, window);

        if !tracked.began {
            return None;
        }

        let velocity = tracked.velocity();
        tracing::trace!(vx = velocity.x, "pan ended");
        Some(Event::pan(tracked.translation(), velocity, GestureState::Ended))
    }

    fn on_cancel(&mut self, contact: Contact) -> Option<Event> {
        if self.active.as_ref()?.contact != contact {
            return None;
        }
        let tracked = self.active.take()?;
        tracked
            .began
            .then(|| Event::pan(tracked.translation(), Point::ORIGIN, GestureState::Cancelled))
    }
}

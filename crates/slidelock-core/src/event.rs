//! Input events for widgets.

use crate::geometry::Point;
use serde::{Deserialize, Serialize};

/// Input event types.
///
/// Raw pointer, mouse and touch input is turned into [`Event::GesturePan`] by
/// [`crate::gesture::PanRecognizer`]; widgets may also receive pan events that
/// a host has already recognized.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Event {
    /// Mouse moved to position
    MouseMove {
        /// New position
        position: Point,
    },
    /// Mouse button pressed
    MouseDown {
        /// Position of click
        position: Point,
        /// Button pressed
        button: MouseButton,
    },
    /// Mouse button released
    MouseUp {
        /// Position of release
        position: Point,
        /// Button released
        button: MouseButton,
    },
    /// Touch started
    TouchStart {
        /// Touch identifier
        id: TouchId,
        /// Touch position
        position: Point,
    },
    /// Touch moved
    TouchMove {
        /// Touch identifier
        id: TouchId,
        /// New position
        position: Point,
    },
    /// Touch ended
    TouchEnd {
        /// Touch identifier
        id: TouchId,
        /// Final position
        position: Point,
    },
    /// Touch cancelled (e.g., palm rejection)
    TouchCancel {
        /// Touch identifier
        id: TouchId,
    },
    /// Pointer down (unified mouse/touch/pen)
    PointerDown {
        /// Pointer ID
        pointer_id: PointerId,
        /// Pointer type
        pointer_type: PointerType,
        /// Position
        position: Point,
    },
    /// Pointer moved
    PointerMove {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer up
    PointerUp {
        /// Pointer ID
        pointer_id: PointerId,
        /// Position
        position: Point,
    },
    /// Pointer cancelled
    PointerCancel {
        /// Pointer ID
        pointer_id: PointerId,
    },
    /// Pan/drag gesture
    GesturePan {
        /// Translation since the gesture began
        translation: Point,
        /// Velocity in points per second
        velocity: Point,
        /// Gesture state
        state: GestureState,
    },
}

impl Event {
    /// Shorthand for a pan event.
    #[must_use]
    pub const fn pan(translation: Point, velocity: Point, state: GestureState) -> Self {
        Self::GesturePan {
            translation,
            velocity,
            state,
        }
    }
}

/// Touch identifier for multi-touch tracking.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct TouchId(pub u32);

/// Pointer identifier for pointer events.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub struct PointerId(pub u32);

/// Type of pointer device.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum PointerType {
    /// Mouse pointer
    #[default]
    Mouse,
    /// Touch pointer
    Touch,
    /// Pen/stylus pointer
    Pen,
}

/// State of a gesture.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
pub enum GestureState {
    /// Gesture started
    #[default]
    Began,
    /// Gesture in progress
    Changed,
    /// Gesture ended (finger lifted)
    Ended,
    /// Gesture cancelled by the system
    Cancelled,
}

impl GestureState {
    /// Whether this state finishes the gesture.
    #[must_use]
    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Ended | Self::Cancelled)
    }
}

/// Mouse button identifiers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum MouseButton {
    /// Left mouse button
    Left,
    /// Right mouse button
    Right,
    /// Middle mouse button (wheel click)
    Middle,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_event_pan_shorthand() {
        let e = Event::pan(Point::new(10.0, 0.0), Point::ORIGIN, GestureState::Changed);
        if let Event::GesturePan {
            translation, state, ..
        } = e
        {
            assert_eq!(translation.x, 10.0);
            assert_eq!(state, GestureState::Changed);
        } else {
            panic!("Expected GesturePan event");
        }
    }

    #[test]
    fn test_gesture_state_terminal() {
        assert!(!GestureState::Began.is_terminal());
        assert!(!GestureState::Changed.is_terminal());
        assert!(GestureState::Ended.is_terminal());
        assert!(GestureState::Cancelled.is_terminal());
    }

    #[test]
    fn test_event_serde_roundtrip() {
        let e = Event::PointerDown {
            pointer_id: PointerId(3),
            pointer_type: PointerType::Touch,
            position: Point::new(4.0, 5.0),
        };
        let json = serde_json::to_string(&e).unwrap();
        let back: Event = serde_json::from_str(&json).unwrap();
        assert_eq!(back, e);
    }
}

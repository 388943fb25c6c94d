//! Draw commands recorded by [`crate::RecordingCanvas`].

use crate::color::Color;
use crate::geometry::{CornerRadius, Point, Rect};
use crate::widget::TextStyle;
use serde::{Deserialize, Serialize};

/// Drawing primitive.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum DrawCommand {
    /// Filled rectangle, optionally rounded
    Rect {
        /// Rectangle bounds
        bounds: Rect,
        /// Corner radius
        radius: CornerRadius,
        /// Fill color
        fill: Color,
    },

    /// Text run
    Text {
        /// Text content
        content: String,
        /// Top-left position
        position: Point,
        /// Text style
        style: TextStyle,
    },

    /// Image scaled into bounds
    Image {
        /// Image source identifier
        source: String,
        /// Destination bounds
        bounds: Rect,
    },

    /// A command drawn under a clip
    Clip {
        /// Clip bounds
        bounds: Rect,
        /// Clip corner radius
        radius: CornerRadius,
        /// Clipped command
        child: Box<DrawCommand>,
    },
}

impl DrawCommand {
    /// A filled rectangle with square corners.
    #[must_use]
    pub const fn filled_rect(bounds: Rect, fill: Color) -> Self {
        Self::Rect {
            bounds,
            radius: CornerRadius::ZERO,
            fill,
        }
    }

    /// A filled rectangle with rounded corners.
    #[must_use]
    pub const fn rounded_rect(bounds: Rect, radius: CornerRadius, fill: Color) -> Self {
        Self::Rect {
            bounds,
            radius,
            fill,
        }
    }

    /// Wrap this command in a clip with rounded corners.
    #[must_use]
    pub fn clipped(self, bounds: Rect, radius: CornerRadius) -> Self {
        Self::Clip {
            bounds,
            radius,
            child: Box::new(self),
        }
    }

    /// The command with any clip wrappers removed.
    #[must_use]
    pub fn unclipped(&self) -> &Self {
        match self {
            Self::Clip { child, .. } => child.unclipped(),
            other => other,
        }
    }

    /// Innermost clip bounds, if the command is clipped.
    #[must_use]
    pub fn clip_bounds(&self) -> Option<Rect> {
        match self {
            Self::Clip { bounds, child, .. } => child.clip_bounds().or(Some(*bounds)),
            _ => None,
        }
    }

    /// Corner radius of the innermost clip, if the command is clipped.
    #[must_use]
    pub fn clip_radius(&self) -> Option<CornerRadius> {
        match self {
            Self::Clip { radius, child, .. } => child.clip_radius().or(Some(*radius)),
            _ => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_filled_rect_has_square_corners() {
        let cmd = DrawCommand::filled_rect(Rect::new(0.0, 0.0, 10.0, 10.0), Color::WHITE);
        assert!(matches!(cmd, DrawCommand::Rect { radius, .. } if radius == CornerRadius::ZERO));
    }

    #[test]
    fn test_clipped_and_unclipped() {
        let inner = DrawCommand::rounded_rect(
            Rect::new(-240.0, 0.0, 300.0, 60.0),
            CornerRadius::uniform(30.0),
            Color::DARK_GRAY,
        );
        let clip = Rect::new(0.0, 0.0, 300.0, 60.0);
        let cmd = inner.clone().clipped(clip, CornerRadius::uniform(30.0));
        assert_eq!(cmd.unclipped(), &inner);
        assert_eq!(cmd.clip_bounds(), Some(clip));
        assert_eq!(cmd.clip_radius(), Some(CornerRadius::uniform(30.0)));
        assert_eq!(inner.clip_bounds(), None);
        assert_eq!(inner.clip_radius(), None);
    }

    #[test]
    fn test_nested_clip_reports_innermost() {
        let outer = Rect::new(0.0, 0.0, 300.0, 60.0);
        let inner = Rect::new(10.0, 0.0, 50.0, 60.0);
        let cmd = DrawCommand::filled_rect(Rect::default(), Color::BLACK)
            .clipped(inner, CornerRadius::ZERO)
            .clipped(outer, CornerRadius::uniform(30.0));
        assert_eq!(cmd.clip_bounds(), Some(inner));
        assert_eq!(cmd.clip_radius(), Some(CornerRadius::ZERO));
    }
}

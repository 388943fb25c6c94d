//! Widget trait and related types.
//!
//! Widgets follow a measure-layout-paint cycle:
//!
//! 1. **Measure**: compute intrinsic size given constraints
//! 2. **Layout**: position self and children within allocated bounds
//! 3. **Paint**: emit draw calls on a [`Canvas`]
//!
//! Input arrives through [`Widget::event`], which may return a message for
//! the host (a boxed value the host downcasts).

use crate::color::Color;
use crate::constraints::Constraints;
use crate::event::Event;
use crate::font::Font;
use crate::geometry::{CornerRadius, Point, Rect, Size};
use serde::{Deserialize, Serialize};
use std::any::Any;

/// Type identifier for widget types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TypeId(std::any::TypeId);

impl TypeId {
    /// Get the type ID for a type.
    #[must_use]
    pub fn of<T: 'static>() -> Self {
        Self(std::any::TypeId::of::<T>())
    }
}

/// Result of laying out a widget.
#[derive(Debug, Clone, Copy, Default)]
pub struct LayoutResult {
    /// Computed size after layout
    pub size: Size,
}

/// Core widget trait.
pub trait Widget: Send + Sync {
    /// Get the type identifier for this widget type.
    fn type_id(&self) -> TypeId;

    /// Compute intrinsic size constraints.
    fn measure(&self, constraints: Constraints) -> Size;

    /// Position self (and children) within allocated bounds.
    fn layout(&mut self, bounds: Rect) -> LayoutResult;

    /// Emit draw calls for the current state.
    fn paint(&self, canvas: &mut dyn Canvas);

    /// Handle an input event, optionally returning a message.
    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>>;

    /// Check if this widget is interactive (can receive events).
    fn is_interactive(&self) -> bool {
        false
    }

    /// Get the test ID for this widget (if any).
    fn test_id(&self) -> Option<&str> {
        None
    }

    /// Get the current bounds of this widget.
    fn bounds(&self) -> Rect {
        Rect::default()
    }
}

/// Minimal abstraction over a rendering backend.
pub trait Canvas {
    /// Fill a rectangle.
    fn fill_rect(&mut self, rect: Rect, color: Color);

    /// Fill a rectangle with rounded corners.
    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color);

    /// Draw text with its top-left corner at `position`.
    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle);

    /// Draw an image scaled into `rect`.
    fn draw_image(&mut self, source: &str, rect: Rect);

    /// Push a clip region with rounded corners. Drawing is limited to the
    /// innermost clip.
    fn push_clip(&mut self, rect: Rect, radius: CornerRadius);

    /// Pop the clip region.
    fn pop_clip(&mut self);
}

/// Horizontal text alignment inside a frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum TextAlign {
    /// Flush left
    Left,
    /// Centered
    #[default]
    Center,
    /// Flush right
    Right,
}

/// Text style for rendering.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct TextStyle {
    /// Font family and size
    pub font: Font,
    /// Text color
    pub color: Color,
}

impl Default for TextStyle {
    fn default() -> Self {
        Self {
            font: Font::default(),
            color: Color::BLACK,
        }
    }
}

impl TextStyle {
    /// Rough text extent: 0.6em per character, 1.2em line height.
    #[must_use]
    pub fn estimate_size(&self, text: &str) -> Size {
        let char_width = self.font.size * 0.6;
        Size::new(
            text.chars().count() as f32 * char_width,
            self.font.size * 1.2,
        )
    }

    /// Top-left position that places `text` inside `frame` with `align`,
    /// vertically centered.
    #[must_use]
    pub fn position_in(&self, text: &str, frame: Rect, align: TextAlign) -> Point {
        let extent = self.estimate_size(text);
        let x = match align {
            TextAlign::Left => frame.x,
            TextAlign::Center => frame.x + (frame.width - extent.width) / 2.0,
            TextAlign::Right => frame.right() - extent.width,
        };
        Point::new(x, frame.y + (frame.height - extent.height) / 2.0)
    }
}

//! Core types and traits for the SlideLock widget.
//!
//! This crate provides the foundation the control is built on:
//! - Geometric primitives: [`Point`], [`Size`], [`Rect`], [`CornerRadius`]
//! - Color representation: [`Color`] with hex parsing
//! - Input: [`Event`] and the single-finger [`PanRecognizer`]
//! - Animation: [`Easing`] curves and frame-driven [`Tween`]s
//! - Fonts: [`FontRegistry`] name/size resolution
//! - Rendering: the [`Widget`] and [`Canvas`] traits plus [`RecordingCanvas`]

pub mod animation;
mod canvas;
pub mod color;
mod constraints;
pub mod draw;
mod event;
mod font;
pub mod gesture;
mod geometry;
pub mod widget;

pub use animation::{Easing, Tween};
pub use canvas::RecordingCanvas;
pub use color::{Color, ColorParseError};
pub use constraints::Constraints;
pub use draw::DrawCommand;
pub use event::{Event, GestureState, MouseButton, PointerId, PointerType, TouchId};
pub use font::{Font, FontError, FontRegistry};
pub use geometry::{CornerRadius, Point, Rect, Size};
pub use gesture::PanRecognizer;
pub use widget::{Canvas, LayoutResult, TextAlign, TextStyle, TypeId, Widget};

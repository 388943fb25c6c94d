//! Canvas implementations for rendering.

use crate::draw::DrawCommand;
use crate::widget::{Canvas, TextStyle};
use crate::{Color, CornerRadius, Point, Rect};

/// A Canvas that records draw operations as [`DrawCommand`]s.
///
/// Commands issued while a clip is pushed are recorded wrapped in
/// [`DrawCommand::Clip`], so tests can check both what was painted and
/// whether it was clipped.
#[derive(Debug, Default)]
pub struct RecordingCanvas {
    commands: Vec<DrawCommand>,
    clip_stack: Vec<(Rect, CornerRadius)>,
}

impl RecordingCanvas {
    /// Create a new empty recording canvas.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the recorded draw commands.
    #[must_use]
    pub fn commands(&self) -> &[DrawCommand] {
        &self.commands
    }

    /// Take ownership of the recorded commands, clearing the canvas.
    pub fn take_commands(&mut self) -> Vec<DrawCommand> {
        std::mem::take(&mut self.commands)
    }

    /// Get the number of recorded commands.
    #[must_use]
    pub fn command_count(&self) -> usize {
        self.commands.len()
    }

    /// Check if no commands have been recorded.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// Get the clip stack depth.
    #[must_use]
    pub fn clip_depth(&self) -> usize {
        self.clip_stack.len()
    }

    /// Recorded text runs, in paint order.
    pub fn texts(&self) -> impl Iterator<Item = (&str, &TextStyle)> {
        self.commands.iter().filter_map(|cmd| match cmd.unclipped() {
            DrawCommand::Text { content, style, .. } => Some((content.as_str(), style)),
            _ => None,
        })
    }

    fn record(&mut self, command: DrawCommand) {
        let command = match self.clip_stack.last() {
            Some(&(bounds, radius)) => command.clipped(bounds, radius),
            None => command,
        };
        self.commands.push(command);
    }
}

impl Canvas for RecordingCanvas {
    fn fill_rect(&mut self, rect: Rect, color: Color) {
        self.record(DrawCommand::filled_rect(rect, color));
    }

    fn fill_rounded_rect(&mut self, rect: Rect, radius: CornerRadius, color: Color) {
        self.record(DrawCommand::rounded_rect(rect, radius, color));
    }

    fn draw_text(&mut self, text: &str, position: Point, style: &TextStyle) {
        self.record(DrawCommand::Text {
            content: text.to_string(),
            position,
            style: style.clone(),
        });
    }

    fn draw_image(&mut self, source: &str, rect: Rect) {
        self.record(DrawCommand::Image {
            source: source.to_string(),
            bounds: rect,
        });
    }

    fn push_clip(&mut self, rect: Rect, radius: CornerRadius) {
        self.clip_stack.push((rect, radius));
    }

    fn pop_clip(&mut self) {
        self.clip_stack.pop();
    }
}

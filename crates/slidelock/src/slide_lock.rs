//! The slide-to-unlock widget.

use crate::config::{Icon, SlideLockConfig};
use crate::localize::{IdentityLocalizer, Localizer};
use crate::machine::{DragInput, DragMachine, Geometry, Phase, Step};
use crate::status::{SlideLockDelegate, Status, StatusUpdated};
use slidelock_core::{
    Canvas, Color, Constraints, CornerRadius, Event, Font, FontRegistry, GestureState,
    LayoutResult, PanRecognizer, Point, Rect, Size, TextAlign, TextStyle, TypeId, Widget,
};
use std::any::Any;
use std::fmt;
use std::time::Instant;

/// Preferred track size before the host lays the control out.
pub const DEFAULT_TRACK_SIZE: Size = Size::new(300.0, 60.0);

/// A text view inside the control. Frames are relative to the parent view.
#[derive(Debug, Clone, PartialEq)]
struct LabelView {
    frame: Rect,
    text: String,
    style: TextStyle,
}

#[derive(Debug, Clone, PartialEq)]
struct IconView {
    frame: Rect,
    icon: Option<Icon>,
    hidden: bool,
}

impl IconView {
    /// Destination of the image inside the icon region.
    fn image_rect(&self, icon: &Icon) -> Rect {
        match icon.size {
            Some(size) => Rect::new(
                self.frame.x + (self.frame.width - size.width) / 2.0,
                self.frame.y + (self.frame.height - size.height) / 2.0,
                size.width,
                size.height,
            ),
            None => self.frame,
        }
    }
}

/// Views created by the first layout pass.
#[derive(Debug, Clone, PartialEq)]
struct Views {
    /// Handle frame, relative to the track
    handle: Rect,
    handle_color: Color,
    track_label: Option<LabelView>,
    /// Status label, relative to the handle
    status_label: Option<LabelView>,
    /// Icon, relative to the handle
    icon: Option<IconView>,
}

/// Slide-to-unlock control.
///
/// The user drags a handle across a track. Releasing past the threshold
/// slides the handle to the trailing edge and unlocks; releasing short of it
/// slides the handle back. Time is driven by the host through
/// [`SlideLock::tick`].
///
/// ```
/// use slidelock::{SlideLock, Status};
/// use slidelock_core::{Event, GestureState, Point, Rect, Widget};
///
/// let mut lock = SlideLock::new();
/// lock.layout(Rect::new(0.0, 0.0, 300.0, 60.0));
///
/// lock.event(&Event::pan(Point::ORIGIN, Point::ORIGIN, GestureState::Began));
/// lock.event(&Event::pan(Point::new(250.0, 0.0), Point::ORIGIN, GestureState::Ended));
/// assert!(lock.is_unlocked());
///
/// let update = lock.tick(0.2).unwrap();
/// assert_eq!(update.status, Status::Unlocked);
/// ```
pub struct SlideLock {
    config: SlideLockConfig,
    fonts: FontRegistry,
    font: Font,
    localizer: Box<dyn Localizer>,
    delegate: Option<Box<dyn SlideLockDelegate>>,
    bounds: Rect,
    views: Option<Views>,
    machine: DragMachine,
    recognizer: Option<PanRecognizer>,
    is_unlocked: bool,
    status: Status,
    test_id_value: Option<String>,
}

impl Default for SlideLock {
    fn default() -> Self {
        Self::new()
    }
}

impl fmt::Debug for SlideLock {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SlideLock")
            .field("bounds", &self.bounds)
            .field("phase", &self.machine.phase())
            .field("offset", &self.machine.offset())
            .field("is_unlocked", &self.is_unlocked)
            .field("status", &self.status)
            .field("layout_initialized", &self.views.is_some())
            .finish_non_exhaustive()
    }
}

impl SlideLock {
    /// Create a control with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_fonts(FontRegistry::default())
    }

    /// Create a control that resolves fonts from `fonts`.
    #[must_use]
    pub fn with_fonts(fonts: FontRegistry) -> Self {
        let config = SlideLockConfig::default();
        let geometry = Geometry::new(DEFAULT_TRACK_SIZE.width, config.handle_width);
        let mut lock = Self {
            config: config.clone(),
            fonts,
            font: Font::default(),
            localizer: Box::new(IdentityLocalizer),
            delegate: None,
            bounds: Rect::default(),
            views: None,
            machine: DragMachine::new(geometry),
            recognizer: None,
            is_unlocked: false,
            status: Status::Locked,
            test_id_value: None,
        };
        lock.apply_configuration(&config);
        lock
    }

    /// Apply a configuration (builder form).
    #[must_use]
    pub fn configuration(mut self, config: &SlideLockConfig) -> Self {
        self.apply_configuration(config);
        self
    }

    /// Set the observer (builder form).
    #[must_use]
    pub fn delegate(mut self, delegate: impl SlideLockDelegate + 'static) -> Self {
        self.set_delegate(Some(Box::new(delegate)));
        self
    }

    /// Set the localizer (builder form).
    #[must_use]
    pub fn localizer(mut self, localizer: impl Localizer + 'static) -> Self {
        self.set_localizer(Box::new(localizer));
        self
    }

    /// Set test ID.
    #[must_use]
    pub fn with_test_id(mut self, id: impl Into<String>) -> Self {
        self.test_id_value = Some(id.into());
        self
    }

    /// Replace or clear the observer.
    pub fn set_delegate(&mut self, delegate: Option<Box<dyn SlideLockDelegate>>) {
        self.delegate = delegate;
    }

    /// Replace the localizer and refresh displayed texts.
    pub fn set_localizer(&mut self, localizer: Box<dyn Localizer>) {
        self.localizer = localizer;
        self.refresh_views();
    }

    /// Fonts available to [`Self::apply_configuration`].
    pub fn fonts_mut(&mut self) -> &mut FontRegistry {
        &mut self.fonts
    }

    /// Apply a style configuration.
    ///
    /// Safe to call at any time, including before layout and mid-drag. Drag
    /// and unlock state are untouched. The handle always takes the locked
    /// colors and text, even while unlocked; the next completed transition
    /// sets the status appearance again. An unknown font keeps the font
    /// applied previously.
    pub fn apply_configuration(&mut self, config: &SlideLockConfig) {
        self.config = config.clone();

        match self.fonts.resolve(&config.font_name, config.font_size) {
            Ok(font) => self.font = font,
            Err(err) => tracing::warn!(
                %err,
                font = %config.font_name,
                size = config.font_size,
                fallback = %self.font.family,
                "font not resolved, keeping previous font"
            ),
        }

        let geometry = Geometry::new(self.machine.geometry().track_width, config.handle_width);
        self.machine.set_geometry(geometry, self.status);
        self.refresh_views();
    }

    /// Current configuration.
    #[must_use]
    pub const fn config(&self) -> &SlideLockConfig {
        &self.config
    }

    /// Font used for both labels.
    #[must_use]
    pub const fn font(&self) -> &Font {
        &self.font
    }

    /// Whether the control is unlocked, or settling into the unlocked state.
    #[must_use]
    pub const fn is_unlocked(&self) -> bool {
        self.is_unlocked
    }

    /// Last settled status.
    #[must_use]
    pub const fn status(&self) -> Status {
        self.status
    }

    /// Current drag phase.
    #[must_use]
    pub const fn phase(&self) -> Phase {
        self.machine.phase()
    }

    /// Horizontal offset of the handle frame within the track.
    #[must_use]
    pub const fn handle_offset(&self) -> f32 {
        self.machine.offset()
    }

    /// Whether the first layout pass has built the views.
    #[must_use]
    pub const fn is_layout_initialized(&self) -> bool {
        self.views.is_some()
    }

    /// Handle frame in layout coordinates, once laid out.
    #[must_use]
    pub fn handle_frame(&self) -> Option<Rect> {
        self.views
            .as_ref()
            .map(|views| views.handle.translate(self.bounds.x, self.bounds.y))
    }

    /// Text currently shown on the handle, once laid out.
    #[must_use]
    pub fn status_text(&self) -> Option<&str> {
        self.views
            .as_ref()?
            .status_label
            .as_ref()
            .map(|label| label.text.as_str())
    }

    /// Whether an icon is configured and currently drawn.
    #[must_use]
    pub fn is_icon_visible(&self) -> bool {
        self.views
            .as_ref()
            .and_then(|views| views.icon.as_ref())
            .is_some_and(|view| view.icon.is_some() && !view.hidden)
    }

    /// Advance in-flight animations by `dt` seconds.
    ///
    /// Returns the new status on the frame a transition completes; the
    /// observer is notified on that same frame.
    pub fn tick(&mut self, dt: f64) -> Option<StatusUpdated> {
        let settled = self.machine.tick(dt);
        self.sync_handle();
        let status = settled?;

        self.status = status;
        self.is_unlocked = status == Status::Unlocked;
        self.show_status(status);
        self.notify(status);
        Some(StatusUpdated { status })
    }

    /// Handle an input event observed at `now`.
    ///
    /// Raw pointer, mouse and touch input goes through the attached pan
    /// recognizer and only starts a drag on the visible part of the handle.
    /// Pre-recognized [`Event::GesturePan`] events are applied directly.
    pub fn handle_event_at(&mut self, event: &Event, now: Instant) -> Option<Box<dyn Any + Send>> {
        if self.views.is_none() {
            return None;
        }

        let pan = match event {
            Event::GesturePan { .. } => Some(event.clone()),
            Event::MouseDown { position, .. }
            | Event::TouchStart { position, .. }
            | Event::PointerDown { position, .. }
                if !self.hits_handle(position) =>
            {
                None
            }
            _ => self
                .recognizer
                .as_mut()
                .and_then(|recognizer| recognizer.process_at(event, now)),
        }?;

        let Event::GesturePan {
            translation,
            velocity,
            state,
        } = pan
        else {
            return None;
        };

        let input = match state {
            GestureState::Began => DragInput::Began { dx: translation.x },
            GestureState::Changed => DragInput::Changed { dx: translation.x },
            GestureState::Ended => DragInput::Ended {
                dx: translation.x,
                vx: velocity.x,
            },
            GestureState::Cancelled => DragInput::Cancelled,
        };

        let step = self.machine.input(input);
        self.sync_handle();
        if step == Some(Step::UnlockStarted) {
            self.is_unlocked = true;
        }
        None
    }

    /// Visible part of the handle in layout coordinates.
    fn visible_handle(&self) -> Option<Rect> {
        self.handle_frame()?.intersection(&self.bounds)
    }

    fn hits_handle(&self, position: &Point) -> bool {
        self.visible_handle()
            .is_some_and(|rect| rect.contains_point(position))
    }

    fn sync_handle(&mut self) {
        let offset = self.machine.offset();
        if let Some(views) = self.views.as_mut() {
            views.handle = views.handle.with_x(offset);
        }
    }

    fn notify(&mut self, status: Status) {
        tracing::debug!(%status, "status updated");
        if let Some(mut delegate) = self.delegate.take() {
            delegate.status_updated(status, self);
            self.delegate = Some(delegate);
        }
    }

    fn label_style(&self, color: Color) -> TextStyle {
        TextStyle {
            font: self.font.clone(),
            color,
        }
    }

    /// Build the views for a track of `size`. Runs once.
    fn initialize_layout(&mut self, size: Size) {
        let config = &self.config;
        let geometry = Geometry::new(size.width, config.handle_width);
        let handle = Rect::new(
            geometry.locked_offset(),
            0.0,
            geometry.handle_frame_width(),
            size.height,
        );

        let has_text = !config.locked_text.is_empty();
        let track_label = has_text.then(|| LabelView {
            frame: Rect::new(
                config.handle_width,
                0.0,
                size.width - config.handle_width,
                size.height,
            ),
            text: String::new(),
            style: TextStyle::default(),
        });
        let status_label = has_text.then(|| LabelView {
            frame: Rect::from_size(handle.size()),
            text: String::new(),
            style: TextStyle::default(),
        });
        let icon = config.icon.as_ref().map(|icon| IconView {
            frame: Rect::default(),
            icon: Some(icon.clone()),
            hidden: false,
        });

        self.views = Some(Views {
            handle,
            handle_color: config.handle_color,
            track_label,
            status_label,
            icon,
        });
        self.machine.set_geometry(geometry, self.status);
        self.recognizer = Some(PanRecognizer::new());
        self.sync_handle();
        self.refresh_views();

        tracing::debug!(
            width = size.width,
            height = size.height,
            handle_width = geometry.handle_width,
            "slide lock layout initialized"
        );
    }

    /// Push the style into the views.
    ///
    /// Writes the locked appearance whatever the status: handle color, locked
    /// text and handle text color. The icon image is replaced but its
    /// visibility is left as the last transition set it.
    fn refresh_views(&mut self) {
        let Some(mut views) = self.views.take() else {
            return;
        };
        let config = &self.config;
        let track = self.machine.geometry();
        let locked_text = self.localizer.localize(&config.locked_text);

        views.handle_color = config.handle_color;

        if let Some(label) = views.track_label.as_mut() {
            label.frame = Rect::new(
                config.handle_width,
                0.0,
                track.track_width - config.handle_width,
                label.frame.height,
            );
            label.text.clone_from(&locked_text);
            label.style = self.label_style(config.locked_text_color);
        }

        if let Some(label) = views.status_label.as_mut() {
            label.text = locked_text;
            label.style = self.label_style(config.handle_text_color);
        }

        if let Some(icon) = views.icon.as_mut() {
            icon.frame = Rect::new(
                views.handle.width - config.handle_width,
                0.0,
                config.handle_width,
                views.handle.height,
            );
            icon.icon.clone_from(&config.icon);
        }

        self.views = Some(views);
    }

    /// Switch the handle to the appearance of a completed transition.
    fn show_status(&mut self, status: Status) {
        let Some(mut views) = self.views.take() else {
            return;
        };
        let config = &self.config;
        let unlocked = status == Status::Unlocked;

        views.handle_color = if unlocked {
            config.unlocked_track_color
        } else {
            config.handle_color
        };

        if let Some(label) = views.status_label.as_mut() {
            if unlocked {
                label.text = self.localizer.localize(&config.unlocked_text);
                label.style = self.label_style(config.unlocked_text_color);
            } else {
                label.text = self.localizer.localize(&config.locked_text);
                label.style = self.label_style(config.handle_text_color);
            }
        }

        if let Some(icon) = views.icon.as_mut() {
            icon.hidden = unlocked;
        }

        self.views = Some(views);
    }
}

impl Widget for SlideLock {
    fn type_id(&self) -> TypeId {
        TypeId::of::<Self>()
    }

    fn measure(&self, constraints: Constraints) -> Size {
        let preferred = if self.views.is_some() {
            self.bounds.size()
        } else {
            DEFAULT_TRACK_SIZE
        };
        constraints.constrain(preferred)
    }

    fn layout(&mut self, bounds: Rect) -> LayoutResult {
        if self.views.is_some() {
            // Track size is fixed by the first layout; later passes only move it.
            self.bounds = Rect::new(bounds.x, bounds.y, self.bounds.width, self.bounds.height);
        } else {
            self.bounds = bounds;
            if !bounds.size().is_empty() {
                self.initialize_layout(bounds.size());
            }
        }
        LayoutResult {
            size: self.bounds.size(),
        }
    }

    fn paint(&self, canvas: &mut dyn Canvas) {
        let Some(views) = self.views.as_ref() else {
            return;
        };
        let radius = CornerRadius::uniform(self.config.corner_radius);
        let track = self.bounds;

        canvas.fill_rounded_rect(track, radius, self.config.track_color);
        canvas.push_clip(track, radius);

        if let Some(label) = &views.track_label {
            let frame = label.frame.translate(track.x, track.y);
            let position = label.style.position_in(&label.text, frame, TextAlign::Center);
            canvas.draw_text(&label.text, position, &label.style);
        }

        let handle = views.handle.translate(track.x, track.y);
        canvas.fill_rounded_rect(handle, radius, views.handle_color);

        if let Some(label) = &views.status_label {
            let frame = label.frame.translate(handle.x, handle.y);
            let position = label.style.position_in(&label.text, frame, TextAlign::Center);
            canvas.draw_text(&label.text, position, &label.style);
        }

        if let Some(view) = views.icon.as_ref().filter(|view| !view.hidden) {
            if let Some(icon) = &view.icon {
                let rect = view.image_rect(icon).translate(handle.x, handle.y);
                canvas.draw_image(&icon.source, rect);
            }
        }

        canvas.pop_clip();
    }

    fn event(&mut self, event: &Event) -> Option<Box<dyn Any + Send>> {
        self.handle_event_at(event, Instant::now())
    }

    fn is_interactive(&self) -> bool {
        true
    }

    fn test_id(&self) -> Option<&str> {
        self.test_id_value.as_deref()
    }

    fn bounds(&self) -> Rect {
        self.bounds
    }
}

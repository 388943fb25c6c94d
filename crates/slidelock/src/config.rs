//! Style configuration for [`crate::SlideLock`].
//!
//! A [`SlideLockConfig`] is a plain value: build it in code with the
//! builder setters or load it from YAML/TOML, then hand it to
//! [`crate::SlideLock::apply_configuration`]. Colors are written as hex
//! strings in both formats.
//!
//! ```
//! use slidelock::SlideLockConfig;
//!
//! let config = SlideLockConfig::from_yaml(
//!     r##"
//! track_color: "#202020"
//! handle_width: 72
//! locked_text: "SLIDE"
//! "##,
//! )
//! .unwrap();
//! assert_eq!(config.handle_width, 72.0);
//! assert_eq!(config.unlocked_text, "UNLOCKED");
//! ```

use crate::error::{ConfigError, Result};
use serde::{Deserialize, Serialize};
use slidelock_core::{Color, Size};
use std::fmt;

/// Image shown in the trailing region of the handle.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Icon {
    /// Image source identifier, resolved by the rendering backend
    pub source: String,
    /// Intrinsic size. `None` fills the region.
    #[serde(default)]
    pub size: Option<Size>,
}

impl Icon {
    /// Icon that fills its region.
    #[must_use]
    pub fn new(source: impl Into<String>) -> Self {
        Self {
            source: source.into(),
            size: None,
        }
    }

    /// Set the intrinsic size.
    #[must_use]
    pub const fn with_size(mut self, size: Size) -> Self {
        self.size = Some(size);
        self
    }
}

/// Named color slot of a [`SlideLockConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ColorRole {
    /// Track background
    Track,
    /// Handle background once unlocked
    UnlockedTrack,
    /// Handle background while locked
    Handle,
    /// Status label while locked
    HandleText,
    /// Track label
    LockedText,
    /// Status label once unlocked
    UnlockedText,
}

impl ColorRole {
    /// Every role, in field order.
    pub const ALL: [Self; 6] = [
        Self::Track,
        Self::UnlockedTrack,
        Self::Handle,
        Self::HandleText,
        Self::LockedText,
        Self::UnlockedText,
    ];

    /// Configuration field name for this role.
    #[must_use]
    pub const fn field_name(self) -> &'static str {
        match self {
            Self::Track => "track_color",
            Self::UnlockedTrack => "unlocked_track_color",
            Self::Handle => "handle_color",
            Self::HandleText => "handle_text_color",
            Self::LockedText => "locked_text_color",
            Self::UnlockedText => "unlocked_text_color",
        }
    }
}

impl fmt::Display for ColorRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.field_name())
    }
}

/// Appearance of a slide lock control.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SlideLockConfig {
    /// Track background
    #[serde(with = "slidelock_core::color::hex")]
    pub track_color: Color,
    /// Handle background once unlocked
    #[serde(with = "slidelock_core::color::hex")]
    pub unlocked_track_color: Color,
    /// Corner radius of track and handle
    pub corner_radius: f32,
    /// Width of the draggable grip
    pub handle_width: f32,
    /// Handle background while locked
    #[serde(with = "slidelock_core::color::hex")]
    pub handle_color: Color,
    /// Status label color while locked
    #[serde(with = "slidelock_core::color::hex")]
    pub handle_text_color: Color,
    /// Optional handle icon
    pub icon: Option<Icon>,
    /// Font family name
    pub font_name: String,
    /// Font size in points
    pub font_size: f32,
    /// Text shown while locked
    pub locked_text: String,
    /// Track label color
    #[serde(with = "slidelock_core::color::hex")]
    pub locked_text_color: Color,
    /// Text shown once unlocked
    pub unlocked_text: String,
    /// Status label color once unlocked
    #[serde(with = "slidelock_core::color::hex")]
    pub unlocked_text_color: Color,
}

impl Default for SlideLockConfig {
    fn default() -> Self {
        Self {
            track_color: Color::GRAY,
            unlocked_track_color: Color::BLACK,
            corner_radius: 30.0,
            handle_width: 60.0,
            handle_color: Color::DARK_GRAY,
            handle_text_color: Color::WHITE,
            icon: None,
            font_name: "Roboto-Light".to_string(),
            font_size: 16.0,
            locked_text: "UNLOCK".to_string(),
            locked_text_color: Color::WHITE,
            unlocked_text: "UNLOCKED".to_string(),
            unlocked_text_color: Color::WHITE,
        }
    }
}

impl SlideLockConfig {
    /// Create the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a configuration from YAML. Missing fields take defaults.
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        Ok(serde_yaml_ng::from_str(yaml)?)
    }

    /// Parse a configuration from TOML. Missing fields take defaults.
    pub fn from_toml(source: &str) -> Result<Self> {
        Ok(toml::from_str(source)?)
    }

    /// Serialize to YAML.
    pub fn to_yaml(&self) -> Result<String> {
        Ok(serde_yaml_ng::to_string(self)?)
    }

    /// Set track color.
    #[must_use]
    pub const fn track_color(mut self, color: Color) -> Self {
        self.track_color = color;
        self
    }

    /// Set the handle color used once unlocked.
    #[must_use]
    pub const fn unlocked_track_color(mut self, color: Color) -> Self {
        self.unlocked_track_color = color;
        self
    }

    /// Set corner radius.
    #[must_use]
    pub const fn corner_radius(mut self, radius: f32) -> Self {
        self.corner_radius = radius;
        self
    }

    /// Set handle grip width.
    #[must_use]
    pub const fn handle_width(mut self, width: f32) -> Self {
        self.handle_width = width;
        self
    }

    /// Set handle color.
    #[must_use]
    pub const fn handle_color(mut self, color: Color) -> Self {
        self.handle_color = color;
        self
    }

    /// Set status label color.
    #[must_use]
    pub const fn handle_text_color(mut self, color: Color) -> Self {
        self.handle_text_color = color;
        self
    }

    /// Set or clear the icon.
    #[must_use]
    pub fn icon(mut self, icon: Option<Icon>) -> Self {
        self.icon = icon;
        self
    }

    /// Set font family and size.
    #[must_use]
    pub fn font(mut self, name: impl Into<String>, size: f32) -> Self {
        self.font_name = name.into();
        self.font_size = size;
        self
    }

    /// Set locked text.
    #[must_use]
    pub fn locked_text(mut self, text: impl Into<String>) -> Self {
        self.locked_text = text.into();
        self
    }

    /// Set track label color.
    #[must_use]
    pub const fn locked_text_color(mut self, color: Color) -> Self {
        self.locked_text_color = color;
        self
    }

    /// Set unlocked text.
    #[must_use]
    pub fn unlocked_text(mut self, text: impl Into<String>) -> Self {
        self.unlocked_text = text.into();
        self
    }

    /// Set status label color used once unlocked.
    #[must_use]
    pub const fn unlocked_text_color(mut self, color: Color) -> Self {
        self.unlocked_text_color = color;
        self
    }

    /// Color in the given slot.
    #[must_use]
    pub const fn color(&self, role: ColorRole) -> Color {
        match role {
            ColorRole::Track => self.track_color,
            ColorRole::UnlockedTrack => self.unlocked_track_color,
            ColorRole::Handle => self.handle_color,
            ColorRole::HandleText => self.handle_text_color,
            ColorRole::LockedText => self.locked_text_color,
            ColorRole::UnlockedText => self.unlocked_text_color,
        }
    }

    /// Replace the color in the given slot.
    pub fn set_color(&mut self, role: ColorRole, color: Color) {
        let slot = match role {
            ColorRole::Track => &mut self.track_color,
            ColorRole::UnlockedTrack => &mut self.unlocked_track_color,
            ColorRole::Handle => &mut self.handle_color,
            ColorRole::HandleText => &mut self.handle_text_color,
            ColorRole::LockedText => &mut self.locked_text_color,
            ColorRole::UnlockedText => &mut self.unlocked_text_color,
        };
        *slot = color;
    }

    /// Replace the color in the given slot from a hex string.
    ///
    /// The configuration is left untouched when the string does not parse.
    pub fn set_color_hex(&mut self, role: ColorRole, hex: &str) -> Result<()> {
        let color = Color::from_hex(hex).map_err(|source| ConfigError::Color {
            field: role.field_name().to_string(),
            source,
        })?;
        self.set_color(role, color);
        Ok(())
    }
}

//! Font lookup by family name and point size.

use serde::{Deserialize, Serialize};
use std::collections::BTreeSet;

/// Errors from [`FontRegistry::resolve`].
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum FontError {
    /// No family with this name has been registered.
    #[error("unknown font family '{0}'")]
    UnknownFamily(String),
    /// Size is zero, negative or not finite.
    #[error("invalid font size {0}")]
    InvalidSize(f32),
}

/// A resolved font: a registered family at a concrete size.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Font {
    /// Family name
    pub family: String,
    /// Size in points
    pub size: f32,
}

impl Font {
    /// Family every registry knows about.
    pub const SYSTEM_FAMILY: &'static str = "system-ui";

    /// The system font at `size`.
    #[must_use]
    pub fn system(size: f32) -> Self {
        Self {
            family: Self::SYSTEM_FAMILY.to_string(),
            size,
        }
    }
}

impl Default for Font {
    fn default() -> Self {
        Self::system(16.0)
    }
}

/// Set of font families available to widgets.
///
/// ```
/// use slidelock_core::{FontError, FontRegistry};
///
/// let fonts = FontRegistry::new().with_family("Roboto-Light");
/// assert_eq!(fonts.resolve("Roboto-Light", 16.0).unwrap().size, 16.0);
/// assert!(matches!(
///     fonts.resolve("Comic Sans", 16.0),
///     Err(FontError::UnknownFamily(_))
/// ));
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FontRegistry {
    families: BTreeSet<String>,
}

impl Default for FontRegistry {
    fn default() -> Self {
        Self {
            families: BTreeSet::from([Font::SYSTEM_FAMILY.to_string()]),
        }
    }
}

impl FontRegistry {
    /// Registry containing only the system family.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a family (builder form).
    #[must_use]
    pub fn with_family(mut self, family: impl Into<String>) -> Self {
        self.register(family);
        self
    }

    /// Register a family.
    pub fn register(&mut self, family: impl Into<String>) {
        self.families.insert(family.into());
    }

    /// Whether a family is registered.
    #[must_use]
    pub fn contains(&self, family: &str) -> bool {
        self.families.contains(family)
    }

    /// Registered families in name order.
    pub fn families(&self) -> impl Iterator<Item = &str> {
        self.families.iter().map(String::as_str)
    }

    /// Resolve a font by family name and size.
    ///
    /// # Errors
    ///
    /// [`FontError::InvalidSize`] for non-positive or non-finite sizes,
    /// [`FontError::UnknownFamily`] when the family is not registered.
    pub fn resolve(&self, family: &str, size: f32) -> Result<Font, FontError> {
        if !size.is_finite() || size <= 0.0 {
            return Err(FontError::InvalidSize(size));
        }
        if !self.contains(family) {
            return Err(FontError::UnknownFamily(family.to_string()));
        }
        Ok(Font {
            family: family.to_string(),
            size,
        })
    }
}

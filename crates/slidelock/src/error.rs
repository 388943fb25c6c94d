//! Error types for configuration loading.

/// Errors raised while loading a [`crate::SlideLockConfig`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// YAML parsing error
    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml_ng::Error),
    /// TOML parsing error
    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),
    /// Malformed color value
    #[error("invalid color for '{field}': {source}")]
    Color {
        /// Field name
        field: String,
        /// Underlying parse error
        #[source]
        source: slidelock_core::ColorParseError,
    },
}

/// Result type for configuration loading.
pub type Result<T> = std::result::Result<T, ConfigError>;

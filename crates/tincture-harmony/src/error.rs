//! Error types for the harmony crate.

use std::path::PathBuf;

use tincture_core::DomainError;

/// Result type alias for harmony operations.
pub type Result<T> = std::result::Result<T, HarmonyError>;

/// Errors that can occur while generating or looking up colors.
#[derive(Debug, thiserror::Error)]
pub enum HarmonyError {
    /// Parsing, argument or statistics error from the color core.
    #[error(transparent)]
    Color(#[from] tincture_core::Error),

    /// Configuration could not be loaded or is invalid.
    #[error("Configuration error: {0}")]
    Config(#[from] ConfigError),

    /// Reference color data could not be decoded.
    #[error("Failed to decode reference colors: {0}")]
    ReferenceData(#[from] serde_json::Error),
}

impl From<DomainError> for HarmonyError {
    fn from(err: DomainError) -> Self {
        Self::Color(err.into())
    }
}

/// Errors raised while loading configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// File I/O error.
    #[error("Failed to read configuration '{path}': {source}")]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    /// TOML syntax or type error.
    #[error("Failed to parse configuration: {0}")]
    Toml(#[from] toml::de::Error),

    /// A field holds a value the generators cannot work with.
    #[error("Invalid value for '{field}': {message}")]
    Invalid { field: &'static str, message: String },
}

impl ConfigError {
    /// Create an I/O error.
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }

    /// Create a validation error.
    pub fn invalid(field: &'static str, message: impl Into<String>) -> Self {
        Self::Invalid {
            field,
            message: message.into(),
        }
    }
}

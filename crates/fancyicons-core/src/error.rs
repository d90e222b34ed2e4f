//! Error types for fancyicons

use thiserror::Error;

pub type Result<T> = std::result::Result<T, IconError>;

/// Main error type for fancyicons
#[derive(Debug, Error)]
pub enum IconError {
    #[error("Icon not found: {name}")]
    NotFound { name: String },

    #[error("Icon not found in {family}: {name}")]
    NotFoundInFamily { family: String, name: String },

    #[error("Font for {family} could not be loaded: {source}")]
    FontLoadFailure {
        family: String,
        #[source]
        source: FontLoadError,
    },

    #[error("Duplicate icon name in {family}: {name}")]
    DuplicateIcon { family: String, name: String },

    #[error("Invalid mapping prefix: {0:?}")]
    InvalidPrefix(String),
}

impl IconError {
    /// True for both lookup-miss variants
    pub fn is_not_found(&self) -> bool {
        matches!(
            self,
            IconError::NotFound { .. } | IconError::NotFoundInFamily { .. }
        )
    }
}

/// Font loading errors, produced by resource loaders
#[derive(Debug, Error)]
pub enum FontLoadError {
    #[error("Font resource not found: {0}")]
    ResourceNotFound(String),

    #[error("Failed to read font resource {name}: {source}")]
    Io {
        name: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Font resource too large: {name} is {size} bytes (max: {max} bytes)")]
    TooLarge { name: String, size: u64, max: u64 },

    #[error("Invalid font data in {name}: {reason}")]
    InvalidData { name: String, reason: String },

    #[error("Font not supported: {0}")]
    Unsupported(String),
}

//! Outline error types.

use std::path::PathBuf;

/// Error returned when an outline cannot be loaded.
#[derive(Debug, thiserror::Error)]
pub enum OutlineError {
    /// Outline file does not exist.
    #[error("Outline file not found: {}", .0.display())]
    NotFound(PathBuf),

    /// Outline file exists but could not be read.
    #[error("Failed to read {}: {source}", path.display())]
    Io {
        /// Path that failed.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// YAML is malformed or has an unexpected shape.
    #[error("Invalid outline YAML: {0}")]
    Parse(String),

    /// Top-level `content` key is absent or null.
    #[error("Outline has no top-level `content` key")]
    MissingContent,

    /// Section or subsection key is not a scalar.
    #[error("Outline key must be a string, number or boolean, found {0}")]
    InvalidKey(&'static str),
}

impl OutlineError {
    /// Whether this error means the outline file itself was missing.
    #[must_use]
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound(_))
    }

    /// Whether this error comes from the document's content rather than I/O.
    #[must_use]
    pub fn is_parse(&self) -> bool {
        matches!(
            self,
            Self::Parse(_) | Self::MissingContent | Self::InvalidKey(_)
        )
    }
}

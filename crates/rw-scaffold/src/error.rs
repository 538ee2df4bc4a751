//! Scaffold error types.

use std::path::{Path, PathBuf};

use rw_outline::OutlineError;

/// Coarse error category, for callers that only need to know what went wrong.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ErrorKind {
    /// The outline file does not exist.
    MissingFile,
    /// The outline is malformed, lacks `content`, or names an unusable key.
    Parse,
    /// A directory or file could not be created, read or written.
    Io,
}

/// Error returned by scaffold generators.
#[derive(Debug, thiserror::Error)]
pub enum ScaffoldError {
    /// Outline loading failed.
    #[error(transparent)]
    Outline(#[from] OutlineError),

    /// Filesystem operation failed.
    #[error("I/O error at {}: {source}", path.display())]
    Io {
        /// Path being created, read or written.
        path: PathBuf,
        /// Underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Outline key cannot be used as a single folder or file name.
    #[error("Invalid key {key:?}: must be a single path component")]
    InvalidPath {
        /// Offending section or subsection key.
        key: String,
    },
}

impl ScaffoldError {
    /// Error category.
    #[must_use]
    pub fn kind(&self) -> ErrorKind {
        match self {
            Self::Outline(e) if e.is_not_found() => ErrorKind::MissingFile,
            Self::Outline(e) if e.is_parse() => ErrorKind::Parse,
            Self::Outline(_) | Self::Io { .. } => ErrorKind::Io,
            Self::InvalidPath { .. } => ErrorKind::Parse,
        }
    }
}

/// Attach a path to an I/O error.
pub(crate) fn io_at(path: &Path) -> impl FnOnce(std::io::Error) -> ScaffoldError + '_ {
    move |source| ScaffoldError::Io {
        path: path.to_path_buf(),
        source,
    }
}

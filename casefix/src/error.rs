//! Error types for the casefix library.
//!
//! This module provides the error hierarchy for all operations in the
//! casefix library, using `thiserror` for ergonomic error handling.
//!
//! Note that unresolvable references are not errors at all: the rewriter
//! leaves them untouched. Errors here are about documents and the run itself.

use std::io;
use std::path::{Path, PathBuf};

use thiserror::Error;

/// Result type alias for operations that may fail with a casefix error.
///
/// # Examples
///
/// ```
/// use casefix::{Error, Result};
///
/// fn example_operation() -> Result<usize> {
///     Ok(3)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the casefix library.
#[derive(Debug, Error)]
pub enum Error {
    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// An I/O error occurred while touching a specific file.
    #[error("I/O error on {}: {source}", path.display())]
    FileIo {
        /// The file being read or written.
        path: PathBuf,
        /// The underlying error.
        #[source]
        source: io::Error,
    },

    /// Permission denied reading or writing a path.
    ///
    /// This aborts a run.
    #[error("permission denied: {}", path.display())]
    PermissionDenied {
        /// The path that could not be accessed.
        path: PathBuf,
    },

    /// The path given as the root of a run is not a directory.
    #[error("{} is not a directory", path.display())]
    NotADirectory {
        /// The offending path.
        path: PathBuf,
    },

    /// A document could not be decoded as UTF-8.
    ///
    /// Decode failures skip the document; they never abort a run.
    #[error("{} is not valid UTF-8: {source}", path.display())]
    Decode {
        /// The document that failed to decode.
        path: PathBuf,
        /// The underlying decode error.
        #[source]
        source: std::string::FromUtf8Error,
    },

    /// An invalid filesystem path was provided.
    #[error("invalid path {}: {reason}", path.display())]
    InvalidPath {
        /// The invalid path.
        path: PathBuf,
        /// The reason the path is invalid.
        reason: String,
    },

    /// A configuration file could not be parsed.
    #[error("configuration error: {0}")]
    Configuration(#[from] serde_yaml::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },
}

impl Error {
    /// Classify an I/O error raised while reading or writing `path`.
    ///
    /// Permission failures get their own variant so callers can treat them
    /// as fatal; everything else keeps the path for context.
    #[must_use]
    pub fn from_file_io(path: &Path, source: io::Error) -> Self {
        if source.kind() == io::ErrorKind::PermissionDenied {
            Self::PermissionDenied {
                path: path.to_path_buf(),
            }
        } else {
            Self::FileIo {
                path: path.to_path_buf(),
                source,
            }
        }
    }

    /// Check if error is permission-related.
    ///
    /// # Examples
    ///
    /// ```
    /// use casefix::Error;
    /// use std::path::PathBuf;
    ///
    /// let err = Error::PermissionDenied { path: PathBuf::from("/restricted") };
    /// assert!(err.is_permission_denied());
    /// ```
    #[must_use]
    pub fn is_permission_denied(&self) -> bool {
        match self {
            Self::PermissionDenied { .. } => true,
            Self::Io(e) => e.kind() == io::ErrorKind::PermissionDenied,
            _ => false,
        }
    }

    /// Check if error is a UTF-8 decode failure.
    #[must_use]
    pub fn is_decode(&self) -> bool {
        matches!(self, Self::Decode { .. })
    }
}

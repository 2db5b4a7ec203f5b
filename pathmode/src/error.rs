//! Error types for the pathmode library.
//!
//! Mode detection and path conversion never fail; they degrade to
//! documented fallbacks instead. The errors here belong to the
//! configuration layer that feeds them (file loading, YAML parsing, and
//! validation of the values that end up in a `ConversionContext`).

use std::path::PathBuf;

use thiserror::Error;

/// Result type alias for operations that may fail with a pathmode error.
///
/// # Examples
///
/// ```
/// use pathmode::{Error, Result};
///
/// fn example_operation() -> Result<&'static str> {
///     Ok("/app/project")
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// The main error type for the pathmode library.
#[derive(Debug, Error)]
pub enum Error {
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

    /// An I/O error occurred.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// A validation error occurred.
    #[error("validation error for '{field}': {message}")]
    Validation {
        /// The field that failed validation.
        field: String,
        /// A description of the validation failure.
        message: String,
    },

    /// The home directory could not be determined.
    #[error("cannot determine home directory")]
    NoHomeDirectory,
}

impl Error {
    /// Check if error came from validating a configuration value.
    ///
    /// # Examples
    ///
    /// ```
    /// use pathmode::Error;
    ///
    /// let err = Error::Validation {
    ///     field: "container_project_root".into(),
    ///     message: "must be absolute".into(),
    /// };
    /// assert!(err.is_validation());
    /// ```
    #[must_use]
    pub fn is_validation(&self) -> bool {
        matches!(self, Self::Validation { .. })
    }
}

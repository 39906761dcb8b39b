//! Error types for fixture extraction operations.

use thiserror::Error;

/// Result type alias using `ExtractError`.
pub type Result<T> = std::result::Result<T, ExtractError>;

/// Errors that can occur while extracting entries from a fixture archive.
///
/// A missing entry is deliberately *not* represented here: lookup operations
/// return `Ok(None)` or an empty vector so callers can assert on absence
/// explicitly instead of catching an error.
#[derive(Error, Debug)]
pub enum ExtractError {
    /// I/O operation failed while reading the archive source.
    #[error("I/O error: {0}")]
    Io(#[from] std::io::Error),

    /// Archive container is malformed or an entry is corrupt.
    #[error("invalid archive: {0}")]
    InvalidArchive(String),

    /// A decompressed entry exceeded the configured size quota.
    #[error("entry {name} exceeds the {limit} byte entry limit")]
    EntryTooLarge {
        /// Name of the offending entry.
        name: String,
        /// Configured per-entry limit in bytes.
        limit: u64,
    },
}

impl ExtractError {
    /// Converts a zip-crate error, keeping underlying I/O failures
    /// distinguishable from malformed-container failures.
    pub(crate) fn from_zip(err: zip::result::ZipError, context: &str) -> Self {
        match err {
            zip::result::ZipError::Io(e) => Self::Io(e),
            other => Self::InvalidArchive(format!("{context}: {other}")),
        }
    }

    /// Returns `true` if this error was raised by the per-entry size quota.
    ///
    /// # Examples
    ///
    /// ```
    /// use fixtract_core::ExtractError;
    ///
    /// let err = ExtractError::EntryTooLarge {
    ///     name: "huge.bin".to_string(),
    ///     limit: 1024,
    /// };
    /// assert!(err.is_quota());
    ///
    /// let err = ExtractError::InvalidArchive("bad header".to_string());
    /// assert!(!err.is_quota());
    /// ```
    #[must_use]
    pub const fn is_quota(&self) -> bool {
        matches!(self, Self::EntryTooLarge { .. })
    }

    /// Returns a context string for this error, if available.
    #[must_use]
    pub fn context(&self) -> Option<&str> {
        match self {
            Self::InvalidArchive(msg) => Some(msg),
            _ => None,
        }
    }
}

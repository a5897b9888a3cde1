//! Error types for the dv-scanner crate.
//!
//! This module provides the [`ScanError`] type for errors that can occur
//! during directory traversal and aggregation.

use camino::Utf8PathBuf;

/// Errors that can occur during scanning operations.
///
/// # Error Recovery Strategy
///
/// - **Root errors** ([`ScanError::RootNotFound`],
///   [`ScanError::NotADirectory`]): Fatal - the scan never starts
/// - **Entry errors** ([`ScanError::Walk`], [`ScanError::Metadata`],
///   [`ScanError::NonUtf8Path`]): Recoverable - the entry is counted as
///   skipped and the scan continues
///
/// # Examples
///
/// ```
/// use dv_scanner::ScanError;
/// use camino::Utf8PathBuf;
///
/// let err = ScanError::RootNotFound(Utf8PathBuf::from("/missing"));
/// assert!(err.is_fatal());
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ScanError {
    /// The scan root does not exist.
    #[error("directory does not exist: {0}")]
    RootNotFound(Utf8PathBuf),

    /// The scan root exists but is not a directory.
    #[error("not a directory: {0}")]
    NotADirectory(Utf8PathBuf),

    /// Failed to read a directory entry during traversal.
    ///
    /// Scanning continues by skipping this entry.
    #[error("failed to walk directory: {0}")]
    Walk(#[from] ignore::Error),

    /// Failed to stat a file for its size.
    ///
    /// Contains the path that failed and the underlying I/O error.
    /// Scanning continues by skipping this file.
    #[error("failed to stat file {path}: {source}")]
    Metadata {
        /// The path of the file that couldn't be stat'd.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// A path is not valid UTF-8.
    ///
    /// Extensions are extracted from UTF-8 file names; an undecodable
    /// path cannot be classified and is counted as skipped.
    #[error("path is not valid UTF-8: {}", _0.display())]
    NonUtf8Path(std::path::PathBuf),
}

impl ScanError {
    /// Creates a new [`ScanError::Metadata`] error.
    #[inline]
    pub fn metadata(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Metadata {
            path: path.into(),
            source,
        }
    }

    /// Returns `true` if this error is recoverable (scanning can continue).
    ///
    /// Recoverable errors are entry-specific issues; they increment the
    /// skipped counter without stopping the scan.
    #[inline]
    #[must_use]
    pub const fn is_recoverable(&self) -> bool {
        matches!(
            self,
            Self::Walk(_) | Self::Metadata { .. } | Self::NonUtf8Path(_)
        )
    }

    /// Returns `true` if this error is fatal (the scan cannot proceed).
    #[inline]
    #[must_use]
    pub const fn is_fatal(&self) -> bool {
        !self.is_recoverable()
    }
}

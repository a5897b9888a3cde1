//! Error types for the dv-report crate.
//!
//! This module provides the [`ReportError`] type for errors that can occur
//! while rendering and writing the HTML report.

use camino::Utf8PathBuf;

/// Errors that can occur during report generation.
///
/// Report errors are fatal: the scan data is already in memory, and if the
/// report cannot be rendered or written there is nothing to recover to.
///
/// # Examples
///
/// ```
/// use dv_report::ReportError;
///
/// let err = ReportError::Template("placeholder not found".to_owned());
/// assert!(err.to_string().contains("placeholder"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ReportError {
    /// The HTML template is unusable (e.g. missing the data placeholder).
    #[error("invalid template: {0}")]
    Template(String),

    /// Failed to read a custom template file.
    #[error("failed to read template {path}: {source}")]
    TemplateRead {
        /// The template path that couldn't be read.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },

    /// Failed to serialize the payload to JSON.
    #[error("failed to serialize report data: {0}")]
    Serialize(#[from] serde_json::Error),

    /// Failed to write the output HTML file.
    ///
    /// Covers disk-full and permission-denied conditions on the output
    /// path.
    #[error("failed to write report {path}: {source}")]
    Write {
        /// The output path that couldn't be written.
        path: Utf8PathBuf,
        /// The underlying I/O error.
        #[source]
        source: std::io::Error,
    },
}

impl ReportError {
    /// Creates a new [`ReportError::TemplateRead`] error.
    #[inline]
    pub fn template_read(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::TemplateRead {
            path: path.into(),
            source,
        }
    }

    /// Creates a new [`ReportError::Write`] error.
    #[inline]
    pub fn write(path: impl Into<Utf8PathBuf>, source: std::io::Error) -> Self {
        Self::Write {
            path: path.into(),
            source,
        }
    }
}

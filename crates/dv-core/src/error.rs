//! Error types for the dv-core crate.
//!
//! This module provides the [`ConfigError`] type for configuration file
//! loading failures.

/// Errors that can occur while loading a configuration file.
///
/// Both variants are produced by [`Config::from_file`](crate::Config::from_file).
///
/// # Examples
///
/// ```
/// use dv_core::ConfigError;
/// use std::io;
///
/// let error = ConfigError::Io(io::Error::new(io::ErrorKind::NotFound, "gone"));
/// assert!(error.to_string().contains("gone"));
/// ```
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading configuration.
    #[error("failed to read configuration: {0}")]
    Io(#[from] std::io::Error),

    /// Failed to parse the configuration file.
    #[error("failed to parse configuration: {0}")]
    Parse(#[from] serde_json::Error),
}

//! Filesystem scanner aggregating directory composition by extension.
//!
//! This crate is the traversal-and-aggregation engine for dirviz. It walks
//! a directory tree, classifies every regular file by its normalized
//! extension, and accumulates per-extension counts and byte totals into a
//! [`ScanResult`].
//!
//! # Overview
//!
//! The main entry point is [`Scanner`], which combines:
//!
//! - [`FileWalker`]: streaming traversal of every reachable file
//! - [`dv_core::ScanResult`]: the invariant-preserving accumulator
//!
//! Entries that cannot be read (permission errors, undecodable paths) are
//! counted as skipped and the scan continues; only an invalid root is
//! fatal.
//!
//! # Example
//!
//! ```ignore
//! use dv_scanner::Scanner;
//! use dv_core::ScanConfig;
//! use camino::Utf8PathBuf;
//!
//! let config = ScanConfig::new(Utf8PathBuf::from("./photos"));
//! let scanner = Scanner::new(config)?;
//!
//! let result = scanner.scan_with_progress(|count| {
//!     eprintln!("processed {count} files...");
//! })?;
//!
//! println!(
//!     "{} files, {} bytes, {} skipped",
//!     result.total_files, result.total_bytes, result.errors_skipped
//! );
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod walker;

pub use error::ScanError;
pub use walker::{FileWalker, WalkedFile};

use dv_core::{Extension, ScanConfig, ScanResult};
use tracing::{debug, info, warn};

/// The directory composition scanner.
///
/// Validates its root up front, then performs a single-threaded streaming
/// scan: one pass over the tree, one accumulator, no shared state.
///
/// # Examples
///
/// ```ignore
/// use dv_scanner::Scanner;
/// use dv_core::ScanConfig;
/// use camino::Utf8PathBuf;
///
/// let scanner = Scanner::new(ScanConfig::new(Utf8PathBuf::from(".")))?;
/// let result = scanner.scan()?;
/// println!("{} unique extensions", result.unique_extensions());
/// ```
#[derive(Debug)]
pub struct Scanner {
    /// Scanner configuration.
    config: ScanConfig,
}

impl Scanner {
    /// Creates a new scanner with the given configuration.
    ///
    /// # Errors
    ///
    /// Returns [`ScanError::RootNotFound`] if the root path does not
    /// exist, or [`ScanError::NotADirectory`] if it exists but is not a
    /// directory.
    pub fn new(config: ScanConfig) -> Result<Self, ScanError> {
        if !config.root_path.exists() {
            return Err(ScanError::RootNotFound(config.root_path));
        }
        if !config.root_path.is_dir() {
            return Err(ScanError::NotADirectory(config.root_path));
        }

        Ok(Self { config })
    }

    /// Performs a full scan of the configured directory.
    ///
    /// Equivalent to [`scan_with_progress`](Self::scan_with_progress)
    /// with a no-op callback.
    ///
    /// # Errors
    ///
    /// Currently infallible once the scanner is constructed; the
    /// `Result` is kept so entry-point errors and scan errors share a
    /// single error path at call sites.
    pub fn scan(&self) -> Result<ScanResult, ScanError> {
        self.scan_with_progress(|_| {})
    }

    /// Performs a full scan, invoking `on_progress` periodically.
    ///
    /// The callback receives the running file count every
    /// `progress_interval` files (see [`ScanConfig::progress_interval`];
    /// an interval of 0 disables callbacks). Per-entry read failures are
    /// logged at warn level, counted in `errors_skipped`, and skipped.
    ///
    /// # Errors
    ///
    /// See [`scan`](Self::scan).
    pub fn scan_with_progress<F>(&self, mut on_progress: F) -> Result<ScanResult, ScanError>
    where
        F: FnMut(u64),
    {
        info!(root = %self.config.root_path, "Starting scan");

        let walker = self.build_walker();
        let mut result = ScanResult::new();
        let interval = self.config.progress_interval;

        for entry in walker.files() {
            match entry {
                Ok(file) => {
                    let extension = Extension::of(&file.path);
                    debug!(path = %file.path, extension = %extension, size = file.size, "Recorded file");
                    result.record_file(extension, file.size);

                    if interval > 0 && result.total_files % interval == 0 {
                        on_progress(result.total_files);
                    }
                }
                Err(e) => {
                    warn!(error = %e, "Skipping unreadable entry");
                    result.record_skipped();
                }
            }
        }

        info!(
            total_files = result.total_files,
            total_bytes = result.total_bytes,
            unique_extensions = result.unique_extensions(),
            errors_skipped = result.errors_skipped,
            "Scan completed"
        );

        Ok(result)
    }

    /// Builds a file walker with the current configuration.
    fn build_walker(&self) -> FileWalker {
        FileWalker::new(&self.config.root_path)
            .with_skip_dirs(self.config.skip_dirs.iter().cloned())
            .with_follow_links(self.config.follow_links)
    }
}

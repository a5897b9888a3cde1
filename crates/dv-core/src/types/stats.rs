//! Aggregated statistics for a directory scan.
//!
//! This module provides [`ExtensionStat`] for per-extension totals and
//! [`ScanResult`], the accumulator the scanner builds and the reporter
//! consumes.
//!
//! # Invariants
//!
//! [`ScanResult`] upholds two invariants by construction:
//!
//! - `total_files` equals the sum of all `ExtensionStat::file_count`
//! - `total_bytes` equals the sum of all `ExtensionStat::total_bytes`
//!
//! The only mutators are [`ScanResult::record_file`] and
//! [`ScanResult::record_skipped`], which update the per-extension entry and
//! the grand totals together. A stat is only inserted when a file is
//! recorded, so every stat present has `file_count >= 1`.

use serde::{Deserialize, Serialize};

use crate::hash::FxHashMap;

use super::extension::Extension;

/// Per-extension aggregate: how many files and how many bytes.
///
/// # Examples
///
/// ```
/// use dv_core::{Extension, ExtensionStat};
///
/// let mut stat = ExtensionStat::new(Extension::new("txt"));
/// stat.record(10);
/// stat.record(20);
///
/// assert_eq!(stat.file_count, 2);
/// assert_eq!(stat.total_bytes, 30);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExtensionStat {
    /// The normalized extension this stat aggregates.
    pub extension: Extension,

    /// Number of files recorded under this extension.
    pub file_count: u64,

    /// Sum of the sizes in bytes of those files.
    pub total_bytes: u64,
}

impl ExtensionStat {
    /// Creates an empty stat for the given extension.
    #[must_use]
    pub const fn new(extension: Extension) -> Self {
        Self {
            extension,
            file_count: 0,
            total_bytes: 0,
        }
    }

    /// Records one file of `bytes` size under this extension.
    #[inline]
    pub const fn record(&mut self, bytes: u64) {
        self.file_count += 1;
        self.total_bytes += bytes;
    }
}

/// The accumulated result of scanning one directory tree.
///
/// Built once per run by the scanner, consumed once by the reporter. The
/// extension map uses [`FxHashMap`] for fast string-keyed lookups on the
/// scan hot path; [`sorted_stats`](Self::sorted_stats) provides a
/// deterministic ordering for output.
///
/// # Examples
///
/// ```
/// use dv_core::{Extension, ScanResult};
///
/// let mut result = ScanResult::new();
/// result.record_file(Extension::new("txt"), 10);
/// result.record_file(Extension::new("txt"), 20);
/// result.record_file(Extension::new("jpg"), 5);
/// result.record_skipped();
///
/// assert_eq!(result.total_files, 3);
/// assert_eq!(result.total_bytes, 35);
/// assert_eq!(result.errors_skipped, 1);
/// assert_eq!(result.unique_extensions(), 2);
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ScanResult {
    /// Per-extension aggregates, keyed by normalized extension.
    pub extensions: FxHashMap<Extension, ExtensionStat>,

    /// Total number of files recorded.
    pub total_files: u64,

    /// Total size in bytes of all recorded files.
    pub total_bytes: u64,

    /// Number of entries skipped due to read/stat errors.
    pub errors_skipped: u64,
}

impl ScanResult {
    /// Creates an empty result.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Records one file under `extension` with the given size.
    ///
    /// Updates the per-extension stat and the grand totals together, so
    /// the sum invariants always hold.
    pub fn record_file(&mut self, extension: Extension, bytes: u64) {
        self.extensions
            .entry(extension.clone())
            .or_insert_with(|| ExtensionStat::new(extension))
            .record(bytes);
        self.total_files += 1;
        self.total_bytes += bytes;
    }

    /// Records an entry that could not be read or stat'd.
    ///
    /// Skipped entries appear in no extension stat and do not contribute
    /// to the totals.
    #[inline]
    pub const fn record_skipped(&mut self) {
        self.errors_skipped += 1;
    }

    /// Returns the number of distinct extensions seen.
    #[inline]
    #[must_use]
    pub fn unique_extensions(&self) -> usize {
        self.extensions.len()
    }

    /// Returns the per-extension stats sorted by extension name.
    ///
    /// The hash map iteration order is unspecified; reports use this
    /// ordering to stay deterministic across runs.
    #[must_use]
    pub fn sorted_stats(&self) -> Vec<&ExtensionStat> {
        let mut stats: Vec<&ExtensionStat> = self.extensions.values().collect();
        stats.sort_by(|a, b| a.extension.cmp(&b.extension));
        stats
    }

    /// Looks up the stat for an extension, if any files were recorded.
    #[inline]
    #[must_use]
    pub fn stat(&self, extension: &Extension) -> Option<&ExtensionStat> {
        self.extensions.get(extension)
    }
}

/// Formats a byte count as a human-readable size (1024-based).
///
/// Used for terminal summaries; the HTML report derives its own display
/// values client-side from the raw byte counts.
///
/// # Examples
///
/// ```
/// use dv_core::format_bytes;
///
/// assert_eq!(format_bytes(0), "0 B");
/// assert_eq!(format_bytes(1536), "1.50 KB");
/// assert_eq!(format_bytes(5 * 1024 * 1024), "5.00 MB");
/// ```
#[must_use]
#[allow(clippy::cast_precision_loss)] // Acceptable for display formatting
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];

    if bytes < 1024 {
        return format!("{bytes} B");
    }

    let mut value = bytes as f64;
    let mut unit = 0;
    while value >= 1024.0 && unit < UNITS.len() - 1 {
        value /= 1024.0;
        unit += 1;
    }

    format!("{value:.2} {}", UNITS[unit])
}

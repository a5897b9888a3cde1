//! Domain types for directory composition analysis.
//!
//! The types here form the data model shared between the scanner and the
//! reporter:
//!
//! - [`Extension`] - a normalized file extension (the aggregation key)
//! - [`ExtensionStat`] - per-extension count and byte totals
//! - [`ScanResult`] - the accumulated result of one scan

mod extension;
mod stats;

pub use extension::Extension;
pub use stats::{ExtensionStat, ScanResult, format_bytes};

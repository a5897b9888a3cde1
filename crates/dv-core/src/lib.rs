//! Core types, errors, and utilities for the dirviz tool.
//!
//! This crate provides the foundational types used across the workspace:
//!
//! - Domain types ([`Extension`], [`ExtensionStat`], [`ScanResult`])
//! - Configuration structures ([`Config`], [`ScanConfig`], [`ReportConfig`])
//! - Error types for consistent error handling
//! - Type aliases for `FxHashMap`/`FxHashSet` (faster than std)

#![deny(clippy::all)]
#![warn(missing_docs)]

pub mod config;
pub mod error;
pub mod hash;
pub mod types;

pub use config::{Config, ReportConfig, ScanConfig};
pub use error::ConfigError;
pub use hash::{FxHashMap, FxHashSet};
pub use types::{Extension, ExtensionStat, ScanResult, format_bytes};

/// Default number of files between progress callback invocations.
pub const DEFAULT_PROGRESS_INTERVAL: u64 = 1000;

/// Default file name for the generated HTML report.
pub const DEFAULT_REPORT_FILE_NAME: &str = "directory_visualization.html";

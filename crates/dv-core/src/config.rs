//! Configuration structures for the dirviz tool.
//!
//! This module provides configuration types for both components of the
//! application:
//!
//! - [`ScanConfig`] - Scanner settings (root, symlinks, exclusions, progress)
//! - [`ReportConfig`] - Reporter settings (output name, template override)
//! - [`Config`] - Root configuration combining all settings
//!
//! All configuration types implement [`Default`] and deserialize with
//! missing fields filled from the defaults.

use camino::Utf8PathBuf;
use serde::{Deserialize, Serialize};

use crate::DEFAULT_PROGRESS_INTERVAL;
use crate::DEFAULT_REPORT_FILE_NAME;

/// Configuration for the directory scanner.
///
/// Controls which tree is traversed and how.
///
/// # Examples
///
/// ```
/// use dv_core::ScanConfig;
/// use camino::Utf8PathBuf;
///
/// let config = ScanConfig::new(Utf8PathBuf::from("./photos"));
/// assert!(!config.follow_links);
/// assert_eq!(config.progress_interval, 1000);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScanConfig {
    /// Root directory to scan.
    pub root_path: Utf8PathBuf,

    /// Whether to follow symbolic links during traversal.
    ///
    /// Off by default; the scanner does not detect link cycles, so
    /// enabling this on a tree with cyclic links will not terminate.
    pub follow_links: bool,

    /// Directory names to exclude from the scan (matched against every
    /// path component, not full paths).
    pub skip_dirs: Vec<String>,

    /// Number of files between progress callback invocations.
    pub progress_interval: u64,
}

impl ScanConfig {
    /// Creates a scan configuration for the given root directory.
    #[must_use]
    pub fn new(root_path: Utf8PathBuf) -> Self {
        Self {
            root_path,
            ..Self::default()
        }
    }

    /// Adds directory names to exclude from the scan.
    ///
    /// # Examples
    ///
    /// ```
    /// use dv_core::ScanConfig;
    /// use camino::Utf8PathBuf;
    ///
    /// let config = ScanConfig::new(Utf8PathBuf::from("."))
    ///     .with_skip_dirs(&["node_modules", "target"]);
    /// assert_eq!(config.skip_dirs.len(), 2);
    /// ```
    #[must_use]
    pub fn with_skip_dirs(mut self, dirs: &[&str]) -> Self {
        self.skip_dirs.extend(dirs.iter().map(ToString::to_string));
        self
    }

    /// Configures whether to follow symbolic links.
    #[must_use]
    pub const fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }
}

impl Default for ScanConfig {
    fn default() -> Self {
        Self {
            root_path: Utf8PathBuf::new(),
            follow_links: false,
            skip_dirs: Vec::new(),
            progress_interval: DEFAULT_PROGRESS_INTERVAL,
        }
    }
}

/// Configuration for the HTML reporter.
///
/// # Examples
///
/// ```
/// use dv_core::ReportConfig;
///
/// let config = ReportConfig::default();
/// assert_eq!(config.output_file_name, "directory_visualization.html");
/// assert!(config.template_path.is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ReportConfig {
    /// File name of the generated report, written into the scanned
    /// directory.
    pub output_file_name: String,

    /// Optional path to a custom HTML template.
    ///
    /// `None` uses the built-in template compiled into the binary.
    pub template_path: Option<Utf8PathBuf>,
}

impl Default for ReportConfig {
    fn default() -> Self {
        Self {
            output_file_name: DEFAULT_REPORT_FILE_NAME.to_owned(),
            template_path: None,
        }
    }
}

/// Root configuration for the dirviz tool.
///
/// Combines the scanner and reporter configuration into a single structure
/// that can be loaded from a configuration file or constructed
/// programmatically.
///
/// # Examples
///
/// ```
/// use dv_core::Config;
///
/// let config = Config::default();
/// let json = serde_json::to_string_pretty(&config).unwrap();
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Scanner configuration.
    pub scan: ScanConfig,

    /// Reporter configuration.
    pub report: ReportConfig,
}

impl Config {
    /// Loads a configuration from a JSON file.
    ///
    /// Missing fields fall back to their defaults, so a partial
    /// configuration file is valid.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Io`](crate::ConfigError::Io) if the file
    /// cannot be read, or [`ConfigError::Parse`](crate::ConfigError::Parse)
    /// if it is not valid JSON.
    pub fn from_file(path: &camino::Utf8Path) -> Result<Self, crate::ConfigError> {
        let text = std::fs::read_to_string(path)?;
        let config = serde_json::from_str(&text)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_scan_config_defaults() {
        let config = ScanConfig::default();
        assert!(config.root_path.as_str().is_empty());
        assert!(!config.follow_links);
        assert!(config.skip_dirs.is_empty());
        assert_eq!(config.progress_interval, 1000);
    }

    #[test]
    fn test_scan_config_builders() {
        let config = ScanConfig::new(Utf8PathBuf::from("./photos"))
            .with_skip_dirs(&["node_modules", "target"])
            .with_follow_links(true);

        assert_eq!(config.root_path.as_str(), "./photos");
        assert!(config.follow_links);
        assert!(config.skip_dirs.contains(&"node_modules".to_owned()));
        assert!(config.skip_dirs.contains(&"target".to_owned()));
    }

    #[test]
    fn test_report_config_defaults() {
        let config = ReportConfig::default();
        assert_eq!(config.output_file_name, "directory_visualization.html");
        assert!(config.template_path.is_none());
    }

    #[test]
    fn test_config_serialization() {
        let config = Config::default();
        let json = serde_json::to_string(&config).unwrap();
        let parsed: Config = serde_json::from_str(&json).unwrap();
        assert_eq!(config, parsed);
    }

    #[test]
    fn test_config_from_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dirviz.json");
        std::fs::write(&path, r#"{"scan": {"skip_dirs": ["target"]}}"#).unwrap();

        let utf8 = camino::Utf8Path::from_path(&path).unwrap();
        let config = Config::from_file(utf8).unwrap();
        assert_eq!(config.scan.skip_dirs, vec!["target"]);
        assert_eq!(config.scan.progress_interval, 1000);
    }

    #[test]
    fn test_config_from_file_missing() {
        let err = Config::from_file(camino::Utf8Path::new("/nonexistent/dirviz.json")).unwrap_err();
        assert!(matches!(err, crate::ConfigError::Io(_)));
    }

    #[test]
    fn test_config_from_file_invalid_json() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("dirviz.json");
        std::fs::write(&path, "not json").unwrap();

        let utf8 = camino::Utf8Path::from_path(&path).unwrap();
        let err = Config::from_file(utf8).unwrap_err();
        assert!(matches!(err, crate::ConfigError::Parse(_)));
    }

    #[test]
    fn test_config_deserialize_with_missing_fields() {
        let json = r#"{"scan": {"follow_links": true}}"#;
        let config: Config = serde_json::from_str(json).unwrap();
        assert!(config.scan.follow_links);
        // Other fields should have defaults
        assert_eq!(config.scan.progress_interval, 1000);
        assert_eq!(config.report.output_file_name, "directory_visualization.html");
    }
}

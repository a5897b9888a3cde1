//! HTML report generation for dirviz.
//!
//! This crate turns a [`ScanResult`](dv_core::ScanResult) into one
//! self-contained HTML file. The scan data is embedded in the page as an
//! inline JSON object - a lossless, directly parseable serialization - so
//! the page's client-side script can compute its own display values and
//! render interactive views without any server.
//!
//! # Overview
//!
//! - [`ReportPayload`]: the serialized form of a scan (raw byte counts,
//!   sorted extensions, summary, timestamp)
//! - [`Reporter`]: renders the payload into a template and writes the
//!   output file
//!
//! The built-in template references its charting library by CDN URL, so
//! viewing the chart needs network access; generating the report does not.
//!
//! # Example
//!
//! ```ignore
//! use dv_report::{Reporter, ReportPayload};
//! use camino::Utf8Path;
//!
//! let payload = ReportPayload::new(Utf8Path::new("/photos"), &result);
//! let reporter = Reporter::new();
//! reporter.write_report(&payload, Utf8Path::new("/photos/directory_visualization.html"))?;
//! ```

#![deny(clippy::all)]
#![warn(missing_docs)]

mod error;
mod payload;
mod template;

pub use error::ReportError;
pub use payload::{ReportPayload, ReportSummary};
pub use template::{BUILTIN_TEMPLATE, DATA_PLACEHOLDER};

use std::borrow::Cow;
use std::fs;

use camino::Utf8Path;
use tracing::info;

/// Renders scan results into a standalone HTML report.
///
/// By default the built-in template is used; a custom template can be
/// loaded from disk as long as it carries the data placeholder.
///
/// # Examples
///
/// ```
/// use dv_report::Reporter;
///
/// let reporter = Reporter::new();
/// ```
#[derive(Debug, Clone)]
pub struct Reporter {
    /// The HTML template the payload is embedded into.
    template: Cow<'static, str>,
}

impl Default for Reporter {
    fn default() -> Self {
        Self::new()
    }
}

impl Reporter {
    /// Creates a reporter using the built-in template.
    #[must_use]
    pub fn new() -> Self {
        Self {
            template: Cow::Borrowed(BUILTIN_TEMPLATE),
        }
    }

    /// Creates a reporter from a custom template file.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::TemplateRead`] if the file cannot be read,
    /// or [`ReportError::Template`] if it lacks the
    /// [`DATA_PLACEHOLDER`] token.
    pub fn from_template_file(path: &Utf8Path) -> Result<Self, ReportError> {
        let template =
            fs::read_to_string(path).map_err(|e| ReportError::template_read(path, e))?;

        if !template.contains(DATA_PLACEHOLDER) {
            return Err(ReportError::Template(format!(
                "template {path} does not contain the {DATA_PLACEHOLDER} placeholder"
            )));
        }

        Ok(Self {
            template: Cow::Owned(template),
        })
    }

    /// Renders the payload into the template, returning the HTML.
    ///
    /// # Errors
    ///
    /// See [`template::render`].
    pub fn render(&self, payload: &ReportPayload) -> Result<String, ReportError> {
        template::render(&self.template, payload)
    }

    /// Renders the payload and writes the HTML file to `output`.
    ///
    /// # Errors
    ///
    /// Returns [`ReportError::Write`] if the file cannot be written
    /// (e.g. permission denied or disk full), in addition to any render
    /// error.
    pub fn write_report(
        &self,
        payload: &ReportPayload,
        output: &Utf8Path,
    ) -> Result<(), ReportError> {
        let html = self.render(payload)?;

        fs::write(output, &html).map_err(|e| ReportError::write(output, e))?;

        info!(path = %output, bytes = html.len(), "Report written");
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8PathBuf;
    use dv_core::{Extension, ScanResult};
    use tempfile::TempDir;

    fn sample_payload() -> ReportPayload {
        let mut result = ScanResult::new();
        result.record_file(Extension::new("txt"), 10);
        result.record_file(Extension::new("txt"), 20);
        result.record_file(Extension::new("jpg"), 5);
        ReportPayload::new(Utf8Path::new("/photos"), &result)
    }

    fn utf8_path(dir: &TempDir) -> Utf8PathBuf {
        Utf8Path::from_path(dir.path()).unwrap().to_owned()
    }

    #[test]
    fn test_write_report_creates_file() {
        let dir = TempDir::new().unwrap();
        let output = utf8_path(&dir).join("directory_visualization.html");

        Reporter::new()
            .write_report(&sample_payload(), &output)
            .unwrap();

        let html = std::fs::read_to_string(&output).unwrap();
        assert!(html.contains(r#""total_files": 3"#));
        assert!(html.contains(r#""total_bytes": 35"#));
        assert!(!html.contains(DATA_PLACEHOLDER));
    }

    #[test]
    fn test_write_report_fails_on_missing_parent() {
        let dir = TempDir::new().unwrap();
        let output = utf8_path(&dir).join("does_not_exist").join("out.html");

        let err = Reporter::new()
            .write_report(&sample_payload(), &output)
            .unwrap_err();
        assert!(matches!(err, ReportError::Write { .. }));
    }

    #[test]
    fn test_from_template_file_custom() {
        let dir = TempDir::new().unwrap();
        let template_path = utf8_path(&dir).join("custom.html");
        std::fs::write(&template_path, "<body>__DIRVIZ_DATA__</body>").unwrap();

        let reporter = Reporter::from_template_file(&template_path).unwrap();
        let html = reporter.render(&sample_payload()).unwrap();
        assert!(html.starts_with("<body>{"));
    }

    #[test]
    fn test_from_template_file_missing() {
        let dir = TempDir::new().unwrap();
        let missing = utf8_path(&dir).join("nope.html");

        let err = Reporter::from_template_file(&missing).unwrap_err();
        assert!(matches!(err, ReportError::TemplateRead { .. }));
    }

    #[test]
    fn test_from_template_file_without_placeholder() {
        let dir = TempDir::new().unwrap();
        let template_path = utf8_path(&dir).join("bad.html");
        std::fs::write(&template_path, "<body>no data here</body>").unwrap();

        let err = Reporter::from_template_file(&template_path).unwrap_err();
        assert!(matches!(err, ReportError::Template(_)));
    }
}

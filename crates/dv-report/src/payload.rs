//! The structured data embedded into the HTML report.
//!
//! [`ReportPayload`] is a lossless serialization of a scan: raw byte
//! counts only, no pre-rendered prose. The page's client-side script
//! parses it directly and derives display values (MB/GB conversions,
//! percentages, sort orders) on its own.

use camino::{Utf8Path, Utf8PathBuf};
use serde::{Deserialize, Serialize};
use time::OffsetDateTime;
use time::format_description::well_known::Rfc3339;

use dv_core::{ExtensionStat, ScanResult};

/// Top-level summary figures for one scan.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportSummary {
    /// Total number of files recorded.
    pub total_files: u64,
    /// Total size in bytes of all recorded files.
    pub total_bytes: u64,
    /// Number of distinct extensions seen.
    pub unique_extensions: u64,
    /// Number of entries skipped due to read errors.
    pub errors_skipped: u64,
}

/// The complete data payload embedded in the generated page.
///
/// # Determinism
///
/// Extensions are sorted by name, so two scans of the same tree embed
/// byte-identical data (modulo the timestamp).
///
/// # Examples
///
/// ```
/// use dv_core::{Extension, ScanResult};
/// use dv_report::ReportPayload;
/// use camino::Utf8Path;
///
/// let mut result = ScanResult::new();
/// result.record_file(Extension::new("txt"), 30);
///
/// let payload = ReportPayload::new(Utf8Path::new("/photos"), &result);
/// assert_eq!(payload.summary.total_files, 1);
/// assert_eq!(payload.extensions[0].extension.as_str(), "txt");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ReportPayload {
    /// The directory that was scanned.
    pub directory: Utf8PathBuf,

    /// RFC 3339 timestamp of when the report was generated.
    pub generated_at: String,

    /// Summary totals.
    pub summary: ReportSummary,

    /// Per-extension aggregates, sorted by extension name.
    pub extensions: Vec<ExtensionStat>,
}

impl ReportPayload {
    /// Builds a payload from a scan result.
    ///
    /// The result is consumed conceptually (one scan, one report); it is
    /// taken by reference so callers can still print a terminal summary.
    #[must_use]
    pub fn new(directory: &Utf8Path, result: &ScanResult) -> Self {
        Self {
            directory: directory.to_owned(),
            generated_at: OffsetDateTime::now_utc()
                .format(&Rfc3339)
                .unwrap_or_default(),
            summary: ReportSummary {
                total_files: result.total_files,
                total_bytes: result.total_bytes,
                unique_extensions: result.unique_extensions() as u64,
                errors_skipped: result.errors_skipped,
            },
            extensions: result.sorted_stats().into_iter().cloned().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use dv_core::Extension;

    fn sample_result() -> ScanResult {
        let mut result = ScanResult::new();
        result.record_file(Extension::new("txt"), 10);
        result.record_file(Extension::new("txt"), 20);
        result.record_file(Extension::new("jpg"), 5);
        result.record_skipped();
        result
    }

    #[test]
    fn test_payload_summary() {
        let payload = ReportPayload::new(Utf8Path::new("/photos"), &sample_result());

        assert_eq!(payload.directory.as_str(), "/photos");
        assert_eq!(payload.summary.total_files, 3);
        assert_eq!(payload.summary.total_bytes, 35);
        assert_eq!(payload.summary.unique_extensions, 2);
        assert_eq!(payload.summary.errors_skipped, 1);
    }

    #[test]
    fn test_payload_extensions_sorted_by_name() {
        let payload = ReportPayload::new(Utf8Path::new("/photos"), &sample_result());

        let names: Vec<&str> = payload
            .extensions
            .iter()
            .map(|s| s.extension.as_str())
            .collect();
        assert_eq!(names, vec!["jpg", "txt"]);
    }

    #[test]
    fn test_payload_has_timestamp() {
        let payload = ReportPayload::new(Utf8Path::new("/photos"), &sample_result());
        // RFC 3339: date, 'T' separator, time.
        assert!(payload.generated_at.contains('T'));
    }

    #[test]
    fn test_payload_json_round_trip() {
        let payload = ReportPayload::new(Utf8Path::new("/photos"), &sample_result());
        let json = serde_json::to_string(&payload).unwrap();
        let parsed: ReportPayload = serde_json::from_str(&json).unwrap();
        assert_eq!(payload, parsed);
    }

    #[test]
    fn test_payload_embeds_raw_bytes_only() {
        // Display conversions belong to the client; the payload carries
        // nothing but raw byte counts.
        let payload = ReportPayload::new(Utf8Path::new("/photos"), &sample_result());
        let json = serde_json::to_string(&payload).unwrap();
        assert!(json.contains(r#""total_bytes":35"#));
        assert!(!json.contains("_mb"));
        assert!(!json.contains("_gb"));
    }
}

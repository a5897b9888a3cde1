//! HTML template handling.
//!
//! The report page is treated as an opaque collaborator: a complete
//! standalone HTML document that renders whatever data object it finds at
//! its placeholder. This module owns only the embedding step - replacing
//! the placeholder token with the serialized payload.

use crate::error::ReportError;
use crate::payload::ReportPayload;

/// The built-in report template, compiled into the binary.
pub const BUILTIN_TEMPLATE: &str = include_str!("../assets/template.html");

/// Placeholder token the template must contain exactly where the payload
/// object belongs (inside a `<script>` tag, as a JS expression).
pub const DATA_PLACEHOLDER: &str = "__DIRVIZ_DATA__";

/// Renders a template by substituting the payload for the placeholder.
///
/// The payload is embedded as a pretty-printed JSON object literal, which
/// the page's script consumes directly.
///
/// # Errors
///
/// Returns [`ReportError::Template`] if the template does not contain
/// [`DATA_PLACEHOLDER`], and [`ReportError::Serialize`] if the payload
/// cannot be serialized.
pub fn render(template: &str, payload: &ReportPayload) -> Result<String, ReportError> {
    if !template.contains(DATA_PLACEHOLDER) {
        return Err(ReportError::Template(format!(
            "template does not contain the {DATA_PLACEHOLDER} placeholder"
        )));
    }

    let json = serde_json::to_string_pretty(payload)?;
    Ok(template.replacen(DATA_PLACEHOLDER, &json, 1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use camino::Utf8Path;
    use dv_core::{Extension, ScanResult};

    fn sample_payload() -> ReportPayload {
        let mut result = ScanResult::new();
        result.record_file(Extension::new("txt"), 30);
        result.record_file(Extension::new("jpg"), 5);
        ReportPayload::new(Utf8Path::new("/photos"), &result)
    }

    #[test]
    fn test_builtin_template_has_one_placeholder() {
        assert_eq!(BUILTIN_TEMPLATE.matches(DATA_PLACEHOLDER).count(), 1);
    }

    #[test]
    fn test_render_embeds_parseable_payload() {
        // A minimal template with markers lets us extract the embedded
        // object and prove the serialization is lossless.
        let payload = sample_payload();
        let html = render("<<<__DIRVIZ_DATA__>>>", &payload).unwrap();

        let json = html
            .strip_prefix("<<<")
            .and_then(|s| s.strip_suffix(">>>"))
            .unwrap();
        let parsed: ReportPayload = serde_json::from_str(json).unwrap();
        assert_eq!(parsed, payload);
    }

    #[test]
    fn test_render_builtin_template() {
        let html = render(BUILTIN_TEMPLATE, &sample_payload()).unwrap();

        assert!(!html.contains(DATA_PLACEHOLDER));
        assert!(html.contains(r#""total_files": 2"#));
        assert!(html.contains(r#""total_bytes": 35"#));
        // The page pulls its charting library by URL at view time.
        assert!(html.contains("chart.js"));
    }

    #[test]
    fn test_render_rejects_template_without_placeholder() {
        let err = render("<html></html>", &sample_payload()).unwrap_err();
        assert!(matches!(err, ReportError::Template(_)));
    }
}

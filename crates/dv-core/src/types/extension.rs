//! Normalized file extension type.
//!
//! This module provides [`Extension`], the key under which files are
//! aggregated. Extensions are always lowercase and never carry a leading
//! dot; files without an extension share a single sentinel bucket.

use camino::Utf8Path;
use serde::{Deserialize, Serialize};

/// Sentinel bucket name for files that have no extension.
const NO_EXTENSION: &str = "no_extension";

/// A normalized file extension used as an aggregation key.
///
/// Uses a newtype pattern for type safety - prevents accidentally mixing
/// raw strings with normalized extensions. Normalization rules:
///
/// - the extension is the substring after the final `.` in the file name
/// - extensions are lowercased, so `a.TXT` and `a.txt` share a bucket
/// - names with no `.`, names with only a leading `.` (e.g. `.gitignore`),
///   and names ending in `.` map to the [`no extension`](Self::none) bucket
///
/// # Examples
///
/// ```
/// use dv_core::Extension;
/// use camino::Utf8Path;
///
/// assert_eq!(Extension::of(Utf8Path::new("photo.JPG")).as_str(), "jpg");
/// assert_eq!(Extension::of(Utf8Path::new("archive.tar.gz")).as_str(), "gz");
/// assert!(Extension::of(Utf8Path::new(".gitignore")).is_none());
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Extension(String);

impl Extension {
    /// Creates an extension from a raw string, normalizing to lowercase.
    ///
    /// An empty string maps to the sentinel bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use dv_core::Extension;
    ///
    /// assert_eq!(Extension::new("TXT").as_str(), "txt");
    /// assert!(Extension::new("").is_none());
    /// ```
    #[must_use]
    pub fn new(ext: &str) -> Self {
        if ext.is_empty() {
            Self::none()
        } else {
            Self(ext.to_lowercase())
        }
    }

    /// Returns the sentinel extension for files without one.
    ///
    /// # Examples
    ///
    /// ```
    /// use dv_core::Extension;
    ///
    /// assert_eq!(Extension::none().as_str(), "no_extension");
    /// ```
    #[must_use]
    pub fn none() -> Self {
        Self(NO_EXTENSION.to_owned())
    }

    /// Derives the extension from a file path.
    ///
    /// Only the file name matters; directory components are ignored.
    ///
    /// # Examples
    ///
    /// ```
    /// use dv_core::Extension;
    /// use camino::Utf8Path;
    ///
    /// assert_eq!(Extension::of(Utf8Path::new("src/main.rs")).as_str(), "rs");
    /// assert!(Extension::of(Utf8Path::new("Makefile")).is_none());
    /// assert!(Extension::of(Utf8Path::new("trailing.")).is_none());
    /// ```
    #[must_use]
    pub fn of(path: &Utf8Path) -> Self {
        match path.extension() {
            Some(ext) if !ext.is_empty() => Self::new(ext),
            _ => Self::none(),
        }
    }

    /// Returns the normalized extension string.
    #[inline]
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Returns `true` if this is the sentinel "no extension" bucket.
    ///
    /// # Examples
    ///
    /// ```
    /// use dv_core::Extension;
    ///
    /// assert!(Extension::none().is_none());
    /// assert!(!Extension::new("txt").is_none());
    /// ```
    #[inline]
    #[must_use]
    pub fn is_none(&self) -> bool {
        self.0 == NO_EXTENSION
    }
}

impl std::fmt::Display for Extension {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for Extension {
    #[inline]
    fn from(ext: &str) -> Self {
        Self::new(ext)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_extension_lowercases() {
        assert_eq!(Extension::new("TXT").as_str(), "txt");
        assert_eq!(Extension::new("Jpg").as_str(), "jpg");
        assert_eq!(Extension::new("rs").as_str(), "rs");
    }

    #[test]
    fn test_extension_of_path() {
        assert_eq!(Extension::of(Utf8Path::new("a.txt")).as_str(), "txt");
        assert_eq!(Extension::of(Utf8Path::new("a.TXT")).as_str(), "txt");
        assert_eq!(Extension::of(Utf8Path::new("dir/b.jpg")).as_str(), "jpg");
        assert_eq!(
            Extension::of(Utf8Path::new("archive.tar.gz")).as_str(),
            "gz"
        );
    }

    #[test]
    fn test_extension_case_insensitive_equality() {
        assert_eq!(
            Extension::of(Utf8Path::new("a.TXT")),
            Extension::of(Utf8Path::new("a.txt"))
        );
    }

    #[test]
    fn test_no_extension_bucket() {
        assert!(Extension::of(Utf8Path::new("Makefile")).is_none());
        assert!(Extension::of(Utf8Path::new("dir/README")).is_none());
        assert_eq!(
            Extension::of(Utf8Path::new("Makefile")).as_str(),
            "no_extension"
        );
    }

    #[test]
    fn test_hidden_file_has_no_extension() {
        // A single leading dot is not an extension separator.
        assert!(Extension::of(Utf8Path::new(".gitignore")).is_none());
        assert!(Extension::of(Utf8Path::new("repo/.env")).is_none());
        // A hidden file with a real extension still gets one.
        assert_eq!(
            Extension::of(Utf8Path::new(".config.json")).as_str(),
            "json"
        );
    }

    #[test]
    fn test_trailing_dot_has_no_extension() {
        assert!(Extension::of(Utf8Path::new("trailing.")).is_none());
    }

    #[test]
    fn test_extension_ordering() {
        let mut exts = vec![
            Extension::new("txt"),
            Extension::none(),
            Extension::new("jpg"),
        ];
        exts.sort();
        assert_eq!(
            exts.iter().map(Extension::as_str).collect::<Vec<_>>(),
            vec!["jpg", "no_extension", "txt"]
        );
    }

    #[test]
    fn test_extension_serialization() {
        let ext = Extension::new("txt");
        assert_eq!(serde_json::to_string(&ext).unwrap(), r#""txt""#);

        let parsed: Extension = serde_json::from_str(r#""jpg""#).unwrap();
        assert_eq!(parsed, Extension::new("jpg"));
    }
}

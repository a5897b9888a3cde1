//! Directory traversal visiting every reachable file.
//!
//! This module provides [`FileWalker`], which uses the `ignore` crate to
//! walk a directory tree. Unlike source-code tooling, this walker disables
//! the standard filters: hidden files and gitignored files are part of a
//! directory's composition and must be counted.
//!
//! The walker yields one [`WalkedFile`] per regular file; entries that
//! cannot be read are yielded as recoverable [`ScanError`]s so the caller
//! can count them as skipped and move on.

use camino::{Utf8Path, Utf8PathBuf};
use dv_core::FxHashSet;
use ignore::WalkBuilder;

use crate::error::ScanError;

/// A regular file discovered during traversal.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WalkedFile {
    /// The file path (root-relative or absolute, matching the scan root).
    pub path: Utf8PathBuf,
    /// File size in bytes.
    pub size: u64,
}

/// A file walker that visits every regular file in a directory tree.
///
/// # Design
///
/// - Hidden files are visited; `.gitignore`/`.ignore` patterns are not
///   honored (composition analysis wants the whole tree).
/// - Symbolic links are not followed unless configured; link cycles are
///   not detected.
/// - Traversal is single-threaded and streaming - files are yielded one
///   at a time, so memory stays bounded on large trees.
///
/// # Examples
///
/// ```ignore
/// use dv_scanner::FileWalker;
/// use camino::Utf8Path;
///
/// let walker = FileWalker::new(Utf8Path::new("./photos"));
/// for file in walker.files() {
///     match file {
///         Ok(f) => println!("{}: {} bytes", f.path, f.size),
///         Err(e) => eprintln!("skipped: {e}"),
///     }
/// }
/// ```
#[derive(Debug)]
pub struct FileWalker {
    /// The root directory to walk.
    root: Utf8PathBuf,
    /// Directory names to skip during traversal.
    skip_dirs: FxHashSet<String>,
    /// Whether to follow symbolic links.
    follow_links: bool,
}

impl FileWalker {
    /// Creates a new file walker for the given root directory.
    ///
    /// The root is assumed valid; [`Scanner::new`](crate::Scanner::new)
    /// performs existence and directory checks before building a walker.
    #[must_use]
    pub fn new(root: &Utf8Path) -> Self {
        Self {
            root: root.to_owned(),
            skip_dirs: FxHashSet::default(),
            follow_links: false,
        }
    }

    /// Adds directory names to skip during traversal.
    ///
    /// Matched against every path component, so `cache` skips both
    /// `cache/` and `a/b/cache/`.
    #[must_use]
    pub fn with_skip_dirs<I, S>(mut self, dirs: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.skip_dirs.extend(dirs.into_iter().map(Into::into));
        self
    }

    /// Configures whether to follow symbolic links.
    ///
    /// By default, symbolic links are not followed.
    #[must_use]
    pub fn with_follow_links(mut self, follow: bool) -> Self {
        self.follow_links = follow;
        self
    }

    /// Returns an iterator over every regular file under the root.
    ///
    /// Each item is either a [`WalkedFile`] or a recoverable
    /// [`ScanError`] describing why an entry could not be visited.
    pub fn files(&self) -> impl Iterator<Item = Result<WalkedFile, ScanError>> + '_ {
        self.build_walker().filter_map(|entry| self.classify(entry))
    }

    /// Builds the ignore walker with the configured settings.
    fn build_walker(&self) -> ignore::Walk {
        WalkBuilder::new(&self.root)
            // Visit everything: no hidden-file or ignore-pattern filtering
            .standard_filters(false)
            .follow_links(self.follow_links)
            .build()
    }

    /// Turns one walk entry into a file, an error, or nothing.
    ///
    /// Returns `None` for entries that are legitimately not files
    /// (directories, unfollowed symlinks, excluded directories).
    fn classify(
        &self,
        entry: Result<ignore::DirEntry, ignore::Error>,
    ) -> Option<Result<WalkedFile, ScanError>> {
        let entry = match entry {
            Ok(entry) => entry,
            Err(e) => return Some(Err(ScanError::Walk(e))),
        };

        // Skip directories, unfollowed symlinks, sockets, etc.
        if !entry.file_type().is_some_and(|ft| ft.is_file()) {
            return None;
        }

        let path = entry.path();
        let Some(utf8_path) = Utf8Path::from_path(path) else {
            return Some(Err(ScanError::NonUtf8Path(path.to_owned())));
        };

        if self.should_skip_path(utf8_path) {
            return None;
        }

        match utf8_path.metadata() {
            Ok(meta) => Some(Ok(WalkedFile {
                path: utf8_path.to_owned(),
                size: meta.len(),
            })),
            Err(e) => Some(Err(ScanError::metadata(utf8_path, e))),
        }
    }

    /// Checks if a path falls under an excluded directory.
    ///
    /// Only components below the scan root are matched, so a root that is
    /// itself named like an excluded directory is still scanned.
    fn should_skip_path(&self, path: &Utf8Path) -> bool {
        if self.skip_dirs.is_empty() {
            return false;
        }

        path.strip_prefix(&self.root)
            .unwrap_or(path)
            .components()
            .any(|component| self.skip_dirs.contains(component.as_str()))
    }
}

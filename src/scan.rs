//! HTML file discovery.
//!
//! Walks the site root and yields every `*.html` file with its
//! root-relative URL-style path and modification time.
//!
//! ```text
//! public_html/
//! ├── index.html            -> "index.html"
//! ├── about.html            -> "about.html"
//! ├── sitemap.xml           -> (not html, skipped)
//! └── news/
//!     ├── index.html        -> "news/index.html"
//!     └── story-one.html    -> "news/story-one.html"
//! ```
//!
//! Traversal is serial. Hidden directories are included and symlinked
//! directories are not followed. Any I/O error ends the scan: the caller
//! gets `Err` from the iterator and is expected to stop.

use jwalk::{Parallelism, WalkDir};
use std::fs;
use std::path::{Component, Path, PathBuf};
use std::time::SystemTime;

use crate::generator::SitemapError;

/// Suffix a file name must end with to be listed.
pub const HTML_SUFFIX: &str = ".html";

/// An HTML file found under the site root.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileRecord {
    /// Absolute path on disk.
    pub path: PathBuf,
    /// Path relative to the root, `/`-separated.
    pub relative: String,
    /// Last modification time (symlinks resolved).
    pub modified: SystemTime,
}

impl FileRecord {
    /// File name component of the relative path.
    pub fn file_name(&self) -> &str {
        self.relative
            .rsplit_once('/')
            .map_or(self.relative.as_str(), |(_, name)| name)
    }
}

/// Lazily scan `root` for HTML files.
///
/// `sort` orders entries by file name within each directory; otherwise the
/// order is whatever the directory listing returns.
///
/// # Errors
///
/// Fails up front when `root` is not a readable directory. During the walk,
/// unreadable directories, failed stats, and broken symlinks are yielded as
/// `Err` items.
pub fn scan_html(
    root: &Path,
    sort: bool,
) -> Result<impl Iterator<Item = Result<FileRecord, SitemapError>> + use<>, SitemapError> {
    let meta = fs::metadata(root).map_err(|source| SitemapError::Root {
        path: root.to_path_buf(),
        source,
    })?;
    if !meta.is_dir() {
        return Err(SitemapError::Root {
            path: root.to_path_buf(),
            source: std::io::Error::new(std::io::ErrorKind::NotADirectory, "not a directory"),
        });
    }

    let root = root.to_path_buf();
    let walker = WalkDir::new(&root)
        .parallelism(Parallelism::Serial)
        .skip_hidden(false)
        .follow_links(false)
        .sort(sort);

    Ok(walker
        .into_iter()
        .filter_map(move |entry| match entry {
            Ok(mut entry) => {
                if entry.file_type().is_dir() {
                    // Unreadable directory: its listing failed.
                    return entry
                        .read_children_error
                        .take()
                        .map(|err| Err(SitemapError::Walk(err)));
                }
                let name = entry.file_name().to_string_lossy();
                if !name.ends_with(HTML_SUFFIX) {
                    return None;
                }
                to_record(&root, entry.path()).transpose()
            }
            Err(err) => Some(Err(SitemapError::Walk(err))),
        }))
}

/// Resolve metadata for a matching entry.
///
/// Returns `Ok(None)` for a symlink that points at a directory.
fn to_record(root: &Path, path: PathBuf) -> Result<Option<FileRecord>, SitemapError> {
    let meta = fs::metadata(&path).map_err(|source| SitemapError::Metadata {
        path: path.clone(),
        source,
    })?;
    if meta.is_dir() {
        return Ok(None);
    }
    let modified = meta.modified().map_err(|source| SitemapError::Metadata {
        path: path.clone(),
        source,
    })?;

    Ok(Some(FileRecord {
        relative: relative_url_path(root, &path),
        path,
        modified,
    }))
}

/// Root-relative path joined with `/` regardless of platform.
fn relative_url_path(root: &Path, path: &Path) -> String {
    let rel = path.strip_prefix(root).unwrap_or(path);
    rel.components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            _ => None,
        })
        .collect::<Vec<_>>()
        .join("/")
}

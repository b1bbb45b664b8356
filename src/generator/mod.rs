//! Sitemap generators.
//!
//! Two generators share one pipeline:
//!
//! - **Sitemap**: every HTML page with `lastmod` and `priority` (`sitemap.xml`)
//! - **News**: recently modified articles for Google News (`news-sitemap.xml`)
//!
//! ```text
//! scan_html ─► map entry ─► build document ─► write_sitemap
//! ```
//!
//! Each run returns `Result<Generated, SitemapError>`; reporting is left to
//! the caller.

pub mod news;
pub mod sitemap;

use crate::config::SiteConfig;
use std::borrow::Cow;
use std::fmt;
use std::io::Write;
use std::path::{Path, PathBuf};
use std::time::SystemTime;
use tempfile::NamedTempFile;
use thiserror::Error;

/// Declaration line written before every document body.
pub const XML_DECLARATION: &str = r#"<?xml version="1.0" encoding="UTF-8"?>"#;

/// sitemaps.org protocol namespace.
pub const SITEMAP_NS: &str = "http://www.sitemaps.org/schemas/sitemap/0.9";

// ============================================================================
// Errors
// ============================================================================

/// Errors that abort a sitemap run.
#[derive(Debug, Error)]
pub enum SitemapError {
    #[error("cannot read site root `{}`", path.display())]
    Root {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("directory walk failed")]
    Walk(#[from] jwalk::Error),

    #[error("cannot read metadata of `{}`", path.display())]
    Metadata {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },

    #[error("cannot write `{}`", path.display())]
    Write {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

// ============================================================================
// Run
// ============================================================================

/// Which document a run produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SitemapKind {
    General,
    News,
}

impl SitemapKind {
    /// Log module name.
    pub const fn module(self) -> &'static str {
        match self {
            Self::General => "sitemap",
            Self::News => "news",
        }
    }

    /// Whether this kind is enabled in the config.
    pub fn enabled(self, config: &SiteConfig) -> bool {
        match self {
            Self::General => config.sitemap.enable,
            Self::News => config.news.enable,
        }
    }

    /// Output file for this kind.
    pub fn output_path(self, config: &SiteConfig) -> PathBuf {
        match self {
            Self::General => config.sitemap_path(),
            Self::News => config.news_path(),
        }
    }

    /// Success line, e.g. `General Sitemap Created! Added 3 links.`
    pub fn success_message(self, added: usize) -> String {
        match self {
            Self::General => format!("General Sitemap Created! Added {added} links."),
            Self::News => format!("Success! Added {added} articles."),
        }
    }

    /// Failure line with the full error chain.
    pub fn failure_message(self, err: SitemapError) -> String {
        format!("{self} Error: {:#}", anyhow::Error::new(err))
    }
}

impl fmt::Display for SitemapKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::General => f.write_str("Sitemap"),
            Self::News => f.write_str("News Sitemap"),
        }
    }
}

/// Result of a successful run.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Generated {
    /// File that was written.
    pub path: PathBuf,
    /// Number of `<url>` elements in the document.
    pub added: usize,
}

/// Scan the root, build the document for `kind`, and write it.
///
/// `now` anchors the news window.
pub fn generate(
    kind: SitemapKind,
    config: &SiteConfig,
    now: SystemTime,
) -> Result<Generated, SitemapError> {
    let pretty = !config.output.minify;
    let (body, added) = match kind {
        SitemapKind::General => {
            let doc = sitemap::Sitemap::build(config)?;
            let added = doc.len();
            (doc.into_xml(pretty), added)
        }
        SitemapKind::News => {
            let doc = news::NewsSitemap::build(config, now)?;
            let added = doc.len();
            (doc.into_xml(pretty), added)
        }
    };

    let path = kind.output_path(config);
    write_sitemap(&path, &body)?;

    Ok(Generated { path, added })
}

// ============================================================================
// Writer
// ============================================================================

/// Write declaration + body to `path`, replacing it atomically.
///
/// The document goes to a temporary file next to `path` which is then
/// renamed over it, so a failed write leaves the previous file in place.
pub fn write_sitemap(path: &Path, body: &str) -> Result<(), SitemapError> {
    let write_err = |source| SitemapError::Write {
        path: path.to_path_buf(),
        source,
    };

    let dir = path
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));

    let mut tmp = NamedTempFile::new_in(dir).map_err(write_err)?;
    write_document(&mut tmp, body.as_bytes()).map_err(write_err)?;
    tmp.as_file().sync_all().map_err(write_err)?;
    tmp.persist(path).map_err(|e| write_err(e.error))?;

    // NamedTempFile is created 0600; sitemaps are served by the web server.
    #[cfg(unix)]
    {
        use std::os::unix::fs::PermissionsExt;
        std::fs::set_permissions(path, std::fs::Permissions::from_mode(0o644))
            .map_err(write_err)?;
    }

    Ok(())
}

fn write_document(out: &mut impl Write, body: &[u8]) -> std::io::Result<()> {
    out.write_all(XML_DECLARATION.as_bytes())?;
    out.write_all(b"\n")?;
    out.write_all(body)
}

// ============================================================================
// XML helpers
// ============================================================================

/// Escape `&`, `<`, `>` and both quote characters.
pub fn escape_xml(s: &str) -> Cow<'_, str> {
    if !s.contains(['&', '<', '>', '"', '\'']) {
        return Cow::Borrowed(s);
    }

    let mut out = String::with_capacity(s.len() + 16);
    for ch in s.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&apos;"),
            _ => out.push(ch),
        }
    }
    Cow::Owned(out)
}

/// Append one line of markup. Compact bodies get neither indentation nor
/// line breaks, so text content is never touched.
fn push_line(xml: &mut String, pretty: bool, indent: usize, markup: &str) {
    if pretty {
        xml.extend(std::iter::repeat_n(' ', indent));
    }
    xml.push_str(markup);
    if pretty {
        xml.push('\n');
    }
}

/// Append `<tag>text</tag>` as one line.
fn push_element(xml: &mut String, pretty: bool, indent: usize, tag: &str, text: &str) {
    push_line(xml, pretty, indent, &format!("<{tag}>{}</{tag}>", escape_xml(text)));
}

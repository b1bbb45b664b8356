//! General sitemap generation.
//!
//! Lists every HTML page under the site root for search engine indexing.
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:xsi="..." xsi:schemaLocation="...">
//!   <url>
//!     <loc>https://example.com/</loc>
//!     <lastmod>2025-01-01T09:30:00+00:00</lastmod>
//!     <priority>1.00</priority>
//!   </url>
//! </urlset>
//! ```
//!
//! # Priorities
//!
//! | Relative path         | URL path      | Priority |
//! |-----------------------|---------------|----------|
//! | `index.html`          | (site root)   | `1.00`   |
//! | `world/index.html`    | `world/`      | `0.80`   |
//! | `news/story.html`     | unchanged     | `0.80`   |
//! | anything else         | unchanged     | `0.64`   |

use super::{SITEMAP_NS, SitemapError, escape_xml, push_element, push_line};
use crate::config::SiteConfig;
use crate::scan::{FileRecord, scan_html};
use crate::utils::date::{TimestampMode, format_w3c};

const XSI_NS: &str = "http://www.w3.org/2001/XMLSchema-instance";
const SCHEMA_LOCATION: &str = "http://www.sitemaps.org/schemas/sitemap/0.9 http://www.sitemaps.org/schemas/sitemap/0.9/sitemap.xsd";

/// Directory index file name, dropped from URLs.
pub const INDEX_FILE: &str = "index.html";

/// Priority of the home page.
pub const PRIORITY_HOME: &str = "1.00";
/// Priority of section indexes and news articles.
pub const PRIORITY_SECTION: &str = "0.80";
/// Priority of every other page.
pub const PRIORITY_PAGE: &str = "0.64";

pub(super) struct Sitemap {
    urls: Vec<UrlEntry>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct UrlEntry {
    loc: String,
    lastmod: String,
    priority: &'static str,
}

impl UrlEntry {
    fn from_record(record: &FileRecord, base_url: &str, timestamps: TimestampMode) -> Self {
        let (path, priority) = url_path_and_priority(&record.relative);
        Self {
            loc: format!("{base_url}{path}"),
            lastmod: format_w3c(record.modified, timestamps),
            priority,
        }
    }
}

/// Map a root-relative path to its URL path and priority.
///
/// The `index.html` test is a plain suffix match, so `news/myindex.html`
/// maps to `news/my`.
pub fn url_path_and_priority(relative: &str) -> (&str, &'static str) {
    if relative == INDEX_FILE {
        ("", PRIORITY_HOME)
    } else if let Some(dir) = relative.strip_suffix(INDEX_FILE) {
        (dir, PRIORITY_SECTION)
    } else if relative.contains("news/") {
        (relative, PRIORITY_SECTION)
    } else {
        (relative, PRIORITY_PAGE)
    }
}

impl Sitemap {
    /// Scan the site root and collect one entry per HTML file.
    pub(super) fn build(config: &SiteConfig) -> Result<Self, SitemapError> {
        let base_url = config.site.url.as_str();
        let timestamps = config.output.timestamps;

        let mut urls = Vec::new();
        for record in scan_html(config.root(), config.output.sort)? {
            let record = record?;
            let entry = UrlEntry::from_record(&record, base_url, timestamps);
            crate::debug!("sitemap"; "{} -> {} ({})", record.path.display(), entry.loc, entry.priority);
            urls.push(entry);
        }

        Ok(Self { urls })
    }

    /// Number of `<url>` elements.
    pub(super) fn len(&self) -> usize {
        self.urls.len()
    }

    /// Render the document body (no XML declaration), indented when
    /// `pretty`.
    pub(super) fn into_xml(self, pretty: bool) -> String {
        let mut xml = String::with_capacity(256 + self.urls.len() * 160);

        push_line(
            &mut xml,
            pretty,
            0,
            &format!(
                r#"<urlset xmlns="{SITEMAP_NS}" xmlns:xsi="{XSI_NS}" xsi:schemaLocation="{}">"#,
                escape_xml(SCHEMA_LOCATION)
            ),
        );

        for entry in self.urls {
            push_line(&mut xml, pretty, 2, "<url>");
            push_element(&mut xml, pretty, 4, "loc", &entry.loc);
            push_element(&mut xml, pretty, 4, "lastmod", &entry.lastmod);
            push_element(&mut xml, pretty, 4, "priority", entry.priority);
            push_line(&mut xml, pretty, 2, "</url>");
        }

        push_line(&mut xml, pretty, 0, "</urlset>");
        xml
    }
}

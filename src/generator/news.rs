//! Google News sitemap generation.
//!
//! Lists articles modified within the news window (48 hours by default).
//!
//! # Sitemap Format
//!
//! ```xml
//! <?xml version="1.0" encoding="UTF-8"?>
//! <urlset xmlns="http://www.sitemaps.org/schemas/sitemap/0.9" xmlns:news="http://www.google.com/schemas/sitemap-news/0.9">
//!   <url>
//!     <loc>https://example.com/news/story-one.html</loc>
//!     <news:news>
//!       <news:publication>
//!         <news:name>Example News</news:name>
//!         <news:language>en</news:language>
//!       </news:publication>
//!       <news:publication_date>2025-01-01T09:30:00+00:00</news:publication_date>
//!       <news:title>Story One</news:title>
//!     </news:news>
//!   </url>
//! </urlset>
//! ```
//!
//! Titles come from the file name: `story-one.html` becomes `Story One`.
//! Pages whose title would be `Index` are section pages, not articles, and
//! are left out.

use super::sitemap::INDEX_FILE;
use super::{SITEMAP_NS, SitemapError, push_element, push_line};
use crate::config::SiteConfig;
use crate::debug;
use crate::scan::{FileRecord, HTML_SUFFIX, scan_html};
use crate::utils::date::{TimestampMode, format_w3c};
use std::time::{SystemTime, UNIX_EPOCH};

const NEWS_NS: &str = "http://www.google.com/schemas/sitemap-news/0.9";

pub(super) struct NewsSitemap<'a> {
    name: &'a str,
    language: &'a str,
    articles: Vec<Article>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
struct Article {
    loc: String,
    publication_date: String,
    title: String,
}

/// Why a file was left out of the news sitemap.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Skip {
    /// Modified at or before the cutoff.
    Stale,
    /// Title collapses to "Index".
    IndexPage,
}

impl Article {
    fn from_record(
        record: &FileRecord,
        base_url: &str,
        cutoff: SystemTime,
        timestamps: TimestampMode,
    ) -> Result<Self, Skip> {
        if record.modified <= cutoff {
            return Err(Skip::Stale);
        }

        let title = derive_title(record.file_name());
        if title.eq_ignore_ascii_case("index") {
            return Err(Skip::IndexPage);
        }

        Ok(Self {
            loc: format!("{base_url}{}", news_url_path(&record.relative)),
            publication_date: format_w3c(record.modified, timestamps),
            title,
        })
    }
}

/// URL path of an article: a trailing `index.html` is dropped, no other
/// special cases.
pub fn news_url_path(relative: &str) -> &str {
    relative.strip_suffix(INDEX_FILE).unwrap_or(relative)
}

/// Human title from a file name.
///
/// # Examples
///
/// - `story-one.html` -> `Story One`
/// - `covid-19-update.html` -> `Covid 19 Update`
/// - `index.html` -> `Index`
pub fn derive_title(file_name: &str) -> String {
    let spaced = file_name.replace('-', " ");
    let stem = spaced.strip_suffix(HTML_SUFFIX).unwrap_or(&spaced);
    title_case(stem)
}

/// Upper-case the first letter of every run of cased letters and
/// lower-case the rest of the run.
///
/// Anything that is not a cased letter (spaces, digits, punctuation) starts
/// a new run: `o'neil` -> `O'Neil`, `2nd` -> `2Nd`.
pub fn title_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut in_word = false;
    for ch in s.chars() {
        if in_word {
            out.extend(ch.to_lowercase());
        } else {
            out.extend(ch.to_uppercase());
        }
        in_word = ch.is_uppercase() || ch.is_lowercase();
    }
    out
}

impl<'a> NewsSitemap<'a> {
    /// Scan the site root and collect articles modified after
    /// `now - window`.
    pub(super) fn build(config: &'a SiteConfig, now: SystemTime) -> Result<Self, SitemapError> {
        let base_url = config.site.url.as_str();
        let timestamps = config.output.timestamps;
        let cutoff = now.checked_sub(config.news.window()).unwrap_or(UNIX_EPOCH);

        let mut articles = Vec::new();
        for record in scan_html(config.root(), config.output.sort)? {
            let record = record?;
            match Article::from_record(&record, base_url, cutoff, timestamps) {
                Ok(article) => {
                    debug!("news"; "{} -> \"{}\"", record.relative, article.title);
                    articles.push(article);
                }
                Err(Skip::Stale) => {
                    debug!("news"; "skipped {}: older than {}h", record.relative, config.news.window_hours);
                }
                Err(Skip::IndexPage) => {
                    debug!("news"; "skipped {}: index page", record.relative);
                }
            }
        }

        Ok(Self {
            name: &config.news.name,
            language: &config.news.language,
            articles,
        })
    }

    /// Number of `<url>` elements.
    pub(super) fn len(&self) -> usize {
        self.articles.len()
    }

    /// Render the document body (no XML declaration), indented when
    /// `pretty`.
    pub(super) fn into_xml(self, pretty: bool) -> String {
        let mut xml = String::with_capacity(256 + self.articles.len() * 400);

        push_line(
            &mut xml,
            pretty,
            0,
            &format!(r#"<urlset xmlns="{SITEMAP_NS}" xmlns:news="{NEWS_NS}">"#),
        );

        for article in self.articles {
            push_line(&mut xml, pretty, 2, "<url>");
            push_element(&mut xml, pretty, 4, "loc", &article.loc);
            push_line(&mut xml, pretty, 4, "<news:news>");
            push_line(&mut xml, pretty, 6, "<news:publication>");
            push_element(&mut xml, pretty, 8, "news:name", self.name);
            push_element(&mut xml, pretty, 8, "news:language", self.language);
            push_line(&mut xml, pretty, 6, "</news:publication>");
            push_element(&mut xml, pretty, 6, "news:publication_date", &article.publication_date);
            push_element(&mut xml, pretty, 6, "news:title", &article.title);
            push_line(&mut xml, pretty, 4, "</news:news>");
            push_line(&mut xml, pretty, 2, "</url>");
        }

        push_line(&mut xml, pretty, 0, "</urlset>");
        xml
    }
}

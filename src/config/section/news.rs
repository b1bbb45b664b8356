//! `[news]` configuration: Google News sitemap output and publication.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::time::Duration;

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct NewsConfig {
    /// Enable news sitemap generation.
    pub enable: bool,
    /// Output path for news sitemap file (relative to `site.root`).
    pub path: PathBuf,
    /// Publication name (`<news:name>`).
    pub name: String,
    /// Publication language (`<news:language>`).
    pub language: String,
    /// Only files modified within this many hours are listed.
    pub window_hours: u64,
}

impl Default for NewsConfig {
    fn default() -> Self {
        Self {
            enable: true,
            path: "news-sitemap.xml".into(),
            name: "Societal News".into(),
            language: "en".into(),
            window_hours: 48,
        }
    }
}

impl NewsConfig {
    /// Inclusion window as a duration.
    pub fn window(&self) -> Duration {
        Duration::from_secs(self.window_hours.saturating_mul(3600))
    }

    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        if self.name.trim().is_empty() {
            diag.error("news.name", "publication name must not be empty");
        }
        if self.language.trim().is_empty() {
            diag.error_with_hint(
                "news.language",
                "publication language must not be empty",
                "use an ISO 639 code such as \"en\"",
            );
        }
        if self.window_hours == 0 {
            diag.error_with_hint(
                "news.window_hours",
                "window must be at least one hour",
                "Google News lists articles from the last 48 hours",
            );
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_window() {
        assert_eq!(NewsConfig::default().window(), Duration::from_secs(48 * 3600));
    }

    #[test]
    fn test_validate_defaults() {
        let mut diag = ConfigDiagnostics::new();
        NewsConfig::default().validate(&mut diag);
        assert_eq!(diag.len(), 0);
    }

    #[test]
    fn test_validate_empty_fields() {
        let news = NewsConfig {
            name: " ".into(),
            language: String::new(),
            window_hours: 0,
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        news.validate(&mut diag);
        assert_eq!(diag.len(), 3);
    }
}

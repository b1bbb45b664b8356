//! `[site]` configuration.

use crate::config::ConfigDiagnostics;
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// Public base URL of the site.
pub const DEFAULT_URL: &str = "https://societalnews.com/";

/// Document root served at [`DEFAULT_URL`].
pub const DEFAULT_ROOT: &str = "/home/societal/public_html/";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteInfoConfig {
    /// Base URL; page paths are appended verbatim, so it ends with `/`.
    pub url: String,
    /// Directory that is scanned and receives the sitemap files.
    pub root: PathBuf,
}

impl Default for SiteInfoConfig {
    fn default() -> Self {
        Self {
            url: DEFAULT_URL.into(),
            root: DEFAULT_ROOT.into(),
        }
    }
}

impl SiteInfoConfig {
    /// Validate site configuration.
    ///
    /// # Checks
    /// - `url` must be a valid http(s) URL with a host
    /// - `url` must end with `/`
    pub fn validate(&self, diag: &mut ConfigDiagnostics) {
        match url::Url::parse(&self.url) {
            Ok(parsed) => {
                if !matches!(parsed.scheme(), "http" | "https") {
                    diag.error_with_hint(
                        "site.url",
                        format!(
                            "scheme '{}' not supported, must be http or https",
                            parsed.scheme()
                        ),
                        "use format like https://example.com/",
                    );
                }
                if parsed.host_str().is_none() {
                    diag.error_with_hint(
                        "site.url",
                        "URL must have a valid host",
                        "use format like https://example.com/",
                    );
                }
            }
            Err(e) => {
                diag.error_with_hint(
                    "site.url",
                    format!("invalid URL: {}", e),
                    "use format like https://example.com/",
                );
            }
        }

        if !self.url.ends_with('/') {
            diag.error_with_hint(
                "site.url",
                "URL must end with '/'",
                format!("use \"{}/\"", self.url),
            );
        }

        if self.root.as_os_str().is_empty() {
            diag.error("site.root", "root directory must not be empty");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn errors_for(url: &str) -> usize {
        let site = SiteInfoConfig {
            url: url.into(),
            ..Default::default()
        };
        let mut diag = ConfigDiagnostics::new();
        site.validate(&mut diag);
        diag.len()
    }

    #[test]
    fn test_defaults_are_valid() {
        assert_eq!(errors_for(DEFAULT_URL), 0);
    }

    #[test]
    fn test_subpath_url_is_valid() {
        assert_eq!(errors_for("https://example.com/blog/"), 0);
    }

    #[test]
    fn test_missing_trailing_slash() {
        assert_eq!(errors_for("https://example.com/blog"), 1);
    }

    #[test]
    fn test_unsupported_scheme() {
        assert_eq!(errors_for("ftp://example.com/"), 1);
    }

    #[test]
    fn test_invalid_url() {
        // invalid + no trailing slash
        assert_eq!(errors_for("not a url"), 2);
    }
}

//! Generator configuration for `sitemap.toml`.
//!
//! # Module Structure
//!
//! ```text
//! config/
//! ├── section/       # Configuration section definitions
//! │   ├── site       # [site]
//! │   ├── sitemap    # [sitemap]
//! │   ├── news       # [news]
//! │   └── output     # [output]
//! ├── error          # ConfigError, ConfigDiagnostics
//! └── mod.rs         # SiteConfig (this file)
//! ```
//!
//! Every field has a compiled-in default, so the config file is optional.
//! Precedence: defaults < config file < command-line overrides.

mod error;
pub mod section;

pub use error::{ConfigDiagnostics, ConfigError};
pub use section::{NewsConfig, OutputConfig, SitemapConfig, SiteInfoConfig};

use crate::cli::{Cli, Commands};
use serde::{Deserialize, Serialize};
use std::{
    fs,
    path::{Path, PathBuf},
};

// ============================================================================
// root configuration
// ============================================================================

/// Root configuration structure representing sitemap.toml
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SiteConfig {
    /// Site URL and root directory
    pub site: SiteInfoConfig,

    /// General sitemap settings
    pub sitemap: SitemapConfig,

    /// News sitemap settings
    pub news: NewsConfig,

    /// Rendering settings
    pub output: OutputConfig,
}

impl SiteConfig {
    /// Load configuration from CLI arguments.
    ///
    /// Reads the config file when one is given, applies command-line
    /// overrides, then validates the result.
    pub fn load(cli: &Cli) -> Result<Self, ConfigError> {
        let mut config = match &cli.config {
            Some(path) => Self::from_path(path)?,
            None => Self::default(),
        };

        if let Some(root) = &cli.root {
            config.site.root = root.clone();
        }
        if let Some(url) = &cli.url {
            config.site.url = url.clone();
        }

        config.validate(cli.command())?;
        Ok(config)
    }

    /// Parse configuration from TOML string
    pub fn from_str(content: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(content)?)
    }

    /// Load configuration from file path.
    ///
    /// A relative `site.root` is resolved against the config file's directory.
    fn from_path(path: &Path) -> Result<Self, ConfigError> {
        let content =
            fs::read_to_string(path).map_err(|err| ConfigError::Io(path.to_path_buf(), err))?;
        let mut config = Self::from_str(&content)?;

        if config.site.root.is_relative()
            && let Some(dir) = path.parent()
        {
            config.site.root = dir.join(&config.site.root);
        }

        Ok(config)
    }

    /// Validate the sections `command` will use, collecting every problem
    /// before failing.
    ///
    /// `[news]` is checked whenever the news generator runs: under `all`
    /// only if enabled, under `news` always.
    pub fn validate(&self, command: Commands) -> Result<(), ConfigError> {
        let news_runs = match command {
            Commands::All => self.news.enable,
            Commands::General => false,
            Commands::News => true,
        };

        let mut diag = ConfigDiagnostics::new();
        self.site.validate(&mut diag);
        if news_runs {
            self.news.validate(&mut diag);
        }
        diag.into_result()
    }

    /// Scanned root directory.
    pub fn root(&self) -> &Path {
        &self.site.root
    }

    /// Absolute output path of the general sitemap.
    pub fn sitemap_path(&self) -> PathBuf {
        self.site.root.join(&self.sitemap.path)
    }

    /// Absolute output path of the news sitemap.
    pub fn news_path(&self) -> PathBuf {
        self.site.root.join(&self.news.path)
    }

    /// Configuration rooted at `root`, everything else default.
    #[cfg(test)]
    pub fn for_root(root: &Path) -> Self {
        let mut config = Self::default();
        config.site.root = root.to_path_buf();
        config.site.url = "https://example.com/".into();
        config
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::date::TimestampMode;
    use clap::Parser;
    use tempfile::TempDir;

    #[test]
    fn test_defaults() {
        let config = SiteConfig::default();
        assert_eq!(config.site.url, "https://societalnews.com/");
        assert_eq!(config.root(), Path::new("/home/societal/public_html/"));
        assert_eq!(
            config.sitemap_path(),
            Path::new("/home/societal/public_html/sitemap.xml")
        );
        assert_eq!(
            config.news_path(),
            Path::new("/home/societal/public_html/news-sitemap.xml")
        );
        assert_eq!(config.news.name, "Societal News");
        assert_eq!(config.news.language, "en");
        assert_eq!(config.news.window_hours, 48);
        assert_eq!(config.output.timestamps, TimestampMode::Local);
        assert!(!config.output.sort);
        assert!(config.validate(Commands::All).is_ok());
    }

    #[test]
    fn test_example_config_matches_defaults() {
        let config = SiteConfig::from_str(include_str!("../../sitemap.example.toml")).unwrap();
        let defaults = SiteConfig::default();
        assert_eq!(config.site.url, defaults.site.url);
        assert_eq!(config.root(), defaults.root());
        assert_eq!(config.sitemap_path(), defaults.sitemap_path());
        assert_eq!(config.news_path(), defaults.news_path());
        assert_eq!(config.news.name, defaults.news.name);
        assert_eq!(config.news.window_hours, defaults.news.window_hours);
        assert_eq!(config.output.timestamps, defaults.output.timestamps);
        assert_eq!(config.output.minify, defaults.output.minify);
    }

    #[test]
    fn test_empty_file_is_default() {
        let config = SiteConfig::from_str("").unwrap();
        assert_eq!(config.site.url, SiteConfig::default().site.url);
        assert!(config.sitemap.enable);
        assert!(config.news.enable);
    }

    #[test]
    fn test_partial_sections() {
        let config = SiteConfig::from_str(
            r#"
            [site]
            url = "https://example.org/"

            [news]
            name = "Example Daily"
            window_hours = 24

            [output]
            timestamps = "utc"
            sort = true
            "#,
        )
        .unwrap();

        assert_eq!(config.site.url, "https://example.org/");
        assert_eq!(config.news.name, "Example Daily");
        assert_eq!(config.news.language, "en");
        assert_eq!(config.news.window_hours, 24);
        assert_eq!(config.output.timestamps, TimestampMode::Utc);
        assert!(config.output.sort);
        assert!(config.output.minify);
    }

    #[test]
    fn test_unknown_field_rejected() {
        let result = SiteConfig::from_str("[news]\ntitle = \"x\"\n");
        assert!(matches!(result, Err(ConfigError::Toml(_))));
    }

    #[test]
    fn test_relative_root_resolves_against_config_dir() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.toml");
        fs::write(&path, "[site]\nroot = \"public\"\n").unwrap();

        let config = SiteConfig::from_path(&path).unwrap();
        assert_eq!(config.root(), dir.path().join("public"));
    }

    #[test]
    fn test_missing_config_file() {
        let result = SiteConfig::from_path(Path::new("/nonexistent/sitemap.toml"));
        assert!(matches!(result, Err(ConfigError::Io(..))));
    }

    #[test]
    fn test_load_applies_cli_overrides() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.toml");
        fs::write(&path, "[site]\nurl = \"https://a.example/\"\n").unwrap();

        let cli = Cli::try_parse_from([
            "sitemapgen",
            "-C",
            path.to_str().unwrap(),
            "--url",
            "https://b.example/",
            "--root",
            "/srv/www",
        ])
        .unwrap();
        let config = SiteConfig::load(&cli).unwrap();

        assert_eq!(config.site.url, "https://b.example/");
        assert_eq!(config.root(), Path::new("/srv/www"));
    }

    #[test]
    fn test_load_rejects_invalid_override() {
        let cli = Cli::try_parse_from(["sitemapgen", "--url", "https://example.com"]).unwrap();
        let result = SiteConfig::load(&cli);
        assert!(matches!(result, Err(ConfigError::Diagnostics(_))));
    }

    #[test]
    fn test_disabled_news_skips_news_validation() {
        let mut config = SiteConfig::default();
        config.news.enable = false;
        config.news.window_hours = 0;
        assert!(config.validate(Commands::All).is_ok());
        assert!(config.validate(Commands::General).is_ok());
    }

    #[test]
    fn test_explicit_news_validates_disabled_section() {
        let mut config = SiteConfig::default();
        config.news.enable = false;
        config.news.window_hours = 0;
        assert!(matches!(
            config.validate(Commands::News),
            Err(ConfigError::Diagnostics(_))
        ));
    }

    #[test]
    fn test_load_news_subcommand_rejects_invalid_news() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("sitemap.toml");
        fs::write(&path, "[news]\nenable = false\nname = \"\"\n").unwrap();
        let config_arg = path.to_str().unwrap();

        let all = Cli::try_parse_from(["sitemapgen", "-C", config_arg]).unwrap();
        assert!(SiteConfig::load(&all).is_ok());

        let news = Cli::try_parse_from(["sitemapgen", "news", "-C", config_arg]).unwrap();
        assert!(matches!(
            SiteConfig::load(&news),
            Err(ConfigError::Diagnostics(_))
        ));
    }
}

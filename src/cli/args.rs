//! Command-line interface definitions.
//!
//! Every argument is optional: a bare invocation writes both sitemaps with
//! the compiled-in defaults, which is how the cron job calls it.

use clap::{ColorChoice, Parser, Subcommand};
use std::path::PathBuf;

/// Sitemap and Google News sitemap generator
#[derive(Parser, Debug, Clone)]
#[command(version, about, long_about = None)]
pub struct Cli {
    /// Control colored output (auto, always, never)
    #[arg(long, global = true, default_value = "auto")]
    pub color: ColorChoice,

    /// Config file path (compiled-in defaults when omitted)
    #[arg(short = 'C', long, global = true, value_hint = clap::ValueHint::FilePath)]
    pub config: Option<PathBuf>,

    /// Directory to scan and write sitemaps into (overrides `site.root`)
    #[arg(short, long, global = true, value_hint = clap::ValueHint::DirPath)]
    pub root: Option<PathBuf>,

    /// Base URL of the site (overrides `site.url`)
    #[arg(short, long, global = true)]
    pub url: Option<String>,

    /// Print per-file decisions
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Exit with a non-zero status when any sitemap failed
    #[arg(long, global = true)]
    pub strict: bool,

    /// Which sitemap to generate (default: all)
    #[command(subcommand)]
    pub command: Option<Commands>,
}

/// Available subcommands
#[derive(Subcommand, Debug, Clone, Copy, PartialEq, Eq)]
pub enum Commands {
    /// Generate every enabled sitemap
    #[command(visible_alias = "a")]
    All,

    /// Generate the general sitemap only
    #[command(visible_alias = "g")]
    General,

    /// Generate the news sitemap only
    #[command(visible_alias = "n")]
    News,
}

impl Cli {
    /// Selected command, `all` when none was given.
    pub fn command(&self) -> Commands {
        self.command.unwrap_or(Commands::All)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_no_arguments() {
        let cli = Cli::try_parse_from(["sitemapgen"]).unwrap();
        assert_eq!(cli.command(), Commands::All);
        assert!(cli.config.is_none());
        assert!(cli.root.is_none());
        assert!(!cli.strict);
    }

    #[test]
    fn test_subcommand_with_overrides() {
        let cli = Cli::try_parse_from([
            "sitemapgen",
            "news",
            "--root",
            "/srv/www",
            "--url",
            "https://example.com/",
            "-v",
        ])
        .unwrap();
        assert_eq!(cli.command(), Commands::News);
        assert_eq!(cli.root, Some(PathBuf::from("/srv/www")));
        assert_eq!(cli.url.as_deref(), Some("https://example.com/"));
        assert!(cli.verbose);
    }

    #[test]
    fn test_alias() {
        let cli = Cli::try_parse_from(["sitemapgen", "g", "-C", "site.toml"]).unwrap();
        assert_eq!(cli.command(), Commands::General);
        assert_eq!(cli.config, Some(PathBuf::from("site.toml")));
    }
}

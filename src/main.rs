//! sitemapgen - sitemap and Google News sitemap generator.
//!
//! Walks the site root once per sitemap and rewrites `sitemap.xml` and
//! `news-sitemap.xml` in place. Meant to be run from cron: failures are
//! printed as status lines and the exit code stays 0 unless `--strict`.

mod cli;
mod config;
mod generator;
mod logger;
mod scan;
mod utils;

use anyhow::{Context, Result};
use clap::{ColorChoice, Parser};
use cli::{Cli, Commands};
use config::SiteConfig;
use generator::{Generated, SitemapError, SitemapKind, generate};
use std::io::IsTerminal;
use std::process::ExitCode;
use std::time::SystemTime;
use utils::plural::plural_count;

fn main() -> ExitCode {
    let cli = Cli::parse();

    // Set global color override based on CLI option
    match cli.color {
        ColorChoice::Always => owo_colors::set_override(true),
        ColorChoice::Never => owo_colors::set_override(false),
        ColorChoice::Auto => owo_colors::set_override(std::io::stdout().is_terminal()),
    }
    logger::set_verbose(cli.verbose);

    let all_ok = run(&cli);
    if cli.strict && !all_ok {
        ExitCode::FAILURE
    } else {
        ExitCode::SUCCESS
    }
}

/// Load config and run the selected generators. Returns `false` if anything
/// failed; every failure has already been reported.
fn run(cli: &Cli) -> bool {
    let config = match load_config(cli) {
        Ok(config) => config,
        Err(err) => {
            logger::status_error(&format!("Config Error: {err:#}"));
            return false;
        }
    };

    let now = SystemTime::now();
    let mut all_ok = true;
    for kind in selected_kinds(cli.command(), &config) {
        all_ok &= report(kind, generate(kind, &config, now));
    }
    all_ok
}

fn load_config(cli: &Cli) -> Result<SiteConfig> {
    let config = SiteConfig::load(cli).with_context(|| match &cli.config {
        Some(path) => format!("failed to load `{}`", path.display()),
        None => "invalid configuration".to_string(),
    })?;
    debug!("config"; "root {}, url {}", config.root().display(), config.site.url);
    Ok(config)
}

/// Generators to run: an explicit subcommand always runs, `all` honors the
/// `enable` switches.
fn selected_kinds(command: Commands, config: &SiteConfig) -> Vec<SitemapKind> {
    match command {
        Commands::General => vec![SitemapKind::General],
        Commands::News => vec![SitemapKind::News],
        Commands::All => [SitemapKind::General, SitemapKind::News]
            .into_iter()
            .filter(|kind| {
                let enabled = kind.enabled(config);
                if !enabled {
                    log!(kind.module(); "disabled, skipping");
                }
                enabled
            })
            .collect(),
    }
}

/// Print the outcome of one generator. Returns whether it succeeded.
fn report(kind: SitemapKind, result: Result<Generated, SitemapError>) -> bool {
    match result {
        Ok(generated) => {
            let name = generated
                .path
                .file_name()
                .unwrap_or_default()
                .to_string_lossy();
            log!(kind.module(); "{} ({})", name, plural_count(generated.added, "url"));
            logger::status_success(&kind.success_message(generated.added));
            true
        }
        Err(err) => {
            logger::status_error(&kind.failure_message(err));
            false
        }
    }
}

//! Logging utilities with colored prefixes and timestamped status lines.
//!
//! This module provides:
//! - `log!` macro for formatted terminal output with colored prefixes
//! - `debug!` macro for output only shown with `--verbose`
//! - `status_success` / `status_error` for the one-line run summaries
//!
//! # Example
//!
//! ```ignore
//! log!("walk"; "scanning {}", root.display());
//! debug!("news"; "skipped {}: older than window", rel);
//! status_success("General Sitemap Created! Added 3 links.");
//! ```
//!
//! Status lines are never colored: cron wrappers grep them for the
//! `✅` / `❌` markers.

use crate::utils::date::log_timestamp;
use owo_colors::{OwoColorize, Stream, Style};
use std::{
    io::{Write, stdout},
    sync::atomic::{AtomicBool, Ordering},
};

/// Marker printed in front of successful status lines.
pub const SUCCESS_MARK: &str = "✅";

/// Marker printed in front of failed status lines.
pub const FAILURE_MARK: &str = "❌";

/// Global verbose flag (set by --verbose CLI argument)
static VERBOSE: AtomicBool = AtomicBool::new(false);

/// Set verbose mode globally
pub fn set_verbose(v: bool) {
    VERBOSE.store(v, Ordering::SeqCst);
}

/// Check if verbose mode is enabled
pub fn is_verbose() -> bool {
    VERBOSE.load(Ordering::SeqCst)
}

// ============================================================================
// Log Macro
// ============================================================================

/// Log a message with a colored module prefix
///
/// # Usage
/// ```ignore
/// log!("module"; "message with {} formatting", args);
/// ```
#[macro_export]
macro_rules! log {
    ($module:expr; $($arg:tt)*) => {{
        $crate::logger::log($module, &format!($($arg)*))
    }};
}

/// Log a debug message (only shown when --verbose is enabled)
///
/// # Usage
/// ```ignore
/// debug!("module"; "debug info: {}", value);
/// ```
#[macro_export]
macro_rules! debug {
    ($module:expr; $($arg:tt)*) => {{
        if $crate::logger::is_verbose() {
            $crate::logger::log($module, &format!($($arg)*))
        }
    }};
}

// ============================================================================
// Helper Functions
// ============================================================================

/// Log a message with a colored module prefix
#[inline]
pub fn log(module: &str, message: &str) {
    let module_lower = module.to_ascii_lowercase();
    let prefix = colorize_prefix(module, &module_lower);

    let mut stdout = stdout().lock();
    writeln!(stdout, "{prefix} {message}").ok();
    stdout.flush().ok();
}

/// Apply color to a module prefix based on module type
#[inline]
fn colorize_prefix(module: &str, module_lower: &str) -> String {
    let prefix = format!("[{module}]");
    let style = match module_lower {
        "sitemap" => Style::new().bright_green().bold(),
        "news" => Style::new().bright_blue().bold(),
        "error" => Style::new().bright_red().bold(),
        _ => Style::new().bright_yellow().bold(),
    };
    prefix
        .if_supports_color(Stream::Stdout, |text| text.style(style))
        .to_string()
}

// ============================================================================
// Status Lines
// ============================================================================

/// Print a timestamped success line: `[2025-01-01 12:00:00] ✅ message`.
pub fn status_success(message: &str) {
    print_status(&format_status(&log_timestamp(), SUCCESS_MARK, message));
}

/// Print a timestamped failure line: `[2025-01-01 12:00:00] ❌ message`.
///
/// Goes to stdout like every other status line; the process exit code alone
/// does not distinguish failures.
pub fn status_error(message: &str) {
    print_status(&format_status(&log_timestamp(), FAILURE_MARK, message));
}

fn format_status(timestamp: &str, mark: &str, message: &str) -> String {
    format!("[{timestamp}] {mark} {message}")
}

fn print_status(line: &str) {
    let mut stdout = stdout().lock();
    writeln!(stdout, "{line}").ok();
    stdout.flush().ok();
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_status_success() {
        let line = format_status(
            "2025-01-01 12:00:00",
            SUCCESS_MARK,
            "General Sitemap Created! Added 3 links.",
        );
        assert_eq!(
            line,
            "[2025-01-01 12:00:00] ✅ General Sitemap Created! Added 3 links."
        );
    }

    #[test]
    fn test_format_status_failure() {
        let line = format_status("2025-01-01 12:00:00", FAILURE_MARK, "boom");
        assert!(line.starts_with("[2025-01-01 12:00:00] ❌"));
        assert!(line.ends_with("boom"));
    }

    #[test]
    fn test_colorize_prefix_keeps_module_name() {
        owo_colors::set_override(false);
        assert_eq!(colorize_prefix("walk", "walk"), "[walk]");
        assert_eq!(colorize_prefix("News", "news"), "[News]");
    }

    #[test]
    fn test_failure_line_plain_without_color() {
        owo_colors::set_override(false);
        let mut diag = crate::config::ConfigDiagnostics::new();
        diag.error_with_hint("site.url", "missing trailing slash", "use https://example.com/");
        let err = anyhow::Error::new(diag.into_result().unwrap_err()).context("invalid configuration");

        let line = format_status(
            "2025-01-01 12:00:00",
            FAILURE_MARK,
            &format!("Config Error: {err:#}"),
        );
        assert!(!line.contains('\x1b'));
        assert!(line.ends_with(
            "Config Error: invalid configuration: config validation failed: \
             [site.url] missing trailing slash (hint: use https://example.com/)"
        ));
    }

    #[test]
    fn test_verbose_flag_roundtrip() {
        set_verbose(true);
        assert!(is_verbose());
        set_verbose(false);
        assert!(!is_verbose());
    }
}

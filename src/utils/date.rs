//! Timestamp formatting for sitemap fields and status lines.
//!
//! Sitemap dates are written as `YYYY-MM-DDTHH:MM:SS+00:00`.
//!
//! # Timestamp modes
//!
//! - [`TimestampMode::Local`]: the host's local clock value stamped with a
//!   literal `+00:00` offset. This is what existing sitemaps on the server
//!   contain, and it is only correct on hosts running in UTC.
//! - [`TimestampMode::Utc`]: the instant converted to UTC before formatting.
//!
//! # Examples
//!
//! ```ignore
//! let stamp = format_w3c(SystemTime::now(), TimestampMode::Utc);
//! assert!(stamp.ends_with("+00:00"));
//! ```

use chrono::{DateTime, Local, Utc};
use serde::{Deserialize, Serialize};
use std::time::SystemTime;

/// `strftime` pattern for `<lastmod>` and `<news:publication_date>`.
const W3C_FORMAT: &str = "%Y-%m-%dT%H:%M:%S+00:00";

/// `strftime` pattern for status line prefixes.
const LOG_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Which clock a sitemap timestamp is rendered in.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TimestampMode {
    /// Local wall-clock time labeled `+00:00` (no conversion).
    #[default]
    Local,
    /// True UTC.
    Utc,
}

/// Format a file time for a sitemap date field.
pub fn format_w3c(time: SystemTime, mode: TimestampMode) -> String {
    match mode {
        TimestampMode::Local => DateTime::<Local>::from(time).format(W3C_FORMAT).to_string(),
        TimestampMode::Utc => DateTime::<Utc>::from(time).format(W3C_FORMAT).to_string(),
    }
}

/// Current local time as `YYYY-MM-DD HH:MM:SS`.
pub fn log_timestamp() -> String {
    Local::now().format(LOG_FORMAT).to_string()
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::{Duration, UNIX_EPOCH};

    #[test]
    fn test_format_utc_epoch() {
        assert_eq!(
            format_w3c(UNIX_EPOCH, TimestampMode::Utc),
            "1970-01-01T00:00:00+00:00"
        );
    }

    #[test]
    fn test_format_utc_known_instant() {
        // 2024-06-15T14:30:45Z
        let time = UNIX_EPOCH + Duration::from_secs(1_718_461_845);
        assert_eq!(
            format_w3c(time, TimestampMode::Utc),
            "2024-06-15T14:30:45+00:00"
        );
    }

    #[test]
    fn test_format_drops_subseconds() {
        let time = UNIX_EPOCH + Duration::from_millis(1_718_461_845_999);
        assert_eq!(
            format_w3c(time, TimestampMode::Utc),
            "2024-06-15T14:30:45+00:00"
        );
    }

    #[test]
    fn test_format_local_matches_local_clock() {
        let time = UNIX_EPOCH + Duration::from_secs(1_718_461_845);
        let expected = DateTime::<Local>::from(time)
            .format("%Y-%m-%dT%H:%M:%S")
            .to_string();
        assert_eq!(
            format_w3c(time, TimestampMode::Local),
            format!("{expected}+00:00")
        );
    }

    #[test]
    fn test_log_timestamp_shape() {
        let stamp = log_timestamp();
        assert_eq!(stamp.len(), 19);
        assert_eq!(&stamp[4..5], "-");
        assert_eq!(&stamp[10..11], " ");
        assert_eq!(&stamp[13..14], ":");
    }

    #[test]
    fn test_timestamp_mode_from_toml() {
        #[derive(Deserialize)]
        struct Wrapper {
            mode: TimestampMode,
        }
        let w: Wrapper = toml::from_str("mode = \"utc\"").unwrap();
        assert_eq!(w.mode, TimestampMode::Utc);
        let w: Wrapper = toml::from_str("mode = \"local\"").unwrap();
        assert_eq!(w.mode, TimestampMode::Local);
    }
}

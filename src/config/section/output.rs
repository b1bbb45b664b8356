//! `[output]` configuration: how sitemap documents are rendered.

use crate::utils::date::TimestampMode;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct OutputConfig {
    /// Clock used for `<lastmod>` and `<news:publication_date>`.
    pub timestamps: TimestampMode,
    /// Sort directory entries by name instead of listing order.
    pub sort: bool,
    /// Write the document body on a single line.
    pub minify: bool,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            timestamps: TimestampMode::Local,
            sort: false,
            minify: true,
        }
    }
}

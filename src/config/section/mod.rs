//! Configuration section definitions.
//!
//! Each module corresponds to a section in `sitemap.toml`:
//!
//! | Module    | TOML Section | Purpose                                 |
//! |-----------|--------------|-----------------------------------------|
//! | `site`    | `[site]`     | Base URL and scanned root directory     |
//! | `sitemap` | `[sitemap]`  | General sitemap output                  |
//! | `news`    | `[news]`     | News sitemap output and publication     |
//! | `output`  | `[output]`   | Timestamps, ordering, minification      |

mod news;
mod output;
mod site;
mod sitemap;

pub use news::NewsConfig;
pub use output::OutputConfig;
pub use site::SiteInfoConfig;
pub use sitemap::SitemapConfig;

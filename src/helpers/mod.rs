//! Helper functions for the list view
//!
//! These resolve media URLs, build article links and format dates using
//! the site configuration.

mod date;
mod url;

use chrono_tz::Tz;

pub use date::*;
pub use url::*;

use crate::config::SiteConfig;

/// Collection of all helper functions bound to one configuration
#[derive(Debug, Clone)]
pub struct Helpers {
    config: SiteConfig,
    tz: Tz,
}

impl Helpers {
    /// Create a new helpers instance
    pub fn new(config: SiteConfig) -> Self {
        let tz = config.tz();
        Self { config, tz }
    }

    /// Resolve a media path against the CMS base URL
    pub fn media(&self, path: Option<&str>) -> Option<String> {
        strapi_media(&self.config.media_url, path)
    }

    /// Format a published timestamp
    pub fn date(&self, timestamp: &str) -> String {
        format_published(timestamp, &self.config.date_format, self.tz)
    }

    /// Link path of an article under a category slug
    pub fn article_path(&self, category_slug: &str, slug: &str) -> String {
        article_path(&self.config.blog_dir, category_slug, slug)
    }

    /// Site configuration
    pub fn config(&self) -> &SiteConfig {
        &self.config
    }
}

/// Escape text for HTML content and quoted attribute values
pub fn html_escape(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#39;"),
            _ => out.push(c),
        }
    }
    out
}

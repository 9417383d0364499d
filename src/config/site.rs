//! Site configuration (_config.yml)

use anyhow::Result;
use chrono_tz::Tz;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::fs;
use std::path::Path;

/// Category slug used when none is configured
const DEFAULT_CATEGORY: &str = "uncategorized";

/// Main site configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SiteConfig {
    // Site
    pub title: String,

    // CMS
    /// Base URL prepended to relative media paths
    pub media_url: String,

    // URL
    /// First path segment of article links
    pub blog_dir: String,
    pub missing_category: MissingCategory,
    pub default_category: String,

    // Date / Time format
    pub date_format: String,
    pub timezone: String,

    // Store any additional fields
    #[serde(flatten)]
    pub extra: HashMap<String, serde_yaml::Value>,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            title: "Blog".to_string(),

            media_url: "http://localhost:1337".to_string(),

            blog_dir: "blog".to_string(),
            missing_category: MissingCategory::default(),
            default_category: DEFAULT_CATEGORY.to_string(),

            date_format: "MMMM D, YYYY".to_string(),
            timezone: String::new(),

            extra: HashMap::new(),
        }
    }
}

impl SiteConfig {
    /// Load configuration from a file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = fs::read_to_string(path.as_ref())?;
        let config: SiteConfig = serde_yaml::from_str(&content)?;
        tracing::debug!("Loaded config from {:?}", path.as_ref());
        Ok(config)
    }

    /// Timezone used for date labels, UTC when unset or unknown
    pub fn tz(&self) -> Tz {
        if self.timezone.is_empty() {
            return Tz::UTC;
        }
        self.timezone.parse().unwrap_or_else(|_| {
            tracing::warn!("Unknown timezone {:?}, using UTC", self.timezone);
            Tz::UTC
        })
    }

    /// Link segment used for articles without a category
    ///
    /// Never empty, so fallback links keep all their segments.
    pub fn default_category_slug(&self) -> String {
        let slug = slug::slugify(&self.default_category);
        if slug.is_empty() {
            tracing::warn!(
                "default_category {:?} has no usable slug, using {:?}",
                self.default_category,
                DEFAULT_CATEGORY
            );
            return DEFAULT_CATEGORY.to_string();
        }
        slug
    }
}

/// What to do with an article that has no category
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum MissingCategory {
    /// Link under the default category
    #[default]
    Fallback,
    /// Fail the render
    Reject,
}

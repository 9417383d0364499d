//! blog-cards: render blog post summary cards from headless CMS exports
//!
//! Articles exported from a Strapi-style CMS are decoded into typed models,
//! projected into display cards and rendered through an embedded Tera
//! template into a grid of links.

pub mod commands;
pub mod config;
pub mod content;
pub mod helpers;
pub mod templates;
pub mod view;

use anyhow::Result;
use std::path::{Path, PathBuf};

/// The main application handle
#[derive(Debug, Clone)]
pub struct BlogCards {
    /// Site configuration
    pub config: config::SiteConfig,
    /// Base directory
    pub base_dir: PathBuf,
}

impl BlogCards {
    /// Create a new instance from a directory
    pub fn new<P: AsRef<Path>>(base_dir: P) -> Result<Self> {
        let base_dir = base_dir.as_ref().to_path_buf();
        let config_path = base_dir.join("_config.yml");

        let config = if config_path.exists() {
            config::SiteConfig::load(&config_path)?
        } else {
            config::SiteConfig::default()
        };

        Ok(Self { config, base_dir })
    }

    /// Build a list view for this site's configuration
    pub fn view(&self) -> Result<view::ArticleListView, view::ViewError> {
        view::ArticleListView::new(self.config.clone())
    }

    /// Initialize a new site
    pub fn init(&self) -> Result<()> {
        commands::init::run(self)
    }

    /// Render an article export
    pub fn render(
        &self,
        input: &Path,
        output: Option<&Path>,
        trailing: Option<&Path>,
    ) -> Result<()> {
        commands::render::run(self, input, output, trailing)
    }

    /// List the articles of an export
    pub fn list(&self, input: &Path) -> Result<()> {
        commands::list::run(self, input)
    }
}

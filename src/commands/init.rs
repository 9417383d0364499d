//! Initialize a new card site

use anyhow::Result;
use std::fs;
use std::path::Path;

use crate::BlogCards;

const CONFIG: &str = r#"# blog-cards configuration

# Site
title: Blog

# CMS
media_url: http://localhost:1337

# URL
blog_dir: blog
# fallback: link uncategorized articles under default_category
# reject: fail the render
missing_category: fallback
default_category: uncategorized

# Date / Time format
date_format: MMMM D, YYYY
timezone: ''
"#;

/// Initialize a site in the given directory
pub fn init_site(target_dir: &Path) -> Result<()> {
    fs::create_dir_all(target_dir)?;

    let config_path = target_dir.join("_config.yml");
    if config_path.exists() {
        anyhow::bail!("{:?} already exists", config_path);
    }
    fs::write(&config_path, CONFIG)?;

    // A sample export in the CMS response shape
    let now = chrono::Utc::now().format("%Y-%m-%dT%H:%M:%S%.3fZ");
    let sample = format!(
        r#"{{
  "data": [
    {{
      "id": 1,
      "attributes": {{
        "title": "Hello World",
        "description": "Welcome to your first article.",
        "slug": "hello-world",
        "createdAt": "{now}",
        "updatedAt": "{now}",
        "publishedAt": "{now}",
        "cover": {{ "data": null }},
        "category": {{ "data": {{ "id": 1, "attributes": {{ "name": "News", "slug": "news" }} }} }},
        "authors_bios": {{
          "data": [
            {{ "id": 1, "attributes": {{ "name": "John Doe", "email": "john@example.com" }} }}
          ]
        }}
      }}
    }}
  ],
  "meta": {{}}
}}
"#
    );
    fs::write(target_dir.join("articles.json"), sample)?;

    tracing::info!("Initialized site in {:?}", target_dir);
    Ok(())
}

/// Run the init command with an existing instance
pub fn run(app: &BlogCards) -> Result<()> {
    init_site(&app.base_dir)
}

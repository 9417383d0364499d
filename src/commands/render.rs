//! Render an article export to HTML

use anyhow::{Context, Result};
use std::fs;
use std::path::Path;

use crate::content::ArticleLoader;
use crate::view::Fragment;
use crate::BlogCards;

/// Render articles from `input` and write the HTML to `output`, or stdout
pub fn run(
    app: &BlogCards,
    input: &Path,
    output: Option<&Path>,
    trailing: Option<&Path>,
) -> Result<()> {
    let start = std::time::Instant::now();

    let articles = ArticleLoader::load(input)
        .with_context(|| format!("Failed to load articles from {:?}", input))?;

    let trailing = trailing
        .map(|path| {
            fs::read_to_string(path)
                .map(Fragment::from)
                .with_context(|| format!("Failed to read trailing fragment {:?}", path))
        })
        .transpose()?;

    let html = app.view()?.render(&articles, trailing.as_ref())?;

    match output {
        Some(path) => {
            if let Some(parent) = path.parent().filter(|p| !p.as_os_str().is_empty()) {
                fs::create_dir_all(parent)?;
            }
            fs::write(path, &html)?;
            tracing::info!(
                "Rendered {} articles to {:?} in {:.2}s",
                articles.len(),
                path,
                start.elapsed().as_secs_f64()
            );
        }
        None => print!("{}", html),
    }

    Ok(())
}

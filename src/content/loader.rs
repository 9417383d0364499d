//! Article loader - reads exported CMS responses from disk or stdin

use std::collections::HashSet;
use std::fs;
use std::io::Read;
use std::path::Path;

use super::{parse_articles, Article, ContentError};

/// Loads articles from a JSON export
pub struct ArticleLoader;

impl ArticleLoader {
    /// Load articles from a file, or from stdin when the path is `-`
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Vec<Article>, ContentError> {
        let path = path.as_ref();
        let json = if path == Path::new("-") {
            let mut buf = String::new();
            std::io::stdin().read_to_string(&mut buf)?;
            buf
        } else {
            fs::read_to_string(path)?
        };

        let articles = Self::parse(&json)?;
        tracing::info!("Loaded {} articles from {:?}", articles.len(), path);
        Ok(articles)
    }

    /// Parse articles from an in-memory JSON document
    pub fn parse(json: &str) -> Result<Vec<Article>, ContentError> {
        let articles = parse_articles(json)?;
        warn_duplicate_ids(&articles);
        Ok(articles)
    }
}

fn warn_duplicate_ids(articles: &[Article]) {
    let mut seen = HashSet::new();
    for article in articles {
        if !seen.insert(article.id) {
            tracing::warn!("Duplicate article id {} ({})", article.id, article.slug);
        }
    }
}

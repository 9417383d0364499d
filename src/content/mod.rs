//! Content module - article models and CMS response decoding

mod article;
pub mod loader;
mod strapi;

pub use article::{Article, AuthorBio, Category, Media};
pub use loader::ArticleLoader;
pub use strapi::parse_articles;

/// Errors raised while reading article exports
#[derive(Debug, thiserror::Error)]
pub enum ContentError {
    #[error("Invalid article JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Invalid article {entry}: {source}")]
    Entry {
        entry: String,
        source: serde_json::Error,
    },

    #[error("Article {entry} is missing `{field}`")]
    MissingField { entry: String, field: &'static str },

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

//! Article list view - turns article records into a grid of summary cards
//!
//! Rendering is a single pass over the input: each [`Article`] is projected
//! into a [`Card`] holding only display values, and the cards are handed to
//! the embedded template. Nothing is fetched or cached here.

use crate::config::{MissingCategory, SiteConfig};
use crate::content::{Article, AuthorBio, Category};
use crate::helpers::Helpers;
use crate::templates::{CardData, ListData, TemplateRenderer};

/// Errors raised while rendering the list
#[derive(Debug, thiserror::Error)]
pub enum ViewError {
    #[error("Article {id} ({slug}) has no category")]
    MissingCategory { id: u64, slug: String },

    #[error("Template error: {0}")]
    Template(#[from] tera::Error),
}

/// Pre-rendered HTML placed after the grid, inserted as-is
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Fragment(String);

impl Fragment {
    pub fn new<S: Into<String>>(html: S) -> Self {
        Self(html.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<String> for Fragment {
    fn from(html: String) -> Self {
        Self(html)
    }
}

impl From<&str> for Fragment {
    fn from(html: &str) -> Self {
        Self(html.to_string())
    }
}

/// Display values derived from one article
#[derive(Debug, Clone, PartialEq)]
pub struct Card {
    pub id: u64,
    /// Link path, `/{blog_dir}/{category}/{slug}`
    pub href: String,
    /// Resolved cover image
    pub image_url: Option<String>,
    /// Resolved avatar of the first author
    pub avatar_url: Option<String>,
    pub title: String,
    pub description: String,
    /// Formatted publication date
    pub date: String,
    /// Raw publication timestamp
    pub published_at: String,
    pub category: Option<Category>,
    /// Author names joined with " & "
    pub byline: Option<String>,
}

impl Card {
    /// Derive the card for an article
    pub fn derive(article: &Article, helpers: &Helpers) -> Result<Self, ViewError> {
        let image_url = helpers.media(article.cover.as_ref().map(|c| c.url.as_str()));

        let avatar_url = helpers.media(
            article
                .first_author()
                .and_then(|bio| bio.avatar.as_ref())
                .map(|avatar| avatar.url.as_str()),
        );

        Ok(Self {
            id: article.id,
            href: link_for(article, helpers)?,
            image_url,
            avatar_url,
            title: article.title.clone(),
            description: article.description.clone(),
            date: helpers.date(&article.published_at),
            published_at: article.published_at.clone(),
            category: article.category.clone(),
            byline: article.authors().and_then(byline),
        })
    }
}

/// Join author names with " & " between consecutive names
pub fn byline(bios: &[AuthorBio]) -> Option<String> {
    if bios.is_empty() {
        return None;
    }

    let names: Vec<&str> = bios.iter().map(|bio| bio.name.as_str()).collect();
    Some(names.join(" & "))
}

fn link_for(article: &Article, helpers: &Helpers) -> Result<String, ViewError> {
    if let Some(category) = &article.category {
        return Ok(helpers.article_path(&category.slug, &article.slug));
    }

    match helpers.config().missing_category {
        MissingCategory::Fallback => {
            let fallback = helpers.config().default_category_slug();
            tracing::debug!(
                "Article {} ({}) has no category, linking under {:?}",
                article.id,
                article.slug,
                fallback
            );
            Ok(helpers.article_path(&fallback, &article.slug))
        }
        MissingCategory::Reject => Err(ViewError::MissingCategory {
            id: article.id,
            slug: article.slug.clone(),
        }),
    }
}

/// Renders a sequence of articles as a card grid
#[derive(Debug)]
pub struct ArticleListView {
    helpers: Helpers,
    renderer: TemplateRenderer,
}

impl ArticleListView {
    /// Create a view for the given configuration
    pub fn new(config: SiteConfig) -> Result<Self, ViewError> {
        Ok(Self {
            helpers: Helpers::new(config),
            renderer: TemplateRenderer::new()?,
        })
    }

    /// Derive the cards for all articles, in input order
    pub fn cards(&self, articles: &[Article]) -> Result<Vec<Card>, ViewError> {
        articles
            .iter()
            .map(|article| Card::derive(article, &self.helpers))
            .collect()
    }

    /// Render the grid, followed by `trailing` when given
    pub fn render(
        &self,
        articles: &[Article],
        trailing: Option<&Fragment>,
    ) -> Result<String, ViewError> {
        let cards = self.cards(articles)?;
        tracing::debug!("Rendering {} cards", cards.len());

        let list = ListData {
            title: crate::helpers::html_escape(&self.helpers.config().title),
            cards: cards.iter().map(CardData::from).collect(),
            trailing: trailing.map(|f| f.as_str().to_string()),
        };

        Ok(self.renderer.render_list(&list)?)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Media;

    fn view() -> ArticleListView {
        ArticleListView::new(SiteConfig::default()).unwrap()
    }

    fn article(id: u64, slug: &str) -> Article {
        let mut article = Article::new(id, "Hello World", slug, "2024-01-15T10:30:00.000Z");
        article.description = "A first post".to_string();
        article.category = Some(Category::new("Tech", "tech"));
        article
    }

    fn with_authors(mut article: Article, names: &[&str]) -> Article {
        article.author_bios = Some(
            names
                .iter()
                .enumerate()
                .map(|(i, name)| AuthorBio::new(i as u64 + 1, name))
                .collect(),
        );
        article
    }

    fn card(article: &Article) -> Card {
        let view = view();
        view.cards(std::slice::from_ref(article)).unwrap().remove(0)
    }

    #[test]
    fn test_card_count_matches_input() {
        let view = view();
        for n in [0, 1, 4] {
            let articles: Vec<_> = (0..n).map(|i| article(i, &format!("post-{}", i))).collect();
            let html = view.render(&articles, None).unwrap();
            assert_eq!(html.matches("<a href=").count(), n as usize);
        }
    }

    #[test]
    fn test_link_path() {
        let card = card(&article(1, "hello-world"));
        assert_eq!(card.href, "/blog/tech/hello-world");

        let html = view().render(&[article(1, "hello-world")], None).unwrap();
        assert!(html.contains(r#"href="/blog/tech/hello-world""#));
    }

    #[test]
    fn test_no_cover_no_image() {
        let html = view().render(&[article(1, "a")], None).unwrap();
        assert!(!html.contains(r#"alt="presentation""#));
    }

    #[test]
    fn test_cover_resolved() {
        let mut a = article(1, "a");
        a.cover = Some(Media::new("/uploads/cover.png"));
        let card = card(&a);
        assert_eq!(
            card.image_url.as_deref(),
            Some("http://localhost:1337/uploads/cover.png")
        );

        let html = view().render(&[a], None).unwrap();
        assert!(html.contains(r#"src="http://localhost:1337/uploads/cover.png""#));
    }

    #[test]
    fn test_empty_bios_no_byline() {
        let a = with_authors(article(1, "a"), &[]);
        let card = card(&a);
        assert_eq!(card.byline, None);
        assert_eq!(card.avatar_url, None);

        let html = view().render(&[a], None).unwrap();
        assert!(html.contains(r#"<span class="text-xs dark:text-gray-400"></span>"#));
    }

    #[test]
    fn test_byline_separators() {
        assert_eq!(card(&with_authors(article(1, "a"), &["Ada"])).byline.as_deref(), Some("Ada"));
        assert_eq!(
            card(&with_authors(article(1, "a"), &["Ada", "Grace"])).byline.as_deref(),
            Some("Ada & Grace")
        );
        assert_eq!(
            card(&with_authors(article(1, "a"), &["Ada", "Grace", "Linus"]))
                .byline
                .as_deref(),
            Some("Ada & Grace & Linus")
        );
    }

    #[test]
    fn test_byline_escaped_in_html() {
        let html = view()
            .render(&[with_authors(article(1, "a"), &["Ada", "Grace"])], None)
            .unwrap();
        assert!(html.contains("Ada &amp; Grace"));
        assert!(!html.contains("Grace &amp;"));
    }

    #[test]
    fn test_only_first_author_avatar() {
        let mut a = article(1, "a");
        a.author_bios = Some(vec![
            AuthorBio::new(1, "Ada").with_avatar("/uploads/ada.png"),
            AuthorBio::new(2, "Grace").with_avatar("/uploads/grace.png"),
        ]);
        let html = view().render(&[a], None).unwrap();
        assert_eq!(html.matches(r#"alt="avatar""#).count(), 1);
        assert!(html.contains("/uploads/ada.png"));
        assert!(!html.contains("/uploads/grace.png"));
    }

    #[test]
    fn test_first_author_without_avatar() {
        let mut a = article(1, "a");
        a.author_bios = Some(vec![
            AuthorBio::new(1, "Ada"),
            AuthorBio::new(2, "Grace").with_avatar("/uploads/grace.png"),
        ]);
        let card = card(&a);
        assert_eq!(card.avatar_url, None);
        assert_eq!(card.byline.as_deref(), Some("Ada & Grace"));

        let html = view().render(&[a], None).unwrap();
        assert!(!html.contains(r#"alt="avatar""#));
    }

    #[test]
    fn test_missing_category_fallback() {
        let mut a = article(1, "hello-world");
        a.category = None;
        assert_eq!(card(&a).href, "/blog/uncategorized/hello-world");
    }

    #[test]
    fn test_missing_category_fallback_with_empty_default() {
        let mut config = SiteConfig::default();
        config.default_category = String::new();
        let view = ArticleListView::new(config).unwrap();

        let mut a = article(1, "hello");
        a.category = None;
        let cards = view.cards(&[a]).unwrap();
        assert_eq!(cards[0].href, "/blog/uncategorized/hello");
    }

    #[test]
    fn test_missing_category_reject() {
        let mut config = SiteConfig::default();
        config.missing_category = MissingCategory::Reject;
        let view = ArticleListView::new(config).unwrap();

        let mut a = article(9, "orphan");
        a.category = None;
        match view.render(&[a], None) {
            Err(ViewError::MissingCategory { id, slug }) => {
                assert_eq!(id, 9);
                assert_eq!(slug, "orphan");
            }
            other => panic!("expected missing category error, got {:?}", other),
        }
    }

    #[test]
    fn test_date_label() {
        let card = card(&article(1, "a"));
        assert_eq!(card.date, "January 15, 2024");
    }

    #[test]
    fn test_text_is_escaped() {
        let mut a = article(1, "a");
        a.title = "<script>alert(1)</script>".to_string();
        let html = view().render(&[a], None).unwrap();
        assert!(html.contains("&lt;script&gt;"));
        assert!(!html.contains("<script>"));
    }

    #[test]
    fn test_trailing_fragment_after_grid() {
        let trailing = Fragment::new(r#"<button class="load-more">Load more</button>"#);
        let html = view().render(&[article(1, "a")], Some(&trailing)).unwrap();

        let grid_end = html.rfind("</div>").unwrap();
        let button = html.find("<button").unwrap();
        assert!(button > grid_end);
        assert!(html.contains(trailing.as_str()));
    }

    #[test]
    fn test_render_is_idempotent() {
        let view = view();
        let articles = vec![
            with_authors(article(1, "a"), &["Ada", "Grace"]),
            article(2, "b"),
        ];
        let snapshot = articles.clone();

        let first = view.render(&articles, None).unwrap();
        let second = view.render(&articles, None).unwrap();
        assert_eq!(first, second);
        assert_eq!(articles, snapshot);
    }

    #[test]
    fn test_input_order_preserved() {
        let cards = view()
            .cards(&[article(3, "c"), article(1, "a"), article(2, "b")])
            .unwrap();
        let ids: Vec<u64> = cards.iter().map(|c| c.id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
    }
}

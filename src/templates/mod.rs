//! Built-in card templates using Tera template engine
//!
//! Templates are embedded in the binary. Autoescaping is off: values are
//! escaped when the template data is built, so link paths keep their
//! slashes and the trailing fragment can be inserted verbatim.

use serde::Serialize;
use tera::{Context, Tera};

use crate::helpers::html_escape;
use crate::view::Card;

/// Template renderer with the embedded card templates
#[derive(Debug)]
pub struct TemplateRenderer {
    tera: Tera,
}

impl TemplateRenderer {
    /// Create a new renderer with all templates loaded
    pub fn new() -> tera::Result<Self> {
        let mut tera = Tera::default();
        tera.autoescape_on(vec![]);

        tera.add_raw_templates(vec![
            ("post_list.html", include_str!("cards/post_list.html")),
            (
                "partials/card.html",
                include_str!("cards/partials/card.html"),
            ),
        ])?;

        Ok(Self { tera })
    }

    /// Render a template with given context
    pub fn render(&self, template_name: &str, context: &Context) -> tera::Result<String> {
        self.tera.render(template_name, context)
    }

    /// Render the card grid
    pub fn render_list(&self, list: &ListData) -> tera::Result<String> {
        let context = Context::from_serialize(list)?;
        self.render("post_list.html", &context)
    }
}

// Data structures for template context

#[derive(Debug, Clone, Serialize)]
pub struct ListData {
    pub title: String,
    pub cards: Vec<CardData>,
    pub trailing: Option<String>,
}

/// A card with every value escaped for HTML
#[derive(Debug, Clone, Serialize)]
pub struct CardData {
    pub id: u64,
    pub href: String,
    pub image_url: Option<String>,
    pub avatar_url: Option<String>,
    pub title: String,
    pub date: String,
    pub datetime: String,
    pub byline: Option<String>,
    pub description: String,
}

impl From<&Card> for CardData {
    fn from(card: &Card) -> Self {
        Self {
            id: card.id,
            href: html_escape(&card.href),
            image_url: card.image_url.as_deref().map(html_escape),
            avatar_url: card.avatar_url.as_deref().map(html_escape),
            title: html_escape(&card.title),
            date: html_escape(&card.date),
            datetime: html_escape(&card.published_at),
            byline: card.byline.as_deref().map(html_escape),
            description: html_escape(&card.description),
        }
    }
}

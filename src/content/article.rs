//! Article models as handed to the list view

/// A blog article exported from the CMS
#[derive(Debug, Clone, PartialEq)]
pub struct Article {
    /// CMS identifier, unique within one export
    pub id: u64,

    /// Article title
    pub title: String,

    /// Short summary shown on the card
    pub description: String,

    /// URL-friendly name, used verbatim in links
    pub slug: String,

    /// Publication timestamp (ISO-8601)
    pub published_at: String,

    /// Creation timestamp
    pub created_at: Option<String>,

    /// Last update timestamp
    pub updated_at: Option<String>,

    /// Cover image
    pub cover: Option<Media>,

    /// Category the article is filed under
    pub category: Option<Category>,

    /// Authors in byline order
    pub author_bios: Option<Vec<AuthorBio>>,
}

impl Article {
    /// Create an article with only the required fields set
    pub fn new(id: u64, title: &str, slug: &str, published_at: &str) -> Self {
        Self {
            id,
            title: title.to_string(),
            description: String::new(),
            slug: slug.to_string(),
            published_at: published_at.to_string(),
            created_at: None,
            updated_at: None,
            cover: None,
            category: None,
            author_bios: None,
        }
    }

    /// Author bios, with an empty list treated the same as no list
    pub fn authors(&self) -> Option<&[AuthorBio]> {
        self.author_bios
            .as_deref()
            .filter(|bios| !bios.is_empty())
    }

    /// The first listed author, if any
    pub fn first_author(&self) -> Option<&AuthorBio> {
        self.authors().and_then(|bios| bios.first())
    }
}

/// A media asset reference
#[derive(Debug, Clone, PartialEq)]
pub struct Media {
    pub url: String,
}

impl Media {
    pub fn new(url: &str) -> Self {
        Self {
            url: url.to_string(),
        }
    }
}

/// A category reference
#[derive(Debug, Clone, PartialEq)]
pub struct Category {
    pub name: String,
    pub slug: String,
}

impl Category {
    pub fn new(name: &str, slug: &str) -> Self {
        Self {
            name: name.to_string(),
            slug: slug.to_string(),
        }
    }
}

/// An author profile attached to an article
#[derive(Debug, Clone, PartialEq)]
pub struct AuthorBio {
    pub id: u64,
    pub name: String,
    pub email: String,
    pub avatar: Option<Media>,
}

impl AuthorBio {
    pub fn new(id: u64, name: &str) -> Self {
        Self {
            id,
            name: name.to_string(),
            email: String::new(),
            avatar: None,
        }
    }

    /// Attach an avatar image
    pub fn with_avatar(mut self, url: &str) -> Self {
        self.avatar = Some(Media::new(url));
        self
    }
}

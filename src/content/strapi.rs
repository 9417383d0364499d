//! Strapi response decoding
//!
//! The CMS wraps every entity as `{ id, attributes }` and every relation as
//! `{ data: ... }`, where `data` may be `null`. These wire types mirror that
//! nesting and are flattened into [`Article`] right after decoding, so nothing
//! downstream has to walk the envelope.

use serde::de::Error as _;
use serde::Deserialize;
use serde_json::Value;

use super::{Article, AuthorBio, Category, ContentError, Media};

/// Top-level response body
///
/// `data` is kept as a raw value so each entry decodes on its own and errors
/// can name the entry they came from.
#[derive(Debug, Deserialize)]
struct Response {
    data: Value,
}

#[derive(Debug, Deserialize)]
struct Entry<A> {
    id: u64,
    attributes: A,
}

/// Relation entries that carry no id we care about
#[derive(Debug, Deserialize)]
struct Attributes<A> {
    attributes: A,
}

#[derive(Debug, Deserialize)]
struct Relation<T> {
    data: Option<T>,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct ArticleAttributes {
    // Required, but optional here so a missing or null value names the field
    #[serde(default)]
    title: Option<String>,
    #[serde(default)]
    description: Option<String>,
    #[serde(default)]
    slug: Option<String>,
    #[serde(default)]
    published_at: Option<String>,
    #[serde(default)]
    created_at: Option<String>,
    #[serde(default)]
    updated_at: Option<String>,
    #[serde(default)]
    cover: Option<Relation<Attributes<MediaAttributes>>>,
    #[serde(default)]
    category: Option<Relation<Attributes<CategoryAttributes>>>,
    #[serde(default, rename = "authors_bios", alias = "authorsBios")]
    authors_bios: Option<Relation<Vec<Entry<AuthorAttributes>>>>,
}

#[derive(Debug, Deserialize)]
struct MediaAttributes {
    url: String,
}

#[derive(Debug, Deserialize)]
struct CategoryAttributes {
    name: String,
    slug: String,
}

#[derive(Debug, Deserialize)]
struct AuthorAttributes {
    name: String,
    #[serde(default)]
    email: Option<String>,
    #[serde(default)]
    avatar: Option<Relation<Attributes<MediaAttributes>>>,
}

/// Parse a Strapi article response into articles, in response order
pub fn parse_articles(json: &str) -> Result<Vec<Article>, ContentError> {
    let response: Response = serde_json::from_str(json)?;

    match response.data {
        Value::Array(entries) => entries
            .into_iter()
            .enumerate()
            .map(|(index, entry)| decode_entry(index, entry))
            .collect(),
        // Single-entry endpoints
        entry @ Value::Object(_) => Ok(vec![decode_entry(0, entry)?]),
        // Single-entry endpoints answer a missing entry with `data: null`
        Value::Null => {
            tracing::debug!("Response has no data, no articles loaded");
            Ok(Vec::new())
        }
        other => Err(ContentError::Json(serde_json::Error::custom(format!(
            "expected `data` to be an array or object, found {}",
            other
        )))),
    }
}

fn decode_entry(index: usize, value: Value) -> Result<Article, ContentError> {
    let entry = entry_label(index, value.get("id").and_then(Value::as_u64));
    let decoded: Entry<ArticleAttributes> =
        serde_json::from_value(value).map_err(|source| ContentError::Entry {
            entry: entry.clone(),
            source,
        })?;
    into_article(decoded, &entry)
}

fn entry_label(index: usize, id: Option<u64>) -> String {
    match id {
        Some(id) => format!("#{} (id {})", index, id),
        None => format!("#{}", index),
    }
}

fn require(
    value: Option<String>,
    field: &'static str,
    entry: &str,
) -> Result<String, ContentError> {
    value.ok_or_else(|| ContentError::MissingField {
        entry: entry.to_string(),
        field,
    })
}

fn into_article(
    entry: Entry<ArticleAttributes>,
    label: &str,
) -> Result<Article, ContentError> {
    let attrs = entry.attributes;

    let author_bios = attrs
        .authors_bios
        .and_then(|rel| rel.data)
        .map(|bios| bios.into_iter().map(into_author).collect());

    Ok(Article {
        id: entry.id,
        title: require(attrs.title, "title", label)?,
        description: attrs.description.unwrap_or_default(),
        slug: require(attrs.slug, "slug", label)?,
        published_at: require(attrs.published_at, "publishedAt", label)?,
        created_at: attrs.created_at,
        updated_at: attrs.updated_at,
        cover: into_media(attrs.cover),
        category: attrs.category.and_then(|rel| rel.data).map(|c| Category {
            name: c.attributes.name,
            slug: c.attributes.slug,
        }),
        author_bios,
    })
}

fn into_author(entry: Entry<AuthorAttributes>) -> AuthorBio {
    AuthorBio {
        id: entry.id,
        name: entry.attributes.name,
        email: entry.attributes.email.unwrap_or_default(),
        avatar: into_media(entry.attributes.avatar),
    }
}

fn into_media(relation: Option<Relation<Attributes<MediaAttributes>>>) -> Option<Media> {
    relation.and_then(|rel| rel.data).map(|m| Media {
        url: m.attributes.url,
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    const FULL: &str = r#"{
  "data": [
    {
      "id": 3,
      "attributes": {
        "title": "Hello World",
        "description": "First post",
        "slug": "hello-world",
        "createdAt": "2024-01-14T09:00:00.000Z",
        "updatedAt": "2024-01-15T11:00:00.000Z",
        "publishedAt": "2024-01-15T10:30:00.000Z",
        "cover": { "data": { "id": 9, "attributes": { "url": "/uploads/cover.png" } } },
        "category": { "data": { "id": 2, "attributes": { "name": "Tech", "slug": "tech" } } },
        "authors_bios": {
          "data": [
            {
              "id": 11,
              "attributes": {
                "name": "Ada",
                "email": "ada@example.com",
                "avatar": { "data": { "attributes": { "url": "/uploads/ada.png" } } }
              }
            },
            { "id": 12, "attributes": { "name": "Grace", "email": "grace@example.com" } }
          ]
        }
      }
    }
  ],
  "meta": { "pagination": { "page": 1, "pageSize": 25, "pageCount": 1, "total": 1 } }
}"#;

    #[test]
    fn test_parse_full_entry() {
        let articles = parse_articles(FULL).unwrap();
        assert_eq!(articles.len(), 1);

        let article = &articles[0];
        assert_eq!(article.id, 3);
        assert_eq!(article.slug, "hello-world");
        assert_eq!(article.published_at, "2024-01-15T10:30:00.000Z");
        assert_eq!(article.cover, Some(Media::new("/uploads/cover.png")));
        assert_eq!(article.category, Some(Category::new("Tech", "tech")));

        let bios = article.author_bios.as_ref().unwrap();
        assert_eq!(bios.len(), 2);
        assert_eq!(bios[0].avatar, Some(Media::new("/uploads/ada.png")));
        assert_eq!(bios[1].avatar, None);
    }

    #[test]
    fn test_parse_null_relations() {
        let json = r#"{"data": [{"id": 1, "attributes": {
            "title": "Bare", "slug": "bare", "publishedAt": "2024-02-01T00:00:00Z",
            "cover": {"data": null},
            "category": {"data": null},
            "authors_bios": null
        }}]}"#;
        let articles = parse_articles(json).unwrap();
        let article = &articles[0];
        assert!(article.cover.is_none());
        assert!(article.category.is_none());
        assert!(article.author_bios.is_none());
        assert_eq!(article.description, "");
    }

    #[test]
    fn test_parse_missing_relations() {
        let json = r#"{"data": [{"id": 1, "attributes": {
            "title": "Bare", "slug": "bare", "publishedAt": "2024-02-01T00:00:00Z",
            "cover": {},
            "authors_bios": {"data": null}
        }}]}"#;
        let article = &parse_articles(json).unwrap()[0];
        assert!(article.cover.is_none());
        assert!(article.category.is_none());
        assert!(article.author_bios.is_none());
    }

    #[test]
    fn test_parse_single_entry() {
        let json = r#"{"data": {"id": 5, "attributes": {
            "title": "One", "slug": "one", "publishedAt": "2024-02-01T00:00:00Z"
        }}}"#;
        let articles = parse_articles(json).unwrap();
        assert_eq!(articles.len(), 1);
        assert_eq!(articles[0].id, 5);
    }

    #[test]
    fn test_parse_null_data() {
        assert!(parse_articles(r#"{"data": null}"#).unwrap().is_empty());
        assert!(matches!(
            parse_articles(r#"{"data": "nope"}"#),
            Err(ContentError::Json(_))
        ));
    }

    #[test]
    fn test_parse_missing_slug_names_field() {
        let json = r#"{"data": [
            {"id": 1, "attributes": {"title": "Ok", "slug": "ok", "publishedAt": "2024-02-01T00:00:00Z"}},
            {"id": 4, "attributes": {"title": "No slug", "publishedAt": "2024-02-01T00:00:00Z"}}
        ]}"#;
        let err = parse_articles(json).unwrap_err();
        match &err {
            ContentError::MissingField { entry, field } => {
                assert_eq!(entry, "#1 (id 4)");
                assert_eq!(*field, "slug");
            }
            other => panic!("expected missing field error, got {:?}", other),
        }
        assert_eq!(err.to_string(), "Article #1 (id 4) is missing `slug`");
    }

    #[test]
    fn test_parse_null_published_at_names_field() {
        let json = r#"{"data": [{"id": 1, "attributes": {"title": "Draft", "slug": "draft", "publishedAt": null}}]}"#;
        let err = parse_articles(json).unwrap_err();
        let message = err.to_string();
        assert!(message.contains("publishedAt"), "{}", message);
        assert!(message.contains("id 1"), "{}", message);
    }

    #[test]
    fn test_parse_wrong_type_names_entry() {
        let json = r#"{"data": [{"id": 7, "attributes": {"title": "T", "slug": 5, "publishedAt": "2024-02-01T00:00:00Z"}}]}"#;
        let err = parse_articles(json).unwrap_err();
        assert!(matches!(err, ContentError::Entry { .. }));
        assert!(err.to_string().contains("#0 (id 7)"));
    }
}

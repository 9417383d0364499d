//! URL helper functions

/// Resolve a CMS media path to a URL the browser can load
///
/// Relative upload paths are served by the CMS itself, so they are joined
/// onto `base_url`. Absolute URLs (CDN uploads) pass through untouched.
///
/// # Examples
/// ```ignore
/// strapi_media("http://localhost:1337", Some("/uploads/a.png")) // -> Some("http://localhost:1337/uploads/a.png")
/// strapi_media("http://localhost:1337", None)                   // -> None
/// ```
pub fn strapi_media(base_url: &str, path: Option<&str>) -> Option<String> {
    let path = path.map(str::trim).filter(|p| !p.is_empty())?;

    if path.starts_with("http://") || path.starts_with("https://") || path.starts_with("//") {
        return Some(path.to_string());
    }

    let base = base_url.trim_end_matches('/');
    Some(format!("{}/{}", base, path.trim_start_matches('/')))
}

/// Build the link path of an article
///
/// Slugs are used verbatim; the CMS owns their encoding.
///
/// # Examples
/// ```ignore
/// article_path("blog", "tech", "hello-world") // -> "/blog/tech/hello-world"
/// ```
pub fn article_path(blog_dir: &str, category_slug: &str, slug: &str) -> String {
    let blog_dir = blog_dir.trim_matches('/');

    if blog_dir.is_empty() {
        format!("/{}/{}", category_slug, slug)
    } else {
        format!("/{}/{}/{}", blog_dir, category_slug, slug)
    }
}

//! Slug derivation shared by both normalizers and the tag indexer.
//!
//! Slugs are the literal path segments used by routing (`/blog/<slug>`,
//! `/blog/tags/<slug>`), so every source has to produce them the same way:
//!
//! - `my-post.md` → `my-post` (local content ids lose their extension)
//! - `https://www.freecodecamp.org/news/my-awesome-article/` → `my-awesome-article`
//! - `"Web Development"` → `web-development` (tag terms)

use url::Url;

/// File extensions of local content entries.
pub const CONTENT_EXTENSIONS: &[&str] = &["md", "mdx", "markdown"];

/// Strip a trailing content-file extension from a local post id.
///
/// Only known content extensions are removed; `"notes.v2"` stays as is.
pub fn strip_content_extension(id: &str) -> &str {
    if let Some(dot_pos) = id.rfind('.') {
        let ext = &id[dot_pos + 1..];
        if CONTENT_EXTENSIONS
            .iter()
            .any(|known| ext.eq_ignore_ascii_case(known))
        {
            return &id[..dot_pos];
        }
    }
    id
}

/// Last non-empty path segment of an absolute URL.
///
/// Returns `None` for unparseable URLs and URLs with an empty path.
pub fn slug_from_url(url: &str) -> Option<String> {
    let parsed = Url::parse(url.trim()).ok()?;
    parsed
        .path_segments()?
        .filter(|segment| !segment.is_empty())
        .next_back()
        .map(String::from)
}

/// Tag slug from a category term: lowercased, whitespace runs become `-`.
pub fn tag_slug(term: &str) -> String {
    term.split_whitespace()
        .map(str::to_lowercase)
        .collect::<Vec<_>>()
        .join("-")
}

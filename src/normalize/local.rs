//! Local markdown posts → [`LightweightPost`].
//!
//! Field resolution (first available wins):
//!
//! - **slug**: frontmatter `slug` → id with `.md`/`.mdx`/`.markdown` stripped
//! - **title**: frontmatter `title` → placeholder
//! - **brief**: frontmatter `brief` → first prose body line, skipping headings and MDX imports (capped) → `""`
//! - **cover image**: string URL or `{ src, alt }` object → absent
//! - **reading time**: frontmatter `readingTime` → body word count / speed

use super::raw::{CoverImageField, RawLocalPost, TagField};
use super::text::{brief_from_body, reading_time, resolve};
use crate::config::PostsConfig;
use crate::naming::{strip_content_extension, tag_slug};
use crate::types::{CoverImage, LightweightPost, PostData, PostSource, Tag};

/// Normalize local posts with stock settings.
pub fn normalize_local_posts(raw: impl IntoIterator<Item = RawLocalPost>) -> Vec<LightweightPost> {
    normalize_local_posts_with(raw, &PostsConfig::default())
}

pub fn normalize_local_posts_with(
    raw: impl IntoIterator<Item = RawLocalPost>,
    config: &PostsConfig,
) -> Vec<LightweightPost> {
    raw.into_iter()
        .map(|post| normalize_local_post(post, config))
        .collect()
}

fn normalize_local_post(raw: RawLocalPost, config: &PostsConfig) -> LightweightPost {
    let RawLocalPost { id, body, data } = raw;
    let body = body.unwrap_or_default();

    let slug = resolve(&[data.slug.as_deref(), Some(strip_content_extension(&id))])
        .unwrap_or_else(|| id.clone());
    let title = resolve(&[data.title.as_deref()])
        .unwrap_or_else(|| config.placeholder_title.clone());
    let body_brief = brief_from_body(&body, config.brief_max_chars);
    let brief = resolve(&[data.brief.as_deref(), body_brief.as_deref()]).unwrap_or_default();
    let reading_time = match data.reading_time {
        Some(minutes) => minutes.max(1),
        None => reading_time(&body, config.words_per_minute),
    };

    LightweightPost {
        id,
        data: PostData {
            slug,
            title,
            brief,
            cover_image: data.cover_image.and_then(cover_image),
            tags: data.tags.unwrap_or_default().into_iter().filter_map(tag).collect(),
            published_at: data.published_at,
            reading_time,
            source: PostSource::Hashnode,
            external_url: None,
        },
    }
}

fn cover_image(field: CoverImageField) -> Option<CoverImage> {
    let (url, alt) = match field {
        CoverImageField::Url(url) => (Some(url), None),
        CoverImageField::Object { src, alt } => (src, alt),
    };
    let url = resolve(&[url.as_deref()])?;
    Some(CoverImage {
        url,
        alt: resolve(&[alt.as_deref()]),
    })
}

fn tag(field: TagField) -> Option<Tag> {
    let (name, slug) = match field {
        TagField::Name(name) => (name, None),
        TagField::Tag { name, slug } => (name, slug),
    };
    let name = name.trim().to_string();
    let slug = resolve(&[slug.as_deref()]).unwrap_or_else(|| tag_slug(&name));
    (!name.is_empty() && !slug.is_empty()).then_some(Tag { name, slug })
}

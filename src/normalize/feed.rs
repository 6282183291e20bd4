//! freeCodeCamp feed entries → [`LightweightPost`].
//!
//! Every entry field may be missing or null; each has a defined default and
//! normalization never fails:
//!
//! - **id**: namespace prefix + entry id
//! - **slug**: last path segment of the entry URL → entry id
//! - **title**: entry title → placeholder
//! - **brief**: description → `""` (no body-derived fallback for this source)
//! - **cover image**: first media URL → image URL → absent
//! - **tags**: categories; label is the name, lowercased hyphenated term is the slug
//! - **reading time**: words of content → description → `""`
//! - **published**: entry date → the normalization time

use chrono::{DateTime, Utc};

use super::raw::{FeedCategory, FeedEntry, RawFeedPost};
use super::text::{reading_time, resolve};
use crate::config::PostsConfig;
use crate::naming::{slug_from_url, tag_slug};
use crate::types::{CoverImage, LightweightPost, PostData, PostSource, Tag};

/// Normalize feed posts with stock settings, stamping undated entries with now.
pub fn normalize_freecodecamp_posts(
    raw: impl IntoIterator<Item = RawFeedPost>,
) -> Vec<LightweightPost> {
    normalize_freecodecamp_posts_at(raw, &PostsConfig::default(), Utc::now())
}

/// Normalize feed posts; `now` is the date given to entries without one.
pub fn normalize_freecodecamp_posts_at(
    raw: impl IntoIterator<Item = RawFeedPost>,
    config: &PostsConfig,
    now: DateTime<Utc>,
) -> Vec<LightweightPost> {
    raw.into_iter()
        .map(|post| normalize_feed_post(post, config, now))
        .collect()
}

fn normalize_feed_post(raw: RawFeedPost, config: &PostsConfig, now: DateTime<Utc>) -> LightweightPost {
    let RawFeedPost { id, data } = raw;
    let FeedEntry {
        title,
        url,
        description,
        content,
        published_at,
        media,
        image,
        categories,
    } = data;

    let slug = url
        .as_deref()
        .and_then(slug_from_url)
        .unwrap_or_else(|| id.clone());

    let reading_source = resolve(&[content.as_deref(), description.as_deref()]).unwrap_or_default();

    let cover_url = media
        .unwrap_or_default()
        .into_iter()
        .next()
        .and_then(|m| m.url)
        .filter(|u| !u.trim().is_empty())
        .or_else(|| image.and_then(|i| i.url))
        .filter(|u| !u.trim().is_empty());

    if published_at.is_none() {
        tracing::debug!(id = %id, "feed entry has no date, using normalization time");
    }

    LightweightPost {
        id: format!("{}{}", config.external_id_prefix, id),
        data: PostData {
            slug,
            title: resolve(&[title.as_deref()])
                .unwrap_or_else(|| config.placeholder_title.clone()),
            brief: resolve(&[description.as_deref()]).unwrap_or_default(),
            cover_image: cover_url.map(|url| CoverImage { url, alt: None }),
            tags: categories
                .unwrap_or_default()
                .into_iter()
                .filter_map(category_tag)
                .collect(),
            published_at: published_at.unwrap_or(now),
            reading_time: reading_time(&reading_source, config.words_per_minute),
            source: PostSource::FreeCodeCamp,
            external_url: resolve(&[url.as_deref()]),
        },
    }
}

fn category_tag(category: FeedCategory) -> Option<Tag> {
    let label = resolve(&[category.label.as_deref()]);
    let term = resolve(&[category.term.as_deref()]);
    let name = label.clone().or_else(|| term.clone())?;
    let slug = tag_slug(term.as_deref().or(label.as_deref())?);
    (!slug.is_empty()).then_some(Tag { name, slug })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::normalize::raw::{FeedImage, FeedMedia};
    use crate::test_helpers::{date, feed_post};

    fn normalize(raw: RawFeedPost) -> LightweightPost {
        normalize_freecodecamp_posts_at(vec![raw], &PostsConfig::default(), date("2030-06-01"))
            .remove(0)
    }

    #[test]
    fn full_entry() {
        let mut raw = feed_post("abc123", "https://www.freecodecamp.org/news/my-awesome-article/");
        raw.data.title = Some("My Awesome Article".into());
        raw.data.description = Some("A short summary.".into());
        raw.data.published_at = Some(date("2025-01-15"));

        let post = normalize(raw);
        assert_eq!(post.id, "freecodecamp-abc123");
        assert_eq!(post.data.slug, "my-awesome-article");
        assert_eq!(post.data.title, "My Awesome Article");
        assert_eq!(post.data.brief, "A short summary.");
        assert_eq!(post.data.published_at, date("2025-01-15"));
        assert_eq!(post.data.source, PostSource::FreeCodeCamp);
        assert_eq!(
            post.data.external_url.as_deref(),
            Some("https://www.freecodecamp.org/news/my-awesome-article/")
        );
    }

    #[test]
    fn every_field_missing() {
        let raw = RawFeedPost {
            id: "lonely".into(),
            data: FeedEntry::default(),
        };
        let post = normalize(raw);
        assert_eq!(post.id, "freecodecamp-lonely");
        assert_eq!(post.data.slug, "lonely");
        assert_eq!(post.data.title, "Untitled");
        assert_eq!(post.data.brief, "");
        assert!(post.data.tags.is_empty());
        assert_eq!(post.data.reading_time, 1);
        assert_eq!(post.data.cover_image, None);
        assert_eq!(post.data.external_url, None);
        assert_eq!(post.data.published_at, date("2030-06-01"));
    }

    #[test]
    fn every_field_null_from_json() {
        let raw: RawFeedPost = serde_json::from_str(
            r#"{"id": "n", "data": {"title": null, "url": null, "description": null,
                "content": null, "publishedAt": null, "media": null, "image": null,
                "categories": null}}"#,
        )
        .unwrap();
        let post = normalize(raw);
        assert_eq!(post.data.title, "Untitled");
        assert_eq!(post.data.brief, "");
        assert!(post.data.tags.is_empty());
        assert_eq!(post.data.reading_time, 1);
    }

    #[test]
    fn unparseable_url_falls_back_to_id() {
        let post = normalize(feed_post("xyz", "not a url"));
        assert_eq!(post.data.slug, "xyz");
    }

    #[test]
    fn cover_prefers_first_media_entry() {
        let mut raw = feed_post("1", "https://example.com/news/a/");
        raw.data.media = Some(vec![
            FeedMedia {
                url: Some("https://cdn.example.com/first.png".into()),
            },
            FeedMedia {
                url: Some("https://cdn.example.com/second.png".into()),
            },
        ]);
        raw.data.image = Some(FeedImage {
            url: Some("https://cdn.example.com/image.png".into()),
        });
        let post = normalize(raw);
        assert_eq!(
            post.data.cover_image.unwrap().url,
            "https://cdn.example.com/first.png"
        );
    }

    #[test]
    fn cover_falls_back_to_image_field() {
        let mut raw = feed_post("1", "https://example.com/news/a/");
        raw.data.media = Some(vec![FeedMedia { url: None }]);
        raw.data.image = Some(FeedImage {
            url: Some("https://cdn.example.com/image.png".into()),
        });
        let post = normalize(raw);
        assert_eq!(
            post.data.cover_image.unwrap().url,
            "https://cdn.example.com/image.png"
        );
    }

    #[test]
    fn categories_become_tags() {
        let mut raw = feed_post("1", "https://example.com/news/a/");
        raw.data.categories = Some(vec![
            FeedCategory {
                label: Some("Web Development".into()),
                term: Some("Web Development".into()),
            },
            FeedCategory {
                label: Some("JavaScript".into()),
                term: Some("JavaScript".into()),
            },
            FeedCategory {
                label: None,
                term: Some("Open Source".into()),
            },
            FeedCategory {
                label: None,
                term: None,
            },
        ]);
        let post = normalize(raw);
        assert_eq!(
            post.data.tags,
            vec![
                Tag::new("Web Development", "web-development"),
                Tag::new("JavaScript", "javascript"),
                Tag::new("Open Source", "open-source"),
            ]
        );
    }

    #[test]
    fn reading_time_prefers_content_over_description() {
        let mut raw = feed_post("1", "https://example.com/news/a/");
        raw.data.content = Some("word ".repeat(650));
        raw.data.description = Some("short".into());
        assert_eq!(normalize(raw).data.reading_time, 4);

        let mut raw = feed_post("2", "https://example.com/news/b/");
        raw.data.description = Some("word ".repeat(401));
        assert_eq!(normalize(raw).data.reading_time, 3);
    }

    #[test]
    fn brief_never_derived_from_content() {
        let mut raw = feed_post("1", "https://example.com/news/a/");
        raw.data.content = Some("Content paragraph that is not a brief.".into());
        assert_eq!(normalize(raw).data.brief, "");
    }

    #[test]
    fn custom_prefix() {
        let config = PostsConfig {
            external_id_prefix: "fcc:".into(),
            ..PostsConfig::default()
        };
        let posts = normalize_freecodecamp_posts_at(
            vec![feed_post("9", "https://example.com/news/nine/")],
            &config,
            date("2030-06-01"),
        );
        assert_eq!(posts[0].id, "fcc:9");
    }

    #[test]
    fn undated_entries_use_current_time() {
        let before = Utc::now();
        let posts = normalize_freecodecamp_posts(vec![feed_post("1", "https://example.com/news/a/")]);
        let after = Utc::now();
        assert!(posts[0].data.published_at >= before);
        assert!(posts[0].data.published_at <= after);
    }
}

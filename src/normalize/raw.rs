//! Raw record shapes handed to the normalizers.
//!
//! Each source has its own shape, enumerated explicitly here and never
//! propagated past normalization. Everything optional is `Option` and
//! tolerates `null`, because upstream content is edited by hand (frontmatter)
//! or owned by someone else (the feed).

use chrono::{DateTime, Utc};
use serde::{Deserialize, Deserializer, Serialize};

// ============================================================================
// Local markdown posts
// ============================================================================

/// One markdown file: id (path relative to the content root), body, frontmatter.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RawLocalPost {
    pub id: String,
    #[serde(default)]
    pub body: Option<String>,
    pub data: LocalFrontmatter,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LocalFrontmatter {
    #[serde(default)]
    pub title: Option<String>,
    #[serde(default)]
    pub slug: Option<String>,
    #[serde(default)]
    pub brief: Option<String>,
    #[serde(default)]
    pub cover_image: Option<CoverImageField>,
    #[serde(default)]
    pub tags: Option<Vec<TagField>>,
    /// Required: a local post without a date is a content error.
    #[serde(deserialize_with = "crate::dates::deserialize")]
    pub published_at: DateTime<Utc>,
    #[serde(default)]
    pub reading_time: Option<u32>,
}

/// Cover image as written in frontmatter: a bare URL or an image object.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CoverImageField {
    Url(String),
    Object {
        #[serde(default)]
        src: Option<String>,
        #[serde(default)]
        alt: Option<String>,
    },
}

/// Tag as written in frontmatter: a bare name or a `{ name, slug }` pair.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum TagField {
    Name(String),
    Tag {
        name: String,
        #[serde(default)]
        slug: Option<String>,
    },
}

// ============================================================================
// External feed posts
// ============================================================================

/// One feed entry. `id` is the entry's own id (guid), not yet namespaced.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct RawFeedPost {
    pub id: String,
    #[serde(default, deserialize_with = "null_as_default")]
    pub data: FeedEntry,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct FeedEntry {
    pub title: Option<String>,
    pub url: Option<String>,
    pub description: Option<String>,
    pub content: Option<String>,
    #[serde(deserialize_with = "crate::dates::deserialize_option")]
    pub published_at: Option<DateTime<Utc>>,
    pub media: Option<Vec<FeedMedia>>,
    pub image: Option<FeedImage>,
    pub categories: Option<Vec<FeedCategory>>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedMedia {
    pub url: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedImage {
    pub url: Option<String>,
}

/// A feed category: human `label` plus machine `term`.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct FeedCategory {
    pub label: Option<String>,
    pub term: Option<String>,
}

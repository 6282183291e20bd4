//! Shared types consumed by the page renderer.
//!
//! These types are serialized to the JSON index (camelCase, matching the
//! template layer's field names) and must stay stable across releases.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Provenance of a post.
///
/// Local markdown posts were migrated from Hashnode and keep that tag; feed
/// posts come from the freeCodeCamp News author feed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PostSource {
    Hashnode,
    #[serde(rename = "freecodecamp")]
    FreeCodeCamp,
}

impl PostSource {
    pub fn as_str(self) -> &'static str {
        match self {
            PostSource::Hashnode => "hashnode",
            PostSource::FreeCodeCamp => "freecodecamp",
        }
    }
}

/// A tag attached to a post. `slug` is the identity; `name` is for display.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct Tag {
    pub name: String,
    pub slug: String,
}

impl Tag {
    pub fn new(name: impl Into<String>, slug: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            slug: slug.into(),
        }
    }
}

/// A tag plus the number of posts carrying it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TagWithCount {
    pub name: String,
    pub slug: String,
    pub count: usize,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CoverImage {
    pub url: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub alt: Option<String>,
}

/// The unified post record used by the blog index and listing pages.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LightweightPost {
    /// Unique across the merged collection. Feed posts carry a namespace prefix.
    pub id: String,
    pub data: PostData,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PostData {
    pub slug: String,
    pub title: String,
    pub brief: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cover_image: Option<CoverImage>,
    #[serde(default)]
    pub tags: Vec<Tag>,
    pub published_at: DateTime<Utc>,
    /// Minutes, always at least 1.
    pub reading_time: u32,
    pub source: PostSource,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub external_url: Option<String>,
}

impl LightweightPost {
    pub fn has_tag(&self, slug: &str) -> bool {
        self.data.tags.iter().any(|t| t.slug == slug)
    }
}
